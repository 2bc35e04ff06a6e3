use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if no window is available, the timer cannot be scheduled,
/// or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        return;
    };
    let classes = root.class_list();
    let _ = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Query string of the current location, including the leading `?`.
#[must_use]
pub fn location_search() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Replace the query string without reloading, adding a history entry.
pub fn push_query(query: &str) {
    let Some(history) = window().and_then(|win| win.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(query)) {
        log::warn!("could not update address bar: {}", js_error_message(&err));
    }
}

/// Write `text` via `navigator.clipboard.writeText`, logging failures.
pub fn copy_to_clipboard(text: &str) {
    let Some(win) = window() else {
        return;
    };
    let write = || -> Result<Promise, JsValue> {
        let clipboard = js_sys::Reflect::get(&win.navigator(), &JsValue::from_str("clipboard"))?;
        let write_text: Function =
            js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
        write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()
    };
    match write() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {}", js_error_message(&err));
            }
        }),
        Err(err) => log::warn!("clipboard unavailable: {}", js_error_message(&err)),
    }
}
