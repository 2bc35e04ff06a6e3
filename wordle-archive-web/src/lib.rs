#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod input;
pub mod paths;
pub mod routing;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Apply the saved theme before the first paint
    if let Ok(prefs) = storage::create_web_engine().preferences() {
        dom::set_root_class("dark", prefs.dark_mode);
    }
    yew::Renderer::<app::App>::new().render();
}
