#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wordle_archive_game::{ArchiveStorage, GameState};
use wordle_archive_web::dom;
use wordle_archive_web::storage::{WebArchiveStorage, create_web_engine};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset_storage() {
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.clear();
    }
}

#[wasm_bindgen_test]
fn dom_helpers_find_browser_globals() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[wasm_bindgen_test]
fn local_storage_roundtrips_values() {
    reset_storage();
    let storage = WebArchiveStorage;
    assert_eq!(storage.read("current-streak").expect("read"), None);
    storage.write("current-streak", "42").expect("write");
    assert_eq!(
        storage.read("current-streak").expect("read").as_deref(),
        Some("42")
    );
}

#[wasm_bindgen_test]
fn won_day_survives_reopen() {
    reset_storage();
    let engine = create_web_engine();
    let mut controller = engine.open(20, 10).expect("open");
    for ch in "BRINE".chars() {
        controller.add_letter(ch);
    }
    controller.submit_row().expect("winning guess");

    let reopened = engine.open(20, 10).expect("reopen");
    assert_eq!(reopened.session().state(), GameState::Won);
    assert!(reopened.session().is_saved_solution());
}

#[wasm_bindgen_test]
fn root_class_toggles() {
    dom::set_root_class("dark", true);
    let root = dom::document()
        .and_then(|doc| doc.document_element())
        .expect("root element");
    assert!(root.class_list().contains("dark"));
    dom::set_root_class("dark", false);
    assert!(!root.class_list().contains("dark"));
}
