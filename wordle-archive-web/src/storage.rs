//! Browser implementations of the engine's platform traits.
//!
//! Progress lives in `window.localStorage` under the same keys the engine
//! uses in memory, so a page reload picks up exactly where play stopped.

use wordle_archive_game::{ArchiveStorage, BundledData, GameEngine};

use crate::dom;

/// `localStorage`-backed key/value store.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebArchiveStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Storage(String),
}

fn storage() -> Result<web_sys::Storage, WebStorageError> {
    dom::local_storage().map_err(|err| WebStorageError::Unavailable(dom::js_error_message(&err)))
}

impl ArchiveStorage for WebArchiveStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        storage()?
            .get_item(key)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        storage()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }
}

/// Engine over the bundled word lists and browser storage.
#[must_use]
pub const fn create_web_engine() -> GameEngine<BundledData, WebArchiveStorage> {
    GameEngine::new(BundledData, WebArchiveStorage)
}
