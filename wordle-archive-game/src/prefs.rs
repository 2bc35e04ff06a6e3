//! Player preferences persisted beside the archive.
use serde::{Deserialize, Serialize};

use crate::ArchiveStorage;
use crate::store::ArchiveError;

pub const FIRST_TIME_KEY: &str = "first-time";
pub const DARK_MODE_KEY: &str = "dark-mode";
pub const COLORBLIND_MODE_KEY: &str = "colorblind-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Gates the intro overlay.
    pub first_time: bool,
    pub dark_mode: bool,
    pub colorblind_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            first_time: true,
            dark_mode: false,
            colorblind_mode: false,
        }
    }
}

fn read_flag<S: ArchiveStorage>(storage: &S, key: &str, default: bool) -> Result<bool, ArchiveError> {
    let raw = storage.read(key).map_err(ArchiveError::storage)?;
    Ok(raw.map_or(default, |text| {
        serde_json::from_str(&text).unwrap_or_else(|_| {
            log::warn!("ignoring unreadable {key} value '{text}'");
            default
        })
    }))
}

fn write_flag<S: ArchiveStorage>(storage: &S, key: &str, value: bool) -> Result<(), ArchiveError> {
    let json = serde_json::to_string(&value)?;
    storage.write(key, &json).map_err(ArchiveError::storage)
}

impl Preferences {
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    pub fn load<S: ArchiveStorage>(storage: &S) -> Result<Self, ArchiveError> {
        let defaults = Self::default();
        Ok(Self {
            first_time: read_flag(storage, FIRST_TIME_KEY, defaults.first_time)?,
            dark_mode: read_flag(storage, DARK_MODE_KEY, defaults.dark_mode)?,
            colorblind_mode: read_flag(storage, COLORBLIND_MODE_KEY, defaults.colorblind_mode)?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if serialization or the storage backend fails.
    pub fn save<S: ArchiveStorage>(&self, storage: &S) -> Result<(), ArchiveError> {
        write_flag(storage, FIRST_TIME_KEY, self.first_time)?;
        write_flag(storage, DARK_MODE_KEY, self.dark_mode)?;
        write_flag(storage, COLORBLIND_MODE_KEY, self.colorblind_mode)
    }

    pub fn dismiss_intro(&mut self) {
        self.first_time = false;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_colorblind_mode(&mut self) {
        self.colorblind_mode = !self.colorblind_mode;
    }
}
