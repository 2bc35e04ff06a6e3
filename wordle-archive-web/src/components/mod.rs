use wordle_archive_game::Status;

pub mod board;
pub mod day_nav;
pub mod end_game;
pub mod header;
pub mod info;
pub mod keyboard;
pub mod modal;
pub mod settings;

/// CSS modifier for a scored tile or key.
#[must_use]
pub const fn status_class(status: Status, colorblind: bool) -> &'static str {
    match (status, colorblind) {
        (Status::Green, false) => "status-green",
        (Status::Green, true) => "status-orange",
        (Status::Yellow, false) => "status-yellow",
        (Status::Yellow, true) => "status-blue",
        (Status::Gray, _) => "status-gray",
        (Status::Unguessed, _) => "status-unguessed",
    }
}
