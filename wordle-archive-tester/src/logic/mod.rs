pub mod player;
pub mod reports;
pub mod scenarios;
pub mod tester;

pub use player::TesterAssets;
pub use scenarios::{find_scenario, list_scenarios};
pub use tester::*;
