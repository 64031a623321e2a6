//! Persistence of statistics, settings and the in-progress game

mod game_log;
mod store;

pub use game_log::GameLog;
pub use store::{Store, StoreError};
