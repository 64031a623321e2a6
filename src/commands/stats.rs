//! Statistics commands

use crate::output::print_stats;
use crate::storage::{GameLog, Store, StoreError};

/// Print the saved statistics
///
/// # Errors
/// Returns `StoreError` if the log exists but cannot be read.
pub fn show_stats(store: &Store) -> Result<GameLog, StoreError> {
    let log = store.load_game_log()?;
    print_stats(&log);
    Ok(log)
}

/// Clear the statistics and discard any saved game
///
/// # Errors
/// Returns `StoreError` if either file cannot be written or removed.
pub fn reset_stats(store: &Store) -> Result<(), StoreError> {
    store.save_game_log(&GameLog::default())?;
    store.clear_game()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Game, Word};

    #[test]
    fn reset_clears_log_and_game() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let mut log = GameLog::default();
        log.record_loss();
        store.save_game_log(&log).unwrap();
        let game = Game::new(0, Word::new("grape").unwrap(), Difficulty::Normal);
        store.save_game(&game.to_saved()).unwrap();

        reset_stats(&store).unwrap();

        assert_eq!(store.load_game_log().unwrap().games_played, 0);
        assert!(store.load_game().unwrap().is_none());
    }

    #[test]
    fn show_stats_reads_saved_log() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let mut log = GameLog::default();
        log.record_win(&Word::new("grape").unwrap(), 2);
        store.save_game_log(&log).unwrap();

        assert_eq!(show_stats(&store).unwrap().win_count, 1);
    }

    #[test]
    fn reset_without_files_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        reset_stats(&Store::new(dir.path().join("fresh"))).unwrap();
    }
}
