//! Formatting utilities for terminal output

use crate::core::{GuessRow, MAX_ROWS};
use crate::storage::GameLog;

/// Name shown at the top of share text
pub const SHARE_TITLE: &str = "Word Guess";

/// Format a scored row as share squares
///
/// # Examples
/// ```
/// use word_guess::core::{Difficulty, Evaluator, KeyboardState, Word};
/// use word_guess::output::formatters::row_to_squares;
///
/// let evaluation = Evaluator::new(Difficulty::Normal)
///     .evaluate(
///         &Word::new("grape").unwrap(),
///         &Word::new("crane").unwrap(),
///         &KeyboardState::new(),
///         0,
///     )
///     .unwrap();
/// assert_eq!(row_to_squares(&evaluation.row), "⬛🟩🟩⬛🟩");
/// ```
#[must_use]
pub fn row_to_squares(row: &GuessRow) -> String {
    row.iter()
        .map(|tile| tile.class().share_square())
        .collect()
}

/// Build the text players paste to share a finished puzzle
///
/// `failed` replaces the guess count with `X`, for lost and forfeited games.
#[must_use]
pub fn share_text(rows: &[GuessRow], puzzle_number: usize, failed: bool) -> String {
    let score = if failed {
        "X".to_string()
    } else {
        rows.len().to_string()
    };

    let mut text = format!("{SHARE_TITLE} {puzzle_number} {score}/{MAX_ROWS}\n\n");
    for row in rows {
        text.push_str(&row_to_squares(row));
        text.push('\n');
    }
    text
}

/// Congratulation for a puzzle solved in `guesses` rows
#[must_use]
pub const fn praise(guesses: usize) -> &'static str {
    match guesses {
        1 => "🏆 Genius!",
        2 => "⭐ Magnificent!",
        3 => "💫 Impressive!",
        4 => "✨ Splendid!",
        5 => "👍 Great!",
        _ => "😅 Phew!",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Summary lines for the statistics panel, label and value
#[must_use]
pub fn stat_lines(log: &GameLog) -> Vec<(&'static str, String)> {
    vec![
        ("Played", log.games_played.to_string()),
        ("Win %", format!("{:.0}", log.win_percentage())),
        ("Current streak", log.win_streak.to_string()),
        ("Max streak", log.max_win_streak.to_string()),
        ("Wins", log.win_count.to_string()),
        ("Losses", log.loss_count.to_string()),
        ("Forfeits", log.forfeit_count.to_string()),
        ("Guesses", log.guess_count.to_string()),
        ("Invalid words", log.invalid_word_count.to_string()),
    ]
}
