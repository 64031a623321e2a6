//! Coloured terminal printers for rows, keyboard and statistics

use super::formatters::{create_progress_bar, praise, row_to_squares, stat_lines};
use crate::core::{GameStatus, GuessRow, KeyboardLayout, KeyboardState, LetterClass, LetterState};
use crate::storage::GameLog;
use colored::{ColoredString, Colorize};

/// A letter coloured by its hint, as a padded tile
#[must_use]
pub fn colored_tile(state: &LetterState) -> ColoredString {
    let text = format!(" {} ", state.letter);
    match state.class() {
        LetterClass::PositionMatch => text.black().on_green().bold(),
        LetterClass::ContainMatch => text.black().on_yellow().bold(),
        LetterClass::NoMatch if state.disabled => text.bright_black().strikethrough(),
        LetterClass::NoMatch => text.white().on_bright_black(),
        LetterClass::Blank => text.bright_white(),
    }
}

/// A scored row as a line of tiles followed by its share squares
#[must_use]
pub fn format_row(row: &GuessRow) -> String {
    let tiles: String = row.iter().map(|tile| colored_tile(tile).to_string()).collect();
    format!("{tiles}  {}", row_to_squares(row))
}

/// Print every submitted row, numbered
pub fn print_board(rows: &[GuessRow]) {
    for (i, row) in rows.iter().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), format_row(row));
    }
}

/// Print the keyboard in the chosen layout
pub fn print_keyboard(keyboard: &KeyboardState, layout: KeyboardLayout) {
    for (indent, row) in keyboard.rows(layout).iter().enumerate() {
        let keys: String = row.iter().map(|key| colored_tile(key).to_string()).collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
}

/// Print the end-of-puzzle banner
pub fn print_outcome(status: GameStatus, secret: &str, guesses: usize) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match status {
        GameStatus::Won => {
            println!("  {}", praise(guesses).bright_green().bold());
            println!(
                "  Solved {} in {} {}",
                secret.bright_yellow().bold(),
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("  {}", "❌ Out of guesses".red().bold());
            println!("  The word was {}", secret.bright_yellow().bold());
        }
        GameStatus::Forfeited => {
            println!("  {}", "🏳 Solution revealed".yellow().bold());
            println!("  The word was {}", secret.bright_yellow().bold());
        }
        GameStatus::InProgress { row } => {
            println!("  Still playing, on guess {}", row + 1);
        }
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the statistics record with its guess distribution
pub fn print_stats(log: &GameLog) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    for (label, value) in stat_lines(log) {
        println!("   {:<16}{}", format!("{label}:"), value.bright_yellow());
    }

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = log
        .win_guess_count_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    for (i, &count) in log.win_guess_count_distribution.iter().enumerate() {
        let bar = create_progress_bar(count, most, 30);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}

/// Print an error line to stderr
pub fn print_error(message: impl std::fmt::Display) {
    eprintln!("{} {message}", "error:".red().bold());
}

/// Print a warning line to stderr
pub fn print_warning(message: impl std::fmt::Display) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
