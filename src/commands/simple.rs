//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess or command per line.

use crate::core::{Difficulty, Outcome};
use crate::output::{print_board, print_keyboard, print_outcome, print_stats};
use crate::session::Session;
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(String),
    Reveal,
    New,
    Stats,
    Mode(Option<Difficulty>),
    Quit,
    Empty,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let lower = line.to_lowercase();
        if let Some(level) = lower.strip_prefix("mode ") {
            return Self::Mode(Difficulty::from_str(level.trim(), true).ok());
        }
        match lower.as_str() {
            "" => Self::Empty,
            "mode" => Self::Mode(None),
            "reveal" | "r" => Self::Reveal,
            "new" | "n" => Self::New,
            "stats" | "s" => Self::Stats,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the line-mode game on stdin
///
/// # Errors
/// Returns an error if reading input or saving the session fails.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, stdin.lock())
}

/// Run the line-mode game on any line source, saving after every change
///
/// # Errors
/// Returns an error if reading input or saving the session fails.
pub fn run_simple_with<R: BufRead>(session: &mut Session, mut input: R) -> Result<()> {
    println!("\n╔════════════════════════════════════════════════╗");
    println!("║               Word Guess - Simple              ║");
    println!("╚════════════════════════════════════════════════╝\n");
    println!("Difficulty: {}", session.game().difficulty().description());
    println!("Type a 5-letter guess, or 'reveal', 'new', 'stats', 'mode <level>', 'quit'.\n");

    print_state(session);

    let mut line = String::new();
    loop {
        print!("{} ", "guess>".bright_cyan());
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Stats => print_stats(session.log()),
            Command::Mode(None) => println!("Modes: normal, hard, harder"),
            Command::Mode(Some(difficulty)) => {
                session.set_difficulty(difficulty)?;
                println!("\n{}", difficulty.description());
                println!("🔄 New puzzle #{}\n", session.game().puzzle_number());
                print_state(session);
            }
            Command::New => {
                session.new_puzzle()?;
                println!("\n🔄 New puzzle #{}\n", session.game().puzzle_number());
                print_state(session);
            }
            Command::Reveal => {
                if session.forfeit() {
                    print_finish(session);
                } else {
                    println!("The puzzle is already finished. Type 'new' to play again.");
                }
            }
            Command::Guess(guess) => match session.submit(&guess) {
                Ok(Outcome::InProgress) => print_state(session),
                Ok(_) => {
                    print_board(session.game().rows());
                    print_finish(session);
                }
                Err(err) => println!("{} {err}", "✗".red().bold()),
            },
        }

        session.save()?;
    }

    session.save()?;
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_state(session: &Session) {
    let game = session.game();
    print_board(game.rows());
    println!();
    print_keyboard(game.keyboard(), session.keyboard_layout());
    println!();
}

fn print_finish(session: &Session) {
    let game = session.game();
    print_outcome(game.status(), game.secret().text(), game.rows().len());

    if let Some(text) = session.share_text() {
        println!("\n{text}\n");
    }
    println!("Type 'new' for another puzzle or 'quit' to exit.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::Store;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session(dir: &std::path::Path) -> Session {
        let dictionary = Dictionary::new(
            words_from_slice(&["grape"]),
            words_from_slice(&["crane", "sloth"]),
        );
        Session::open(
            Store::new(dir),
            dictionary,
            Settings::default(),
            StdRng::seed_from_u64(5),
        )
        .unwrap()
        .0
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  QUIT\n"), Command::Quit);
        assert_eq!(Command::parse("reveal"), Command::Reveal);
        assert_eq!(Command::parse("n"), Command::New);
        assert_eq!(Command::parse("stats"), Command::Stats);
        assert_eq!(Command::parse("\n"), Command::Empty);
        assert_eq!(
            Command::parse("mode Harder"),
            Command::Mode(Some(Difficulty::Harder))
        );
        assert_eq!(Command::parse("mode easy"), Command::Mode(None));
        assert_eq!(
            Command::parse("Crane\n"),
            Command::Guess("Crane".to_string())
        );
    }

    #[test]
    fn plays_a_game_from_lines() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        let input = Cursor::new("crane\nqqqqq\ngrape\nquit\n");
        run_simple_with(&mut session, input).unwrap();

        assert!(session.game().is_over());
        assert_eq!(session.log().win_count, 1);
        assert_eq!(session.log().invalid_word_count, 1);
        assert!(dir.path().join("game-log.json").exists());
    }

    #[test]
    fn reveal_then_end_of_input() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        run_simple_with(&mut session, Cursor::new("reveal\n")).unwrap();

        assert_eq!(session.log().forfeit_count, 1);
    }

    #[test]
    fn mode_switches_difficulty_and_saves_it() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        run_simple_with(&mut session, Cursor::new("crane\nmode hard\nquit\n")).unwrap();

        assert_eq!(session.game().difficulty(), Difficulty::Hard);
        assert!(session.game().rows().is_empty());
        let saved = Store::new(dir.path()).load_settings().unwrap();
        assert_eq!(saved.difficulty, Difficulty::Hard);
    }
}
