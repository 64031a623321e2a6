//! Core domain types for Word Guess
//!
//! Words, hint flags, keyboard state, the guess evaluator and the puzzle
//! state machine. Nothing here performs I/O.

mod difficulty;
mod evaluator;
mod game;
mod keyboard;
mod letter;
mod word;

pub use difficulty::Difficulty;
pub use evaluator::{Evaluation, Evaluator, GuessError, GuessRow, MAX_ROWS, Outcome};
pub use game::{Game, GameStatus, SavedGame};
pub use keyboard::{ALPHABET, KeyboardLayout, KeyboardState};
pub use letter::{LetterClass, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};
