//! Word lists for Word Guess
//!
//! Secret words and the extra accepted guesses are embedded in the binary;
//! `Dictionary` wraps them for membership checks and puzzle selection.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
