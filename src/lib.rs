//! Word Guess
//!
//! A five-letter word guessing game: score guesses against a secret word,
//! track the keyboard, and keep statistics across puzzles.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::{Difficulty, Evaluator, KeyboardState, Outcome, Word};
//!
//! let secret = Word::new("allow").unwrap();
//! let guess = Word::new("llama").unwrap();
//!
//! let evaluation = Evaluator::new(Difficulty::Normal)
//!     .evaluate(&secret, &guess, &KeyboardState::new(), 0)
//!     .unwrap();
//!
//! // The second L is in place; the extra A is scored as a miss
//! assert!(evaluation.row[1].position_match);
//! assert!(evaluation.row[2].no_match);
//! assert_eq!(evaluation.outcome, Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Saved statistics and games
pub mod storage;

// Settings and data directory
pub mod config;

// Game plus persistence, shared by both front ends
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
