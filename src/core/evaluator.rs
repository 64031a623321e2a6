//! Guess evaluation
//!
//! Scores one guess against the secret, producing the tiles for the guess
//! row, a new keyboard snapshot and the outcome signal.
//!
//! # Algorithm
//! Positions are processed left to right. For each letter:
//! 1. If the secret contains it, the tile and key get a contain match, plus
//!    a position match when the secret has it at the same index. Otherwise
//!    both get a no match (and the key is disabled under harder rules).
//! 2. If the guess holds more copies of the letter than the secret and this
//!    is not its first occurrence, earlier copies lose their contain match.
//!    When some copy in the row is a position match, the current copy
//!    loses its contain match as well.
//!
//! Tiles left without any hint after correction are marked as no match.
//! Keyboard entries are never corrected: they keep the best hint seen.

use super::difficulty::Difficulty;
use super::keyboard::KeyboardState;
use super::letter::LetterState;
use super::word::{WORD_LENGTH, Word, WordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of guesses a player gets per puzzle
pub const MAX_ROWS: usize = 6;

/// One scored guess
pub type GuessRow = [LetterState; WORD_LENGTH];

/// Result of the latest guess for the puzzle as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Everything produced by one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub row: GuessRow,
    pub keyboard: KeyboardState,
    pub outcome: Outcome,
}

/// Reasons a guess cannot be evaluated or submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WordError),
    #[error("the puzzle is already finished")]
    GameOver,
    #[error("all 6 rows have been used")]
    RowsExhausted,
    #[error("must include all previous hints (missing {0})")]
    MissingHints(String),
    #[error("{0} is disabled")]
    LetterDisabled(char),
    #[error("{0} is not a word")]
    NotAWord(Word),
    #[error("you already tried {0}")]
    AlreadyGuessed(Word),
}

/// Scores guesses under a fixed difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    difficulty: Difficulty,
}

impl Evaluator {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Evaluate `guess` against `secret` as the zero-based row `row`
    ///
    /// The caller's keyboard is left untouched; the updated copy is returned
    /// in the `Evaluation`.
    ///
    /// # Errors
    /// Returns `GuessError::RowsExhausted` if `row` is past the last row.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{Difficulty, Evaluator, KeyboardState, LetterClass, Outcome, Word};
    ///
    /// let secret = Word::new("robot").unwrap();
    /// let guess = Word::new("booth").unwrap();
    /// let evaluation = Evaluator::new(Difficulty::Normal)
    ///     .evaluate(&secret, &guess, &KeyboardState::new(), 0)
    ///     .unwrap();
    ///
    /// let classes: Vec<LetterClass> = evaluation.row.iter().map(|t| t.class()).collect();
    /// assert_eq!(classes[1], LetterClass::PositionMatch);
    /// assert_eq!(classes[4], LetterClass::NoMatch);
    /// assert_eq!(evaluation.outcome, Outcome::InProgress);
    /// ```
    pub fn evaluate(
        &self,
        secret: &Word,
        guess: &Word,
        keyboard: &KeyboardState,
        row: usize,
    ) -> Result<Evaluation, GuessError> {
        if row >= MAX_ROWS {
            return Err(GuessError::RowsExhausted);
        }

        let secret_counts = secret.char_counts();
        let guess_counts = guess.char_counts();
        let mut tiles: GuessRow = (*guess.chars()).map(LetterState::new);
        let mut keyboard = keyboard.clone();

        for (i, &letter) in guess.chars().iter().enumerate() {
            let key = keyboard.get_mut(letter);

            if secret.has_letter(letter) {
                let at_position = secret.char_at(i) == letter;
                tiles[i].contain_match = true;
                tiles[i].position_match = at_position;
                if let Some(key) = key {
                    key.contain_match = true;
                    key.position_match |= at_position;
                }
            } else {
                tiles[i].no_match = true;
                if let Some(key) = key {
                    key.no_match = true;
                    key.disabled |= self.difficulty.disables_absent_letters();
                }
            }

            let in_guess = guess_counts.get(&letter).copied().unwrap_or(0);
            let in_secret = secret_counts.get(&letter).copied().unwrap_or(0);
            let repeated = guess
                .first_position_of(letter)
                .is_some_and(|first| first < i);

            if in_guess > in_secret && repeated {
                let ch = char::from(letter);
                for earlier in tiles[..i].iter_mut().filter(|t| t.letter == ch) {
                    earlier.contain_match = false;
                }
                if tiles[..=i].iter().any(|t| t.letter == ch && t.position_match) {
                    tiles[i].contain_match = false;
                }
            }
        }

        for tile in &mut tiles {
            if !tile.is_hinted() {
                tile.no_match = true;
            }
        }

        let outcome = if guess == secret {
            Outcome::Won
        } else if row + 1 == MAX_ROWS {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        Ok(Evaluation {
            row: tiles,
            keyboard,
            outcome,
        })
    }

    /// Evaluate from raw text, validating both words first
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` if either word is not five letters
    /// A-Z, or `GuessError::RowsExhausted` as for [`Evaluator::evaluate`].
    pub fn evaluate_text(
        &self,
        secret: &str,
        guess: &str,
        keyboard: &KeyboardState,
        row: usize,
    ) -> Result<Evaluation, GuessError> {
        let secret = Word::new(secret)?;
        let guess = Word::new(guess)?;
        self.evaluate(&secret, &guess, keyboard, row)
    }
}
