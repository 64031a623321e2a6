//! Accepted words and puzzle selection

use super::embedded::{ALLOWED, ANSWERS};
use super::loader::words_from_slice;
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;

/// The secret-word list plus every word accepted as a guess
///
/// A puzzle number is the secret's index in the answer list, so a saved
/// game can recover its secret.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from a secret-word list and extra accepted guesses
    ///
    /// Secret words are always accepted as guesses.
    #[must_use]
    pub fn new(answers: Vec<Word>, extra_guesses: Vec<Word>) -> Self {
        let accepted = answers.iter().cloned().chain(extra_guesses).collect();
        Self { answers, accepted }
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Custom secret words on top of the embedded accepted guesses
    ///
    /// The embedded secret words stay accepted as guesses.
    #[must_use]
    pub fn with_answers(answers: Vec<Word>) -> Self {
        let extra = words_from_slice(ANSWERS)
            .into_iter()
            .chain(words_from_slice(ALLOWED))
            .collect();
        Self::new(answers, extra)
    }

    /// Whether `word` is accepted as a guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of words accepted as guesses
    #[inline]
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// The secret for a puzzle number
    #[must_use]
    pub fn puzzle(&self, puzzle_number: usize) -> Option<&Word> {
        self.answers.get(puzzle_number)
    }

    /// Pick a random puzzle, returning its number and secret
    ///
    /// Returns `None` if the answer list is empty.
    pub fn random_puzzle<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, &Word)> {
        if self.answers.is_empty() {
            return None;
        }
        let puzzle_number = rng.random_range(0..self.answers.len());
        Some((puzzle_number, &self.answers[puzzle_number]))
    }
}
