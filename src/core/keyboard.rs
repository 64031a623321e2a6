//! Cumulative keyboard hint state
//!
//! One entry per letter A-Z holding the best hint seen so far in the
//! current puzzle. Flags only ever get set; the evaluator returns a fresh
//! snapshot rather than mutating the caller's copy.

use super::letter::LetterState;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The 26 uppercase letters keyboard state is keyed by
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
const ALPHABET_ROWS: [&str; 3] = ["ABCDEFGHI", "JKLMNOPQR", "STUVWXYZ"];

/// Key arrangement used when drawing the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    #[default]
    Qwerty,
    Alphabet,
}

impl KeyboardLayout {
    /// The other arrangement
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Qwerty => Self::Alphabet,
            Self::Alphabet => Self::Qwerty,
        }
    }
}

/// Best-known hint for every letter of the alphabet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState {
    letters: [LetterState; 26],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    /// A keyboard with no hints
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: (*ALPHABET).map(LetterState::new),
        }
    }

    /// State for an uppercase letter, `None` outside A-Z
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<&LetterState> {
        Self::index_of(letter).map(|i| &self.letters[i])
    }

    pub(crate) fn get_mut(&mut self, letter: u8) -> Option<&mut LetterState> {
        Self::index_of(letter).map(move |i| &mut self.letters[i])
    }

    /// All entries in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &LetterState> {
        self.letters.iter()
    }

    /// Letters that carry a contain or position hint
    pub fn hinted_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters
            .iter()
            .filter(|state| state.is_hinted())
            .map(|state| state.letter as u8)
    }

    /// Whether typing `letter` is barred
    #[must_use]
    pub fn is_disabled(&self, letter: u8) -> bool {
        self.get(letter).is_some_and(|state| state.disabled)
    }

    /// Entries grouped into display rows for the given layout
    #[must_use]
    pub fn rows(&self, layout: KeyboardLayout) -> Vec<Vec<&LetterState>> {
        let rows = match layout {
            KeyboardLayout::Qwerty => QWERTY_ROWS,
            KeyboardLayout::Alphabet => ALPHABET_ROWS,
        };

        rows.iter()
            .map(|row| row.bytes().filter_map(|letter| self.get(letter)).collect())
            .collect()
    }

    fn index_of(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClass;

    #[test]
    fn new_keyboard_is_blank() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.iter().count(), 26);
        assert!(keyboard.iter().all(|s| s.class() == LetterClass::Blank));
        assert_eq!(keyboard.hinted_letters().count(), 0);
    }

    #[test]
    fn get_is_keyed_by_uppercase_letter() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.get(b'A').map(|s| s.letter), Some('A'));
        assert_eq!(keyboard.get(b'Z').map(|s| s.letter), Some('Z'));
        assert!(keyboard.get(b'a').is_none());
        assert!(keyboard.get(b'!').is_none());
    }

    #[test]
    fn hinted_and_disabled_letters() {
        let mut keyboard = KeyboardState::new();
        keyboard.get_mut(b'R').unwrap().contain_match = true;
        keyboard.get_mut(b'E').unwrap().position_match = true;
        keyboard.get_mut(b'X').unwrap().disabled = true;

        let hinted: Vec<u8> = keyboard.hinted_letters().collect();
        assert_eq!(hinted, vec![b'E', b'R']);
        assert!(keyboard.is_disabled(b'X'));
        assert!(!keyboard.is_disabled(b'R'));
    }

    #[test]
    fn rows_cover_every_letter_once() {
        let keyboard = KeyboardState::new();
        for layout in [KeyboardLayout::Qwerty, KeyboardLayout::Alphabet] {
            let mut letters: Vec<char> = keyboard
                .rows(layout)
                .into_iter()
                .flatten()
                .map(|s| s.letter)
                .collect();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), 26, "{layout:?} layout is missing keys");
        }
    }

    #[test]
    fn qwerty_first_row() {
        let keyboard = KeyboardState::new();
        let rows = keyboard.rows(KeyboardLayout::Qwerty);
        let first: String = rows[0].iter().map(|s| s.letter).collect();
        assert_eq!(first, "QWERTYUIOP");
    }
}
