//! Per-letter hint state
//!
//! The same flag set describes a tile in a guess row and a key on the
//! keyboard. Display is derived from the flags by priority:
//! position match > contain match > no match > blank.

use serde::{Deserialize, Serialize};

/// Hint flags for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterState {
    pub letter: char,
    pub contain_match: bool,
    pub position_match: bool,
    pub no_match: bool,
    /// Only set on keyboard entries, under the harder difficulty
    pub disabled: bool,
}

/// Visual category of a letter, highest priority wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterClass {
    Blank,
    NoMatch,
    ContainMatch,
    PositionMatch,
}

impl LetterState {
    /// A letter with no hints yet
    #[must_use]
    pub const fn new(letter: u8) -> Self {
        Self {
            letter: letter as char,
            contain_match: false,
            position_match: false,
            no_match: false,
            disabled: false,
        }
    }

    /// Display category for this letter
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{LetterClass, LetterState};
    ///
    /// let mut tile = LetterState::new(b'A');
    /// assert_eq!(tile.class(), LetterClass::Blank);
    ///
    /// tile.contain_match = true;
    /// tile.position_match = true;
    /// assert_eq!(tile.class(), LetterClass::PositionMatch);
    /// ```
    #[must_use]
    pub const fn class(&self) -> LetterClass {
        if self.position_match {
            LetterClass::PositionMatch
        } else if self.contain_match {
            LetterClass::ContainMatch
        } else if self.no_match {
            LetterClass::NoMatch
        } else {
            LetterClass::Blank
        }
    }

    /// Whether the letter carries a contain or position hint
    #[inline]
    #[must_use]
    pub const fn is_hinted(&self) -> bool {
        self.contain_match || self.position_match
    }
}

impl LetterClass {
    /// Share-text square for this class
    ///
    /// Anything without a hint renders as a miss.
    #[must_use]
    pub const fn share_square(self) -> char {
        match self {
            Self::PositionMatch => '🟩',
            Self::ContainMatch => '🟨',
            Self::NoMatch | Self::Blank => '⬛',
        }
    }
}
