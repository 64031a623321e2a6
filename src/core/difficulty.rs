//! Difficulty rules

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How strictly previous hints constrain later guesses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Standard rules
    #[default]
    Normal,
    /// Revealed hints must be used in subsequent guesses
    Hard,
    /// Hard, plus letters known to be absent can no longer be typed
    Harder,
}

impl Difficulty {
    /// Player-facing description of the rules
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "Standard Wordle rules.",
            Self::Hard => "Any revealed hints must be used in subsequent guesses.",
            Self::Harder => {
                "Any revealed hints must be used in subsequent guesses. \
                 You can't reuse letters that aren't in the solution."
            }
        }
    }

    /// Whether every hinted letter must appear in the next guess
    #[must_use]
    pub const fn requires_hints(self) -> bool {
        matches!(self, Self::Hard | Self::Harder)
    }

    /// Whether letters confirmed absent become disabled
    #[must_use]
    pub const fn disables_absent_letters(self) -> bool {
        matches!(self, Self::Harder)
    }

    /// The next level, wrapping from harder back to normal
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::Hard,
            Self::Hard => Self::Harder,
            Self::Harder => Self::Normal,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Harder => "harder",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_flags() {
        assert!(!Difficulty::Normal.requires_hints());
        assert!(Difficulty::Hard.requires_hints());
        assert!(Difficulty::Harder.requires_hints());

        assert!(!Difficulty::Normal.disables_absent_letters());
        assert!(!Difficulty::Hard.disables_absent_letters());
        assert!(Difficulty::Harder.disables_absent_letters());
    }

    #[test]
    fn next_cycles_through_levels() {
        assert_eq!(Difficulty::Normal.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Harder);
        assert_eq!(Difficulty::Harder.next(), Difficulty::Normal);
    }

    #[test]
    fn serde_names_match_display() {
        for difficulty in [Difficulty::Normal, Difficulty::Hard, Difficulty::Harder] {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{difficulty}\""));
        }
    }
}
