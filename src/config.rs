//! Player settings and data directory resolution
//!
//! Settings are persisted next to the statistics and passed explicitly into
//! the game; core logic never reads them on its own.

use crate::core::{Difficulty, KeyboardLayout};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "WORD_GUESS_DATA_DIR";

const APP_DIR: &str = "word_guess";

/// Persisted player preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub keyboard_layout: KeyboardLayout,
}

impl Settings {
    /// Apply command-line overrides on top of saved settings
    #[must_use]
    pub fn with_overrides(
        self,
        difficulty: Option<Difficulty>,
        keyboard_layout: Option<KeyboardLayout>,
    ) -> Self {
        Self {
            difficulty: difficulty.unwrap_or(self.difficulty),
            keyboard_layout: keyboard_layout.unwrap_or(self.keyboard_layout),
        }
    }
}

/// Where game files live when `--data-dir` is not given
///
/// Checks `WORD_GUESS_DATA_DIR`, then the platform's local data directory,
/// then the home directory, falling back to `./.word_guess`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    let explicit = env::var_os(DATA_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    resolve_data_dir(explicit, dirs::data_local_dir(), dirs::home_dir())
}

fn resolve_data_dir(
    explicit: Option<PathBuf>,
    data_local: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(data_local) = data_local {
        return data_local.join(APP_DIR);
    }
    if let Some(home) = home {
        return home.join(format!(".{APP_DIR}"));
    }
    PathBuf::from(format!(".{APP_DIR}"))
}
