//! JSON files in the data directory
//!
//! Every file is written to a temporary sibling first and then renamed over
//! the target, so a crash never leaves a half-written file behind.

use crate::config::Settings;
use crate::core::SavedGame;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::GameLog;

const GAME_LOG_FILE: &str = "game-log.json";
const GAME_STATE_FILE: &str = "game-state.json";
const SETTINGS_FILE: &str = "settings.json";

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("the answer list is empty")]
    NoPuzzles,
}

/// Reads and writes the game's JSON files under one directory
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the statistics record, or the default if none was saved
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load_game_log(&self) -> Result<GameLog, StoreError> {
        Ok(self.read_json(GAME_LOG_FILE)?.unwrap_or_default())
    }

    /// # Errors
    /// Returns `StoreError` if the file cannot be written.
    pub fn save_game_log(&self, log: &GameLog) -> Result<(), StoreError> {
        self.write_json(GAME_LOG_FILE, log)
    }

    /// Load the in-progress game, if one was saved
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load_game(&self) -> Result<Option<SavedGame>, StoreError> {
        self.read_json(GAME_STATE_FILE)
    }

    /// # Errors
    /// Returns `StoreError` if the file cannot be written.
    pub fn save_game(&self, game: &SavedGame) -> Result<(), StoreError> {
        self.write_json(GAME_STATE_FILE, game)
    }

    /// Discard the saved game
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists and cannot be removed.
    pub fn clear_game(&self) -> Result<(), StoreError> {
        let path = self.root.join(GAME_STATE_FILE);
        match fs::remove_file(&path) {
            Err(source) if source.kind() != io::ErrorKind::NotFound => {
                Err(StoreError::Io { path, source })
            }
            _ => Ok(()),
        }
    }

    /// Load settings, or the defaults if none were saved
    ///
    /// # Errors
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> Result<Settings, StoreError> {
        Ok(self.read_json(SETTINGS_FILE)?.unwrap_or_default())
    }

    /// # Errors
    /// Returns `StoreError` if the file cannot be written.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.write_json(SETTINGS_FILE, settings)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        let path = self.root.join(name);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let path = self.root.join(name);
        let io_error = |source: io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(io_error)?;

        let temp_file = NamedTempFile::new_in(&self.root).map_err(io_error)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
                StoreError::Json {
                    path: path.clone(),
                    source,
                }
            })?;
            writer.flush().map_err(io_error)?;
        }

        temp_file
            .persist(&path)
            .map_err(|err| io_error(err.error))?;
        Ok(())
    }
}
