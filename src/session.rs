//! A player's session: the current puzzle plus everything persisted
//!
//! Both front ends drive the game through `Session`, which keeps the
//! statistics in step with each submission and writes state back to the
//! `Store` on `save`.

use crate::config::Settings;
use crate::core::{Difficulty, Game, GameStatus, GuessError, KeyboardLayout, Outcome};
use crate::output::formatters::share_text;
use crate::storage::{GameLog, Store, StoreError};
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;

/// Game, statistics and settings for one player
pub struct Session {
    store: Store,
    dictionary: Dictionary,
    settings: Settings,
    log: GameLog,
    game: Game,
    rng: StdRng,
}

/// Things worth telling the player about that happened while opening
#[derive(Debug, Default)]
pub struct OpenReport {
    /// Files that could not be read and were replaced with defaults
    pub recovered: Vec<StoreError>,
    /// Whether a saved in-progress game was picked up
    pub resumed: bool,
}

impl Session {
    /// Open a session, resuming the saved game when it matches `settings`
    ///
    /// Unreadable files are reported in the `OpenReport` and replaced with
    /// defaults rather than failing.
    ///
    /// # Errors
    /// Returns `StoreError::NoPuzzles` if the dictionary has no secret
    /// words to start a puzzle with.
    pub fn open(
        store: Store,
        dictionary: Dictionary,
        settings: Settings,
        mut rng: StdRng,
    ) -> Result<(Self, OpenReport), StoreError> {
        let mut report = OpenReport::default();

        let log = store.load_game_log().unwrap_or_else(|err| {
            report.recovered.push(err);
            GameLog::default()
        });

        let saved = store.load_game().unwrap_or_else(|err| {
            report.recovered.push(err);
            None
        });

        let resumed = saved
            .filter(|saved| saved.difficulty == settings.difficulty)
            .and_then(|saved| {
                let secret = dictionary.puzzle(saved.puzzle_number)?.clone();
                Some(Game::from_saved(saved, secret))
            });

        let game = match resumed {
            Some(game) => {
                report.resumed = true;
                game
            }
            None => fresh_game(&dictionary, settings.difficulty, &mut rng)?,
        };

        let session = Self {
            store,
            dictionary,
            settings,
            log,
            game,
            rng,
        };
        Ok((session, report))
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn log(&self) -> &GameLog {
        &self.log
    }

    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub const fn keyboard_layout(&self) -> KeyboardLayout {
        self.settings.keyboard_layout
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Submit a guess, updating statistics to match
    ///
    /// # Errors
    /// Returns the `GuessError` from [`Game::submit`]. A `NotAWord`
    /// rejection still counts toward the invalid-word statistic.
    pub fn submit(&mut self, guess: &str) -> Result<Outcome, GuessError> {
        let outcome = match self.game.submit(guess, &self.dictionary) {
            Ok(outcome) => outcome,
            Err(err) => {
                if matches!(err, GuessError::NotAWord(_)) {
                    self.log.record_invalid_word();
                }
                return Err(err);
            }
        };

        self.log.record_guess();
        match outcome {
            Outcome::Won => {
                let guesses = self.game.rows().len();
                self.log.record_win(self.game.secret(), guesses);
            }
            Outcome::Lost => self.log.record_loss(),
            Outcome::InProgress => {}
        }

        Ok(outcome)
    }

    /// Reveal the solution; counted as a forfeit if the game was unfinished
    pub fn forfeit(&mut self) -> bool {
        let forfeited = self.game.forfeit();
        if forfeited {
            self.log.record_forfeit();
        }
        forfeited
    }

    /// Abandon the current puzzle and draw a new one
    ///
    /// # Errors
    /// Returns `StoreError::NoPuzzles` if there are no secret words.
    pub fn new_puzzle(&mut self) -> Result<(), StoreError> {
        self.game = fresh_game(&self.dictionary, self.settings.difficulty, &mut self.rng)?;
        Ok(())
    }

    /// Switch difficulty; the current puzzle is discarded
    ///
    /// # Errors
    /// Returns `StoreError::NoPuzzles` if there are no secret words.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), StoreError> {
        self.settings.difficulty = difficulty;
        self.new_puzzle()
    }

    /// Switch the keyboard arrangement; the puzzle is kept
    pub const fn set_keyboard_layout(&mut self, layout: KeyboardLayout) {
        self.settings.keyboard_layout = layout;
    }

    /// Share text for a finished puzzle
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let failed = match self.game.status() {
            GameStatus::InProgress { .. } => return None,
            GameStatus::Won => false,
            GameStatus::Lost | GameStatus::Forfeited => true,
        };
        Some(share_text(
            self.game.rows(),
            self.game.puzzle_number(),
            failed,
        ))
    }

    /// Write statistics, settings and the current game to disk
    ///
    /// # Errors
    /// Returns `StoreError` if any file cannot be written.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save_game_log(&self.log)?;
        self.store.save_settings(&self.settings)?;
        self.store.save_game(&self.game.to_saved())
    }
}

fn fresh_game(
    dictionary: &Dictionary,
    difficulty: Difficulty,
    rng: &mut StdRng,
) -> Result<Game, StoreError> {
    let (number, secret) = dictionary
        .random_puzzle(rng)
        .ok_or(StoreError::NoPuzzles)?;
    Ok(Game::new(number, secret.clone(), difficulty))
}
