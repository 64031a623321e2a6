//! Cumulative statistics across puzzles

use crate::core::{MAX_ROWS, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Statistics record persisted between sessions
///
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameLog {
    pub games_played: u32,
    pub win_streak: u32,
    pub max_win_streak: u32,
    pub invalid_word_count: u32,
    pub win_count: u32,
    pub forfeit_count: u32,
    pub loss_count: u32,
    /// Accepted guesses across all games
    pub guess_count: u32,
    /// Wins by number of guesses, index 0 is a first-guess win
    pub win_guess_count_distribution: [u32; MAX_ROWS],
    /// Fewest guesses each word was solved in
    pub solved_words: BTreeMap<String, usize>,
    pub last_updated: u64,
    pub last_win: u64,
}

impl Default for GameLog {
    fn default() -> Self {
        Self {
            games_played: 0,
            win_streak: 0,
            max_win_streak: 0,
            invalid_word_count: 0,
            win_count: 0,
            forfeit_count: 0,
            loss_count: 0,
            guess_count: 0,
            win_guess_count_distribution: [0; MAX_ROWS],
            solved_words: BTreeMap::new(),
            last_updated: now_millis(),
            last_win: 0,
        }
    }
}

impl GameLog {
    /// Record a win in `guesses` guesses (1-6)
    pub fn record_win(&mut self, word: &Word, guesses: usize) {
        self.games_played += 1;
        self.win_count += 1;
        self.win_streak += 1;
        self.max_win_streak = self.max_win_streak.max(self.win_streak);
        self.last_win = now_millis();

        if let Some(slot) = guesses
            .checked_sub(1)
            .and_then(|i| self.win_guess_count_distribution.get_mut(i))
        {
            *slot += 1;
        }

        self.solved_words
            .entry(word.text().to_string())
            .and_modify(|best| *best = (*best).min(guesses))
            .or_insert(guesses);

        self.touch();
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.win_streak = 0;
        self.loss_count += 1;
        self.touch();
    }

    /// Record a revealed solution; the win streak is left alone
    pub fn record_forfeit(&mut self) {
        self.games_played += 1;
        self.forfeit_count += 1;
        self.touch();
    }

    pub fn record_guess(&mut self) {
        self.guess_count += 1;
        self.touch();
    }

    pub fn record_invalid_word(&mut self) {
        self.invalid_word_count += 1;
        self.touch();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Wins as a percentage of games played, 0 when nothing was played
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.win_count) / f64::from(self.games_played) * 100.0
        }
    }

    fn touch(&mut self) {
        self.last_updated = now_millis();
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
