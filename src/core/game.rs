//! Puzzle state machine
//!
//! A `Game` owns the secret, the submitted rows and the keyboard, and is the
//! only place guesses are validated before evaluation. Status moves from
//! `InProgress` to one terminal state exactly once.

use super::difficulty::Difficulty;
use super::evaluator::{Evaluator, GuessError, GuessRow, MAX_ROWS, Outcome};
use super::keyboard::KeyboardState;
use super::word::Word;
use crate::wordlists::Dictionary;
use serde::{Deserialize, Serialize};

/// Where a puzzle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum GameStatus {
    /// Waiting for the guess that fills `row` (0-based)
    InProgress { row: usize },
    Won,
    Lost,
    /// The player revealed the solution
    Forfeited,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// Persisted form of a game; the secret is re-derived from the puzzle number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub puzzle_number: usize,
    pub difficulty: Difficulty,
    pub rows: Vec<GuessRow>,
    pub keyboard: KeyboardState,
    pub status: GameStatus,
}

/// One puzzle being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle_number: usize,
    secret: Word,
    evaluator: Evaluator,
    rows: Vec<GuessRow>,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(puzzle_number: usize, secret: Word, difficulty: Difficulty) -> Self {
        Self {
            puzzle_number,
            secret,
            evaluator: Evaluator::new(difficulty),
            rows: Vec::with_capacity(MAX_ROWS),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress { row: 0 },
        }
    }

    /// Rebuild a game from its saved form
    ///
    /// Rows beyond the grid are dropped and an in-progress row index is
    /// clamped to the rows actually present.
    #[must_use]
    pub fn from_saved(saved: SavedGame, secret: Word) -> Self {
        let mut rows = saved.rows;
        rows.truncate(MAX_ROWS);

        let status = match saved.status {
            GameStatus::InProgress { .. } if rows.len() >= MAX_ROWS => GameStatus::Lost,
            GameStatus::InProgress { .. } => GameStatus::InProgress { row: rows.len() },
            terminal => terminal,
        };

        Self {
            puzzle_number: saved.puzzle_number,
            secret,
            evaluator: Evaluator::new(saved.difficulty),
            rows,
            keyboard: saved.keyboard,
            status,
        }
    }

    #[must_use]
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            puzzle_number: self.puzzle_number,
            difficulty: self.difficulty(),
            rows: self.rows.clone(),
            keyboard: self.keyboard.clone(),
            status: self.status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn puzzle_number(&self) -> usize {
        self.puzzle_number
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.evaluator.difficulty()
    }

    /// Submitted rows, oldest first
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Whether `letter` may be typed under the current rules
    ///
    /// # Errors
    /// Returns `GuessError::LetterDisabled` for a letter the harder
    /// difficulty has ruled out.
    pub fn check_letter(&self, letter: u8) -> Result<(), GuessError> {
        let letter = letter.to_ascii_uppercase();
        if self.difficulty().disables_absent_letters() && self.keyboard.is_disabled(letter) {
            return Err(GuessError::LetterDisabled(char::from(letter)));
        }
        Ok(())
    }

    /// Validate and evaluate a guess, appending its row on success
    ///
    /// Rejected guesses leave the game unchanged and do not use up a row.
    ///
    /// # Errors
    /// In order of checking: `GameOver`, `InvalidInput`, `MissingHints`
    /// (hard and harder), `LetterDisabled` (harder), `NotAWord`,
    /// `AlreadyGuessed`.
    pub fn submit(&mut self, guess: &str, dictionary: &Dictionary) -> Result<Outcome, GuessError> {
        let GameStatus::InProgress { row } = self.status else {
            return Err(GuessError::GameOver);
        };

        let guess = Word::new(guess)?;

        if self.difficulty().requires_hints() {
            let missing: Vec<String> = self
                .keyboard
                .hinted_letters()
                .filter(|&letter| !guess.has_letter(letter))
                .map(|letter| char::from(letter).to_string())
                .collect();
            if !missing.is_empty() {
                return Err(GuessError::MissingHints(missing.join(", ")));
            }
        }

        for &letter in guess.chars() {
            self.check_letter(letter)?;
        }

        if !dictionary.contains(&guess) {
            return Err(GuessError::NotAWord(guess));
        }

        if self.has_guessed(&guess) {
            return Err(GuessError::AlreadyGuessed(guess));
        }

        let evaluation = self
            .evaluator
            .evaluate(&self.secret, &guess, &self.keyboard, row)?;

        self.rows.push(evaluation.row);
        self.keyboard = evaluation.keyboard;
        self.status = match evaluation.outcome {
            Outcome::Won => GameStatus::Won,
            Outcome::Lost => GameStatus::Lost,
            Outcome::InProgress => GameStatus::InProgress { row: row + 1 },
        };

        Ok(evaluation.outcome)
    }

    /// Reveal the solution, ending an unfinished game
    ///
    /// Returns `false` if the game was already over.
    pub fn forfeit(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.status = GameStatus::Forfeited;
        true
    }

    fn has_guessed(&self, guess: &Word) -> bool {
        self.rows.iter().any(|row| {
            row.iter()
                .zip(guess.chars())
                .all(|(tile, &letter)| tile.letter == char::from(letter))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["grape", "crane", "trace", "slate", "allow"]),
            words_from_slice(&["sloth", "jumpy", "pride", "gripe", "grope", "drape", "shade"]),
        )
    }

    fn game(difficulty: Difficulty) -> Game {
        Game::new(3, Word::new("grape").unwrap(), difficulty)
    }

    #[test]
    fn new_game_starts_on_first_row() {
        let game = game(Difficulty::Normal);
        assert_eq!(game.status(), GameStatus::InProgress { row: 0 });
        assert!(game.rows().is_empty());
        assert!(!game.is_over());
        assert_eq!(game.puzzle_number(), 3);
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = game(Difficulty::Normal);
        assert_eq!(game.submit("crane", &dictionary()), Ok(Outcome::InProgress));
        assert_eq!(game.submit("grape", &dictionary()), Ok(Outcome::Won));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.rows().len(), 2);
    }

    #[test]
    fn six_misses_lose_on_sixth_row() {
        let mut game = game(Difficulty::Normal);
        let dictionary = dictionary();
        let guesses = ["crane", "trace", "slate", "sloth", "jumpy", "pride"];

        for (i, guess) in guesses.iter().enumerate() {
            let outcome = game.submit(guess, &dictionary).unwrap();
            if i + 1 < MAX_ROWS {
                assert_eq!(outcome, Outcome::InProgress, "row {i}");
                assert_eq!(game.status(), GameStatus::InProgress { row: i + 1 });
            } else {
                assert_eq!(outcome, Outcome::Lost);
            }
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.submit("grape", &dictionary), Err(GuessError::GameOver));
        assert_eq!(game.rows().len(), MAX_ROWS);
    }

    #[test]
    fn finished_game_rejects_submissions() {
        let mut game = game(Difficulty::Normal);
        game.submit("grape", &dictionary()).unwrap();
        assert_eq!(game.submit("crane", &dictionary()), Err(GuessError::GameOver));
        assert_eq!(game.rows().len(), 1);
    }

    #[test]
    fn rejections_do_not_consume_rows() {
        let mut game = game(Difficulty::Normal);
        let dictionary = dictionary();

        assert!(matches!(
            game.submit("grap", &dictionary),
            Err(GuessError::InvalidInput(_))
        ));
        assert_eq!(
            game.submit("zzzzz", &dictionary),
            Err(GuessError::NotAWord(Word::new("zzzzz").unwrap()))
        );

        game.submit("crane", &dictionary).unwrap();
        assert_eq!(
            game.submit("CRANE", &dictionary),
            Err(GuessError::AlreadyGuessed(Word::new("crane").unwrap()))
        );

        assert_eq!(game.rows().len(), 1);
        assert_eq!(game.status(), GameStatus::InProgress { row: 1 });
    }

    #[test]
    fn hard_mode_requires_previous_hints() {
        let mut game = game(Difficulty::Hard);
        let dictionary = dictionary();
        game.submit("crane", &dictionary).unwrap();

        // CRANE against GRAPE reveals A, E and R
        assert_eq!(
            game.submit("sloth", &dictionary),
            Err(GuessError::MissingHints("A, E, R".to_string()))
        );
        assert_eq!(game.submit("drape", &dictionary), Ok(Outcome::InProgress));
    }

    #[test]
    fn normal_mode_ignores_hints() {
        let mut game = game(Difficulty::Normal);
        let dictionary = dictionary();
        game.submit("crane", &dictionary).unwrap();
        assert_eq!(game.submit("sloth", &dictionary), Ok(Outcome::InProgress));
    }

    #[test]
    fn harder_mode_disables_absent_letters() {
        let mut game = game(Difficulty::Harder);
        let dictionary = dictionary();
        game.submit("crane", &dictionary).unwrap();

        assert_eq!(game.check_letter(b'c'), Err(GuessError::LetterDisabled('C')));
        assert!(game.check_letter(b'G').is_ok());

        // TRACE has every hint but reuses C
        assert_eq!(
            game.submit("trace", &dictionary),
            Err(GuessError::LetterDisabled('C'))
        );
        assert_eq!(game.submit("drape", &dictionary), Ok(Outcome::InProgress));
    }

    #[test]
    fn hard_mode_does_not_disable_letters() {
        let mut game = game(Difficulty::Hard);
        game.submit("crane", &dictionary()).unwrap();
        assert!(game.check_letter(b'C').is_ok());
    }

    #[test]
    fn forfeit_ends_game_once() {
        let mut game = game(Difficulty::Normal);
        assert!(game.forfeit());
        assert_eq!(game.status(), GameStatus::Forfeited);
        assert!(!game.forfeit());
        assert_eq!(game.submit("grape", &dictionary()), Err(GuessError::GameOver));
    }

    #[test]
    fn saved_round_trip_preserves_state() {
        let mut game = game(Difficulty::Harder);
        game.submit("crane", &dictionary()).unwrap();

        let saved = game.to_saved();
        let json = serde_json::to_string(&saved).unwrap();
        let restored: SavedGame = serde_json::from_str(&json).unwrap();
        let restored = Game::from_saved(restored, Word::new("grape").unwrap());

        assert_eq!(restored, game);
    }

    #[test]
    fn from_saved_repairs_row_index() {
        let mut game = game(Difficulty::Normal);
        game.submit("crane", &dictionary()).unwrap();

        let mut saved = game.to_saved();
        saved.status = GameStatus::InProgress { row: 4 };
        let restored = Game::from_saved(saved, Word::new("grape").unwrap());

        assert_eq!(restored.status(), GameStatus::InProgress { row: 1 });
    }

    #[test]
    fn status_serializes_with_tag() {
        let json = serde_json::to_value(GameStatus::InProgress { row: 2 }).unwrap();
        assert_eq!(json["state"], "inProgress");
        assert_eq!(json["row"], 2);

        let json = serde_json::to_value(GameStatus::Forfeited).unwrap();
        assert_eq!(json["state"], "forfeited");
    }
}
