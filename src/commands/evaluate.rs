//! One-shot evaluation of a guess sequence against a known secret

use crate::core::{Difficulty, Evaluator, GuessError, GuessRow, KeyboardState, Outcome, Word};

/// Rows and final keyboard produced by [`evaluate_guesses`]
#[derive(Debug, Clone)]
pub struct EvaluateReport {
    pub secret: Word,
    pub rows: Vec<GuessRow>,
    pub keyboard: KeyboardState,
    pub outcome: Outcome,
}

/// Score `guesses` in order against `secret`
///
/// The keyboard carries over from guess to guess exactly as in a game.
/// Guesses are not checked against a word list.
///
/// # Errors
/// Returns `GuessError::InvalidInput` for a malformed word, `GameOver` for
/// a guess after the puzzle was already won or lost, and `RowsExhausted`
/// past the sixth guess.
///
/// # Examples
/// ```
/// use word_guess::commands::evaluate_guesses;
/// use word_guess::core::{Difficulty, Outcome};
///
/// let report = evaluate_guesses("grape", &["crane", "grape"], Difficulty::Normal).unwrap();
/// assert_eq!(report.rows.len(), 2);
/// assert_eq!(report.outcome, Outcome::Won);
/// ```
pub fn evaluate_guesses<S: AsRef<str>>(
    secret: &str,
    guesses: &[S],
    difficulty: Difficulty,
) -> Result<EvaluateReport, GuessError> {
    let secret = Word::new(secret)?;
    let evaluator = Evaluator::new(difficulty);

    let mut report = EvaluateReport {
        secret,
        rows: Vec::with_capacity(guesses.len()),
        keyboard: KeyboardState::new(),
        outcome: Outcome::InProgress,
    };

    for guess in guesses {
        if report.outcome != Outcome::InProgress {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(guess.as_ref())?;
        let evaluation =
            evaluator.evaluate(&report.secret, &guess, &report.keyboard, report.rows.len())?;

        report.rows.push(evaluation.row);
        report.keyboard = evaluation.keyboard;
        report.outcome = evaluation.outcome;
    }

    Ok(report)
}
