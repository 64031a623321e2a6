//! TUI application state and logic

use crate::core::{GuessError, Outcome, WORD_LENGTH};
use crate::output::formatters::praise;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        let description = app.session.game().difficulty().description();
        app.add_message(description, MessageStyle::Info);
        app.add_message("Type a word and press Enter", MessageStyle::Info);
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reveal(),
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('d') if ctrl => self.cycle_difficulty(),
            KeyCode::Char('k') if ctrl => self.toggle_layout(),
            KeyCode::Char(c) if !ctrl => self.type_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn type_letter(&mut self, c: char) {
        if self.session.game().is_over() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input_buffer.len() >= WORD_LENGTH {
            return;
        }

        let Ok(letter) = u8::try_from(c.to_ascii_uppercase()) else {
            return;
        };
        if let Err(err) = self.session.game().check_letter(letter) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.push(char::from(letter));
    }

    pub fn submit(&mut self) {
        if self.session.game().is_over() {
            self.add_message("Press Ctrl-N for a new puzzle", MessageStyle::Info);
            return;
        }

        let guess = self.input_buffer.clone();
        match self.session.submit(&guess) {
            Ok(outcome) => {
                self.input_buffer.clear();
                match outcome {
                    Outcome::InProgress => {}
                    Outcome::Won => {
                        let guesses = self.session.game().rows().len();
                        self.add_message(praise(guesses), MessageStyle::Success);
                        self.add_message("Ctrl-N for a new puzzle", MessageStyle::Info);
                    }
                    Outcome::Lost => {
                        let text = format!("The word was {}", self.session.game().secret());
                        self.add_message(&text, MessageStyle::Error);
                        self.add_message("Ctrl-N for a new puzzle", MessageStyle::Info);
                    }
                }
            }
            Err(GuessError::InvalidInput(_)) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.save();
    }

    pub fn reveal(&mut self) {
        if self.session.forfeit() {
            let text = format!("The word was {}", self.session.game().secret());
            self.input_buffer.clear();
            self.add_message(&text, MessageStyle::Info);
            self.save();
        }
    }

    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();
        match self.session.new_puzzle() {
            Ok(()) => {
                let text = format!("Puzzle #{}", self.session.game().puzzle_number());
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.save();
    }

    /// Move to the next difficulty, starting a new puzzle under it
    pub fn cycle_difficulty(&mut self) {
        let difficulty = self.session.settings().difficulty.next();
        self.input_buffer.clear();
        self.messages.clear();
        match self.session.set_difficulty(difficulty) {
            Ok(()) => {
                self.add_message(difficulty.description(), MessageStyle::Info);
                let text = format!("Puzzle #{}", self.session.game().puzzle_number());
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.save();
    }

    pub fn toggle_layout(&mut self) {
        let layout = self.session.keyboard_layout().toggled();
        self.session.set_keyboard_layout(layout);
        self.save();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn save(&mut self) {
        if let Err(err) = self.session.save() {
            self.add_message(&format!("Could not save: {err}"), MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    app.session.save()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::{Difficulty, GameStatus, KeyboardLayout};
    use crate::storage::Store;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_app(dir: &std::path::Path, difficulty: Difficulty) -> App {
        let dictionary = Dictionary::new(
            words_from_slice(&["grape"]),
            words_from_slice(&["crane", "drape"]),
        );
        let settings = Settings {
            difficulty,
            ..Settings::default()
        };
        let (session, _) = Session::open(
            Store::new(dir),
            dictionary,
            settings,
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_is_uppercased_and_capped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);

        type_word(&mut app, "cran3es");
        assert_eq!(app.input_buffer, "CRANE");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "CRAN");
    }

    #[test]
    fn enter_submits_and_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.game().rows().len(), 1);

        type_word(&mut app, "grape");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.game().status(), GameStatus::Won);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Info));
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));

        // Typing is ignored once the puzzle is over
        type_word(&mut app, "a");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn short_word_keeps_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);

        type_word(&mut app, "cra");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_buffer, "CRA");
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("Not enough letters")
        );
    }

    #[test]
    fn harder_mode_blocks_disabled_letters() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Harder);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        type_word(&mut app, "c");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn ctrl_r_reveals_and_ctrl_n_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);

        ctrl(&mut app, 'r');
        assert_eq!(app.session.game().status(), GameStatus::Forfeited);
        assert_eq!(app.session.log().forfeit_count, 1);

        ctrl(&mut app, 'n');
        assert!(!app.session.game().is_over());
        assert!(app.session.game().rows().is_empty());
    }

    #[test]
    fn ctrl_d_cycles_difficulty_and_saves_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "gr");

        ctrl(&mut app, 'd');
        assert_eq!(app.session.game().difficulty(), Difficulty::Hard);
        assert!(app.session.game().rows().is_empty());
        assert!(app.input_buffer.is_empty());
        assert_eq!(
            app.messages.first().map(|m| m.text.as_str()),
            Some(Difficulty::Hard.description())
        );

        ctrl(&mut app, 'd');
        ctrl(&mut app, 'd');
        assert_eq!(app.session.game().difficulty(), Difficulty::Normal);

        ctrl(&mut app, 'd');
        let saved = Store::new(dir.path()).load_settings().unwrap();
        assert_eq!(saved.difficulty, Difficulty::Hard);
    }

    #[test]
    fn ctrl_k_toggles_layout_and_keeps_puzzle() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'k');

        assert_eq!(app.session.keyboard_layout(), KeyboardLayout::Alphabet);
        assert_eq!(app.session.game().rows().len(), 1);
        let saved = Store::new(dir.path()).load_settings().unwrap();
        assert_eq!(saved.keyboard_layout, KeyboardLayout::Alphabet);

        ctrl(&mut app, 'k');
        assert_eq!(app.session.keyboard_layout(), KeyboardLayout::Qwerty);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = test_app(dir.path(), Difficulty::Normal);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), Difficulty::Normal);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "5");
    }
}
