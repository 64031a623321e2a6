//! TUI rendering with ratatui
//!
//! Guess grid on the left, keyboard and messages on the right, and a
//! statistics strip along the bottom.

use super::app::{App, MessageStyle};
use crate::core::{LetterClass, LetterState, MAX_ROWS, WORD_LENGTH};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let title = format!(
        "🔤 WORD GUESS #{} - {}",
        game.puzzle_number(),
        game.difficulty()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: &LetterState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state.class() {
        LetterClass::PositionMatch => base.fg(Color::Black).bg(Color::Green),
        LetterClass::ContainMatch => base.fg(Color::Black).bg(Color::Yellow),
        LetterClass::NoMatch if state.disabled => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        LetterClass::NoMatch => base.fg(Color::White).bg(Color::DarkGray),
        LetterClass::Blank => base.fg(Color::White),
    }
}

fn tile(state: &LetterState) -> Span<'static> {
    Span::styled(format!(" {} ", state.letter), tile_style(state))
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let mut lines = Vec::with_capacity(MAX_ROWS * 2);

    for row in game.rows() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for state in row {
            spans.push(tile(state));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !game.is_over() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        let typed: Vec<char> = app.input_buffer.chars().collect();
        for i in 0..WORD_LENGTH {
            let letter = typed.get(i).copied().unwrap_or('_');
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    for _ in lines.len() / 2..MAX_ROWS {
        lines.push(Line::from(Span::styled(
            " ·   ·   ·   ·   · ",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(5),    // Messages or share text
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);

    if let Some(text) = app.session.share_text() {
        render_share(f, &text, chunks[1]);
    } else {
        render_messages(f, app, chunks[1]);
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.game().keyboard();
    let lines: Vec<Line> = keyboard
        .rows(app.session.keyboard_layout())
        .iter()
        .map(|row| Line::from(row.iter().map(|key| tile(key)).collect::<Vec<_>>()))
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_share(f: &mut Frame, text: &str, area: Rect) {
    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share | Ctrl-N: New Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let log = app.session.log();
    let stats_text = format!(
        "Played: {} | Win: {:.0}% | Streak: {}",
        log.games_played,
        log.win_percentage(),
        log.win_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let most = log
        .win_guess_count_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    let distribution: Vec<Span> = log
        .win_guess_count_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Span::styled(
                format!("{}{} ", i + 1, create_progress_bar(count, most, 3)),
                Style::default().fg(Color::Green),
            )
        })
        .collect();
    let distribution = Paragraph::new(Line::from(distribution)).alignment(Alignment::Center);
    f.render_widget(distribution, chunks[1]);

    let help_text = "Enter: Submit | Ctrl-R: Reveal | Ctrl-N: New | Ctrl-D: Difficulty | Ctrl-K: Keys | Esc: Quit";
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_styles_follow_class() {
        let mut state = LetterState::new(b'A');
        assert_eq!(tile_style(&state).bg, None);

        state.no_match = true;
        assert_eq!(tile_style(&state).bg, Some(Color::DarkGray));

        state.disabled = true;
        assert!(tile_style(&state).add_modifier.contains(Modifier::CROSSED_OUT));

        state.contain_match = true;
        assert_eq!(tile_style(&state).bg, Some(Color::Yellow));

        state.position_match = true;
        assert_eq!(tile_style(&state).bg, Some(Color::Green));
    }
}
