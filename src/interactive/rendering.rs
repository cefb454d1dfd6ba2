//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::CellStatus;
use crate::game::{Phase, PuzzleState};
use crate::net::Fetcher;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<F: Fetcher + ?Sized, R: Rng>(f: &mut Frame, app: &App<F, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app.game.state(), main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn tile_style(status: CellStatus) -> Style {
    let (fg, bg) = match status {
        CellStatus::Correct => (Color::Black, Color::Green),
        CellStatus::Misplaced => (Color::Black, Color::Yellow),
        CellStatus::Incorrect => (Color::White, Color::DarkGray),
        CellStatus::Empty => (Color::White, Color::Reset),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let config = state.config();
    let active_row = (state.phase() == Phase::Input).then(|| state.current_attempt());

    let mut lines = vec![Line::from("")];
    for row in 0..config.rows() {
        let letters = state.row_letters(row);
        let statuses = state.statuses(row);

        let mut spans = Vec::with_capacity(config.cols() * 2);
        for (col, (letter, status)) in letters.iter().zip(statuses).enumerate() {
            let mut style = tile_style(*status);
            if active_row == Some(row) && col == state.current_position() {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let text = letter.map_or_else(|| " · ".to_string(), |ch| format!(" {ch} "));
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel<F: Fetcher + ?Sized, R: Rng>(f: &mut Frame, app: &App<F, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app.game.state(), chunks[0]);
    render_keyboard(f, app.game.state(), chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let rows = state.config().rows();
    let used = state.submitted_rows();
    let progress_pct = (used * 100 / rows).min(100) as u16;

    let color = match state.phase() {
        Phase::Won => Color::Green,
        Phase::Lost => Color::Red,
        Phase::Input => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(progress_pct)
        .label(format!("{used}/{rows}"));

    f.render_widget(gauge, area);
}

/// Best status seen for each letter across submitted rows
fn letter_hints(state: &PuzzleState) -> FxHashMap<char, CellStatus> {
    let mut hints: FxHashMap<char, CellStatus> = FxHashMap::default();

    for row in 0..state.submitted_rows() {
        for (letter, status) in state.row_letters(row).iter().zip(state.statuses(row)) {
            let Some(ch) = letter else { continue };
            let entry = hints.entry(*ch).or_insert(*status);
            if hint_rank(*status) > hint_rank(*entry) {
                *entry = *status;
            }
        }
    }

    hints
}

const fn hint_rank(status: CellStatus) -> u8 {
    match status {
        CellStatus::Empty => 0,
        CellStatus::Incorrect => 1,
        CellStatus::Misplaced => 2,
        CellStatus::Correct => 3,
    }
}

fn render_keyboard(f: &mut Frame, state: &PuzzleState, area: Rect) {
    let hints = letter_hints(state);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|ch| {
                    let status = hints.get(&ch).copied().unwrap_or_default();
                    Span::styled(format!("{ch} "), tile_style(status))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages<F: Fetcher + ?Sized, R: Rng>(f: &mut Frame, app: &App<F, R>, area: Rect) {
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

fn render_status<F: Fetcher + ?Sized, R: Rng>(f: &mut Frame, app: &App<F, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state = app.game.state();
    let mode_text = match state.phase() {
        Phase::Input => "Mode: Playing",
        Phase::Won => "Mode: Won",
        Phase::Lost => "Mode: Lost",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let mut stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    if app.stats.games_won > 0 {
        stats_text.push_str(&format!(" | {}", app.stats.distribution_summary()));
    }
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if state.is_finished() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Erase"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
