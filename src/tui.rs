//! TUI (Terminal User Interface) module for the word game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiModel`: Screen state and key handling, independent of the terminal
//! - `TuiInterface`: Owns the terminal, renders the model and implements `GameInterface`
//!
//! # State Machine
//! - `EnteringGuess` → (game ends) → `GameOver`
//! - `GameOver` only accepts the quit keys

use crate::error::GameError;
use crate::game_state::{GameInterface, GameState, GameStatus, GuessRecord, UserAction};
use crate::scoring::Feedback;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const BOARD_BORDER_HEIGHT: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const SUBMIT_BUTTON_WIDTH: u16 = 12;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const BUTTON_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LetterState {
    Empty,
    Entered,
    ExactMatch,       // Green
    PresentElsewhere, // Yellow
    Absent,           // Gray
}

impl LetterState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::ExactMatch => (Color::Green, Color::Black),
            Self::PresentElsewhere => (Color::Yellow, Color::Black),
            Self::Absent => (Color::Gray, Color::White),
        }
    }
}

impl From<Feedback> for LetterState {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::ExactMatch => Self::ExactMatch,
            Feedback::PresentElsewhere => Self::PresentElsewhere,
            Feedback::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GuessRow {
    letters: Vec<char>,
    states: Vec<LetterState>,
}

impl GuessRow {
    fn from_record(record: &GuessRecord) -> Self {
        Self {
            letters: record.guess.chars().map(|c| c.to_ascii_uppercase()).collect(),
            states: record
                .score
                .feedback()
                .iter()
                .copied()
                .map(LetterState::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    /// Game has ended - end message stored in `message`
    GameOver { won: bool },
}

/// Everything the screen shows, plus the key handling that edits it.
#[derive(Debug)]
pub struct TuiModel {
    rows: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    word_length: usize,
    max_attempts: u32,
    attempts_remaining: u32,
    message: String,
    error_message: String,
    status: String,
}

impl TuiModel {
    #[must_use]
    pub fn new(word_length: usize, max_attempts: u32) -> Self {
        Self {
            rows: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            word_length,
            max_attempts,
            attempts_remaining: max_attempts,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    /// Refresh the board from the game.
    pub fn sync(&mut self, game: &GameState) {
        self.rows = game.history().iter().map(GuessRow::from_record).collect();
        self.word_length = game.word_length();
        self.max_attempts = game.max_attempts();
        self.attempts_remaining = game.attempts_remaining();
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, TuiState::GameOver { .. })
    }

    fn show_game_over(&mut self, won: bool, message: &str) {
        self.state = TuiState::GameOver { won };
        self.current_input.clear();
        self.error_message.clear();
        self.message = message.to_string();
    }

    fn should_show_current_input(&self) -> bool {
        matches!(self.state, TuiState::EnteringGuess) && self.attempts_remaining > 0
    }

    /// Apply one key press. Returns an action for the host loop when the key
    /// submits a guess or quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info_log!("handle_key() - Ctrl+C pressed, returning Quit");
            return Some(UserAction::Quit);
        }
        match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::GameOver { .. } => Self::handle_game_over_input(key),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!(
            "handle_guess_input() - Processing key: {:?}, current_input: '{}'",
            key.code,
            self.current_input
        );

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if Self::has_modifier_keys(&key) {
                    debug_log!(
                        "handle_guess_input() - Ignoring character with modifier: {:?}",
                        key.modifiers
                    );
                } else if self.current_input.len() < self.word_length {
                    self.current_input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == self.word_length => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess: '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = format!("Guess must be exactly {} letters!", self.word_length);
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Quit");
                return Some(UserAction::Quit);
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    /// Apply a left click. A click on the submit button acts like Enter.
    pub fn handle_click(&mut self, position: Position, submit_button: Rect) -> Option<UserAction> {
        if !matches!(self.state, TuiState::EnteringGuess) || !submit_button.contains(position) {
            return None;
        }
        debug_log!("handle_click() - Submit button clicked at {:?}", position);
        self.handle_guess_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(UserAction::Quit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

/// Main TUI interface component.
///
/// Owns the terminal for its whole lifetime and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    model: TuiModel,
    submit_button: Rect,
}

impl TuiInterface {
    /// Switch the terminal to raw mode and the alternate screen.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be configured.
    pub fn new(word_length: usize, max_attempts: u32) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            model: TuiModel::new(word_length, max_attempts),
            submit_button: Rect::default(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let model = &self.model;
        let area = self.terminal.draw(|f| render(f, model))?.area;
        self.submit_button = screen_layout(area, model.max_attempts).submit_button;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Wait briefly for one key press or click and hand it to the model.
    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }

                // Filter out garbage from escape sequences when alt-tabbing
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }

                Ok(self.model.handle_key(key))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => Ok(self
                .model
                .handle_click(Position::new(mouse.column, mouse.row), self.submit_button)),
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    /// Redraw and read keys until the model yields an action.
    fn next_action(&mut self) -> UserAction {
        loop {
            if self.draw().is_err() {
                info_log!("next_action() - Draw failed, returning Quit");
                return UserAction::Quit;
            }
            match self.handle_input() {
                Ok(Some(action)) => return action,
                Ok(None) => {}
                Err(_e) => {
                    info_log!("next_action() - Error handling input, returning Quit");
                    return UserAction::Quit;
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_new_game(&mut self, game: &GameState) {
        self.model.sync(game);
        self.model.message = format!(
            "Guess the {}-letter word in {} attempts.",
            game.word_length(),
            game.max_attempts()
        );
        self.model.status = format!("Ready - Enter your first {}-letter guess", game.word_length());
        self.draw_or_log();
    }

    fn read_guess(&mut self, game: &GameState) -> Option<UserAction> {
        self.model.sync(game);
        Some(self.next_action())
    }

    fn display_score(&mut self, game: &GameState, record: &GuessRecord) {
        self.model.sync(game);
        self.model.status = format!(
            "Last guess: {} ({})",
            record.guess.to_uppercase(),
            record.score
        );
        self.draw_or_log();
    }

    fn display_error(&mut self, game: &GameState, error: &GameError) {
        self.model.sync(game);
        self.model.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_game_over(&mut self, game: &GameState, message: &str) {
        self.model.sync(game);
        let won = game.status() == GameStatus::Won;
        self.model.show_game_over(won, message);
        self.model.status = if won {
            "Game Over - You won!".to_string()
        } else {
            "Game Over - Out of attempts".to_string()
        };
        self.draw_or_log();
    }

    fn wait_for_quit(&mut self) {
        while self.next_action() != UserAction::Quit {}
    }

    fn display_exit_message(&mut self) {
        self.model.message = "Exiting...".to_string();
        self.model.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScreenLayout {
    title: Rect,
    board: Rect,
    info: Rect,
    status: Rect,
    instructions: Rect,
    submit_button: Rect,
}

#[allow(clippy::cast_possible_truncation)]
fn screen_layout(area: Rect, max_attempts: u32) -> ScreenLayout {
    let board_height = (max_attempts as u16)
        .saturating_mul(ROW_SPACING)
        .saturating_add(BOARD_BORDER_HEIGHT);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(board_height), // Game board
            Constraint::Min(4),               // Info panel (takes remaining space)
            Constraint::Length(3),            // Status line
            Constraint::Length(3),            // Instructions + submit button
        ])
        .split(area);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SUBMIT_BUTTON_WIDTH)])
        .split(chunks[4]);

    ScreenLayout {
        title: chunks[0],
        board: chunks[1],
        info: chunks[2],
        status: chunks[3],
        instructions: bottom[0],
        submit_button: bottom[1],
    }
}

/// Render the complete UI layout.
fn render(f: &mut Frame, model: &TuiModel) {
    let layout = screen_layout(f.area(), model.max_attempts);

    render_title(f, layout.title, model.word_length);
    render_board(f, layout.board, model);
    render_info(f, layout.info, model);
    render_status(f, layout.status, model);
    render_instructions(f, layout.instructions, model);
    render_submit_button(f, layout.submit_button, model);
}

fn render_title(f: &mut Frame, area: Rect, word_length: usize) {
    let title = Paragraph::new(format!("{word_length}-LETTER WORDLE"))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_board(f: &mut Frame, area: Rect, model: &TuiModel) {
    let block = Block::default().title("Guesses").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let available_rows = (inner.height / ROW_SPACING) as usize;
    let showing_current_input = model.should_show_current_input();
    let rows_needed = model.rows.len() + usize::from(showing_current_input);

    // Prioritize the most recent guesses when the board is too small
    let skip_count = rows_needed.saturating_sub(available_rows);

    for (display_index, row) in model.rows.iter().skip(skip_count).enumerate() {
        let spans = row_spans(
            row.letters.iter().copied(),
            row.states.iter().copied(),
            model.word_length,
        );
        render_line(f, inner, display_index, spans);
    }

    if showing_current_input {
        let display_index = model.rows.len() - skip_count.min(model.rows.len());
        let letters = model.current_input.chars();
        let states = std::iter::repeat(LetterState::Entered);
        render_line(
            f,
            inner,
            display_index,
            row_spans(letters, states, model.word_length),
        );
    }
}

fn row_spans(
    letters: impl Iterator<Item = char>,
    states: impl Iterator<Item = LetterState>,
    word_length: usize,
) -> Vec<Span<'static>> {
    let mut letters = letters.fuse();
    let mut states = states.fuse();
    let mut spans = vec![Span::raw("  ")];
    for _ in 0..word_length {
        let letter = letters.next().unwrap_or(' ');
        let (bg_color, fg_color) = states.next().unwrap_or(LetterState::Empty).colors();
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default().fg(fg_color).bg(bg_color),
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

#[allow(clippy::cast_possible_truncation)]
fn render_line(f: &mut Frame, area: Rect, row_index: usize, spans: Vec<Span>) {
    let y = area.y + (row_index as u16 * ROW_SPACING);
    if y >= area.y + area.height {
        return;
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        },
    );
}

fn render_info(f: &mut Frame, area: Rect, model: &TuiModel) {
    let mut lines = Vec::new();

    if !model.message.is_empty() {
        let style = match model.state {
            TuiState::GameOver { won: true } => SUCCESS_STYLE,
            TuiState::GameOver { won: false } => FAILURE_STYLE,
            TuiState::EnteringGuess => MESSAGE_STYLE,
        };
        lines.push(Line::from(vec![Span::styled(model.message.clone(), style)]));
    }

    if !model.error_message.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            model.error_message.clone(),
            ERROR_STYLE,
        )]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, model: &TuiModel) {
    let status_text = format!(
        "{} | Attempts remaining: {}/{}",
        if model.status.is_empty() { "Ready" } else { model.status.as_str() },
        model.attempts_remaining,
        model.max_attempts
    );
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, model: &TuiModel) {
    let text = match model.state {
        TuiState::EnteringGuess => format!(
            "Type your {}-letter guess | ENTER / click Submit | BACKSPACE: Delete | ESC: Quit",
            model.word_length
        ),
        TuiState::GameOver { .. } => "Q / ESC: Quit".to_string(),
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_submit_button(f: &mut Frame, area: Rect, model: &TuiModel) {
    let style = match model.state {
        TuiState::EnteringGuess => BUTTON_STYLE,
        TuiState::GameOver { .. } => Style::default().fg(Color::DarkGray),
    };
    let button = Paragraph::new("Submit")
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}
