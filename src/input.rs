use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthChar;

use crate::config::MAX_PLAYER_NAME_WIDTH;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    Quit,
    Confirm,
    Char(char),
    Backspace,
}

/// Maps a key press to a game command.
///
/// While `text_entry` is set, printable keys become [`GameInput::Char`] so a
/// player name can contain letters otherwise bound to movement.
#[must_use]
pub fn map_key(key: KeyEvent, text_entry: bool) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Backspace if text_entry => Some(GameInput::Backspace),
        KeyCode::Char(c) if text_entry => Some(GameInput::Char(c)),
        KeyCode::Char(c) => map_command_char(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn map_command_char(c: char) -> Option<GameInput> {
    match c {
        'w' | 'k' => Some(GameInput::Direction(Direction::Up)),
        's' | 'j' => Some(GameInput::Direction(Direction::Down)),
        'a' | 'h' => Some(GameInput::Direction(Direction::Left)),
        'd' | 'l' => Some(GameInput::Direction(Direction::Right)),
        'p' | ' ' => Some(GameInput::Pause),
        'r' => Some(GameInput::Restart),
        'q' => Some(GameInput::Quit),
        _ => None,
    }
}

/// Polls the terminal for the next mapped key press.
pub fn poll_input(timeout: Duration, text_entry: bool) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key, text_entry)),
        _ => Ok(None),
    }
}

/// Player name typed on the new-high-score prompt.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct NameEntry {
    text: String,
}

impl NameEntry {
    /// Appends a printable character while the name fits the column budget.
    pub fn push(&mut self, c: char) {
        if c.is_control() {
            return;
        }

        let width = self.width() + c.width().unwrap_or(0);
        if width <= MAX_PLAYER_NAME_WIDTH {
            self.text.push(c);
        }
    }

    pub fn pop(&mut self) {
        let _ = self.text.pop();
    }

    /// Display width in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.chars().map(|c| c.width().unwrap_or(0)).sum()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the typed name and leaves the entry empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
