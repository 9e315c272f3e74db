use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

use crate::board::{Board, BoardError};

/// Default board width in cells.
pub const DEFAULT_BOARD_WIDTH: u16 = 20;

/// Default board height in cells.
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Random draws attempted before food placement enumerates free cells.
pub const MAX_FOOD_SAMPLES: usize = 64;

/// Column budget for a high-score holder's name.
pub const MAX_PLAYER_NAME_WIDTH: usize = 16;

/// Shown in place of an empty high-score holder name.
pub const PLACEHOLDER_PLAYER_NAME: &str = "-";

/// Errors raised while validating runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("tick interval must be at least {minimum} ms, got {requested} ms")]
    TickTooShort { requested: u64, minimum: u64 },
}

/// Validated settings for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub board: Board,
    pub tick_interval: Duration,
}

impl GameConfig {
    /// Builds a config from a board size and tick cadence.
    pub fn new(width: u16, height: u16, tick_ms: u64) -> Result<Self, ConfigError> {
        if tick_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::TickTooShort {
                requested: tick_ms,
                minimum: MIN_TICK_INTERVAL_MS,
            });
        }

        Ok(Self {
            board: Board::with_size(width, height)?,
            tick_interval: Duration::from_millis(tick_ms),
        })
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_high_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on black, yellow high score.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_score: Color::White,
    hud_high_score: Color::Yellow,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Two terminal columns per grid cell keep cells roughly square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "●";
