use thiserror::Error;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Errors raised when a board cannot host a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum BoardError {
    #[error("board bounds are inverted: x {min_x}..={max_x}, y {min_y}..={max_y}")]
    InvertedBounds {
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    },
    #[error("board needs at least {required} cells, got {actual}")]
    TooSmall { required: usize, actual: usize },
    #[error("board spans more cells than can be counted: x {min_x}..={max_x}, y {min_y}..={max_y}")]
    TooLarge {
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    },
}

/// Minimum playable area: one snake segment plus one food cell.
pub const MIN_BOARD_CELLS: usize = 2;

/// Fixed rectangular play area with inclusive bounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl Board {
    /// Creates a board from inclusive bounds.
    ///
    /// Spans whose cell count does not fit `u32` per axis or `usize` overall
    /// are rejected, so `width`, `height` and `area` never overflow.
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Result<Self, BoardError> {
        if max_x < min_x || max_y < min_y {
            return Err(BoardError::InvertedBounds {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }

        let too_large = BoardError::TooLarge {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        let columns = max_x.abs_diff(min_x).checked_add(1).ok_or(too_large)?;
        let rows = max_y.abs_diff(min_y).checked_add(1).ok_or(too_large)?;
        let actual = usize::try_from(columns)
            .ok()
            .zip(usize::try_from(rows).ok())
            .and_then(|(columns, rows)| columns.checked_mul(rows))
            .ok_or(too_large)?;

        let board = Self {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        if actual < MIN_BOARD_CELLS {
            return Err(BoardError::TooSmall {
                required: MIN_BOARD_CELLS,
                actual,
            });
        }

        Ok(board)
    }

    /// Creates a `width` x `height` board anchored at the origin.
    pub fn with_size(width: u16, height: u16) -> Result<Self, BoardError> {
        Self::new(
            0,
            i32::from(width) - 1,
            0,
            i32::from(height) - 1,
        )
    }

    #[must_use]
    pub fn min_x(self) -> i32 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(self) -> i32 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(self) -> i32 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(self) -> i32 {
        self.max_y
    }

    /// Number of columns.
    #[must_use]
    pub fn width(self) -> u32 {
        self.max_x.abs_diff(self.min_x) + 1
    }

    /// Number of rows.
    #[must_use]
    pub fn height(self) -> u32 {
        self.max_y.abs_diff(self.min_y) + 1
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn area(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }

    /// Starting cell for a fresh snake.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: self.min_x + (self.width() / 2) as i32,
            y: self.min_y + (self.height() / 2) as i32,
        }
    }

    /// Iterates over every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Position { x, y }))
    }
}
