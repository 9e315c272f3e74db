use std::collections::VecDeque;

use crate::board::Position;
use crate::input::Direction;

/// Snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Returns the head position one step ahead in `direction`.
    ///
    /// `None` when the step leaves the `i32` coordinate range.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Option<Position> {
        let head = self.head();
        match direction {
            Direction::Up => Some(Position {
                x: head.x,
                y: head.y.checked_sub(1)?,
            }),
            Direction::Down => Some(Position {
                x: head.x,
                y: head.y.checked_add(1)?,
            }),
            Direction::Left => Some(Position {
                x: head.x.checked_sub(1)?,
                y: head.y,
            }),
            Direction::Right => Some(Position {
                x: head.x.checked_add(1)?,
                y: head.y,
            }),
        }
    }

    /// Returns true if moving the head onto `position` would hit the body.
    ///
    /// The tail is left out: it moves away during the same step, and food is
    /// never placed on it, so the snake cannot grow into its own tail cell.
    #[must_use]
    pub fn would_collide(&self, position: Position) -> bool {
        let body_without_tail = self.body.len() - 1;
        self.body
            .iter()
            .take(body_without_tail)
            .any(|segment| *segment == position)
    }

    /// Pushes `new_head` and drops the tail unless `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
