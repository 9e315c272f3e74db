use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Position};
use crate::food::generate_food;
use crate::input::{direction_change_is_valid, Direction};
use crate::score::{HighScoreRecord, HighScoreStore};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to place food.
    BoardFull,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Paused or already over; nothing changed.
    Skipped,
    Moved,
    Ate,
    Ended(EndReason),
}

/// Complete mutable game state for one session.
///
/// A failed move leaves the snake where it was, so the final frame shows the
/// body just before the collision.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    pub direction: Direction,
    pub pending_direction: Direction,
    /// `None` only after the snake has filled the board.
    pub food: Option<Position>,
    pub score: u32,
    pub high_score: u32,
    pub high_score_player: String,
    pub new_high_score: bool,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
}

impl GameState {
    /// Creates a running game with a one-cell snake in the board center.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(board: Board, record: HighScoreRecord, rng: &mut R) -> Self {
        let snake = Snake::new(board.center());
        let food = generate_food(rng, board, &snake);

        Self {
            board,
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            score: 0,
            high_score: record.high_score,
            high_score_player: record.player,
            new_high_score: false,
            status: GameStatus::Running,
            end_reason: None,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        self.direction = self.pending_direction;
        let Some(new_head) = self
            .snake
            .next_head(self.direction)
            .filter(|head| self.board.contains(*head))
        else {
            return self.end(EndReason::WallCollision);
        };

        if self.snake.would_collide(new_head) {
            return self.end(EndReason::SelfCollision);
        }

        let ate = self.food == Some(new_head);
        self.snake.advance(new_head, ate);
        trace!("head moved to ({}, {}), ate: {ate}", new_head.x, new_head.y);

        if !ate {
            return TickOutcome::Moved;
        }

        self.score += 1;
        if self.score > self.high_score {
            if !self.new_high_score {
                info!("new high score reached, previous best {}", self.high_score);
            }
            self.high_score = self.score;
            self.new_high_score = true;
        }

        self.food = generate_food(rng, self.board, &self.snake);
        if self.food.is_none() {
            return self.end(EndReason::BoardFull);
        }

        TickOutcome::Ate
    }

    /// Queues a direction for the next tick.
    ///
    /// Returns `false` when the change is ignored: a reversal of the current
    /// direction, or any change while paused or after the game ended.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running
            || !direction_change_is_valid(self.direction, direction)
        {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Switches between running and paused; no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    /// Starts a fresh game on the same board, keeping the high score.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let record = self.high_score_record();
        *self = Self::new(self.board, record, rng);
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    /// Current best score and holder as a persistable record.
    #[must_use]
    pub fn high_score_record(&self) -> HighScoreRecord {
        HighScoreRecord {
            high_score: self.high_score,
            player: self.high_score_player.clone(),
        }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        info!(
            "game over ({reason:?}) with score {}, length {}",
            self.score,
            self.snake.len()
        );
        TickOutcome::Ended(reason)
    }
}

/// Read-only view of the game handed to the renderer once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: Board,
    pub snake: &'a Snake,
    pub direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub high_score: u32,
    pub high_score_player: &'a str,
    pub is_over: bool,
    pub is_paused: bool,
    pub is_new_high_score: bool,
    pub end_reason: Option<EndReason>,
}

/// Owns one game, its random source and its high-score store.
///
/// Single-threaded: wrap it in a mutex or keep it on one task if ticks and
/// commands can arrive from different threads.
#[derive(Debug)]
pub struct GameEngine<S, R = StdRng> {
    state: GameState,
    store: S,
    rng: R,
}

impl<S: HighScoreStore> GameEngine<S, StdRng> {
    /// Creates an engine seeded from the process-wide entropy source.
    #[must_use]
    pub fn new(board: Board, store: S) -> Self {
        Self::with_rng(board, store, StdRng::from_entropy())
    }

    /// Creates a reproducible engine for tests and replays.
    #[must_use]
    pub fn new_with_seed(board: Board, store: S, seed: u64) -> Self {
        Self::with_rng(board, store, StdRng::seed_from_u64(seed))
    }
}

impl<S: HighScoreStore, R: Rng> GameEngine<S, R> {
    /// Creates an engine, loading the high score from `store`.
    ///
    /// A failing store is logged and treated as holding no record.
    #[must_use]
    pub fn with_rng(board: Board, store: S, mut rng: R) -> Self {
        let record = match store.load() {
            Ok(record) => record,
            Err(error) => {
                warn!("failed to load high score, starting from zero: {error}");
                HighScoreRecord::default()
            }
        };
        let state = GameState::new(board, record, &mut rng);

        Self { state, store, rng }
    }

    /// Wraps an existing state, e.g. a hand-built position in tests.
    #[must_use]
    pub fn from_state(state: GameState, store: S, rng: R) -> Self {
        Self { state, store, rng }
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.state.tick(&mut self.rng)
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.state.set_direction(direction)
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    pub fn pause(&mut self) {
        self.state.pause();
    }

    pub fn resume(&mut self) {
        self.state.resume();
    }

    pub fn restart(&mut self) {
        info!("restarting game");
        self.state.restart(&mut self.rng);
    }

    /// Persists the pending high score under `name`.
    ///
    /// Ignored (returns `false`) when no new high score is pending or the
    /// trimmed name is empty. A store failure is logged; the in-memory high
    /// score stays valid for the session either way.
    pub fn save_high_score(&mut self, name: &str) -> bool {
        let name = name.trim();
        if !self.state.new_high_score || name.is_empty() {
            return false;
        }

        self.state.high_score_player = name.to_owned();
        self.state.new_high_score = false;

        let record = self.state.high_score_record();
        match self.store.store(&record) {
            Ok(()) => info!("saved high score {} for {}", record.high_score, record.player),
            Err(error) => warn!("failed to save high score: {error}"),
        }
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        let state = &self.state;
        Snapshot {
            board: state.board,
            snake: &state.snake,
            direction: state.direction,
            food: state.food,
            score: state.score,
            high_score: state.high_score,
            high_score_player: &state.high_score_player,
            is_over: state.is_over(),
            is_paused: state.is_paused(),
            is_new_high_score: state.new_high_score,
            end_reason: state.end_reason,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
