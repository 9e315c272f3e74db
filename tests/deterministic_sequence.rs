use grid_snake::board::{Board, Position};
use grid_snake::engine::{EndReason, GameEngine, GameState, GameStatus, TickOutcome};
use grid_snake::input::Direction;
use grid_snake::score::{HighScoreRecord, MemoryStore};
use grid_snake::snake::Snake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ten_by_ten(segments: Vec<Position>, food: Position) -> GameEngine<MemoryStore> {
    let board = Board::with_size(10, 10).expect("valid board");
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::new(board, HighScoreRecord::default(), &mut rng);
    state.snake = Snake::from_segments(segments).expect("non-empty body");
    state.food = Some(food);

    GameEngine::from_state(state, MemoryStore::default(), rng)
}

fn segments(engine: &GameEngine<MemoryStore>) -> Vec<Position> {
    engine.snapshot().snake.segments().copied().collect()
}

#[test]
fn plain_move_keeps_length_and_food() {
    let mut engine = ten_by_ten(vec![Position::new(5, 5)], Position::new(7, 5));

    assert_eq!(engine.tick(), TickOutcome::Moved);

    assert_eq!(segments(&engine), vec![Position::new(6, 5)]);
    assert_eq!(engine.snapshot().food, Some(Position::new(7, 5)));
    assert_eq!(engine.snapshot().score, 0);
}

#[test]
fn eating_grows_scores_and_relocates_food() {
    let mut engine = ten_by_ten(vec![Position::new(5, 5)], Position::new(6, 5));

    assert_eq!(engine.tick(), TickOutcome::Ate);

    assert_eq!(
        segments(&engine),
        vec![Position::new(6, 5), Position::new(5, 5)]
    );
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.score, 1);
    let food = snapshot.food.expect("new food placed");
    assert_ne!(food, Position::new(6, 5));
    assert_ne!(food, Position::new(5, 5));
    assert!(snapshot.board.contains(food));
}

#[test]
fn hitting_the_right_wall_ends_without_moving() {
    let mut engine = ten_by_ten(vec![Position::new(9, 5)], Position::new(0, 0));

    assert_eq!(engine.tick(), TickOutcome::Ended(EndReason::WallCollision));

    let snapshot = engine.snapshot();
    assert!(snapshot.is_over);
    assert_eq!(snapshot.end_reason, Some(EndReason::WallCollision));
    assert_eq!(segments(&engine), vec![Position::new(9, 5)]);

    assert_eq!(engine.tick(), TickOutcome::Skipped);
    assert_eq!(segments(&engine), vec![Position::new(9, 5)]);
}

#[test]
fn moving_into_the_vacating_tail_is_allowed() {
    let mut engine = ten_by_ten(
        vec![
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
        ],
        Position::new(0, 0),
    );

    assert_eq!(engine.tick(), TickOutcome::Moved);

    assert_eq!(
        segments(&engine),
        vec![
            Position::new(6, 5),
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
        ]
    );
    assert!(!engine.snapshot().is_over);
}

#[test]
fn reversal_request_is_dropped() {
    let mut engine = ten_by_ten(vec![Position::new(5, 5)], Position::new(0, 0));

    assert!(!engine.set_direction(Direction::Left));
    engine.tick();

    assert_eq!(engine.snapshot().direction, Direction::Right);
    assert_eq!(segments(&engine), vec![Position::new(6, 5)]);
}

#[test]
fn ticks_while_paused_change_nothing() {
    let mut engine = ten_by_ten(vec![Position::new(5, 5)], Position::new(6, 5));
    engine.toggle_pause();
    let before = engine.state().clone();

    for _ in 0..20 {
        assert_eq!(engine.tick(), TickOutcome::Skipped);
    }

    assert_eq!(engine.state(), &before);
    engine.toggle_pause();
    assert_eq!(engine.tick(), TickOutcome::Ate);
}

#[test]
fn restart_resets_from_any_state() {
    let mut engine = ten_by_ten(vec![Position::new(5, 5)], Position::new(6, 5));
    engine.tick();
    engine.set_direction(Direction::Up);
    for _ in 0..10 {
        engine.tick();
    }
    assert!(engine.snapshot().is_over);

    engine.restart();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.score, 0);
    assert!(!snapshot.is_over);
    assert!(!snapshot.is_paused);
    assert_eq!(snapshot.snake.len(), 1);
    assert_eq!(snapshot.snake.head(), snapshot.board.center());
    assert_eq!(snapshot.direction, Direction::Right);

    engine.toggle_pause();
    engine.restart();
    assert_eq!(engine.state().status, GameStatus::Running);
}

#[test]
fn seeded_random_play_keeps_every_invariant() {
    let board = Board::with_size(8, 6).expect("valid board");
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    for seed in 0..40_u64 {
        let mut engine = GameEngine::new_with_seed(board, MemoryStore::default(), seed);
        let mut turn_rng = StdRng::seed_from_u64(seed ^ 0xA5A5);

        for step in 0..400 {
            if step % 3 == 0 {
                let turn = turns[turn_rng.gen_range(0..turns.len())];
                engine.set_direction(turn);
            }

            let before_score = engine.snapshot().score;
            let before_len = engine.snapshot().snake.len();
            let outcome = engine.tick();
            let snapshot = engine.snapshot();

            let body: Vec<Position> = snapshot.snake.segments().copied().collect();
            for (index, segment) in body.iter().enumerate() {
                assert!(!body[index + 1..].contains(segment), "duplicate segment");
            }
            if let Some(food) = snapshot.food {
                assert!(!body.contains(&food), "food on snake");
            }
            if !snapshot.is_over {
                assert!(body.iter().all(|segment| board.contains(*segment)));
            }

            match outcome {
                TickOutcome::Ate => {
                    assert_eq!(snapshot.score, before_score + 1);
                    assert_eq!(body.len(), before_len + 1);
                }
                TickOutcome::Ended(EndReason::BoardFull) => {
                    assert_eq!(snapshot.score, before_score + 1);
                }
                _ => {
                    assert_eq!(snapshot.score, before_score);
                    assert_eq!(body.len(), before_len);
                }
            }

            if snapshot.is_over {
                engine.restart();
            }
        }
    }
}
