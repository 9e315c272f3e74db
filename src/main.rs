use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{
    GameConfig, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_INTERVAL_MS,
    THEME_CLASSIC,
};
use grid_snake::engine::GameEngine;
use grid_snake::input::{poll_input, GameInput, NameEntry};
use grid_snake::scheduler::TickScheduler;
use grid_snake::score::{default_scores_path, HighScoreStore, JsonFileStore};
use grid_snake::terminal_runtime::{restore_terminal, TerminalSession};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u16,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// High score file; defaults to the platform data directory.
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

enum Flow {
    Continue,
    Quit,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.width, cli.height, cli.tick_ms)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    init_logging(&cli)?;
    install_panic_hook();

    let store = JsonFileStore::new(cli.scores.unwrap_or_else(default_scores_path));
    info!(
        "starting {}x{} game, tick {:?}, scores at {}",
        cli.width,
        cli.height,
        config.tick_interval,
        store.path().display()
    );

    let engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(config.board, store, seed),
        None => GameEngine::new(config.board, store),
    };

    run(engine, config)
}

fn run<S: HighScoreStore>(mut engine: GameEngine<S>, config: GameConfig) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut scheduler = TickScheduler::new(config.tick_interval, Instant::now());
    let mut name = NameEntry::default();

    loop {
        session.draw(&engine.snapshot(), name.as_str(), &THEME_CLASSIC)?;

        let snapshot = engine.snapshot();
        let text_entry = snapshot.is_over && snapshot.is_new_high_score;
        let timeout = scheduler.time_until_next(Instant::now());

        if let Some(input) = poll_input(timeout, text_entry)? {
            if let Flow::Quit = handle_input(&mut engine, &mut name, &mut scheduler, input) {
                break;
            }
        }

        if scheduler.poll(Instant::now()) {
            engine.tick();
        }
    }

    info!("quitting with score {}", engine.snapshot().score);
    Ok(())
}

fn handle_input<S: HighScoreStore>(
    engine: &mut GameEngine<S>,
    name: &mut NameEntry,
    scheduler: &mut TickScheduler,
    input: GameInput,
) -> Flow {
    let snapshot = engine.snapshot();
    let (is_over, text_entry) = (
        snapshot.is_over,
        snapshot.is_over && snapshot.is_new_high_score,
    );

    // An empty name on the high-score prompt skips saving and restarts.

    match input {
        GameInput::Quit => return Flow::Quit,
        GameInput::Direction(direction) => {
            engine.set_direction(direction);
        }
        GameInput::Pause => {
            engine.toggle_pause();
            scheduler.reset(Instant::now());
        }
        GameInput::Confirm if text_entry && !name.as_str().trim().is_empty() => {
            if engine.save_high_score(name.as_str()) {
                name.clear();
            }
        }
        GameInput::Confirm if is_over => restart(engine, name, scheduler),
        GameInput::Confirm => {}
        GameInput::Restart => restart(engine, name, scheduler),
        GameInput::Char(c) => name.push(c),
        GameInput::Backspace => name.pop(),
    }

    Flow::Continue
}

fn restart<S: HighScoreStore>(
    engine: &mut GameEngine<S>,
    name: &mut NameEntry,
    scheduler: &mut TickScheduler,
) {
    name.clear();
    engine.restart();
    scheduler.reset(Instant::now());
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    WriteLogger::init(cli.log_level, Config::default(), File::create(path)?)
        .map_err(io::Error::other)
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
