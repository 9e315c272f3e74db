pub mod board;
pub mod config;
pub mod engine;
pub mod food;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
