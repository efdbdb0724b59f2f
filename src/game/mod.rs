//! Core Connect Four game logic: board representation, players, and the
//! engine state machine that enforces the rules.

mod board;
mod engine;
mod player;

pub use board::{
    Board, BoardSize, Cell, Line, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION,
};
pub use engine::{GameEngine, GameStatus, Outcome, Placement};
pub use player::{Color, Player, PlayerId};
