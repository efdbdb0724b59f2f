//! # Connect Four
//!
//! A two-player Connect Four game. The rules live in an explicit
//! [`game::GameEngine`] owned by the caller; a terminal UI built with Ratatui
//! drives it from the keyboard.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, engine state machine
//! - [`ui`] — Terminal UI: event loop and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
