//! Terminal UI: a keyboard-driven front end that feeds column choices into
//! the game engine and renders its state.

mod app;
mod game_view;

pub use app::App;
