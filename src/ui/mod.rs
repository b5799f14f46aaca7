//! Presentation layer: terminal grid, controls and line-mode console

pub mod anim;
pub mod app;
pub mod button;
pub mod colors;
pub mod console;
pub mod grid;
pub mod input;
pub mod state;
pub mod terminal;
pub mod view;

pub use app::App;
pub use state::{LogCategory, LogEntry, UiState};
