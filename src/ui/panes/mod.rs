//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`grid`]: the rasterized memory grid (the scene drawn by the view)
//! - [`writes`]: the log of applied script writes
//! - [`status`]: status bar with step position, messages, and keybindings
//! - `utils`: the scene-to-characters rasterizer
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area, its data, the focus flag, and its scroll state.

mod utils;

pub mod grid;
pub mod status;
pub mod writes;

// Re-export render functions for convenience
pub use grid::render_grid_pane;
pub use status::render_status_bar;
pub use writes::{render_writes_pane, WriteLogEntry};
