//! # Introduction
//!
//! memtty renders a small byte-addressable memory region as an interactive,
//! stack-style hex grid in the terminal.  A write script drives 32-bit
//! little-endian writes into the region; every write triggers a synchronous
//! change notification, and the grid repaints only the cells whose bytes
//! changed; the full layout is computed and drawn exactly once.
//!
//! ## Pipeline
//!
//! ```text
//! Script → Memory writes → change notifications → MemoryView → Scene → TUI
//! ```
//!
//! 1. [`script`] — parses the write script (region size, address base, the
//!    write sequence).
//! 2. [`memory`] — the fixed-size byte region with typed accessors and an
//!    ordered change-watcher registry.
//! 3. [`view`] — the grid: reverse stack-like addressing, the retained
//!    [`view::Surface`] contract, the [`view::Scene`] arena, and the
//!    incremental [`view::MemoryView`].
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Addressing
//!
//! Rows descend on screen while addresses climb toward the top-left cell,
//! the way a debugger draws a downward-growing stack.  Cells can be labeled
//! with raw buffer offsets or from a fixed logical base (e.g. `0xffff0000`).

pub mod errors;
pub mod memory;
pub mod script;
pub mod ui;
pub mod view;
