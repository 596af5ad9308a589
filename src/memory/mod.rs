//! Memory model for the grid visualizer
//!
//! This module provides the mutable side of the core pairing:
//! - [`region`]: [`Memory`], a fixed-size byte buffer with typed accessors
//! - [`watch`]: the ordered change-watcher registry fed by every write
//!
//! # Addressing
//!
//! Addresses are plain byte offsets (`0 <= address < size`); multi-byte
//! accesses additionally require `address + width <= size`. Multi-byte values
//! are little-endian.
//!
//! # Notification contract
//!
//! Writes notify watchers synchronously, exactly once per write, with the
//! half-open range just modified, after the buffer reflects the new value.
//! Reads never notify.

pub mod region;
pub mod watch;

pub use region::{Memory, MAX_REGION_SIZE};
pub use watch::{ChangeHandler, Watchers};

/// A byte offset into a region (or, for display purposes, into a logical
/// address space)
pub type Address = u64;
