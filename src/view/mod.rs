//! Grid view of a memory region
//!
//! The view side of the core pairing, in four layers:
//!
//! - **[`layout`]** — the reverse, stack-like address math mapping grid
//!   positions to buffer offsets, and cell geometry in character space
//! - **[`surface`]** — the retained drawing contract ([`Surface`], fluent
//!   [`Attrs`], opaque [`ElementId`] handles)
//! - **[`scene`]** — the element arena implementing [`Surface`], rasterized
//!   by the TUI and inspected by tests
//! - **[`memory_view`]** — [`MemoryView`]: one full render, then incremental
//!   in-place cell updates driven by change notifications
//!
//! [`format`] holds the shared lowercase-hex formatting.

pub mod format;
pub mod layout;
pub mod memory_view;
pub mod scene;
pub mod surface;

pub use layout::{AddressBase, GridLayout, CELLS_PER_ROW};
pub use memory_view::MemoryView;
pub use scene::{Element, Scene};
pub use surface::{Anchor, Attrs, ElementId, PathCmd, Surface};
