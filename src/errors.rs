//! Error types for the memory model, the grid view, and the script parser
//!
//! Three small taxonomies, surfaced synchronously to the caller:
//!
//! - [`MemoryError`]: construction and access failures on a [`Memory`] region.
//!   `OutOfBounds` is recoverable: a failed access never mutates the buffer.
//! - [`ViewError`]: lifecycle violations on a [`MemoryView`]. A
//!   `MissingCellHandle` is an invariant violation and aborts loudly rather
//!   than desynchronizing the grid from the bytes behind it.
//! - [`ScriptError`]: line-numbered parse failures in write scripts.
//!
//! [`Memory`]: crate::memory::Memory
//! [`MemoryView`]: crate::view::MemoryView

use crate::memory::Address;
use std::fmt;

/// Errors raised by [`Memory`](crate::memory::Memory) accessors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// Region size rejected at construction
    InvalidSize { size: usize, max: usize },

    /// Access outside the region; the buffer is untouched
    OutOfBounds {
        address: Address,
        width: usize,
        size: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::InvalidSize { size, max } => {
                write!(
                    f,
                    "Invalid region size: {} bytes (must be between 1 and {})",
                    size, max
                )
            }
            MemoryError::OutOfBounds {
                address,
                width,
                size,
            } => {
                write!(
                    f,
                    "Out of bounds: {}-byte access at 0x{:08x} in a {}-byte region",
                    width, address, size
                )
            }
        }
    }
}

impl std::error::Error for MemoryError {}

/// Errors raised by [`MemoryView`](crate::view::MemoryView)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// `render` was called on a view that is already rendered
    AlreadyRendered,

    /// A change notification targeted an address with no rendered cell.
    /// This cannot happen after a successful render; it is raised as a panic
    /// message, never returned.
    MissingCellHandle { address: Address },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::AlreadyRendered => {
                write!(f, "View is already rendered (render is one-shot)")
            }
            ViewError::MissingCellHandle { address } => {
                write!(f, "No rendered cell for address 0x{:08x}", address)
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// Errors raised while parsing a write script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Unrecognized directive at the start of a line
    UnknownDirective { directive: String, line: usize },

    /// A directive was given the wrong number of operands
    MalformedDirective {
        directive: &'static str,
        expected: &'static str,
        line: usize,
    },

    /// An operand failed to parse as an integer
    InvalidNumber { token: String, line: usize },

    /// The script never declared a region size
    MissingSize,

    /// A directive appeared after the first write that must precede them
    DirectiveAfterWrites { directive: &'static str, line: usize },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownDirective { directive, line } => {
                write!(f, "Unknown directive '{}' at line {}", directive, line)
            }
            ScriptError::MalformedDirective {
                directive,
                expected,
                line,
            } => {
                write!(
                    f,
                    "Malformed '{}' at line {}: expected {}",
                    directive, line, expected
                )
            }
            ScriptError::InvalidNumber { token, line } => {
                write!(f, "Invalid number '{}' at line {}", token, line)
            }
            ScriptError::MissingSize => {
                write!(f, "Script does not declare a region size ('size <bytes>')")
            }
            ScriptError::DirectiveAfterWrites { directive, line } => {
                write!(
                    f,
                    "'{}' at line {} must appear before the first write",
                    directive, line
                )
            }
        }
    }
}

impl std::error::Error for ScriptError {}
