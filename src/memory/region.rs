//! The byte region: single source of truth for raw memory content
//!
//! [`Memory`] owns a fixed-size, zero-initialized byte buffer. All mutation
//! goes through its write accessors, and every successful write synchronously
//! notifies the registered change watchers with the affected range, after
//! the buffer already reflects the new value, so observers only ever see
//! committed state.
//!
//! # Bounds
//!
//! Every access checks `address + width <= size` up front; a failed access
//! returns [`MemoryError::OutOfBounds`] and leaves the buffer untouched.
//! There is no resize: the region lives unchanged for the whole session.

use super::watch::{ChangeHandler, Watchers};
use super::Address;
use crate::errors::MemoryError;

/// Upper bound on region size. The visualizer targets human-scale regions
/// (tens to low thousands of bytes); 64 KiB leaves generous headroom.
pub const MAX_REGION_SIZE: usize = 64 * 1024;

/// A fixed-size, byte-addressable memory region with change notification
#[derive(Debug)]
pub struct Memory {
    data: Vec<u8>,
    watchers: Watchers,
}

impl Memory {
    /// Create a zero-filled region of `size` bytes.
    ///
    /// Fails with [`MemoryError::InvalidSize`] when `size` is zero or above
    /// [`MAX_REGION_SIZE`]; a failed construction yields no usable region.
    pub fn new(size: usize) -> Result<Self, MemoryError> {
        if size == 0 || size > MAX_REGION_SIZE {
            return Err(MemoryError::InvalidSize {
                size,
                max: MAX_REGION_SIZE,
            });
        }
        Ok(Memory {
            data: vec![0; size],
            watchers: Watchers::new(),
        })
    }

    /// Fixed capacity in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Read the byte at `address`. Never notifies.
    pub fn read_u8(&self, address: Address) -> Result<u8, MemoryError> {
        let offset = self.check_range(address, 1)?;
        Ok(self.data[offset])
    }

    /// Write a 4-byte little-endian unsigned integer at `address`.
    ///
    /// On success the registered watchers are invoked exactly once each with
    /// the 4-byte range just written, in registration order, strictly after
    /// the buffer reflects `value`.
    pub fn write_u32(&mut self, address: Address, value: u32) -> Result<(), MemoryError> {
        let offset = self.check_range(address, 4)?;
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        log::debug!("write u32 0x{:08x} at 0x{:08x}", value, address);

        // Split borrow: watchers receive the post-write bytes of the range.
        let Memory { data, watchers } = self;
        watchers.notify(address, &data[offset..offset + 4]);
        Ok(())
    }

    /// Register a change watcher. Watchers accumulate; notification order is
    /// registration order.
    pub fn subscribe(&mut self, handler: ChangeHandler) {
        self.watchers.subscribe(handler);
    }

    /// Number of registered watchers
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    fn check_range(&self, address: Address, width: usize) -> Result<usize, MemoryError> {
        // The first test keeps `offset + width` from overflowing: a region is
        // at most MAX_REGION_SIZE bytes and widths are tiny.
        if address >= self.data.len() as u64 || address as usize + width > self.data.len() {
            return Err(MemoryError::OutOfBounds {
                address,
                width,
                size: self.data.len(),
            });
        }
        Ok(address as usize)
    }
}
