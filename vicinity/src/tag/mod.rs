// vicinity/src/tag/mod.rs

use crate::constants::{BLOCK_COUNT_MAX, BLOCK_SIZE_MAX, SYSINFO_FLAG_MEMORY};
use crate::types::{LockBits, SystemInfo, Uid};
use crate::{Error, Result};

pub mod persist;

/// In-memory representation of one vicinity card.
///
/// Created blank; populated either by a poller's activation sequence or
/// by [`persist::load`], and mutated in place by listener command
/// handlers. A `TagData` instance is owned by exactly one poller or
/// listener session at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagData {
    uid: Uid,
    /// Sparse system information record.
    pub system_info: SystemInfo,
    /// DSFID/AFI lock bits.
    pub lock_bits: LockBits,
    block_data: Vec<u8>,
    security_status: Vec<u8>,
}

impl TagData {
    /// A blank tag: zero UID, no fields, no memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the blank state a new activation starts from.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The tag UID in storage order.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Validating setter: enforces the 8-byte length and rewrites byte 0
    /// to the mandatory E0 prefix.
    pub fn set_uid(&mut self, bytes: &[u8]) -> Result<()> {
        self.uid = Uid::try_from(bytes)?;
        Ok(())
    }

    /// Replace the UID with an already-validated value.
    pub fn set_uid_value(&mut self, uid: Uid) {
        self.uid = uid;
    }

    /// IC manufacturer code, derived from UID byte 1.
    pub fn manufacturer_id(&self) -> u8 {
        self.uid.manufacturer_id()
    }

    /// Number of memory blocks (zero until memory is sized).
    pub fn block_count(&self) -> usize {
        usize::from(self.system_info.block_count)
    }

    /// Size of each memory block in bytes.
    pub fn block_size(&self) -> usize {
        usize::from(self.system_info.block_size)
    }

    /// (Re)size the block-data and block-security arrays together. This
    /// is a reset: prior contents are discarded, not preserved.
    pub fn resize_blocks(&mut self, block_count: usize, block_size: usize) -> Result<()> {
        if block_count == 0 || block_count > BLOCK_COUNT_MAX {
            return Err(Error::Format);
        }
        if block_size == 0 || block_size > BLOCK_SIZE_MAX {
            return Err(Error::Format);
        }

        self.system_info.block_count = block_count as u16;
        self.system_info.block_size = block_size as u8;
        self.system_info.flags |= SYSINFO_FLAG_MEMORY;
        self.block_data = vec![0u8; block_count * block_size];
        self.security_status = vec![0u8; block_count];
        Ok(())
    }

    /// Block data at `block_index`. Precondition: the caller has already
    /// range-checked the index; violation is a programming error.
    pub fn block(&self, block_index: usize) -> &[u8] {
        assert!(block_index < self.block_count());
        let size = self.block_size();
        &self.block_data[block_index * size..(block_index + 1) * size]
    }

    /// Overwrite one block in place. Same precondition as [`Self::block`];
    /// `data` must be exactly one block long.
    pub fn set_block_data(&mut self, block_index: usize, data: &[u8]) {
        assert!(block_index < self.block_count());
        let size = self.block_size();
        assert_eq!(data.len(), size);
        self.block_data[block_index * size..(block_index + 1) * size].copy_from_slice(data);
    }

    /// Whether the block's security byte marks it locked.
    pub fn is_block_locked(&self, block_index: usize) -> bool {
        assert!(block_index < self.block_count());
        self.security_status[block_index] != 0
    }

    /// Set or clear the block's lock marker.
    pub fn set_block_locked(&mut self, block_index: usize, locked: bool) {
        assert!(block_index < self.block_count());
        self.security_status[block_index] = u8::from(locked);
    }

    /// Raw security byte for one block.
    pub fn block_security(&self, block_index: usize) -> u8 {
        assert!(block_index < self.block_count());
        self.security_status[block_index]
    }

    /// Whole memory as one flat buffer, block 0 first.
    pub fn block_data_raw(&self) -> &[u8] {
        &self.block_data
    }

    /// All per-block security bytes, one per block.
    pub fn security_status_raw(&self) -> &[u8] {
        &self.security_status
    }

    /// Bulk-set block data from a flat buffer of `block_count * block_size`
    /// bytes, as read from a persisted image or assembled by a poller.
    pub fn set_block_data_raw(&mut self, data: &[u8]) -> Result<()> {
        if data.len() != self.block_data.len() {
            return Err(Error::Format);
        }
        self.block_data.copy_from_slice(data);
        Ok(())
    }

    /// Bulk-set per-block security bytes, one per block.
    pub fn set_security_status_raw(&mut self, status: &[u8]) -> Result<()> {
        if status.len() != self.security_status.len() {
            return Err(Error::Format);
        }
        self.security_status.copy_from_slice(status);
        Ok(())
    }
}
