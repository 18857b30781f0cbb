// vicinity/src/types.rs

use crate::constants::{
    SYSINFO_FLAG_AFI, SYSINFO_FLAG_DSFID, SYSINFO_FLAG_IC_REF, SYSINFO_FLAG_MEMORY, UID_MANUFACTURER_OFFSET,
    UID_PREFIX, UID_SIZE,
};
use crate::Error;
use std::convert::TryFrom;

/// UID - Newtype Pattern (8 bytes, stored most-significant byte first).
///
/// Byte 0 is always [`UID_PREFIX`]; the validating constructors enforce
/// this. The wire transmits the UID in reversed order, see
/// [`Uid::to_wire`] and [`Uid::from_wire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uid([u8; UID_SIZE]);

impl Uid {
    /// Build a UID from storage-order bytes, rewriting byte 0 to the
    /// mandatory E0 prefix.
    pub fn from_bytes(mut bytes: [u8; UID_SIZE]) -> Self {
        bytes[0] = UID_PREFIX;
        Self(bytes)
    }

    /// Build a UID from wire-order (reversed) bytes.
    pub fn from_wire(wire: &[u8; UID_SIZE]) -> Self {
        let mut bytes = [0u8; UID_SIZE];
        for (i, b) in wire.iter().rev().enumerate() {
            bytes[i] = *b;
        }
        Self::from_bytes(bytes)
    }

    /// Storage-order bytes (most-significant first).
    pub fn as_bytes(&self) -> &[u8; UID_SIZE] {
        &self.0
    }

    /// Wire-order (reversed) representation, as appended to frames.
    pub fn to_wire(&self) -> [u8; UID_SIZE] {
        let mut wire = [0u8; UID_SIZE];
        for (i, b) in self.0.iter().rev().enumerate() {
            wire[i] = *b;
        }
        wire
    }

    /// IC manufacturer code (UID byte 1).
    pub fn manufacturer_id(&self) -> u8 {
        self.0[UID_MANUFACTURER_OFFSET]
    }

    /// Compare against wire-order bytes without allocating.
    pub fn matches_wire(&self, wire: &[u8]) -> bool {
        wire.len() == UID_SIZE && self.0.iter().rev().eq(wire.iter())
    }

    /// Lowercase hex of the storage-order bytes.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_SIZE {
            return Err(Error::Format);
        }
        let mut arr = [0u8; UID_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self::from_bytes(arr))
    }
}

/// Sparse system information record.
///
/// A field is meaningful only if the matching `SYSINFO_FLAG_*` bit is set
/// in `flags`. `block_count` and `block_size` hold the effective values
/// (wire value + 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemInfo {
    /// Presence bitmap (`SYSINFO_FLAG_*`).
    pub flags: u8,
    /// Data storage format identifier.
    pub dsfid: u8,
    /// Application family identifier.
    pub afi: u8,
    /// IC reference byte.
    pub ic_ref: u8,
    /// Effective block count, 1..=256.
    pub block_count: u16,
    /// Effective block size in bytes, 1..=32.
    pub block_size: u8,
}

impl SystemInfo {
    /// Whether the DSFID field is present.
    pub fn has_dsfid(&self) -> bool {
        self.flags & SYSINFO_FLAG_DSFID != 0
    }

    /// Whether the AFI field is present.
    pub fn has_afi(&self) -> bool {
        self.flags & SYSINFO_FLAG_AFI != 0
    }

    /// Whether the memory geometry fields are present.
    pub fn has_memory(&self) -> bool {
        self.flags & SYSINFO_FLAG_MEMORY != 0
    }

    /// Whether the IC reference field is present.
    pub fn has_ic_ref(&self) -> bool {
        self.flags & SYSINFO_FLAG_IC_REF != 0
    }
}

/// DSFID/AFI lock bits. Sticky: once set, the write/lock commands for the
/// corresponding field fail and never clear them again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockBits {
    /// DSFID is locked against writes.
    pub dsfid: bool,
    /// AFI is locked against writes.
    pub afi: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_prefix_is_enforced() {
        let uid = Uid::from_bytes([0x12, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(uid.as_bytes()[0], UID_PREFIX);
    }

    #[test]
    fn uid_try_from_err() {
        let b: [u8; 4] = [0, 1, 2, 3];
        assert!(Uid::try_from(&b[..]).is_err());
    }

    #[test]
    fn uid_wire_roundtrip() {
        let uid = Uid::from_bytes([0xE0, 1, 2, 3, 4, 5, 6, 7]);
        let wire = uid.to_wire();
        assert_eq!(wire, [7, 6, 5, 4, 3, 2, 1, 0xE0]);
        assert_eq!(Uid::from_wire(&wire), uid);
    }

    #[test]
    fn uid_matches_wire() {
        let uid = Uid::from_bytes([0xE0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(uid.matches_wire(&uid.to_wire()));
        assert!(!uid.matches_wire(uid.as_bytes()));
        assert!(!uid.matches_wire(&uid.to_wire()[..7]));
    }

    #[test]
    fn uid_manufacturer_id() {
        let uid = Uid::from_bytes([0xE0, 0x04, 2, 3, 4, 5, 6, 7]);
        assert_eq!(uid.manufacturer_id(), 0x04);
    }

    #[test]
    fn system_info_flag_queries() {
        let mut info = SystemInfo::default();
        assert!(!info.has_dsfid());
        info.flags = SYSINFO_FLAG_DSFID | SYSINFO_FLAG_MEMORY;
        assert!(info.has_dsfid());
        assert!(info.has_memory());
        assert!(!info.has_afi());
        assert!(!info.has_ic_ref());
    }
}
