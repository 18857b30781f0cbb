// vicinity/src/protocol/parser.rs

use crate::constants::UID_SIZE;
use crate::types::Uid;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::UnexpectedResponse);
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn expect_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::UnexpectedResponse);
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse a wire-order UID (8 bytes) at `start`, undoing the reversal.
pub fn uid_at(data: &[u8], start: usize) -> Result<Uid> {
    let s = slice_at(data, start, UID_SIZE)?;
    let mut wire = [0u8; UID_SIZE];
    wire.copy_from_slice(s);
    Ok(Uid::from_wire(&wire))
}
