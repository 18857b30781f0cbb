// vicinity/src/iso13239.rs
//! ISO13239 frame CRC (CRC-16/IBM-SDLC, the X.25 variant prescribed by
//! ISO15693-3). The protocol engine only appends, verifies, and strips the
//! trailing two bytes; the computation itself lives in the `crc` crate.

use crc::{CRC_16_IBM_SDLC, Crc};

const ISO13239: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_SDLC);

/// Number of CRC bytes at the end of every frame.
pub const CRC_SIZE: usize = 2;

/// Compute the CRC over `data`.
pub fn compute(data: &[u8]) -> u16 {
    ISO13239.checksum(data)
}

/// Append the CRC (little-endian) to `buf`.
pub fn append(buf: &mut Vec<u8>) {
    let crc = compute(buf);
    buf.extend_from_slice(&crc.to_le_bytes());
}

/// Verify that `buf` ends with a valid CRC over the preceding bytes.
pub fn check(buf: &[u8]) -> bool {
    if buf.len() < CRC_SIZE {
        return false;
    }
    let (payload, trailer) = buf.split_at(buf.len() - CRC_SIZE);
    compute(payload).to_le_bytes() == trailer
}

/// Remove the trailing CRC bytes. Callers must have verified the CRC
/// first; a frame shorter than the CRC itself is a caller bug.
pub fn trim(buf: &mut Vec<u8>) {
    debug_assert!(buf.len() >= CRC_SIZE);
    buf.truncate(buf.len().saturating_sub(CRC_SIZE));
}
