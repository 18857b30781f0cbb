// vicinity/src/test_support.rs
//! Shared fixtures for unit and integration tests. Not part of the
//! public API surface proper, but kept buildable outside `cfg(test)` so
//! integration tests and benches can reuse it.

use crate::constants::{
    RESP_FLAG_ERROR, RESP_FLAG_NONE, SYSINFO_FLAG_AFI, SYSINFO_FLAG_DSFID, SYSINFO_FLAG_IC_REF,
    SYSINFO_FLAG_MEMORY,
};
use crate::iso13239;
use crate::tag::TagData;
use crate::types::Uid;

/// A fixed, valid UID shared by the fixtures below.
pub const SAMPLE_UID: [u8; 8] = [0xE0, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

/// A fully-populated tag: all four system-info fields present, four
/// blocks of four zeroed bytes, nothing locked.
pub fn sample_tag() -> TagData {
    let mut tag = TagData::new();
    tag.set_uid(&SAMPLE_UID).unwrap();
    tag.system_info.flags |= SYSINFO_FLAG_DSFID | SYSINFO_FLAG_AFI | SYSINFO_FLAG_IC_REF;
    tag.system_info.dsfid = 0x19;
    tag.system_info.afi = 0x42;
    tag.system_info.ic_ref = 0x33;
    tag.resize_blocks(4, 4).unwrap();
    tag
}

/// Append the frame CRC to a payload.
pub fn crc_framed(payload: &[u8]) -> Vec<u8> {
    let mut frame = payload.to_vec();
    iso13239::append(&mut frame);
    frame
}

/// A complete Inventory response frame for a UID given in storage order.
pub fn inventory_response_frame(uid_storage: &[u8; 8], dsfid: u8) -> Vec<u8> {
    let mut payload = vec![RESP_FLAG_NONE, dsfid];
    payload.extend_from_slice(&Uid::from_bytes(*uid_storage).to_wire());
    crc_framed(&payload)
}

/// A Get System Information response frame advertising only the memory
/// layout fields.
pub fn system_info_response_frame(
    uid_storage: &[u8; 8],
    block_count: usize,
    block_size: usize,
) -> Vec<u8> {
    let mut payload = vec![RESP_FLAG_NONE, SYSINFO_FLAG_MEMORY];
    payload.extend_from_slice(&Uid::from_bytes(*uid_storage).to_wire());
    payload.push((block_count - 1) as u8);
    payload.push((block_size - 1) as u8);
    crc_framed(&payload)
}

/// A generic error response frame carrying the given error code.
pub fn error_response_frame(code: u8) -> Vec<u8> {
    crc_framed(&[RESP_FLAG_ERROR, code])
}
