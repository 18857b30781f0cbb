// vicinity/src/protocol/responses/system.rs

use crate::constants::{BLOCK_SIZE_MAX, UID_SIZE};
use crate::protocol::{classifier, parser};
use crate::types::SystemInfo;
use crate::{Error, Result};

/// Fixed prefix: flags(1) + info_flags(1) + uid(8).
const PREFIX_LEN: usize = 1 + 1 + UID_SIZE;

/// Parse a Get System Info response.
///
/// The variable part holds, strictly in this order, only the fields whose
/// presence flag is set: dsfid(1), afi(1), memory(2), ic_ref(1). Any
/// other total length is an unexpected response. The memory pair is
/// biased by -1 on the wire; the decoder restores the effective values.
pub fn parse_system_info_response(buf: &[u8]) -> Result<SystemInfo> {
    if let Some(error) = classifier::classify_response(buf) {
        return Err(error);
    }

    parser::ensure_len(buf, PREFIX_LEN)?;
    let flags = buf[1];

    let mut info = SystemInfo {
        flags,
        ..SystemInfo::default()
    };

    let mut extra_len = 0usize;
    if info.has_dsfid() {
        extra_len += 1;
    }
    if info.has_afi() {
        extra_len += 1;
    }
    if info.has_memory() {
        extra_len += 2;
    }
    if info.has_ic_ref() {
        extra_len += 1;
    }

    if buf.len() != PREFIX_LEN + extra_len {
        return Err(Error::UnexpectedResponse);
    }

    let mut pos = PREFIX_LEN;
    if info.has_dsfid() {
        info.dsfid = buf[pos];
        pos += 1;
    }
    if info.has_afi() {
        info.afi = buf[pos];
        pos += 1;
    }
    if info.has_memory() {
        info.block_count = u16::from(buf[pos]) + 1;
        info.block_size = (buf[pos + 1] & (BLOCK_SIZE_MAX - 1) as u8) + 1;
        pos += 2;
    }
    if info.has_ic_ref() {
        info.ic_ref = buf[pos];
    }

    Ok(info)
}
