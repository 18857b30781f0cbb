// vicinity/src/protocol/commands/system.rs

use crate::constants::{CMD_GET_SYSTEM_INFO, REQ_FLAG_DATA_RATE_HI};

/// Encode a non-addressed Get System Info request.
pub fn encode_get_system_info() -> Vec<u8> {
    vec![REQ_FLAG_DATA_RATE_HI, CMD_GET_SYSTEM_INFO]
}
