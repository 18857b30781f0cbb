// vicinity/src/protocol/commands/read.rs

use crate::constants::{CMD_READ_BLOCK, REQ_FLAG_DATA_RATE_HI};

/// Encode a non-addressed Read Single Block request.
pub fn encode_read_block(block_num: u8) -> Vec<u8> {
    vec![REQ_FLAG_DATA_RATE_HI, CMD_READ_BLOCK, block_num]
}
