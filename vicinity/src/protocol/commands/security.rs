// vicinity/src/protocol/commands/security.rs

use crate::constants::{CMD_GET_BLOCKS_SECURITY, REQ_FLAG_DATA_RATE_HI, SECURITY_BATCH_MAX};

/// Encode a non-addressed Get Multiple Block Security Status request.
///
/// `block_count` is the effective count (1..=32); the wire field is
/// biased by -1. Callers batch larger ranges, see the poller.
pub fn encode_get_blocks_security(first_block: u8, block_count: u8) -> Vec<u8> {
    debug_assert!(block_count >= 1 && usize::from(block_count) <= SECURITY_BATCH_MAX);
    vec![
        REQ_FLAG_DATA_RATE_HI,
        CMD_GET_BLOCKS_SECURITY,
        first_block,
        block_count - 1,
    ]
}
