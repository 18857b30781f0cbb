// vicinity/src/protocol/responses/read.rs

use crate::protocol::{classifier, parser};
use crate::Result;

/// Parse a Read Single Block response: flags(1) + data(block_size).
pub fn parse_read_block_response(buf: &[u8], expected_block_size: usize) -> Result<Vec<u8>> {
    if let Some(error) = classifier::classify_response(buf) {
        return Err(error);
    }

    parser::expect_len(buf, 1 + expected_block_size)?;
    Ok(buf[1..].to_vec())
}
