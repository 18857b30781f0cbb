// vicinity/src/protocol/responses/security.rs

use crate::protocol::{classifier, parser};
use crate::Result;

/// Parse a Get Multiple Block Security Status response:
/// flags(1) + one status byte per requested block.
pub fn parse_block_security_response(buf: &[u8], expected_block_count: usize) -> Result<Vec<u8>> {
    if let Some(error) = classifier::classify_response(buf) {
        return Err(error);
    }

    parser::expect_len(buf, 1 + expected_block_count)?;
    Ok(buf[1..].to_vec())
}
