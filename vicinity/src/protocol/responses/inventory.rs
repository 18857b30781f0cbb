// vicinity/src/protocol/responses/inventory.rs

use crate::constants::UID_SIZE;
use crate::protocol::{classifier, parser};
use crate::types::Uid;
use crate::Result;

/// Expected layout: flags(1) + dsfid(1) + uid(8).
const RESPONSE_LEN: usize = 1 + 1 + UID_SIZE;

/// Parse an Inventory response into the tag UID, undoing the wire-order
/// reversal.
pub fn parse_inventory_response(buf: &[u8]) -> Result<Uid> {
    if let Some(error) = classifier::classify_response(buf) {
        return Err(error);
    }

    parser::expect_len(buf, RESPONSE_LEN)?;
    parser::uid_at(buf, 2)
}
