// vicinity/src/protocol/codec.rs
//! Tag-to-wire append helpers shared by poller requests and listener
//! responses.

use crate::tag::TagData;

/// Append the UID in wire (reversed) order. This is the single place a
/// UID is put on the wire, for both sides of the protocol.
pub fn append_uid(tag: &TagData, out: &mut Vec<u8>) {
    out.extend_from_slice(&tag.uid().to_wire());
}

/// Append one block of data. Precondition: `block_index` is in range;
/// the caller must have range-checked already.
pub fn append_block(tag: &TagData, block_index: usize, out: &mut Vec<u8>) {
    out.extend_from_slice(tag.block(block_index));
}

/// Append the single security byte for one block. Same precondition as
/// [`append_block`].
pub fn append_block_security(tag: &TagData, block_index: usize, out: &mut Vec<u8>) {
    out.push(tag.block_security(block_index));
}
