use vicinity::constants::{REQ_FLAG_INVENTORY_T5, REQ_FLAG_T5_N_SLOTS_1};
use vicinity::protocol::{
    encode_get_blocks_security, encode_get_system_info, encode_inventory, encode_read_block,
};
use vicinity::types::Uid;

#[test]
fn inventory_request_bytes() {
    // Single-slot, no AFI, zero-length mask
    assert_eq!(encode_inventory(), vec![0x26, 0x01, 0x00]);
}

#[test]
fn inventory_flags_decompose() {
    let flags = encode_inventory()[0];
    assert_ne!(flags & REQ_FLAG_INVENTORY_T5, 0);
    assert_ne!(flags & REQ_FLAG_T5_N_SLOTS_1, 0);
}

#[test]
fn read_block_request_bytes() {
    assert_eq!(encode_read_block(0x0A), vec![0x02, 0x20, 0x0A]);
}

#[test]
fn get_system_info_request_bytes() {
    assert_eq!(encode_get_system_info(), vec![0x02, 0x2B]);
}

#[test]
fn get_blocks_security_count_is_biased() {
    // Four blocks starting at 8 go on the wire as count byte 3
    assert_eq!(encode_get_blocks_security(8, 4), vec![0x02, 0x2C, 0x08, 0x03]);
}

#[test]
fn uid_wire_order_is_reversed_storage_order() {
    let uid = Uid::from_bytes([0xE0, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    assert_eq!(
        uid.to_wire(),
        [0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 0xE0]
    );
    assert_eq!(Uid::from_wire(&uid.to_wire()), uid);
}

#[test]
fn uid_prefix_is_forced() {
    let uid = Uid::from_bytes([0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    assert_eq!(uid.as_bytes()[0], 0xE0);
    assert_eq!(uid.manufacturer_id(), 0x01);
}
