// vicinity/src/protocol/commands/inventory.rs

use crate::constants::{
    CMD_INVENTORY, REQ_FLAG_DATA_RATE_HI, REQ_FLAG_INVENTORY_T5, REQ_FLAG_T5_N_SLOTS_1,
};

/// Encode a single-slot Inventory request with no AFI filter and an
/// empty mask.
pub fn encode_inventory() -> Vec<u8> {
    vec![
        REQ_FLAG_DATA_RATE_HI | REQ_FLAG_INVENTORY_T5 | REQ_FLAG_T5_N_SLOTS_1,
        CMD_INVENTORY,
        0x00, // mask length
    ]
}
