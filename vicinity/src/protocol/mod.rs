// vicinity/src/protocol/mod.rs

pub mod classifier;
pub mod codec;
pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::Command;
pub use commands::{
    encode_get_blocks_security, encode_get_system_info, encode_inventory, encode_read_block,
};
pub use responses::{
    parse_block_security_response, parse_inventory_response, parse_read_block_response,
    parse_system_info_response,
};
