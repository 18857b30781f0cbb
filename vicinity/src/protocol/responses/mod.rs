// vicinity/src/protocol/responses/mod.rs

pub mod inventory;
pub mod read;
pub mod security;
pub mod system;

pub use inventory::parse_inventory_response;
pub use read::parse_read_block_response;
pub use security::parse_block_security_response;
pub use system::parse_system_info_response;
