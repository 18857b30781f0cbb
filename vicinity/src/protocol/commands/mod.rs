// vicinity/src/protocol/commands/mod.rs

pub mod inventory;
pub mod read;
pub mod security;
pub mod system;

pub use inventory::encode_inventory;
pub use read::encode_read_block;
pub use security::encode_get_blocks_security;
pub use system::encode_get_system_info;

use crate::constants::{
    CMD_GET_BLOCKS_SECURITY, CMD_GET_SYSTEM_INFO, CMD_INVENTORY, CMD_LOCK_AFI, CMD_LOCK_BLOCK,
    CMD_LOCK_DSFID, CMD_READ_BLOCK, CMD_READ_MULTI_BLOCKS, CMD_RESET_TO_READY, CMD_SELECT,
    CMD_STAY_QUIET, CMD_WRITE_AFI, CMD_WRITE_BLOCK, CMD_WRITE_DSFID, CMD_WRITE_MULTI_BLOCKS,
};

/// Closed set of standard ISO15693-3 commands. Custom-range opcodes
/// (`CMD_CUSTOM_START` and above) are deliberately not represented here;
/// they belong to protocol-specific layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Inventory,
    StayQuiet,
    ReadBlock,
    WriteBlock,
    LockBlock,
    ReadMultiBlocks,
    WriteMultiBlocks,
    Select,
    ResetToReady,
    WriteAfi,
    LockAfi,
    WriteDsfid,
    LockDsfid,
    GetSystemInfo,
    GetBlocksSecurity,
}

impl Command {
    /// Wire command code.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Inventory => CMD_INVENTORY,
            Self::StayQuiet => CMD_STAY_QUIET,
            Self::ReadBlock => CMD_READ_BLOCK,
            Self::WriteBlock => CMD_WRITE_BLOCK,
            Self::LockBlock => CMD_LOCK_BLOCK,
            Self::ReadMultiBlocks => CMD_READ_MULTI_BLOCKS,
            Self::WriteMultiBlocks => CMD_WRITE_MULTI_BLOCKS,
            Self::Select => CMD_SELECT,
            Self::ResetToReady => CMD_RESET_TO_READY,
            Self::WriteAfi => CMD_WRITE_AFI,
            Self::LockAfi => CMD_LOCK_AFI,
            Self::WriteDsfid => CMD_WRITE_DSFID,
            Self::LockDsfid => CMD_LOCK_DSFID,
            Self::GetSystemInfo => CMD_GET_SYSTEM_INFO,
            Self::GetBlocksSecurity => CMD_GET_BLOCKS_SECURITY,
        }
    }

    /// Map a wire command code back to a known command, or `None` for
    /// reserved or custom-range codes.
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        Some(match opcode {
            CMD_INVENTORY => Self::Inventory,
            CMD_STAY_QUIET => Self::StayQuiet,
            CMD_READ_BLOCK => Self::ReadBlock,
            CMD_WRITE_BLOCK => Self::WriteBlock,
            CMD_LOCK_BLOCK => Self::LockBlock,
            CMD_READ_MULTI_BLOCKS => Self::ReadMultiBlocks,
            CMD_WRITE_MULTI_BLOCKS => Self::WriteMultiBlocks,
            CMD_SELECT => Self::Select,
            CMD_RESET_TO_READY => Self::ResetToReady,
            CMD_WRITE_AFI => Self::WriteAfi,
            CMD_LOCK_AFI => Self::LockAfi,
            CMD_WRITE_DSFID => Self::WriteDsfid,
            CMD_LOCK_DSFID => Self::LockDsfid,
            CMD_GET_SYSTEM_INFO => Self::GetSystemInfo,
            CMD_GET_BLOCKS_SECURITY => Self::GetBlocksSecurity,
            _ => return None,
        })
    }
}
