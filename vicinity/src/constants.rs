// vicinity/src/constants.rs
//! Common ISO/IEC 15693-3 protocol constants used across the crate.

/// UID length in bytes. Byte 0 is always [`UID_PREFIX`] for vicinity cards.
pub const UID_SIZE: usize = 8;

/// Mandatory first UID byte per ISO15693-3 (allocation class E0).
pub const UID_PREFIX: u8 = 0xE0;

/// Offset of the IC manufacturer code within a stored UID.
pub const UID_MANUFACTURER_OFFSET: usize = 1;

/// Maximum number of blocks addressable by the single-byte block fields.
pub const BLOCK_COUNT_MAX: usize = 256;

/// Maximum block size in bytes (wire field is biased by -1).
pub const BLOCK_SIZE_MAX: usize = 32;

/// Upper bound on blocks requested per Get Multiple Block Security
/// exchange on the poller side, to bound the response buffer.
pub const SECURITY_BATCH_MAX: usize = 32;

/// Largest wire frame either engine will assemble, CRC included.
pub const FRAME_SIZE_MAX: usize = 1024;

// --- Request flags (byte 0 of every request) ---

/// Subcarrier selection flag.
pub const REQ_FLAG_SUBCARRIER_1: u8 = 1 << 0;
/// High data rate flag.
pub const REQ_FLAG_DATA_RATE_HI: u8 = 1 << 1;
/// Inventory flag: selects the T5 interpretation of bits 4..6.
pub const REQ_FLAG_INVENTORY_T5: u8 = 1 << 2;
/// Protocol extension flag (always 0 in this implementation).
pub const REQ_FLAG_EXTENSION: u8 = 1 << 3;

/// T4 (non-inventory): command is for the selected tag only.
pub const REQ_FLAG_T4_SELECTED: u8 = 1 << 4;
/// T4 (non-inventory): command carries the target UID.
pub const REQ_FLAG_T4_ADDRESSED: u8 = 1 << 5;
/// T4 (non-inventory): option flag (security status on reads, EOF-deferred
/// response on writes).
pub const REQ_FLAG_T4_OPTION: u8 = 1 << 6;

/// T5 (inventory): the request carries an AFI byte before the mask length.
pub const REQ_FLAG_T5_AFI_PRESENT: u8 = 1 << 4;
/// T5 (inventory): single-slot inventory.
pub const REQ_FLAG_T5_N_SLOTS_1: u8 = 1 << 5;

// --- Response flags (byte 0 of every response) ---

/// No flags set: success response.
pub const RESP_FLAG_NONE: u8 = 0x00;
/// Error flag: the response is a 2-byte error frame.
pub const RESP_FLAG_ERROR: u8 = 1 << 0;

// --- Wire error codes (byte 1 of an error frame) ---

/// Command not supported.
pub const RESP_ERROR_NOT_SUPPORTED: u8 = 0x01;
/// Command not recognized (format error).
pub const RESP_ERROR_FORMAT: u8 = 0x02;
/// Option not supported.
pub const RESP_ERROR_OPTION: u8 = 0x03;
/// Unspecified error, the only code this listener emits.
pub const RESP_ERROR_UNKNOWN: u8 = 0x0F;
/// Block not available.
pub const RESP_ERROR_BLOCK_UNAVAILABLE: u8 = 0x10;
/// Block already locked.
pub const RESP_ERROR_BLOCK_ALREADY_LOCKED: u8 = 0x11;
/// Block locked, content not changed.
pub const RESP_ERROR_BLOCK_LOCKED: u8 = 0x12;
/// Block write failed.
pub const RESP_ERROR_BLOCK_WRITE: u8 = 0x13;
/// Block lock failed.
pub const RESP_ERROR_BLOCK_LOCK: u8 = 0x14;

/// Custom (IC-manufacturer-dependent) error code range, inclusive.
pub const RESP_ERROR_CUSTOM_START: u8 = 0xA0;
/// Last custom error code, inclusive.
pub const RESP_ERROR_CUSTOM_END: u8 = 0xDF;

// --- Command codes ---

/// First mandatory command code.
pub const CMD_MANDATORY_START: u8 = 0x01;
/// Inventory.
pub const CMD_INVENTORY: u8 = 0x01;
/// Stay Quiet.
pub const CMD_STAY_QUIET: u8 = 0x02;
/// First reserved code after the mandatory range.
pub const CMD_MANDATORY_RFU: u8 = 0x03;

/// First optional command code.
pub const CMD_OPTIONAL_START: u8 = 0x20;
/// Read Single Block.
pub const CMD_READ_BLOCK: u8 = 0x20;
/// Write Single Block.
pub const CMD_WRITE_BLOCK: u8 = 0x21;
/// Lock Block.
pub const CMD_LOCK_BLOCK: u8 = 0x22;
/// Read Multiple Blocks.
pub const CMD_READ_MULTI_BLOCKS: u8 = 0x23;
/// Write Multiple Blocks.
pub const CMD_WRITE_MULTI_BLOCKS: u8 = 0x24;
/// Select.
pub const CMD_SELECT: u8 = 0x25;
/// Reset to Ready.
pub const CMD_RESET_TO_READY: u8 = 0x26;
/// Write AFI.
pub const CMD_WRITE_AFI: u8 = 0x27;
/// Lock AFI.
pub const CMD_LOCK_AFI: u8 = 0x28;
/// Write DSFID.
pub const CMD_WRITE_DSFID: u8 = 0x29;
/// Lock DSFID.
pub const CMD_LOCK_DSFID: u8 = 0x2A;
/// Get System Information.
pub const CMD_GET_SYSTEM_INFO: u8 = 0x2B;
/// Get Multiple Block Security Status.
pub const CMD_GET_BLOCKS_SECURITY: u8 = 0x2C;
/// First reserved code after the optional range.
pub const CMD_OPTIONAL_RFU: u8 = 0x2D;

/// First custom (IC-manufacturer-dependent) command code.
pub const CMD_CUSTOM_START: u8 = 0xA0;

// --- System info presence flags ---

/// DSFID field present.
pub const SYSINFO_FLAG_DSFID: u8 = 1 << 0;
/// AFI field present.
pub const SYSINFO_FLAG_AFI: u8 = 1 << 1;
/// Memory geometry fields present.
pub const SYSINFO_FLAG_MEMORY: u8 = 1 << 2;
/// IC reference field present.
pub const SYSINFO_FLAG_IC_REF: u8 = 1 << 3;

// --- Timing ---

/// RF carrier frequency in Hz (fc).
pub const FC_HZ: u64 = 13_560_000;

/// Guard time between field on and the first request, in microseconds.
pub const GUARD_TIME_US: u32 = 5000;

/// Default poller frame delay time (request to response) in carrier cycles.
pub const FDT_POLL_FC: u32 = 4202;

/// Default listener frame delay time in carrier cycles.
pub const FDT_LISTEN_FC: u32 = 4320;
