// vicinity/src/tag/persist.rs
//! Load/save of [`TagData`] against the persisted key-value image.
//!
//! The UID is deliberately not persisted here; the embedding application
//! keeps it under its own key. The legacy security layout (combined
//! lock-bits byte prepended to the per-block statuses) is consumed by
//! `load` only; `save` always writes the current layout, so old images
//! silently upgrade on the next save.

use crate::constants::{SYSINFO_FLAG_AFI, SYSINFO_FLAG_DSFID, SYSINFO_FLAG_IC_REF};
use crate::kv::KeyValueStore;
use crate::tag::TagData;
use crate::{Error, Result};

const KEY_DSFID: &str = "DSFID";
const KEY_AFI: &str = "AFI";
const KEY_IC_REF: &str = "IC Reference";
const KEY_BLOCK_COUNT: &str = "Block Count";
const KEY_BLOCK_SIZE: &str = "Block Size";
const KEY_DATA_CONTENT: &str = "Data Content";
const KEY_LOCK_DSFID: &str = "Lock DSFID";
const KEY_LOCK_AFI: &str = "Lock AFI";
const KEY_SECURITY_STATUS: &str = "Security Status";

fn read_hex_byte(store: &dyn KeyValueStore, key: &str) -> Result<u8> {
    let bytes = store.read_hex(key)?;
    if bytes.len() != 1 {
        return Err(Error::Format);
    }
    Ok(bytes[0])
}

/// Populate `tag` from a persisted image. Optional fields are read only
/// when their key exists; their presence flags are set accordingly.
pub fn load(tag: &mut TagData, store: &dyn KeyValueStore) -> Result<()> {
    if store.has_key(KEY_DSFID) {
        tag.system_info.dsfid = read_hex_byte(store, KEY_DSFID)?;
        tag.system_info.flags |= SYSINFO_FLAG_DSFID;
    }
    if store.has_key(KEY_AFI) {
        tag.system_info.afi = read_hex_byte(store, KEY_AFI)?;
        tag.system_info.flags |= SYSINFO_FLAG_AFI;
    }
    if store.has_key(KEY_IC_REF) {
        tag.system_info.ic_ref = read_hex_byte(store, KEY_IC_REF)?;
        tag.system_info.flags |= SYSINFO_FLAG_IC_REF;
    }

    // Legacy images predate the dedicated lock-bit keys and instead
    // prepend a combined lock byte to the security statuses.
    let legacy = !(store.has_key(KEY_LOCK_DSFID) && store.has_key(KEY_LOCK_AFI));
    if !legacy {
        tag.lock_bits.dsfid = store.read_bool(KEY_LOCK_DSFID)?;
        tag.lock_bits.afi = store.read_bool(KEY_LOCK_AFI)?;
    }

    // Block geometry is read together or not at all.
    if store.has_key(KEY_BLOCK_COUNT) && store.has_key(KEY_BLOCK_SIZE) {
        let block_count = store.read_u32(KEY_BLOCK_COUNT)? as usize;
        let block_size = store.read_u32(KEY_BLOCK_SIZE)? as usize;
        tag.resize_blocks(block_count, block_size)?;

        let data = store.read_hex(KEY_DATA_CONTENT)?;
        tag.set_block_data_raw(&data)?;

        let security = store.read_hex(KEY_SECURITY_STATUS)?;
        if legacy {
            // First byte is the historical combined lock-bits byte.
            if security.len() != block_count + 1 {
                return Err(Error::Format);
            }
            tag.lock_bits.dsfid = security[0] & 0x01 != 0;
            tag.lock_bits.afi = security[0] & 0x02 != 0;
            tag.set_security_status_raw(&security[1..])?;
        } else {
            if security.len() != block_count {
                return Err(Error::Format);
            }
            tag.set_security_status_raw(&security)?;
        }
    }

    Ok(())
}

/// Write `tag` to a persisted image, presence-flagged fields only, in
/// fixed key order. The lock-bit booleans are always written.
pub fn save(tag: &TagData, store: &mut dyn KeyValueStore) -> Result<()> {
    store.write_comment("ISO15693-3 specific data")?;

    if tag.system_info.has_dsfid() {
        store.write_comment("Data Storage Format Identifier")?;
        store.write_hex(KEY_DSFID, &[tag.system_info.dsfid])?;
    }
    if tag.system_info.has_afi() {
        store.write_comment("Application Family Identifier")?;
        store.write_hex(KEY_AFI, &[tag.system_info.afi])?;
    }
    if tag.system_info.has_ic_ref() {
        store.write_hex(KEY_IC_REF, &[tag.system_info.ic_ref])?;
    }

    store.write_comment("Lock bits")?;
    store.write_bool(KEY_LOCK_DSFID, tag.lock_bits.dsfid)?;
    store.write_bool(KEY_LOCK_AFI, tag.lock_bits.afi)?;

    if tag.system_info.has_memory() {
        store.write_comment("Number of memory blocks, valid range = 1..256")?;
        store.write_u32(KEY_BLOCK_COUNT, tag.block_count() as u32)?;
        store.write_comment("Size of a single memory block, valid range = 1..32")?;
        store.write_u32(KEY_BLOCK_SIZE, tag.block_size() as u32)?;
        store.write_hex(KEY_DATA_CONTENT, tag.block_data_raw())?;
        store.write_comment("Block security status: 01 = locked, 00 = unlocked")?;
        store.write_hex(KEY_SECURITY_STATUS, tag.security_status_raw())?;
    }

    Ok(())
}
