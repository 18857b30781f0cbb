// vicinity/src/kv/traits.rs

use crate::Result;

/// Persisted-image collaborator: a line-oriented key-value store owned by
/// the embedding application. The tag data model only reads and writes
/// named fields by key, as hex byte blobs, booleans, or integers;
/// comments are purely for human readability of the persisted text.
pub trait KeyValueStore {
    /// Whether `key` is present in the store.
    fn has_key(&self, key: &str) -> bool;

    /// Write a comment line preceding the next key group. Default is a
    /// no-op for stores without a textual form.
    fn write_comment(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    /// Read `key` as a byte blob.
    fn read_hex(&self, key: &str) -> Result<Vec<u8>>;
    /// Write `key` as a byte blob.
    fn write_hex(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Read `key` as a boolean.
    fn read_bool(&self, key: &str) -> Result<bool>;
    /// Write `key` as a boolean.
    fn write_bool(&mut self, key: &str, value: bool) -> Result<()>;

    /// Read `key` as an unsigned integer.
    fn read_u32(&self, key: &str) -> Result<u32>;
    /// Write `key` as an unsigned integer.
    fn write_u32(&mut self, key: &str, value: u32) -> Result<()>;
}
