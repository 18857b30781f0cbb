// vicinity/src/kv/memory.rs

use crate::kv::traits::KeyValueStore;
use crate::{Error, Result};
use std::collections::HashMap;

/// Typed value held by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Byte blob.
    Hex(Vec<u8>),
    /// Boolean flag.
    Bool(bool),
    /// Unsigned integer.
    U32(u32),
}

/// In-memory key-value store for unit tests and round trips. It records
/// comments so tests can assert on the human-readable structure.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored key-value pairs.
    pub entries: HashMap<String, Value>,
    /// Comment lines in write order.
    pub comments: Vec<String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a byte-blob entry.
    pub fn insert_hex(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), Value::Hex(value));
    }

    /// Seed a boolean entry.
    pub fn insert_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_string(), Value::Bool(value));
    }

    /// Seed an integer entry.
    pub fn insert_u32(&mut self, key: &str, value: u32) {
        self.entries.insert(key.to_string(), Value::U32(value));
    }

    /// Drop an entry, typically to simulate a truncated image.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl KeyValueStore for MemoryStore {
    fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn write_comment(&mut self, text: &str) -> Result<()> {
        self.comments.push(text.to_string());
        Ok(())
    }

    fn read_hex(&self, key: &str) -> Result<Vec<u8>> {
        match self.entries.get(key) {
            Some(Value::Hex(bytes)) => Ok(bytes.clone()),
            _ => Err(Error::Format),
        }
    }

    fn write_hex(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries
            .insert(key.to_string(), Value::Hex(value.to_vec()));
        Ok(())
    }

    fn read_bool(&self, key: &str) -> Result<bool> {
        match self.entries.get(key) {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(Error::Format),
        }
    }

    fn write_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.entries.insert(key.to_string(), Value::Bool(value));
        Ok(())
    }

    fn read_u32(&self, key: &str) -> Result<u32> {
        match self.entries.get(key) {
            Some(Value::U32(v)) => Ok(*v),
            _ => Err(Error::Format),
        }
    }

    fn write_u32(&mut self, key: &str, value: u32) -> Result<()> {
        self.entries.insert(key.to_string(), Value::U32(value));
        Ok(())
    }
}
