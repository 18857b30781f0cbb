// vicinity/src/lib.rs

//! vicinity
//!
//! Pure Rust protocol engine for ISO/IEC 15693-3 vicinity cards, with
//! both a poller (reader) and a listener (tag emulation) side.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod iso13239;
pub mod kv;
pub mod listener;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
