// vicinity/src/prelude.rs

pub use crate::kv::{KeyValueStore, MemoryStore};
pub use crate::listener::{
    ExtensionOutcome, Listener, ListenerEvent, ListenerState, NoExtension, ProtocolExtension,
};
pub use crate::poller::{Poller, PollerState};
pub use crate::protocol::Command;
pub use crate::tag::TagData;
pub use crate::transport::{MockTransport, Transport, TransportError};
pub use crate::{Error, LockBits, Result, SystemInfo, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, fc_to_duration, parse_hex};
