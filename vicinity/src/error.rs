// vicinity/src/error.rs

use thiserror::Error;

/// Common error type for the ISO15693-3 protocol engine.
///
/// The original control-flow codes ("ignore", "fully handled") are not
/// errors in this crate; they are expressed by the listener's dispatch
/// outcome types instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no card of this protocol present")]
    NotPresent,

    #[error("empty response buffer")]
    BufferEmpty,

    #[error("response exceeds the maximum frame size")]
    BufferOverflow,

    #[error("field off")]
    FieldOff,

    #[error("response CRC mismatch")]
    WrongCrc,

    #[error("operation timed out")]
    Timeout,

    #[error("malformed request or response")]
    Format,

    #[error("command not supported by the tag")]
    NotSupported,

    #[error("addressed UID does not match")]
    UidMismatch,

    #[error("unexpected response layout")]
    UnexpectedResponse,

    #[error("tag-internal error")]
    Internal,

    #[error("custom error code {0:#04x}")]
    Custom(u8),

    #[error("unknown error")]
    Unknown,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
