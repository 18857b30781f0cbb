// vicinity/src/protocol/classifier.rs
//! Error classification: wire error frames, transport failures, and the
//! poller-side filter for optional commands.

use crate::constants::{
    RESP_ERROR_BLOCK_ALREADY_LOCKED, RESP_ERROR_BLOCK_LOCK, RESP_ERROR_BLOCK_LOCKED,
    RESP_ERROR_BLOCK_UNAVAILABLE, RESP_ERROR_BLOCK_WRITE, RESP_ERROR_CUSTOM_END,
    RESP_ERROR_CUSTOM_START, RESP_ERROR_FORMAT, RESP_ERROR_NOT_SUPPORTED, RESP_ERROR_OPTION,
    RESP_FLAG_ERROR,
};
use crate::transport::TransportError;
use crate::{Error, Result};

/// Fixed layout of an error frame: flags + error code.
const ERROR_FRAME_SIZE: usize = 2;

/// Inspect a CRC-stripped response buffer for an error frame.
///
/// Returns `None` when the buffer is a success response that the caller
/// should parse further. Every response parser calls this first.
pub fn classify_response(buf: &[u8]) -> Option<Error> {
    // An empty response after a request is always anomalous, including
    // the "no response at all" case.
    let flags = match buf.first() {
        None => return Some(Error::BufferEmpty),
        Some(flags) => *flags,
    };

    if flags & RESP_FLAG_ERROR == 0 {
        return None;
    }

    if buf.len() < ERROR_FRAME_SIZE {
        return Some(Error::UnexpectedResponse);
    }

    let code = buf[1];
    if (RESP_ERROR_CUSTOM_START..=RESP_ERROR_CUSTOM_END).contains(&code) {
        // Interpretation is deferred to a protocol-specific extension.
        return Some(Error::Custom(code));
    }

    Some(match code {
        RESP_ERROR_NOT_SUPPORTED | RESP_ERROR_OPTION => Error::NotSupported,
        RESP_ERROR_FORMAT => Error::Format,
        RESP_ERROR_BLOCK_UNAVAILABLE
        | RESP_ERROR_BLOCK_ALREADY_LOCKED
        | RESP_ERROR_BLOCK_LOCKED
        | RESP_ERROR_BLOCK_WRITE
        | RESP_ERROR_BLOCK_LOCK => Error::Internal,
        _ => Error::Unknown,
    })
}

/// Map a transport failure on the poller side. Anything that is not a
/// timeout means the card left the field.
pub fn from_poller_transport(error: TransportError) -> Error {
    match error {
        TransportError::Timeout => Error::Timeout,
        TransportError::Failure => Error::NotPresent,
    }
}

/// Map a transport failure on the listener side, where a hard failure is
/// a field-off condition.
pub fn from_listener_transport(error: TransportError) -> Error {
    match error {
        TransportError::Timeout => Error::Timeout,
        TransportError::Failure => Error::FieldOff,
    }
}

/// Downgrade failures of optional activation steps: a tag that does not
/// implement an optional command (or does not answer it) is not a failed
/// activation, only a missing feature.
pub fn filter_optional_error(error: Error) -> Result<()> {
    match error {
        Error::NotSupported | Error::Timeout => Ok(()),
        other => Err(other),
    }
}
