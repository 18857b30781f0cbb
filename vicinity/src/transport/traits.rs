// vicinity/src/transport/traits.rs

/// Failure signal of the RF transport, before protocol-level
/// classification. The poller and listener map these differently, see
/// `protocol::classifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// No frame arrived within the frame delay time.
    Timeout,
    /// Any other transport failure (field off, hardware fault).
    Failure,
}

/// Transport trait abstracts the RF front end away from the protocol
/// engines. Frames passed through it are complete wire frames, CRC
/// included; the engines own CRC handling.
pub trait Transport {
    /// Transmit a request and wait for the response for at most `fdt`
    /// carrier cycles (poller side).
    fn transmit_receive(&mut self, tx: &[u8], fdt: u32) -> Result<Vec<u8>, TransportError>;

    /// Transmit a response frame (listener side).
    fn transmit(&mut self, tx: &[u8]) -> Result<(), TransportError>;

    /// Set the guard time between field on and the first request.
    /// Default is a no-op for transports with fixed timing.
    fn set_guard_time(&mut self, _us: u32) -> Result<(), TransportError> {
        Ok(())
    }

    /// Set the poll-side frame delay time in carrier cycles.
    fn set_frame_delay_poll(&mut self, _cycles: u32) -> Result<(), TransportError> {
        Ok(())
    }

    /// Set the listen-side frame delay time in carrier cycles.
    fn set_frame_delay_listen(&mut self, _cycles: u32) -> Result<(), TransportError> {
        Ok(())
    }
}
