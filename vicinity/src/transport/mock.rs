// vicinity/src/transport/mock.rs

use crate::transport::traits::{Transport, TransportError};

/// Mock transport for unit tests. It records transmitted frames and
/// returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of exchanges that should fail hard before any
    /// queued response is returned.
    pub failures: usize,
}

impl MockTransport {
    /// An empty mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame to be returned by the next exchange.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Set how many subsequent exchanges should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Take the oldest transmitted frame, if any.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn transmit_receive(&mut self, tx: &[u8], _fdt: u32) -> Result<Vec<u8>, TransportError> {
        self.sent.push(tx.to_vec());
        if self.failures > 0 {
            self.failures -= 1;
            return Err(TransportError::Failure);
        }
        if self.responses.is_empty() {
            Err(TransportError::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn transmit(&mut self, tx: &[u8]) -> Result<(), TransportError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(TransportError::Failure);
        }
        self.sent.push(tx.to_vec());
        Ok(())
    }
}
