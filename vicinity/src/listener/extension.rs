// vicinity/src/listener/extension.rs
//! Extension hook for family-specific ISO15693 variants layered on top of
//! the generic command set. A wrapping protocol implements the methods it
//! cares about; every default defers to the built-in handler.

use crate::tag::TagData;

/// What the extension decided about a request, consulted after the
/// built-in handler has validated the request but before it mutates any
/// state or appends payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionOutcome {
    /// Continue with the built-in handler.
    #[default]
    Passthrough,
    /// The extension already wrote the remaining response body; send it
    /// as-is and skip the built-in handler.
    FullyHandled,
    /// Veto the request; the generic error frame is sent.
    Reject,
    /// Veto the request silently; no response at all.
    Silent,
}

/// One strongly-typed method per standard command. `resp` is the
/// response body under construction (flags byte already present) for the
/// commands that produce a payload.
#[allow(unused_variables)]
pub trait ProtocolExtension {
    fn on_inventory(&mut self, tag: &mut TagData, resp: &mut Vec<u8>) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_stay_quiet(&mut self, tag: &mut TagData) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_read_block(
        &mut self,
        tag: &mut TagData,
        block_index: usize,
        resp: &mut Vec<u8>,
    ) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_write_block(
        &mut self,
        tag: &mut TagData,
        block_index: usize,
        data: &[u8],
    ) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_lock_block(&mut self, tag: &mut TagData, block_index: usize) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_read_multi_blocks(
        &mut self,
        tag: &mut TagData,
        first_block: usize,
        last_block: usize,
        resp: &mut Vec<u8>,
    ) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_write_multi_blocks(
        &mut self,
        tag: &mut TagData,
        first_block: usize,
        last_block: usize,
    ) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_select(&mut self, tag: &mut TagData) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_reset_to_ready(&mut self, tag: &mut TagData) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_write_afi(&mut self, tag: &mut TagData, afi: u8) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_lock_afi(&mut self, tag: &mut TagData) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_write_dsfid(&mut self, tag: &mut TagData, dsfid: u8) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_lock_dsfid(&mut self, tag: &mut TagData) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_get_system_info(&mut self, tag: &mut TagData, resp: &mut Vec<u8>) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }

    fn on_get_blocks_security(
        &mut self,
        tag: &mut TagData,
        first_block: usize,
        last_block: usize,
        resp: &mut Vec<u8>,
    ) -> ExtensionOutcome {
        ExtensionOutcome::Passthrough
    }
}

/// Extension that defers everything; used when no family-specific layer
/// is installed.
#[derive(Debug, Default)]
pub struct NoExtension;

impl ProtocolExtension for NoExtension {}
