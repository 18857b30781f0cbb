// vicinity/src/listener/mod.rs
//! Listener (VICC / tag emulation) side: session state machine, frame
//! dispatch, and per-command handlers.

use log::{debug, trace};

use crate::constants::{
    CMD_CUSTOM_START, CMD_SELECT, FDT_LISTEN_FC, REQ_FLAG_INVENTORY_T5, REQ_FLAG_T4_ADDRESSED,
    REQ_FLAG_T4_SELECTED, RESP_ERROR_UNKNOWN, RESP_FLAG_ERROR, UID_SIZE,
};
use crate::protocol::{classifier, Command};
use crate::tag::TagData;
use crate::transport::Transport;
use crate::{iso13239, Error, Result};

pub mod extension;
mod handlers;

pub use extension::{ExtensionOutcome, NoExtension, ProtocolExtension};

/// Persistent tag session state across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListenerState {
    #[default]
    Ready,
    Selected,
    /// Entered by Stay Quiet; left only by an external field reset,
    /// modeled as the owner calling [`Listener::ready`].
    Quiet,
}

/// Per-frame session flags, reset at the boundary of every inbound frame.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SessionState {
    pub selected: bool,
    pub addressed: bool,
    /// Armed by write/lock handlers when the request used the option
    /// flag; the response is deferred until the next single-EOF frame.
    pub wait_for_eof: bool,
}

/// What happened to an inbound frame, for the embedding event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerEvent {
    /// The frame was dispatched; a response was sent or deferred.
    Handled,
    /// The frame was deliberately not answered (malformed, quiet state,
    /// mode mismatch, Stay Quiet).
    Ignored,
    /// Custom-range opcode addressed to this tag's manufacturer; the
    /// embedding protocol layer owns it.
    CustomCommand,
    /// Addressed frame whose UID did not match this tag. The Select
    /// deselection side effect has already been applied.
    UidMismatch,
}

/// What a command handler decided, making the "should I transmit"
/// question a single match in the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DispatchOutcome {
    /// Send the assembled response body (flags byte included).
    Reply(Vec<u8>),
    /// Send nothing at all. Malformed request layouts end up here.
    NoReply,
    /// Send the generic 2-byte error frame. Reserved for requests that
    /// parse but cannot be honored: bad bounds, locks, payload sizes.
    ErrorFrame,
}

/// Listener engine. Owns the tag it emulates and the transport it
/// answers on.
pub struct Listener<T: Transport> {
    pub(crate) tag: TagData,
    pub(crate) state: ListenerState,
    pub(crate) session: SessionState,
    pub(crate) extension: Option<Box<dyn ProtocolExtension>>,
    transport: T,
    /// Response deferred until a single-EOF frame arrives.
    pending_tx: Option<Vec<u8>>,
}

impl<T: Transport> Listener<T> {
    /// Start emulating `tag` on `transport`, entering listen mode.
    pub fn new(tag: TagData, mut transport: T) -> Result<Self> {
        transport
            .set_frame_delay_listen(FDT_LISTEN_FC)
            .map_err(classifier::from_listener_transport)?;

        Ok(Self {
            tag,
            state: ListenerState::Ready,
            session: SessionState::default(),
            extension: None,
            transport,
            pending_tx: None,
        })
    }

    /// Install a family-specific extension layer.
    pub fn set_extension(&mut self, extension: Box<dyn ProtocolExtension>) {
        self.extension = Some(extension);
    }

    /// Current session state.
    pub fn state(&self) -> ListenerState {
        self.state
    }

    /// Borrow the emulated tag.
    pub fn tag(&self) -> &TagData {
        &self.tag
    }

    /// Mutably borrow the emulated tag.
    pub fn tag_mut(&mut self) -> &mut TagData {
        &mut self.tag
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// External field reset: back to Ready, dropping any deferred state.
    pub fn ready(&mut self) {
        self.state = ListenerState::Ready;
        self.session = SessionState::default();
        self.pending_tx = None;
    }

    /// Process one inbound wire frame, CRC still attached. A frame with
    /// a bad CRC is silently dropped; a zero-length frame is the
    /// single-EOF signal completing an option-flag write sequence.
    pub fn process_frame(&mut self, rx: &[u8]) -> Result<ListenerEvent> {
        if rx.is_empty() {
            return self.process_single_eof();
        }

        if !iso13239::check(rx) {
            trace!("dropping frame with bad crc");
            return Ok(ListenerEvent::Ignored);
        }

        let payload = &rx[..rx.len() - iso13239::CRC_SIZE];
        self.process_request(payload)
    }

    /// Process a CRC-stripped request frame.
    pub fn process_request(&mut self, request: &[u8]) -> Result<ListenerEvent> {
        // A new frame abandons any in-flight wait-for-EOF state.
        self.session = SessionState::default();
        self.pending_tx = None;

        // flags + command at minimum
        if request.len() < 2 {
            return Ok(ListenerEvent::Ignored);
        }
        let flags = request[0];
        let command = request[1];
        let body = &request[2..];

        if flags & REQ_FLAG_INVENTORY_T5 == 0 {
            self.session.selected = flags & REQ_FLAG_T4_SELECTED != 0;
            self.session.addressed = flags & REQ_FLAG_T4_ADDRESSED != 0;

            if self.session.selected && self.session.addressed {
                // A request mode can be either addressed or selected, not both
                return Err(Error::Unknown);
            } else if self.state == ListenerState::Quiet {
                // A quiet tag ignores addressed commands
                if self.session.addressed {
                    return Ok(ListenerEvent::Ignored);
                }
            } else if self.state != ListenerState::Selected && self.session.selected {
                // Selected-mode commands are for the selected tag only
                return Ok(ListenerEvent::Ignored);
            }
        } else {
            // A quiet tag ignores inventory commands entirely
            if self.state == ListenerState::Quiet {
                return Ok(ListenerEvent::Ignored);
            }
            self.session.selected = false;
            self.session.addressed = false;
        }

        if command >= CMD_CUSTOM_START {
            return Ok(self.handle_custom_request(body));
        }

        let data = if self.session.addressed {
            // Addressed mode: the UID follows the command byte
            if body.len() < UID_SIZE {
                return Ok(ListenerEvent::Ignored);
            }
            let (wire_uid, rest) = body.split_at(UID_SIZE);
            if !self.tag.uid().matches_wire(wire_uid) {
                // A mismatched Select deselects a currently selected tag
                if command == CMD_SELECT && self.state == ListenerState::Selected {
                    self.state = ListenerState::Ready;
                }
                return Ok(ListenerEvent::UidMismatch);
            }
            rest
        } else {
            body
        };

        self.handle_standard_request(command, data, flags)
    }

    /// Complete a deferred option-flag write: send the stashed response.
    pub fn process_single_eof(&mut self) -> Result<ListenerEvent> {
        if !self.session.wait_for_eof {
            return Err(Error::UnexpectedResponse);
        }
        self.session.wait_for_eof = false;

        if let Some(body) = self.pending_tx.take() {
            self.send_frame(&body)?;
        }
        Ok(ListenerEvent::Handled)
    }

    fn handle_custom_request(&mut self, body: &[u8]) -> ListenerEvent {
        // Byte 0 of a custom command is the manufacturer code
        let Some(manufacturer) = body.first() else {
            return ListenerEvent::Ignored;
        };
        if *manufacturer != self.tag.manufacturer_id() {
            return ListenerEvent::Ignored;
        }
        ListenerEvent::CustomCommand
    }

    fn handle_standard_request(
        &mut self,
        opcode: u8,
        data: &[u8],
        flags: u8,
    ) -> Result<ListenerEvent> {
        let Some(command) = Command::from_opcode(opcode) else {
            // Reserved opcode: surface the same way as a custom command
            // so the embedder's callback gets a chance at it.
            debug!("unhandled opcode {opcode:#04x}");
            return Ok(ListenerEvent::CustomCommand);
        };

        let outcome = self.dispatch(command, data, flags);

        let body = match outcome {
            DispatchOutcome::NoReply => return Ok(ListenerEvent::Ignored),
            DispatchOutcome::Reply(body) => body,
            DispatchOutcome::ErrorFrame => {
                // Fine-grained codes are not forwarded outward
                vec![RESP_FLAG_ERROR, RESP_ERROR_UNKNOWN]
            }
        };

        if self.session.wait_for_eof {
            self.pending_tx = Some(body);
        } else {
            self.send_frame(&body)?;
        }
        Ok(ListenerEvent::Handled)
    }

    /// Append the CRC and transmit a response frame.
    pub(crate) fn send_frame(&mut self, body: &[u8]) -> Result<()> {
        let mut frame = body.to_vec();
        iso13239::append(&mut frame);
        self.transport
            .transmit(&frame)
            .map_err(classifier::from_listener_transport)
    }
}
