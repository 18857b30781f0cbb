// vicinity/src/poller/mod.rs
//! Poller (VCD / reader) side of the ISO15693-3 protocol: one
//! request/response round trip per command, plus the activation sequence
//! Inventory -> System Info -> Read Blocks -> Get Block Security.

use log::{debug, trace, warn};

use crate::constants::{
    FDT_POLL_FC, FRAME_SIZE_MAX, GUARD_TIME_US, SECURITY_BATCH_MAX,
};
use crate::protocol::{
    classifier, commands, responses,
};
use crate::tag::TagData;
use crate::transport::Transport;
use crate::types::{SystemInfo, Uid};
use crate::{iso13239, Error, Result};

/// Collision-resolution / activation state of the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollerState {
    #[default]
    Idle,
    ColResInProgress,
    ColResFailed,
    Activated,
}

/// Poller engine. Owns the transport for the duration of a session.
pub struct Poller<T: Transport> {
    transport: T,
    state: PollerState,
    fdt_poll: u32,
}

impl<T: Transport> Poller<T> {
    /// Create a poller and configure the transport timing.
    pub fn new(mut transport: T) -> Result<Self> {
        transport
            .set_guard_time(GUARD_TIME_US)
            .map_err(classifier::from_poller_transport)?;
        transport
            .set_frame_delay_poll(FDT_POLL_FC)
            .map_err(classifier::from_poller_transport)?;

        Ok(Self {
            transport,
            state: PollerState::Idle,
            fdt_poll: FDT_POLL_FC,
        })
    }

    /// Current activation state.
    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Override the frame delay time for subsequent requests.
    pub fn set_fdt_poll(&mut self, fdt: u32) {
        self.fdt_poll = fdt;
    }

    /// Uniform request/response exchange: append CRC, transmit, verify
    /// and strip the response CRC.
    pub fn send_frame(&mut self, tx: &[u8], fdt: u32) -> Result<Vec<u8>> {
        if tx.len() + iso13239::CRC_SIZE > FRAME_SIZE_MAX {
            return Err(Error::BufferOverflow);
        }

        let mut frame = tx.to_vec();
        iso13239::append(&mut frame);

        let mut rx = self
            .transport
            .transmit_receive(&frame, fdt)
            .map_err(classifier::from_poller_transport)?;

        if !iso13239::check(&rx) {
            return Err(Error::WrongCrc);
        }
        iso13239::trim(&mut rx);

        trace!("rx {} bytes", rx.len());
        Ok(rx)
    }

    /// Send a single-slot Inventory request and parse the UID.
    pub fn inventory(&mut self) -> Result<Uid> {
        let rx = self.send_frame(&commands::encode_inventory(), self.fdt_poll)?;
        responses::parse_inventory_response(&rx)
    }

    /// Request the tag's system information.
    pub fn get_system_info(&mut self) -> Result<SystemInfo> {
        let rx = self.send_frame(&commands::encode_get_system_info(), self.fdt_poll)?;
        responses::parse_system_info_response(&rx)
    }

    /// Read every block into `tag`, one Read Single Block request per
    /// block. Aborts on the first hard failure.
    pub fn read_blocks(&mut self, tag: &mut TagData) -> Result<()> {
        let block_size = tag.block_size();
        for block_num in 0..tag.block_count() {
            let rx = self.send_frame(&commands::encode_read_block(block_num as u8), self.fdt_poll)?;
            let data = responses::parse_read_block_response(&rx, block_size)?;
            tag.set_block_data(block_num, &data);
        }
        debug!("read {} blocks", tag.block_count());
        Ok(())
    }

    /// Fetch per-block security statuses into `tag`, batched because the
    /// wire encodes the count in one biased byte and the response buffer
    /// is bounded.
    pub fn get_blocks_security(&mut self, tag: &mut TagData) -> Result<()> {
        let block_count = tag.block_count();
        let mut statuses = Vec::with_capacity(block_count);

        let mut first = 0usize;
        while first < block_count {
            let batch = (block_count - first).min(SECURITY_BATCH_MAX);
            let rx = self.send_frame(
                &commands::encode_get_blocks_security(first as u8, batch as u8),
                self.fdt_poll,
            )?;
            statuses.extend(responses::parse_block_security_response(&rx, batch)?);
            first += batch;
        }

        tag.set_security_status_raw(&statuses)
    }

    /// Run the activation procedure, populating `tag`.
    ///
    /// Inventory failure is fatal; System Info, Read Blocks and Get Block
    /// Security are optional steps whose NotSupported/Timeout failures
    /// leave the activation successful with partial data.
    pub fn activate(&mut self, tag: &mut TagData) -> Result<()> {
        tag.reset();
        self.state = PollerState::ColResInProgress;

        let uid = match self.inventory() {
            Ok(uid) => uid,
            Err(error) => {
                warn!("inventory failed: {error}");
                self.state = PollerState::ColResFailed;
                return Err(error);
            }
        };
        tag.set_uid_value(uid);

        // UID acquisition alone means the card is present and identified.
        self.state = PollerState::Activated;
        debug!("activated tag {}", uid.to_hex());

        let info = match self.get_system_info() {
            Ok(info) => info,
            Err(error) => return classifier::filter_optional_error(error),
        };
        tag.system_info = info;

        if info.has_memory() && info.block_count > 0 {
            tag.resize_blocks(usize::from(info.block_count), usize::from(info.block_size))?;

            if let Err(error) = self.read_blocks(tag) {
                return classifier::filter_optional_error(error);
            }
            if let Err(error) = self.get_blocks_security(tag) {
                return classifier::filter_optional_error(error);
            }
        }

        Ok(())
    }
}
