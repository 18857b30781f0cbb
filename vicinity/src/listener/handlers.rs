// vicinity/src/listener/handlers.rs
//! Per-command handlers for the listener. Each handler validates the
//! request layout, consults the extension hook, then mutates the tag
//! and/or assembles the response body.

use crate::constants::{
    REQ_FLAG_T4_OPTION, REQ_FLAG_T5_AFI_PRESENT, RESP_FLAG_NONE,
};
use crate::protocol::{codec, Command};
use crate::transport::Transport;

use super::{DispatchOutcome, ExtensionOutcome, Listener, ListenerState, ProtocolExtension};

/// Shorthand for the common extension consultation pattern: run the
/// built-in logic only on `Passthrough`, send `resp` untouched on
/// `FullyHandled`.
macro_rules! consult {
    ($self:ident, $resp:ident, $call:expr) => {
        let outcome = $self.consult($call);
        match outcome {
            ExtensionOutcome::Passthrough => {}
            ExtensionOutcome::FullyHandled => return DispatchOutcome::Reply($resp),
            ExtensionOutcome::Reject => return DispatchOutcome::ErrorFrame,
            ExtensionOutcome::Silent => return DispatchOutcome::NoReply,
        }
    };
}

impl<T: Transport> Listener<T> {
    pub(crate) fn dispatch(&mut self, command: Command, data: &[u8], flags: u8) -> DispatchOutcome {
        match command {
            Command::Inventory => self.on_inventory(data, flags),
            Command::StayQuiet => self.on_stay_quiet(),
            Command::ReadBlock => self.on_read_block(data, flags),
            Command::WriteBlock => self.on_write_block(data, flags),
            Command::LockBlock => self.on_lock_block(data, flags),
            Command::ReadMultiBlocks => self.on_read_multi_blocks(data, flags),
            Command::WriteMultiBlocks => self.on_write_multi_blocks(data, flags),
            Command::Select => self.on_select(),
            Command::ResetToReady => self.on_reset_to_ready(),
            Command::WriteAfi => self.on_write_afi(data, flags),
            Command::LockAfi => self.on_lock_afi(flags),
            Command::WriteDsfid => self.on_write_dsfid(data, flags),
            Command::LockDsfid => self.on_lock_dsfid(flags),
            Command::GetSystemInfo => self.on_get_system_info(),
            Command::GetBlocksSecurity => self.on_get_blocks_security(data),
        }
    }

    fn consult<F>(&mut self, call: F) -> ExtensionOutcome
    where
        F: FnOnce(&mut dyn ProtocolExtension, &mut crate::tag::TagData) -> ExtensionOutcome,
    {
        match self.extension.as_deref_mut() {
            Some(ext) => call(ext, &mut self.tag),
            None => ExtensionOutcome::Passthrough,
        }
    }

    fn on_inventory(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        let afi_present = flags & REQ_FLAG_T5_AFI_PRESENT != 0;
        let data_size_min = if afi_present { 2 } else { 1 };

        // Malformed layouts are never answered
        if data.len() < data_size_min {
            return DispatchOutcome::NoReply;
        }

        let mut data = data;
        if afi_present {
            let afi = data[0];
            data = &data[1..];
            // AFI zero matches every family; anything else must match
            // the tag exactly, and a mismatch is not answered.
            if afi != 0 && afi != self.tag.system_info.afi {
                return DispatchOutcome::NoReply;
            }
        }

        let mask_len = usize::from(data[0]);
        if data.len() != 1 + mask_len {
            return DispatchOutcome::NoReply;
        }
        // TODO: match the slot mask against the UID instead of answering
        // every well-formed request. The mask length field counts bytes
        // here, as the original firmware reads it.

        let mut resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_inventory(tag, &mut resp));

        resp.push(self.tag.system_info.dsfid);
        codec::append_uid(&self.tag, &mut resp);
        DispatchOutcome::Reply(resp)
    }

    fn on_stay_quiet(&mut self) -> DispatchOutcome {
        let resp = Vec::new();
        consult!(self, resp, |ext, tag| ext.on_stay_quiet(tag));

        self.state = ListenerState::Quiet;
        DispatchOutcome::NoReply
    }

    fn on_read_block(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        let [block_num] = *data else {
            return DispatchOutcome::NoReply;
        };
        let block_index = usize::from(block_num);
        if block_index >= self.tag.block_count() {
            return DispatchOutcome::ErrorFrame;
        }

        let mut resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_read_block(
            tag,
            block_index,
            &mut resp
        ));

        if flags & REQ_FLAG_T4_OPTION != 0 {
            codec::append_block_security(&self.tag, block_index, &mut resp);
        }
        codec::append_block(&self.tag, block_index, &mut resp);
        DispatchOutcome::Reply(resp)
    }

    fn on_write_block(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        self.session.wait_for_eof = flags & REQ_FLAG_T4_OPTION != 0;

        // A request that carries no block data at all is malformed and
        // ignored; a wrong-sized payload is answered with an error frame.
        let Some((&block_num, block_data)) = data.split_first() else {
            return DispatchOutcome::NoReply;
        };
        if block_data.is_empty() {
            return DispatchOutcome::NoReply;
        }
        let block_index = usize::from(block_num);
        if block_index >= self.tag.block_count()
            || block_data.len() != self.tag.block_size()
            || self.tag.is_block_locked(block_index)
        {
            return DispatchOutcome::ErrorFrame;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_write_block(
            tag, block_index, block_data
        ));

        self.tag.set_block_data(block_index, block_data);
        DispatchOutcome::Reply(resp)
    }

    fn on_lock_block(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        self.session.wait_for_eof = flags & REQ_FLAG_T4_OPTION != 0;

        let [block_num] = *data else {
            return DispatchOutcome::NoReply;
        };
        let block_index = usize::from(block_num);
        if block_index >= self.tag.block_count() || self.tag.is_block_locked(block_index) {
            return DispatchOutcome::ErrorFrame;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_lock_block(tag, block_index));

        self.tag.set_block_locked(block_index, true);
        DispatchOutcome::Reply(resp)
    }

    fn on_read_multi_blocks(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        let [first_block_num, block_count_m1] = *data else {
            return DispatchOutcome::NoReply;
        };
        let first_block = usize::from(first_block_num);
        let block_count = usize::from(block_count_m1) + 1;
        if first_block + block_count > self.tag.block_count() {
            return DispatchOutcome::ErrorFrame;
        }
        let last_block = first_block + block_count - 1;

        let mut resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_read_multi_blocks(
            tag,
            first_block,
            last_block,
            &mut resp
        ));

        for block_index in first_block..=last_block {
            if flags & REQ_FLAG_T4_OPTION != 0 {
                codec::append_block_security(&self.tag, block_index, &mut resp);
            }
            codec::append_block(&self.tag, block_index, &mut resp);
        }
        DispatchOutcome::Reply(resp)
    }

    fn on_write_multi_blocks(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        self.session.wait_for_eof = flags & REQ_FLAG_T4_OPTION != 0;

        // Needs the two layout bytes plus at least some block data
        if data.len() <= 2 {
            return DispatchOutcome::NoReply;
        }
        let first_block = usize::from(data[0]);
        let block_count = usize::from(data[1]) + 1;
        let blob = &data[2..];

        let block_size = self.tag.block_size();
        if first_block + block_count > self.tag.block_count()
            || blob.len() != block_count * block_size
        {
            return DispatchOutcome::ErrorFrame;
        }
        let last_block = first_block + block_count - 1;

        if (first_block..=last_block).any(|i| self.tag.is_block_locked(i)) {
            return DispatchOutcome::ErrorFrame;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_write_multi_blocks(
            tag,
            first_block,
            last_block
        ));

        for (i, chunk) in blob.chunks_exact(block_size).enumerate() {
            self.tag.set_block_data(first_block + i, chunk);
        }
        DispatchOutcome::Reply(resp)
    }

    fn on_select(&mut self) -> DispatchOutcome {
        // Select is only valid in addressed mode; a bare request is ignored
        if !self.session.addressed {
            return DispatchOutcome::NoReply;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_select(tag));

        self.state = ListenerState::Selected;
        DispatchOutcome::Reply(resp)
    }

    fn on_reset_to_ready(&mut self) -> DispatchOutcome {
        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_reset_to_ready(tag));

        self.state = ListenerState::Ready;
        DispatchOutcome::Reply(resp)
    }

    fn on_write_afi(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        self.session.wait_for_eof = flags & REQ_FLAG_T4_OPTION != 0;

        let [afi] = *data else {
            return DispatchOutcome::NoReply;
        };
        if self.tag.lock_bits.afi {
            return DispatchOutcome::ErrorFrame;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_write_afi(tag, afi));

        self.tag.system_info.afi = afi;
        DispatchOutcome::Reply(resp)
    }

    fn on_lock_afi(&mut self, flags: u8) -> DispatchOutcome {
        self.session.wait_for_eof = flags & REQ_FLAG_T4_OPTION != 0;

        if self.tag.lock_bits.afi {
            return DispatchOutcome::ErrorFrame;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_lock_afi(tag));

        self.tag.lock_bits.afi = true;
        DispatchOutcome::Reply(resp)
    }

    fn on_write_dsfid(&mut self, data: &[u8], flags: u8) -> DispatchOutcome {
        self.session.wait_for_eof = flags & REQ_FLAG_T4_OPTION != 0;

        let [dsfid] = *data else {
            return DispatchOutcome::NoReply;
        };
        if self.tag.lock_bits.dsfid {
            return DispatchOutcome::ErrorFrame;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_write_dsfid(tag, dsfid));

        self.tag.system_info.dsfid = dsfid;
        DispatchOutcome::Reply(resp)
    }

    fn on_lock_dsfid(&mut self, flags: u8) -> DispatchOutcome {
        self.session.wait_for_eof = flags & REQ_FLAG_T4_OPTION != 0;

        if self.tag.lock_bits.dsfid {
            return DispatchOutcome::ErrorFrame;
        }

        let resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_lock_dsfid(tag));

        self.tag.lock_bits.dsfid = true;
        DispatchOutcome::Reply(resp)
    }

    fn on_get_system_info(&mut self) -> DispatchOutcome {
        let mut resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_get_system_info(tag, &mut resp));

        let info = &self.tag.system_info;
        resp.push(info.flags);
        codec::append_uid(&self.tag, &mut resp);

        let info = &self.tag.system_info;
        if info.has_dsfid() {
            resp.push(info.dsfid);
        }
        if info.has_afi() {
            resp.push(info.afi);
        }
        if info.has_memory() {
            // Both fields are sent biased by one
            resp.push((self.tag.block_count() - 1) as u8);
            resp.push((self.tag.block_size() - 1) as u8);
        }
        if info.has_ic_ref() {
            resp.push(info.ic_ref);
        }
        DispatchOutcome::Reply(resp)
    }

    fn on_get_blocks_security(&mut self, data: &[u8]) -> DispatchOutcome {
        let [first_block_num, block_count_m1] = *data else {
            return DispatchOutcome::NoReply;
        };
        let first_block = usize::from(first_block_num);
        let block_count = usize::from(block_count_m1) + 1;
        if first_block + block_count > self.tag.block_count() {
            return DispatchOutcome::ErrorFrame;
        }
        let last_block = first_block + block_count - 1;

        let mut resp = vec![RESP_FLAG_NONE];
        consult!(self, resp, |ext, tag| ext.on_get_blocks_security(
            tag,
            first_block,
            last_block,
            &mut resp
        ));

        for block_index in first_block..=last_block {
            codec::append_block_security(&self.tag, block_index, &mut resp);
        }
        DispatchOutcome::Reply(resp)
    }
}
