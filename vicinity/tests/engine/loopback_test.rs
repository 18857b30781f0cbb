//! End-to-end exchanges: a poller wired straight to a listener through
//! an in-process transport, so every request crosses the real codec,
//! CRC, and dispatch paths on both sides.

use vicinity::prelude::*;
use vicinity::test_support;

/// Routes poller frames into a listener and returns whatever the
/// listener transmitted in response.
struct Loopback {
    listener: Listener<MockTransport>,
}

impl Loopback {
    fn new(tag: TagData) -> Self {
        Self {
            listener: Listener::new(tag, MockTransport::new()).unwrap(),
        }
    }
}

// Spelled out because the prelude's `Result` alias takes one parameter.
impl Transport for Loopback {
    fn transmit_receive(
        &mut self,
        tx: &[u8],
        _fdt: u32,
    ) -> std::result::Result<Vec<u8>, TransportError> {
        self.listener
            .process_frame(tx)
            .map_err(|_| TransportError::Failure)?;
        self.listener
            .transport_mut()
            .pop_sent()
            .ok_or(TransportError::Timeout)
    }

    fn transmit(&mut self, tx: &[u8]) -> std::result::Result<(), TransportError> {
        self.listener
            .process_frame(tx)
            .map(|_| ())
            .map_err(|_| TransportError::Failure)
    }
}

fn emulated_tag() -> TagData {
    let mut tag = test_support::sample_tag();
    tag.set_block_data(0, &[0x10, 0x11, 0x12, 0x13]);
    tag.set_block_data(1, &[0x20, 0x21, 0x22, 0x23]);
    tag.set_block_data(3, &[0xF0, 0xF1, 0xF2, 0xF3]);
    tag.set_block_locked(1, true);
    tag
}

#[test]
fn activation_mirrors_the_emulated_tag() {
    let mut poller = Poller::new(Loopback::new(emulated_tag())).unwrap();
    let mut tag = TagData::new();
    poller.activate(&mut tag).unwrap();

    assert_eq!(poller.state(), PollerState::Activated);

    let emulated = emulated_tag();
    assert_eq!(tag.uid(), emulated.uid());
    assert_eq!(tag.system_info, emulated.system_info);
    assert_eq!(tag.block_data_raw(), emulated.block_data_raw());
    assert_eq!(tag.security_status_raw(), emulated.security_status_raw());
}

#[test]
fn inventory_round_trip_recovers_the_uid() {
    let mut poller = Poller::new(Loopback::new(emulated_tag())).unwrap();
    let uid = poller.inventory().unwrap();
    assert_eq!(uid.as_bytes(), &test_support::SAMPLE_UID);
}

#[test]
fn system_info_round_trip_survives_the_bias() {
    let mut poller = Poller::new(Loopback::new(emulated_tag())).unwrap();
    let info = poller.get_system_info().unwrap();
    assert_eq!(info, emulated_tag().system_info);
    assert_eq!(info.block_count, 4);
    assert_eq!(info.block_size, 4);
}

#[test]
fn out_of_range_read_comes_back_as_unknown_error() {
    let mut poller = Poller::new(Loopback::new(emulated_tag())).unwrap();
    let request = vicinity::protocol::encode_read_block(4);
    let rx = poller.send_frame(&request, 4202).unwrap();
    // Generic two-byte error frame, fine-grained code withheld
    assert_eq!(rx, vec![0x01, 0x0F]);
    assert_eq!(
        vicinity::protocol::parse_read_block_response(&rx, 4),
        Err(Error::Unknown)
    );
}

#[test]
fn quiet_listener_makes_the_poller_time_out() {
    let mut poller = Poller::new(Loopback::new(emulated_tag())).unwrap();
    poller.inventory().unwrap();

    // Addressed Stay Quiet, then nobody answers Inventory anymore
    let mut quiet = vec![0x22, 0x02];
    quiet.extend_from_slice(&Uid::from_bytes(test_support::SAMPLE_UID).to_wire());
    let frame = test_support::crc_framed(&quiet);
    poller.transport_mut().transmit(&frame).unwrap();

    assert_eq!(poller.inventory(), Err(Error::Timeout));
}

#[test]
fn activation_tolerates_a_minimal_tag() {
    // A tag advertising no optional fields at all
    let mut tag = TagData::new();
    tag.set_uid(&test_support::SAMPLE_UID).unwrap();

    let mut poller = Poller::new(Loopback::new(tag)).unwrap();
    let mut mirror = TagData::new();
    poller.activate(&mut mirror).unwrap();

    assert_eq!(poller.state(), PollerState::Activated);
    assert_eq!(mirror.uid().as_bytes(), &test_support::SAMPLE_UID);
    assert_eq!(mirror.block_count(), 0);
}
