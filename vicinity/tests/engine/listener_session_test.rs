//! Listener session state machine driven through complete wire frames.

use vicinity::prelude::*;
use vicinity::test_support::{self, crc_framed};

fn listener() -> Listener<MockTransport> {
    Listener::new(test_support::sample_tag(), MockTransport::new()).unwrap()
}

fn addressed(command: u8, tail: &[u8]) -> Vec<u8> {
    let mut payload = vec![0x22, command];
    payload.extend_from_slice(&Uid::from_bytes(test_support::SAMPLE_UID).to_wire());
    payload.extend_from_slice(tail);
    crc_framed(&payload)
}

fn sent_payload(l: &mut Listener<MockTransport>) -> Option<Vec<u8>> {
    let frame = l.transport_mut().pop_sent()?;
    Some(frame[..frame.len() - 2].to_vec())
}

#[test]
fn select_then_selected_mode_read() {
    let mut l = listener();
    l.tag_mut().set_block_data(0, &[9, 9, 9, 9]);

    let ev = l.process_frame(&addressed(0x25, &[])).unwrap();
    assert_eq!(ev, ListenerEvent::Handled);
    assert_eq!(l.state(), ListenerState::Selected);
    assert_eq!(sent_payload(&mut l).unwrap(), vec![0x00]);

    // Selected-mode read carries no UID
    let ev = l.process_frame(&crc_framed(&[0x12, 0x20, 0x00])).unwrap();
    assert_eq!(ev, ListenerEvent::Handled);
    assert_eq!(sent_payload(&mut l).unwrap(), vec![0x00, 9, 9, 9, 9]);
}

#[test]
fn reset_to_ready_ends_the_selection() {
    let mut l = listener();
    l.process_frame(&addressed(0x25, &[])).unwrap();
    assert_eq!(l.state(), ListenerState::Selected);
    sent_payload(&mut l);

    l.process_frame(&crc_framed(&[0x12, 0x26])).unwrap();
    assert_eq!(l.state(), ListenerState::Ready);
    assert_eq!(sent_payload(&mut l).unwrap(), vec![0x00]);

    // Selected-mode requests are ignored again
    let ev = l.process_frame(&crc_framed(&[0x12, 0x20, 0x00])).unwrap();
    assert_eq!(ev, ListenerEvent::Ignored);
}

#[test]
fn stay_quiet_survives_until_field_reset() {
    let mut l = listener();
    let ev = l.process_frame(&addressed(0x02, &[])).unwrap();
    assert_eq!(ev, ListenerEvent::Ignored);
    assert_eq!(l.state(), ListenerState::Quiet);

    // Neither inventory nor addressed requests get through
    assert_eq!(
        l.process_frame(&crc_framed(&[0x26, 0x01, 0x00])).unwrap(),
        ListenerEvent::Ignored
    );
    assert_eq!(
        l.process_frame(&addressed(0x20, &[0x00])).unwrap(),
        ListenerEvent::Ignored
    );

    l.ready();
    assert_eq!(
        l.process_frame(&crc_framed(&[0x26, 0x01, 0x00])).unwrap(),
        ListenerEvent::Handled
    );
    assert!(sent_payload(&mut l).is_some());
}

#[test]
fn option_flag_write_lock_sequence() {
    let mut l = listener();

    // Option-flag write: data lands, reply deferred to the EOF frame
    let mut payload = vec![0x42, 0x21, 0x02];
    payload.extend_from_slice(&[0xCA, 0xFE, 0xBA, 0xBE]);
    l.process_frame(&crc_framed(&payload)).unwrap();
    assert!(sent_payload(&mut l).is_none());
    l.process_frame(&[]).unwrap();
    assert_eq!(sent_payload(&mut l).unwrap(), vec![0x00]);
    assert_eq!(l.tag().block(2), &[0xCA, 0xFE, 0xBA, 0xBE]);

    // Option-flag lock of the same block
    l.process_frame(&crc_framed(&[0x42, 0x22, 0x02])).unwrap();
    assert!(sent_payload(&mut l).is_none());
    l.process_frame(&[]).unwrap();
    assert_eq!(sent_payload(&mut l).unwrap(), vec![0x00]);
    assert!(l.tag().is_block_locked(2));

    // The locked block now refuses plain writes
    let mut payload = vec![0x02, 0x21, 0x02];
    payload.extend_from_slice(&[0x00; 4]);
    l.process_frame(&crc_framed(&payload)).unwrap();
    assert_eq!(sent_payload(&mut l).unwrap(), vec![0x01, 0x0F]);
    assert_eq!(l.tag().block(2), &[0xCA, 0xFE, 0xBA, 0xBE]);
}

#[test]
fn interrupted_eof_sequence_drops_the_pending_reply() {
    let mut l = listener();

    let mut payload = vec![0x42, 0x21, 0x00];
    payload.extend_from_slice(&[1, 2, 3, 4]);
    l.process_frame(&crc_framed(&payload)).unwrap();
    assert!(sent_payload(&mut l).is_none());

    // Another request arrives before the EOF: pending reply is gone
    l.process_frame(&crc_framed(&[0x26, 0x01, 0x00])).unwrap();
    let inventory_reply = sent_payload(&mut l).unwrap();
    assert_eq!(inventory_reply.len(), 10);

    assert_eq!(l.process_frame(&[]), Err(Error::UnexpectedResponse));
    assert!(sent_payload(&mut l).is_none());
}
