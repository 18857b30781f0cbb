use vicinity::constants::{
    RESP_ERROR_BLOCK_LOCKED, RESP_ERROR_FORMAT, RESP_ERROR_NOT_SUPPORTED, RESP_ERROR_UNKNOWN,
    SYSINFO_FLAG_AFI, SYSINFO_FLAG_DSFID, SYSINFO_FLAG_IC_REF, SYSINFO_FLAG_MEMORY,
};
use vicinity::protocol::classifier::classify_response;
use vicinity::protocol::{
    parse_block_security_response, parse_inventory_response, parse_read_block_response,
    parse_system_info_response,
};
use vicinity::iso13239;
use vicinity::listener::Listener;
use vicinity::tag::TagData;
use vicinity::test_support;
use vicinity::transport::MockTransport;
use vicinity::Error;

fn sysinfo_payload(flags: u8) -> Vec<u8> {
    let mut buf = vec![0x00, flags];
    buf.extend_from_slice(&[7, 6, 5, 4, 3, 2, 1, 0xE0]);
    if flags & SYSINFO_FLAG_DSFID != 0 {
        buf.push(0x19);
    }
    if flags & SYSINFO_FLAG_AFI != 0 {
        buf.push(0x42);
    }
    if flags & SYSINFO_FLAG_MEMORY != 0 {
        buf.push(31); // 32 blocks
        buf.push(3); // 4 bytes each
    }
    if flags & SYSINFO_FLAG_IC_REF != 0 {
        buf.push(0x33);
    }
    buf
}

#[test]
fn system_info_every_flag_combination_parses() {
    for flags in 0..16u8 {
        let info = parse_system_info_response(&sysinfo_payload(flags)).unwrap();
        assert_eq!(info.flags, flags);
        if flags & SYSINFO_FLAG_MEMORY != 0 {
            assert_eq!(info.block_count, 32);
            assert_eq!(info.block_size, 4);
        } else {
            assert_eq!(info.block_count, 0);
        }
    }
}

fn emulated_tag_with(flags: u8) -> TagData {
    let mut tag = TagData::new();
    tag.set_uid(&test_support::SAMPLE_UID).unwrap();
    if flags & SYSINFO_FLAG_MEMORY != 0 {
        tag.resize_blocks(4, 4).unwrap();
    }
    tag.system_info.flags = flags;
    if flags & SYSINFO_FLAG_DSFID != 0 {
        tag.system_info.dsfid = 0x19;
    }
    if flags & SYSINFO_FLAG_AFI != 0 {
        tag.system_info.afi = 0x42;
    }
    if flags & SYSINFO_FLAG_IC_REF != 0 {
        tag.system_info.ic_ref = 0x33;
    }
    tag
}

#[test]
fn system_info_survives_emulation_for_every_flag_set() {
    // Whatever field set a tag advertises, the listener's response must
    // decode back to the same record.
    for flags in 0..16u8 {
        let tag = emulated_tag_with(flags);
        let mut l = Listener::new(tag.clone(), MockTransport::new()).unwrap();
        l.process_frame(&test_support::crc_framed(&[0x02, 0x2B]))
            .unwrap();

        let frame = l.transport_mut().pop_sent().unwrap();
        assert!(iso13239::check(&frame));
        let payload = &frame[..frame.len() - iso13239::CRC_SIZE];

        let info = parse_system_info_response(payload).unwrap();
        assert_eq!(info, tag.system_info, "flag set {flags:#06b}");
    }
}

#[test]
fn system_info_trailing_garbage_is_rejected() {
    let mut buf = sysinfo_payload(SYSINFO_FLAG_DSFID);
    buf.push(0xFF);
    assert_eq!(
        parse_system_info_response(&buf),
        Err(Error::UnexpectedResponse)
    );
}

#[test]
fn system_info_block_size_is_five_bits() {
    // Upper three bits of the block-size byte are RFU and masked off
    let mut buf = vec![0x00, SYSINFO_FLAG_MEMORY];
    buf.extend_from_slice(&[7, 6, 5, 4, 3, 2, 1, 0xE0]);
    buf.push(0); // one block
    buf.push(0xE3); // RFU bits set, effective size 4
    let info = parse_system_info_response(&buf).unwrap();
    assert_eq!(info.block_count, 1);
    assert_eq!(info.block_size, 4);
}

#[test]
fn inventory_response_recovers_storage_order() {
    let mut buf = vec![0x00, 0x19];
    buf.extend_from_slice(&[7, 6, 5, 4, 3, 2, 1, 0xE0]);
    let uid = parse_inventory_response(&buf).unwrap();
    assert_eq!(uid.as_bytes(), &[0xE0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn read_block_length_must_match_block_size() {
    let buf = [0x00, 0xDE, 0xAD, 0xBE, 0xEF];
    assert_eq!(
        parse_read_block_response(&buf, 4).unwrap(),
        vec![0xDE, 0xAD, 0xBE, 0xEF]
    );
    assert_eq!(
        parse_read_block_response(&buf, 8),
        Err(Error::UnexpectedResponse)
    );
}

#[test]
fn block_security_length_must_match_count() {
    let buf = [0x00, 0x00, 0x01, 0x00];
    assert_eq!(
        parse_block_security_response(&buf, 3).unwrap(),
        vec![0x00, 0x01, 0x00]
    );
    assert_eq!(
        parse_block_security_response(&buf, 4),
        Err(Error::UnexpectedResponse)
    );
}

#[test]
fn error_frames_classify_by_code() {
    assert_eq!(
        classify_response(&[0x01, RESP_ERROR_NOT_SUPPORTED]),
        Some(Error::NotSupported)
    );
    assert_eq!(
        classify_response(&[0x01, RESP_ERROR_FORMAT]),
        Some(Error::Format)
    );
    assert_eq!(
        classify_response(&[0x01, RESP_ERROR_UNKNOWN]),
        Some(Error::Unknown)
    );
    assert_eq!(
        classify_response(&[0x01, RESP_ERROR_BLOCK_LOCKED]),
        Some(Error::Internal)
    );
    assert_eq!(classify_response(&[0x01, 0xB7]), Some(Error::Custom(0xB7)));
}

#[test]
fn truncated_error_frame_is_unexpected() {
    assert_eq!(classify_response(&[0x01]), Some(Error::UnexpectedResponse));
    assert_eq!(classify_response(&[]), Some(Error::BufferEmpty));
}

#[test]
fn clean_response_passes_classification() {
    assert_eq!(classify_response(&[0x00, 0xAA]), None);
}
