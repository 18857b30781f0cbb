use proptest::prelude::*;
use vicinity::iso13239;

#[test]
fn known_answer_vector() {
    // CRC-16/IBM-SDLC check value for the standard "123456789" input
    assert_eq!(iso13239::compute(b"123456789"), 0x906E);
}

#[test]
fn crc_is_little_endian_on_the_wire() {
    let mut buf = b"123456789".to_vec();
    iso13239::append(&mut buf);
    assert_eq!(&buf[buf.len() - 2..], &[0x6E, 0x90]);
}

#[test]
fn empty_payload_still_frames() {
    let mut buf = Vec::new();
    iso13239::append(&mut buf);
    assert_eq!(buf.len(), iso13239::CRC_SIZE);
    assert!(iso13239::check(&buf));
}

proptest! {
    #[test]
    fn any_single_bit_flip_is_detected(
        payload in prop::collection::vec(any::<u8>(), 1..32),
        bit in 0usize..8,
        which in any::<prop::sample::Index>(),
    ) {
        let mut framed = payload;
        iso13239::append(&mut framed);
        let idx = which.index(framed.len());
        framed[idx] ^= 1 << bit;
        prop_assert!(!iso13239::check(&framed));
    }
}
