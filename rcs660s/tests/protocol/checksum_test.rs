use rcs660s::protocol::{checksum, dcs, lcs};

#[test]
fn lcs_and_dcs_known_values() {
    // lengths seen on the wire: abort, polling, max frame
    assert_eq!(lcs(0x000A), 0xF6);
    assert_eq!(lcs(0x001E), 0xE2);
    assert_eq!(lcs(0x011A), 0xE5);
    assert_eq!(dcs(&[0x72, 0, 0, 0, 0, 0, 0x01, 0, 0, 0]), 0x8D);
}

#[test]
fn checksum_wraps_modulo_256() {
    assert_eq!(checksum(&[0x80, 0x80]), 0x00);
    assert_eq!(checksum(&[0xFF; 3]), 0x03);
    assert_eq!(checksum(&[]), 0x00);
}
