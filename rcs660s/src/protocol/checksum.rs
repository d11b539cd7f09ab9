// rcs660s/src/protocol/checksum.rs

/// Two's complement of the 8-bit truncated sum of `bytes`.
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Compute Length Checksum (LCS) over the big-endian 2-byte length field
/// LCS = 0x100 - (LEN_HI + LEN_LO) (mod 256)
pub fn lcs(len: u16) -> u8 {
    checksum(&len.to_be_bytes())
}

/// Compute Data Checksum (DCS) for a frame payload
/// DCS = 0x100 - (sum(payload) & 0xff)
pub fn dcs(payload: &[u8]) -> u8 {
    checksum(payload)
}
