//! Hex formatting for trace output and a lenient parser for hand-typed
//! byte strings (CLI arguments, test vectors).

use std::fmt::Write;

/// Uppercase hex, no separators: `&[0xde, 0xad]` -> `"DEAD"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{:02X}", b);
        s
    })
}

/// Uppercase hex, one space between bytes: `&[0xde, 0xad]` -> `"DE AD"`.
/// This is the layout used for frame traces.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for b in bytes {
        if !s.is_empty() {
            s.push(' ');
        }
        let _ = write!(s, "{:02X}", b);
    }
    s
}

/// Parse `"06 01 2E"`, `"06012e"` or `"0x06 0x01"` into bytes.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s
        .split_whitespace()
        .map(|tok| tok.trim_start_matches("0x").trim_start_matches("0X"))
        .flat_map(str::bytes)
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("bad hex byte '{}': {}", text, e))
        })
        .collect()
}
