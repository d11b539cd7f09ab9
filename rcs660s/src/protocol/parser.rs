// rcs660s/src/protocol/parser.rs

//! Bounds-checked readers for fixed offsets inside reader responses. Every
//! out-of-range access becomes `Error::InvalidLength` instead of a panic.

use crate::types::{Idm, Pmm};
use crate::{Error, Result};

pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    let end = idx.saturating_add(len);
    data.get(idx..end).ok_or(Error::InvalidLength {
        expected: end,
        actual: data.len(),
    })
}

/// Copy `N` bytes starting at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice_at(data, idx, N)?);
    Ok(out)
}

pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    array_at::<1>(data, idx).map(|[b]| b)
}

/// CCID `dwLength` and friends.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    array_at(data, idx).map(u32::from_le_bytes)
}

pub fn idm_at(data: &[u8], idx: usize) -> Result<Idm> {
    array_at(data, idx).map(Idm::from_bytes)
}

pub fn pmm_at(data: &[u8], idx: usize) -> Result<Pmm> {
    array_at(data, idx).map(Pmm::from_bytes)
}
