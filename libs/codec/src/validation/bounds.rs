//! Bounds Checking for Fixed-Offset Reads
//!
//! Every field read in the codec goes through these helpers. A read that would run past
//! the end of its region is a `BufferUnderrun`, never a truncated or zero-filled value.

use crate::error::{ProtocolError, ProtocolResult};
use types::{Address, ADDRESS_SIZE};

/// Check that `size` bytes starting at `offset` lie within `buffer`
#[inline]
pub fn check_buffer_bounds(
    buffer: &[u8],
    offset: usize,
    size: usize,
    context: &'static str,
) -> ProtocolResult<()> {
    let end = offset.saturating_add(size);
    if end > buffer.len() {
        return Err(ProtocolError::buffer_underrun(end, buffer.len(), context));
    }
    Ok(())
}

/// Bounds-checked sub-slice
#[inline]
pub fn safe_slice<'a>(
    buffer: &'a [u8],
    offset: usize,
    size: usize,
    context: &'static str,
) -> ProtocolResult<&'a [u8]> {
    check_buffer_bounds(buffer, offset, size, context)?;
    Ok(&buffer[offset..offset + size])
}

/// Everything from `offset` to the end of `buffer`
///
/// An offset equal to the length yields an empty slice; past the length is an underrun.
#[inline]
pub fn slice_from<'a>(
    buffer: &'a [u8],
    offset: usize,
    context: &'static str,
) -> ProtocolResult<&'a [u8]> {
    check_buffer_bounds(buffer, offset, 0, context)?;
    Ok(&buffer[offset..])
}

/// Copy a fixed-width field out of `buffer`
#[inline]
pub fn read_array<const N: usize>(
    buffer: &[u8],
    offset: usize,
    context: &'static str,
) -> ProtocolResult<[u8; N]> {
    let bytes = safe_slice(buffer, offset, N, context)?;
    let mut array = [0u8; N];
    array.copy_from_slice(bytes);
    Ok(array)
}

pub fn read_address(buffer: &[u8], offset: usize, context: &'static str) -> ProtocolResult<Address> {
    read_array::<ADDRESS_SIZE>(buffer, offset, context).map(Address::new)
}

pub fn read_u32_be(buffer: &[u8], offset: usize, context: &'static str) -> ProtocolResult<u32> {
    read_array(buffer, offset, context).map(u32::from_be_bytes)
}

pub fn read_u32_le(buffer: &[u8], offset: usize, context: &'static str) -> ProtocolResult<u32> {
    read_array(buffer, offset, context).map(u32::from_le_bytes)
}

pub fn read_u64_be(buffer: &[u8], offset: usize, context: &'static str) -> ProtocolResult<u64> {
    read_array(buffer, offset, context).map(u64::from_be_bytes)
}

/// Reject account data above the configured size limit
pub fn validate_event_size(size: usize, max_size: usize) -> ProtocolResult<()> {
    if size > max_size {
        return Err(ProtocolError::event_too_large(size, max_size));
    }
    Ok(())
}
