//! Bulk copy and clear operations.
//!
//! Each operation is a single synchronous bulk move: spans are validated
//! first, then exactly `num_bytes` bytes are transferred with one
//! `copy_from_slice` (compiled to memcpy). There are no partial copies —
//! an error means nothing was written.
//!
//! Offsets follow the renderer calling convention: a typed source array is
//! indexed in *elements*, the destination buffer in *bytes*, and counts are
//! always in bytes (except [`copy_floats`], which takes an element count).

use crate::buffer::DirectBuffer;
use crate::element::Element;
use crate::error::{CopyError, Region};

/// Validates that `offset + len` fits within `capacity` bytes.
fn check_span(
    region: Region,
    offset: usize,
    len: usize,
    capacity: usize,
) -> Result<(), CopyError> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(CopyError::OutOfRange {
            region,
            offset,
            len,
            capacity,
        }),
    }
}

/// Copies `num_bytes` bytes from a typed array into a direct buffer.
///
/// `src_offset` counts source *elements* (the read starts
/// `src_offset * T::WIDTH` bytes into the array); `dst_offset` and
/// `num_bytes` count bytes. Copying zero bytes is a successful no-op.
///
/// # Errors
///
/// [`CopyError::OutOfRange`] when either span exceeds its region. The
/// destination is untouched on error.
pub fn copy_from_array<T: Element>(
    src: &[T],
    src_offset: usize,
    dst: &mut DirectBuffer,
    dst_offset: usize,
    num_bytes: usize,
) -> Result<(), CopyError> {
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    // Saturation keeps an overflowing element offset in range of the span
    // check, which then rejects it.
    let src_start = src_offset.saturating_mul(T::WIDTH);
    check_span(Region::Source, src_start, num_bytes, src_bytes.len())?;
    check_span(Region::Destination, dst_offset, num_bytes, dst.capacity())?;

    dst.as_mut_slice()[dst_offset..dst_offset + num_bytes]
        .copy_from_slice(&src_bytes[src_start..src_start + num_bytes]);
    Ok(())
}

/// Copies `num_floats` floats into the start of a direct buffer.
///
/// Convenience overload of [`copy_from_array`] with destination offset 0 and
/// a byte count of `num_floats * 4` — the common "upload a vertex batch"
/// call.
pub fn copy_floats(
    src: &[f32],
    offset: usize,
    dst: &mut DirectBuffer,
    num_floats: usize,
) -> Result<(), CopyError> {
    let num_bytes = num_floats.saturating_mul(<f32 as Element>::WIDTH);
    copy_from_array(src, offset, dst, 0, num_bytes)
}

/// Copies `num_bytes` bytes between two direct buffers.
///
/// Both offsets are in bytes. For copies within a single buffer see
/// [`copy_within`].
pub fn copy_between(
    src: &DirectBuffer,
    src_offset: usize,
    dst: &mut DirectBuffer,
    dst_offset: usize,
    num_bytes: usize,
) -> Result<(), CopyError> {
    check_span(Region::Source, src_offset, num_bytes, src.capacity())?;
    check_span(Region::Destination, dst_offset, num_bytes, dst.capacity())?;

    dst.as_mut_slice()[dst_offset..dst_offset + num_bytes]
        .copy_from_slice(&src.as_slice()[src_offset..src_offset + num_bytes]);
    Ok(())
}

/// Copies `num_bytes` bytes from one span of a buffer to another span of
/// the same buffer.
///
/// Overlapping spans are handled with memmove semantics: the destination
/// receives an exact copy of the source span as it was before the call.
pub fn copy_within(
    buf: &mut DirectBuffer,
    src_offset: usize,
    dst_offset: usize,
    num_bytes: usize,
) -> Result<(), CopyError> {
    check_span(Region::Source, src_offset, num_bytes, buf.capacity())?;
    check_span(Region::Destination, dst_offset, num_bytes, buf.capacity())?;

    buf.as_mut_slice()
        .copy_within(src_offset..src_offset + num_bytes, dst_offset);
    Ok(())
}

/// Zero-fills the first `num_bytes` bytes of a buffer.
///
/// Bytes at `[num_bytes, capacity)` are untouched. Generally faster than
/// allocating a fresh buffer.
pub fn clear(dst: &mut DirectBuffer, num_bytes: usize) -> Result<(), CopyError> {
    check_span(Region::Destination, 0, num_bytes, dst.capacity())?;
    dst.as_mut_slice()[..num_bytes].fill(0);
    Ok(())
}

/// Returns a new vector holding `first` followed by `second`.
pub fn concat(first: &[f32], second: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out
}
