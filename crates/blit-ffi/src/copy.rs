//! The copy and clear entry points.
//!
//! One exported symbol per source element width, each a thin shim over the
//! generic `blit_core::copy_from_array`, plus buffer-to-buffer copy and
//! clear. Every entry validates its arguments before any byte moves and
//! returns a [`BlitStatus`] code.
//!
//! Calling convention, shared by all typed entries: `src`/`src_len`
//! describe the caller's pinned array (`src_len` in *elements*),
//! `src_offset` counts elements, `dst` is a buffer handle, and
//! `dst_offset`/`num_bytes` count bytes.

use blit_core::{copy_between, copy_floats, copy_from_array, copy_within, Element};

use crate::buffer::buffers;
use crate::status::BlitStatus;

/// Shared body of the typed copy entries: resolve, validate, bulk-move.
#[allow(unsafe_code)]
fn copy_typed<T: Element>(
    src: *const T,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    if src.is_null() {
        return BlitStatus::InvalidBuffer as i32;
    }
    // SAFETY: the caller guarantees src points to src_len readable elements
    // and keeps the array pinned for the duration of the call. The slice
    // does not outlive this function.
    let src = unsafe { std::slice::from_raw_parts(src, src_len) };
    let mut table = buffers().lock().unwrap();
    let Some(buf) = table.get_mut(dst) else {
        return BlitStatus::InvalidBuffer as i32;
    };
    match copy_from_array(src, src_offset, buf, dst_offset, num_bytes) {
        Ok(()) => BlitStatus::Ok as i32,
        Err(e) => BlitStatus::from(&e) as i32,
    }
}

/// Copy `num_bytes` bytes from a byte array into a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_bytes(
    src: *const u8,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    copy_typed(src, src_len, src_offset, dst, dst_offset, num_bytes)
}

/// Copy `num_bytes` bytes from a 16-bit char array into a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_chars(
    src: *const u16,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    copy_typed(src, src_len, src_offset, dst, dst_offset, num_bytes)
}

/// Copy `num_bytes` bytes from a 16-bit signed array into a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_shorts(
    src: *const i16,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    copy_typed(src, src_len, src_offset, dst, dst_offset, num_bytes)
}

/// Copy `num_bytes` bytes from a 32-bit int array into a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_ints(
    src: *const i32,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    copy_typed(src, src_len, src_offset, dst, dst_offset, num_bytes)
}

/// Copy `num_bytes` bytes from a 64-bit long array into a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_longs(
    src: *const i64,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    copy_typed(src, src_len, src_offset, dst, dst_offset, num_bytes)
}

/// Copy `num_bytes` bytes from a float array into a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_floats(
    src: *const f32,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    copy_typed(src, src_len, src_offset, dst, dst_offset, num_bytes)
}

/// Copy `num_bytes` bytes from a double array into a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_doubles(
    src: *const f64,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    copy_typed(src, src_len, src_offset, dst, dst_offset, num_bytes)
}

/// Copy `num_floats` floats from `src` (starting at element `src_offset`)
/// into the start of a buffer.
///
/// Convenience overload of [`blit_copy_floats`] with destination offset 0
/// and an element count instead of a byte count.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_floats_simple(
    src: *const f32,
    src_len: usize,
    src_offset: usize,
    dst: u64,
    num_floats: usize,
) -> i32 {
    if src.is_null() {
        return BlitStatus::InvalidBuffer as i32;
    }
    // SAFETY: the caller guarantees src points to src_len readable floats,
    // pinned for the duration of the call.
    let src = unsafe { std::slice::from_raw_parts(src, src_len) };
    let mut table = buffers().lock().unwrap();
    let Some(buf) = table.get_mut(dst) else {
        return BlitStatus::InvalidBuffer as i32;
    };
    match copy_floats(src, src_offset, buf, num_floats) {
        Ok(()) => BlitStatus::Ok as i32,
        Err(e) => BlitStatus::from(&e) as i32,
    }
}

/// Copy `num_bytes` bytes from one buffer to another, both offsets in bytes.
///
/// Passing the same handle on both sides copies within the buffer with
/// memmove semantics, so overlapping spans are well defined.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_copy_buffer_to_buffer(
    src: u64,
    src_offset: usize,
    dst: u64,
    dst_offset: usize,
    num_bytes: usize,
) -> i32 {
    let mut table = buffers().lock().unwrap();
    let result = if src == dst {
        let Some(buf) = table.get_mut(dst) else {
            return BlitStatus::InvalidBuffer as i32;
        };
        copy_within(buf, src_offset, dst_offset, num_bytes)
    } else {
        let Some((src_buf, dst_buf)) = table.get_pair_mut(src, dst) else {
            return BlitStatus::InvalidBuffer as i32;
        };
        copy_between(src_buf, src_offset, dst_buf, dst_offset, num_bytes)
    };
    match result {
        Ok(()) => BlitStatus::Ok as i32,
        Err(e) => BlitStatus::from(&e) as i32,
    }
}

/// Zero-fill the first `num_bytes` bytes of a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_clear(handle: u64, num_bytes: usize) -> i32 {
    let mut table = buffers().lock().unwrap();
    let Some(buf) = table.get_mut(handle) else {
        return BlitStatus::InvalidBuffer as i32;
    };
    match blit_core::clear(buf, num_bytes) {
        Ok(()) => BlitStatus::Ok as i32,
        Err(e) => BlitStatus::from(&e) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{blit_buffer_create, blit_buffer_destroy};
    use proptest::prelude::*;

    /// Creates a buffer and returns its handle, panicking on failure.
    fn create(capacity: usize) -> u64 {
        let mut h: u64 = 0;
        assert_eq!(blit_buffer_create(capacity, &mut h), BlitStatus::Ok as i32);
        h
    }

    /// Snapshots a buffer's contents through the handle table.
    fn contents(handle: u64) -> Vec<u8> {
        buffers()
            .lock()
            .unwrap()
            .get(handle)
            .expect("live handle")
            .as_slice()
            .to_vec()
    }

    /// Pre-fills a buffer through the handle table.
    fn fill(handle: u64, value: u8) {
        buffers()
            .lock()
            .unwrap()
            .get_mut(handle)
            .expect("live handle")
            .as_mut_slice()
            .fill(value);
    }

    #[test]
    fn floats_simple_copies_from_element_offset() {
        let src = [1.0f32, 2.0, 3.0, 4.0];
        let h = create(16);
        let status = blit_copy_floats_simple(src.as_ptr(), src.len(), 1, h, 2);
        assert_eq!(status, BlitStatus::Ok as i32);
        let got = contents(h);
        assert_eq!(&got[..4], &2.0f32.to_ne_bytes());
        assert_eq!(&got[4..8], &3.0f32.to_ne_bytes());
        assert!(got[8..].iter().all(|&b| b == 0));
        blit_buffer_destroy(h);
    }

    #[test]
    fn typed_entries_share_the_generic_semantics() {
        // Shorts: element-indexed source offset, byte-indexed destination.
        let shorts = [0x0102i16, 0x0304, 0x0506];
        let h = create(8);
        let status = blit_copy_shorts(shorts.as_ptr(), shorts.len(), 1, h, 2, 4);
        assert_eq!(status, BlitStatus::Ok as i32);
        let got = contents(h);
        assert_eq!(&got[2..4], &0x0304i16.to_ne_bytes());
        assert_eq!(&got[4..6], &0x0506i16.to_ne_bytes());
        blit_buffer_destroy(h);

        // Longs: one element is eight bytes.
        let longs = [i64::MIN, 0x1122334455667788];
        let h = create(8);
        let status = blit_copy_longs(longs.as_ptr(), longs.len(), 1, h, 0, 8);
        assert_eq!(status, BlitStatus::Ok as i32);
        assert_eq!(contents(h), 0x1122334455667788i64.to_ne_bytes());
        blit_buffer_destroy(h);
    }

    #[test]
    fn out_of_range_spans_are_rejected_before_writing() {
        let bytes = [0xAAu8; 4];
        let h = create(4);
        fill(h, 0x11);

        // One byte past the source.
        assert_eq!(
            blit_copy_bytes(bytes.as_ptr(), bytes.len(), 1, h, 0, 4),
            BlitStatus::OutOfRange as i32
        );
        // One byte past the destination.
        assert_eq!(
            blit_copy_bytes(bytes.as_ptr(), bytes.len(), 0, h, 1, 4),
            BlitStatus::OutOfRange as i32
        );
        assert!(contents(h).iter().all(|&b| b == 0x11));
        blit_buffer_destroy(h);
    }

    #[test]
    fn null_source_and_stale_handle_fail_loudly() {
        let h = create(8);
        assert_eq!(
            blit_copy_floats(std::ptr::null(), 0, 0, h, 0, 0),
            BlitStatus::InvalidBuffer as i32
        );
        blit_buffer_destroy(h);

        let floats = [1.0f32];
        assert_eq!(
            blit_copy_floats(floats.as_ptr(), 1, 0, h, 0, 4),
            BlitStatus::InvalidBuffer as i32
        );
        assert_eq!(blit_clear(h, 0), BlitStatus::InvalidBuffer as i32);
    }

    #[test]
    fn buffer_to_buffer_moves_bytes() {
        let src = create(8);
        let dst = create(8);
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        blit_copy_bytes(data.as_ptr(), data.len(), 0, src, 0, 8);

        let status = blit_copy_buffer_to_buffer(src, 2, dst, 4, 3);
        assert_eq!(status, BlitStatus::Ok as i32);
        assert_eq!(contents(dst), [0, 0, 0, 0, 3, 4, 5, 0]);

        // Destroyed source fails resolution.
        blit_buffer_destroy(src);
        assert_eq!(
            blit_copy_buffer_to_buffer(src, 0, dst, 0, 1),
            BlitStatus::InvalidBuffer as i32
        );
        blit_buffer_destroy(dst);
    }

    #[test]
    fn same_handle_overlap_uses_memmove_semantics() {
        let h = create(8);
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        blit_copy_bytes(data.as_ptr(), data.len(), 0, h, 0, 8);

        let status = blit_copy_buffer_to_buffer(h, 0, h, 2, 4);
        assert_eq!(status, BlitStatus::Ok as i32);
        assert_eq!(contents(h), [1, 2, 1, 2, 3, 4, 7, 8]);
        blit_buffer_destroy(h);
    }

    #[test]
    fn clear_zeroes_the_prefix_only() {
        let h = create(16);
        fill(h, 0xFF);
        assert_eq!(blit_clear(h, 8), BlitStatus::Ok as i32);
        let got = contents(h);
        assert!(got[..8].iter().all(|&b| b == 0x00));
        assert!(got[8..].iter().all(|&b| b == 0xFF));

        assert_eq!(blit_clear(h, 17), BlitStatus::OutOfRange as i32);
        blit_buffer_destroy(h);
    }

    #[test]
    fn zero_byte_calls_are_noops() {
        let h = create(4);
        fill(h, 0x42);
        let data = [9u8];
        assert_eq!(
            blit_copy_bytes(data.as_ptr(), data.len(), 0, h, 0, 0),
            BlitStatus::Ok as i32
        );
        assert_eq!(blit_clear(h, 0), BlitStatus::Ok as i32);
        assert!(contents(h).iter().all(|&b| b == 0x42));
        blit_buffer_destroy(h);
    }

    proptest! {
        /// Every call through the boundary either moves exactly the
        /// requested span or reports a status and moves nothing.
        #[test]
        fn boundary_copies_are_all_or_nothing(
            data in prop::collection::vec(any::<u8>(), 1..64),
            capacity in 1usize..64,
            src_offset in 0usize..64,
            dst_offset in 0usize..64,
            num_bytes in 0usize..64,
        ) {
            let h = create(capacity);
            fill(h, 0xEE);
            let before = contents(h);

            let status = blit_copy_bytes(
                data.as_ptr(), data.len(), src_offset, h, dst_offset, num_bytes,
            );
            let after = contents(h);
            if status == BlitStatus::Ok as i32 {
                prop_assert_eq!(
                    &after[dst_offset..dst_offset + num_bytes],
                    &data[src_offset..src_offset + num_bytes]
                );
                prop_assert_eq!(&after[..dst_offset], &before[..dst_offset]);
                prop_assert_eq!(
                    &after[dst_offset + num_bytes..],
                    &before[dst_offset + num_bytes..]
                );
            } else {
                prop_assert_eq!(status, BlitStatus::OutOfRange as i32);
                prop_assert_eq!(&after, &before);
            }
            blit_buffer_destroy(h);
        }
    }

    #[test]
    fn round_trip_through_two_buffers() {
        let doubles = [1.5f64, -2.25, 1e300];
        let a = create(24);
        let b = create(24);
        blit_copy_doubles(doubles.as_ptr(), doubles.len(), 0, a, 0, 24);
        blit_copy_buffer_to_buffer(a, 0, b, 0, 24);

        let mut got = [0.0f64; 3];
        let raw = contents(b);
        for (i, out) in got.iter_mut().enumerate() {
            *out = f64::from_ne_bytes(raw[i * 8..(i + 1) * 8].try_into().unwrap());
        }
        assert_eq!(got, doubles);
        blit_buffer_destroy(a);
        blit_buffer_destroy(b);
    }
}
