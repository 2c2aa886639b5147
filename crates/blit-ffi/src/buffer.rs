//! Direct buffer lifecycle: create, destroy, and query entry points.
//!
//! Buffers are owned by the caller through `u64` handles. A buffer's
//! address is stable from creation to destruction, so the pointer returned
//! by [`blit_buffer_ptr`] can be handed to a rendering API and stays valid
//! until [`blit_buffer_destroy`].

use std::sync::Mutex;

use blit_core::DirectBuffer;

use crate::handle::BufferTable;
use crate::status::BlitStatus;

static BUFFERS: Mutex<BufferTable> = Mutex::new(BufferTable::new());

/// The process-wide buffer handle table.
pub(crate) fn buffers() -> &'static Mutex<BufferTable> {
    &BUFFERS
}

/// Create a zero-filled direct buffer of `capacity` bytes.
///
/// Returns the handle via `out_handle`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_buffer_create(capacity: usize, out_handle: *mut u64) -> i32 {
    if out_handle.is_null() {
        return BlitStatus::InvalidBuffer as i32;
    }
    let handle = buffers().lock().unwrap().insert(DirectBuffer::zeroed(capacity));
    // SAFETY: out_handle is non-null and points to caller-owned storage.
    unsafe { *out_handle = handle };
    BlitStatus::Ok as i32
}

/// Create a zero-filled direct buffer sized to hold `num_floats` floats.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_buffer_create_for_floats(num_floats: usize, out_handle: *mut u64) -> i32 {
    if out_handle.is_null() {
        return BlitStatus::InvalidBuffer as i32;
    }
    if num_floats
        .checked_mul(std::mem::size_of::<f32>())
        .is_none()
    {
        return BlitStatus::OutOfRange as i32;
    }
    let handle = buffers()
        .lock()
        .unwrap()
        .insert(DirectBuffer::for_floats(num_floats));
    // SAFETY: out_handle is non-null and points to caller-owned storage.
    unsafe { *out_handle = handle };
    BlitStatus::Ok as i32
}

/// Destroy a direct buffer, releasing its memory.
///
/// Destroying an already-destroyed handle returns `InvalidBuffer` and is
/// otherwise harmless.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_buffer_destroy(handle: u64) -> i32 {
    match buffers().lock().unwrap().remove(handle) {
        Some(_) => BlitStatus::Ok as i32,
        None => BlitStatus::InvalidBuffer as i32,
    }
}

/// Query a buffer's capacity in bytes.
///
/// Returns -1 if the handle is invalid.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_buffer_capacity(handle: u64) -> i64 {
    match buffers().lock().unwrap().get(handle) {
        Some(buf) => buf.capacity() as i64,
        None => -1,
    }
}

/// Return the stable start address of a buffer's region.
///
/// Returns null if the handle is invalid. The pointer stays valid until
/// [`blit_buffer_destroy`]; the caller is responsible for exclusive access
/// while writing through it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn blit_buffer_ptr(handle: u64) -> *mut u8 {
    match buffers().lock().unwrap().get_mut(handle) {
        Some(buf) => buf.as_mut_ptr(),
        None => std::ptr::null_mut(),
    }
}
