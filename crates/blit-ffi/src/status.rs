//! C-compatible status codes for the copy surface.
//!
//! [`BlitStatus`] is a `repr(i32)` enum covering the two failure classes a
//! bulk copy can hit before the transfer starts. Conversion from the core
//! [`CopyError`] is provided.

use blit_core::CopyError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlitStatus {
    /// Success.
    Ok = 0,
    /// A buffer argument does not resolve to a usable address: null source
    /// pointer, null out-pointer, or a destroyed/stale buffer handle.
    InvalidBuffer = -1,
    /// A computed source or destination span exceeds the backing region's
    /// extent.
    OutOfRange = -2,
}

impl From<&CopyError> for BlitStatus {
    fn from(e: &CopyError) -> Self {
        match e {
            CopyError::InvalidBuffer { .. } => BlitStatus::InvalidBuffer,
            CopyError::OutOfRange { .. } => BlitStatus::OutOfRange,
        }
    }
}
