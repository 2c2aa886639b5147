//! Error types for bulk copy and clear operations.
//!
//! Every violation is detected before the transfer starts; an operation that
//! returns an error has not written a single byte.

use std::error::Error;
use std::fmt;

/// Which side of a copy a [`CopyError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// The source array or buffer being read.
    Source,
    /// The destination buffer being written.
    Destination,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Errors from copy and clear operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyError {
    /// A buffer argument did not resolve to a usable address.
    ///
    /// Never produced by the safe API (a `&DirectBuffer` always resolves);
    /// raised at the C boundary for null pointers and destroyed handles.
    InvalidBuffer {
        /// The side that failed to resolve.
        region: Region,
    },
    /// The requested span exceeds the backing region's extent.
    OutOfRange {
        /// The side whose span is out of range.
        region: Region,
        /// Start of the requested span, in bytes from the region base.
        offset: usize,
        /// Length of the requested span in bytes.
        len: usize,
        /// Extent of the backing region in bytes.
        capacity: usize,
    },
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBuffer { region } => {
                write!(f, "{region} buffer does not resolve to a usable address")
            }
            Self::OutOfRange {
                region,
                offset,
                len,
                capacity,
            } => write!(
                f,
                "{region} span out of range: offset {offset} + len {len} exceeds capacity {capacity}"
            ),
        }
    }
}

impl Error for CopyError {}
