//! Bulk data-transfer primitives between typed arrays and direct buffers.
//!
//! Game renderers move vertex, index, and pixel data from application arrays
//! into natively addressable buffers before handing them to the graphics API.
//! Doing that element by element is wasteful; this crate provides the bulk
//! operations: [`copy_from_array`] for typed-array sources, [`copy_between`]
//! for buffer-to-buffer moves, and [`clear`] for zero-filling.
//!
//! The destination of every copy is a [`DirectBuffer`]: a fixed-capacity byte
//! region whose address is stable for its entire lifetime, so the pointer can
//! be handed to a rendering API and stays valid across copies.
//!
//! Every operation validates the source and destination spans before moving
//! any byte and reports violations as [`CopyError`] instead of corrupting
//! memory. A copy either transfers exactly the requested bytes or transfers
//! nothing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod copy;
pub mod element;
pub mod error;

pub use buffer::DirectBuffer;
pub use copy::{clear, concat, copy_between, copy_floats, copy_from_array, copy_within};
pub use element::Element;
pub use error::{CopyError, Region};
