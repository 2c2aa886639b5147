//! C FFI bindings for the Blit buffer transfer primitives.
//!
//! Exposes a C-compatible API for managed-runtime bindings (game engines
//! hosted in a VM that need to move vertex, index, and pixel data into
//! native buffers without per-element marshalling). This is the only Blit
//! crate that may contain `unsafe` code, and only at the call boundary.
//!
//! Direct buffers cross the boundary as `u64` handles created by
//! [`buffer::blit_buffer_create`]; a destroyed handle fails address
//! resolution with [`status::BlitStatus::InvalidBuffer`] instead of
//! degrading to a null write. Source arrays cross as pointer + length
//! pairs that the caller's runtime keeps pinned for the duration of the
//! call; no pointer is retained past the return.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod copy;
pub mod status;

mod handle;
