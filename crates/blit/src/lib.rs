//! Blit: bulk buffer transfer primitives for game rendering pipelines.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Blit sub-crates. For most users, adding `blit` as a single dependency is
//! sufficient; C callers link `blit-ffi` instead.
//!
//! # Quick start
//!
//! ```rust
//! use blit::prelude::*;
//!
//! // Upload a vertex batch into a direct buffer.
//! let vertices = [0.0f32, 0.5, 1.0, -0.5];
//! let mut vbo = DirectBuffer::for_floats(vertices.len());
//! copy_floats(&vertices, 0, &mut vbo, vertices.len()).unwrap();
//! assert_eq!(vbo.typed_data::<f32>(), &vertices);
//!
//! // Recycle it for the next frame.
//! let capacity = vbo.capacity();
//! clear(&mut vbo, capacity).unwrap();
//! assert!(vbo.as_slice().iter().all(|&b| b == 0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Direct buffers, copy operations, and error types (`blit-core`).
pub use blit_core as core;

/// Common imports for typical Blit usage.
///
/// ```rust
/// use blit::prelude::*;
/// ```
pub mod prelude {
    pub use blit_core::{
        clear, concat, copy_between, copy_floats, copy_from_array, copy_within, CopyError,
        DirectBuffer, Element, Region,
    };
}
