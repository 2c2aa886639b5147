//! Benchmark crate for the Blit buffer transfer primitives.
//!
//! Contains no library code of its own; see `benches/copy_ops.rs`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
