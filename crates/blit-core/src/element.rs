//! The fixed-width element types a copy source can be made of.

/// Marker trait for the primitive element widths accepted as copy sources.
///
/// Implemented for exactly the widths a renderer feeds into vertex, index,
/// and pixel buffers: `u8`, `u16`, `i16`, `i32`, `i64`, `f32`, and `f64`.
/// The bytemuck bounds let the copy engine view any `&[T]` as raw bytes
/// without unsafe code.
pub trait Element: bytemuck::NoUninit + bytemuck::AnyBitPattern + sealed::Sealed {
    /// Width of one element in bytes.
    const WIDTH: usize = std::mem::size_of::<Self>();
}

impl Element for u8 {}
impl Element for u16 {}
impl Element for i16 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for f32 {}
impl Element for f64 {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
