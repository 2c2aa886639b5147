//! Fixed-capacity byte regions with stable addresses.

use crate::element::Element;

/// A fixed-capacity byte region whose address is stable for its lifetime.
///
/// This is the destination type for every copy operation: the region a
/// renderer hands to the graphics API. It is allocated once, zero-filled,
/// aligned to [`DirectBuffer::ALIGNMENT`] bytes, and never grows, shrinks,
/// or reallocates, so the pointer returned by [`as_ptr`](Self::as_ptr)
/// remains valid until the buffer is dropped.
///
/// The buffer performs no synchronization of its own. Exclusive access
/// during a copy is the caller's responsibility; in safe Rust the `&mut`
/// receiver enforces it.
pub struct DirectBuffer {
    /// Backing storage, over-allocated by `ALIGNMENT` so an aligned start
    /// always exists. Never resized after construction.
    inner: Vec<u8>,
    /// Offset of the aligned start within `inner`.
    start: usize,
    /// Usable extent in bytes.
    capacity: usize,
}

impl DirectBuffer {
    /// Alignment of the region start, in bytes. Covers every [`Element`]
    /// width and typical GPU upload requirements.
    pub const ALIGNMENT: usize = 64;

    /// Creates a zero-filled buffer of `capacity` bytes.
    pub fn zeroed(capacity: usize) -> DirectBuffer {
        let alloc_len = capacity
            .checked_add(Self::ALIGNMENT)
            .expect("buffer capacity overflow");
        let inner = vec![0u8; alloc_len];
        let addr = inner.as_ptr() as usize;
        let start = addr.next_multiple_of(Self::ALIGNMENT) - addr;
        DirectBuffer {
            inner,
            start,
            capacity,
        }
    }

    /// Creates a zero-filled buffer sized to hold `count` `f32` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count * 4` overflows `usize`.
    pub fn for_floats(count: usize) -> DirectBuffer {
        Self::zeroed(
            count
                .checked_mul(std::mem::size_of::<f32>())
                .expect("buffer capacity overflow"),
        )
    }

    /// Returns the buffer's extent in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the buffer has zero capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Returns the buffer contents as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner[self.start..self.start + self.capacity]
    }

    /// Returns the buffer contents as a mutable byte slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner[self.start..self.start + self.capacity]
    }

    /// Returns the stable address of the region start.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.as_slice().as_ptr()
    }

    /// Returns the stable mutable address of the region start.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Returns `true` if the region start satisfies `alignment`.
    ///
    /// `alignment` must be a power of two.
    pub fn is_aligned(&self, alignment: usize) -> bool {
        alignment.is_power_of_two() && (self.as_ptr() as usize) & (alignment - 1) == 0
    }

    /// Views the buffer contents as a slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is not a multiple of `T`'s width.
    pub fn typed_data<T: Element>(&self) -> &[T] {
        bytemuck::cast_slice(self.as_slice())
    }
}

impl std::fmt::Debug for DirectBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectBuffer")
            .field("capacity", &self.capacity)
            .field("ptr", &self.as_ptr())
            .finish_non_exhaustive()
    }
}
