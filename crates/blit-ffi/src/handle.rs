//! Slot+generation buffer table for FFI lifetime management.
//!
//! C callers hold `u64` handles instead of pointers, so a destroyed buffer
//! fails address resolution safely (`None`) instead of becoming a dangling
//! write. Double-destroy is a safe no-op.

use blit_core::DirectBuffer;

/// Handle encoding: upper 32 bits = slot index, lower 32 bits = generation.
fn pack(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn unpack(handle: u64) -> (u32, u32) {
    ((handle >> 32) as u32, handle as u32)
}

struct Entry {
    generation: u32,
    buffer: Option<DirectBuffer>,
}

/// Maps `u64` handles to caller-created direct buffers.
///
/// Slots are recycled through a free list; the generation counter bumps on
/// every removal so stale handles are detectable without UB. The table
/// guards its own structure only — buffer *contents* carry no lock, matching
/// the no-synchronization contract of the copy surface.
pub(crate) struct BufferTable {
    entries: Vec<Entry>,
    free: Vec<u32>,
}

impl BufferTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Registers a buffer and returns its handle.
    pub fn insert(&mut self, buffer: DirectBuffer) -> u64 {
        match self.free.pop() {
            Some(slot) => {
                let entry = &mut self.entries[slot as usize];
                entry.buffer = Some(buffer);
                pack(slot, entry.generation)
            }
            None => {
                let slot = self.entries.len() as u32;
                self.entries.push(Entry {
                    generation: 0,
                    buffer: Some(buffer),
                });
                pack(slot, 0)
            }
        }
    }

    /// Resolves a handle to its buffer, or `None` if stale or never valid.
    pub fn get(&self, handle: u64) -> Option<&DirectBuffer> {
        let (slot, generation) = unpack(handle);
        let entry = self.entries.get(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        entry.buffer.as_ref()
    }

    /// Resolves a handle to its buffer mutably.
    pub fn get_mut(&mut self, handle: u64) -> Option<&mut DirectBuffer> {
        let (slot, generation) = unpack(handle);
        let entry = self.entries.get_mut(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        entry.buffer.as_mut()
    }

    /// Resolves two *distinct* handles to their buffers mutably.
    ///
    /// Returns `None` if the handles share a slot (one of them must be
    /// stale) or either fails to resolve. The buffer-to-buffer copy entry
    /// needs both sides at once; the same-handle case is routed to
    /// `copy_within` before reaching this.
    pub fn get_pair_mut(
        &mut self,
        a: u64,
        b: u64,
    ) -> Option<(&mut DirectBuffer, &mut DirectBuffer)> {
        let (slot_a, gen_a) = unpack(a);
        let (slot_b, gen_b) = unpack(b);
        let [entry_a, entry_b] = self
            .entries
            .get_disjoint_mut([slot_a as usize, slot_b as usize])
            .ok()?;
        if entry_a.generation != gen_a || entry_b.generation != gen_b {
            return None;
        }
        Some((entry_a.buffer.as_mut()?, entry_b.buffer.as_mut()?))
    }

    /// Removes the buffer behind a handle, returning it.
    ///
    /// Bumps the generation and recycles the slot. A slot whose generation
    /// wraps back to 0 is retired instead of recycled, so handles from the
    /// first epoch can never resurrect.
    pub fn remove(&mut self, handle: u64) -> Option<DirectBuffer> {
        let (slot, generation) = unpack(handle);
        let entry = self.entries.get_mut(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        let buffer = entry.buffer.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        if entry.generation != 0 {
            self.free.push(slot);
        }
        Some(buffer)
    }
}
