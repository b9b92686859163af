//! The arena's unit of storage.
//!
//! The original design conflates "cell address" with "cell identity" via raw
//! pointers into one backing array, with each cell's logical state (free,
//! data, or owner record) inferred from which structure currently links to
//! it. Here that's made explicit: cells are indices into a `Vec<Slot>`, and
//! a cell's state is a variant of [`Slot`] rather than something the caller
//! has to track out-of-band.

/// An index into the arena's cell array. `NIL` stands in for a null pointer.
pub type Index = u32;

/// The sentinel for "no cell", used wherever the original used a null
/// pointer: an empty free list, a fresh owner record with no sub-list yet,
/// or the end of a bounded walk.
pub const NIL: Index = u32::MAX;

/// The payload carried by a data cell, or an owner id. Both are
/// pointer-sized unsigned integers per `spec.md` §6; the full `u64` range is
/// valid, with no sentinel reserved by the core.
pub type Value = u64;

/// One cell of the arena, in exactly one of three logical states.
#[derive(Debug, Clone, Copy)]
pub enum Slot {
    /// On the free list. `next` is the next free cell, or `NIL` if this is
    /// the last one.
    Free { next: Index },
    /// Part of some owner's sub-list. `value` is the payload; `next` is the
    /// next cell in that sub-list's circular chain.
    Data { value: Value, next: Index },
    /// An owner record in the registry. `head`/`tail` are this owner's
    /// sub-list endpoints, or both `NIL` if the owner has no data yet.
    Owner { id: Value, head: Index, tail: Index },
}

impl Slot {
    pub(crate) fn as_data(&self) -> Option<(Value, Index)> {
        match *self {
            Slot::Data { value, next } => Some((value, next)),
            _ => None,
        }
    }

    pub(crate) fn as_owner(&self) -> Option<(Value, Index, Index)> {
        match *self {
            Slot::Owner { id, head, tail } => Some((id, head, tail)),
            _ => None,
        }
    }
}
