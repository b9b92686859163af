//! The backing cell array and its two cursors: the free list and the owner
//! registry.
//!
//! `spec.md` §9's "Source patterns requiring re-architecture" calls for
//! modeling cells as arena indices rather than raw pointers, and for owner
//! records as a stable-slot free list rather than a compacting stack (the
//! adopted Design Notes Option (a), recorded in `SPEC_FULL.md` §C). This
//! module is the result: `cells` is the single `Vec<Slot>` every operation
//! borrows mutably, `free_head` roots the free list, and `registry` is a
//! flat list of the indices of currently-live owner cells (any order is
//! fine, since `Find` is specified as a linear scan (§4.2) and release no
//! longer needs to preserve registry adjacency).

use crate::cell::{Index, Slot, Value, NIL};
use crate::error::LinkedRingError;

/// The fixed-size arena: a `Vec<Slot>` plus its free-list and owner-registry
/// cursors. Every mutating operation consumes or returns cells through
/// `alloc_cell`/`free_cell`; nothing outside this module touches
/// `free_head` directly.
pub(crate) struct Arena {
    pub(crate) cells: Vec<Slot>,
    free_head: Index,
    free_count: u32,
    data_count: u32,
    /// Indices of cells currently holding `Slot::Owner`. Unordered.
    registry: Vec<Index>,
}

impl Arena {
    /// `Init(size, cells)`: chains every cell into the free list, with no
    /// owners yet. Fails with `NoMemory` if `size` is zero.
    pub(crate) fn init(size: usize) -> Result<Self, LinkedRingError> {
        if size == 0 {
            return Err(LinkedRingError::NoMemory);
        }

        let mut cells = Vec::with_capacity(size);
        for i in 0..size {
            let next = if i + 1 < size { (i + 1) as Index } else { NIL };
            cells.push(Slot::Free { next });
        }

        Ok(Self {
            cells,
            free_head: 0,
            free_count: size as u32,
            data_count: 0,
            registry: Vec::new(),
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn owner_count(&self) -> usize {
        self.registry.len()
    }

    pub(crate) fn data_count(&self) -> u32 {
        self.data_count
    }

    pub(crate) fn free_count(&self) -> u32 {
        self.free_count
    }

    /// `Available()`: `size - data_count - owner_count`.
    pub(crate) fn available(&self) -> usize {
        self.capacity() - self.data_count as usize - self.owner_count()
    }

    /// Pops the head of the free list, if any. The returned cell is left
    /// uninitialized (still tagged `Free`); callers overwrite it
    /// immediately.
    pub(crate) fn alloc_cell(&mut self) -> Option<Index> {
        if self.free_head == NIL {
            return None;
        }
        let idx = self.free_head;
        let next = match self.cells[idx as usize] {
            Slot::Free { next } => next,
            _ => unreachable!("free list pointed at a non-free cell"),
        };
        self.free_head = next;
        self.free_count -= 1;
        Some(idx)
    }

    /// Pushes `idx` onto the head of the free list.
    pub(crate) fn free_cell(&mut self, idx: Index) {
        self.cells[idx as usize] = Slot::Free {
            next: self.free_head,
        };
        self.free_head = idx;
        self.free_count += 1;
    }

    pub(crate) fn incr_data_count(&mut self) {
        self.data_count += 1;
    }

    pub(crate) fn decr_data_count(&mut self) {
        self.data_count -= 1;
    }

    /// `Find(owner_id)`: linear scan over the registry (§4.2).
    pub(crate) fn find_owner(&self, owner_id: Value) -> Option<Index> {
        self.registry.iter().copied().find(
            |&idx| matches!(self.cells[idx as usize], Slot::Owner { id, .. } if id == owner_id),
        )
    }

    /// `GetOrAllocate(owner_id)`: returns the existing record, or allocates
    /// a fresh one (consuming one free cell) with an empty sub-list.
    pub(crate) fn get_or_allocate_owner(
        &mut self,
        owner_id: Value,
    ) -> Result<Index, LinkedRingError> {
        if let Some(idx) = self.find_owner(owner_id) {
            return Ok(idx);
        }

        let idx = self.alloc_cell().ok_or(LinkedRingError::BufferFull)?;
        self.cells[idx as usize] = Slot::Owner {
            id: owner_id,
            head: NIL,
            tail: NIL,
        };
        self.registry.push(idx);
        Ok(idx)
    }

    /// `Release(record)`: the owner has no data left. Drops it from the
    /// registry and returns its cell to the free list. O(1), no
    /// compaction, since releasing a stable slot doesn't disturb any other
    /// owner's record (Design Notes Option (a)).
    pub(crate) fn release_owner(&mut self, idx: Index) {
        let pos = self
            .registry
            .iter()
            .position(|&i| i == idx)
            .expect("release_owner called on an index not in the registry");
        self.registry.swap_remove(pos);
        self.free_cell(idx);
    }

    pub(crate) fn owner(&self, idx: Index) -> (Value, Index, Index) {
        self.cells[idx as usize]
            .as_owner()
            .expect("expected an owner cell")
    }

    pub(crate) fn set_owner_endpoints(&mut self, idx: Index, head: Index, tail: Index) {
        let id = match self.cells[idx as usize] {
            Slot::Owner { id, .. } => id,
            _ => unreachable!("expected an owner cell"),
        };
        self.cells[idx as usize] = Slot::Owner { id, head, tail };
    }

    pub(crate) fn data(&self, idx: Index) -> (Value, Index) {
        self.cells[idx as usize]
            .as_data()
            .expect("expected a data cell")
    }

    pub(crate) fn set_data_next(&mut self, idx: Index, next: Index) {
        let value = match self.cells[idx as usize] {
            Slot::Data { value, .. } => value,
            _ => unreachable!("expected a data cell"),
        };
        self.cells[idx as usize] = Slot::Data { value, next };
    }

    /// The cell indices of every currently-live owner record. Unordered.
    pub(crate) fn registry_indices(&self) -> &[Index] {
        &self.registry
    }

    /// `Resize(new_size, new_cells)`: rebuilds into a fresh arena of
    /// `new_size` cells, preserving every (owner id, ordered data sequence)
    /// pair. Implemented by snapshotting each owner's sub-list in head→tail
    /// order and replaying it as `PushTail` calls against a freshly
    /// initialized arena, which is behaviorally equivalent to the
    /// pointer-rewrite algorithm in `spec.md` §4.1 without relying on any
    /// particular physical layout. Fails with `NoMemory` if `new_size` is
    /// zero, or with `BufferFull` if `new_size` cannot hold the current
    /// contents.
    pub(crate) fn resize(&mut self, new_size: usize) -> Result<(), LinkedRingError> {
        if new_size == 0 {
            return Err(LinkedRingError::NoMemory);
        }

        let owners = self.registry.clone();
        let mut snapshot: Vec<(Value, Vec<Value>)> = Vec::with_capacity(owners.len());
        for idx in owners {
            let (id, _, _) = self.owner(idx);
            snapshot.push((id, self.owned_values(idx)));
        }

        let mut fresh = Arena::init(new_size)?;
        for (owner_id, values) in snapshot {
            for value in values {
                fresh.push_tail(owner_id, value)?;
            }
        }

        *self = fresh;
        Ok(())
    }
}
