//! Debug assertion macros and a non-mutating integrity check for the
//! invariants documented in `spec.md` §3 and §4.4.
//!
//! The macros are only active in debug builds (`debug_assert!`), so there
//! is zero overhead in release builds; `check` is a plain function any
//! caller can run regardless of build profile.

use crate::arena::Arena;
use crate::cell::NIL;
use crate::error::LinkedRingError;
use std::collections::HashSet;

// =============================================================================
// INV-CNT-01: Bounded Count
// =============================================================================

/// Assert that `owner_count + data_count + free_count == size`.
///
/// **Invariant**: `spec.md` §3, invariant 2.
///
/// Used in: every mutating `Arena` method, via `LinkedRing`'s post-operation
/// check.
macro_rules! debug_assert_cells_partition_size {
    ($owner_count:expr, $data_count:expr, $free_count:expr, $size:expr) => {
        debug_assert_eq!(
            $owner_count + $data_count + $free_count,
            $size,
            "INV-CNT-01 violated: owner_count {} + data_count {} + free_count {} != size {}",
            $owner_count,
            $data_count,
            $free_count,
            $size
        )
    };
}

// =============================================================================
// INV-SUB-01: Per-owner Circularity
// =============================================================================

/// Assert that walking `next` from an owner's head returns to head after
/// exactly its data count steps, passing through tail on the last step.
///
/// **Invariant**: `spec.md` §3, invariant 3.
macro_rules! debug_assert_sublist_closes_at_tail {
    ($last:expr, $tail:expr) => {
        debug_assert_eq!(
            $last, $tail,
            "INV-SUB-01 violated: sub-list walk did not terminate at its recorded tail"
        )
    };
}

/// Runs the optional diagnostic described in `spec.md` §4.4: for every
/// owner, walk its sub-list and verify termination at its recorded tail and
/// that no cell is shared between two owners; then verify the free list's
/// length accounts for the rest of the arena. Does not mutate the arena.
pub(crate) fn check(arena: &Arena) -> Result<(), LinkedRingError> {
    let size = arena.capacity();
    let mut visited: HashSet<u32> = HashSet::new();

    for &owner_idx in arena.registry_indices() {
        let (_, head, tail) = arena.owner(owner_idx);
        if head == NIL {
            continue;
        }

        let mut cur = head;
        let mut steps = 0usize;
        loop {
            if !visited.insert(cur) {
                return Err(LinkedRingError::Unknown);
            }
            steps += 1;
            if cur == tail {
                break;
            }
            cur = arena.data(cur).1;
            if steps > size {
                // Would only trigger on a corrupted chain that never
                // reaches its recorded tail.
                return Err(LinkedRingError::Unknown);
            }
        }
        debug_assert_sublist_closes_at_tail!(cur, tail);
    }

    let data_count = arena.data_count() as usize;
    let owner_count = arena.owner_count();
    let free_count = arena.free_count() as usize;
    debug_assert_cells_partition_size!(owner_count, data_count, free_count, size);

    if owner_count + data_count + free_count != size {
        return Err(LinkedRingError::Unknown);
    }
    if visited.len() != data_count {
        return Err(LinkedRingError::Unknown);
    }

    Ok(())
}
