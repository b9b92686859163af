//! Human-readable, non-mutating dumps of the arena's structure.
//!
//! Mirrors the original's `lr_dump` / `lr_debug_structure_*` diagnostics:
//! useful at a debugger prompt or in a failing test's output, never
//! consulted by the core's own logic.

use crate::arena::Arena;
use crate::cell::NIL;
use std::fmt::Write as _;

/// Renders the arena's occupancy summary and every live owner's sub-list
/// contents, head to tail.
pub(crate) fn dump(arena: &Arena) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "arena: size={} owners={} data={} free={} available={}",
        arena.capacity(),
        arena.owner_count(),
        arena.data_count(),
        arena.free_count(),
        arena.available()
    );

    for &owner_idx in arena.registry_indices() {
        let (id, head, tail) = arena.owner(owner_idx);
        if head == NIL {
            let _ = writeln!(out, "  owner {id}: (empty)");
            continue;
        }
        let values = arena.owned_values(owner_idx);
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "  owner {id}: head={head} tail={tail} [{}]",
            rendered.join(", ")
        );
    }

    out
}
