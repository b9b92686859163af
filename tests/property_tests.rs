//! Quantified invariants from the data model, checked against randomly
//! generated operation sequences via `proptest`.

use linked_ring::{LinkedRing, RingConfig};
use proptest::prelude::*;

const CAPACITY: usize = 64;

fn fresh_ring() -> LinkedRing {
    LinkedRing::new(RingConfig::new(CAPACITY, true)).unwrap()
}

proptest! {
    /// `count() + owner_count() + available() == capacity()` after any
    /// sequence of puts and gets, whether they succeed or fail.
    #[test]
    fn count_owner_count_and_available_always_partition_capacity(
        ops in prop::collection::vec((0u64..4, 0u64..1000), 0..200)
    ) {
        let mut r = fresh_ring();
        for (owner, value) in ops {
            if owner % 2 == 0 {
                let _ = r.push_tail(owner, value);
            } else {
                let _ = r.get_head(owner);
            }
            prop_assert_eq!(
                r.count().unwrap() + r.owner_count() + r.available(),
                r.capacity()
            );
        }
    }

    /// For any owner, popping `count_owned(owner)` times returns the values
    /// in the same order they were pushed (FIFO), and leaves the owner with
    /// no record.
    #[test]
    fn push_tail_then_drain_is_fifo(values in prop::collection::vec(0u64..10_000, 1..20)) {
        prop_assume!(values.len() < CAPACITY);
        let mut r = fresh_ring();
        for &v in &values {
            r.push_tail(1, v).unwrap();
        }
        prop_assert_eq!(r.count_owned(1).unwrap(), values.len());

        for &expected in &values {
            prop_assert_eq!(r.get_head(1), Ok(expected));
        }
        prop_assert_eq!(r.count_owned(1).unwrap(), 0);
        prop_assert_eq!(r.owner_count(), 0);
    }

    /// For any owner, popping `count_owned(owner)` times via `put_head` +
    /// `pop_tail` returns the values in push order (LIFO relative to the
    /// stack-like head insertion, read from the tail end).
    #[test]
    fn put_head_then_pop_tail_is_fifo_from_the_tail_end(values in prop::collection::vec(0u64..10_000, 1..20)) {
        prop_assume!(values.len() < CAPACITY);
        let mut r = fresh_ring();
        for &v in &values {
            r.put_head(1, v).unwrap();
        }
        for &expected in &values {
            prop_assert_eq!(r.pop_tail(1), Ok(expected));
        }
        prop_assert_eq!(r.count_owned(1).unwrap(), 0);
    }

    /// Walking `next` from an owner's head returns to head in exactly
    /// `count_owned(owner)` steps, checked indirectly via `read_at` at
    /// every index up to the count succeeding, and the one past it failing.
    #[test]
    fn read_at_covers_exactly_count_owned_indices(values in prop::collection::vec(0u64..1000, 1..20)) {
        prop_assume!(values.len() < CAPACITY);
        let mut r = fresh_ring();
        for &v in &values {
            r.push_tail(9, v).unwrap();
        }
        let n = r.count_owned(9).unwrap();
        prop_assert_eq!(n, values.len());
        for (i, &expected) in values.iter().enumerate() {
            prop_assert_eq!(r.read_at(9, i), Ok(expected));
        }
        prop_assert!(r.read_at(9, n).is_err());
    }

    /// Round-trip: for any byte string not containing a zero byte,
    /// `put_string_head` followed by `read_string` reproduces it exactly.
    #[test]
    fn put_string_head_then_read_string_round_trips(
        bytes in prop::collection::vec(1u8..=255, 1..30)
    ) {
        prop_assume!(bytes.len() < CAPACITY);
        let mut r = fresh_ring();
        r.put_string_head(1, &bytes).unwrap();
        let mut out = vec![0u8; bytes.len() + 1];
        let len = r.read_string(1, &mut out).unwrap();
        prop_assert_eq!(&out[..len], &bytes[..]);
    }

    /// Resize idempotence: resizing to the same capacity preserves every
    /// owner's ordered data sequence and leaves subsequent reads unchanged.
    #[test]
    fn resize_to_same_capacity_preserves_every_owners_sequence(
        values in prop::collection::vec((0u64..4, 0u64..1000), 1..40)
    ) {
        prop_assume!(values.len() < CAPACITY - 4);
        let mut r = fresh_ring();
        for (owner, value) in &values {
            let _ = r.push_tail(*owner, *value);
        }

        let before: Vec<(u64, usize)> = (0..4).map(|o| (o, r.count_owned(o).unwrap())).collect();
        r.resize(CAPACITY).unwrap();
        let after: Vec<(u64, usize)> = (0..4).map(|o| (o, r.count_owned(o).unwrap())).collect();
        prop_assert_eq!(before, after);
    }
}
