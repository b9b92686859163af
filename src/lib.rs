//! A fixed-arena, multi-producer, multi-tenant circular buffer.
//!
//! Every logical sub-queue is identified by an opaque `owner` id and
//! threaded as a circular singly-linked sub-list through one shared,
//! fixed-size arena of cells. Owner metadata lives in the very same arena
//! as the data it describes, so the only shared resource is the arena
//! itself, and the crate never allocates on the heap outside of `init` and
//! `resize`, and serializes all access through a caller-supplied
//! [`RingLock`](mutex::RingLock) rather than any lock-free scheme of its
//! own.
//!
//! ```
//! use linked_ring::{LinkedRing, RingConfig};
//!
//! let mut ring = LinkedRing::new(RingConfig::new(8, true)).unwrap();
//! ring.push_tail(1, 42).unwrap();
//! assert_eq!(ring.get_head(1), Ok(42));
//! ```

mod arena;
mod cell;
mod config;
mod dump;
mod error;
mod integrity;
mod mutex;
mod ring;
mod sublist;

pub use config::{RingConfig, LARGE_CONFIG, SMALL_CONFIG};
pub use error::LinkedRingError;
pub use mutex::{NoOpLock, RingLock};
pub use ring::LinkedRing;
