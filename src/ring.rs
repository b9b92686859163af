//! The public surface: a fixed arena bound to an externally supplied lock.

use crate::arena::Arena;
use crate::cell::Value;
use crate::config::RingConfig;
use crate::error::LinkedRingError;
use crate::integrity;
use crate::mutex::{NoOpLock, RingLock};

/// A fixed-arena, multi-owner circular buffer.
///
/// Every logical sub-queue is identified by an opaque `owner` id and
/// threaded as a circular sub-list through one shared backing arena (see
/// the crate-level docs). All mutual exclusion is delegated to a
/// caller-supplied [`RingLock`]; the ring itself never blocks except inside
/// that lock.
pub struct LinkedRing {
    arena: Arena,
    lock: Box<dyn RingLock>,
    config: RingConfig,
}

impl LinkedRing {
    /// `Init(size, cells)`: builds a fresh arena of `config.capacity` cells,
    /// bound to a no-op lock. Use [`LinkedRing::with_lock`] to bind a real
    /// one.
    pub fn new(config: RingConfig) -> Result<Self, LinkedRingError> {
        Ok(Self {
            arena: Arena::init(config.capacity)?,
            lock: Box::new(NoOpLock),
            config,
        })
    }

    /// `BindMutex(attr)`: replaces the lock binding.
    pub fn with_lock(mut self, lock: Box<dyn RingLock>) -> Self {
        self.lock = lock;
        self
    }

    /// `Resize(new_size, new_cells)`: rebuilds the arena in place, preserving
    /// every (owner, ordered data sequence) pair. Not concurrent-safe; the
    /// caller must quiesce other access for the duration of the call.
    pub fn resize(&mut self, new_size: usize) -> Result<(), LinkedRingError> {
        self.lock.lock()?;
        let result = self.arena.resize(new_size);
        if result.is_ok() {
            self.config.capacity = new_size;
        }
        self.lock.unlock()?;
        self.check_integrity_in_debug();
        result
    }

    /// `PutHead(arena, value, owner)`: inserts `value` as the new head of
    /// `owner`'s sub-list.
    pub fn put_head(&mut self, owner: Value, value: Value) -> Result<(), LinkedRingError> {
        self.locked(|arena| arena.put_head(owner, value))
    }

    /// `PushTail(arena, value, owner)`: inserts `value` as the new tail of
    /// `owner`'s sub-list.
    pub fn push_tail(&mut self, owner: Value, value: Value) -> Result<(), LinkedRingError> {
        self.locked(|arena| arena.push_tail(owner, value))
    }

    /// `InsertAt(arena, value, owner, index)`: inserts `value` at `index`
    /// within `owner`'s sub-list, clamping to the tail if `index` is past
    /// the current length.
    pub fn insert_at(
        &mut self,
        owner: Value,
        value: Value,
        index: usize,
    ) -> Result<(), LinkedRingError> {
        self.locked(|arena| arena.insert_at(owner, value, index))
    }

    /// `PutStringHead(arena, bytes, owner)`: inserts every byte of `bytes`
    /// as a separate cell, such that reading `owner`'s sub-list back
    /// head-to-tail reproduces `bytes` in order.
    pub fn put_string_head(&mut self, owner: Value, bytes: &[u8]) -> Result<(), LinkedRingError> {
        self.locked(|arena| arena.put_string_head(owner, bytes))
    }

    /// `GetHead(arena, owner) -> value`: removes and returns the head of
    /// `owner`'s sub-list.
    pub fn get_head(&mut self, owner: Value) -> Result<Value, LinkedRingError> {
        self.locked(|arena| arena.get_head(owner))
    }

    /// `PopTail(arena, owner) -> value`: removes and returns the tail of
    /// `owner`'s sub-list.
    pub fn pop_tail(&mut self, owner: Value) -> Result<Value, LinkedRingError> {
        self.locked(|arena| arena.pop_tail(owner))
    }

    /// `PullAt(arena, owner, index) -> value`: removes and returns the
    /// element at `index` within `owner`'s sub-list.
    pub fn pull_at(&mut self, owner: Value, index: usize) -> Result<Value, LinkedRingError> {
        self.locked(|arena| arena.pull_at(owner, index))
    }

    /// `Read(arena, owner) -> value`: peeks the head of `owner`'s sub-list
    /// without removing it.
    pub fn read(&mut self, owner: Value) -> Result<Value, LinkedRingError> {
        self.locked(|arena| arena.read(owner))
    }

    /// `ReadAt(arena, owner, index) -> value`: peeks the element at `index`
    /// within `owner`'s sub-list without removing it.
    pub fn read_at(&mut self, owner: Value, index: usize) -> Result<Value, LinkedRingError> {
        self.locked(|arena| arena.read_at(owner, index))
    }

    /// `ReadString(arena, owner, out_buf) -> byte_count`: copies every
    /// payload of `owner`'s sub-list into `out` as a byte, without removing
    /// them.
    pub fn read_string(&mut self, owner: Value, out: &mut [u8]) -> Result<usize, LinkedRingError> {
        self.locked(|arena| arena.read_string(owner, out))
    }

    /// `CountOwned(arena, owner) -> size`: length of `owner`'s sub-list, or
    /// 0 if `owner` has no record.
    pub fn count_owned(&mut self, owner: Value) -> Result<usize, LinkedRingError> {
        self.locked(|arena| Ok(arena.count_owned(owner)))
    }

    /// `CountLimitedOwned(arena, owner, limit) -> size`: same as
    /// `count_owned`, short-circuiting at `limit`.
    pub fn count_limited_owned(
        &mut self,
        owner: Value,
        limit: usize,
    ) -> Result<usize, LinkedRingError> {
        self.locked(|arena| Ok(arena.count_limited_owned(owner, limit)))
    }

    /// `Count(arena) -> size`: total data cells across every owner.
    pub fn count(&mut self) -> Result<usize, LinkedRingError> {
        self.locked(|arena| Ok(arena.count_all()))
    }

    /// `Available(arena) -> size`: `size - data_count - owner_count`. Does
    /// not take the lock; read-only and racy only in the same sense as any
    /// other snapshot read would be.
    pub fn available(&self) -> usize {
        self.arena.available()
    }

    /// Total arena capacity, as configured.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of owners currently holding a record in the registry.
    pub fn owner_count(&self) -> usize {
        self.arena.owner_count()
    }

    /// Runs the non-mutating integrity check described in `spec.md` §4.4
    /// and returns `Ok(())` if every invariant holds, `Err(Unknown)`
    /// otherwise. Exposed for callers who want to run it outside of debug
    /// builds; the ring runs it automatically after mutations when
    /// `RingConfig::debug_integrity_checks` is set, but only in debug
    /// builds.
    pub fn check_integrity(&self) -> Result<(), LinkedRingError> {
        integrity::check(&self.arena)
    }

    /// Produces a human-readable, non-mutating dump of the arena's current
    /// structure, mirroring the original's `lr_dump` / `lr_debug_structure_*`
    /// diagnostics.
    pub fn dump(&self) -> String {
        crate::dump::dump(&self.arena)
    }

    fn locked<T>(
        &mut self,
        f: impl FnOnce(&mut Arena) -> Result<T, LinkedRingError>,
    ) -> Result<T, LinkedRingError> {
        self.lock.lock()?;
        let result = f(&mut self.arena);
        self.lock.unlock()?;
        self.check_integrity_in_debug();
        result
    }

    #[cfg(debug_assertions)]
    fn check_integrity_in_debug(&self) {
        if self.config.debug_integrity_checks {
            debug_assert!(
                self.check_integrity().is_ok(),
                "integrity check failed: {}",
                self.dump()
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_integrity_in_debug(&self) {}
}
