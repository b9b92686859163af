/// Configuration for a [`crate::LinkedRing`].
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    /// Total arena capacity in cells, including whatever owner records end
    /// up living in it. Usable data capacity is always less than this.
    pub capacity: usize,
    /// Run the non-mutating integrity check (`spec.md` §4.4) after every
    /// mutating call, in debug builds only. Has no effect in release builds.
    pub debug_integrity_checks: bool,
}

impl RingConfig {
    /// Creates a new configuration with custom settings.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub const fn new(capacity: usize, debug_integrity_checks: bool) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");

        Self {
            capacity,
            debug_integrity_checks,
        }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            debug_integrity_checks: true,
        }
    }
}

/// A small arena suitable for embedding in resource-constrained environments.
pub const SMALL_CONFIG: RingConfig = RingConfig::new(16, true);

/// A larger arena for bulk buffering, with integrity checks disabled.
pub const LARGE_CONFIG: RingConfig = RingConfig::new(4096, false);
