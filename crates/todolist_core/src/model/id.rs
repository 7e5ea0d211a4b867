//! Time-sortable identifier generation.
//!
//! # Responsibility
//! - Provide the `TodoId` type used as primary key by every backend.
//! - Generate ids that encode a millisecond timestamp in the high bits and
//!   monotonic entropy in the low bits, so id order approximates creation
//!   order even within a single millisecond.
//!
//! # Invariants
//! - Two concurrent calls on the same generator never return the same id.
//! - Generation never panics; entropy exhaustion inside one millisecond
//!   tick rolls over to the next tick instead.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime};

use ulid::{Generator, Ulid};

/// Stable identifier for every todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Ulid;

/// Instance-owned monotonic ULID source.
///
/// Each backend owns one generator, seeded at construction; there is no
/// process-global entropy state. Within the same millisecond the entropy
/// counter increments, so rapid-succession ids remain strictly increasing.
pub struct IdGenerator {
    inner: Mutex<Generator>,
}

impl IdGenerator {
    /// Creates a generator with fresh entropy state.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Generator::new()),
        }
    }

    /// Returns the next id.
    ///
    /// # Invariants
    /// - Safe for concurrent invocation; the internal lock serializes the
    ///   entropy counter.
    /// - Never panics. A poisoned lock is recovered (generator state stays
    ///   valid across a payload panic), and entropy overflow within one
    ///   tick retries against the next millisecond.
    pub fn next_id(&self) -> TodoId {
        let mut generator = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match generator.generate() {
            Ok(id) => id,
            // Entropy counter exhausted within this millisecond tick.
            Err(_) => {
                let next_tick = SystemTime::now() + Duration::from_millis(1);
                generator
                    .generate_from_datetime(next_tick)
                    .unwrap_or_else(|_| Ulid::new())
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
