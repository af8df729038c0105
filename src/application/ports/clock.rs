//! Clock port interface

use std::time::Instant;

/// Monotonic time source, injectable so cache expiry can be tested
/// without waiting.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;
}
