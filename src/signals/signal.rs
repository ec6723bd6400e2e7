//! # Named event payload carried by the signal bus.
//!
//! A [`Signal`] is nothing but a name plus a sequence number. The bridge
//! decides what a name means (increment, decrement, or nothing) at delivery
//! time, so publishers need no knowledge of the gauge.
//!
//! ## Ordering guarantees
//! Each signal has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact publish order when signals
//! from several buses are merged in logs.
//!
//! ## Example
//! ```rust
//! use activity_gauge::Signal;
//!
//! let a = Signal::new("request-started");
//! let b = Signal::new("request-started");
//! assert_eq!(a.name.as_ref(), "request-started");
//! assert!(a.seq < b.seq);
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Global sequence counter for signal ordering.
static SIGNAL_SEQ: AtomicU64 = AtomicU64::new(0);

/// A named event with ordering metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `name`: the registration key the bridge matches on
#[derive(Clone, Debug)]
pub struct Signal {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Name of the event; matched against bridge registrations.
    pub name: Arc<str>,
}

impl Signal {
    /// Creates a new signal with the next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: SIGNAL_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let first = Signal::new("a");
        let second = Signal::new("b");
        assert!(first.seq < second.seq);
    }
}
