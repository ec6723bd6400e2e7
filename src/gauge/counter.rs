//! # ActivityGauge: the clamped counter behind the visibility signal.
//!
//! [`ActivityGauge`] owns the process-wide `count`/`visible` pair. Producers
//! on any thread call [`increment`](ActivityGauge::increment),
//! [`decrement`](ActivityGauge::decrement) or [`reset`](ActivityGauge::reset);
//! every mutation and the recomputation of `visible` commit as one atomic
//! step under a single mutex.
//!
//! ## Mutate-then-publish
//! ```text
//! increment()/decrement()/reset()
//!     │ lock
//!     ├─► apply delta (floor-clamped at 0)
//!     ├─► visible = count > 0
//!     ├─► changed? ──► enqueue new value on the transition queue
//!     │ unlock           (O(1), non-blocking; queue order == commit order)
//!     ▼
//!   return            ... Dispatcher worker delivers to observers later
//! ```
//!
//! The enqueue happens while the lock is held so that two racing mutators can
//! never reorder their transitions relative to commit order. Observers are
//! only ever invoked on the dispatcher worker, never inside the critical
//! section, so a slow consumer cannot stall producers.
//!
//! ## Invariants
//! - `count >= 0` (decrementing at zero is absorbed, not an error);
//! - `visible == (count > 0)` at every committed state;
//! - exactly one notification per 0↔positive crossing, in commit order.
//!
//! `visible` can only be recomputed through [`State::refresh`], which is only
//! reachable via the gauge's `MutexGuard` — updating it without exclusive
//! access does not compile.

use std::sync::{Mutex, PoisonError};

use crate::{
    error::GaugeError,
    gauge::{builder::GaugeBuilder, config::GaugeConfig},
    notify::Dispatcher,
    signals::SignalBus,
};

/// The guarded count/visible pair.
///
/// Both fields live behind the gauge's mutex; nothing outside the critical
/// section can read or write them individually.
struct State {
    count: u64,
    visible: bool,
}

impl State {
    /// Recomputes `visible` from `count`.
    ///
    /// Returns the new value when it changed, `None` otherwise. Reachable
    /// only through the gauge's `MutexGuard`, which makes the derive step
    /// part of the same atomic commit as the count mutation.
    fn refresh(&mut self) -> Option<bool> {
        let now = self.count > 0;
        if now != self.visible {
            self.visible = now;
            Some(now)
        } else {
            None
        }
    }
}

/// Process-wide activity reference counter with a derived visibility flag.
///
/// Build one via [`ActivityGauge::builder`], hold it behind an `Arc`, and
/// clone the handle wherever activity is produced. All mutators are
/// synchronous and callable from any thread; none blocks beyond brief lock
/// contention, and none waits for observers.
pub struct ActivityGauge {
    state: Mutex<State>,
    dispatcher: Dispatcher,
    signals: SignalBus,
}

impl ActivityGauge {
    /// Returns a builder for constructing a gauge with observers.
    pub fn builder(cfg: GaugeConfig) -> GaugeBuilder {
        GaugeBuilder::new(cfg)
    }

    pub(crate) fn new_internal(dispatcher: Dispatcher, signals: SignalBus) -> Self {
        Self {
            state: Mutex::new(State {
                count: 0,
                visible: false,
            }),
            dispatcher,
            signals,
        }
    }

    /// Runs one mutation as a single committed step.
    ///
    /// Lock, mutate, re-derive `visible`, and (on a transition) enqueue the
    /// new value — all before unlocking, so queue order equals commit order.
    fn apply(&self, mutate: impl FnOnce(&mut State)) {
        // A poisoned lock still holds a valid pair; keep serving.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        mutate(&mut state);
        if let Some(visible) = state.refresh() {
            self.dispatcher.publish(visible);
        }
    }

    /// Registers one unit of activity.
    ///
    /// Always succeeds. Publishes `true` to the observers iff the count rose
    /// from zero.
    pub fn increment(&self) {
        self.apply(|s| s.count += 1);
    }

    /// Unregisters one unit of activity.
    ///
    /// Decrementing at zero is a no-op on the floor, not an error — stop
    /// events may arrive after a reset or be mismatched with starts.
    /// Publishes `false` to the observers iff the count returned to zero.
    pub fn decrement(&self) {
        self.apply(|s| s.count = s.count.saturating_sub(1));
    }

    /// Forces the counter back to a known-good baseline of zero.
    ///
    /// Publishes `false` iff the gauge was visible beforehand.
    pub fn reset(&self) {
        self.apply(|s| s.count = 0);
    }

    /// Point-in-time read of the current count.
    pub fn count(&self) -> u64 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .count
    }

    /// Point-in-time read of the derived visibility flag.
    pub fn is_visible(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .visible
    }

    /// Consistent point-in-time read of `(count, visible)`.
    ///
    /// Taken under the same lock as mutations, so the pair always reflects a
    /// committed state — never a combination that did not exist.
    pub fn snapshot(&self) -> (u64, bool) {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        (state.count, state.visible)
    }

    /// The named-signal bus associated with this gauge.
    ///
    /// Publish [`Signal`](crate::Signal)s here and attach a
    /// [`SignalBridge`](crate::SignalBridge) listener to drive the counter
    /// from named events.
    pub fn signals(&self) -> &SignalBus {
        &self.signals
    }

    /// Resolves once every transition committed before this call has been
    /// delivered to all observers.
    ///
    /// # Errors
    /// [`GaugeError::DispatcherClosed`] if the consumer-context worker is
    /// gone (runtime shutdown).
    pub async fn flush(&self) -> Result<(), GaugeError> {
        self.dispatcher.flush().await
    }
}
