//! # Maps named signals to counter mutations.
//!
//! [`SignalBridge`] subscribes to a signal stream and keeps two registration
//! sets: names that increment the gauge and names that decrement it.
//! Registration is keyed by name, so subscribing the same name twice is
//! naturally idempotent and unsubscribing an absent name is a no-op.
//!
//! # High-level architecture
//!
//! ```text
//!            ┌─────────────┐
//!  anyone ──►│  SignalBus  │
//!            └──────┬──────┘
//!                subscribe
//!                   ▼
//!   ┌──────────────────────────────────┐
//!   │ SignalBridge (name → direction)  │
//!   └───────────────┬──────────────────┘
//!        increment()/decrement()
//!                   ▼
//!   ┌──────────────────────────────────┐
//!   │          ActivityGauge           │
//!   └──────────────────────────────────┘
//! ```
//!
//! A name registered for **both** directions fires both on each delivery
//! (increment first), leaving the count unchanged net.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::gauge::ActivityGauge;

use super::signal::Signal;

/// Registered trigger names, per direction.
#[derive(Default)]
struct Triggers {
    increment: HashSet<Arc<str>>,
    decrement: HashSet<Arc<str>>,
}

struct BridgeInner {
    gauge: Arc<ActivityGauge>,
    triggers: Mutex<Triggers>,
}

impl BridgeInner {
    fn triggers(&self) -> std::sync::MutexGuard<'_, Triggers> {
        // Registrations stay consistent across an unwinding panic elsewhere.
        self.triggers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies the registered direction(s) for one signal to the gauge.
    fn apply(&self, signal: &Signal) {
        let (inc, dec) = {
            let t = self.triggers();
            (
                t.increment.contains(signal.name.as_ref()),
                t.decrement.contains(signal.name.as_ref()),
            )
        };
        // Gauge calls happen outside the registration lock.
        if inc {
            self.gauge.increment();
        }
        if dec {
            self.gauge.decrement();
        }
    }
}

/// Drives an [`ActivityGauge`] from named signals.
///
/// Cheap to clone; clones share the same registration sets and gauge.
#[derive(Clone)]
pub struct SignalBridge {
    inner: Arc<BridgeInner>,
}

impl SignalBridge {
    /// Creates a bridge with no registrations.
    pub fn new(gauge: Arc<ActivityGauge>) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                gauge,
                triggers: Mutex::new(Triggers::default()),
            }),
        }
    }

    /// Registers `name` to increment the gauge. Idempotent.
    pub fn subscribe_increment(&self, name: impl Into<Arc<str>>) {
        self.inner.triggers().increment.insert(name.into());
    }

    /// Registers `name` to decrement the gauge. Idempotent.
    pub fn subscribe_decrement(&self, name: impl Into<Arc<str>>) {
        self.inner.triggers().decrement.insert(name.into());
    }

    /// Removes the increment registration for `name`; no-op when absent.
    pub fn unsubscribe_increment(&self, name: &str) {
        self.inner.triggers().increment.remove(name);
    }

    /// Removes the decrement registration for `name`; no-op when absent.
    pub fn unsubscribe_decrement(&self, name: &str) {
        self.inner.triggers().decrement.remove(name);
    }

    /// Spawns a background listener over the given signal stream.
    ///
    /// For every received signal, the currently registered direction(s) for
    /// its name are applied to the gauge. Registrations may change while the
    /// listener runs; each delivery consults the live sets.
    ///
    /// The listener exits when `token` is cancelled or the bus is closed.
    /// A lagged receiver skips the missed signals and keeps going.
    pub fn spawn_listener(&self, mut rx: broadcast::Receiver<Signal>, token: CancellationToken) {
        let inner = self.inner.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    recv = rx.recv() => match recv {
                        Ok(signal) => inner.apply(&signal),
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            eprintln!("[activity-gauge] signal listener lagged, skipped {n} signals");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::gauge::GaugeConfig;

    fn fresh() -> (Arc<ActivityGauge>, SignalBridge, CancellationToken) {
        fresh_with(GaugeConfig::default())
    }

    fn fresh_with(cfg: GaugeConfig) -> (Arc<ActivityGauge>, SignalBridge, CancellationToken) {
        let gauge = ActivityGauge::builder(cfg).build();
        let bridge = SignalBridge::new(gauge.clone());
        let token = CancellationToken::new();
        bridge.spawn_listener(gauge.signals().subscribe(), token.clone());
        (gauge, bridge, token)
    }

    async fn wait_until(mut cond: impl FnMut() -> bool) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !cond() {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
        })
        .await
        .expect("condition not reached in time");
    }

    #[tokio::test]
    async fn test_registered_name_drives_counter_and_unsubscribe_stops_it() {
        let (gauge, bridge, _token) = fresh();

        bridge.subscribe_increment("A");
        gauge.signals().publish(Signal::new("A"));
        wait_until(|| gauge.count() == 1).await;

        // After unsubscribing, "A" must be ignored. The trailing "settle"
        // decrement proves the listener got past the ignored signal: the
        // count only reaches zero again if "A" contributed nothing.
        bridge.unsubscribe_increment("A");
        bridge.subscribe_decrement("settle");
        gauge.signals().publish(Signal::new("A"));
        gauge.signals().publish(Signal::new("settle"));
        wait_until(|| gauge.count() == 0).await;
        assert!(!gauge.is_visible());
    }

    #[tokio::test]
    async fn test_duplicate_subscription_does_not_double_count() {
        let (gauge, bridge, _token) = fresh();

        bridge.subscribe_increment("A");
        bridge.subscribe_increment("A");
        bridge.subscribe_decrement("settle");

        gauge.signals().publish(Signal::new("A"));
        gauge.signals().publish(Signal::new("settle"));

        // One "A" plus one "settle" lands back on zero only if "A" counted
        // exactly once.
        wait_until(|| gauge.count() == 0).await;
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_name_is_noop() {
        let (gauge, bridge, _token) = fresh();

        bridge.unsubscribe_increment("never-registered");
        bridge.unsubscribe_decrement("never-registered");

        bridge.subscribe_increment("A");
        gauge.signals().publish(Signal::new("A"));
        wait_until(|| gauge.count() == 1).await;
    }

    #[tokio::test]
    async fn test_listener_survives_lag_and_keeps_applying_signals() {
        // Capacity 1: any burst overwrites all but the newest signal. On the
        // current-thread test runtime the listener cannot run between the
        // publishes below, so the first recv() is guaranteed to hit Lagged.
        let (gauge, bridge, _token) = fresh_with(GaugeConfig { bus_capacity: 1 });

        bridge.subscribe_increment("A");
        for _ in 0..16 {
            gauge.signals().publish(Signal::new("A"));
        }
        // Only the newest "A" survives the ring buffer.
        wait_until(|| gauge.count() == 1).await;

        // The lagged listener must still be alive and applying signals.
        gauge.signals().publish(Signal::new("A"));
        wait_until(|| gauge.count() == 2).await;
    }

    #[tokio::test]
    async fn test_cancelled_listener_ignores_further_signals() {
        let (gauge, bridge, token) = fresh();

        bridge.subscribe_increment("A");
        gauge.signals().publish(Signal::new("A"));
        wait_until(|| gauge.count() == 1).await;

        token.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;

        gauge.signals().publish(Signal::new("A"));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(gauge.count(), 1, "signals after cancellation must be ignored");
    }
}
