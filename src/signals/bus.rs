//! # Broadcast bus for named signals.
//!
//! [`SignalBus`] carries [`Signal`]s from arbitrary producers to the
//! [`SignalBridge`](crate::SignalBridge) listeners attached to a gauge. It is
//! the pub/sub half of the named-event layer: producers fire names without
//! holding a gauge handle, and the bridge decides at delivery time what each
//! name does to the counter.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                    Listeners (per bridge):
//!   HTTP layer ──┐
//!   Job queue  ──┼──────► SignalBus ───────► SignalBridge listener ──► gauge
//!   Anything   ──┘     (broadcast chan)
//! ```
//!
//! ## Delivery semantics
//! - Publishing never waits. A send is a ring-buffer write, so producers on
//!   hot paths pay O(1) regardless of how slow the listener is.
//! - The ring buffer holds the most recent `capacity` signals. A listener
//!   that falls further behind sees `RecvError::Lagged(n)`: those `n`
//!   signals are gone, and every lost signal is one increment or decrement
//!   that never reaches the gauge. The count then understates (or overstates)
//!   what producers intended — size `bus_capacity` generously wherever the
//!   bridge is the only thing driving the counter.
//! - Signals published while no receiver exists are discarded outright.
//!   [`ActivityGauge::reset`](crate::ActivityGauge::reset) is the recovery
//!   tool when start/stop signals are presumed lost.

use tokio::sync::broadcast;

use super::signal::Signal;

/// Broadcast channel for named signals.
///
/// Handles are cheap to clone and every clone publishes into the same ring
/// buffer, so one bus can be handed to each producer subsystem at startup.
/// Receivers obtained via [`subscribe`](SignalBus::subscribe) are independent
/// cursors over that shared buffer.
#[derive(Clone, Debug)]
pub struct SignalBus {
    tx: broadcast::Sender<Signal>,
}

impl SignalBus {
    /// Creates a bus whose ring buffer holds `capacity` signals (minimum 1,
    /// clamped here).
    ///
    /// Capacity bounds how far a bridge listener may fall behind before
    /// signals — and with them counter mutations — start being skipped.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Signal>(capacity);
        Self { tx }
    }

    /// Publishes a signal to every current receiver.
    ///
    /// Returns immediately. With no receiver attached the signal is
    /// discarded; the gauge only moves while a bridge listener is subscribed.
    pub fn publish(&self, signal: Signal) {
        let _ = self.tx.send(signal);
    }

    /// Creates an independent receiver positioned after everything already
    /// published.
    ///
    /// Hand the receiver to
    /// [`SignalBridge::spawn_listener`](crate::SignalBridge::spawn_listener).
    /// A receiver that lags more than the bus capacity skips the overwritten
    /// signals and continues from the oldest one still buffered.
    pub fn subscribe(&self) -> broadcast::Receiver<Signal> {
        self.tx.subscribe()
    }
}
