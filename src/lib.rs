//! # activity-gauge
//!
//! **activity-gauge** is a small concurrency library that folds many
//! independent "work started" / "work stopped" events into a single boolean
//! *activity visible* signal.
//!
//! Producers on arbitrary threads call [`ActivityGauge::increment`] and
//! [`ActivityGauge::decrement`]; the gauge keeps a non-negative count, derives
//! `visible = count > 0` inside the same critical section, and publishes each
//! 0↔positive transition exactly once — in commit order — to observers running
//! on one dedicated consumer task.
//!
//! ## Architecture
//! ```text
//!  Producers (any thread):                 Consumer context (one task):
//!    increment() ──┐
//!    decrement() ──┼─► ActivityGauge ────► [transition queue] ─► Dispatcher
//!    reset()     ──┘   (mutex: count,        (unbounded mpsc,      worker
//!                       visible)              commit order)          │
//!                                                          ┌─────────┼─────────┐
//!                                                          ▼         ▼         ▼
//!                                                  obs1.on_   obs2.on_   obsN.on_
//!                                                  visibility visibility visibility
//!
//!  Optional named-event wiring:
//!    SignalBus (broadcast) ──► SignalBridge listener ──► gauge.increment()/decrement()
//! ```
//!
//! ## Guarantees
//! - `count >= 0` always; decrementing at zero is absorbed (clamped floor).
//! - `visible == (count > 0)` at every committed state; both fields change in
//!   one atomic step under the gauge's mutex.
//! - Every boundary crossing publishes exactly one notification; a sequence
//!   that never crosses the boundary publishes none. Observers never see two
//!   consecutive equal values.
//! - Notifications are delivered in commit order, asynchronously — delivery
//!   may lag mutation arbitrarily, but is never reordered or dropped.
//!
//! ## Features
//! | Area              | Description                                             | Key types                       |
//! |-------------------|---------------------------------------------------------|---------------------------------|
//! | **Counting**      | Clamped reference counting with derived visibility.     | [`ActivityGauge`]               |
//! | **Observers**     | Async visibility consumers on a dedicated worker.       | [`Observe`], [`LogObserver`]    |
//! | **Signals**       | Map named broadcast events to increment/decrement.      | [`SignalBus`], [`SignalBridge`] |
//! | **Errors**        | Typed errors at the async seams.                        | [`GaugeError`]                  |
//! | **Configuration** | Centralized wiring settings.                            | [`GaugeConfig`]                 |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use activity_gauge::{ActivityGauge, GaugeConfig, LogObserver, Observe};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let observers: Vec<Arc<dyn Observe>> = vec![Arc::new(LogObserver)];
//!     let gauge = ActivityGauge::builder(GaugeConfig::default())
//!         .with_observers(observers)
//!         .build();
//!
//!     gauge.increment(); // 0 -> 1: publishes `true`
//!     gauge.increment(); // still positive: no notification
//!     gauge.decrement(); // still positive: no notification
//!     gauge.decrement(); // 1 -> 0: publishes `false`
//!
//!     gauge.flush().await?; // wait for both notifications to be delivered
//!     assert_eq!(gauge.count(), 0);
//!     assert!(!gauge.is_visible());
//!     Ok(())
//! }
//! ```
//!
//! A process typically builds one gauge at startup and clones the `Arc`
//! wherever activity is produced; tests build a fresh instance each.
mod error;
mod gauge;
mod notify;
mod signals;

// ---- Public re-exports ----

pub use error::GaugeError;
pub use gauge::{ActivityGauge, GaugeBuilder, GaugeConfig};
pub use notify::{LogObserver, Observe};
pub use signals::{Signal, SignalBridge, SignalBus};
