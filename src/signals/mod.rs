//! Named signals: payload type, broadcast bus, and the counter bridge.
//!
//! This module is the optional convenience layer that lets external named
//! events drive the gauge without the producers holding a gauge handle.
//!
//! ## Contents
//! - [`Signal`] — named event payload with a monotonic sequence number
//! - [`SignalBus`] — thin wrapper over `tokio::sync::broadcast`
//! - [`SignalBridge`] — maps registered names to `increment`/`decrement`
//!
//! ## Quick reference
//! - **Publishers**: any code holding a [`SignalBus`] handle.
//! - **Consumers**: the bridge's background listener, which applies the
//!   registered direction for each signal name to the gauge.
//!
//! None of this is part of the counter's own state: the gauge works fully
//! without a bridge attached.

mod bridge;
mod bus;
mod signal;

pub use bridge::SignalBridge;
pub use bus::SignalBus;
pub use signal::Signal;
