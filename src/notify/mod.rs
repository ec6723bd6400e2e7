//! # Visibility observers and the consumer-context worker.
//!
//! This module provides the [`Observe`] trait — the contract for consumers of
//! visibility transitions — and the [`Dispatcher`], the single worker task
//! that delivers transitions to observers in commit order.
//!
//! ## Architecture
//! ```text
//! Transition flow:
//!   ActivityGauge ── enqueue(bool) ──► [unbounded queue] ──► Dispatcher worker
//!                                                                 │
//!                                                      ┌──────────┼──────────┐
//!                                                      ▼          ▼          ▼
//!                                                LogObserver   Metrics    Custom ...
//! ```
//!
//! ## Observer types
//! - **Passive observers** - react to transitions (toggle an indicator, log, count)
//! - The worker invokes observers sequentially per transition, so a single
//!   observer never sees reordered or concurrent deliveries.
//!
//! ## Implementing custom observers
//! ```no_run
//! use activity_gauge::Observe;
//! use async_trait::async_trait;
//!
//! struct IndicatorToggle;
//!
//! #[async_trait]
//! impl Observe for IndicatorToggle {
//!     async fn on_visibility(&self, visible: bool) {
//!         if visible {
//!             // show the spinner
//!         } else {
//!             // hide the spinner
//!         }
//!     }
//! }
//! ```

mod dispatcher;
mod log;
mod observe;

pub(crate) use dispatcher::Dispatcher;
pub use log::LogObserver;
pub use observe::Observe;
