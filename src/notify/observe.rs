//! # Core observer trait
//!
//! `Observe` is the extension point for plugging visibility consumers into
//! the gauge. Every observer is driven by the single consumer-context worker
//! owned by the [`Dispatcher`](crate::notify::Dispatcher).
//!
//! ## Contract
//! - `on_visibility` is invoked at most once per committed 0↔positive
//!   transition, never with a value equal to the previously delivered one.
//! - Calls arrive in commit order, on the worker task — never on the thread
//!   that mutated the counter.
//! - Implementations may be slow (I/O, animation); they delay later
//!   deliveries but never block or fail the producers.

use async_trait::async_trait;

/// Contract for visibility observers.
///
/// Called from the consumer-context worker task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Handle one committed visibility transition.
    ///
    /// # Parameters
    /// - `visible`: the new value; `true` when the count rose from zero,
    ///   `false` when it returned to zero.
    async fn on_visibility(&self, visible: bool);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
