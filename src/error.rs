//! Error types used by the activity-gauge runtime.
//!
//! Counter mutations (`increment`/`decrement`/`reset`) are infallible by
//! design: every input is valid and underflow is absorbed by the clamped
//! floor. Errors only exist at the async seams, where the caller interacts
//! with the consumer-context worker.

use thiserror::Error;

/// # Errors produced by the gauge runtime.
///
/// These represent failures of the notification machinery, never of the
/// counter state itself.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum GaugeError {
    /// The consumer-context worker has terminated; pending and future
    /// notifications can no longer be delivered or awaited.
    #[error("dispatcher worker is gone; notifications can no longer be delivered")]
    DispatcherClosed,
}

impl GaugeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use activity_gauge::GaugeError;
    ///
    /// let err = GaugeError::DispatcherClosed;
    /// assert_eq!(err.as_label(), "dispatcher_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            GaugeError::DispatcherClosed => "dispatcher_closed",
        }
    }
}
