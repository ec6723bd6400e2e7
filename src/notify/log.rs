//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints visibility transitions to stdout in a
//! human-readable format.
//!
//! ## Output format
//! ```text
//! [visible] activity started
//! [hidden] all activity stopped
//! ```
//!
//! Not intended for production use - implement a custom [`Observe`] to drive
//! a real indicator or structured logging.

use async_trait::async_trait;

use super::Observe;

/// Simple stdout logging observer.
pub struct LogObserver;

#[async_trait]
impl Observe for LogObserver {
    async fn on_visibility(&self, visible: bool) {
        if visible {
            println!("[visible] activity started");
        } else {
            println!("[hidden] all activity stopped");
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
