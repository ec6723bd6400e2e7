//! # Dispatcher: the consumer context for visibility transitions
//!
//! [`Dispatcher`] owns the single worker task that delivers committed
//! transitions to all observers **in commit order**.
//!
//! ## What it guarantees
//! - `publish(bool)` returns immediately (unbounded queue, no drops).
//! - Global FIFO: transitions reach observers in exactly the order they were
//!   enqueued by the gauge's critical section.
//! - Panics inside observers are caught and logged (isolation).
//!
//! ## What it does **not** guarantee
//! - Timeliness: delivery may lag mutation arbitrarily behind a slow observer.
//!
//! ## Diagram
//! ```text
//!    publish(bool) / flush()
//!        │
//!        ▼
//!    [directive queue] ─► worker ─► obs1.on_visibility()
//!     (unbounded mpsc)        └───► obs2.on_visibility()  (sequential)
//! ```
//!
//! The queue is unbounded because every committed transition must reach the
//! observers exactly once; a bounded queue with overflow drops would break
//! that. Transitions are rare by nature (one per 0↔positive crossing), so the
//! queue cannot grow faster than producers cross the boundary.

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, oneshot};

use crate::error::GaugeError;

use super::Observe;

/// Instructions for the consumer-context worker.
enum Directive {
    /// Deliver one committed transition to every observer.
    Publish(bool),
    /// Answer once every previously enqueued directive has been processed.
    Flush(oneshot::Sender<()>),
}

/// Single-worker, ordered delivery of visibility transitions.
pub(crate) struct Dispatcher {
    tx: mpsc::UnboundedSender<Directive>,
}

impl Dispatcher {
    /// Spawns the consumer-context worker for the given observers.
    ///
    /// Must be called within a tokio runtime. The worker exits once every
    /// sender handle is dropped and the queue has been drained.
    #[must_use]
    pub(crate) fn spawn(observers: Vec<Arc<dyn Observe>>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Directive>();

        tokio::spawn(async move {
            while let Some(directive) = rx.recv().await {
                match directive {
                    Directive::Publish(visible) => {
                        for obs in &observers {
                            let fut = obs.on_visibility(visible);
                            if let Err(panic_err) =
                                std::panic::AssertUnwindSafe(fut).catch_unwind().await
                            {
                                eprintln!(
                                    "[activity-gauge] observer '{}' panicked: {:?}",
                                    obs.name(),
                                    panic_err
                                );
                            }
                        }
                    }
                    Directive::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
        });

        Self { tx }
    }

    /// Enqueues one committed transition (non-blocking).
    ///
    /// Called from inside the gauge's critical section so that queue order is
    /// identical to commit order. The send is O(1) and never waits on the
    /// worker or on observers.
    pub(crate) fn publish(&self, visible: bool) {
        if self.tx.send(Directive::Publish(visible)).is_err() {
            // Worker can only be gone when the runtime is shutting down.
            eprintln!("[activity-gauge] dropped visibility notification: worker closed");
        }
    }

    /// Resolves once every transition enqueued before this call was delivered.
    pub(crate) async fn flush(&self) -> Result<(), GaugeError> {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx
            .send(Directive::Flush(done_tx))
            .map_err(|_| GaugeError::DispatcherClosed)?;
        done_rx.await.map_err(|_| GaugeError::DispatcherClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    /// Records every delivered value in arrival order.
    struct Recorder {
        seen: Mutex<Vec<bool>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<bool> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Observe for Recorder {
        async fn on_visibility(&self, visible: bool) {
            self.seen.lock().unwrap().push(visible);
        }
    }

    /// Panics on every delivery.
    struct Grenade;

    #[async_trait]
    impl Observe for Grenade {
        async fn on_visibility(&self, _visible: bool) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "grenade"
        }
    }

    #[tokio::test]
    async fn test_delivery_preserves_publish_order() {
        let rec = Recorder::new();
        let dispatcher = Dispatcher::spawn(vec![rec.clone() as Arc<dyn Observe>]);

        dispatcher.publish(true);
        dispatcher.publish(false);
        dispatcher.publish(true);
        dispatcher.flush().await.unwrap();

        assert_eq!(rec.seen(), vec![true, false, true]);
    }

    #[tokio::test]
    async fn test_observers_invoked_in_registration_order_per_transition() {
        let first = Recorder::new();
        let second = Recorder::new();
        let dispatcher =
            Dispatcher::spawn(vec![first.clone() as Arc<dyn Observe>, second.clone() as _]);

        dispatcher.publish(true);
        dispatcher.flush().await.unwrap();

        assert_eq!(first.seen(), vec![true]);
        assert_eq!(second.seen(), vec![true]);
    }

    #[tokio::test]
    async fn test_panicking_observer_does_not_disturb_others() {
        let rec = Recorder::new();
        let dispatcher = Dispatcher::spawn(vec![Arc::new(Grenade) as Arc<dyn Observe>, rec.clone() as _]);

        dispatcher.publish(true);
        dispatcher.publish(false);
        dispatcher.flush().await.unwrap();

        assert_eq!(
            rec.seen(),
            vec![true, false],
            "panic in one observer must not drop or reorder deliveries for others"
        );
    }

    #[tokio::test]
    async fn test_flush_with_no_observers_is_ok() {
        let dispatcher = Dispatcher::spawn(Vec::new());
        dispatcher.publish(true);
        assert!(dispatcher.flush().await.is_ok());
    }
}
