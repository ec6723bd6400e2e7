use std::sync::Arc;

use crate::{
    gauge::{ActivityGauge, GaugeConfig},
    notify::{Dispatcher, Observe},
    signals::SignalBus,
};

/// Builder for constructing an [`ActivityGauge`] with its observers.
pub struct GaugeBuilder {
    cfg: GaugeConfig,
    observers: Vec<Arc<dyn Observe>>,
}

impl GaugeBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: GaugeConfig) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
        }
    }

    /// Sets the visibility observers.
    ///
    /// Observers receive committed 0↔positive transitions on the
    /// consumer-context worker, in commit order, invoked sequentially in the
    /// order given here.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Appends a single observer.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Builds and returns the gauge.
    ///
    /// This consumes the builder and initializes the runtime pieces:
    /// - the consumer-context worker (dispatcher) for the observers
    /// - the named-signal bus for optional bridge wiring
    ///
    /// Must be called within a tokio runtime (the worker is spawned here).
    /// Dropping the last `Arc` closes the transition queue; the worker drains
    /// whatever was already committed and exits.
    pub fn build(self) -> Arc<ActivityGauge> {
        let dispatcher = Dispatcher::spawn(self.observers);
        let signals = SignalBus::new(self.cfg.bus_capacity_clamped());

        Arc::new(ActivityGauge::new_internal(dispatcher, signals))
    }
}
