//! Gauge core: the counter state machine and its wiring.
//!
//! The only long-lived object from this module is [`ActivityGauge`], built
//! through [`GaugeBuilder`]. Internal modules:
//! - [`counter`]: the mutex-guarded count/visible pair and mutate-then-publish;
//! - [`builder`]: constructs the gauge and spawns the consumer-context worker;
//! - [`config`]: centralized wiring settings.

mod builder;
mod config;
mod counter;

pub use builder::GaugeBuilder;
pub use config::GaugeConfig;
pub use counter::ActivityGauge;
