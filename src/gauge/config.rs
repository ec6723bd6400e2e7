//! # Gauge wiring configuration.
//!
//! Provides [`GaugeConfig`], consumed by [`GaugeBuilder`](crate::GaugeBuilder)
//! when constructing an [`ActivityGauge`](crate::ActivityGauge).
//!
//! The counter itself has no tunables — its behavior is fully fixed by the
//! clamped-floor semantics. Configuration only covers the surrounding
//! machinery (the named-signal bus).

/// Wiring configuration for an [`ActivityGauge`](crate::ActivityGauge).
///
/// ## Field semantics
/// - `bus_capacity`: Signal bus ring buffer size (min 1; clamped at build)
#[derive(Clone, Debug)]
pub struct GaugeConfig {
    /// Capacity of the named-signal broadcast channel ring buffer.
    ///
    /// Slow listeners that lag behind more than `bus_capacity` signals will
    /// observe `Lagged` and skip older items. Minimum value is 1 (enforced at
    /// build time).
    pub bus_capacity: usize,
}

impl GaugeConfig {
    /// Returns the bus capacity clamped to a minimum of 1.
    ///
    /// The builder uses this value to avoid constructing an invalid channel.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for GaugeConfig {
    /// Default configuration:
    ///
    /// - `bus_capacity = 1024` (good baseline)
    fn default() -> Self {
        Self { bus_capacity: 1024 }
    }
}
