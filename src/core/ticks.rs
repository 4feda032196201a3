use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pixels of axis extent budgeted per tick.
const PX_PER_TICK: f64 = 50.0;

/// Inflation applied to the raw span before snapping, so data never sits
/// exactly on the snapped bounds.
const RANGE_BORDER: f64 = 1.09345;

/// Endpoint drift, as a share of the incoming span, below which the cached
/// tick state is reused.
const HYSTERESIS_RATIO: f64 = 0.1;

/// Picks a tick spacing of the form `{1, 2, 5} x 10^k` for an axis.
///
/// Aims for roughly `extent_px / 50` ticks by minimizing the fractional part
/// of `log10(range / (target * m))` over the three multipliers. Degenerate
/// input falls back to a spacing of 1.
#[must_use]
pub fn choose_tick_spacing(extent_px: f64, range: f64) -> f64 {
    if !extent_px.is_finite() || extent_px <= 0.0 || !range.is_finite() || range <= 0.0 {
        return 1.0;
    }

    let target = (extent_px / PX_PER_TICK).max(1.0);
    let mut best = (range / target).log10();
    let mut multiplier = 1.0;
    for candidate in [2.0, 5.0] {
        let log = (range / (target * candidate)).log10();
        if frac(log) < frac(best) {
            best = log;
            multiplier = candidate;
        }
    }
    multiplier * 10_f64.powf(best.floor())
}

fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Whether the planner's snapped range drives the axis or a fixed unit range
/// does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisRangeMode {
    /// Axis range pinned to `[0, 1]` regardless of data extrema.
    #[default]
    FixedUnit,
    /// Axis range follows the snapped tick computation.
    Computed,
}

/// Cached tick state for one axis, recomputed under hysteresis.
///
/// Recomputation only happens when the incoming extrema have drifted by more
/// than 10% of their span since the last accepted pair, which keeps the axis
/// from jittering on every frame of a live stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    last_min: f64,
    last_max: f64,
    spacing: f64,
    snapped_min: f64,
    snapped_max: f64,
    initialized: bool,
}

impl Default for AxisTicks {
    fn default() -> Self {
        Self {
            last_min: 0.0,
            last_max: 0.0,
            spacing: 1.0,
            snapped_min: 0.0,
            snapped_max: 0.0,
            initialized: false,
        }
    }
}

impl AxisTicks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current raw extrema; recomputes spacing and snapped bounds
    /// when the hysteresis gate opens. The first call always computes.
    pub fn recompute(&mut self, extent_px: f64, actual_min: f64, actual_max: f64) {
        if !actual_min.is_finite() || !actual_max.is_finite() {
            return;
        }

        let span = actual_max - actual_min;
        let drift = (self.last_min - actual_min).abs() + (self.last_max - actual_max).abs();
        if self.initialized && drift <= HYSTERESIS_RATIO * span {
            return;
        }

        let spacing = choose_tick_spacing(extent_px, span);
        // Inflate around the span midpoint, then snap outward to tick
        // multiples: floor for the lower bound, ceil for the upper.
        let inflated = if span > 0.0 {
            spacing * (RANGE_BORDER * span / spacing).ceil()
        } else {
            spacing
        };
        let center2 = actual_min + actual_max;
        self.snapped_min = spacing * ((center2 - inflated) / 2.0 / spacing).floor();
        self.snapped_max = spacing * ((center2 + inflated) / 2.0 / spacing).ceil();
        self.spacing = spacing;
        self.last_min = actual_min;
        self.last_max = actual_max;
        self.initialized = true;
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    #[must_use]
    pub fn snapped_range(&self) -> (f64, f64) {
        (self.snapped_min, self.snapped_max)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Tick values from the snapped lower bound to the snapped upper bound,
    /// inclusive within a small span-relative epsilon.
    #[must_use]
    pub fn tick_values(&self) -> SmallVec<[f64; 16]> {
        let mut values = SmallVec::new();
        if !self.initialized || self.spacing <= 0.0 {
            return values;
        }

        let epsilon = 1e-4 * (self.snapped_max - self.snapped_min);
        let mut tick = self.snapped_min;
        while tick <= self.snapped_max + epsilon {
            values.push(tick);
            tick += self.spacing;
        }
        values
    }
}
