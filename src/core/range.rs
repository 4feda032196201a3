use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Tuning for exponential-decay range smoothing.
///
/// `floor`/`ceiling` define the band that stays visible regardless of data:
/// the smoothed minimum is clamped from above by `floor`, the smoothed
/// maximum from below by `ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSmoothingTuning {
    pub alpha: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for RangeSmoothingTuning {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            floor: 0.0,
            ceiling: 1.0,
        }
    }
}

impl RangeSmoothingTuning {
    pub fn validate(self) -> GraphResult<Self> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(GraphError::InvalidData(
                "smoothing alpha must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.floor.is_finite() || !self.ceiling.is_finite() || self.floor >= self.ceiling {
            return Err(GraphError::InvalidData(
                "smoothing floor must be finite and < ceiling".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Smoothed `[min, max]` band over one sample channel.
///
/// One exponential-decay step per render frame follows the raw extrema while
/// suppressing per-frame jumps; redundant updates with the same extrema are
/// safe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothedRange {
    min: f64,
    max: f64,
    tuning: RangeSmoothingTuning,
}

impl SmoothedRange {
    pub fn new(tuning: RangeSmoothingTuning) -> GraphResult<Self> {
        let tuning = tuning.validate()?;
        Ok(Self {
            min: tuning.floor,
            max: tuning.ceiling,
            tuning,
        })
    }

    /// Restores the default `[floor, ceiling]` band.
    pub fn reset(&mut self) {
        self.min = self.tuning.floor;
        self.max = self.tuning.ceiling;
    }

    /// Overrides the current band, e.g. to pre-widen it on a mode switch.
    pub fn seed(&mut self, min: f64, max: f64) -> GraphResult<()> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GraphError::InvalidData(
                "seeded range must be finite and min < max".to_owned(),
            ));
        }
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Decays the band toward the given raw extrema.
    ///
    /// Non-finite input (an empty channel) skips the update entirely.
    pub fn update(&mut self, raw_min: f64, raw_max: f64) {
        if !raw_min.is_finite() || !raw_max.is_finite() {
            return;
        }
        let alpha = self.tuning.alpha;
        self.min = (self.min + alpha * (raw_min - self.min)).min(self.tuning.floor);
        self.max = (self.max + alpha * (raw_max - self.max)).max(self.tuning.ceiling);
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}
