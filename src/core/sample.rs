use std::collections::VecDeque;
use std::time::Instant;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Default maximum number of samples kept by a buffer.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Sliding-window width restored by [`SampleBuffer::reset`], in seconds.
pub const DEFAULT_TIME_WINDOW_SECS: f64 = 2.0;

/// One observation on the stream. Immutable once appended.
///
/// `time` is seconds elapsed since the buffer's reset epoch and is
/// non-decreasing across the buffer. `velocity` is present only when the
/// producer reported a derivative alongside the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
    pub velocity: Option<f64>,
    pub touching: bool,
}

/// Behavior when an append would exceed the configured capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OverflowPolicy {
    /// Fail the append with [`GraphError::CapacityExceeded`].
    #[default]
    Reject,
    /// Drop the oldest sample to make room for the new one.
    EvictOldest,
}

/// Bounded, append-only store of time-stamped samples.
///
/// Timestamps come from a monotonic epoch captured at [`reset`]; wall-clock
/// jumps cannot reorder samples. The buffer also carries the touch flag
/// applied to future appends and the sliding-window width consumed by the
/// mapping stage.
///
/// [`reset`]: SampleBuffer::reset
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
    overflow: OverflowPolicy,
    epoch: Instant,
    touching: bool,
    time_window: Option<f64>,
}

impl SampleBuffer {
    pub fn new(capacity: usize, overflow: OverflowPolicy) -> GraphResult<Self> {
        if capacity == 0 {
            return Err(GraphError::InvalidData(
                "sample buffer capacity must be >= 1".to_owned(),
            ));
        }

        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            overflow,
            epoch: Instant::now(),
            touching: false,
            time_window: Some(DEFAULT_TIME_WINDOW_SECS),
        })
    }

    /// Clears all samples and restarts the session.
    ///
    /// The epoch moves to "now", the sliding window returns to its default
    /// width and the touch flag is lowered.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.epoch = Instant::now();
        self.touching = false;
        self.time_window = Some(DEFAULT_TIME_WINDOW_SECS);
    }

    /// Appends one sample stamped with the current elapsed session time.
    pub fn push(&mut self, value: f64, velocity: Option<f64>) -> GraphResult<()> {
        let time = self.epoch.elapsed().as_secs_f64();
        self.push_at(time, value, velocity)
    }

    /// Appends one sample with an explicit timestamp.
    ///
    /// Used by tests and trace replay. `time` must not precede the last
    /// buffered sample.
    pub fn push_at(&mut self, time: f64, value: f64, velocity: Option<f64>) -> GraphResult<()> {
        if !time.is_finite() || !value.is_finite() {
            return Err(GraphError::InvalidData(
                "sample time and value must be finite".to_owned(),
            ));
        }
        if matches!(velocity, Some(v) if !v.is_finite()) {
            return Err(GraphError::InvalidData(
                "sample velocity must be finite".to_owned(),
            ));
        }
        if let Some(last) = self.samples.back() {
            if time < last.time {
                return Err(GraphError::InvalidData(format!(
                    "sample time {time} precedes last buffered time {}",
                    last.time
                )));
            }
        }

        if self.samples.len() == self.capacity {
            match self.overflow {
                OverflowPolicy::Reject => {
                    return Err(GraphError::CapacityExceeded {
                        capacity: self.capacity,
                    });
                }
                OverflowPolicy::EvictOldest => {
                    self.samples.pop_front();
                }
            }
        }

        self.samples.push_back(Sample {
            time,
            value,
            velocity,
            touching: self.touching,
        });
        Ok(())
    }

    /// Sets the touch flag stamped onto future samples. Existing samples are
    /// unaffected.
    pub fn set_touch_state(&mut self, touching: bool) {
        self.touching = touching;
    }

    #[must_use]
    pub fn touch_state(&self) -> bool {
        self.touching
    }

    /// Configures the sliding-window width in seconds. `None` shows the full
    /// buffered history.
    pub fn set_time_window(&mut self, window_secs: Option<f64>) -> GraphResult<()> {
        if matches!(window_secs, Some(w) if !w.is_finite() || w <= 0.0) {
            return Err(GraphError::InvalidData(
                "time window must be finite and > 0".to_owned(),
            ));
        }
        self.time_window = window_secs;
        Ok(())
    }

    #[must_use]
    pub fn time_window(&self) -> Option<f64> {
        self.time_window
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.front()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Timestamp of the most recent sample, if any.
    #[must_use]
    pub fn max_time(&self) -> Option<f64> {
        self.samples.back().map(|sample| sample.time)
    }

    /// Raw `(min, max)` of the value channel.
    #[must_use]
    pub fn value_extrema(&self) -> Option<(f64, f64)> {
        extrema(self.samples.iter().map(|sample| sample.value))
    }

    /// Raw `(min, max)` of the velocity channel, over samples that carry one.
    #[must_use]
    pub fn velocity_extrema(&self) -> Option<(f64, f64)> {
        extrema(self.samples.iter().filter_map(|sample| sample.velocity))
    }
}

fn extrema(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = OrderedFloat(f64::INFINITY);
    let mut max = OrderedFloat(f64::NEG_INFINITY);
    let mut seen = false;
    for value in values {
        seen = true;
        min = min.min(OrderedFloat(value));
        max = max.max(OrderedFloat(value));
    }
    seen.then_some((min.into_inner(), max.into_inner()))
}
