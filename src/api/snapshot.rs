use serde::{Deserialize, Serialize};

use crate::core::Sample;

use super::surface::SurfaceMode;

/// Serializable state snapshot used by regression tests and debugging
/// tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    pub mode: SurfaceMode,
    pub sample_count: usize,
    pub capacity: usize,
    pub time_window: Option<f64>,
    pub touch_state: bool,
    pub max_time: Option<f64>,
    pub position_band: (f64, f64),
    pub velocity_band: (f64, f64),
    pub tick_spacing_x: f64,
    pub tick_spacing_y: f64,
    pub samples: Vec<Sample>,
}
