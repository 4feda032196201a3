use serde::{Deserialize, Serialize};

use crate::core::types::{Margins, Viewport};
use crate::error::{GraphError, GraphResult};

/// Affine data-to-pixel mapping for one channel.
///
/// Derived fresh every frame from the buffer extent and surface geometry;
/// nothing here persists between renders. `windowed` reports that a sliding
/// time window is clipping older samples off the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelMapping {
    pub scale_x: f64,
    pub offset_x: f64,
    pub scale_y: f64,
    pub offset_y: f64,
    pub windowed: bool,
}

impl ChannelMapping {
    /// Maps a data-space `(time, value)` pair to pixel coordinates.
    #[must_use]
    pub fn map(self, time: f64, value: f64) -> (f64, f64) {
        (
            time * self.scale_x + self.offset_x,
            value * self.scale_y + self.offset_y,
        )
    }
}

/// Mapping for the position channel: fixed unit value range `[0, 1]` over the
/// plot height, screen-inverted Y.
pub fn position_mapping(
    max_time: f64,
    viewport: Viewport,
    margins: Margins,
    time_window: Option<f64>,
) -> GraphResult<ChannelMapping> {
    let (plot_width, plot_height) = margins.plot_area(viewport)?;
    let (scale_x, offset_x, windowed) =
        horizontal_terms(max_time, plot_width, margins.left_px, time_window)?;

    Ok(ChannelMapping {
        scale_x,
        offset_x,
        scale_y: -plot_height,
        offset_y: f64::from(viewport.height) - margins.bottom_px,
        windowed,
    })
}

/// Mapping for the velocity channel: the smoothed `(min, max)` band spans the
/// plot height, with `min` on the bottom edge.
pub fn velocity_mapping(
    max_time: f64,
    viewport: Viewport,
    margins: Margins,
    time_window: Option<f64>,
    band: (f64, f64),
) -> GraphResult<ChannelMapping> {
    let (plot_width, plot_height) = margins.plot_area(viewport)?;
    let (scale_x, offset_x, windowed) =
        horizontal_terms(max_time, plot_width, margins.left_px, time_window)?;

    let (band_min, band_max) = band;
    let band_span = band_max - band_min;
    if !band_span.is_finite() || band_span <= 0.0 {
        return Err(GraphError::InvalidData(
            "velocity band must be finite and min < max".to_owned(),
        ));
    }

    Ok(ChannelMapping {
        scale_x,
        offset_x,
        scale_y: -plot_height / band_span,
        offset_y: f64::from(viewport.height) - margins.bottom_px
            + band_min * plot_height / band_span,
        windowed,
    })
}

/// Shared horizontal terms: full-history scaling, or window scaling with a
/// left shift that pins the most recent `window` seconds to the plot width.
fn horizontal_terms(
    max_time: f64,
    plot_width: f64,
    left_px: f64,
    time_window: Option<f64>,
) -> GraphResult<(f64, f64, bool)> {
    if !max_time.is_finite() || max_time < 0.0 {
        return Err(GraphError::InvalidData(
            "buffer max time must be finite and >= 0".to_owned(),
        ));
    }

    // A single sample at t = 0 has no horizontal extent; spread it over one
    // second rather than dividing by zero.
    let history_span = if max_time > 0.0 { max_time } else { 1.0 };

    match time_window {
        None => Ok((plot_width / history_span, left_px, false)),
        Some(window) => {
            if !window.is_finite() || window <= 0.0 {
                return Err(GraphError::InvalidData(
                    "time window must be finite and > 0".to_owned(),
                ));
            }
            let scale_x = plot_width / window;
            if window < max_time {
                let offset_x = left_px - scale_x * (max_time - window);
                Ok((scale_x, offset_x, true))
            } else {
                Ok((scale_x, left_px, false))
            }
        }
    }
}
