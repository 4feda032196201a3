use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::{Color, SegmentPalette};

/// Visual constants threaded into every draw command the surface emits.
///
/// Defaults reproduce the reference overlay look: blue/orange position
/// strokes, muted blue/tan velocity strokes, 4 px lines, 10 px half-size
/// rounded markers and a 20/20 px dash pattern for the velocity pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    pub stroke_width_px: f64,
    pub marker_half_size_px: f64,
    pub marker_corner_radius_px: f64,
    pub dash_px: f64,
    pub dash_gap_px: f64,
    pub font_size_px: f64,
    pub text_gap_px: f64,
    pub label_pad_px: f64,
    pub position_palette: SegmentPalette,
    pub velocity_palette: SegmentPalette,
    pub axis_color: Color,
    pub grid_color: Color,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            stroke_width_px: 4.0,
            marker_half_size_px: 10.0,
            marker_corner_radius_px: 20.0,
            dash_px: 20.0,
            dash_gap_px: 20.0,
            font_size_px: 48.0,
            text_gap_px: 2.0,
            label_pad_px: 8.0,
            position_palette: SegmentPalette {
                touched: Color::rgb(0.0, 0.0, 1.0),
                released: Color::rgb(248.0 / 255.0, 136.0 / 255.0, 0.0),
            },
            velocity_palette: SegmentPalette {
                touched: Color::rgb(85.0 / 255.0, 85.0 / 255.0, 153.0 / 255.0),
                released: Color::rgb(153.0 / 255.0, 136.0 / 255.0, 102.0 / 255.0),
            },
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            grid_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

impl SurfaceStyle {
    pub fn validate(self) -> GraphResult<Self> {
        for (name, value) in [
            ("stroke_width_px", self.stroke_width_px),
            ("marker_half_size_px", self.marker_half_size_px),
            ("dash_px", self.dash_px),
            ("dash_gap_px", self.dash_gap_px),
            ("font_size_px", self.font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("marker_corner_radius_px", self.marker_corner_radius_px),
            ("text_gap_px", self.text_gap_px),
            ("label_pad_px", self.label_pad_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        self.position_palette.validate()?;
        self.velocity_palette.validate()?;
        self.axis_color.validate()?;
        self.grid_color.validate()?;
        Ok(self)
    }
}
