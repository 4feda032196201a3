use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern for polylines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StrokeStyle {
    Solid,
    Dashed { dash_px: f64, gap_px: f64 },
}

impl StrokeStyle {
    pub fn validate(self) -> GraphResult<()> {
        if let Self::Dashed { dash_px, gap_px } = self {
            if !dash_px.is_finite() || dash_px <= 0.0 || !gap_px.is_finite() || gap_px <= 0.0 {
                return Err(GraphError::InvalidData(
                    "dash pattern lengths must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// One point of a polyline, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Draw command for one straight line in pixel space (axes, gridlines).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width_px: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width_px: f64,
        color: Color,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width_px,
            color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(GraphError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width_px.is_finite() || self.stroke_width_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one stroked polyline in pixel space.
///
/// A single-point polyline is legal; it strokes nothing but keeps segment
/// accounting uniform for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<PlotPoint>,
    pub stroke_width_px: f64,
    pub color: Color,
    pub style: StrokeStyle,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> GraphResult<()> {
        if self.points.is_empty() {
            return Err(GraphError::InvalidData(
                "polyline must contain at least one point".to_owned(),
            ));
        }
        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(GraphError::InvalidData(
                    "polyline coordinates must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width_px.is_finite() || self.stroke_width_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.style.validate()?;
        self.color.validate()
    }
}

/// Draw command for one filled rounded-square marker centered at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub half_size_px: f64,
    pub corner_radius_px: f64,
    pub color: Color,
}

impl MarkerPrimitive {
    pub fn validate(self) -> GraphResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "marker coordinates must be finite".to_owned(),
            ));
        }
        if !self.half_size_px.is_finite() || self.half_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "marker half size must be finite and > 0".to_owned(),
            ));
        }
        if !self.corner_radius_px.is_finite() || self.corner_radius_px < 0.0 {
            return Err(GraphError::InvalidData(
                "marker corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.text.is_empty() {
            return Err(GraphError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
