use serde::{Deserialize, Serialize};

use crate::core::mapping::ChannelMapping;
use crate::core::sample::{Sample, SampleBuffer};
use crate::error::{GraphError, GraphResult};
use crate::render::primitives::{
    Color, MarkerPrimitive, PlotPoint, PolylinePrimitive, StrokeStyle,
};

/// Stroke colors keyed by the touch flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPalette {
    pub touched: Color,
    pub released: Color,
}

impl SegmentPalette {
    fn color_for(self, touching: bool) -> Color {
        if touching { self.touched } else { self.released }
    }

    pub fn validate(self) -> GraphResult<()> {
        self.touched.validate()?;
        self.released.validate()
    }
}

/// Channel read by a segmented pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleChannel {
    Position,
    Velocity,
}

impl SampleChannel {
    /// Channel value of one sample. Samples without a velocity observation
    /// are invisible to the velocity pass.
    fn value_of(self, sample: &Sample) -> Option<f64> {
        match self {
            Self::Position => Some(sample.value),
            Self::Velocity => sample.velocity,
        }
    }
}

/// Geometry and color style for one segmented pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentStyle {
    pub stroke_width_px: f64,
    pub marker_half_size_px: f64,
    pub marker_corner_radius_px: f64,
    pub stroke: StrokeStyle,
    pub palette: SegmentPalette,
}

impl SegmentStyle {
    pub fn validate(self) -> GraphResult<Self> {
        if !self.stroke_width_px.is_finite() || self.stroke_width_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "segment stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_half_size_px.is_finite() || self.marker_half_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "segment marker half size must be finite and > 0".to_owned(),
            ));
        }
        if !self.marker_corner_radius_px.is_finite() || self.marker_corner_radius_px < 0.0 {
            return Err(GraphError::InvalidData(
                "segment marker corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        self.palette.validate()?;
        Ok(self)
    }
}

/// Projects the buffer through a mapping into touch-state-segmented strokes.
///
/// A stroke runs while the touch flag is constant. When the flag flips, the
/// current stroke closes *at* the flipping sample (the boundary point belongs
/// to both strokes), a boundary marker filled with the closing stroke's color
/// is emitted, and a new stroke starts at the same point. A trailing marker
/// at the last point is always emitted, state change or not.
///
/// Pure function of its inputs; rebuilding from unchanged state yields an
/// identical command list.
pub fn project_segmented(
    buffer: &SampleBuffer,
    mapping: ChannelMapping,
    channel: SampleChannel,
    style: SegmentStyle,
) -> GraphResult<(Vec<PolylinePrimitive>, Vec<MarkerPrimitive>)> {
    let style = style.validate()?;

    let mut polylines = Vec::new();
    let mut markers = Vec::new();
    let mut points: Vec<PlotPoint> = Vec::new();
    let mut stroke_touching = false;

    for sample in buffer.iter() {
        let Some(value) = channel.value_of(sample) else {
            continue;
        };
        let (x, y) = mapping.map(sample.time, value);
        let point = PlotPoint::new(x, y);

        if points.is_empty() {
            stroke_touching = sample.touching;
            points.push(point);
            continue;
        }

        points.push(point);
        if sample.touching != stroke_touching {
            let color = style.palette.color_for(stroke_touching);
            polylines.push(close_stroke(std::mem::take(&mut points), color, style));
            markers.push(marker_at(point, color, style));
            points.push(point);
            stroke_touching = sample.touching;
        }
    }

    if let Some(&last) = points.last() {
        let color = style.palette.color_for(stroke_touching);
        polylines.push(close_stroke(points, color, style));
        markers.push(marker_at(last, color, style));
    }

    Ok((polylines, markers))
}

fn close_stroke(points: Vec<PlotPoint>, color: Color, style: SegmentStyle) -> PolylinePrimitive {
    PolylinePrimitive {
        points,
        stroke_width_px: style.stroke_width_px,
        color,
        style: style.stroke,
    }
}

fn marker_at(point: PlotPoint, color: Color, style: SegmentStyle) -> MarkerPrimitive {
    MarkerPrimitive {
        x: point.x,
        y: point.y,
        half_size_px: style.marker_half_size_px,
        corner_radius_px: style.marker_corner_radius_px,
        color,
    }
}
