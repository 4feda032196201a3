mod frame;
mod null_renderer;
mod primitives;
mod segmented;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, MarkerPrimitive, PlotPoint, PolylinePrimitive, StrokeStyle, TextHAlign,
    TextPrimitive,
};
pub use segmented::{SampleChannel, SegmentPalette, SegmentStyle, project_segmented};

use crate::error::GraphResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic [`RenderFrame`], so
/// canvas code stays isolated from buffering, scaling and segmentation logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}
