use crate::error::GraphResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer for tests and headless surface usage.
///
/// It still validates frame content, so invalid geometry is caught without a
/// real backend attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_polyline_count: usize,
    pub last_marker_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_polyline_count = frame.polylines.len();
        self.last_marker_count = frame.markers.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
