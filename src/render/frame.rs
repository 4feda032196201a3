use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::render::{LinePrimitive, MarkerPrimitive, PolylinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one draw pass.
///
/// Draw order is field order (lines, then polylines, then markers, then
/// texts) and index order within each vector. A frame built twice from the
/// same surface state compares equal, which the test suite relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            polylines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.polylines.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
    }
}
