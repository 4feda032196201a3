use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel insets reserved around the plot area for axis lines and labels.
///
/// The wide left inset leaves room for right-aligned value labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top_px: f64,
    pub left_px: f64,
    pub bottom_px: f64,
    pub right_px: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top_px: 30.0,
            left_px: 200.0,
            bottom_px: 30.0,
            right_px: 30.0,
        }
    }
}

impl Margins {
    pub fn validate(self) -> GraphResult<Self> {
        for (name, value) in [
            ("top_px", self.top_px),
            ("left_px", self.left_px),
            ("bottom_px", self.bottom_px),
            ("right_px", self.right_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    /// Computes the inner plot rectangle size, rejecting degenerate layouts.
    pub fn plot_area(self, viewport: Viewport) -> GraphResult<(f64, f64)> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.validate()?;

        let width = f64::from(viewport.width) - self.left_px - self.right_px;
        let height = f64::from(viewport.height) - self.top_px - self.bottom_px;
        if width <= 0.0 || height <= 0.0 {
            return Err(GraphError::InvalidData(format!(
                "margins leave no plot area ({width} x {height})"
            )));
        }
        Ok((width, height))
    }
}
