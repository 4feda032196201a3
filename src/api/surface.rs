use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::mapping::{position_mapping, velocity_mapping};
use crate::core::range::{RangeSmoothingTuning, SmoothedRange};
use crate::core::sample::{DEFAULT_CAPACITY, OverflowPolicy, SampleBuffer};
use crate::core::ticks::{AxisRangeMode, AxisTicks};
use crate::core::types::{Margins, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::render::{
    RenderFrame, Renderer, SampleChannel, SegmentPalette, SegmentStyle, StrokeStyle,
    project_segmented,
};

use super::scene;
use super::snapshot::SurfaceSnapshot;
use super::style::SurfaceStyle;

/// Vertical-axis mode of the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SurfaceMode {
    /// Fixed unit value axis; only the position channel is drawn.
    #[default]
    Position,
    /// Auto-scaled value axis following the smoothed velocity band; the
    /// velocity channel is drawn dashed underneath the position channel.
    Velocity,
}

/// Configuration for a [`GraphSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSurfaceConfig {
    pub capacity: usize,
    pub overflow: OverflowPolicy,
    pub margins: Margins,
    pub axis_range_mode: AxisRangeMode,
    pub smoothing: RangeSmoothingTuning,
    /// Emit tick gridlines and tick labels in addition to the axis pass.
    pub show_grid: bool,
    pub style: SurfaceStyle,
}

impl Default for GraphSurfaceConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowPolicy::default(),
            margins: Margins::default(),
            axis_range_mode: AxisRangeMode::default(),
            smoothing: RangeSmoothingTuning::default(),
            show_grid: false,
            style: SurfaceStyle::default(),
        }
    }
}

impl GraphSurfaceConfig {
    pub fn validate(self) -> GraphResult<Self> {
        if self.capacity == 0 {
            return Err(GraphError::InvalidData(
                "surface capacity must be >= 1".to_owned(),
            ));
        }
        self.margins.validate()?;
        self.smoothing.validate()?;
        self.style.validate()?;
        Ok(self)
    }
}

/// Orchestration facade consumed by host overlays.
///
/// Owns the sample buffer, the smoothed range trackers and the per-axis tick
/// state, and assembles one [`RenderFrame`] per paint request. The host
/// pushes samples on every animation tick and executes the returned draw
/// commands against its canvas.
pub struct GraphSurface {
    config: GraphSurfaceConfig,
    buffer: SampleBuffer,
    position_band: SmoothedRange,
    velocity_band: SmoothedRange,
    ticks_x: AxisTicks,
    ticks_y: AxisTicks,
    mode: SurfaceMode,
}

impl GraphSurface {
    pub fn new(config: GraphSurfaceConfig) -> GraphResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            buffer: SampleBuffer::new(config.capacity, config.overflow)?,
            position_band: SmoothedRange::new(config.smoothing)?,
            velocity_band: SmoothedRange::new(config.smoothing)?,
            ticks_x: AxisTicks::new(),
            ticks_y: AxisTicks::new(),
            mode: SurfaceMode::Position,
        })
    }

    /// Clears all state and restarts the session in position mode.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.position_band.reset();
        self.velocity_band.reset();
        self.ticks_x = AxisTicks::new();
        self.ticks_y = AxisTicks::new();
        self.mode = SurfaceMode::Position;
        debug!("surface reset");
    }

    /// Clears all state and restarts the session in velocity mode.
    ///
    /// The velocity band is pre-widened one band-span below the floor so the
    /// first frames show a symmetric range around zero instead of snapping.
    pub fn reset_velocity_mode(&mut self) -> GraphResult<()> {
        self.reset();
        self.mode = SurfaceMode::Velocity;
        let tuning = self.config.smoothing;
        self.velocity_band
            .seed(tuning.floor - (tuning.ceiling - tuning.floor), tuning.ceiling)?;
        debug!("surface reset into velocity mode");
        Ok(())
    }

    /// Appends one position sample stamped "now".
    pub fn add_sample(&mut self, value: f64) -> GraphResult<()> {
        self.buffer.push(value, None)?;
        trace!(count = self.buffer.len(), "append sample");
        Ok(())
    }

    /// Appends one position + velocity sample stamped "now".
    pub fn add_sample_with_velocity(&mut self, value: f64, velocity: f64) -> GraphResult<()> {
        self.buffer.push(value, Some(velocity))?;
        trace!(count = self.buffer.len(), "append sample with velocity");
        Ok(())
    }

    /// Appends one sample with an explicit timestamp, for trace replay.
    pub fn add_sample_at(
        &mut self,
        time: f64,
        value: f64,
        velocity: Option<f64>,
    ) -> GraphResult<()> {
        self.buffer.push_at(time, value, velocity)?;
        trace!(count = self.buffer.len(), time, "append replayed sample");
        Ok(())
    }

    /// Sets the touch flag applied to future samples.
    pub fn set_touch_state(&mut self, touching: bool) {
        self.buffer.set_touch_state(touching);
        trace!(touching, "touch state changed");
    }

    /// Configures the sliding window; `None` shows the full history.
    pub fn set_time_window(&mut self, window_secs: Option<f64>) -> GraphResult<()> {
        self.buffer.set_time_window(window_secs)
    }

    #[must_use]
    pub fn mode(&self) -> SurfaceMode {
        self.mode
    }

    #[must_use]
    pub fn config(&self) -> &GraphSurfaceConfig {
        &self.config
    }

    #[must_use]
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Assembles the draw-command frame for the current state.
    ///
    /// An empty buffer yields an empty frame, not an error; live producers
    /// must never see a render failure for ordinary streaming states. Tick
    /// and band smoothing state advance one step per call and are safe to
    /// recompute redundantly, so back-to-back renders of unchanged state
    /// produce equal frames.
    pub fn render(&mut self, viewport: Viewport) -> GraphResult<RenderFrame> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let mut frame = RenderFrame::new(viewport);
        if self.buffer.is_empty() {
            trace!("render skipped: empty buffer");
            return Ok(frame);
        }

        let margins = self.config.margins;
        let style = self.config.style;
        let (plot_width, plot_height) = margins.plot_area(viewport)?;

        if self.mode == SurfaceMode::Velocity {
            if let Some((raw_min, raw_max)) = self.buffer.velocity_extrema() {
                self.velocity_band.update(raw_min, raw_max);
            }
        }

        self.plan_ticks(plot_width, plot_height);

        if self.config.show_grid {
            scene::push_grid(&mut frame, &self.ticks_x, &self.ticks_y, margins, style)?;
        }

        let band = match self.mode {
            SurfaceMode::Position => self.position_band.bounds(),
            SurfaceMode::Velocity => self.velocity_band.bounds(),
        };
        let caption = match self.mode {
            SurfaceMode::Position => "position",
            SurfaceMode::Velocity => "velocity",
        };
        scene::push_axis(&mut frame, band, caption, margins, style)?;

        let max_time = self.buffer.max_time().unwrap_or(0.0);
        let window = self.buffer.time_window();

        // Velocity pass first so it ends up underneath the position pass.
        if self.mode == SurfaceMode::Velocity {
            let mapping = velocity_mapping(
                max_time,
                viewport,
                margins,
                window,
                self.velocity_band.bounds(),
            )?;
            let (polylines, markers) = project_segmented(
                &self.buffer,
                mapping,
                SampleChannel::Velocity,
                self.segment_style(
                    StrokeStyle::Dashed {
                        dash_px: style.dash_px,
                        gap_px: style.dash_gap_px,
                    },
                    style.velocity_palette,
                ),
            )?;
            frame.polylines.extend(polylines);
            frame.markers.extend(markers);
        }

        let mapping = position_mapping(max_time, viewport, margins, window)?;
        let (polylines, markers) = project_segmented(
            &self.buffer,
            mapping,
            SampleChannel::Position,
            self.segment_style(StrokeStyle::Solid, style.position_palette),
        )?;
        frame.polylines.extend(polylines);
        frame.markers.extend(markers);

        debug!(
            polylines = frame.polylines.len(),
            markers = frame.markers.len(),
            texts = frame.texts.len(),
            windowed = mapping.windowed,
            "render frame"
        );
        Ok(frame)
    }

    /// Renders and immediately hands the frame to a backend.
    pub fn render_with<R: Renderer>(
        &mut self,
        renderer: &mut R,
        viewport: Viewport,
    ) -> GraphResult<RenderFrame> {
        let frame = self.render(viewport)?;
        renderer.render(&frame)?;
        Ok(frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> SurfaceSnapshot {
        SurfaceSnapshot {
            mode: self.mode,
            sample_count: self.buffer.len(),
            capacity: self.buffer.capacity(),
            time_window: self.buffer.time_window(),
            touch_state: self.buffer.touch_state(),
            max_time: self.buffer.max_time(),
            position_band: self.position_band.bounds(),
            velocity_band: self.velocity_band.bounds(),
            tick_spacing_x: self.ticks_x.spacing(),
            tick_spacing_y: self.ticks_y.spacing(),
            samples: self.buffer.iter().copied().collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn plan_ticks(&mut self, plot_width: f64, plot_height: f64) {
        match self.config.axis_range_mode {
            AxisRangeMode::FixedUnit => {
                self.ticks_x.recompute(plot_width, 0.0, 1.0);
                self.ticks_y.recompute(plot_height, 0.0, 1.0);
            }
            AxisRangeMode::Computed => {
                let (time_min, time_max) = self.visible_time_range();
                self.ticks_x.recompute(plot_width, time_min, time_max);

                let value_extrema = match self.mode {
                    SurfaceMode::Position => self.buffer.value_extrema(),
                    SurfaceMode::Velocity => self.buffer.velocity_extrema(),
                };
                if let Some((value_min, value_max)) = value_extrema {
                    self.ticks_y.recompute(plot_height, value_min, value_max);
                }
            }
        }
    }

    /// Raw time range the horizontal axis describes: the windowed tail when
    /// the sliding window clips, the full buffered range otherwise.
    fn visible_time_range(&self) -> (f64, f64) {
        let first = self.buffer.first().map_or(0.0, |sample| sample.time);
        let last = self.buffer.max_time().unwrap_or(0.0);
        match self.buffer.time_window() {
            Some(window) if window < last => (last - window, last),
            _ => (first, last),
        }
    }

    fn segment_style(&self, stroke: StrokeStyle, palette: SegmentPalette) -> SegmentStyle {
        let style = self.config.style;
        SegmentStyle {
            stroke_width_px: style.stroke_width_px,
            marker_half_size_px: style.marker_half_size_px,
            marker_corner_radius_px: style.marker_corner_radius_px,
            stroke,
            palette,
        }
    }
}
