//! Axis and grid scene building.
//!
//! These passes decide positions for lines and labels only; font metrics and
//! exact glyph placement belong to the drawing backend.

use crate::core::{AxisTicks, Margins};
use crate::error::GraphResult;
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::labels::{format_axis_value, format_tick_value};
use super::style::SurfaceStyle;

const GRID_STROKE_WIDTH_PX: f64 = 1.0;

/// Pushes tick gridlines and tick labels for both axes.
///
/// Gridlines are positioned by the tick's normalized fraction of the snapped
/// range, spanning the full plot rectangle.
pub(super) fn push_grid(
    frame: &mut RenderFrame,
    ticks_x: &AxisTicks,
    ticks_y: &AxisTicks,
    margins: Margins,
    style: SurfaceStyle,
) -> GraphResult<()> {
    let viewport = frame.viewport;
    let (plot_width, plot_height) = margins.plot_area(viewport)?;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    let (x_min, x_max) = ticks_x.snapped_range();
    let x_span = x_max - x_min;
    if x_span > 0.0 {
        for tick in ticks_x.tick_values() {
            let x = margins.left_px + plot_width * (tick - x_min) / x_span;
            frame.lines.push(LinePrimitive::new(
                x,
                margins.top_px,
                x,
                height - margins.bottom_px,
                GRID_STROKE_WIDTH_PX,
                style.grid_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_tick_value(tick),
                x,
                height - margins.bottom_px + style.text_gap_px + style.font_size_px,
                style.font_size_px,
                style.grid_color,
                TextHAlign::Right,
            ));
        }
    }

    let (y_min, y_max) = ticks_y.snapped_range();
    let y_span = y_max - y_min;
    if y_span > 0.0 {
        for tick in ticks_y.tick_values() {
            let y = margins.top_px + plot_height * (1.0 - (tick - y_min) / y_span);
            frame.lines.push(LinePrimitive::new(
                margins.left_px,
                y,
                width - margins.right_px,
                y,
                GRID_STROKE_WIDTH_PX,
                style.grid_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_tick_value(tick),
                margins.left_px - style.text_gap_px,
                y + style.text_gap_px,
                style.font_size_px,
                style.grid_color,
                TextHAlign::Right,
            ));
        }
    }

    Ok(())
}

/// Pushes the value axis, the zero line positioned inside the current band,
/// the band endpoint labels and the channel caption.
pub(super) fn push_axis(
    frame: &mut RenderFrame,
    band: (f64, f64),
    caption: &str,
    margins: Margins,
    style: SurfaceStyle,
) -> GraphResult<()> {
    let viewport = frame.viewport;
    let (_, plot_height) = margins.plot_area(viewport)?;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let (band_min, band_max) = band;
    let band_span = band_max - band_min;

    frame.lines.push(LinePrimitive::new(
        margins.left_px,
        margins.top_px,
        margins.left_px,
        height - margins.bottom_px,
        style.stroke_width_px,
        style.axis_color,
    ));

    let zero_y = if band_span > 0.0 {
        height - margins.bottom_px - plot_height * (0.0 - band_min) / band_span
    } else {
        height - margins.bottom_px
    };
    frame.lines.push(LinePrimitive::new(
        margins.left_px,
        zero_y,
        width - margins.right_px,
        zero_y,
        style.stroke_width_px,
        style.axis_color,
    ));

    let label_x = margins.left_px - style.label_pad_px;
    frame.texts.push(TextPrimitive::new(
        format_axis_value(band_max),
        label_x,
        margins.top_px + 10.0,
        style.font_size_px,
        style.axis_color,
        TextHAlign::Right,
    ));
    frame.texts.push(TextPrimitive::new(
        format_axis_value(band_min),
        label_x,
        height - margins.bottom_px,
        style.font_size_px,
        style.axis_color,
        TextHAlign::Right,
    ));
    frame.texts.push(TextPrimitive::new(
        caption,
        label_x,
        margins.top_px + plot_height / 2.0,
        style.font_size_px,
        style.axis_color,
        TextHAlign::Right,
    ));

    Ok(())
}
