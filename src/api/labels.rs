//! Axis label text formatting.
//!
//! Label *values* come verbatim from the planner's snapped range or the
//! smoothed band; only the textual rounding lives here.

/// Band endpoint labels: always one decimal place (`0.0`, `1.0`, `-0.3`).
pub(super) fn format_axis_value(value: f64) -> String {
    format!("{value:.1}")
}

/// Tick labels: one decimal place, dropping the decimal when it rounds away
/// (`0.5`, but `2` rather than `2.0`).
pub(super) fn format_tick_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
