use motionscope::core::{ChannelMapping, OverflowPolicy, SampleBuffer};
use motionscope::render::{
    Color, SampleChannel, SegmentPalette, SegmentStyle, StrokeStyle, project_segmented,
};

const TOUCHED: Color = Color::rgb(0.0, 0.0, 1.0);
const RELEASED: Color = Color::rgb(1.0, 0.5, 0.0);

fn identity_mapping() -> ChannelMapping {
    ChannelMapping {
        scale_x: 1.0,
        offset_x: 0.0,
        scale_y: 1.0,
        offset_y: 0.0,
        windowed: false,
    }
}

fn style(stroke: StrokeStyle) -> SegmentStyle {
    SegmentStyle {
        stroke_width_px: 4.0,
        marker_half_size_px: 10.0,
        marker_corner_radius_px: 20.0,
        stroke,
        palette: SegmentPalette {
            touched: TOUCHED,
            released: RELEASED,
        },
    }
}

fn buffer_with_touch_flags(flags: &[bool]) -> SampleBuffer {
    let mut buffer = SampleBuffer::new(64, OverflowPolicy::Reject).expect("buffer");
    for (i, touching) in flags.iter().enumerate() {
        buffer.set_touch_state(*touching);
        buffer
            .push_at(i as f64, i as f64 * 0.1, Some(i as f64 * 0.2))
            .expect("append");
    }
    buffer
}

#[test]
fn one_touch_flip_splits_the_stroke_at_the_boundary() {
    let buffer = buffer_with_touch_flags(&[false, false, true, true]);
    let (polylines, markers) =
        project_segmented(&buffer, identity_mapping(), SampleChannel::Position, style(StrokeStyle::Solid))
            .expect("project");

    assert_eq!(polylines.len(), 2);
    assert_eq!(markers.len(), 2);

    // The boundary sample belongs to both strokes.
    assert_eq!(polylines[0].points.len(), 3);
    assert_eq!(polylines[1].points.len(), 2);
    assert_eq!(polylines[0].points[2], polylines[1].points[0]);

    // Closing stroke and its boundary marker keep the pre-flip color; the
    // trailing marker wears the final stroke's color.
    assert_eq!(polylines[0].color, RELEASED);
    assert_eq!(polylines[1].color, TOUCHED);
    assert_eq!(markers[0].color, RELEASED);
    assert_eq!(markers[1].color, TOUCHED);

    // Markers sit on the boundary point and the last point.
    assert_eq!((markers[0].x, markers[0].y), (2.0, 2.0 * 0.1));
    assert_eq!((markers[1].x, markers[1].y), (3.0, 3.0 * 0.1));
}

#[test]
fn constant_touch_state_yields_one_stroke_and_a_trailing_marker() {
    let buffer = buffer_with_touch_flags(&[true, true, true]);
    let (polylines, markers) =
        project_segmented(&buffer, identity_mapping(), SampleChannel::Position, style(StrokeStyle::Solid))
            .expect("project");

    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].points.len(), 3);
    assert_eq!(polylines[0].color, TOUCHED);
    assert_eq!(markers.len(), 1);
    assert_eq!((markers[0].x, markers[0].y), (2.0, 2.0 * 0.1));
}

#[test]
fn a_single_sample_still_emits_its_trailing_marker() {
    let buffer = buffer_with_touch_flags(&[false]);
    let (polylines, markers) =
        project_segmented(&buffer, identity_mapping(), SampleChannel::Position, style(StrokeStyle::Solid))
            .expect("project");

    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].points.len(), 1);
    assert_eq!(markers.len(), 1);
}

#[test]
fn empty_buffer_produces_nothing() {
    let buffer = SampleBuffer::new(8, OverflowPolicy::Reject).expect("buffer");
    let (polylines, markers) =
        project_segmented(&buffer, identity_mapping(), SampleChannel::Position, style(StrokeStyle::Solid))
            .expect("project");

    assert!(polylines.is_empty());
    assert!(markers.is_empty());
}

#[test]
fn velocity_pass_skips_samples_without_a_velocity() {
    let mut buffer = SampleBuffer::new(8, OverflowPolicy::Reject).expect("buffer");
    buffer.push_at(0.0, 0.1, None).expect("append");
    buffer.push_at(1.0, 0.2, Some(2.0)).expect("append");
    buffer.push_at(2.0, 0.3, Some(3.0)).expect("append");

    let (polylines, markers) = project_segmented(
        &buffer,
        identity_mapping(),
        SampleChannel::Velocity,
        style(StrokeStyle::Dashed {
            dash_px: 20.0,
            gap_px: 20.0,
        }),
    )
    .expect("project");

    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].points.len(), 2);
    assert_eq!(polylines[0].points[0].x, 1.0);
    assert_eq!(markers.len(), 1);
    assert!(matches!(polylines[0].style, StrokeStyle::Dashed { .. }));
}

#[test]
fn dashed_style_carries_the_requested_pattern() {
    let buffer = buffer_with_touch_flags(&[false, true]);
    let (polylines, _) = project_segmented(
        &buffer,
        identity_mapping(),
        SampleChannel::Position,
        style(StrokeStyle::Dashed {
            dash_px: 20.0,
            gap_px: 20.0,
        }),
    )
    .expect("project");

    for polyline in &polylines {
        assert_eq!(
            polyline.style,
            StrokeStyle::Dashed {
                dash_px: 20.0,
                gap_px: 20.0
            }
        );
    }
}

#[test]
fn invalid_style_is_rejected() {
    let buffer = buffer_with_touch_flags(&[false]);
    let mut bad = style(StrokeStyle::Solid);
    bad.stroke_width_px = 0.0;

    assert!(
        project_segmented(&buffer, identity_mapping(), SampleChannel::Position, bad).is_err()
    );
}
