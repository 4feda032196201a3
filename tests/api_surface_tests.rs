use approx::assert_relative_eq;
use motionscope::GraphError;
use motionscope::api::{GraphSurface, GraphSurfaceConfig, SurfaceMode, SurfaceSnapshot};
use motionscope::core::{AxisRangeMode, OverflowPolicy, Viewport};
use motionscope::render::{NullRenderer, Renderer, StrokeStyle, TextHAlign};

fn viewport() -> Viewport {
    Viewport::new(1000, 500)
}

fn surface() -> GraphSurface {
    GraphSurface::new(GraphSurfaceConfig::default()).expect("surface")
}

#[test]
fn empty_buffer_renders_an_empty_frame() {
    let mut surface = surface();
    let frame = surface.render(viewport()).expect("render");
    assert!(frame.is_empty());
}

#[test]
fn reset_then_render_is_an_empty_frame_again() {
    let mut surface = surface();
    surface.add_sample_at(0.0, 0.2, None).expect("append");
    surface.add_sample_at(1.0, 0.4, None).expect("append");
    assert!(!surface.render(viewport()).expect("render").is_empty());

    surface.reset();
    assert!(surface.render(viewport()).expect("render").is_empty());
}

#[test]
fn invalid_viewport_is_rejected() {
    let mut surface = surface();
    assert!(matches!(
        surface.render(Viewport::new(0, 500)),
        Err(GraphError::InvalidViewport { .. })
    ));
}

#[test]
fn back_to_back_renders_are_identical() {
    let mut surface = surface();
    for i in 0..6 {
        surface
            .add_sample_at(i as f64 * 0.2, i as f64 * 0.15, None)
            .expect("append");
    }

    let first = surface.render(viewport()).expect("render");
    let second = surface.render(viewport()).expect("render");
    assert_eq!(first, second);
}

#[test]
fn touch_flips_split_position_strokes() {
    let mut surface = surface();
    surface.add_sample_at(0.0, 0.1, None).expect("append");
    surface.add_sample_at(1.0, 0.2, None).expect("append");
    surface.set_touch_state(true);
    surface.add_sample_at(2.0, 0.3, None).expect("append");
    surface.add_sample_at(3.0, 0.4, None).expect("append");

    let frame = surface.render(viewport()).expect("render");
    assert_eq!(frame.polylines.len(), 2);
    assert_eq!(frame.markers.len(), 2);
    // Axis pass: vertical axis + zero line, three labels.
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.texts.len(), 3);
}

#[test]
fn position_mode_labels_the_fixed_unit_band() {
    let mut surface = surface();
    surface.add_sample_at(0.0, 0.5, None).expect("append");
    surface.add_sample_at(1.0, 0.6, None).expect("append");

    let frame = surface.render(viewport()).expect("render");
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["1.0", "0.0", "position"]);
    for text in &frame.texts {
        assert_eq!(text.h_align, TextHAlign::Right);
    }
}

#[test]
fn velocity_mode_draws_the_dashed_pass_underneath() {
    let mut surface = surface();
    surface.reset_velocity_mode().expect("velocity mode");
    for i in 0..5 {
        surface
            .add_sample_at(i as f64 * 0.1, i as f64 * 0.2, Some(i as f64 * 0.5))
            .expect("append");
    }

    let frame = surface.render(viewport()).expect("render");
    assert_eq!(surface.mode(), SurfaceMode::Velocity);
    assert_eq!(frame.polylines.len(), 2);
    assert!(matches!(
        frame.polylines[0].style,
        StrokeStyle::Dashed { .. }
    ));
    assert_eq!(frame.polylines[1].style, StrokeStyle::Solid);
    assert_eq!(frame.markers.len(), 2);

    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"velocity"));
}

#[test]
fn velocity_band_decays_toward_the_observed_extrema() {
    let mut surface = surface();
    surface.reset_velocity_mode().expect("velocity mode");
    surface.add_sample_at(0.0, 0.0, Some(0.0)).expect("append");
    surface.add_sample_at(1.0, 0.5, Some(3.0)).expect("append");

    surface.render(viewport()).expect("render");
    let snapshot = surface.snapshot();
    // Seeded [-1, 1]; one smoothing step toward raw extrema (0, 3).
    assert_relative_eq!(snapshot.velocity_band.0, -0.9, max_relative = 1e-12);
    assert_relative_eq!(snapshot.velocity_band.1, 1.2, max_relative = 1e-12);
}

#[test]
fn reset_returns_the_surface_to_position_mode() {
    let mut surface = surface();
    surface.reset_velocity_mode().expect("velocity mode");
    surface.reset();
    assert_eq!(surface.mode(), SurfaceMode::Position);
}

#[test]
fn capacity_errors_surface_through_add_sample() {
    let config = GraphSurfaceConfig {
        capacity: 2,
        overflow: OverflowPolicy::Reject,
        ..GraphSurfaceConfig::default()
    };
    let mut surface = GraphSurface::new(config).expect("surface");

    surface.add_sample_at(0.0, 0.1, None).expect("append");
    surface.add_sample_at(1.0, 0.2, None).expect("append");
    assert!(matches!(
        surface.add_sample_at(2.0, 0.3, None),
        Err(GraphError::CapacityExceeded { capacity: 2 })
    ));
}

#[test]
fn grid_pass_adds_tick_lines_and_labels() {
    let config = GraphSurfaceConfig {
        show_grid: true,
        ..GraphSurfaceConfig::default()
    };
    let mut surface = GraphSurface::new(config).expect("surface");
    surface.add_sample_at(0.0, 0.2, None).expect("append");
    surface.add_sample_at(1.0, 0.8, None).expect("append");

    let frame = surface.render(viewport()).expect("render");
    // Beyond the two axis lines and three axis labels.
    assert!(frame.lines.len() > 2);
    assert!(frame.texts.len() > 3);
}

#[test]
fn computed_range_mode_snaps_ticks_to_the_data() {
    let config = GraphSurfaceConfig {
        axis_range_mode: AxisRangeMode::Computed,
        show_grid: true,
        ..GraphSurfaceConfig::default()
    };
    let mut surface = GraphSurface::new(config).expect("surface");
    surface.set_time_window(None).expect("window");
    for i in 0..=10 {
        surface
            .add_sample_at(i as f64, i as f64 * 10.0, None)
            .expect("append");
    }

    let frame = surface.render(viewport()).expect("render");
    assert!(!frame.is_empty());
    let snapshot = surface.snapshot();
    assert!(snapshot.tick_spacing_x > 0.0);
    assert!(snapshot.tick_spacing_y > 0.0);
}

#[test]
fn render_with_drives_a_backend() {
    let mut surface = surface();
    surface.add_sample_at(0.0, 0.1, None).expect("append");
    surface.add_sample_at(1.0, 0.9, None).expect("append");

    let mut renderer = NullRenderer::default();
    let frame = surface
        .render_with(&mut renderer, viewport())
        .expect("render");

    assert_eq!(renderer.last_polyline_count, frame.polylines.len());
    assert_eq!(renderer.last_marker_count, frame.markers.len());
    assert_eq!(renderer.last_text_count, frame.texts.len());
}

#[test]
fn frames_validate_under_the_null_renderer() {
    let mut surface = surface();
    surface.reset_velocity_mode().expect("velocity mode");
    for i in 0..8 {
        if i == 4 {
            surface.set_touch_state(true);
        }
        surface
            .add_sample_at(i as f64 * 0.25, i as f64 * 0.1, Some(1.0 - i as f64 * 0.3))
            .expect("append");
    }

    let frame = surface.render(viewport()).expect("render");
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("frame should validate");
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut surface = surface();
    surface.set_touch_state(true);
    surface.add_sample_at(0.0, 0.3, Some(0.7)).expect("append");

    let snapshot = surface.snapshot();
    let json = surface.snapshot_json_pretty().expect("json");
    let recovered: SurfaceSnapshot = serde_json::from_str(&json).expect("parse");
    assert_eq!(recovered, snapshot);
}
