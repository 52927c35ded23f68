//! Interaction controller behavior: capture, rejection, quantization, zoom.

use millview_canvas::{CoordinateMapper, InteractionController};
use millview_core::{
    EngineConfig, EngineEvent, ScreenPoint, SimulationCursor, ViewState, WorkpieceBounds,
};

const ORIGIN: ScreenPoint = ScreenPoint { x: 400.0, y: 300.0 };

fn controller() -> InteractionController {
    InteractionController::new(EngineConfig::default(), WorkpieceBounds::default())
}

fn click_at_world(
    ctl: &InteractionController,
    world_x: f64,
    world_y: f64,
    view: &ViewState,
) -> Option<EngineEvent> {
    let mapper = CoordinateMapper::new(&EngineConfig::default());
    let screen = mapper.to_screen(world_x, world_y, view, ORIGIN);
    ctl.on_pointer_down(screen, ORIGIN, view, &SimulationCursor::inactive())
        .unwrap()
}

#[test]
fn test_valid_click_captures_point() {
    let ctl = controller();
    let view = ViewState::default();
    let event = click_at_world(&ctl, 50.0, 25.0, &view);
    assert_eq!(
        event,
        Some(EngineEvent::PointCaptured {
            x: 50.0,
            y: 25.0,
            z: 0.0
        })
    );
}

#[test]
fn test_click_quantizes_to_tenths() {
    let ctl = controller();
    let view = ViewState::default();
    let event = click_at_world(&ctl, 12.34567, 8.91, &view);
    assert_eq!(
        event,
        Some(EngineEvent::PointCaptured {
            x: 12.3,
            y: 8.9,
            z: 0.0
        })
    );
}

#[test]
fn test_click_outside_bounds_rejected() {
    let ctl = controller();
    let view = ViewState::default();

    assert_eq!(click_at_world(&ctl, -1.0, 5.0, &view), None);
    assert_eq!(click_at_world(&ctl, 301.0, 5.0, &view), None);
    assert_eq!(click_at_world(&ctl, 5.0, -0.5, &view), None);
    assert_eq!(click_at_world(&ctl, 5.0, 200.5, &view), None);
}

#[test]
fn test_bounds_edges_are_inclusive() {
    let ctl = controller();
    let view = ViewState::default();

    assert!(click_at_world(&ctl, 0.0, 0.0, &view).is_some());
    assert!(click_at_world(&ctl, 300.0, 200.0, &view).is_some());
}

#[test]
fn test_capture_works_under_zoom_and_pan() {
    let config = EngineConfig::default();
    let ctl = controller();
    let mut view = ViewState::default();
    view.set_zoom(3.0, &config);
    view.pan_by(-120.0, 85.0);

    let event = click_at_world(&ctl, 123.44, 67.89, &view);
    assert_eq!(
        event,
        Some(EngineEvent::PointCaptured {
            x: 123.4,
            y: 67.9,
            z: 0.0
        })
    );
}

#[test]
fn test_custom_bounds_respected() {
    let ctl = InteractionController::new(EngineConfig::default(), WorkpieceBounds::new(50.0, 40.0));
    let view = ViewState::default();
    let mapper = CoordinateMapper::new(&EngineConfig::default());

    let inside = mapper.to_screen(49.0, 39.0, &view, ORIGIN);
    let outside = mapper.to_screen(51.0, 39.0, &view, ORIGIN);
    let cursor = SimulationCursor::inactive();

    assert!(ctl
        .on_pointer_down(inside, ORIGIN, &view, &cursor)
        .unwrap()
        .is_some());
    assert!(ctl
        .on_pointer_down(outside, ORIGIN, &view, &cursor)
        .unwrap()
        .is_none());
}

#[test]
fn test_repeated_wheel_up_clamps_at_max() {
    let config = EngineConfig::default();
    let ctl = controller();
    let mut view = ViewState::default();

    for _ in 0..50 {
        let EngineEvent::ZoomChanged { zoom } = ctl.on_wheel(-120.0, &view).unwrap() else {
            panic!("wheel must emit ZoomChanged");
        };
        assert!(zoom <= config.max_zoom);
        view.zoom = zoom;
    }
    assert_eq!(view.zoom, config.max_zoom);
}

#[test]
fn test_repeated_wheel_down_clamps_at_min() {
    let config = EngineConfig::default();
    let ctl = controller();
    let mut view = ViewState::default();

    for _ in 0..50 {
        let EngineEvent::ZoomChanged { zoom } = ctl.on_wheel(120.0, &view).unwrap() else {
            panic!("wheel must emit ZoomChanged");
        };
        assert!(zoom >= config.min_zoom);
        view.zoom = zoom;
    }
    assert_eq!(view.zoom, config.min_zoom);
}

#[test]
fn test_wheel_at_bound_still_emits() {
    let config = EngineConfig::default();
    let ctl = controller();
    let mut view = ViewState::default();
    view.zoom = config.max_zoom;

    // Pinned at the bound the event still fires so the host consumes the
    // scroll.
    let event = ctl.on_wheel(-120.0, &view).unwrap();
    assert_eq!(
        event,
        EngineEvent::ZoomChanged {
            zoom: config.max_zoom
        }
    );
}
