//! End-to-end flow through input routing, picking, and the canvas, with
//! the orbit controls stubbed behind their trait.

use plane_painter::camera::{Camera, Viewport};
use plane_painter::canvas::{Canvas, BACKGROUND_COLOR, BRUSH_COLOR};
use plane_painter::input::{InputState, PointerResponse};
use plane_painter::orbit::{OrbitControl, OrbitControls};
use plane_painter::picking::canvas_point;
use plane_painter::scene::Scene;

const VIEWPORT: Viewport = Viewport { width: 800, height: 600 };

fn pixel(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * canvas.width() + x) * 4) as usize;
    let px = &canvas.pixels()[idx..idx + 4];
    [px[0], px[1], px[2], px[3]]
}

/// Route one pointer event the way the application does.
fn route(
    response: PointerResponse,
    pos: (f32, f32),
    delta: (f32, f32),
    camera: &Camera,
    scene: &Scene,
    canvas: &mut Canvas,
    orbit: &mut dyn OrbitControl,
) {
    match response {
        PointerResponse::Paint => {
            let picked = canvas_point(
                pos.0,
                pos.1,
                VIEWPORT,
                camera,
                &scene.plane,
                canvas.width(),
                canvas.height(),
            );
            if let Some((x, y)) = picked {
                canvas.stamp_dot(x, y);
            }
        }
        PointerResponse::Orbit => orbit.apply_gesture(delta.0, delta.1),
        PointerResponse::Ignored => {}
    }
}

/// Test stub standing in for the concrete orbit library binding.
#[derive(Default)]
struct RecordingOrbit {
    enabled: bool,
    gestures: Vec<(f32, f32)>,
}

impl OrbitControl for RecordingOrbit {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply_gesture(&mut self, dx: f32, dy: f32) {
        if self.enabled {
            self.gestures.push((dx, dy));
        }
    }

    fn update(&mut self, _camera: &mut Camera) {}
}

#[test]
fn test_click_at_center_paints_center_disk() {
    let camera = Camera::new();
    let scene = Scene::new();
    let mut canvas = Canvas::default();
    let mut orbit = RecordingOrbit::default();
    let mut input = InputState::new();

    canvas.take_dirty();

    let response = input.pointer_down();
    route(
        response,
        (400.0, 300.0),
        (0.0, 0.0),
        &camera,
        &scene,
        &mut canvas,
        &mut orbit,
    );

    assert_eq!(pixel(&canvas, 512, 512), BRUSH_COLOR);
    assert_eq!(pixel(&canvas, 512, 509), BRUSH_COLOR);
    assert_eq!(pixel(&canvas, 520, 520), BACKGROUND_COLOR);
    // The mutation raised the texture-dirty flag for the next frame.
    assert!(canvas.take_dirty());
}

#[test]
fn test_drag_paints_once_per_move_event() {
    let camera = Camera::new();
    let scene = Scene::new();
    let mut canvas = Canvas::default();
    let mut orbit = RecordingOrbit::default();
    let mut input = InputState::new();

    let down = input.pointer_down();
    route(down, (400.0, 300.0), (0.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);

    let moved = input.pointer_moved();
    route(moved, (420.0, 300.0), (20.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);
    input.pointer_up();

    // Both stamps landed; the second sits right of center.
    assert_eq!(pixel(&canvas, 512, 512), BRUSH_COLOR);
    let second = canvas_point(420.0, 300.0, VIEWPORT, &camera, &scene.plane, 1024, 1024).unwrap();
    assert!(second.0 > 512);
    assert_eq!(pixel(&canvas, second.0, second.1), BRUSH_COLOR);

    // After release, moves no longer paint.
    let after = input.pointer_moved();
    assert_eq!(after, PointerResponse::Ignored);
}

#[test]
fn test_miss_leaves_canvas_unchanged() {
    let camera = Camera::new();
    let scene = Scene::new();
    let mut canvas = Canvas::default();
    let mut orbit = RecordingOrbit::default();
    let mut input = InputState::new();

    canvas.take_dirty();
    let snapshot = canvas.pixels().to_vec();

    // Window corner: the ray passes outside the plane.
    let down = input.pointer_down();
    route(down, (0.0, 0.0), (0.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);

    assert_eq!(canvas.pixels(), snapshot.as_slice());
    assert!(!canvas.take_dirty());
}

#[test]
fn test_orbit_mode_never_touches_the_canvas() {
    let camera = Camera::new();
    let scene = Scene::new();
    let mut canvas = Canvas::default();
    let mut orbit = RecordingOrbit::default();
    let mut input = InputState::new();

    canvas.take_dirty();
    let snapshot = canvas.pixels().to_vec();

    input.set_modifier(true);
    orbit.set_enabled(input.modifier_held());

    let down = input.pointer_down();
    route(down, (400.0, 300.0), (0.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);
    for step in 1..=5 {
        let moved = input.pointer_moved();
        let pos = (400.0 + step as f32 * 10.0, 300.0);
        route(moved, pos, (10.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);
    }
    input.pointer_up();

    // The buffer is untouched; the gestures went to the orbit controls.
    assert_eq!(canvas.pixels(), snapshot.as_slice());
    assert!(!canvas.take_dirty());
    assert_eq!(orbit.gestures.len(), 5);
    assert!(!input.is_dragging());
}

#[test]
fn test_orbit_drag_moves_real_camera() {
    let mut camera = Camera::new();
    let scene = Scene::new();
    let mut canvas = Canvas::default();
    let mut orbit = OrbitControls::new();
    let mut input = InputState::new();

    canvas.take_dirty();
    let start_position = camera.position;

    input.set_modifier(true);
    orbit.set_enabled(input.modifier_held());

    let down = input.pointer_down();
    route(down, (400.0, 300.0), (0.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);
    let moved = input.pointer_moved();
    route(moved, (460.0, 300.0), (60.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);

    // Frame tick: damped motion reaches the camera.
    orbit.update(&mut camera);

    assert!((camera.position - start_position).length() > 1e-4);
    assert!(!canvas.take_dirty());
}

#[test]
fn test_mode_switch_mid_drag_stops_painting() {
    let camera = Camera::new();
    let scene = Scene::new();
    let mut canvas = Canvas::default();
    let mut orbit = RecordingOrbit::default();
    let mut input = InputState::new();

    let down = input.pointer_down();
    route(down, (400.0, 300.0), (0.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);
    canvas.take_dirty();
    let snapshot = canvas.pixels().to_vec();

    // Space pressed while the button is still down.
    input.set_modifier(true);
    assert!(!input.is_dragging());

    let moved = input.pointer_moved();
    route(moved, (420.0, 300.0), (20.0, 0.0), &camera, &scene, &mut canvas, &mut orbit);

    assert_eq!(canvas.pixels(), snapshot.as_slice());
}
