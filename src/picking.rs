use glam::Vec2;

use crate::camera::{Camera, Viewport};
use crate::math::PlaneSurface;

/// Map a screen pixel to a canvas pixel: screen → NDC → world ray → plane
/// intersection → parametric UV → raster coordinates. `None` when the ray
/// misses the plane or the viewport is degenerate; both are no-ops, not
/// errors.
pub fn canvas_point(
    screen_x: f32,
    screen_y: f32,
    viewport: Viewport,
    camera: &Camera,
    plane: &PlaneSurface,
    canvas_width: u32,
    canvas_height: u32,
) -> Option<(u32, u32)> {
    let ray = camera.screen_ray(screen_x, screen_y, viewport)?;
    let hit = plane.intersect(&ray)?;
    Some(uv_to_raster(hit.uv, canvas_width, canvas_height))
}

/// Scale surface parametric coordinates to raster coordinates. The vertical
/// axis flips: parameter v = 0 is the plane's bottom edge while raster row 0
/// is the top. Exact-edge hits clamp onto the last row/column.
pub fn uv_to_raster(uv: Vec2, width: u32, height: u32) -> (u32, u32) {
    let x = (uv.x * width as f32)
        .floor()
        .clamp(0.0, (width - 1) as f32) as u32;
    let y = ((1.0 - uv.y) * height as f32)
        .floor()
        .clamp(0.0, (height - 1) as f32) as u32;
    (x, y)
}
