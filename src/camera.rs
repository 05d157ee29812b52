use glam::{Mat4, Vec3};

use crate::math::Ray;

pub const FOV_Y_DEGREES: f32 = 70.0;
pub const NEAR_CLIP: f32 = 0.1;
pub const FAR_CLIP: f32 = 100.0;
pub const INITIAL_DISTANCE: f32 = 5.0;

/// Window rect the pointer coordinates are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Perspective camera looking at a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Camera at the initial distance along +Z, looking at the origin.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, INITIAL_DISTANCE),
            target: Vec3::ZERO,
            fov_y: FOV_Y_DEGREES.to_radians(),
            near: NEAR_CLIP,
            far: FAR_CLIP,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// Cast a world-space ray through a screen pixel. Pure in the camera
    /// pose, viewport, and pixel coordinate; `None` for a degenerate
    /// viewport.
    pub fn screen_ray(&self, screen_x: f32, screen_y: f32, viewport: Viewport) -> Option<Ray> {
        if viewport.is_degenerate() {
            return None;
        }

        let ndc_x = (screen_x / viewport.width as f32) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen_y / viewport.height as f32) * 2.0;

        let inv = self.view_projection(viewport.aspect()).inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));

        let dir = (far - near).normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        Some(Ray::new(near, dir))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
