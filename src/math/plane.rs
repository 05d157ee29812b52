use glam::{Vec2, Vec3};

use super::ray::Ray;

const EPSILON: f32 = 1e-8;

/// Finite rectangular plane, centered at the origin in the XY plane,
/// facing +Z. Both faces accept hits.
#[derive(Debug, Clone, Copy)]
pub struct PlaneSurface {
    pub width: f32,
    pub height: f32,
}

/// Intersection of a ray with a [`PlaneSurface`].
#[derive(Debug, Clone, Copy)]
pub struct PlaneHit {
    pub point: Vec3,
    /// Surface parametric coordinates, each in [0, 1].
    /// u runs left to right, v runs bottom to top.
    pub uv: Vec2,
    pub t: f32,
}

impl PlaneSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// Intersect a ray against the plane. Returns `None` when the ray is
    /// parallel, points away, or hits outside the rectangle.
    pub fn intersect(&self, ray: &Ray) -> Option<PlaneHit> {
        if ray.dir.z.abs() < EPSILON {
            return None;
        }

        let t = -ray.origin.z / ray.dir.z;
        if t < 0.0 {
            return None;
        }

        let point = ray.at(t);
        let hx = self.half_width();
        let hy = self.half_height();
        if point.x < -hx || point.x > hx || point.y < -hy || point.y > hy {
            return None;
        }

        let uv = Vec2::new((point.x + hx) / self.width, (point.y + hy) / self.height);
        Some(PlaneHit { point, uv, t })
    }
}
