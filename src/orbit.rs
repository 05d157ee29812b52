use glam::Vec3;

use crate::camera::{Camera, INITIAL_DISTANCE};

pub const DAMPING_FACTOR: f32 = 0.05;
pub const ROTATE_SPEED: f32 = 0.005;

/// Pitch stops just short of the poles so the view never flips.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Narrow capability interface over the camera-orbit behavior, so the
/// application can swap or stub it.
pub trait OrbitControl {
    /// Mirrored from the modifier key every frame by the render loop.
    fn set_enabled(&mut self, enabled: bool);

    /// Feed a pointer-drag delta in screen pixels. Inert while disabled.
    fn apply_gesture(&mut self, dx: f32, dy: f32);

    /// Integrate damped motion for one frame and reposition the camera.
    fn update(&mut self, camera: &mut Camera);
}

/// Orbit around a fixed target with low-pass filtered angular velocity.
pub struct OrbitControls {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    damping: f32,
    enabled: bool,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: INITIAL_DISTANCE,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            damping: DAMPING_FACTOR,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    fn orbit_position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + offset * self.distance
    }
}

impl OrbitControl for OrbitControls {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn apply_gesture(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.yaw_velocity -= dx * ROTATE_SPEED;
        self.pitch_velocity -= dy * ROTATE_SPEED;
    }

    fn update(&mut self, camera: &mut Camera) {
        self.yaw += self.yaw_velocity * self.damping;
        self.pitch = (self.pitch + self.pitch_velocity * self.damping)
            .clamp(-MAX_PITCH, MAX_PITCH);

        // Residual velocity keeps gliding after release and decays out.
        self.yaw_velocity *= 1.0 - self.damping;
        self.pitch_velocity *= 1.0 - self.damping;

        camera.target = self.target;
        camera.position = self.orbit_position();
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}
