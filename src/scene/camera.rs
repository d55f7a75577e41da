use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3, Vec4};

use crate::input::{Input, Key, MouseButton};
use crate::settings::FlyCameraSettings;

/// Keeps the view direction off the poles, where the basis degenerates.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 1e-3;

/// View matrix from an explicit camera basis.
///
/// Rows of the rotation are `right`, `up` and `-direction` (the camera looks
/// down its local −Z), followed by translating the world by `-position`.
#[must_use]
pub fn look_at(position: Vec3, direction: Vec3, up: Vec3, right: Vec3) -> Mat4 {
    let axis = Mat4::from_cols(
        Vec4::new(right.x, up.x, -direction.x, 0.0),
        Vec4::new(right.y, up.y, -direction.y, 0.0),
        Vec4::new(right.z, up.z, -direction.z, 0.0),
        Vec4::W,
    );
    axis * Mat4::from_translation(-position)
}

/// OpenGL-style perspective projection (clip depth in `[-1, 1]`).
#[must_use]
pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y_radians, aspect, near, far)
}

/// Free-flying camera: mouse look while active, WASD to move, Q/E for
/// vertical. Shift speeds up, Control slows down. The right mouse button
/// toggles whether the camera is active.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub settings: FlyCameraSettings,

    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub active: bool,

    direction: Vec3,
    right: Vec3,
    up: Vec3,
}

impl FlyCamera {
    #[must_use]
    pub fn new(settings: FlyCameraSettings) -> Self {
        let mut camera = Self {
            position: settings.start_position,
            settings,
            yaw: 0.0,
            pitch: 0.0,
            active: false,
            direction: Vec3::X,
            right: Vec3::Z,
            up: Vec3::Y,
        };
        camera.update_basis();
        camera
    }

    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn update(&mut self, input: &Input, dt: f32) {
        if input.was_button_just_pressed(MouseButton::Right) {
            self.active = !self.active;
            log::debug!("Fly camera {}", if self.active { "engaged" } else { "released" });
        }

        if self.active {
            let sensitivity = self.settings.mouse_sensitivity;
            self.yaw += input.cursor_delta.x * sensitivity;
            self.pitch = (self.pitch + input.cursor_delta.y * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();

        if !self.active {
            return;
        }

        let speed_mod = if input.is_key_pressed(Key::LeftShift) {
            self.settings.fast_multiplier
        } else if input.is_key_pressed(Key::LeftControl) {
            self.settings.slow_multiplier
        } else {
            1.0
        };
        let distance = speed_mod * self.settings.movement_per_second * dt;

        let mut movement = Vec3::ZERO;
        if input.is_key_pressed(Key::W) {
            movement += self.direction;
        }
        if input.is_key_pressed(Key::S) {
            movement -= self.direction;
        }
        if input.is_key_pressed(Key::D) {
            movement += self.right;
        }
        if input.is_key_pressed(Key::A) {
            movement -= self.right;
        }
        if input.is_key_pressed(Key::Q) {
            movement += self.up;
        }
        if input.is_key_pressed(Key::E) {
            movement -= self.up;
        }
        self.position += movement * distance;
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.position, self.direction, self.up, self.right)
    }

    fn update_basis(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.direction = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.direction.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.direction);
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(FlyCameraSettings::default())
    }
}
