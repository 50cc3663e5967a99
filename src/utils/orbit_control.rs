use glam::Vec3;

use crate::app::input::{Input, Key};

/// Lowest allowed `sin(vertical)`, keeping the eye above the ground plane.
const MIN_VERTICAL_SIN: f32 = 0.1;
const MAX_VERTICAL_DEGREES: f32 = 89.0;

/// Mouse-driven orbit camera.
///
/// The eye sits on a sphere of radius `distance` around the world origin,
/// parameterized by a horizontal and a vertical angle in degrees, and always
/// looks at `target`.
///
/// - [`rotate`](Self::rotate): `rotate_speed` degrees per pixel of drag
/// - [`zoom`](Self::zoom): `zoom_speed` units per wheel notch, clamped to
///   `[min_distance, max_distance]`
/// - [`pan_keys`](Self::pan_keys): fixed-step W/A/S/D eye pan, which the
///   viewer only calls when `enable_keys` is set
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    pub enable_keys: bool,
    pub key_pan_step: f32,

    pub target: Vec3,

    horizontal: f32,
    vertical: f32,
    distance: f32,
    pan_offset: Vec3,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.4, 0.0), 3.0)
    }
}

impl OrbitControls {
    #[must_use]
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            rotate_speed: 0.1,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 10.0,
            enable_keys: false,
            key_pan_step: 0.1,
            target,
            horizontal: 0.0,
            vertical: min_vertical_degrees(),
            distance: distance.clamp(1.0, 10.0),
            pan_offset: Vec3::ZERO,
        }
    }

    #[inline]
    #[must_use]
    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal
    }

    #[inline]
    #[must_use]
    pub fn vertical_angle(&self) -> f32 {
        self.vertical
    }

    #[inline]
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Applies a cursor movement of `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.horizontal -= self.rotate_speed * dx;
        self.vertical += self.rotate_speed * dy;

        if self.vertical.to_radians().sin() < MIN_VERTICAL_SIN {
            self.vertical = min_vertical_degrees();
        }
        if self.horizontal > 360.0 {
            self.horizontal -= 360.0;
        }
        if self.horizontal < 0.0 {
            self.horizontal += 360.0;
        }
        self.vertical = self.vertical.clamp(-MAX_VERTICAL_DEGREES, MAX_VERTICAL_DEGREES);
    }

    /// Applies a wheel movement; positive `dy` moves the eye closer.
    pub fn zoom(&mut self, dy: f32) {
        self.distance = (self.distance - self.zoom_speed * dy).clamp(self.min_distance, self.max_distance);
    }

    /// Shifts the eye by one key step per held W/A/S/D key.
    pub fn pan_keys(&mut self, input: &Input) {
        let step = self.key_pan_step;
        if input.get_key(Key::W) {
            self.pan_offset.z -= step;
        }
        if input.get_key(Key::A) {
            self.pan_offset.x -= step;
        }
        if input.get_key(Key::S) {
            self.pan_offset.z += step;
        }
        if input.get_key(Key::D) {
            self.pan_offset.x += step;
        }
    }

    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_h, cos_h) = self.horizontal.to_radians().sin_cos();
        let (sin_v, cos_v) = self.vertical.to_radians().sin_cos();
        self.distance * Vec3::new(cos_v * sin_h, sin_v, cos_v * cos_h) + self.pan_offset
    }
}

fn min_vertical_degrees() -> f32 {
    MIN_VERTICAL_SIN.asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_just_above_the_ground() {
        let controls = OrbitControls::default();
        let eye = controls.eye();
        assert!((eye.y - 0.3).abs() < 1e-4);
        assert!(eye.x.abs() < 1e-6);
    }

    #[test]
    fn horizontal_wraps_into_range() {
        let mut controls = OrbitControls::default();
        controls.rotate(10.0, 0.0);
        assert!((controls.horizontal_angle() - 359.0).abs() < 1e-3);
    }
}
