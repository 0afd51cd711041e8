//! Pinhole camera for primary ray generation.

use glint_math::Vec3;

/// Pinhole camera built from a look-at specification.
///
/// Screen coordinates run from -1 to 1 on both axes, +y up. The image plane
/// sits `focal_length` in front of the eye, so a focal length of 1 gives a
/// 90 degree field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    focal_length: f32,
}

impl Camera {
    /// Place the camera at `eye` looking at `target`.
    ///
    /// `up` only needs to be roughly up; it must not be parallel to the
    /// viewing direction.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize_or_zero();
        let right = up.cross(forward).normalize_or_zero();
        let up = forward.cross(right);

        Self {
            position: eye,
            forward,
            right,
            up,
            focal_length: 1.0,
        }
    }

    /// Set the distance from the eye to the image plane.
    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    /// Origin of every primary ray.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// False if the look-at specification collapsed the basis.
    pub fn is_valid(&self) -> bool {
        self.forward != Vec3::ZERO && self.right != Vec3::ZERO
    }

    /// Unit direction through screen point (`x`, `y`).
    pub fn project_ray(&self, x: f32, y: f32) -> Vec3 {
        (self.right * x + self.up * y + self.forward * self.focal_length).normalize_or_zero()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::look_at(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, Vec3::Y)
    }
}
