//! One-sided infinite plane.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material,
};
use glint_math::{Ray, Vec3};

/// Rays closer than this to parallel (as `-normal . direction`) miss the plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `origin` facing along `normal`.
///
/// Only the front face is visible: rays travelling with the normal pass
/// straight through.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized.
    pub fn new(origin: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let denom = -self.normal.dot(ray.direction);
        if denom <= PARALLEL_EPSILON {
            return None;
        }

        let t = -(self.origin - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        Some(Hit {
            distance: t,
            position: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn floor() -> Plane {
        Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Arc::new(Material::diffuse(Color::WHITE)),
        )
    }

    #[test]
    fn test_plane_hit_perpendicular() {
        let ray = Ray::new(Vec3::new(3.0, 4.0, 5.0), -Vec3::Y);

        let plane = floor();
        let hit = plane.intersect(&ray).unwrap();
        assert_eq!(hit.distance, 5.0);
        assert_eq!(hit.position, Vec3::new(3.0, -1.0, 5.0));
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_hit_oblique() {
        let ray = Ray::normalized(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));

        let plane = floor();
        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0 * 2.0_f32.sqrt()).abs() < 1e-5);
        assert!((hit.position - Vec3::new(2.0, -1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_plane_is_one_sided() {
        // From below, travelling up: approaching the back face
        let ray = Ray::new(Vec3::new(0.0, -5.0, 0.0), Vec3::Y);
        assert!(floor().intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_parallel() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(floor().intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_origin() {
        // Below the floor, looking further down: the front face is behind us
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), -Vec3::Y);
        assert!(floor().intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_rejects_hit_at_ray_origin() {
        // Origin lies on the plane, approaching the front face: t == 0
        let ray = Ray::new(Vec3::new(2.0, -1.0, 7.0), -Vec3::Y);
        assert!(floor().intersect(&ray).is_none());

        let oblique = Ray::normalized(Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert!(floor().intersect(&oblique).is_none());
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0), Arc::new(Material::default()));
        assert_eq!(plane.normal(), Vec3::new(0.0, 0.0, -1.0));
    }
}
