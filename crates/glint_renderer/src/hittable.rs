//! Hittable trait and Hit record for ray-object intersection.

use crate::Material;
use glint_math::{Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Produced and consumed within a single trace step.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the ray, always > 0
    pub distance: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit outward surface normal
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find where `ray` first meets this object in front of its origin.
    ///
    /// `ray.direction` must be unit length. Returns `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>>;
}

/// Keep the nearer of two optional hits. Ties keep `current`.
#[inline]
pub fn nearest<'a>(current: Option<Hit<'a>>, candidate: Option<Hit<'a>>) -> Option<Hit<'a>> {
    match (current, candidate) {
        (Some(cur), Some(cand)) if cand.distance < cur.distance => Some(cand),
        (None, cand) => cand,
        (cur, _) => cur,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(distance: f32, material: &Material) -> Hit<'_> {
        Hit {
            distance,
            position: Vec3::ZERO,
            normal: Vec3::Y,
            material,
        }
    }

    #[test]
    fn test_nearest_prefers_smaller_distance() {
        let m = Material::default();
        assert_eq!(nearest(Some(hit(2.0, &m)), Some(hit(1.0, &m))).unwrap().distance, 1.0);
        assert_eq!(nearest(Some(hit(1.0, &m)), Some(hit(2.0, &m))).unwrap().distance, 1.0);
        assert_eq!(nearest(None, Some(hit(3.0, &m))).unwrap().distance, 3.0);
        assert!(nearest(None, None).is_none());
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let first = Material::diffuse(glint_math::Color::WHITE);
        let second = Material::mirror();

        let kept = nearest(Some(hit(1.0, &first)), Some(hit(1.0, &second))).unwrap();
        assert!(std::ptr::eq(kept.material, &first));
    }
}
