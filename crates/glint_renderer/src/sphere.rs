//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{Hit, Hittable},
    Material,
};
use glint_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        // A point has no surface normal
        if self.radius <= 0.0 {
            return None;
        }

        let radius2 = self.radius * self.radius;

        // Project the center onto the ray to find the closest approach
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        // Origin inside the sphere: the near root is behind us, use the far one
        let t = if t0 > 0.0 { t0 } else { t1 };
        if t <= 0.0 {
            return None;
        }

        let position = ray.at(t);
        Some(Hit {
            distance: t,
            position,
            normal: (position - self.center).normalize_or_zero(),
            material: &self.material,
        })
    }
}
