//! Closed set of shapes a scene can hold.

use crate::{Hit, Hittable, Material, Plane, Sphere};
use glint_math::Ray;

/// A scene primitive. New shapes are added as variants here.
#[derive(Debug, Clone)]
pub enum Primitive {
    Plane(Plane),
    Sphere(Sphere),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Plane(plane) => plane.material(),
            Primitive::Sphere(sphere) => sphere.material(),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        match self {
            Primitive::Plane(plane) => plane.intersect(ray),
            Primitive::Sphere(sphere) => sphere.intersect(ray),
        }
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}
