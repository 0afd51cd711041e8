//! Surface and light records consumed by the scene.

use glint_math::{Color, Vec3};
use serde::Deserialize;

/// Surface reflectance.
///
/// Materials are shared between primitives through `Arc<Material>` and are
/// never mutated once the scene is built.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "MaterialFields")]
pub struct Material {
    /// Base color under direct light
    pub albedo: Color,
    /// Whether mirror reflection is traced, 0 = diffuse only, 1 = mirror.
    /// The reflected color is added unweighted.
    pub reflectivity: f32,
}

/// Material as written in scene files, before clamping.
#[derive(Deserialize)]
struct MaterialFields {
    albedo: Color,
    #[serde(default)]
    reflectivity: f32,
}

impl From<MaterialFields> for Material {
    fn from(fields: MaterialFields) -> Self {
        Self::new(fields.albedo, fields.reflectivity)
    }
}

impl Material {
    /// Create a new material.
    ///
    /// - `albedo`: Color under direct light
    /// - `reflectivity`: Mirror contribution, clamped to [0, 1]
    pub fn new(albedo: Color, reflectivity: f32) -> Self {
        Self {
            albedo,
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }

    /// A purely diffuse material.
    pub fn diffuse(albedo: Color) -> Self {
        Self::new(albedo, 0.0)
    }

    /// A perfect black mirror: no direct shading, full reflection.
    pub fn mirror() -> Self {
        Self::new(Color::BLACK, 1.0)
    }

    /// True if a ray hitting this material spawns a reflection ray.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}

/// An omnidirectional point light.
///
/// Intensity falls off linearly with distance (`power / distance`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub power: f32,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Vec3, power: f32, color: Color) -> Self {
        Self {
            position,
            power,
            color,
        }
    }

    /// Radiance arriving at a point `distance` away, ignoring occlusion.
    #[inline]
    pub fn contribution(&self, distance: f32) -> Color {
        self.color * (self.power / distance)
    }
}
