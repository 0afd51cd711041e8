//! Scene aggregate: nearest-hit search and recursive shading.
//!
//! Every ray is tested against every primitive. There is no acceleration
//! structure, so results depend only on geometry and insertion order
//! (exact distance ties keep the earlier primitive).

use std::sync::Arc;

use glint_math::{reflect, Color, Ray, Vec3};
use serde::Deserialize;

use crate::hittable::nearest;
use crate::{Hit, Hittable, Material, Plane, PointLight, Primitive, Sphere};

/// Tunable constants of the shading algorithm.
///
/// The epsilons are tuned for scenes roughly 10 units across and should be
/// scaled along with the scene.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Number of mirror bounces traced after the primary hit
    pub max_depth: u32,
    /// Light added to every lit surface regardless of visibility
    pub ambient: Color,
    /// Shadow hits must be this much closer than the light to occlude it
    pub shadow_bias: f32,
    /// Reflection rays start this far along their direction
    pub reflection_offset: f32,
}

impl TraceSettings {
    pub const DEFAULT_MAX_DEPTH: u32 = 10;
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            ambient: Color::splat(0.1),
            shadow_bias: 1e-3,
            reflection_offset: 1e-4,
        }
    }
}

/// Primitives and lights to be rendered.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<PointLight>,
    settings: TraceSettings,
}

impl Scene {
    /// Create an empty scene with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with the given settings.
    pub fn with_settings(settings: TraceSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut TraceSettings {
        &mut self.settings
    }

    /// Append a primitive.
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> &mut Self {
        self.primitives.push(primitive.into());
        self
    }

    /// Append a one-sided plane.
    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material: &Arc<Material>) -> &mut Self {
        self.add(Plane::new(origin, normal, Arc::clone(material)))
    }

    /// Append a sphere.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: &Arc<Material>) -> &mut Self {
        self.add(Sphere::new(center, radius, Arc::clone(material)))
    }

    /// Append a point light.
    pub fn add_light(&mut self, light: PointLight) -> &mut Self {
        if light.power <= 0.0 {
            log::warn!("Point light at {} has non-positive power {}", light.position, light.power);
        }
        self.lights.push(light);
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Find the nearest primitive hit by `ray`.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.primitives
            .iter()
            .fold(None, |closest, primitive| nearest(closest, primitive.intersect(ray)))
    }

    /// Trace a ray with the configured bounce budget.
    pub fn trace_ray(&self, ray: &Ray) -> Option<Color> {
        self.trace(ray.origin, ray.direction, self.settings.max_depth)
    }

    /// Compute the color seen along a ray.
    ///
    /// `direction` must be unit length. `depth` is the number of mirror
    /// bounces still allowed. Returns `None` if the ray escapes the scene.
    pub fn trace(&self, origin: Vec3, direction: Vec3, depth: u32) -> Option<Color> {
        let hit = self.intersect(&Ray::new(origin, direction))?;
        let material = hit.material;

        // Black surfaces cannot show direct light, skip the shadow rays
        let direct = if material.albedo.brightness() > 0.0 {
            material.albedo * self.illumination(hit.position)
        } else {
            Color::BLACK
        };

        let mut reflection = Color::BLACK;
        if depth > 0 && material.is_reflective() {
            let reflected = reflect(direction, hit.normal);
            let reflected_origin = hit.position + reflected * self.settings.reflection_offset;

            if let Some(color) = self.trace(reflected_origin, reflected, depth - 1) {
                reflection = color;
            }
        }

        Some(direct + reflection)
    }

    /// Light arriving at `position`: ambient plus every unoccluded light.
    pub fn illumination(&self, position: Vec3) -> Color {
        let mut lighting = self.settings.ambient;

        for light in &self.lights {
            let delta = position - light.position;
            let distance_to_light = delta.length();
            if distance_to_light <= 0.0 {
                continue;
            }

            // Shadow ray runs from the light towards the surface
            let shadow = Ray::new(light.position, delta / distance_to_light);
            if let Some(blocker) = self.intersect(&shadow) {
                if blocker.distance < distance_to_light - self.settings.shadow_bias {
                    continue;
                }
            }

            lighting += light.contribution(distance_to_light);
        }

        lighting
    }
}
