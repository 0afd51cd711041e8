//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "camera": { "eye": [0, 0, -10], "target": [0, 0, 0], "up": [0, 1, 0] },
//!   "materials": {
//!     "red": { "albedo": [1, 0, 0] },
//!     "mirror": { "albedo": [0, 0, 0], "reflectivity": 1 }
//!   },
//!   "objects": [
//!     { "type": "plane", "origin": [-10, 0, 0], "normal": [1, 0, 0], "material": "red" },
//!     { "type": "sphere", "center": [0, -5, -5], "radius": 2, "material": "mirror" }
//!   ],
//!   "lights": [{ "position": [0, 0, 0], "power": 10, "color": [1, 1, 1] }],
//!   "settings": { "max_depth": 10 },
//!   "grading": { "gamma": 2.2 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use glint_math::{Color, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::{Camera, ColorGrading, Material, PointLight, Scene, TraceSettings};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Plane {index} has a zero-length normal")]
    DegenerateNormal { index: usize },

    #[error("Camera up vector is parallel to the viewing direction, or eye equals target")]
    DegenerateCamera,
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Look-at camera placement. `up` defaults to +Y and `focal_length` to 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CameraDescription {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    #[serde(default = "default_focal_length")]
    pub focal_length: f32,
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_focal_length() -> f32 {
    1.0
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, -10.0],
            target: [0.0, 0.0, 0.0],
            up: default_up(),
            focal_length: default_focal_length(),
        }
    }
}

/// A primitive in the scene file, tagged by `"type"`.
///
/// `material` names an entry of [`SceneDescription::materials`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    /// One-sided plane; `normal` need not be unit length but must be nonzero
    Plane {
        origin: [f32; 3],
        normal: [f32; 3],
        material: String,
    },
    Sphere {
        center: [f32; 3],
        radius: f32,
        material: String,
    },
}

impl ObjectDescription {
    fn material(&self) -> &str {
        match self {
            ObjectDescription::Plane { material, .. } | ObjectDescription::Sphere { material, .. } => {
                material
            }
        }
    }
}

/// A point light. `color` defaults to white.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    pub power: f32,
    #[serde(default = "default_light_color")]
    pub color: Color,
}

fn default_light_color() -> Color {
    Color::WHITE
}

/// Everything needed to render one image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub materials: BTreeMap<String, Material>,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    #[serde(default)]
    pub settings: TraceSettings,
    #[serde(default)]
    pub grading: ColorGrading,
}

impl SceneDescription {
    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the camera described by this scene.
    pub fn camera(&self) -> SceneResult<Camera> {
        let desc = &self.camera;
        let camera = Camera::look_at(desc.eye.into(), desc.target.into(), desc.up.into())
            .with_focal_length(desc.focal_length);
        if !camera.is_valid() {
            return Err(SceneError::DegenerateCamera);
        }
        Ok(camera)
    }

    /// Build the scene, resolving material names.
    ///
    /// Each named material is allocated once and shared by every object
    /// that references it.
    pub fn scene(&self) -> SceneResult<Scene> {
        let materials: BTreeMap<&str, Arc<Material>> = self
            .materials
            .iter()
            .map(|(name, m)| (name.as_str(), Arc::new(*m)))
            .collect();

        let mut scene = Scene::with_settings(self.settings);

        for (index, object) in self.objects.iter().enumerate() {
            let material = materials.get(object.material()).ok_or_else(|| SceneError::UnknownMaterial {
                index,
                name: object.material().to_string(),
            })?;

            match object {
                ObjectDescription::Plane { origin, normal, .. } => {
                    let normal = Vec3::from(*normal);
                    if normal.length_squared() == 0.0 {
                        return Err(SceneError::DegenerateNormal { index });
                    }
                    scene.add_plane((*origin).into(), normal, material);
                }
                ObjectDescription::Sphere { center, radius, .. } => {
                    if *radius <= 0.0 {
                        log::warn!("Sphere {} has non-positive radius {}", index, radius);
                    }
                    scene.add_sphere((*center).into(), *radius, material);
                }
            }
        }

        for light in &self.lights {
            scene.add_light(PointLight::new(light.position.into(), light.power, light.color));
        }

        Ok(scene)
    }

    /// Build both the scene and its camera.
    pub fn build(&self) -> SceneResult<(Scene, Camera)> {
        Ok((self.scene()?, self.camera()?))
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let description = SceneDescription::from_json(&json)?;

    log::info!(
        "Loaded {}: {} materials, {} objects, {} lights",
        path.display(),
        description.materials.len(),
        description.objects.len(),
        description.lights.len()
    );
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToneMap;

    const BOX: &str = r#"{
        "camera": { "eye": [0, 0, -10], "target": [0, 0, 0] },
        "materials": {
            "red": { "albedo": [1, 0, 0] },
            "mirror": { "albedo": [0, 0, 0], "reflectivity": 1 }
        },
        "objects": [
            { "type": "plane", "origin": [-10, 0, 0], "normal": [2, 0, 0], "material": "red" },
            { "type": "sphere", "center": [0, -5, -5], "radius": 2, "material": "mirror" },
            { "type": "sphere", "center": [3, 0, 0], "radius": 1, "material": "mirror" }
        ],
        "lights": [{ "position": [0, 0, 0], "power": 10 }],
        "settings": { "max_depth": 4 },
        "grading": { "tone_map": "reinhard" }
    }"#;

    #[test]
    fn test_parse_and_build() {
        let description = SceneDescription::from_json(BOX).unwrap();
        let (scene, camera) = description.build().unwrap();

        assert_eq!(scene.primitives().len(), 3);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.lights()[0].color, Color::WHITE);
        assert_eq!(scene.settings().max_depth, 4);
        assert_eq!(scene.settings().shadow_bias, 1e-3);
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(description.grading.tone_map, ToneMap::Reinhard);
    }

    #[test]
    fn test_materials_are_shared() {
        let scene = SceneDescription::from_json(BOX).unwrap().scene().unwrap();
        let primitives = scene.primitives();
        assert!(std::ptr::eq(primitives[1].material(), primitives[2].material()));
        assert!(!std::ptr::eq(primitives[0].material(), primitives[1].material()));
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let scene = SceneDescription::from_json(BOX).unwrap().scene().unwrap();
        match &scene.primitives()[0] {
            crate::Primitive::Plane(plane) => assert_eq!(plane.normal(), Vec3::X),
            other => panic!("expected a plane, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_material() {
        let json = r#"{
            "objects": [{ "type": "sphere", "center": [0, 0, 0], "radius": 1, "material": "gold" }]
        }"#;
        let err = SceneDescription::from_json(json).unwrap().scene().unwrap_err();
        assert!(matches!(err, SceneError::UnknownMaterial { index: 0, ref name } if name == "gold"));
    }

    #[test]
    fn test_zero_normal_rejected() {
        let json = r#"{
            "materials": { "gray": { "albedo": [0.5, 0.5, 0.5] } },
            "objects": [{ "type": "plane", "origin": [0, 0, 0], "normal": [0, 0, 0], "material": "gray" }]
        }"#;
        let err = SceneDescription::from_json(json).unwrap().scene().unwrap_err();
        assert!(matches!(err, SceneError::DegenerateNormal { index: 0 }));
    }

    #[test]
    fn test_degenerate_camera_rejected() {
        let json = r#"{ "camera": { "eye": [0, 0, 0], "target": [0, 5, 0] } }"#;
        let err = SceneDescription::from_json(json).unwrap().camera().unwrap_err();
        assert!(matches!(err, SceneError::DegenerateCamera));
    }

    #[test]
    fn test_invalid_json() {
        let err = SceneDescription::from_json("{ \"objects\": [{ \"type\": \"cube\" }] }").unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn test_empty_description_uses_defaults() {
        let description = SceneDescription::from_json("{}").unwrap();
        let (scene, camera) = description.build().unwrap();

        assert!(scene.primitives().is_empty());
        assert_eq!(*scene.settings(), TraceSettings::default());
        assert_eq!(camera, Camera::default());
        assert_eq!(description.grading, ColorGrading::default());
    }

    #[test]
    fn test_bundled_cornell_matches_builtin() {
        let json = include_str!("../../../scenes/cornell.json");
        let (scene, camera) = SceneDescription::from_json(json).unwrap().build().unwrap();
        let (builtin, builtin_camera) = crate::scenes::cornell_box();

        assert_eq!(camera, builtin_camera);
        assert_eq!(scene.primitives().len(), builtin.primitives().len());
        for (x, y) in [(0.0, 0.0), (-0.7, 0.3), (0.2, -0.8), (0.9, 0.9)] {
            let direction = camera.project_ray(x, y);
            assert_eq!(
                scene.trace(camera.position(), direction, 10),
                builtin.trace(camera.position(), direction, 10)
            );
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scene("/nonexistent-glint-dir/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
