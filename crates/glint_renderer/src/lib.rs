//! Glint Renderer - Whitted-style CPU ray tracing
//!
//! Point lights with hard shadows, an ambient term, and perfect mirror
//! reflection, traced one ray per pixel over planes and spheres.

mod camera;
mod description;
mod grading;
mod hittable;
mod image_buffer;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
pub mod scenes;
mod sphere;

pub use camera::Camera;
pub use description::{
    load_scene, CameraDescription, LightDescription, ObjectDescription, SceneDescription, SceneError,
    SceneResult,
};
pub use grading::{ColorGrading, ToneMap};
pub use hittable::{Hit, Hittable};
pub use image_buffer::{ImageBuffer, ImageError, ImageResult};
pub use material::{Material, PointLight};
pub use plane::{Plane, PARALLEL_EPSILON};
pub use primitive::Primitive;
pub use renderer::{render, render_pixel, RenderConfig};
pub use scene::{Scene, TraceSettings};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{reflect, Color, Ray, Vec3};
