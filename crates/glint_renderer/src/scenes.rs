//! Built-in scenes.

use std::sync::Arc;

use glint_math::{Color, Vec3};

use crate::{Camera, Material, PointLight, Scene};

/// Cornell-style box: red and green side walls, gray floor, ceiling and back
/// wall, three mirror spheres and a white light at the center.
///
/// The front of the box is open; the camera looks in from (0, 0, -10).
pub fn cornell_box() -> (Scene, Camera) {
    let left_wall = Arc::new(Material::diffuse(Color::new(1.0, 0.0, 0.0)));
    let right_wall = Arc::new(Material::diffuse(Color::new(0.0, 1.0, 0.0)));
    let other_wall = Arc::new(Material::diffuse(Color::splat(0.8)));
    let mirror = Arc::new(Material::mirror());

    let mut scene = Scene::new();
    scene
        .add_plane(Vec3::new(-10.0, 0.0, 0.0), Vec3::X, &left_wall)
        .add_plane(Vec3::new(10.0, 0.0, 0.0), -Vec3::X, &right_wall)
        .add_plane(Vec3::new(0.0, -10.0, 0.0), Vec3::Y, &other_wall)
        .add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, &other_wall)
        .add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, &other_wall)
        .add_sphere(Vec3::new(0.0, -5.0, -5.0), 2.0, &mirror)
        .add_sphere(Vec3::new(4.33, -4.0, 2.5), 2.0, &mirror)
        .add_sphere(Vec3::new(-4.33, -4.5, 2.5), 2.0, &mirror)
        .add_light(PointLight::new(Vec3::ZERO, 10.0, Color::WHITE));

    let camera = Camera::look_at(Vec3::new(0.0, 0.0, -10.0), Vec3::ZERO, Vec3::Y);

    (scene, camera)
}
