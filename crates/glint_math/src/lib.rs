// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod color;
mod ray;
mod vector;

pub use color::Color;
pub use ray::Ray;
pub use vector::reflect;
