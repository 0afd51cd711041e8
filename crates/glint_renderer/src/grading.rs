//! Post-process color grading applied after tracing.
//!
//! See https://learnopengl.com/Advanced-Lighting/HDR for the tone curves.

use glint_math::Color;
use serde::Deserialize;

use crate::ImageBuffer;

/// HDR to LDR curve applied before gamma.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMap {
    /// Leave values as they are; the writer clamps
    #[default]
    None,
    /// `c / (c + 1)`
    Reinhard,
    /// `1 - exp(-c * exposure)`
    Exposure { exposure: f32 },
}

impl ToneMap {
    pub fn apply(&self, color: Color) -> Color {
        match *self {
            ToneMap::None => color,
            ToneMap::Reinhard => color / (color + Color::WHITE),
            ToneMap::Exposure { exposure } => color.map(|c| 1.0 - (-c * exposure).exp()),
        }
    }
}

/// Tone mapping followed by gamma encoding.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorGrading {
    pub tone_map: ToneMap,
    /// Display gamma, values <= 0 disable encoding
    pub gamma: f32,
}

impl Default for ColorGrading {
    fn default() -> Self {
        Self {
            tone_map: ToneMap::None,
            gamma: 2.2,
        }
    }
}

impl ColorGrading {
    /// Grade a single linear color.
    pub fn apply(&self, color: Color) -> Color {
        let mapped = self.tone_map.apply(color);
        if self.gamma <= 0.0 {
            return mapped;
        }

        let inv_gamma = 1.0 / self.gamma;
        mapped.map(|c| if c > 0.0 { c.powf(inv_gamma) } else { 0.0 })
    }

    /// Grade every pixel of `image` in place.
    pub fn apply_to(&self, image: &mut ImageBuffer) {
        image.apply(|c| self.apply(c));
    }
}
