//! Linear RGB color.
//!
//! Components are unclamped while light is accumulated and only clamped when
//! a pixel is quantized for output.

use std::{fmt, ops};

use serde::{Deserialize, Serialize};

/// Linear (non gamma-encoded) RGB color.
///
/// Serializes as a plain `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Gray with every channel set to `w`.
    pub const fn splat(w: f32) -> Self {
        Self::new(w, w, w)
    }

    /// Perceptual luminance using the Rec. 601 weights.
    pub fn brightness(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Apply `f` to every channel.
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Clamp every channel to [0, 1].
    pub fn clamp01(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Quantize to 8 bits per channel: `round(clamp(c, 0, 1) * 255)`.
    ///
    /// NaN channels quantize to 0.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| {
            if c.is_nan() {
                0
            } else {
                (c.clamp(0.0, 1.0) * 255.0).round() as u8
            }
        };
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl ops::Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl ops::Div for Color {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.r / rhs.r, self.g / rhs.g, self.b / rhs.b)
    }
}

impl ops::Mul<f32> for Color {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s)
    }
}

impl ops::Div<f32> for Color {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Self::new(self.r / s, self.g / s, self.b / s)
    }
}

impl ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::MulAssign for Color {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_arithmetic() {
        let a = Color::new(0.5, 1.0, 2.0);
        let b = Color::new(2.0, 0.5, 4.0);

        assert_eq!(a + b, Color::new(2.5, 1.5, 6.0));
        assert_eq!(b - a, Color::new(1.5, -0.5, 2.0));
        assert_eq!(a * b, Color::new(1.0, 0.5, 8.0));
        assert_eq!(b / a, Color::new(4.0, 0.5, 2.0));
        assert_eq!(a * 2.0, Color::new(1.0, 2.0, 4.0));
        assert_eq!(b / 2.0, Color::new(1.0, 0.25, 2.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut c = Color::splat(0.1);
        c += Color::new(0.4, 0.9, 1.9);
        assert_eq!(c, Color::new(0.5, 1.0, 2.0));

        c *= Color::new(2.0, 0.0, 0.5);
        assert_eq!(c, Color::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_brightness() {
        assert_eq!(Color::BLACK.brightness(), 0.0);
        assert!((Color::WHITE.brightness() - 1.0).abs() < 1e-6);
        assert!((Color::new(1.0, 0.0, 0.0).brightness() - 0.299).abs() < 1e-6);
        assert!((Color::new(0.0, 1.0, 0.0).brightness() - 0.587).abs() < 1e-6);
    }

    #[test]
    fn test_accumulation_is_unclamped() {
        let c = Color::splat(0.8) + Color::splat(0.8);
        assert_eq!(c, Color::splat(1.6));
        assert_eq!(c.clamp01(), Color::WHITE);
    }

    #[test]
    fn test_to_rgb8_rounds_and_clamps() {
        assert_eq!(Color::new(-1.0, 0.5, 3.0).to_rgb8(), [0, 128, 255]);
        assert_eq!(Color::new(1.0 / 255.0, 0.499 / 255.0, 1.0).to_rgb8(), [1, 0, 255]);
        assert_eq!(Color::new(f32::NAN, 0.0, 0.0).to_rgb8(), [0, 0, 0]);
    }

    #[test]
    fn test_serde_as_array() {
        let c: Color = serde_json::from_str("[0.25, 0.5, 1.0]").unwrap();
        assert_eq!(c, Color::new(0.25, 0.5, 1.0));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[0.25,0.5,1.0]");
    }
}
