//! RGB colors for object visual state
//!
//! Colors are stored as 0..1 floats and usually created from the 0xRRGGBB
//! hex values scene authors are used to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Pack back into 0xRRGGBB, rounding each channel
    pub fn to_hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// RGBA with full opacity, the layout the renderer's color uniforms use
    pub fn to_array4(&self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}
