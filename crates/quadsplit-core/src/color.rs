/// Linear RGBA, each channel in `0.0..=1.0`.
///
/// Only carried through the layout crates for the host to paint with.
/// `#[repr(C)]` + `Pod` so a host renderer can copy it into a uniform buffer.
///
/// ```
/// use quadsplit_core::color::Color;
///
/// assert_eq!(Color::from_rgb_u8(169, 169, 169), Color::DARK_GRAY);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::gray(255);
    pub const BLACK: Color = Color::gray(0);
    /// Default border color.
    pub const DARK_GRAY: Color = Color::gray(169);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    const fn gray(level: u8) -> Self {
        Self::from_rgb_u8(level, level, level)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DARK_GRAY
    }
}
