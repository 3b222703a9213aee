//! Border and splitter appearance properties.

use quadsplit_core::color::Color;

/// Default splitter thickness in pixels.
pub const DEFAULT_SPLITTER_THICKNESS: f32 = 2.0;

/// Minimum splitter thickness in pixels.
pub const MIN_SPLITTER_THICKNESS: f32 = 1.0;

/// Border drawn around the container.
///
/// Only the geometry-relevant part lives here; painting is the host's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub visible: bool,
    /// Width in pixels, never negative.
    pub thickness: f32,
    pub color: Color,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            visible: true,
            thickness: 1.0,
            color: Color::DARK_GRAY,
        }
    }
}

impl BorderStyle {
    /// Hidden border.
    pub fn none() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    /// Distance the content is inset from each container edge.
    pub fn offset(&self) -> f32 {
        if self.visible { self.thickness.max(0.0) } else { 0.0 }
    }
}
