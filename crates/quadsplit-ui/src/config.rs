//! Construction-time configuration for [`LayoutContainer`](crate::LayoutContainer).

use quadsplit_core::color::Color;

use crate::fractions::SplitFractions;
use crate::style::{BorderStyle, DEFAULT_SPLITTER_THICKNESS};
use crate::types::{LayoutMode, PanelVisibility};

/// Initial properties of a container.
///
/// Values are applied through the container's setters, so out-of-range
/// fractions and thicknesses are clamped the same way as at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    pub splitter_thickness: f32,
    pub fractions: SplitFractions,
    pub border: BorderStyle,
    pub visibility: PanelVisibility,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Vertical,
            splitter_thickness: DEFAULT_SPLITTER_THICKNESS,
            fractions: SplitFractions::default(),
            border: BorderStyle::default(),
            visibility: PanelVisibility::all(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_splitter_thickness(mut self, thickness: f32) -> Self {
        self.splitter_thickness = thickness;
        self
    }

    pub fn with_fractions(mut self, fractions: SplitFractions) -> Self {
        self.fractions = fractions;
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Hide the border entirely.
    pub fn without_border(mut self) -> Self {
        self.border.visible = false;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border.color = color;
        self
    }

    pub fn with_visibility(mut self, visibility: PanelVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}
