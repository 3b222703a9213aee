//! Shared types for the layout container.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::LayoutError;

/// How the container partitions its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Top / Center / Bottom stacked along the y axis.
    #[default]
    Vertical,
    /// Left / Center / Right stacked along the x axis.
    Horizontal,
    /// 2x2 grid.
    Grid,
    /// Full-width top region, bottom half split left/right.
    TopSpan,
    /// Full-width bottom region, top half split left/right.
    BottomSpan,
    /// Full-height left region, right half split top/bottom.
    LeftSpan,
    /// Full-height right region, left half split top/bottom.
    RightSpan,
    /// Positions are assigned by the host; every position gets a rectangle.
    Custom,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 8] = [
        LayoutMode::Vertical,
        LayoutMode::Horizontal,
        LayoutMode::Grid,
        LayoutMode::TopSpan,
        LayoutMode::BottomSpan,
        LayoutMode::LeftSpan,
        LayoutMode::RightSpan,
        LayoutMode::Custom,
    ];

    /// The single stacking direction for Vertical/Horizontal, `None` for the two-axis modes.
    pub fn stack_direction(&self) -> Option<SplitDirection> {
        match self {
            LayoutMode::Vertical => Some(SplitDirection::Vertical),
            LayoutMode::Horizontal => Some(SplitDirection::Horizontal),
            LayoutMode::Grid
            | LayoutMode::TopSpan
            | LayoutMode::BottomSpan
            | LayoutMode::LeftSpan
            | LayoutMode::RightSpan
            | LayoutMode::Custom => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Vertical => "vertical",
            LayoutMode::Horizontal => "horizontal",
            LayoutMode::Grid => "grid",
            LayoutMode::TopSpan => "top-span",
            LayoutMode::BottomSpan => "bottom-span",
            LayoutMode::LeftSpan => "left-span",
            LayoutMode::RightSpan => "right-span",
            LayoutMode::Custom => "custom",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        LayoutMode::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized || mode.name().replace('-', "") == normalized)
            .ok_or_else(|| LayoutError::UnknownMode(s.to_string()))
    }
}

/// Named placement slot a cell can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutPosition {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Not shown.
    #[default]
    None,
}

impl LayoutPosition {
    /// Every position that can receive a rectangle.
    pub const PLACED: [LayoutPosition; 9] = [
        LayoutPosition::Top,
        LayoutPosition::Bottom,
        LayoutPosition::Left,
        LayoutPosition::Right,
        LayoutPosition::Center,
        LayoutPosition::TopLeft,
        LayoutPosition::TopRight,
        LayoutPosition::BottomLeft,
        LayoutPosition::BottomRight,
    ];

    pub fn is_none(&self) -> bool {
        matches!(self, LayoutPosition::None)
    }
}

impl fmt::Display for LayoutPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Direction of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitDirection {
    /// Left/Right regions (vertical separator line, driven by a horizontal fraction)
    #[default]
    Horizontal,
    /// Top/Bottom regions (horizontal separator line, driven by a vertical fraction)
    Vertical,
}

/// Which of the two boundaries along an axis a splitter represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitterRole {
    Primary,
    Secondary,
}

/// Cell edge offering a resize affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Cursor the host should show for a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorHint {
    #[default]
    Default,
    /// Over a horizontal splitter line; dragging moves it up/down.
    ResizeRow,
    /// Over a vertical splitter line; dragging moves it left/right.
    ResizeColumn,
}

bitflags! {
    /// Which optional panels are shown.
    ///
    /// Top/Bottom only take effect in [`LayoutMode::Vertical`], Left/Right only
    /// in [`LayoutMode::Horizontal`]. The center panel is always shown.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PanelVisibility: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self::all()
    }
}

impl PanelVisibility {
    /// The flags that matter for `mode`; empty for the two-axis modes.
    pub fn effective_for(mode: LayoutMode) -> Self {
        match mode.stack_direction() {
            Some(SplitDirection::Vertical) => Self::TOP | Self::BOTTOM,
            Some(SplitDirection::Horizontal) => Self::LEFT | Self::RIGHT,
            None => Self::empty(),
        }
    }

    /// `(leading, trailing)` panel flags for a stacking mode.
    pub fn stack_ends(&self, direction: SplitDirection) -> (bool, bool) {
        match direction {
            SplitDirection::Vertical => (self.contains(Self::TOP), self.contains(Self::BOTTOM)),
            SplitDirection::Horizontal => (self.contains(Self::LEFT), self.contains(Self::RIGHT)),
        }
    }
}
