use crate::types::LayoutMode;

/// Errors reported by the layout container.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Cell index outside `1..=4`.
    CellIndexOutOfRange { index: usize },
    /// Manual position assignment attempted outside [`LayoutMode::Custom`].
    NotCustomMode { mode: LayoutMode },
    /// Splitter thickness below 1 pixel or not finite.
    InvalidSplitterThickness(f32),
    /// Mode name that does not match any [`LayoutMode`].
    UnknownMode(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::CellIndexOutOfRange { index } => {
                write!(f, "Cell index {} out of range (expected 1 to 4)", index)
            }
            LayoutError::NotCustomMode { mode } => write!(
                f,
                "Positions can only be assigned manually in custom mode (current mode: {})",
                mode
            ),
            LayoutError::InvalidSplitterThickness(value) => {
                write!(f, "Splitter thickness must be at least 1, got {}", value)
            }
            LayoutError::UnknownMode(name) => write!(f, "Unknown layout mode: {}", name),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result type for layout container operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
