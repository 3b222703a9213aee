//! Quadsplit UI
//!
//! A layout container that divides a rectangle into one to four cells
//! according to a [`LayoutMode`], with draggable splitters between them.
//!
//! The crate is host-agnostic: painting, event delivery and child widgets
//! belong to the host toolkit. The host hands the container its size and
//! pointer positions and is told through [`LayoutHost`] when to relayout or
//! redraw.
//!
//! - [`geometry`]: pure rectangle and splitter computation
//! - [`cell`]: the four cells and their position assignment
//! - [`drag`]: splitter drag state machine and clamping rules
//! - [`container`]: [`LayoutContainer`], which ties them together

pub mod cell;
pub mod config;
pub mod container;
pub mod drag;
pub mod error;
pub mod fractions;
pub mod geometry;
pub mod invalidation;
pub mod style;
pub mod types;

pub use cell::{CELL_COUNT, CellRegistry, GridCell, RESIZE_BORDER_WIDTH};
pub use config::LayoutConfig;
pub use container::LayoutContainer;
pub use drag::{DragManager, DragSession, DragTarget};
pub use error::{LayoutError, LayoutResult};
pub use fractions::SplitFractions;
pub use geometry::{
    LayoutInput, LayoutRect, LayoutRects, SplitLines, Splitter, calculate_layout_rectangles,
    calculate_splitters, splitter_rectangles,
};
pub use invalidation::{Invalidation, LayoutHost};
pub use style::BorderStyle;
pub use types::{
    CursorHint, LayoutMode, LayoutPosition, PanelVisibility, ResizeEdge, SplitDirection,
    SplitterRole,
};
