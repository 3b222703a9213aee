//! Fixed registry of the four cells and their automatic position assignment.

use indexmap::IndexMap;
use quadsplit_core::math::Vec2;

use crate::error::{LayoutError, LayoutResult};
use crate::geometry::LayoutRect;
use crate::types::{LayoutMode, LayoutPosition, PanelVisibility, ResizeEdge, SplitDirection};

/// Number of cells owned by a container.
pub const CELL_COUNT: usize = 4;

/// Width of the band around a cell edge that offers a resize affordance.
pub const RESIZE_BORDER_WIDTH: f32 = 5.0;

/// Two edges closer than this are treated as shared.
const EDGE_MATCH_TOLERANCE: f32 = 1e-3;

/// One of the four regions managed by a container.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    index: usize,
    position: LayoutPosition,
    visible: bool,
    bounds: LayoutRect,
}

impl GridCell {
    fn new(index: usize) -> Self {
        Self {
            index,
            position: LayoutPosition::None,
            visible: false,
            bounds: LayoutRect::ZERO,
        }
    }

    /// 1-based index (1 to 4).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> LayoutPosition {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Bounds from the most recent relayout.
    pub fn bounds(&self) -> LayoutRect {
        self.bounds
    }

    fn set_position(&mut self, position: LayoutPosition) {
        self.position = position;
        self.visible = !position.is_none();
    }
}

/// The four cells of a container, created once and never destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRegistry {
    cells: [GridCell; CELL_COUNT],
}

impl Default for CellRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CellRegistry {
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| GridCell::new(i + 1)),
        }
    }

    /// Validate a 1-based cell index and convert it to a slot.
    fn slot(index: usize) -> LayoutResult<usize> {
        if (1..=CELL_COUNT).contains(&index) {
            Ok(index - 1)
        } else {
            Err(LayoutError::CellIndexOutOfRange { index })
        }
    }

    pub fn get(&self, index: usize) -> LayoutResult<&GridCell> {
        Ok(&self.cells[Self::slot(index)?])
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn position(&self, index: usize) -> LayoutResult<LayoutPosition> {
        self.get(index).map(GridCell::position)
    }

    /// Visible positions in cell order.
    pub fn visible_positions(&self) -> Vec<LayoutPosition> {
        self.cells
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.position)
            .collect()
    }

    /// Re-derive every cell's position from the mode and panel flags.
    ///
    /// Custom mode leaves the host-assigned positions untouched; only
    /// visibility is refreshed.
    pub fn assign_positions(&mut self, mode: LayoutMode, visibility: PanelVisibility) {
        if let Some(positions) = positions_for_mode(mode, visibility) {
            for (cell, position) in self.cells.iter_mut().zip(positions) {
                cell.set_position(position);
            }
        } else {
            for cell in &mut self.cells {
                cell.visible = !cell.position.is_none();
            }
        }
    }

    /// Assign a position to one cell directly.
    ///
    /// Any other cell already holding `position` is released to
    /// [`LayoutPosition::None`], so a placed position has at most one owner.
    pub fn set_position(&mut self, index: usize, position: LayoutPosition) -> LayoutResult<()> {
        let slot = Self::slot(index)?;
        if !position.is_none() {
            for (i, other) in self.cells.iter_mut().enumerate() {
                if i != slot && other.position == position {
                    tracing::debug!(
                        "cell {} releases {} to cell {}",
                        other.index,
                        position,
                        index
                    );
                    other.set_position(LayoutPosition::None);
                }
            }
        }
        self.cells[slot].set_position(position);
        Ok(())
    }

    /// Push freshly computed rectangles into the cells.
    ///
    /// A cell whose position has no rectangle is hidden.
    pub fn apply_bounds(&mut self, rects: &IndexMap<LayoutPosition, LayoutRect>) {
        for cell in &mut self.cells {
            match rects.get(&cell.position) {
                Some(rect) if !cell.position.is_none() => {
                    cell.bounds = *rect;
                    cell.visible = true;
                }
                _ => cell.visible = false,
            }
        }
    }

    /// 1-based index of the cell under `point`.
    ///
    /// Falls back to the first visible cell, then to 1, so callers always get
    /// a usable index. Never returns a hidden cell when any cell is visible.
    pub fn index_at_point(&self, point: Vec2) -> usize {
        self.cells
            .iter()
            .find(|c| c.visible && c.bounds.contains(point))
            .or_else(|| self.cells.iter().find(|c| c.visible))
            .map_or(1, |c| c.index)
    }

    /// Edge of a visible cell within [`RESIZE_BORDER_WIDTH`] of `point` whose
    /// opposite side is another visible cell touching it with no gap.
    ///
    /// Cells are checked in index order and edges in top, right, bottom, left
    /// order; the first match wins.
    pub fn resizable_edge_at_point(&self, point: Vec2) -> Option<ResizeEdge> {
        let visible: Vec<LayoutRect> = self
            .cells
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.bounds)
            .collect();

        let near = |value: f32, edge: f32| (value - edge).abs() <= RESIZE_BORDER_WIDTH;
        let same = |a: f32, b: f32| (a - b).abs() <= EDGE_MATCH_TOLERANCE;

        for (i, b) in visible.iter().enumerate() {
            let within_x = point.x >= b.x && point.x <= b.right();
            let within_y = point.y >= b.y && point.y <= b.bottom();
            let others = || {
                visible
                    .iter()
                    .enumerate()
                    .filter(move |(j, _)| *j != i)
                    .map(|(_, r)| *r)
            };

            let edge = if within_x
                && near(point.y, b.y)
                && others().any(|o| same(o.bottom(), b.y))
            {
                Some(ResizeEdge::Top)
            } else if within_y
                && near(point.x, b.right())
                && others().any(|o| same(o.x, b.right()))
            {
                Some(ResizeEdge::Right)
            } else if within_x
                && near(point.y, b.bottom())
                && others().any(|o| same(o.y, b.bottom()))
            {
                Some(ResizeEdge::Bottom)
            } else if within_y
                && near(point.x, b.x)
                && others().any(|o| same(o.right(), b.x))
            {
                Some(ResizeEdge::Left)
            } else {
                None
            };
            if edge.is_some() {
                return edge;
            }
        }
        None
    }
}

/// Positions for cells 1 to 4, or `None` in custom mode.
pub fn positions_for_mode(
    mode: LayoutMode,
    visibility: PanelVisibility,
) -> Option<[LayoutPosition; CELL_COUNT]> {
    use LayoutPosition as P;

    let positions = match mode {
        LayoutMode::Vertical | LayoutMode::Horizontal => {
            let direction = mode.stack_direction()?;
            let (leading, trailing) = match direction {
                SplitDirection::Vertical => (P::Top, P::Bottom),
                SplitDirection::Horizontal => (P::Left, P::Right),
            };
            let (show_leading, show_trailing) = visibility.stack_ends(direction);
            [
                if show_leading { leading } else { P::None },
                P::Center,
                if show_trailing { trailing } else { P::None },
                P::None,
            ]
        }
        LayoutMode::Grid => [P::TopLeft, P::TopRight, P::BottomLeft, P::BottomRight],
        LayoutMode::TopSpan => [P::Top, P::BottomLeft, P::BottomRight, P::None],
        LayoutMode::BottomSpan => [P::TopLeft, P::TopRight, P::Bottom, P::None],
        LayoutMode::LeftSpan => [P::Left, P::TopRight, P::BottomRight, P::None],
        LayoutMode::RightSpan => [P::TopLeft, P::BottomLeft, P::Right, P::None],
        LayoutMode::Custom => return None,
    };
    Some(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(registry: &CellRegistry) -> Vec<LayoutPosition> {
        registry.iter().map(GridCell::position).collect()
    }

    #[test]
    fn test_vertical_assignment_follows_flags() {
        let mut registry = CellRegistry::new();
        registry.assign_positions(LayoutMode::Vertical, PanelVisibility::TOP);
        assert_eq!(
            positions(&registry),
            vec![
                LayoutPosition::Top,
                LayoutPosition::Center,
                LayoutPosition::None,
                LayoutPosition::None
            ]
        );
        assert!(registry.get(1).unwrap().is_visible());
        assert!(!registry.get(3).unwrap().is_visible());
    }

    #[test]
    fn test_horizontal_ignores_vertical_flags() {
        let mut registry = CellRegistry::new();
        registry.assign_positions(
            LayoutMode::Horizontal,
            PanelVisibility::TOP | PanelVisibility::BOTTOM | PanelVisibility::RIGHT,
        );
        assert_eq!(
            positions(&registry),
            vec![
                LayoutPosition::None,
                LayoutPosition::Center,
                LayoutPosition::Right,
                LayoutPosition::None
            ]
        );
    }

    #[test]
    fn test_span_modes_use_three_cells() {
        for mode in [
            LayoutMode::TopSpan,
            LayoutMode::BottomSpan,
            LayoutMode::LeftSpan,
            LayoutMode::RightSpan,
        ] {
            let mut registry = CellRegistry::new();
            registry.assign_positions(mode, PanelVisibility::empty());
            assert_eq!(registry.visible_positions().len(), 3, "{mode}");
            assert_eq!(registry.position(4).unwrap(), LayoutPosition::None);
        }
    }

    #[test]
    fn test_custom_keeps_manual_positions() {
        let mut registry = CellRegistry::new();
        registry.assign_positions(LayoutMode::Grid, PanelVisibility::all());
        registry.set_position(4, LayoutPosition::None).unwrap();
        registry.assign_positions(LayoutMode::Custom, PanelVisibility::all());
        assert_eq!(registry.position(1).unwrap(), LayoutPosition::TopLeft);
        assert!(!registry.get(4).unwrap().is_visible());
    }

    #[test]
    fn test_set_position_releases_previous_owner() {
        let mut registry = CellRegistry::new();
        registry.set_position(1, LayoutPosition::Top).unwrap();
        registry.set_position(2, LayoutPosition::Top).unwrap();
        assert_eq!(registry.position(1).unwrap(), LayoutPosition::None);
        assert_eq!(registry.position(2).unwrap(), LayoutPosition::Top);
        assert_eq!(registry.visible_positions(), vec![LayoutPosition::Top]);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut registry = CellRegistry::new();
        assert_eq!(
            registry.position(0),
            Err(LayoutError::CellIndexOutOfRange { index: 0 })
        );
        assert_eq!(
            registry.set_position(5, LayoutPosition::Top),
            Err(LayoutError::CellIndexOutOfRange { index: 5 })
        );
    }

    fn registry_with(bounds: &[(LayoutPosition, LayoutRect)]) -> CellRegistry {
        let mut registry = CellRegistry::new();
        for (i, (position, _)) in bounds.iter().enumerate() {
            registry.set_position(i + 1, *position).unwrap();
        }
        let rects: IndexMap<_, _> = bounds.iter().copied().collect();
        registry.apply_bounds(&rects);
        registry
    }

    #[test]
    fn test_resizable_edge_needs_touching_neighbor() {
        // Top and Center touch at y = 50 with no gap.
        let registry = registry_with(&[
            (LayoutPosition::Top, LayoutRect::new(0.0, 0.0, 100.0, 50.0)),
            (LayoutPosition::Center, LayoutRect::new(0.0, 50.0, 100.0, 50.0)),
        ]);
        assert_eq!(
            registry.resizable_edge_at_point(Vec2::new(40.0, 47.0)),
            Some(ResizeEdge::Bottom)
        );
        assert_eq!(
            registry.resizable_edge_at_point(Vec2::new(40.0, 53.0)),
            Some(ResizeEdge::Bottom)
        );
        assert_eq!(registry.resizable_edge_at_point(Vec2::new(40.0, 25.0)), None);
        // Outer edge has no neighbor.
        assert_eq!(registry.resizable_edge_at_point(Vec2::new(40.0, 2.0)), None);
    }

    #[test]
    fn test_resizable_edge_horizontal_neighbors() {
        let registry = registry_with(&[
            (LayoutPosition::Left, LayoutRect::new(0.0, 0.0, 30.0, 100.0)),
            (LayoutPosition::Right, LayoutRect::new(30.0, 0.0, 70.0, 100.0)),
        ]);
        assert_eq!(
            registry.resizable_edge_at_point(Vec2::new(28.0, 50.0)),
            Some(ResizeEdge::Right)
        );
    }

    #[test]
    fn test_resizable_edge_ignores_gaps() {
        let registry = registry_with(&[
            (LayoutPosition::Top, LayoutRect::new(0.0, 0.0, 100.0, 49.0)),
            (LayoutPosition::Center, LayoutRect::new(0.0, 51.0, 100.0, 49.0)),
        ]);
        assert_eq!(registry.resizable_edge_at_point(Vec2::new(40.0, 50.0)), None);
    }

    #[test]
    fn test_index_at_point_fallbacks() {
        let mut registry = CellRegistry::new();
        // Nothing visible yet.
        assert_eq!(registry.index_at_point(Vec2::new(1.0, 1.0)), 1);

        registry.assign_positions(LayoutMode::Vertical, PanelVisibility::BOTTOM);
        let mut rects = IndexMap::new();
        rects.insert(LayoutPosition::Center, LayoutRect::new(0.0, 0.0, 100.0, 50.0));
        rects.insert(LayoutPosition::Bottom, LayoutRect::new(0.0, 52.0, 100.0, 48.0));
        registry.apply_bounds(&rects);

        assert_eq!(registry.index_at_point(Vec2::new(10.0, 60.0)), 3);
        // On the splitter gap: first visible cell.
        assert_eq!(registry.index_at_point(Vec2::new(10.0, 51.0)), 2);
    }
}
