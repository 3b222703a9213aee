//! The layout container the host drives.
//!
//! [`LayoutContainer`] owns the four cells, the splitter fractions and the
//! drag state. The host feeds it a size and pointer positions, and receives
//! [`Invalidation`] notifications through an optional [`LayoutHost`].
//!
//! ```
//! use quadsplit_ui::{LayoutContainer, LayoutConfig, LayoutMode, LayoutPosition};
//! use quadsplit_core::math::Vec2;
//!
//! let mut container = LayoutContainer::with_config(
//!     LayoutConfig::new().with_mode(LayoutMode::Grid).without_border(),
//! );
//! container.set_size(400.0, 400.0);
//!
//! assert_eq!(container.position_for_cell_index(4).unwrap(), LayoutPosition::BottomRight);
//! assert_eq!(container.cell_index_at_point(Vec2::new(300.0, 300.0)), 4);
//! ```

use quadsplit_core::color::Color;
use quadsplit_core::geometry::Size;
use quadsplit_core::math::Vec2;
use quadsplit_core::profiling::profile_scope;

use crate::cell::{CellRegistry, GridCell};
use crate::config::LayoutConfig;
use crate::drag::{DragManager, DragTarget, apply_drag};
use crate::error::{LayoutError, LayoutResult};
use crate::fractions::SplitFractions;
use crate::geometry::{
    LayoutInput, LayoutRect, LayoutRects, SplitLines, Splitter, calculate_layout_rectangles,
    calculate_splitters,
};
use crate::invalidation::{Invalidation, LayoutHost};
use crate::style::{BorderStyle, MIN_SPLITTER_THICKNESS};
use crate::types::{CursorHint, LayoutMode, LayoutPosition, PanelVisibility, ResizeEdge};

/// A rectangular area divided into up to four cells with draggable splitters.
pub struct LayoutContainer {
    mode: LayoutMode,
    size: Size<f32>,
    cells: CellRegistry,
    fractions: SplitFractions,
    splitter_thickness: f32,
    border: BorderStyle,
    visibility: PanelVisibility,
    drag: DragManager,
    host: Option<Box<dyn LayoutHost>>,
    pending: Invalidation,
}

impl std::fmt::Debug for LayoutContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutContainer")
            .field("mode", &self.mode)
            .field("size", &self.size)
            .field("cells", &self.cells)
            .field("fractions", &self.fractions)
            .field("splitter_thickness", &self.splitter_thickness)
            .field("border", &self.border)
            .field("visibility", &self.visibility)
            .field("drag", &self.drag)
            .field("has_host", &self.host.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}

impl Default for LayoutContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutContainer {
    /// Create a container with the default configuration (vertical mode).
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create a container from `config`.
    ///
    /// An invalid splitter thickness falls back to the default.
    pub fn with_config(config: LayoutConfig) -> Self {
        let default = LayoutConfig::default();
        let mut container = Self {
            mode: config.mode,
            size: Size::new(0.0, 0.0),
            cells: CellRegistry::new(),
            fractions: config.fractions,
            splitter_thickness: default.splitter_thickness,
            border: BorderStyle {
                thickness: config.border.thickness.max(0.0),
                ..config.border
            },
            visibility: config.visibility,
            drag: DragManager::new(),
            host: None,
            pending: Invalidation::empty(),
        };
        if let Err(err) = container.set_splitter_thickness(config.splitter_thickness) {
            tracing::warn!("{}; using {}", err, default.splitter_thickness);
        }
        container.cells.assign_positions(container.mode, container.visibility);
        container.pending = Invalidation::empty();
        container
    }

    /// Attach the host that receives invalidation notifications.
    pub fn set_host(&mut self, host: Box<dyn LayoutHost>) {
        self.host = Some(host);
    }

    /// Detach and return the current host.
    pub fn take_host(&mut self) -> Option<Box<dyn LayoutHost>> {
        self.host.take()
    }

    /// Return and clear the flags accumulated since the last call.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::replace(&mut self.pending, Invalidation::empty())
    }

    fn invalidate(&mut self, flags: Invalidation) {
        self.pending |= flags;
        if let Some(host) = self.host.as_mut() {
            host.invalidate(flags);
        }
    }

    // ---- geometry -------------------------------------------------------

    /// Snapshot of the inputs the geometry engine sees.
    pub fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            mode: self.mode,
            size: self.size,
            visibility: self.visibility,
            fractions: self.fractions,
            splitter_thickness: self.splitter_thickness,
            border_offset: self.border.offset(),
        }
    }

    /// Rectangles for every position the current mode places.
    pub fn layout_rectangles(&self) -> LayoutRects {
        calculate_layout_rectangles(&self.layout_input())
    }

    /// Splitters with direction and role, primary first.
    pub fn splitters(&self) -> Vec<Splitter> {
        calculate_splitters(&self.layout_input())
    }

    /// Splitter strips, in hit-test index order.
    pub fn splitter_rectangles(&self) -> Vec<LayoutRect> {
        self.splitters().into_iter().map(|s| s.rect).collect()
    }

    /// Area inside the border.
    pub fn content_rect(&self) -> LayoutRect {
        SplitLines::compute(&self.layout_input()).content
    }

    /// Recompute cell bounds and notify the host.
    ///
    /// Skipped while the container has no area; cells keep their previous bounds.
    fn relayout(&mut self, extra: Invalidation) {
        if self.size.is_empty() {
            tracing::trace!("relayout skipped for empty size {:?}", self.size);
            self.invalidate(extra | Invalidation::PAINT);
            return;
        }
        profile_scope!("relayout");
        let rects = self.layout_rectangles();
        tracing::trace!(mode = %self.mode, rects = rects.len(), "relayout");
        self.cells.apply_bounds(&rects);
        self.invalidate(extra | Invalidation::LAYOUT | Invalidation::PAINT);
    }

    /// Re-derive positions from mode and flags, then relayout.
    fn reassign(&mut self, extra: Invalidation) {
        self.cells.assign_positions(self.mode, self.visibility);
        self.relayout(extra | Invalidation::POSITIONS);
    }

    // ---- properties -----------------------------------------------------

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Switch mode; positions and bounds are recomputed immediately.
    pub fn set_mode(&mut self, mode: LayoutMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!("layout mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.reassign(Invalidation::MODE);
    }

    pub fn size(&self) -> Size<f32> {
        self.size
    }

    /// Resize the container. Negative or NaN extents clamp to zero.
    pub fn set_size(&mut self, width: f32, height: f32) {
        let size = Size::new(width.max(0.0), height.max(0.0));
        if size == self.size {
            return;
        }
        self.size = size;
        self.relayout(Invalidation::empty());
    }

    pub fn splitter_thickness(&self) -> f32 {
        self.splitter_thickness
    }

    /// Set the splitter thickness in pixels (at least 1).
    pub fn set_splitter_thickness(&mut self, thickness: f32) -> LayoutResult<()> {
        if !thickness.is_finite() || thickness < MIN_SPLITTER_THICKNESS {
            return Err(LayoutError::InvalidSplitterThickness(thickness));
        }
        if thickness != self.splitter_thickness {
            self.splitter_thickness = thickness;
            self.relayout(Invalidation::empty());
        }
        Ok(())
    }

    pub fn fractions(&self) -> SplitFractions {
        self.fractions
    }

    fn fractions_changed(&mut self, changed: bool) -> bool {
        if changed {
            self.relayout(Invalidation::empty());
        }
        changed
    }

    /// Primary fraction along x, clamped to `[0.01, 0.9]`.
    ///
    /// Returns true if the layout changed.
    pub fn set_horizontal_fraction(&mut self, value: f32) -> bool {
        let changed = self.fractions.set_horizontal(value);
        self.fractions_changed(changed)
    }

    /// Primary fraction along y, clamped to `[0.01, 0.9]`.
    pub fn set_vertical_fraction(&mut self, value: f32) -> bool {
        let changed = self.fractions.set_vertical(value);
        self.fractions_changed(changed)
    }

    /// Secondary fraction along x, clamped to `[horizontal + 0.05, 0.99]`.
    pub fn set_second_horizontal_fraction(&mut self, value: f32) -> bool {
        let changed = self.fractions.set_second_horizontal(value);
        self.fractions_changed(changed)
    }

    /// Secondary fraction along y, clamped to `[vertical + 0.05, 0.99]`.
    pub fn set_second_vertical_fraction(&mut self, value: f32) -> bool {
        let changed = self.fractions.set_second_vertical(value);
        self.fractions_changed(changed)
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    /// Show or hide optional panels.
    ///
    /// Flags only matter in the mode they belong to; changing an inactive
    /// flag is recorded without relayout.
    pub fn set_panel_visible(&mut self, panels: PanelVisibility, visible: bool) {
        let mut next = self.visibility;
        next.set(panels, visible);
        if next == self.visibility {
            return;
        }
        let effective = PanelVisibility::effective_for(self.mode);
        let touched_effective = (next ^ self.visibility).intersects(effective);
        self.visibility = next;
        if touched_effective {
            self.reassign(Invalidation::empty());
        }
    }

    pub fn show_top(&self) -> bool {
        self.visibility.contains(PanelVisibility::TOP)
    }

    pub fn set_show_top(&mut self, visible: bool) {
        self.set_panel_visible(PanelVisibility::TOP, visible);
    }

    pub fn show_bottom(&self) -> bool {
        self.visibility.contains(PanelVisibility::BOTTOM)
    }

    pub fn set_show_bottom(&mut self, visible: bool) {
        self.set_panel_visible(PanelVisibility::BOTTOM, visible);
    }

    pub fn show_left(&self) -> bool {
        self.visibility.contains(PanelVisibility::LEFT)
    }

    pub fn set_show_left(&mut self, visible: bool) {
        self.set_panel_visible(PanelVisibility::LEFT, visible);
    }

    pub fn show_right(&self) -> bool {
        self.visibility.contains(PanelVisibility::RIGHT)
    }

    pub fn set_show_right(&mut self, visible: bool) {
        self.set_panel_visible(PanelVisibility::RIGHT, visible);
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    fn update_border(&mut self, border: BorderStyle) {
        if border == self.border {
            return;
        }
        let offset_changed = border.offset() != self.border.offset();
        self.border = border;
        if offset_changed {
            self.relayout(Invalidation::empty());
        } else {
            self.invalidate(Invalidation::PAINT);
        }
    }

    pub fn set_border_visible(&mut self, visible: bool) {
        self.update_border(BorderStyle {
            visible,
            ..self.border
        });
    }

    /// Border thickness in pixels; negative values clamp to zero.
    pub fn set_border_thickness(&mut self, thickness: f32) {
        self.update_border(BorderStyle {
            thickness: thickness.max(0.0),
            ..self.border
        });
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.update_border(BorderStyle {
            color,
            ..self.border
        });
    }

    // ---- cells ----------------------------------------------------------

    pub fn cells(&self) -> &[GridCell] {
        self.cells.as_slice()
    }

    /// Cell by 1-based index.
    pub fn cell(&self, index: usize) -> LayoutResult<&GridCell> {
        self.cells.get(index)
    }

    /// Position of the cell at 1-based `index`.
    pub fn position_for_cell_index(&self, index: usize) -> LayoutResult<LayoutPosition> {
        self.cells.position(index)
    }

    /// Assign a position manually. Only allowed in [`LayoutMode::Custom`].
    pub fn set_position_for_cell_index(
        &mut self,
        index: usize,
        position: LayoutPosition,
    ) -> LayoutResult<()> {
        self.cells.get(index)?;
        if self.mode != LayoutMode::Custom {
            return Err(LayoutError::NotCustomMode { mode: self.mode });
        }
        tracing::debug!("cell {} -> {}", index, position);
        self.cells.set_position(index, position)?;
        self.relayout(Invalidation::POSITIONS);
        Ok(())
    }

    /// 1-based index of the visible cell under `point`, see [`CellRegistry::index_at_point`].
    pub fn cell_index_at_point(&self, point: Vec2) -> usize {
        self.cells.index_at_point(point)
    }

    pub fn cell_at_point(&self, point: Vec2) -> &GridCell {
        let index = self.cell_index_at_point(point);
        &self.cells.as_slice()[index - 1]
    }

    /// Edge of a visible cell near `point` that another visible cell shares,
    /// see [`CellRegistry::resizable_edge_at_point`].
    pub fn resizable_edge_at_point(&self, point: Vec2) -> Option<ResizeEdge> {
        self.cells.resizable_edge_at_point(point)
    }

    // ---- splitters and dragging ----------------------------------------

    /// Index of the splitter under `point`.
    ///
    /// Splitters are checked last to first, so where two overlap the
    /// higher index wins.
    pub fn splitter_index_at_point(&self, point: Vec2) -> Option<usize> {
        self.splitters()
            .iter()
            .rposition(|s| s.rect.contains(point))
    }

    /// Cursor to show for `point`: a resize cursor over a splitter.
    pub fn cursor_at_point(&self, point: Vec2) -> CursorHint {
        let splitters = self.splitters();
        match splitters.iter().rposition(|s| s.rect.contains(point)) {
            Some(i) if splitters[i].rect.is_wide() => CursorHint::ResizeRow,
            Some(_) => CursorHint::ResizeColumn,
            None => CursorHint::Default,
        }
    }

    /// Enter the dragging state for splitter `index`.
    ///
    /// The splitter's direction and role are captured now. If `index` names
    /// no splitter, or the captured splitter disappears before an update,
    /// the update is ignored.
    pub fn begin_drag(&mut self, index: usize) {
        tracing::debug!("splitter drag begin: {}", index);
        let target = self.drag_target(index);
        self.drag.begin(index, target, None);
    }

    fn drag_target(&self, index: usize) -> Option<DragTarget> {
        self.splitters().get(index).map(DragTarget::from)
    }

    /// Move the active splitter to follow `point`.
    ///
    /// Returns true if a fraction changed. An update that changes a fraction
    /// relayouts; one that leaves the fractions as they are (clamped, or
    /// ignored by the mode) still notifies the host with [`Invalidation::PAINT`].
    pub fn update_drag(&mut self, point: Vec2) -> bool {
        let Some(session) = self.drag.update(point) else {
            tracing::warn!("drag update without an active drag");
            return false;
        };
        let Some(target) = session.target else {
            tracing::trace!("drag update for splitter {} ignored", session.splitter_index);
            return false;
        };
        if !self.splitters().iter().any(|s| DragTarget::from(s) == target) {
            tracing::trace!(?target, "drag update ignored, splitter no longer present");
            return false;
        }
        let content = self.content_rect();
        let changed = apply_drag(self.mode, target, point, content, &mut self.fractions);
        tracing::trace!(?point, changed, "drag update");
        if !changed {
            self.invalidate(Invalidation::PAINT);
        }
        self.fractions_changed(changed)
    }

    /// Leave the dragging state.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.drag.end() {
            tracing::debug!(
                "splitter drag end: {} (delta {:?})",
                session.splitter_index,
                session.delta()
            );
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn active_splitter(&self) -> Option<usize> {
        self.drag.active_splitter()
    }

    /// Primary button pressed. Starts a drag if `point` is over a splitter.
    ///
    /// Returns true if a drag started.
    pub fn pointer_down(&mut self, point: Vec2) -> bool {
        match self.splitter_index_at_point(point) {
            Some(index) => {
                tracing::debug!("splitter drag begin: {} at {:?}", index, point);
                let target = self.drag_target(index);
                self.drag.begin(index, target, Some(point));
                true
            }
            None => false,
        }
    }

    /// Pointer moved. Updates the active drag, if any, and returns the cursor to show.
    pub fn pointer_move(&mut self, point: Vec2) -> CursorHint {
        if self.drag.is_dragging() {
            self.update_drag(point);
        }
        self.cursor_at_point(point)
    }

    /// Primary button released.
    pub fn pointer_up(&mut self) {
        self.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(width: f32, height: f32) -> LayoutContainer {
        let mut c = LayoutContainer::with_config(LayoutConfig::new().without_border());
        c.set_size(width, height);
        c
    }

    #[test]
    fn test_new_container_defaults() {
        let c = LayoutContainer::new();
        assert_eq!(c.mode(), LayoutMode::Vertical);
        assert_eq!(c.splitter_thickness(), 2.0);
        assert_eq!(c.position_for_cell_index(1).unwrap(), LayoutPosition::Top);
        assert_eq!(c.position_for_cell_index(4).unwrap(), LayoutPosition::None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_invalid_thickness_in_config_falls_back() {
        let c = LayoutContainer::with_config(LayoutConfig::new().with_splitter_thickness(0.5));
        assert_eq!(c.splitter_thickness(), 2.0);
    }

    #[test]
    fn test_set_splitter_thickness_rejects_thin() {
        let mut c = vertical(100.0, 100.0);
        assert_eq!(
            c.set_splitter_thickness(0.0),
            Err(LayoutError::InvalidSplitterThickness(0.0))
        );
        assert!(c.set_splitter_thickness(6.0).is_ok());
        assert_eq!(c.splitter_thickness(), 6.0);
    }

    #[test]
    fn test_empty_size_keeps_bounds() {
        let mut c = vertical(300.0, 200.0);
        let before = c.cell(2).unwrap().bounds();
        c.set_size(0.0, 0.0);
        assert_eq!(c.cell(2).unwrap().bounds(), before);
    }

    #[test]
    fn test_inactive_flag_does_not_relayout() {
        let mut c = vertical(300.0, 200.0);
        c.take_invalidation();
        c.set_show_left(false);
        assert!(!c.show_left());
        assert!(c.take_invalidation().is_empty());

        c.set_show_top(false);
        let flags = c.take_invalidation();
        assert!(flags.contains(Invalidation::POSITIONS | Invalidation::LAYOUT));
        assert_eq!(c.position_for_cell_index(1).unwrap(), LayoutPosition::None);
    }

    #[test]
    fn test_border_color_is_paint_only() {
        let mut c = vertical(300.0, 200.0);
        c.take_invalidation();
        c.set_border_color(Color::BLACK);
        assert!(c.take_invalidation().is_paint_only());

        c.set_border_visible(true);
        assert!(c.take_invalidation().needs_layout());
        assert_eq!(c.content_rect(), LayoutRect::new(1.0, 1.0, 298.0, 198.0));
    }

    #[test]
    fn test_update_without_drag_is_ignored() {
        let mut c = vertical(300.0, 200.0);
        assert!(!c.update_drag(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_clamped_drag_update_requests_paint() {
        let mut c = vertical(300.0, 200.0);
        c.begin_drag(0);
        assert!(c.update_drag(Vec2::new(150.0, 190.0)));
        assert!(c.take_invalidation().needs_layout());

        // Already at the 0.5 clamp.
        assert!(!c.update_drag(Vec2::new(150.0, 195.0)));
        assert_eq!(c.take_invalidation(), Invalidation::PAINT);
        c.end_drag();
    }

    #[test]
    fn test_stale_splitter_index_is_ignored() {
        let mut c = vertical(300.0, 200.0);
        c.begin_drag(5);
        assert!(c.is_dragging());
        assert!(!c.update_drag(Vec2::new(10.0, 10.0)));
        c.end_drag();
        assert_eq!(c.active_splitter(), None);
    }
}
