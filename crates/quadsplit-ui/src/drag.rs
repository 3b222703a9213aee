//! Splitter drag sessions.

use quadsplit_core::math::Vec2;

use crate::fractions::SplitFractions;
use crate::geometry::{LayoutRect, Splitter};
use crate::types::{LayoutMode, SplitDirection, SplitterRole};

/// Clamp range for the primary splitter of a stacked mode while dragging.
pub const STACK_PRIMARY_RANGE: (f32, f32) = (0.1, 0.5);
/// Clamp range for the secondary splitter of a stacked mode while dragging.
pub const STACK_SECONDARY_RANGE: (f32, f32) = (0.5, 0.9);
/// Space kept between the two stacked splitters, as `1 - primary - STACK_MIN_SPAN`.
pub const STACK_MIN_SPAN: f32 = 0.1;
/// Clamp range for either splitter of the two-axis modes while dragging.
pub const GRID_RANGE: (f32, f32) = (0.1, 0.9);

/// The fraction a drag drives, captured from the splitter when the drag begins.
///
/// Splitter indices shift when panels are shown or hidden; the target does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragTarget {
    pub direction: SplitDirection,
    pub role: SplitterRole,
}

impl From<&Splitter> for DragTarget {
    fn from(splitter: &Splitter) -> Self {
        Self {
            direction: splitter.direction,
            role: splitter.role,
        }
    }
}

/// State of an active splitter drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Index of the splitter at the time the drag began.
    pub splitter_index: usize,
    /// `None` when the index named no splitter at begin.
    pub target: Option<DragTarget>,
    /// Pointer position at press, if the drag came from a pointer.
    pub start_pos: Option<Vec2>,
    /// Most recent pointer position.
    pub current_pos: Option<Vec2>,
}

impl DragSession {
    /// Get the drag delta from start, when both ends are known.
    pub fn delta(&self) -> Option<Vec2> {
        Some(self.current_pos? - self.start_pos?)
    }
}

/// Idle / Dragging state machine.
#[derive(Debug, Default)]
pub struct DragManager {
    session: Option<DragSession>,
}

impl DragManager {
    /// Create a new drag manager.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Enter the dragging state for `splitter_index`, replacing any previous session.
    pub fn begin(
        &mut self,
        splitter_index: usize,
        target: Option<DragTarget>,
        start_pos: Option<Vec2>,
    ) {
        self.session = Some(DragSession {
            splitter_index,
            target,
            start_pos,
            current_pos: start_pos,
        });
    }

    /// Record a pointer position.
    ///
    /// Returns the active session, or `None` when idle.
    pub fn update(&mut self, pos: Vec2) -> Option<DragSession> {
        let session = self.session.as_mut()?;
        session.current_pos = Some(pos);
        Some(*session)
    }

    /// Leave the dragging state and return the final session.
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// Check if there's an active drag operation.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Index of the splitter being dragged, if any.
    pub fn active_splitter(&self) -> Option<usize> {
        self.session.map(|s| s.splitter_index)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}

/// Move the fraction driven by `target` so its line follows `point`.
///
/// `content` is the area inside the border. Returns true if a fraction changed.
///
/// Stacked modes only react to splitters along their own axis: the primary
/// clamps to [`STACK_PRIMARY_RANGE`], the secondary to
/// [`STACK_SECONDARY_RANGE`] and additionally to `1 - primary - STACK_MIN_SPAN`.
/// A secondary line already beyond that cap is never pushed back against the
/// pointer; it holds until the pointer brings it inside the cap.
/// Two-axis modes clamp whichever primary fraction the splitter drives to
/// [`GRID_RANGE`]. Every value then goes through the coupling setters of
/// [`SplitFractions`].
pub fn apply_drag(
    mode: LayoutMode,
    target: DragTarget,
    point: Vec2,
    content: LayoutRect,
    fractions: &mut SplitFractions,
) -> bool {
    let direction = target.direction;
    let (offset, extent) = match direction {
        SplitDirection::Horizontal => (point.x - content.x, content.width),
        SplitDirection::Vertical => (point.y - content.y, content.height),
    };
    if extent <= 0.0 {
        tracing::warn!("drag ignored: container has no extent along {:?}", direction);
        return false;
    }
    let fraction = offset / extent;

    match mode {
        LayoutMode::Vertical | LayoutMode::Horizontal => {
            if mode.stack_direction() != Some(direction) {
                return false;
            }
            match target.role {
                SplitterRole::Primary => {
                    let value = fraction.clamp(STACK_PRIMARY_RANGE.0, STACK_PRIMARY_RANGE.1);
                    set_primary(fractions, direction, value)
                }
                SplitterRole::Secondary => {
                    let cap = 1.0 - primary_of(fractions, direction) - STACK_MIN_SPAN;
                    let current = secondary_of(fractions, direction);
                    let value = fraction
                        .clamp(STACK_SECONDARY_RANGE.0, STACK_SECONDARY_RANGE.1)
                        .min(cap.max(current));
                    set_secondary(fractions, direction, value)
                }
            }
        }
        LayoutMode::Grid
        | LayoutMode::TopSpan
        | LayoutMode::BottomSpan
        | LayoutMode::LeftSpan
        | LayoutMode::RightSpan
        | LayoutMode::Custom => {
            let value = fraction.clamp(GRID_RANGE.0, GRID_RANGE.1);
            set_primary(fractions, direction, value)
        }
    }
}

fn primary_of(fractions: &SplitFractions, direction: SplitDirection) -> f32 {
    match direction {
        SplitDirection::Horizontal => fractions.horizontal(),
        SplitDirection::Vertical => fractions.vertical(),
    }
}

fn secondary_of(fractions: &SplitFractions, direction: SplitDirection) -> f32 {
    match direction {
        SplitDirection::Horizontal => fractions.second_horizontal(),
        SplitDirection::Vertical => fractions.second_vertical(),
    }
}

fn set_primary(fractions: &mut SplitFractions, direction: SplitDirection, value: f32) -> bool {
    match direction {
        SplitDirection::Horizontal => fractions.set_horizontal(value),
        SplitDirection::Vertical => fractions.set_vertical(value),
    }
}

fn set_secondary(fractions: &mut SplitFractions, direction: SplitDirection, value: f32) -> bool {
    match direction {
        SplitDirection::Horizontal => fractions.set_second_horizontal(value),
        SplitDirection::Vertical => fractions.set_second_vertical(value),
    }
}
