//! Layout geometry: rectangles for each position and the splitter strips
//! between them.
//!
//! Everything here is a pure function of [`LayoutInput`]; calling it twice
//! with the same input yields the same output.

use indexmap::IndexMap;
use quadsplit_core::geometry::{Rect, Size};
use quadsplit_core::profiling::profile_function;

use crate::fractions::SplitFractions;
use crate::types::{LayoutMode, LayoutPosition, PanelVisibility, SplitDirection, SplitterRole};

/// Rectangle in container-local pixels.
pub type LayoutRect = Rect<f32>;

/// Rectangles keyed by position, in insertion order.
pub type LayoutRects = IndexMap<LayoutPosition, LayoutRect>;

/// Minimum distance between a split and an edge or another split, as a
/// fraction of the available extent.
pub const MIN_SPACING_RATIO: f32 = 0.05;

/// Everything the geometry engine needs to lay out a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub mode: LayoutMode,
    pub size: Size<f32>,
    pub visibility: PanelVisibility,
    pub fractions: SplitFractions,
    pub splitter_thickness: f32,
    pub border_offset: f32,
}

/// A draggable boundary between two regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    pub rect: LayoutRect,
    /// `Horizontal` splitters are vertical lines that separate left from right.
    pub direction: SplitDirection,
    pub role: SplitterRole,
}

/// Resolved pixel coordinates of the four split lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLines {
    /// Area inside the border.
    pub content: LayoutRect,
    /// x of the primary vertical line.
    pub x: f32,
    /// x of the secondary vertical line.
    pub second_x: f32,
    /// y of the primary horizontal line.
    pub y: f32,
    /// y of the secondary horizontal line.
    pub second_y: f32,
}

impl SplitLines {
    /// Resolve fractions to pixel lines, keeping every line at least 5% of the
    /// available extent away from the edges and from its partner.
    pub fn compute(input: &LayoutInput) -> Self {
        let border = input.border_offset.max(0.0);
        let width = input.size.width.max(0.0);
        let height = input.size.height.max(0.0);
        let available_width = (width - 2.0 * border).max(0.0);
        let available_height = (height - 2.0 * border).max(0.0);
        let f = &input.fractions;

        let (x, second_x) = resolve_axis(
            border,
            available_width,
            f.horizontal(),
            f.second_horizontal(),
        );
        let (y, second_y) = resolve_axis(
            border,
            available_height,
            f.vertical(),
            f.second_vertical(),
        );

        Self {
            content: LayoutRect::new(border, border, available_width, available_height),
            x,
            second_x,
            y,
            second_y,
        }
    }

    /// `(start, end, primary, secondary)` along the axis that `direction` splits.
    fn axis(&self, direction: SplitDirection) -> (f32, f32, f32, f32) {
        match direction {
            SplitDirection::Horizontal => (
                self.content.x,
                self.content.right(),
                self.x,
                self.second_x,
            ),
            SplitDirection::Vertical => (
                self.content.y,
                self.content.bottom(),
                self.y,
                self.second_y,
            ),
        }
    }
}

fn resolve_axis(start: f32, available: f32, primary: f32, secondary: f32) -> (f32, f32) {
    let end = start + available;
    let spacing = (available * MIN_SPACING_RATIO).ceil();
    let first = (start + available * primary)
        .min(end - spacing)
        .max(start + spacing)
        .min(end);
    let second = (start + available * secondary)
        .min(end - spacing)
        .max(first + spacing)
        .min(end);
    (first, second)
}

/// 1-D segments `(offset, length)` of a three-slot stack, for every
/// combination of present slots.
///
/// Gaps of `thickness` are centered on the split lines. The leading slot uses
/// the primary line, the trailing slot the secondary line; with the middle
/// slot absent the primary line separates the remaining two.
fn stack_segments(
    (has_leading, has_middle, has_trailing): (bool, bool, bool),
    (start, end, primary, secondary): (f32, f32, f32, f32),
    thickness: f32,
) -> [Option<(f32, f32)>; 3] {
    let half = thickness / 2.0;
    // Offsets never pass `end`; lengths may go negative and are floored later.
    let before = |split: f32| Some((start, split - half - start));
    let after = |split: f32| {
        let offset = (split + half).min(end);
        Some((offset, end - offset))
    };
    let whole = Some((start, end - start));

    match (has_leading, has_middle, has_trailing) {
        (true, true, true) => {
            let offset = (primary + half).min(end);
            [before(primary), Some((offset, secondary - half - offset)), after(secondary)]
        }
        (true, true, false) => [before(primary), after(primary), None],
        (false, true, true) => [None, before(secondary), after(secondary)],
        (true, false, true) => [before(primary), None, after(primary)],
        (true, false, false) => [whole, None, None],
        (false, true, false) => [None, whole, None],
        (false, false, true) => [None, None, whole],
        (false, false, false) => [None, None, None],
    }
}

/// Which boundaries of a three-slot stack exist.
fn stack_splitters((has_leading, has_middle, has_trailing): (bool, bool, bool)) -> Vec<SplitterRole> {
    let mut roles = Vec::with_capacity(2);
    if has_leading && (has_middle || has_trailing) {
        roles.push(SplitterRole::Primary);
    }
    if has_middle && has_trailing {
        roles.push(SplitterRole::Secondary);
    }
    roles
}

/// Compute the rectangle of every position the mode places.
///
/// Vertical/Horizontal produce one to three rectangles depending on the panel
/// flags; Grid and the span modes produce their fixed quadrant topology;
/// Custom produces every placeable position and leaves selection to the cells.
pub fn calculate_layout_rectangles(input: &LayoutInput) -> LayoutRects {
    profile_function!();

    let lines = SplitLines::compute(input);
    let thickness = input.splitter_thickness.max(0.0);
    let q = Quadrants::compute(&lines, thickness);

    use LayoutPosition as P;
    let placed = match input.mode {
        LayoutMode::Vertical => return stacked_rectangles(input, &lines, SplitDirection::Vertical),
        LayoutMode::Horizontal => {
            return stacked_rectangles(input, &lines, SplitDirection::Horizontal);
        }
        LayoutMode::Grid => vec![
            (P::TopLeft, q.top_left),
            (P::TopRight, q.top_right),
            (P::BottomLeft, q.bottom_left),
            (P::BottomRight, q.bottom_right),
        ],
        LayoutMode::TopSpan => vec![
            (P::Top, q.top),
            (P::BottomLeft, q.bottom_left),
            (P::BottomRight, q.bottom_right),
        ],
        LayoutMode::BottomSpan => vec![
            (P::TopLeft, q.top_left),
            (P::TopRight, q.top_right),
            (P::Bottom, q.bottom),
        ],
        LayoutMode::LeftSpan => vec![
            (P::Left, q.left),
            (P::TopRight, q.top_right),
            (P::BottomRight, q.bottom_right),
        ],
        LayoutMode::RightSpan => vec![
            (P::TopLeft, q.top_left),
            (P::BottomLeft, q.bottom_left),
            (P::Right, q.right),
        ],
        LayoutMode::Custom => vec![
            (P::TopLeft, q.top_left),
            (P::TopRight, q.top_right),
            (P::BottomLeft, q.bottom_left),
            (P::BottomRight, q.bottom_right),
            (P::Top, q.top),
            (P::Bottom, q.bottom),
            (P::Left, q.left),
            (P::Right, q.right),
            (P::Center, lines.content),
        ],
    };
    placed.into_iter().collect()
}

/// Rectangles of a one-axis stack: up to three slots along `direction`.
fn stacked_rectangles(
    input: &LayoutInput,
    lines: &SplitLines,
    direction: SplitDirection,
) -> LayoutRects {
    let c = lines.content;
    let (leading, trailing) = match direction {
        SplitDirection::Vertical => (LayoutPosition::Top, LayoutPosition::Bottom),
        SplitDirection::Horizontal => (LayoutPosition::Left, LayoutPosition::Right),
    };
    let (show_leading, show_trailing) = input.visibility.stack_ends(direction);
    let segments = stack_segments(
        (show_leading, true, show_trailing),
        lines.axis(direction),
        input.splitter_thickness.max(0.0),
    );

    [leading, LayoutPosition::Center, trailing]
        .into_iter()
        .zip(segments)
        .filter_map(|(position, segment)| {
            let (offset, length) = segment?;
            let rect = match direction {
                SplitDirection::Vertical => LayoutRect::non_negative(c.x, offset, c.width, length),
                SplitDirection::Horizontal => {
                    LayoutRect::non_negative(offset, c.y, length, c.height)
                }
            };
            Some((position, rect))
        })
        .collect()
}

/// The eight edge and quadrant rectangles cut by the primary lines.
struct Quadrants {
    top_left: LayoutRect,
    top_right: LayoutRect,
    bottom_left: LayoutRect,
    bottom_right: LayoutRect,
    top: LayoutRect,
    bottom: LayoutRect,
    left: LayoutRect,
    right: LayoutRect,
}

impl Quadrants {
    fn compute(lines: &SplitLines, thickness: f32) -> Self {
        let half = thickness / 2.0;
        let c = lines.content;
        let left_w = lines.x - half - c.x;
        let right_x = (lines.x + half).min(c.right());
        let right_w = c.right() - right_x;
        let top_h = lines.y - half - c.y;
        let bottom_y = (lines.y + half).min(c.bottom());
        let bottom_h = c.bottom() - bottom_y;

        Self {
            top_left: LayoutRect::non_negative(c.x, c.y, left_w, top_h),
            top_right: LayoutRect::non_negative(right_x, c.y, right_w, top_h),
            bottom_left: LayoutRect::non_negative(c.x, bottom_y, left_w, bottom_h),
            bottom_right: LayoutRect::non_negative(right_x, bottom_y, right_w, bottom_h),
            top: LayoutRect::non_negative(c.x, c.y, c.width, top_h),
            bottom: LayoutRect::non_negative(c.x, bottom_y, c.width, bottom_h),
            left: LayoutRect::non_negative(c.x, c.y, left_w, c.height),
            right: LayoutRect::non_negative(right_x, c.y, right_w, c.height),
        }
    }
}

/// Compute the splitter strips, primary before secondary.
///
/// Stacked modes expose zero to two splitters along their axis depending on
/// which panels are shown. All other modes always expose the vertical line
/// (index 0) and the horizontal line (index 1).
pub fn calculate_splitters(input: &LayoutInput) -> Vec<Splitter> {
    profile_function!();

    let lines = SplitLines::compute(input);
    let thickness = input.splitter_thickness.max(0.0);
    let half = thickness / 2.0;
    let c = lines.content;

    // Strips are clipped to the content range along their axis.
    let clip = |at: f32, lo: f32, hi: f32| {
        let from = (at - half).clamp(lo, hi);
        (from, (at + half).clamp(from, hi) - from)
    };
    let strip = |direction: SplitDirection, at: f32| match direction {
        SplitDirection::Horizontal => {
            let (x, width) = clip(at, c.x, c.right());
            LayoutRect::new(x, c.y, width, c.height)
        }
        SplitDirection::Vertical => {
            let (y, height) = clip(at, c.y, c.bottom());
            LayoutRect::new(c.x, y, c.width, height)
        }
    };

    match input.mode.stack_direction() {
        Some(direction) => {
            let (show_leading, show_trailing) = input.visibility.stack_ends(direction);
            let (_, _, primary, secondary) = lines.axis(direction);
            stack_splitters((show_leading, true, show_trailing))
                .into_iter()
                .map(|role| {
                    let at = match role {
                        SplitterRole::Primary => primary,
                        SplitterRole::Secondary => secondary,
                    };
                    Splitter {
                        rect: strip(direction, at),
                        direction,
                        role,
                    }
                })
                .collect()
        }
        None => vec![
            Splitter {
                rect: strip(SplitDirection::Horizontal, lines.x),
                direction: SplitDirection::Horizontal,
                role: SplitterRole::Primary,
            },
            Splitter {
                rect: strip(SplitDirection::Vertical, lines.y),
                direction: SplitDirection::Vertical,
                role: SplitterRole::Primary,
            },
        ],
    }
}

/// Splitter strips without metadata, in the same order as [`calculate_splitters`].
pub fn splitter_rectangles(input: &LayoutInput) -> Vec<LayoutRect> {
    calculate_splitters(input).into_iter().map(|s| s.rect).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(mode: LayoutMode, width: f32, height: f32) -> LayoutInput {
        LayoutInput {
            mode,
            size: Size::new(width, height),
            visibility: PanelVisibility::all(),
            fractions: SplitFractions::default(),
            splitter_thickness: 2.0,
            border_offset: 0.0,
        }
    }

    #[test]
    fn test_resolve_axis_keeps_spacing() {
        // 100px: spacing 5px.
        assert_eq!(resolve_axis(0.0, 100.0, 0.01, 0.02), (5.0, 10.0));
        assert_eq!(resolve_axis(0.0, 100.0, 0.9, 0.99), (90.0, 95.0));
        assert_eq!(resolve_axis(10.0, 100.0, 0.5, 0.75), (60.0, 85.0));
    }

    #[test]
    fn test_stack_segments_all_combinations() {
        let axis = (0.0, 100.0, 25.0, 75.0);
        for mask in 0u8..8 {
            let present = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let segments = stack_segments(present, axis, 2.0);
            let count = segments.iter().flatten().count();
            assert_eq!(count, mask.count_ones() as usize);
            let total: f32 = segments.iter().flatten().map(|(_, len)| len).sum();
            let gaps = count.saturating_sub(1) as f32 * 2.0;
            assert!((total + gaps - 100.0).abs() < 1e-4 || count == 0);
        }
    }

    #[test]
    fn test_stack_splitter_roles() {
        assert_eq!(
            stack_splitters((true, true, true)),
            vec![SplitterRole::Primary, SplitterRole::Secondary]
        );
        assert_eq!(stack_splitters((false, true, true)), vec![SplitterRole::Secondary]);
        assert_eq!(stack_splitters((true, true, false)), vec![SplitterRole::Primary]);
        assert!(stack_splitters((false, true, false)).is_empty());
    }

    #[test]
    fn test_center_only_fills_content() {
        let mut i = input(LayoutMode::Horizontal, 200.0, 100.0);
        i.visibility = PanelVisibility::TOP;
        i.border_offset = 3.0;
        let rects = calculate_layout_rectangles(&i);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[&LayoutPosition::Center], LayoutRect::new(3.0, 3.0, 194.0, 94.0));
        assert!(calculate_splitters(&i).is_empty());
    }

    #[test]
    fn test_custom_produces_every_position() {
        let rects = calculate_layout_rectangles(&input(LayoutMode::Custom, 400.0, 300.0));
        for position in LayoutPosition::PLACED {
            assert!(rects.contains_key(&position), "{position}");
        }
        assert!(!rects.contains_key(&LayoutPosition::None));
    }

    #[test]
    fn test_zero_size_never_negative() {
        for mode in LayoutMode::ALL {
            let mut i = input(mode, 0.0, 0.0);
            i.border_offset = 4.0;
            i.splitter_thickness = 10.0;
            for rect in calculate_layout_rectangles(&i).values() {
                assert!(rect.width >= 0.0 && rect.height >= 0.0, "{mode}: {rect:?}");
            }
        }
    }

    #[test]
    fn test_tiny_container_stays_inside_content() {
        for (mode, width, height) in [
            (LayoutMode::Vertical, 50.0, 2.0),
            (LayoutMode::Horizontal, 2.0, 50.0),
            (LayoutMode::Grid, 2.0, 2.0),
            (LayoutMode::Custom, 3.0, 1.0),
        ] {
            let i = input(mode, width, height);
            let rects = calculate_layout_rectangles(&i);
            let strips = splitter_rectangles(&i);
            for rect in rects.values().chain(&strips) {
                assert!(rect.x >= 0.0 && rect.y >= 0.0, "{mode}: {rect:?}");
                assert!(rect.right() <= width, "{mode}: {rect:?}");
                assert!(rect.bottom() <= height, "{mode}: {rect:?}");
            }
        }
    }
}
