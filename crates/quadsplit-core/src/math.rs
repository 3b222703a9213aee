/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// Pointer coordinates handed to the layout container are [`Vec2`] values in
/// the container's local pixel space (origin at the top-left corner).
///
/// # Examples
///
/// ```
/// use quadsplit_core::math::Vec2;
///
/// let press = Vec2::new(10.0, 20.0);
/// let release = Vec2::new(14.0, 20.0);
/// assert_eq!((release - press).length(), 4.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

/// Convert a `mint` point (as produced by most windowing crates) into a [`Vec2`].
#[inline]
pub fn vec2_from_mint(point: mint::Point2<f32>) -> Vec2 {
    Vec2::new(point.x, point.y)
}
