#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect { x, y, width, height }
    }
}

impl Rect<f32> {
    pub const ZERO: Rect<f32> = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Build a rect, clamping negative or NaN extents to zero.
    pub fn non_negative(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom edges are not.
    pub fn contains(&self, point: glam::Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns true if the rect is wider than it is tall.
    pub fn is_wide(&self) -> bool {
        self.width > self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<f32> {
    /// Returns true if either extent is zero, negative or NaN.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl<T> From<mint::Vector2<T>> for Size<T> {
    fn from(v: mint::Vector2<T>) -> Self {
        Size {
            width: v.x,
            height: v.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0.0f32, 10.0).is_empty());
        assert!(Size::new(10.0f32, -1.0).is_empty());
        assert!(Size::new(f32::NAN, 10.0).is_empty());
        assert!(!Size::new(1.0f32, 1.0).is_empty());
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(rect.contains(glam::Vec2::new(10.0, 10.0)));
        assert!(rect.contains(glam::Vec2::new(29.9, 14.9)));
        assert!(!rect.contains(glam::Vec2::new(30.0, 12.0)));
        assert!(!rect.contains(glam::Vec2::new(15.0, 15.0)));
        assert!(rect.is_wide());
    }

    #[test]
    fn test_non_negative_clamps_extents() {
        let rect = Rect::non_negative(5.0, 5.0, -3.0, f32::NAN);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn test_mint_conversions() {
        let size: Size<u32> = mint::Vector2 { x: 640, y: 480 }.into();
        assert_eq!(size, Size::new(640, 480));
    }
}
