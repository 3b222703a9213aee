//! Change notifications sent from the container to its host.

use bitflags::bitflags;

bitflags! {
    /// What changed since the host last redrew.
    ///
    /// These flags allow the host to skip work: a border color change only
    /// needs a repaint, a fraction change needs new cell bounds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Cell bounds were recomputed; child widgets must be moved.
        const LAYOUT    = 0b0001;
        /// Something visible changed; the container must be repainted.
        const PAINT     = 0b0010;
        /// Cell positions or visibility were reassigned.
        const POSITIONS = 0b0100;
        /// The layout mode changed.
        const MODE      = 0b1000;
    }
}

impl Invalidation {
    /// Returns true if child widgets need new bounds.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.intersects(Self::LAYOUT | Self::POSITIONS | Self::MODE)
    }

    /// Returns true if only paint-level properties changed.
    #[inline]
    pub fn is_paint_only(&self) -> bool {
        !self.is_empty() && !self.needs_layout()
    }
}

/// Sink for relayout/redraw requests.
///
/// The container calls [`LayoutHost::invalidate`] synchronously after every
/// mutation. Closures taking an [`Invalidation`] implement this trait.
pub trait LayoutHost {
    fn invalidate(&mut self, flags: Invalidation);
}

impl<F> LayoutHost for F
where
    F: FnMut(Invalidation),
{
    fn invalidate(&mut self, flags: Invalidation) {
        self(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_only() {
        assert!(Invalidation::PAINT.is_paint_only());
        assert!(!(Invalidation::PAINT | Invalidation::LAYOUT).is_paint_only());
        assert!(!Invalidation::empty().is_paint_only());
        assert!(Invalidation::MODE.needs_layout());
    }

    #[test]
    fn test_closure_host() {
        let mut seen = Invalidation::empty();
        {
            let mut host = |flags: Invalidation| seen |= flags;
            host.invalidate(Invalidation::LAYOUT);
            host.invalidate(Invalidation::PAINT);
        }
        assert_eq!(seen, Invalidation::LAYOUT | Invalidation::PAINT);
    }
}
