//! Fractional splitter positions.
//!
//! Splits are stored as fractions of the available extent so the layout
//! survives resizing without re-specifying pixel positions.

/// Lower bound for a primary fraction.
pub const PRIMARY_MIN: f32 = 0.01;
/// Upper bound for a primary fraction.
pub const PRIMARY_MAX: f32 = 0.9;
/// Upper bound for a secondary fraction.
pub const SECONDARY_MAX: f32 = 0.99;
/// Minimum distance a secondary fraction keeps ahead of its primary.
pub const MIN_GAP: f32 = 0.05;
/// Changes smaller than this are ignored.
pub const CHANGE_EPSILON: f32 = 0.001;

/// The four splitter fractions of a container.
///
/// `horizontal` fractions position vertical separator lines along the x axis,
/// `vertical` fractions position horizontal separator lines along the y axis.
/// For both axes `second_* >= primary + MIN_GAP` holds after every setter call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitFractions {
    horizontal: f32,
    vertical: f32,
    second_horizontal: f32,
    second_vertical: f32,
}

impl Default for SplitFractions {
    fn default() -> Self {
        Self {
            horizontal: 0.25,
            vertical: 0.25,
            second_horizontal: 0.75,
            second_vertical: 0.75,
        }
    }
}

impl SplitFractions {
    /// Build from raw values, applying the same clamping as the setters.
    ///
    /// Primaries are applied first so the secondaries clamp against them.
    pub fn new(horizontal: f32, vertical: f32, second_horizontal: f32, second_vertical: f32) -> Self {
        let mut fractions = Self::default();
        fractions.set_horizontal(horizontal);
        fractions.set_vertical(vertical);
        fractions.set_second_horizontal(second_horizontal);
        fractions.set_second_vertical(second_vertical);
        fractions
    }

    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn second_horizontal(&self) -> f32 {
        self.second_horizontal
    }

    pub fn second_vertical(&self) -> f32 {
        self.second_vertical
    }

    /// Set the primary horizontal fraction. Returns true if anything changed.
    pub fn set_horizontal(&mut self, value: f32) -> bool {
        set_primary(&mut self.horizontal, &mut self.second_horizontal, value)
    }

    /// Set the primary vertical fraction. Returns true if anything changed.
    pub fn set_vertical(&mut self, value: f32) -> bool {
        set_primary(&mut self.vertical, &mut self.second_vertical, value)
    }

    /// Set the secondary horizontal fraction. Returns true if it changed.
    pub fn set_second_horizontal(&mut self, value: f32) -> bool {
        set_secondary(self.horizontal, &mut self.second_horizontal, value)
    }

    /// Set the secondary vertical fraction. Returns true if it changed.
    pub fn set_second_vertical(&mut self, value: f32) -> bool {
        set_secondary(self.vertical, &mut self.second_vertical, value)
    }
}

fn set_primary(primary: &mut f32, secondary: &mut f32, value: f32) -> bool {
    if !value.is_finite() {
        tracing::warn!("ignoring non-finite splitter fraction {}", value);
        return false;
    }
    let value = value.clamp(PRIMARY_MIN, PRIMARY_MAX);
    if (*primary - value).abs() <= CHANGE_EPSILON {
        return false;
    }
    *primary = value;
    if *secondary < value + MIN_GAP {
        *secondary = value + MIN_GAP;
    }
    true
}

fn set_secondary(primary: f32, secondary: &mut f32, value: f32) -> bool {
    if !value.is_finite() {
        tracing::warn!("ignoring non-finite splitter fraction {}", value);
        return false;
    }
    let value = value.clamp(primary + MIN_GAP, SECONDARY_MAX);
    if (*secondary - value).abs() <= CHANGE_EPSILON {
        return false;
    }
    *secondary = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_coupled(f: &SplitFractions) {
        assert!(f.second_horizontal() >= f.horizontal() + MIN_GAP);
        assert!(f.second_vertical() >= f.vertical() + MIN_GAP);
    }

    #[test]
    fn test_primary_clamps() {
        let mut f = SplitFractions::default();
        assert!(f.set_vertical(2.0));
        assert_eq!(f.vertical(), PRIMARY_MAX);
        assert!(f.set_vertical(-1.0));
        assert_eq!(f.vertical(), PRIMARY_MIN);
    }

    #[test]
    fn test_primary_pushes_secondary() {
        let mut f = SplitFractions::default();
        f.set_horizontal(0.8);
        assert_eq!(f.second_horizontal(), 0.8 + MIN_GAP);
        assert_coupled(&f);
    }

    #[test]
    fn test_secondary_clamps_against_primary() {
        let mut f = SplitFractions::default();
        f.set_second_vertical(0.1);
        assert_eq!(f.second_vertical(), f.vertical() + MIN_GAP);
        f.set_second_vertical(5.0);
        assert_eq!(f.second_vertical(), SECONDARY_MAX);
    }

    #[test]
    fn test_tiny_changes_are_ignored() {
        let mut f = SplitFractions::default();
        assert!(!f.set_horizontal(0.2505));
        assert_eq!(f.horizontal(), 0.25);
        assert!(!f.set_second_horizontal(f32::NAN));
    }

    #[test]
    fn test_coupling_holds_for_setter_sequences() {
        let mut f = SplitFractions::default();
        let values = [0.9, 0.02, 0.5, 0.99, 0.0, 0.87, 0.3, 1.5, 0.89];
        for (i, v) in values.iter().enumerate() {
            match i % 4 {
                0 => f.set_horizontal(*v),
                1 => f.set_second_horizontal(*v),
                2 => f.set_vertical(*v),
                _ => f.set_second_vertical(*v),
            };
            assert_coupled(&f);
        }
    }

    #[test]
    fn test_new_clamps() {
        let f = SplitFractions::new(0.25, 0.25, 0.2, 0.75);
        assert_eq!(f.second_horizontal(), 0.25 + MIN_GAP);
        assert_eq!(f.second_vertical(), 0.75);
    }
}
