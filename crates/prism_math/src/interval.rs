/// A scalar range used to validate ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Returns true if x is within (min, max] (open below, closed above).
    pub fn contains_above_min(&self, x: f32) -> bool {
        self.min < x && x <= self.max
    }

    /// The unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));
    }

    #[test]
    fn test_interval_half_open() {
        let interval = Interval::new(0.0, 1e4);

        assert!(!interval.contains_above_min(0.0));
        assert!(interval.contains_above_min(1e-6));
        assert!(interval.contains_above_min(1e4));
        assert!(!interval.contains_above_min(1e4 + 1.0));
    }

    #[test]
    fn test_unit_interval() {
        assert!(Interval::UNIT.contains(0.0));
        assert!(Interval::UNIT.contains(1.0));
        assert!(!Interval::UNIT.contains(1.0 + 1e-6));
        assert!(!Interval::UNIT.contains(f32::NAN));
    }
}
