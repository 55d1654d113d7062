//! Pointer samples and per-axis value types.

use num_traits::AsPrimitive;

/// Axis of motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One normalized touch-contact reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: u64,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }

    /// Build a sample from raw controller coordinates of any primitive type.
    pub fn from_raw<T>(x: T, y: T, timestamp_ms: u64) -> Self
    where
        T: AsPrimitive<f32>,
    {
        Self::new(x.as_(), y.as_(), timestamp_ms)
    }

    pub fn position(&self) -> Axes<f32> {
        Axes::new(self.x, self.y)
    }
}

/// A value per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Axes<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl Axes<f32> {
    pub(crate) fn sub(self, other: Axes<f32>) -> Axes<f32> {
        Axes::new(self.x - other.x, self.y - other.y)
    }
}

/// Sign of a one-step displacement along an axis.
///
/// `Negative` is left/up, `Positive` is right/down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Negative,
    #[default]
    Still,
    Positive,
}

impl Direction {
    /// Sign of `delta`, with zero mapping to `Still`.
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Direction::Positive
        } else if delta < 0.0 {
            Direction::Negative
        } else {
            Direction::Still
        }
    }

    pub const fn signum(self) -> i8 {
        match self {
            Direction::Negative => -1,
            Direction::Still => 0,
            Direction::Positive => 1,
        }
    }

    pub const fn is_still(self) -> bool {
        matches!(self, Direction::Still)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_delta() {
        assert_eq!(Direction::from_delta(3.5), Direction::Positive);
        assert_eq!(Direction::from_delta(-0.1), Direction::Negative);
        assert_eq!(Direction::from_delta(0.0), Direction::Still);
        assert_eq!(Direction::from_delta(-0.0), Direction::Still);
    }

    #[test]
    fn direction_signum() {
        assert_eq!(Direction::Negative.signum(), -1);
        assert_eq!(Direction::Still.signum(), 0);
        assert_eq!(Direction::Positive.signum(), 1);
    }

    #[test]
    fn from_raw_converts_integer_coordinates() {
        let sample = PointerSample::from_raw(120_u16, 48_u16, 7);
        assert_eq!(sample, PointerSample::new(120.0, 48.0, 7));
    }

    #[test]
    fn axes_get_selects_component() {
        let axes = Axes::new(1, 2);
        assert_eq!(axes.get(Axis::X), 1);
        assert_eq!(axes.get(Axis::Y), 2);
    }
}
