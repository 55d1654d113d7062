//! Release speed measurement and flick classification.
//!
//! A release counts as a flick on an axis only when it is both fast enough
//! (speed above the threshold) and long enough (travel at or above the
//! minimum). The x axis is checked first; only one axis can flick.

use crate::sample::{Axes, Direction};

/// Speed and travel gates a release must pass to register as a flick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlickGate {
    /// px/ms, strict lower bound
    pub threshold: f32,
    /// px, inclusive lower bound on `|distance|`
    pub min_travel_px: f32,
}

impl FlickGate {
    pub const DEFAULT_THRESHOLD: f32 = 0.7;
    pub const DEFAULT_MIN_TRAVEL_PX: f32 = 5.0;

    pub const fn new(threshold: f32, min_travel_px: f32) -> Self {
        Self {
            threshold,
            min_travel_px,
        }
    }

    /// Classify a release.
    ///
    /// `direction` is the last-step direction, not the overall sign of `distance`.
    pub fn classify(
        &self,
        speed: Axes<f32>,
        distance: Axes<f32>,
        direction: Axes<Direction>,
    ) -> Axes<Direction> {
        let mut flick = Axes::<Direction>::default();

        if speed.x > self.threshold {
            if libm::fabsf(distance.x) >= self.min_travel_px {
                flick.x = direction.x;
            }
        } else if speed.y > self.threshold && libm::fabsf(distance.y) >= self.min_travel_px {
            flick.y = direction.y;
        }

        flick
    }
}

impl Default for FlickGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_MIN_TRAVEL_PX)
    }
}

/// Per-axis `|distance| / duration` in px/ms, rounded to two decimals.
///
/// A zero duration yields zero speed on both axes.
pub fn release_speed(distance: Axes<f32>, duration_ms: u64) -> Axes<f32> {
    if duration_ms == 0 {
        return Axes::new(0.0, 0.0);
    }

    let duration = duration_ms as f32;
    Axes::new(
        round_hundredths(libm::fabsf(distance.x) / duration),
        round_hundredths(libm::fabsf(distance.y) / duration),
    )
}

fn round_hundredths(value: f32) -> f32 {
    libm::roundf(value * 100.0) / 100.0
}
