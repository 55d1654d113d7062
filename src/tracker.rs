//! Per-lifecycle touch tracking.
//!
//! A [`GestureState`] is created fresh on every press and carried explicitly
//! through the move and release steps. Nothing is shared between lifecycles.

use crate::flick::{FlickGate, release_speed};
use crate::sample::{Axes, Direction, PointerSample};
use crate::state::SequenceError;

/// Values computed once the contact is lifted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub duration_ms: u64,
    /// px/ms, absolute, rounded to two decimals
    pub speed: Axes<f32>,
    pub flick: Axes<Direction>,
}

impl Release {
    pub fn is_flick(&self) -> bool {
        !self.flick.x.is_still() || !self.flick.y.is_still()
    }
}

/// Accumulated data for one press -> move* -> release lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub start: PointerSample,
    pub previous: Axes<f32>,
    /// Signed displacement from `start` to the latest sample.
    pub distance: Axes<f32>,
    /// Sign of the last step only.
    pub direction: Axes<Direction>,
    /// `None` until the release step.
    pub release: Option<Release>,
}

impl GestureState {
    pub fn is_released(&self) -> bool {
        self.release.is_some()
    }

    fn step(&mut self, sample: PointerSample) {
        let position = sample.position();
        let step = position.sub(self.previous);

        self.distance = position.sub(self.start.position());
        self.direction = Axes::new(Direction::from_delta(step.x), Direction::from_delta(step.y));
        self.previous = position;
    }
}

/// Turns a stream of samples into gesture measurements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureTracker {
    gate: FlickGate,
}

impl GestureTracker {
    pub const fn new(gate: FlickGate) -> Self {
        Self { gate }
    }

    pub fn gate(&self) -> &FlickGate {
        &self.gate
    }

    /// Start a lifecycle. Any sample is a valid start.
    pub fn begin(&self, sample: PointerSample) -> GestureState {
        log::debug!("touch start at ({}, {})", sample.x, sample.y);

        GestureState {
            start: sample,
            previous: sample.position(),
            distance: Axes::default(),
            direction: Axes::default(),
            release: None,
        }
    }

    /// Fold a move sample into the gesture.
    ///
    /// Timestamps must not decrease; that is left to the caller.
    pub fn update(&self, state: &mut GestureState, sample: PointerSample) -> Result<(), SequenceError> {
        if state.is_released() {
            return Err(SequenceError::AlreadyReleased);
        }

        state.step(sample);

        log::trace!(
            "touch move dist=({}, {}) dir=({}, {})",
            state.distance.x,
            state.distance.y,
            state.direction.x.signum(),
            state.direction.y.signum()
        );

        Ok(())
    }

    /// Fold the release sample in and classify the gesture.
    pub fn end(&self, state: &mut GestureState, sample: PointerSample) -> Result<Release, SequenceError> {
        self.update(state, sample)?;

        let duration_ms = sample.timestamp_ms.saturating_sub(state.start.timestamp_ms);
        let speed = release_speed(state.distance, duration_ms);
        let flick = self.gate.classify(speed, state.distance, state.direction);

        let release = Release {
            duration_ms,
            speed,
            flick,
        };
        state.release = Some(release);

        log::debug!(
            "touch end after {}ms speed=({}, {}) flick=({}, {})",
            duration_ms,
            speed.x,
            speed.y,
            flick.x.signum(),
            flick.y.signum()
        );

        Ok(release)
    }
}
