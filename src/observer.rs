//! Application-facing notifications.

/// What settled a segment transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Drag,
    Flick,
    Programmatic,
}

/// A settled transition. `previous == current` is still reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentChange {
    pub previous: usize,
    pub current: usize,
    pub cause: ChangeCause,
}

impl SegmentChange {
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// Screen direction of a flick that moved the controller.
///
/// `Left` and `Up` advance to the next segment, `Right` and `Down` go back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Receives segment notifications from a controller.
///
/// Both methods default to doing nothing; `()` is the no-op observer.
pub trait SegmentObserver {
    fn on_segment_change(&mut self, _change: SegmentChange) {}

    /// Called before the matching `on_segment_change` of a flick transition.
    fn on_flick(&mut self, _direction: FlickDirection) {}
}

impl SegmentObserver for () {}

impl<O: SegmentObserver + ?Sized> SegmentObserver for &mut O {
    fn on_segment_change(&mut self, change: SegmentChange) {
        (**self).on_segment_change(change);
    }

    fn on_flick(&mut self, direction: FlickDirection) {
        (**self).on_flick(direction);
    }
}
