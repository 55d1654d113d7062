/// Call made outside the expected gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Move or release with no active drag.
    NotDragging,
    /// Update or release of a gesture that has already been released.
    AlreadyReleased,
    /// Resolution requested for a gesture whose release step never ran.
    NotReleased,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::NotDragging => write!(f, "no drag in progress"),
            SequenceError::AlreadyReleased => write!(f, "gesture has already been released"),
            SequenceError::NotReleased => write!(f, "gesture has not been released"),
        }
    }
}

impl core::error::Error for SequenceError {}

/// Controller lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Resolving,
}

/// Mutable segment state owned by a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentState {
    pub current_segment: usize,
    /// Offset at the start of the active drag.
    pub anchor_offset_px: f32,
    /// Offset currently shown; equals the anchor when idle.
    pub live_offset_px: f32,
    pub phase: Phase,
}

impl SegmentState {
    pub(crate) fn resting(segment: usize, offset_px: f32) -> Self {
        Self {
            current_segment: segment,
            anchor_offset_px: offset_px,
            live_offset_px: offset_px,
            phase: Phase::Idle,
        }
    }
}
