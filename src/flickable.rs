use crate::config::{Config, ConfigError, Dimensions};
use crate::observer::{SegmentChange, SegmentObserver};
use crate::sample::PointerSample;
use crate::segment::{DragUpdate, Resolution, SegmentController};
use crate::state::SequenceError;
use crate::tracker::{GestureState, GestureTracker};

/// One flickable element: a tracker, a controller and the active gesture.
///
/// Feed it press, move and release samples in order. A new press always
/// starts from scratch, whatever happened to the previous lifecycle.
pub struct Flickable<O = ()> {
    tracker: GestureTracker,
    controller: SegmentController<O>,
    gesture: Option<GestureState>,
}

impl Flickable<()> {
    pub fn new(config: Config, dimensions: Dimensions) -> Result<Self, ConfigError> {
        Self::with_observer(config, dimensions, ())
    }
}

impl<O> Flickable<O>
where
    O: SegmentObserver,
{
    pub fn with_observer(config: Config, dimensions: Dimensions, observer: O) -> Result<Self, ConfigError> {
        let controller = SegmentController::from_config(&config, dimensions, observer)?;

        log::debug!(
            "flickable created: {} segments of {}px on {:?}",
            controller.segment_count(),
            controller.geometry().segment_size_px,
            controller.geometry().axis
        );

        Ok(Self {
            tracker: GestureTracker::new(config.flick_gate()),
            controller,
            gesture: None,
        })
    }

    pub fn controller(&self) -> &SegmentController<O> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SegmentController<O> {
        &mut self.controller
    }

    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    pub fn current_segment(&self) -> usize {
        self.controller.current_segment()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn press(&mut self, sample: PointerSample) {
        if self.gesture.is_some() {
            log::warn!("press while a gesture is active, discarding it");
        }

        self.gesture = Some(self.tracker.begin(sample));
        self.controller.on_drag_start();
    }

    pub fn drag(&mut self, sample: PointerSample) -> Result<DragUpdate, SequenceError> {
        let gesture = self.gesture.as_mut().ok_or(SequenceError::NotDragging)?;

        self.tracker.update(gesture, sample)?;
        self.controller.on_drag_move(gesture)
    }

    pub fn release(&mut self, sample: PointerSample) -> Result<Resolution, SequenceError> {
        let mut gesture = self.gesture.take().ok_or(SequenceError::NotDragging)?;

        self.tracker.end(&mut gesture, sample)?;
        self.controller.on_drag_end(&gesture)
    }

    /// Programmatic jump; drops any gesture in progress.
    pub fn go_to_segment(&mut self, segment: isize) -> SegmentChange {
        self.gesture = None;
        self.controller.go_to_segment(segment)
    }

    pub fn next_segment(&mut self) -> SegmentChange {
        self.gesture = None;
        self.controller.next_segment()
    }

    pub fn prev_segment(&mut self) -> SegmentChange {
        self.gesture = None;
        self.controller.prev_segment()
    }
}
