use crate::config::{Config, ConfigError, Dimensions, SegmentGeometry};
#[cfg(feature = "scroll-lock")]
use crate::flick::FlickGate;
use crate::observer::{ChangeCause, FlickDirection, SegmentChange, SegmentObserver};
use crate::sample::{Axis, Direction};
use crate::state::{Phase, SegmentState, SequenceError};
use crate::tracker::GestureState;

#[cfg(feature = "scroll-lock")]
use crate::scroll_lock::ScrollLock;

/// How a release was turned into a target segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Fast release near the starting segment; moves exactly one segment.
    Flick,
    /// Dragged roughly one segment over.
    AdjacentScroll,
    /// Snapped to whatever segment is closest, including the current one.
    SnapToNearest,
}

/// Animation speed the renderer should prefer for the settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapSpeed {
    Normal,
    Flick,
}

/// Per-move output for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub offset_px: f32,
    /// Host should swallow native scrolling for this move.
    #[cfg(feature = "scroll-lock")]
    pub suppress_native_scroll: bool,
}

/// Release decision for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub target_segment: usize,
    pub transition: TransitionKind,
    /// Resting offset of `target_segment`.
    pub offset_px: f32,
    pub preferred_speed: SnapSpeed,
}

/// Owns the current segment and turns drags into segment transitions.
pub struct SegmentController<O = ()> {
    geometry: SegmentGeometry,
    state: SegmentState,
    observer: O,
    #[cfg(feature = "scroll-lock")]
    scroll_lock: ScrollLock,
    #[cfg(feature = "scroll-lock")]
    min_travel_px: f32,
}

impl SegmentController<()> {
    pub fn initialize(geometry: SegmentGeometry, start_segment: usize) -> Result<Self, ConfigError> {
        Self::new(geometry, start_segment, ())
    }
}

impl<O> SegmentController<O>
where
    O: SegmentObserver,
{
    /// Scroll lock starts at the `Config::default()` settings; see `set_scroll_lock`.
    pub fn new(geometry: SegmentGeometry, start_segment: usize, observer: O) -> Result<Self, ConfigError> {
        // Geometry may have been built by hand
        let geometry = SegmentGeometry::new(geometry.axis, geometry.segments, geometry.segment_size_px)?;
        if start_segment >= geometry.segments {
            return Err(ConfigError::StartSegmentOutOfRange);
        }

        Ok(Self {
            state: SegmentState::resting(start_segment, geometry.resting_offset(start_segment)),
            geometry,
            observer,
            #[cfg(feature = "scroll-lock")]
            scroll_lock: ScrollLock::default(),
            #[cfg(feature = "scroll-lock")]
            min_travel_px: FlickGate::DEFAULT_MIN_TRAVEL_PX,
        })
    }

    pub fn from_config(config: &Config, dimensions: Dimensions, observer: O) -> Result<Self, ConfigError> {
        let geometry = config.geometry(dimensions)?;

        #[allow(unused_mut)]
        let mut controller = Self::new(geometry, config.start_segment, observer)?;

        #[cfg(feature = "scroll-lock")]
        controller.set_scroll_lock(config.scroll_lock, config.min_travel_px);

        Ok(controller)
    }

    #[cfg(feature = "scroll-lock")]
    pub fn set_scroll_lock(&mut self, scroll_lock: ScrollLock, min_travel_px: f32) {
        self.scroll_lock = scroll_lock;
        self.min_travel_px = min_travel_px;
    }

    pub fn geometry(&self) -> &SegmentGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &SegmentState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn current_segment(&self) -> usize {
        self.state.current_segment
    }

    pub fn segment_count(&self) -> usize {
        self.geometry.segments
    }

    pub fn offset_px(&self) -> f32 {
        self.state.live_offset_px
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Clamp a candidate segment into range.
    pub fn resolve_segment(&self, segment: isize) -> usize {
        self.geometry.resolve(segment)
    }

    /// Anchor the drag at the current segment's resting offset.
    ///
    /// Always succeeds; a drag left unfinished by the host is discarded.
    pub fn on_drag_start(&mut self) {
        if self.state.phase != Phase::Idle {
            log::warn!("discarding unfinished drag on segment {}", self.state.current_segment);
        }

        let anchor = self.geometry.resting_offset(self.state.current_segment);
        self.state.anchor_offset_px = anchor;
        self.state.live_offset_px = anchor;
        self.state.phase = Phase::Dragging;
    }

    /// Follow the finger. Overscroll past either end is not clamped here.
    pub fn on_drag_move(&mut self, gesture: &GestureState) -> Result<DragUpdate, SequenceError> {
        if self.state.phase != Phase::Dragging {
            return Err(SequenceError::NotDragging);
        }

        self.state.live_offset_px = self.state.anchor_offset_px + gesture.distance.get(self.geometry.axis);

        Ok(DragUpdate {
            offset_px: self.state.live_offset_px,
            #[cfg(feature = "scroll-lock")]
            suppress_native_scroll: self
                .scroll_lock
                .should_suppress(gesture.distance, self.min_travel_px),
        })
    }

    /// Segment closest to the live offset. A non-negative offset is always segment 0.
    ///
    /// Halfway positions round toward the earlier segment. On overscroll the
    /// result may be one past the last segment (never more); callers resolve it.
    pub fn nearest_segment(&self) -> usize {
        let offset = self.state.live_offset_px;
        if offset < 0.0 {
            // Round the signed position half up, then flip it
            let nearest = -libm::floorf(offset / self.geometry.segment_size_px + 0.5);
            if nearest > 0.0 {
                (nearest as usize).min(self.geometry.segments)
            } else {
                0
            }
        } else {
            0
        }
    }

    /// Decide where a released drag settles and move there.
    pub fn on_drag_end(&mut self, gesture: &GestureState) -> Result<Resolution, SequenceError> {
        if self.state.phase != Phase::Dragging {
            return Err(SequenceError::NotDragging);
        }
        let release = gesture.release.ok_or(SequenceError::NotReleased)?;

        self.state.live_offset_px = self.state.anchor_offset_px + gesture.distance.get(self.geometry.axis);
        self.state.phase = Phase::Resolving;

        let axis = self.geometry.axis;
        let current = self.state.current_segment as isize;
        let nearest = self.nearest_segment();
        let flick = release.flick.get(axis);

        log::debug!("nearest segment is {}", nearest);

        let (transition, candidate, cause) = if nearest as isize == current && !flick.is_still() {
            // Finger moved left/up -> content follows -> next segment
            let candidate = current - flick.signum() as isize;
            self.observer.on_flick(flick_direction(axis, flick));
            (TransitionKind::Flick, candidate, ChangeCause::Flick)
        } else if nearest as isize == current + 1 || nearest as isize == current - 1 {
            (TransitionKind::AdjacentScroll, nearest as isize, ChangeCause::Drag)
        } else {
            (TransitionKind::SnapToNearest, nearest as isize, ChangeCause::Drag)
        };

        let change = self.settle(candidate, cause);

        Ok(Resolution {
            target_segment: change.current,
            transition,
            offset_px: self.state.live_offset_px,
            preferred_speed: if release.is_flick() {
                SnapSpeed::Flick
            } else {
                SnapSpeed::Normal
            },
        })
    }

    /// Jump to a segment from any phase; an active drag is abandoned.
    pub fn go_to_segment(&mut self, segment: isize) -> SegmentChange {
        self.settle(segment, ChangeCause::Programmatic)
    }

    pub fn next_segment(&mut self) -> SegmentChange {
        self.go_to_segment(self.state.current_segment as isize + 1)
    }

    pub fn prev_segment(&mut self) -> SegmentChange {
        self.go_to_segment(self.state.current_segment as isize - 1)
    }

    fn settle(&mut self, segment: isize, cause: ChangeCause) -> SegmentChange {
        let previous = self.state.current_segment;
        let current = self.resolve_segment(segment);

        self.state = SegmentState::resting(current, self.geometry.resting_offset(current));

        log::debug!("sliding to segment {} ({:?})", current, cause);

        let change = SegmentChange {
            previous,
            current,
            cause,
        };
        self.observer.on_segment_change(change);
        change
    }
}

fn flick_direction(axis: Axis, flick: Direction) -> FlickDirection {
    match (axis, flick) {
        (Axis::X, Direction::Negative) => FlickDirection::Left,
        (Axis::X, _) => FlickDirection::Right,
        (Axis::Y, Direction::Negative) => FlickDirection::Up,
        (Axis::Y, _) => FlickDirection::Down,
    }
}
