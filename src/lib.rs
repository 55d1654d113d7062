#![no_std]

mod config;
mod state;
mod flickable;
pub mod flick;
pub mod observer;
pub mod sample;
pub mod segment;
pub mod tracker;

#[cfg(feature = "scroll-lock")]
pub mod scroll_lock;

pub use config::{AxisMode, Config, ConfigError, Dimensions, SegmentGeometry, SegmentSize};
pub use state::{Phase, SegmentState, SequenceError};
pub use flickable::Flickable;
pub use flick::FlickGate;
pub use observer::{ChangeCause, FlickDirection, SegmentChange, SegmentObserver};
pub use sample::{Axes, Axis, Direction, PointerSample};
pub use segment::{DragUpdate, Resolution, SegmentController, SnapSpeed, TransitionKind};
pub use tracker::{GestureState, GestureTracker, Release};

#[cfg(feature = "scroll-lock")]
pub use scroll_lock::ScrollLock;
