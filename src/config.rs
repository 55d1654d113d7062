use crate::flick::FlickGate;
use crate::sample::Axis;

#[cfg(feature = "scroll-lock")]
use crate::scroll_lock::ScrollLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NoSegments,
    InvalidSegmentSize,
    StartSegmentOutOfRange,
    InvalidFlickThreshold,
    InvalidMinTravel,
    InvalidDimensions,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoSegments => write!(f, "segments must be at least 1"),
            ConfigError::InvalidSegmentSize => write!(f, "segment size must be greater than 0"),
            ConfigError::StartSegmentOutOfRange => {
                write!(f, "start_segment must be less than segments")
            }
            ConfigError::InvalidFlickThreshold => {
                write!(f, "flick_threshold must be a non-negative number")
            }
            ConfigError::InvalidMinTravel => write!(f, "min_travel_px must be a non-negative number"),
            ConfigError::InvalidDimensions => {
                write!(f, "auto axis or segment size needs positive element dimensions")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// How the axis of motion is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    X,
    Y,
    /// Longer of the element's two dimensions; width wins a tie.
    Auto,
}

/// Pixel extent of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentSize {
    Px(f32),
    /// Element extent along the axis divided by the segment count.
    Auto,
}

/// Element size supplied by the host, used to resolve `Auto` options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Resolved, immutable segment layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGeometry {
    pub axis: Axis,
    pub segments: usize,
    pub segment_size_px: f32,
}

impl SegmentGeometry {
    pub fn new(axis: Axis, segments: usize, segment_size_px: f32) -> Result<Self, ConfigError> {
        if segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        if !(segment_size_px > 0.0) || !segment_size_px.is_finite() {
            return Err(ConfigError::InvalidSegmentSize);
        }
        Ok(Self {
            axis,
            segments,
            segment_size_px,
        })
    }

    /// Clamp any candidate index into `0..segments`.
    pub fn resolve(&self, segment: isize) -> usize {
        if segment <= 0 {
            0
        } else {
            (segment as usize).min(self.segments - 1)
        }
    }

    /// Offset at which `segment` rests. Segment 0 sits at 0, later ones are negative.
    pub fn resting_offset(&self, segment: usize) -> f32 {
        -(self.segment_size_px * segment as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub segments: usize,
    pub start_segment: usize,
    pub axis: AxisMode,
    pub segment_size: SegmentSize,
    /// Release speed in px/ms a motion must exceed to count as a flick.
    pub flick_threshold: f32,
    /// Absolute travel in px a flick must cover along its axis.
    pub min_travel_px: f32,
    #[cfg(feature = "scroll-lock")]
    pub scroll_lock: ScrollLock,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segments: 5,
            start_segment: 0,
            axis: AxisMode::Auto,
            segment_size: SegmentSize::Auto,
            flick_threshold: 0.7,
            min_travel_px: 5.0,
            #[cfg(feature = "scroll-lock")]
            scroll_lock: ScrollLock::Both,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments == 0 {
            return Err(ConfigError::NoSegments);
        }

        if let SegmentSize::Px(size) = self.segment_size {
            if !(size > 0.0) || !size.is_finite() {
                return Err(ConfigError::InvalidSegmentSize);
            }
        }

        if self.start_segment >= self.segments {
            return Err(ConfigError::StartSegmentOutOfRange);
        }

        // NaN fails both comparisons
        if !(self.flick_threshold >= 0.0) {
            return Err(ConfigError::InvalidFlickThreshold);
        }

        if !(self.min_travel_px >= 0.0) {
            return Err(ConfigError::InvalidMinTravel);
        }

        Ok(())
    }

    /// Resolve `Auto` options against the element's dimensions.
    pub fn geometry(&self, dimensions: Dimensions) -> Result<SegmentGeometry, ConfigError> {
        self.validate()?;

        let axis = match self.axis {
            AxisMode::X => Axis::X,
            AxisMode::Y => Axis::Y,
            AxisMode::Auto => {
                if !(dimensions.width > 0.0) && !(dimensions.height > 0.0) {
                    return Err(ConfigError::InvalidDimensions);
                }
                if dimensions.height > dimensions.width {
                    Axis::Y
                } else {
                    Axis::X
                }
            }
        };

        let segment_size_px = match self.segment_size {
            SegmentSize::Px(size) => size,
            SegmentSize::Auto => {
                let extent = dimensions.extent(axis);
                if !(extent > 0.0) {
                    return Err(ConfigError::InvalidDimensions);
                }
                extent / self.segments as f32
            }
        };

        SegmentGeometry::new(axis, self.segments, segment_size_px)
    }

    pub fn flick_gate(&self) -> FlickGate {
        FlickGate::new(self.flick_threshold, self.min_travel_px)
    }
}
