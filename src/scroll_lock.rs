//! Native scroll suppression while dragging.
//!
//! Hosts usually let the page scroll natively until it is clear the user is
//! dragging the element. Once the drag has travelled far enough across the
//! locked axis, the host should swallow the native scroll.

use crate::sample::Axes;

/// Axes on which native scrolling is locked once a drag is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLock {
    /// Never suppress native scrolling.
    None,
    /// Lock horizontal scrolling once vertical travel reaches the minimum.
    X,
    /// Lock vertical scrolling once horizontal travel reaches the minimum.
    Y,
    #[default]
    Both,
}

impl ScrollLock {
    pub fn should_suppress(&self, distance: Axes<f32>, min_travel_px: f32) -> bool {
        let (lock_x, lock_y) = match self {
            ScrollLock::None => (false, false),
            ScrollLock::X => (true, false),
            ScrollLock::Y => (false, true),
            ScrollLock::Both => (true, true),
        };

        let suppress_x = lock_x && libm::fabsf(distance.y) >= min_travel_px;
        let suppress_y = lock_y && libm::fabsf(distance.x) >= min_travel_px;

        suppress_x || suppress_y
    }
}
