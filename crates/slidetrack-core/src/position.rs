//! Position engine: applies offsets and decides where a gesture lands.

use crate::config::DEFAULT_SNAP_THRESHOLD;
use crate::index::SlideIndex;
use crate::surface::SlideSurface;

/// Where the strip should go once a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Move to the next slide.
    Advance(usize),
    /// Move to the previous slide.
    Retreat(usize),
    /// Return to the active slide's anchor.
    SnapBack(usize),
}

impl GestureOutcome {
    /// Index the strip settles on.
    pub fn target(self) -> usize {
        match self {
            Self::Advance(i) | Self::Retreat(i) | Self::SnapBack(i) => i,
        }
    }
}

/// Tracks the offset last applied to the surface and the transition state.
#[derive(Debug, Clone)]
pub struct PositionEngine {
    move_position: f64,
    transition: bool,
    snap_threshold: f64,
}

impl Default for PositionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_THRESHOLD)
    }
}

impl PositionEngine {
    pub fn new(snap_threshold: f64) -> Self {
        Self {
            move_position: 0.0,
            transition: false,
            snap_threshold,
        }
    }

    /// Last offset applied to the surface.
    pub fn move_position(&self) -> f64 {
        self.move_position
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition
    }

    pub fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }

    /// Move the strip to `x` and remember it for the next commit.
    pub fn apply_offset(&mut self, x: f64, surface: &mut impl SlideSurface) {
        self.move_position = x;
        surface.translate(x);
    }

    pub fn set_transition(&mut self, enabled: bool, surface: &mut impl SlideSurface) {
        self.transition = enabled;
        surface.set_transition(enabled);
    }

    /// Decide the landing slide for a gesture with the given committed movement.
    ///
    /// Positive movement means the pointer travelled left, towards the next slide.
    pub fn resolve_gesture_end(&self, movement: f64, index: &SlideIndex) -> GestureOutcome {
        if movement > self.snap_threshold {
            if let Some(next) = index.next() {
                return GestureOutcome::Advance(next);
            }
        } else if movement < -self.snap_threshold {
            if let Some(previous) = index.previous() {
                return GestureOutcome::Retreat(previous);
            }
        }
        GestureOutcome::SnapBack(index.active())
    }
}
