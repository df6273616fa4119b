//! Pointer tracking for mouse and touch drag gestures.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SENSITIVITY;
use crate::error::{SlideError, SlideResult};

/// Where a gesture originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Stage of a gesture an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

/// Pointer event type for unified mouse/touch handling.
///
/// Touch events carry the changed touch points; only the first one is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    MouseDown { position: Point },
    MouseMove { position: Point },
    MouseUp { position: Point },
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd { touches: Vec<Point> },
}

impl PointerEvent {
    /// The device that produced the event.
    pub fn source(&self) -> PointerSource {
        match self {
            Self::MouseDown { .. } | Self::MouseMove { .. } | Self::MouseUp { .. } => {
                PointerSource::Mouse
            }
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd { .. } => {
                PointerSource::Touch
            }
        }
    }

    /// The gesture stage of the event.
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::MouseDown { .. } | Self::TouchStart { .. } => GesturePhase::Start,
            Self::MouseMove { .. } | Self::TouchMove { .. } => GesturePhase::Move,
            Self::MouseUp { .. } | Self::TouchEnd { .. } => GesturePhase::End,
        }
    }

    /// Horizontal coordinate of the event.
    pub fn x(&self) -> SlideResult<f64> {
        match self {
            Self::MouseDown { position } | Self::MouseMove { position } | Self::MouseUp { position } => {
                Ok(position.x)
            }
            Self::TouchStart { touches } | Self::TouchMove { touches } | Self::TouchEnd { touches } => {
                touches.first().map(|p| p.x).ok_or(SlideError::MissingTouchPoint)
            }
        }
    }
}

/// Distances accumulated while dragging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragDistance {
    /// Pointer x when the gesture started.
    pub start_x: f64,
    /// Scaled, signed travel since the start. Positive means the pointer moved left.
    pub movement: f64,
    /// Offset committed after the last completed drag or slide change.
    pub final_position: f64,
}

/// Converts raw pointer coordinates into strip offsets.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    dist: DragDistance,
    /// Source of the gesture in progress; moves from other sources are ignored.
    active: Option<PointerSource>,
    sensitivity: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY)
    }
}

impl PointerTracker {
    /// Create a tracker with the given drag scaling factor.
    pub fn new(sensitivity: f64) -> Self {
        Self {
            dist: DragDistance::default(),
            active: None,
            sensitivity,
        }
    }

    pub fn distance(&self) -> &DragDistance {
        &self.dist
    }

    pub fn movement(&self) -> f64 {
        self.dist.movement
    }

    pub fn final_position(&self) -> f64 {
        self.dist.final_position
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Source of the gesture in progress, if any.
    pub fn active_source(&self) -> Option<PointerSource> {
        self.active
    }

    /// Begin a gesture.
    pub fn start(&mut self, event: &PointerEvent) -> SlideResult<()> {
        let x = event.x()?;
        self.dist.start_x = x;
        self.dist.movement = 0.0;
        self.active = Some(event.source());
        Ok(())
    }

    /// Update the movement for a pointer at `x` and return the live offset.
    pub fn update_position(&mut self, x: f64) -> f64 {
        self.dist.movement = (self.dist.start_x - x) * self.sensitivity;
        self.dist.final_position - self.dist.movement
    }

    /// Process a move event.
    ///
    /// Returns the candidate offset, or `None` when no gesture from this
    /// event's source is in progress.
    pub fn track(&mut self, event: &PointerEvent) -> SlideResult<Option<f64>> {
        if self.active != Some(event.source()) {
            return Ok(None);
        }
        let x = event.x()?;
        Ok(Some(self.update_position(x)))
    }

    /// End the gesture started by the same source. Returns false if there was none.
    pub fn finish(&mut self, event: &PointerEvent) -> bool {
        if self.active != Some(event.source()) {
            return false;
        }
        self.active = None;
        true
    }

    /// Store the last live offset as the resting position.
    pub fn commit(&mut self, position: f64) {
        self.dist.final_position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_down(x: f64) -> PointerEvent {
        PointerEvent::MouseDown { position: Point::new(x, 10.0) }
    }

    fn mouse_move(x: f64) -> PointerEvent {
        PointerEvent::MouseMove { position: Point::new(x, 10.0) }
    }

    #[test]
    fn test_event_classification() {
        let touch = PointerEvent::TouchMove { touches: vec![Point::new(5.0, 0.0)] };
        assert_eq!(touch.source(), PointerSource::Touch);
        assert_eq!(touch.phase(), GesturePhase::Move);
        assert_eq!(mouse_down(0.0).phase(), GesturePhase::Start);
        assert_eq!(mouse_down(0.0).source(), PointerSource::Mouse);
    }

    #[test]
    fn test_first_touch_point_is_used() {
        let event = PointerEvent::TouchStart {
            touches: vec![Point::new(40.0, 0.0), Point::new(90.0, 0.0)],
        };
        assert!((event.x().unwrap() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_touch_point() {
        let mut tracker = PointerTracker::default();
        let result = tracker.start(&PointerEvent::TouchStart { touches: vec![] });
        assert!(matches!(result, Err(SlideError::MissingTouchPoint)));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_drag_left_moves_content_left() {
        let mut tracker = PointerTracker::default();
        tracker.start(&mouse_down(300.0)).unwrap();

        let offset = tracker.track(&mouse_move(200.0)).unwrap().unwrap();

        assert!((tracker.movement() - 160.0).abs() < 1e-9);
        assert!((offset + 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_is_relative_to_final_position() {
        let mut tracker = PointerTracker::new(1.0);
        tracker.commit(-400.0);
        tracker.start(&mouse_down(100.0)).unwrap();

        let offset = tracker.track(&mouse_move(150.0)).unwrap().unwrap();

        assert!((offset + 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_moves_ignored_without_gesture() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.track(&mouse_move(50.0)).unwrap(), None);
    }

    #[test]
    fn test_moves_from_other_source_ignored() {
        let mut tracker = PointerTracker::default();
        tracker.start(&mouse_down(100.0)).unwrap();

        let touch = PointerEvent::TouchMove { touches: vec![Point::new(0.0, 0.0)] };
        assert_eq!(tracker.track(&touch).unwrap(), None);
        assert!(!tracker.finish(&PointerEvent::TouchEnd { touches: vec![] }));
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_start_resets_movement() {
        let mut tracker = PointerTracker::default();
        tracker.start(&mouse_down(300.0)).unwrap();
        tracker.track(&mouse_move(0.0)).unwrap();
        assert!(tracker.finish(&PointerEvent::MouseUp { position: Point::new(0.0, 0.0) }));

        tracker.start(&mouse_down(10.0)).unwrap();
        assert!(tracker.movement().abs() < f64::EPSILON);
    }
}
