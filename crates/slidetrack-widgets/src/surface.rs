//! egui implementation of the slide surface.

use slidetrack_core::SlideSurface;

/// Holds the visual state the carousel asks for until the next paint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EguiSurface {
    offset: f64,
    transition: bool,
    active: Option<usize>,
}

impl EguiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target strip offset in points.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn transition(&self) -> bool {
        self.transition
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

impl SlideSurface for EguiSurface {
    fn translate(&mut self, x: f64) {
        self.offset = x;
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    fn mark_active(&mut self, index: usize) {
        self.active = Some(index);
    }
}
