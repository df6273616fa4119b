//! Navigation add-ons: previous/next arrows and a dot index control.
//!
//! Add-ons only read carousel state and call its public operations.

use crate::carousel::{Carousel, SlideEvent};
use crate::error::SlideResult;
use crate::surface::SlideSurface;

/// Previous/next arrow controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowControls;

impl ArrowControls {
    pub fn new() -> Self {
        Self
    }

    pub fn can_go_previous<S: SlideSurface>(&self, carousel: &Carousel<S>) -> bool {
        !carousel.index().is_first()
    }

    pub fn can_go_next<S: SlideSurface>(&self, carousel: &Carousel<S>) -> bool {
        !carousel.index().is_last()
    }

    /// Handle a click on the previous arrow. No-op at the first slide.
    pub fn previous<S: SlideSurface>(&self, carousel: &mut Carousel<S>) -> bool {
        carousel.go_to_previous()
    }

    /// Handle a click on the next arrow. No-op at the last slide.
    pub fn next<S: SlideSurface>(&self, carousel: &mut Carousel<S>) -> bool {
        carousel.go_to_next()
    }
}

/// One marker per slide, with the active slide's marker highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotControl {
    markers: usize,
    highlighted: usize,
}

impl DotControl {
    /// Build markers for the carousel's current slides.
    pub fn new<S: SlideSurface>(carousel: &Carousel<S>) -> Self {
        Self {
            markers: carousel.len(),
            highlighted: carousel.active(),
        }
    }

    pub fn markers(&self) -> usize {
        self.markers
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_highlighted(&self, marker: usize) -> bool {
        marker == self.highlighted
    }

    /// Forward a marker click to the carousel.
    pub fn click<S: SlideSurface>(&self, marker: usize, carousel: &mut Carousel<S>) -> SlideResult<()> {
        carousel.go_to(marker)
    }

    /// Re-read the active index after a notification.
    pub fn on_event<S: SlideSurface>(&mut self, event: &SlideEvent, carousel: &Carousel<S>) {
        match event {
            SlideEvent::Changed => {
                if self.markers != carousel.len() {
                    log::debug!("Rebuilding dot markers: {} -> {}", self.markers, carousel.len());
                    self.markers = carousel.len();
                }
                self.highlighted = carousel.active();
            }
        }
    }
}
