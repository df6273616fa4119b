//! Carousel controller wiring pointer tracking, positioning and slide index state.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use crate::config::SlideConfig;
use crate::debounce::Debounce;
use crate::error::{SlideError, SlideResult};
use crate::index::SlideIndex;
use crate::layout::SlideLayout;
use crate::pointer::{GesturePhase, PointerEvent, PointerTracker};
use crate::position::{GestureOutcome, PositionEngine};
use crate::surface::SlideSurface;

/// Notifications emitted by a carousel.
///
/// Observers re-read [`Carousel::index`] when they receive one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    /// The active slide was (re)applied.
    Changed,
}

/// A horizontal drag/swipe carousel.
pub struct Carousel<S: SlideSurface> {
    surface: S,
    config: SlideConfig,
    layout: SlideLayout,
    tracker: PointerTracker,
    engine: PositionEngine,
    index: SlideIndex,
    pending_layout: Debounce<SlideLayout>,
    events: Vec<SlideEvent>,
}

impl<S: SlideSurface> Carousel<S> {
    /// Create a carousel and show the configured start slide.
    pub fn init(surface: S, layout: SlideLayout, config: SlideConfig) -> SlideResult<Self> {
        config.validate()?;
        let index = SlideIndex::new(config.start_index, layout.len())?;

        let mut carousel = Self {
            surface,
            tracker: PointerTracker::new(config.sensitivity),
            engine: PositionEngine::new(config.snap_threshold),
            pending_layout: Debounce::new(Duration::from_millis(config.resize_debounce_ms)),
            config,
            layout,
            index,
            events: Vec::new(),
        };
        carousel.engine.set_transition(true, &mut carousel.surface);
        carousel.go_to(index.active())?;
        log::debug!("Carousel initialized with {} slides", carousel.len());
        Ok(carousel)
    }

    pub fn index(&self) -> &SlideIndex {
        &self.index
    }

    pub fn active(&self) -> usize {
        self.index.active()
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Always false once initialized.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn layout(&self) -> &SlideLayout {
        &self.layout
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Offset last applied to the surface.
    pub fn offset(&self) -> f64 {
        self.engine.move_position()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn transition_enabled(&self) -> bool {
        self.engine.transition_enabled()
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<SlideEvent> {
        std::mem::take(&mut self.events)
    }

    /// Route a pointer event to the handler for its phase.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> SlideResult<()> {
        match event.phase() {
            GesturePhase::Start => self.pointer_down(event),
            GesturePhase::Move => self.pointer_move(event),
            GesturePhase::End => self.pointer_up(event).map(|_| ()),
        }
    }

    /// Start a drag. The transition is disabled so the strip follows the pointer exactly.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> SlideResult<()> {
        if let Err(err) = self.tracker.start(event) {
            log::warn!("Ignoring gesture start: {}", err);
            return Err(err);
        }
        self.engine.set_transition(false, &mut self.surface);
        Ok(())
    }

    /// Follow the pointer during a drag.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> SlideResult<()> {
        match self.tracker.track(event) {
            Ok(Some(x)) => {
                log::trace!("Drag offset {:.1}", x);
                self.engine.apply_offset(x, &mut self.surface);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                log::warn!("Ignoring pointer move: {}", err);
                Err(err)
            }
        }
    }

    /// Finish a drag and settle on a slide.
    ///
    /// Returns the outcome, or `None` if no gesture from this source was active.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> SlideResult<Option<GestureOutcome>> {
        if !self.tracker.finish(event) {
            return Ok(None);
        }
        self.tracker.commit(self.engine.move_position());
        self.engine.set_transition(true, &mut self.surface);

        let outcome = self
            .engine
            .resolve_gesture_end(self.tracker.movement(), &self.index);
        log::debug!(
            "Gesture ended with movement {:.1}: {:?}",
            self.tracker.movement(),
            outcome
        );
        self.go_to(outcome.target())?;
        Ok(Some(outcome))
    }

    /// Make `index` the active slide and center it.
    pub fn go_to(&mut self, index: usize) -> SlideResult<()> {
        let slide_index = SlideIndex::new(index, self.layout.len())?;
        let anchor = self
            .layout
            .get(index)
            .map(|item| item.anchor)
            .ok_or(SlideError::IndexOutOfRange { index, len: self.layout.len() })?;

        self.index = slide_index;
        self.engine.apply_offset(anchor, &mut self.surface);
        self.tracker.commit(anchor);
        self.surface.mark_active(index);
        self.events.push(SlideEvent::Changed);
        log::debug!("Active slide {} (anchor {:.1})", index, anchor);
        Ok(())
    }

    /// Go to the previous slide. Does nothing at the first slide.
    pub fn go_to_previous(&mut self) -> bool {
        match self.index.previous() {
            Some(previous) => self.go_to(previous).is_ok(),
            None => false,
        }
    }

    /// Go to the next slide. Does nothing at the last slide.
    pub fn go_to_next(&mut self) -> bool {
        match self.index.next() {
            Some(next) => self.go_to(next).is_ok(),
            None => false,
        }
    }

    /// Replace the layout immediately and re-center the active slide.
    ///
    /// If the new layout is shorter the active index moves to its last slide.
    pub fn relayout(&mut self, layout: SlideLayout) -> SlideResult<()> {
        if layout.is_empty() {
            return Err(SlideError::EmptyTrack);
        }
        let active = self.index.active().min(layout.len() - 1);
        log::info!(
            "Relayout: {} slides in {:.0}px container",
            layout.len(),
            layout.container_width()
        );
        self.layout = layout;
        self.go_to(active)
    }

    /// Queue a layout to be applied once resizing settles.
    pub fn schedule_relayout(&mut self, layout: SlideLayout, now: Instant) {
        self.pending_layout.push(layout, now);
    }

    pub fn has_pending_relayout(&self) -> bool {
        self.pending_layout.is_pending()
    }

    /// Time until a queued layout is applied.
    pub fn relayout_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending_layout.remaining(now)
    }

    /// Apply a queued layout if its debounce delay has passed.
    ///
    /// Returns true when a relayout happened.
    pub fn tick(&mut self, now: Instant) -> SlideResult<bool> {
        match self.pending_layout.poll(now) {
            Some(layout) => {
                self.relayout(layout)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
