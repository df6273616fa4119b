//! Previous/next chevron buttons.

use egui::{pos2, vec2, CornerRadius, CursorIcon, Sense, Stroke, Ui};
use slidetrack_core::{ArrowControls, Carousel, SlideSurface};

use crate::{sizing, theme};

/// Which way an arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Previous,
    Next,
}

/// A painter-drawn chevron button.
pub struct ArrowButton {
    direction: ArrowDirection,
    size: f32,
    enabled: bool,
}

impl ArrowButton {
    pub fn new(direction: ArrowDirection) -> Self {
        Self {
            direction,
            size: sizing::ARROW,
            enabled: true,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Disabled arrows are drawn muted and ignore clicks.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), sense);

        if ui.is_rect_visible(rect) {
            if self.enabled && response.hovered() {
                ui.painter().rect_filled(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    theme::HOVER_BG,
                );
            }

            let color = if self.enabled { theme::TEXT } else { theme::TEXT_MUTED };
            let stroke = Stroke::new(2.0, color);
            let c = rect.center();
            let half = self.size * 0.18;
            // Tip of the chevron points in the travel direction
            let (tip, tail) = match self.direction {
                ArrowDirection::Previous => (c.x - half * 0.5, c.x + half * 0.5),
                ArrowDirection::Next => (c.x + half * 0.5, c.x - half * 0.5),
            };
            let painter = ui.painter();
            painter.line_segment([pos2(tail, c.y - half), pos2(tip, c.y)], stroke);
            painter.line_segment([pos2(tip, c.y), pos2(tail, c.y + half)], stroke);
        }

        let clicked = self.enabled && response.clicked();
        if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        clicked
    }
}

/// Show a previous/next pair wired to the carousel.
///
/// Returns true if either arrow changed the slide.
pub fn arrow_controls<S: SlideSurface>(
    ui: &mut Ui,
    arrows: &ArrowControls,
    carousel: &mut Carousel<S>,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        let previous = ArrowButton::new(ArrowDirection::Previous)
            .enabled(arrows.can_go_previous(carousel))
            .show(ui);
        if previous {
            changed |= arrows.previous(carousel);
        }

        let next = ArrowButton::new(ArrowDirection::Next)
            .enabled(arrows.can_go_next(carousel))
            .show(ui);
        if next {
            changed |= arrows.next(carousel);
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::EguiSurface;
    use egui::{CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
    use slidetrack_core::{SlideConfig, SlideLayout};

    fn frame_input(events: Vec<Event>, time: f64) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 900.0))),
            events,
            time: Some(time),
            ..Default::default()
        }
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Run one frame and return the rect of the arrow pair and whether it changed the slide.
    fn run_arrows(
        ctx: &Context,
        events: Vec<Event>,
        time: f64,
        arrows: &ArrowControls,
        carousel: &mut Carousel<EguiSurface>,
    ) -> (Rect, bool) {
        let mut shown = (Rect::NOTHING, false);
        let _ = ctx.run(frame_input(events, time), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let response = ui.scope(|ui| arrow_controls(ui, arrows, carousel));
                shown = (response.response.rect, response.inner);
            });
        });
        shown
    }

    #[test]
    fn test_arrows_render_without_input() {
        let ctx = Context::default();
        let mut carousel = Carousel::init(
            EguiSurface::new(),
            SlideLayout::uniform(600.0, 300.0, 3),
            SlideConfig::default(),
        )
        .unwrap();
        let arrows = ArrowControls::new();

        let mut changed = true;
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                changed = arrow_controls(ui, &arrows, &mut carousel);
            });
        });

        assert!(!changed);
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn test_next_arrow_click_advances() {
        let ctx = Context::default();
        let mut carousel = Carousel::init(
            EguiSurface::new(),
            SlideLayout::uniform(600.0, 300.0, 3),
            SlideConfig::default(),
        )
        .unwrap();
        let arrows = ArrowControls::new();

        let (controls, _) = run_arrows(&ctx, vec![], 0.0, &arrows, &mut carousel);
        let next = pos2(controls.right() - sizing::ARROW / 2.0, controls.center().y);
        run_arrows(&ctx, vec![Event::PointerMoved(next), button(next, true)], 0.1, &arrows, &mut carousel);
        let (_, changed) = run_arrows(&ctx, vec![button(next, false)], 0.2, &arrows, &mut carousel);

        assert!(changed);
        assert_eq!(carousel.active(), 1);
        assert_eq!(carousel.surface().active(), Some(1));
    }
}
