//! The draggable slide strip.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use egui::{
    pos2, vec2, Align2, CornerRadius, FontId, Id, Painter, Pos2, Rect, Response, Sense, Stroke,
    StrokeKind, Ui,
};
use kurbo::Point;
use slidetrack_core::{Carousel, GesturePhase, PointerEvent, PointerSource, SlideLayout};

use crate::surface::EguiSurface;
use crate::{sizing, theme};

/// Fraction of the container width a slide takes when no fixed width is set.
const DEFAULT_ITEM_RATIO: f32 = 0.8;

/// A horizontal strip of slides driven by a [`Carousel`].
pub struct SlideStrip {
    id_salt: Id,
    height: f32,
    item_width: Option<f32>,
    gap: f32,
}

impl SlideStrip {
    /// Create a strip of the given height.
    pub fn new(height: f32) -> Self {
        Self {
            id_salt: Id::new("slidetrack_strip"),
            height,
            item_width: None,
            gap: 16.0,
        }
    }

    /// Distinguish several strips in the same UI.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }

    /// Use a fixed slide width instead of a fraction of the container.
    pub fn item_width(mut self, width: f32) -> Self {
        self.item_width = Some(width);
        self
    }

    /// Set the space between slides.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Geometry of `count` slides in a container of `container_width`.
    pub fn layout_for(&self, container_width: f32, count: usize) -> SlideLayout {
        let width = self
            .item_width
            .unwrap_or(container_width * DEFAULT_ITEM_RATIO)
            .max(1.0);
        let step = width + self.gap;
        SlideLayout::new(
            container_width as f64,
            (0..count).map(|i| ((i as f32 * step) as f64, width as f64)),
        )
    }

    /// Show the strip, feeding drags into the carousel and painting every visible slide.
    ///
    /// `paint_item` receives the slide index, its screen rect and whether it is active.
    pub fn show(
        self,
        ui: &mut Ui,
        carousel: &mut Carousel<EguiSurface>,
        mut paint_item: impl FnMut(&Painter, usize, Rect, bool),
    ) -> Response {
        let id = ui.id().with(self.id_salt);
        let width = ui.available_width();
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::click_and_drag());

        self.track_resize(ui, id, width, carousel);
        self.route_pointer(ui, &response, rect, carousel);

        let duration = if carousel.transition_enabled() {
            carousel.config().transition_ms as f32 / 1000.0
        } else {
            0.0
        };
        let offset = ui.ctx().animate_value_with_time(
            id.with("offset"),
            carousel.surface().offset() as f32,
            duration,
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            for (index, item) in carousel.layout().items().iter().enumerate() {
                let item_rect = Rect::from_min_size(
                    pos2(rect.left() + item.offset as f32 + offset, rect.top()),
                    vec2(item.width as f32, rect.height()),
                );
                if item_rect.intersects(rect) {
                    paint_item(&painter, index, item_rect, carousel.surface().is_active(index));
                }
            }
        }

        if carousel.is_dragging() {
            response.on_hover_cursor(egui::CursorIcon::Grabbing)
        } else {
            response.on_hover_cursor(egui::CursorIcon::Grab)
        }
    }

    /// Schedule a relayout when the available width changes, then apply it once it settles.
    fn track_resize(&self, ui: &Ui, id: Id, width: f32, carousel: &mut Carousel<EguiSurface>) {
        let now = Instant::now();
        let width_id = id.with("width");
        let known = ui
            .data(|d| d.get_temp::<f32>(width_id))
            .unwrap_or(carousel.layout().container_width() as f32);

        if (known - width).abs() > 0.5 {
            ui.data_mut(|d| d.insert_temp(width_id, width));
            carousel.schedule_relayout(self.layout_for(width, carousel.len()), now);
        }

        if let Err(err) = carousel.tick(now) {
            log::warn!("Relayout failed: {}", err);
        }
        if let Some(remaining) = carousel.relayout_remaining(now) {
            ui.ctx().request_repaint_after(remaining);
        }
    }

    fn route_pointer(
        &self,
        ui: &Ui,
        response: &Response,
        rect: Rect,
        carousel: &mut Carousel<EguiSurface>,
    ) {
        let position = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()))
            .unwrap_or_else(|| rect.center());

        let mut phases = Vec::with_capacity(3);
        if response.drag_started() {
            phases.push(GesturePhase::Start);
        }
        if response.dragged() {
            phases.push(GesturePhase::Move);
        }
        if response.drag_stopped() {
            phases.push(GesturePhase::End);
        }

        for phase in phases {
            // A touch has already left `active_touches` on the frame it ends, so
            // moves and ends reuse the source recorded when the gesture started.
            let source = match carousel.tracker().active_source() {
                Some(source) => source,
                None if ui.input(|i| i.any_touches()) => PointerSource::Touch,
                None => PointerSource::Mouse,
            };
            // The drag is only reported after the pointer travelled a few points.
            let at = match phase {
                GesturePhase::Start => ui.input(|i| i.pointer.press_origin()).unwrap_or(position),
                _ => position,
            };
            let event = pointer_event(phase, at, source);
            if let Err(err) = carousel.handle_pointer(&event) {
                log::debug!("Pointer event dropped: {}", err);
            }
        }
    }
}

/// Build a core pointer event from an egui position.
fn pointer_event(phase: GesturePhase, pos: Pos2, source: PointerSource) -> PointerEvent {
    let position = Point::new(pos.x as f64, pos.y as f64);
    match (phase, source) {
        (GesturePhase::Start, PointerSource::Mouse) => PointerEvent::MouseDown { position },
        (GesturePhase::Move, PointerSource::Mouse) => PointerEvent::MouseMove { position },
        (GesturePhase::End, PointerSource::Mouse) => PointerEvent::MouseUp { position },
        (GesturePhase::Start, PointerSource::Touch) => PointerEvent::TouchStart { touches: vec![position] },
        (GesturePhase::Move, PointerSource::Touch) => PointerEvent::TouchMove { touches: vec![position] },
        (GesturePhase::End, PointerSource::Touch) => PointerEvent::TouchEnd { touches: vec![position] },
    }
}

/// Default slide painter: a rounded card with the slide number.
pub fn paint_placeholder(painter: &Painter, index: usize, rect: Rect, active: bool) {
    let radius = CornerRadius::same(sizing::SLIDE_RADIUS);
    painter.rect_filled(rect, radius, theme::SLIDE_BG);
    let outline = if active { theme::ACCENT } else { theme::BORDER };
    painter.rect_stroke(rect, radius, Stroke::new(2.0, outline), StrokeKind::Inside);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        format!("{}", index + 1),
        FontId::proportional(32.0),
        theme::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{
        CentralPanel, Context, Event, Modifiers, PointerButton, RawInput, TouchDeviceId, TouchId,
        TouchPhase,
    };
    use slidetrack_core::SlideConfig;

    fn raw_input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 900.0))),
            ..Default::default()
        }
    }

    fn frame_input(events: Vec<Event>, time: f64) -> RawInput {
        RawInput {
            events,
            time: Some(time),
            ..raw_input()
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

    fn touch(phase: TouchPhase, pos: Pos2) -> Event {
        Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(0),
            phase,
            pos,
            force: None,
        }
    }

    /// Carousel of four 400pt slides that relayouts to the panel width on the first frame.
    fn strip_carousel() -> Carousel<EguiSurface> {
        Carousel::init(
            EguiSurface::new(),
            SlideLayout::uniform(800.0, 400.0, 4),
            SlideConfig::default().with_resize_debounce_ms(0),
        )
        .unwrap()
    }

    fn run_frames(ctx: &Context, carousel: &mut Carousel<EguiSurface>, frames: Vec<Vec<Event>>) {
        for (n, events) in frames.into_iter().enumerate() {
            let _ = ctx.run(frame_input(events, n as f64 * 0.05), |ctx| {
                CentralPanel::default().show(ctx, |ui| {
                    SlideStrip::new(200.0)
                        .item_width(400.0)
                        .gap(0.0)
                        .show(ui, carousel, paint_placeholder);
                });
            });
        }
    }

    fn mouse_drag(from: f32, to: f32) -> Vec<Vec<Event>> {
        let y = 100.0;
        let mut frames = vec![vec![], vec![Event::PointerMoved(pos2(from, y)), button(pos2(from, y), true)]];
        for step in 1..=4 {
            let x = from + (to - from) * step as f32 / 4.0;
            frames.push(vec![Event::PointerMoved(pos2(x, y))]);
        }
        frames.push(vec![Event::PointerMoved(pos2(to, y))]);
        frames.push(vec![button(pos2(to, y), false)]);
        frames.push(vec![]);
        frames
    }

    fn touch_drag(from: f32, to: f32) -> Vec<Vec<Event>> {
        let y = 100.0;
        let start = pos2(from, y);
        let mut frames = vec![
            vec![],
            vec![touch(TouchPhase::Start, start), Event::PointerMoved(start), button(start, true)],
        ];
        for step in 1..=4 {
            let p = pos2(from + (to - from) * step as f32 / 4.0, y);
            frames.push(vec![touch(TouchPhase::Move, p), Event::PointerMoved(p)]);
        }
        let end = pos2(to, y);
        frames.push(vec![touch(TouchPhase::Move, end), Event::PointerMoved(end)]);
        frames.push(vec![touch(TouchPhase::End, end), button(end, false), Event::PointerGone]);
        frames.push(vec![]);
        frames
    }

    #[test]
    fn test_layout_for_default_ratio() {
        let strip = SlideStrip::new(200.0).gap(0.0);
        let layout = strip.layout_for(1000.0, 3);
        assert_eq!(layout.len(), 3);
        assert!((layout.items()[1].offset - 800.0).abs() < 1e-3);
        assert!((layout.items()[0].anchor - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_layout_for_fixed_width() {
        let strip = SlideStrip::new(200.0).item_width(300.0).gap(20.0);
        let layout = strip.layout_for(900.0, 2);
        assert!((layout.items()[1].offset - 320.0).abs() < 1e-3);
        assert!((layout.items()[1].width - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_event_mapping() {
        let event = pointer_event(GesturePhase::Move, pos2(12.0, 3.0), PointerSource::Touch);
        assert_eq!(event.phase(), GesturePhase::Move);
        assert!((event.x().unwrap() - 12.0).abs() < 1e-6);

        let event = pointer_event(GesturePhase::End, pos2(0.0, 0.0), PointerSource::Mouse);
        assert!(matches!(event, PointerEvent::MouseUp { .. }));
    }

    #[test]
    fn test_show_relayouts_to_available_width() {
        let ctx = Context::default();
        let strip = SlideStrip::new(200.0).item_width(400.0);
        let mut carousel = Carousel::init(
            EguiSurface::new(),
            strip.layout_for(800.0, 4),
            SlideConfig::default().with_start_index(2).with_resize_debounce_ms(0),
        )
        .unwrap();

        let mut painted = Vec::new();
        let _ = ctx.run(raw_input(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                SlideStrip::new(200.0)
                    .item_width(400.0)
                    .show(ui, &mut carousel, |_, index, _, active| painted.push((index, active)));
            });
        });

        assert_eq!(carousel.active(), 2);
        assert!((carousel.layout().container_width() - 800.0).abs() > 1.0);
        let anchor = carousel.layout().items()[2].anchor;
        assert!((carousel.surface().offset() - anchor).abs() < 1e-6);
        assert!(painted.contains(&(2, true)));
        assert!(painted.iter().filter(|(_, active)| *active).count() <= 1);
    }

    #[test]
    fn test_mouse_drag_advances_slide() {
        let ctx = Context::default();
        let mut carousel = strip_carousel();

        run_frames(&ctx, &mut carousel, mouse_drag(600.0, 500.0));

        assert!(!carousel.is_dragging());
        assert!(carousel.transition_enabled());
        assert_eq!(carousel.active(), 1);
        let anchor = carousel.layout().items()[1].anchor;
        assert!((carousel.surface().offset() - anchor).abs() < 1e-6);
    }

    #[test]
    fn test_short_mouse_drag_snaps_back() {
        let ctx = Context::default();
        let mut carousel = strip_carousel();

        run_frames(&ctx, &mut carousel, mouse_drag(600.0, 580.0));

        assert!(!carousel.is_dragging());
        assert_eq!(carousel.active(), 0);
        let anchor = carousel.layout().items()[0].anchor;
        assert!((carousel.surface().offset() - anchor).abs() < 1e-6);
    }

    #[test]
    fn test_touch_drag_ends_and_advances() {
        let ctx = Context::default();
        let mut carousel = strip_carousel();

        run_frames(&ctx, &mut carousel, touch_drag(600.0, 300.0));

        assert!(!carousel.is_dragging());
        assert!(carousel.transition_enabled());
        assert_eq!(carousel.tracker().active_source(), None);
        assert_eq!(carousel.active(), 1);
    }
}
