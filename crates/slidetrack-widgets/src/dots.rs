//! Dot indicator: one clickable marker per slide.

use egui::{pos2, vec2, CursorIcon, Rect, Sense, Ui, Vec2};
use slidetrack_core::{Carousel, DotControl, SlideSurface};

use crate::{sizing, theme};

/// Renders a [`DotControl`] and forwards marker clicks to the carousel.
pub struct DotIndicator {
    radius: f32,
    spacing: f32,
}

impl Default for DotIndicator {
    fn default() -> Self {
        Self {
            radius: sizing::DOT_RADIUS,
            spacing: sizing::DOT_SPACING,
        }
    }
}

impl DotIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Size of a row of `markers` dots.
    pub fn size(&self, markers: usize) -> Vec2 {
        let diameter = self.radius * 2.0;
        let gaps = markers.saturating_sub(1) as f32;
        vec2(markers as f32 * diameter + gaps * self.spacing, diameter)
    }

    /// Hit area of `marker` inside a row allocated at `area`.
    pub fn marker_rect(&self, area: Rect, marker: usize) -> Rect {
        let diameter = self.radius * 2.0;
        let left = area.min.x + marker as f32 * (diameter + self.spacing);
        Rect::from_min_size(pos2(left, area.min.y), vec2(diameter, diameter))
    }

    /// Show the markers. Returns the marker that was clicked, if any.
    pub fn show<S: SlideSurface>(
        self,
        ui: &mut Ui,
        dots: &DotControl,
        carousel: &mut Carousel<S>,
    ) -> Option<usize> {
        let id = ui.id().with("slidetrack_dots");
        let (area, _) = ui.allocate_exact_size(self.size(dots.markers()), Sense::hover());

        let mut clicked = None;
        for marker in 0..dots.markers() {
            let rect = self.marker_rect(area, marker);
            let response = ui.interact(rect, id.with(marker), Sense::click());
            if ui.is_rect_visible(rect) {
                let color = if dots.is_highlighted(marker) {
                    theme::ACCENT
                } else if response.hovered() {
                    theme::TEXT_MUTED
                } else {
                    theme::BORDER
                };
                ui.painter().circle_filled(rect.center(), self.radius, color);
            }
            if response.clicked() {
                clicked = Some(marker);
            }
            response.on_hover_cursor(CursorIcon::PointingHand);
        }

        if let Some(marker) = clicked {
            if let Err(err) = dots.click(marker, carousel) {
                log::warn!("Dot click ignored: {}", err);
                return None;
            }
        }
        clicked
    }
}
