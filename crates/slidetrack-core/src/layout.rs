//! Slide item geometry and anchor computation.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Offset that centers an item of `item_width` at `item_offset` inside a
/// container of `container_width`.
pub fn compute_anchor(container_width: f64, item_offset: f64, item_width: f64) -> f64 {
    -(item_offset - (container_width - item_width) / 2.0)
}

/// A single slide in the strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideItem {
    /// Natural horizontal offset of the item inside the strip.
    pub offset: f64,
    /// Item width.
    pub width: f64,
    /// Strip offset that centers this item.
    pub anchor: f64,
}

/// Resolved geometry of every slide for one container width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    container_width: f64,
    items: Vec<SlideItem>,
}

impl SlideLayout {
    /// Build a layout from `(offset, width)` pairs.
    pub fn new(container_width: f64, items: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let items = items
            .into_iter()
            .map(|(offset, width)| SlideItem {
                offset,
                width,
                anchor: compute_anchor(container_width, offset, width),
            })
            .collect();
        Self { container_width, items }
    }

    /// Build a layout from item rectangles relative to the strip origin.
    pub fn from_rects(container_width: f64, rects: impl IntoIterator<Item = Rect>) -> Self {
        Self::new(container_width, rects.into_iter().map(|r| (r.x0, r.width())))
    }

    /// Build a layout of `count` items of equal width placed side by side.
    pub fn uniform(container_width: f64, item_width: f64, count: usize) -> Self {
        Self::new(
            container_width,
            (0..count).map(|i| (i as f64 * item_width, item_width)),
        )
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SlideItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
