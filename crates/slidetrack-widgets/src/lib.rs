//! egui widgets for hosting a SlideTrack carousel.
//!
//! - **Strip**: the draggable, animated track of slides
//! - **Arrows**: previous/next chevron buttons
//! - **Dots**: one clickable marker per slide
//! - **Surface**: the egui implementation of the visual contract

pub mod arrows;
pub mod dots;
pub mod strip;
pub mod surface;

pub use arrows::{arrow_controls, ArrowButton, ArrowDirection};
pub use dots::DotIndicator;
pub use strip::{paint_placeholder, SlideStrip};
pub use surface::EguiSurface;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Arrow button size
    pub const ARROW: f32 = 32.0;
    /// Dot marker radius
    pub const DOT_RADIUS: f32 = 4.0;
    /// Space between dot markers
    pub const DOT_SPACING: f32 = 8.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Slide corner radius
    pub const SLIDE_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Disabled foreground
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(180, 180, 180);
    /// Inactive dot / slide border
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Active dot and active slide outline (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Slide background
    pub const SLIDE_BG: Color32 = Color32::from_rgb(235, 245, 255);
}
