//! SlideTrack Core Library
//!
//! Platform-agnostic gesture tracking, positioning and slide-index logic for
//! a horizontal drag/swipe carousel. Hosts drive a [`Carousel`] with pointer
//! events and render through a [`SlideSurface`].

pub mod carousel;
pub mod config;
pub mod debounce;
pub mod error;
pub mod index;
pub mod layout;
pub mod navigation;
pub mod pointer;
pub mod position;
pub mod surface;

pub use carousel::{Carousel, SlideEvent};
pub use config::SlideConfig;
pub use debounce::Debounce;
pub use error::{SlideError, SlideResult};
pub use index::SlideIndex;
pub use layout::{compute_anchor, SlideItem, SlideLayout};
pub use navigation::{ArrowControls, DotControl};
pub use pointer::{DragDistance, GesturePhase, PointerEvent, PointerSource, PointerTracker};
pub use position::{GestureOutcome, PositionEngine};
pub use surface::SlideSurface;
