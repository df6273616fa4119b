//! Active/previous/next slide index state.

use serde::{Deserialize, Serialize};

use crate::error::{SlideError, SlideResult};

/// Position of the active slide within the strip.
///
/// `previous` is `None` exactly at the first slide and `next` is `None`
/// exactly at the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideIndex {
    previous: Option<usize>,
    active: usize,
    next: Option<usize>,
}

impl SlideIndex {
    /// Index state for `active` in a strip of `len` slides.
    pub fn new(active: usize, len: usize) -> SlideResult<Self> {
        if len == 0 {
            return Err(SlideError::EmptyTrack);
        }
        if active >= len {
            return Err(SlideError::IndexOutOfRange { index: active, len });
        }
        Ok(Self {
            previous: active.checked_sub(1),
            active,
            next: (active + 1 < len).then_some(active + 1),
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
