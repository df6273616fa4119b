//! Visual contract between the carousel and whatever draws it.

/// Receives the visual state computed by a [`Carousel`](crate::Carousel).
///
/// Implementations only apply what they are told; they never compute positions.
pub trait SlideSurface {
    /// Move the strip to a horizontal offset in pixels.
    fn translate(&mut self, x: f64);

    /// Turn the position transition on or off.
    fn set_transition(&mut self, enabled: bool);

    /// Mark `index` as the single active item.
    fn mark_active(&mut self, index: usize);
}

impl<S: SlideSurface + ?Sized> SlideSurface for &mut S {
    fn translate(&mut self, x: f64) {
        (**self).translate(x);
    }

    fn set_transition(&mut self, enabled: bool) {
        (**self).set_transition(enabled);
    }

    fn mark_active(&mut self, index: usize) {
        (**self).mark_active(index);
    }
}

/// Surface that records every call, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub translations: Vec<f64>,
    pub transitions: Vec<bool>,
    pub active: Option<usize>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn last_translation(&self) -> Option<f64> {
        self.translations.last().copied()
    }

    pub fn transition(&self) -> Option<bool> {
        self.transitions.last().copied()
    }
}

#[cfg(test)]
impl SlideSurface for RecordingSurface {
    fn translate(&mut self, x: f64) {
        self.translations.push(x);
    }

    fn set_transition(&mut self, enabled: bool) {
        self.transitions.push(enabled);
    }

    fn mark_active(&mut self, index: usize) {
        self.active = Some(index);
    }
}
