//! Carousel tuning parameters.

use serde::{Deserialize, Serialize};

use crate::error::{SlideError, SlideResult};

/// Factor applied to raw pointer travel; higher values move the strip further per pixel.
pub const DEFAULT_SENSITIVITY: f64 = 1.6;

/// Scaled drag distance (in pixels) a gesture must exceed to change slide.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 120.0;

/// Delay before a burst of resizes is applied.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 200;

/// Duration hosts use to animate the strip when the transition is enabled.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Configuration for a [`Carousel`](crate::Carousel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Drag scaling factor.
    pub sensitivity: f64,
    /// Movement needed to advance or retreat one slide.
    pub snap_threshold: f64,
    /// Slide shown after initialization.
    pub start_index: usize,
    /// Trailing-edge debounce delay for resize handling.
    pub resize_debounce_ms: u64,
    /// Transition duration used by hosts that animate.
    pub transition_ms: u64,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            start_index: 0,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl SlideConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> SlideResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> SlideResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the numeric parameters are usable.
    pub fn validate(&self) -> SlideResult<()> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(SlideError::InvalidConfig(format!(
                "sensitivity must be a positive number, got {}",
                self.sensitivity
            )));
        }
        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            return Err(SlideError::InvalidConfig(format!(
                "snap_threshold must be non-negative, got {}",
                self.snap_threshold
            )));
        }
        Ok(())
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_snap_threshold(mut self, threshold: f64) -> Self {
        self.snap_threshold = threshold;
        self
    }

    pub fn with_start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    pub fn with_resize_debounce_ms(mut self, ms: u64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }
}
