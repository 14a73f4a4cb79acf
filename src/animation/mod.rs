//! # Continuous Motion
//!
//! Time-based helpers for the per-frame updates of tracked objects: scale
//! easing towards a target, vertical floating and linear interpolation.
//!
//! Everything here is parametrized by elapsed seconds rather than frame
//! count, so the motion looks the same at any tick rate.

use crate::error::{Error, Result};

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Vertical offset of a floating object at `elapsed` seconds
pub fn float_offset(elapsed: f32, phase: f32, amplitude: f32) -> f32 {
    (elapsed + phase).sin() * amplitude
}

/// Exponential easing towards a target.
///
/// `smoothing` is the fraction of the remaining distance covered per tick at
/// `reference_rate` ticks per second. Other tick rates get the equivalent
/// continuous-time decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    pub smoothing: f32,
    pub reference_rate: f32,
}

impl Default for Easing {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            reference_rate: 60.0,
        }
    }
}

impl Easing {
    pub fn new(smoothing: f32, reference_rate: f32) -> Self {
        Self {
            smoothing,
            reference_rate,
        }
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_reference_rate(mut self, reference_rate: f32) -> Self {
        self.reference_rate = reference_rate;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "easing smoothing must be in (0, 1], got {}",
                self.smoothing
            )));
        }
        if !(self.reference_rate.is_finite() && self.reference_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "easing reference rate must be positive, got {}",
                self.reference_rate
            )));
        }
        Ok(())
    }

    /// Interpolation factor for a step of `dt` seconds
    pub fn factor(&self, dt: f32) -> f32 {
        if dt <= 0.0 {
            return 0.0;
        }
        1.0 - (1.0 - self.smoothing).powf(dt * self.reference_rate)
    }

    /// Advance `current` towards `target` over `dt` seconds
    pub fn step(&self, current: f32, target: f32, dt: f32) -> f32 {
        lerp(current, target, self.factor(dt))
    }

    /// Advance by exactly one reference tick
    pub fn step_tick(&self, current: f32, target: f32) -> f32 {
        lerp(current, target, self.smoothing)
    }
}
