//! Interpolated transitions between two layout states
//!
//! The layouts only own geometry. A transition blends two parameter sets and
//! the caller feeds the blended set back into the layout every frame. Because
//! positions are continuous in every `LayoutConfig` field, blending the config
//! gives a continuous in-between layout with no index reassignment.
//!
//! Springs overshoot, so a raw [`Transition::sample`] of a config can briefly
//! leave the valid range (spacing 20 -> 0 dips below zero). Use
//! [`Transition::sample_config`] when the result is fed back into the layout.

use glam::DVec2;

use super::easing::Easing;
use crate::error::{LayoutError, Result};
use crate::layout::LayoutConfig;

/// Linear blend between two values of the same type
pub trait Lerp: Clone {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    #[inline]
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for DVec2 {
    #[inline]
    fn lerp(&self, other: &Self, t: f64) -> Self {
        DVec2::lerp(*self, *other, t)
    }
}

impl Lerp for LayoutConfig {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            item_size: Lerp::lerp(&self.item_size, &other.item_size, t),
            item_radius: Lerp::lerp(&self.item_radius, &other.item_radius, t),
            ring_spacing: Lerp::lerp(&self.ring_spacing, &other.ring_spacing, t),
            angle_offset_radians: Lerp::lerp(&self.angle_offset_radians, &other.angle_offset_radians, t),
        }
    }
}

/// A timed blend from `from` to `to`
#[derive(Debug, Clone)]
pub struct Transition<T: Lerp> {
    pub from: T,
    pub to: T,
    pub easing: Easing,
    /// Seconds; springs use their own settle time instead
    pub duration: f64,
}

impl<T: Lerp> Transition<T> {
    pub fn new(from: T, to: T, easing: Easing, duration: f64) -> Result<Self> {
        easing.validate()?;
        let timed = !matches!(easing, Easing::Spring { .. });
        if timed && !(duration.is_finite() && duration > 0.0) {
            return Err(LayoutError::InvalidAnimation("duration must be positive"));
        }
        Ok(Self {
            from,
            to,
            easing,
            duration,
        })
    }

    /// Spring transition; runs until the spring settles
    pub fn spring(from: T, to: T, easing: Easing) -> Result<Self> {
        easing.validate()?;
        let duration = easing.settle_time(0.0);
        Self::new(from, to, easing, duration)
    }

    /// Blended value at `elapsed` seconds
    pub fn sample(&self, elapsed: f64) -> T {
        if self.is_finished(elapsed) {
            return self.to.clone();
        }
        let t = self.easing.progress(elapsed, self.duration);
        self.from.lerp(&self.to, t)
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.easing.settle_time(self.duration)
    }
}

impl Transition<LayoutConfig> {
    /// Blended config clamped back into the range [`LayoutConfig::validate`] accepts
    pub fn sample_config(&self, elapsed: f64) -> LayoutConfig {
        let mut config = self.sample(elapsed);
        config.ring_spacing = config.ring_spacing.max(0.0);
        config.item_radius = config.item_radius.max(f64::MIN_POSITIVE);
        config.item_size = config.item_size.max(f64::MIN_POSITIVE);
        config
    }
}
