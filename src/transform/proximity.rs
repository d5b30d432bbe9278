//! Distance-weighted cover-flow transform
//!
//! Maps an item's signed distance from the focal axis to:
//! - rotation: zero inside the dead zone, otherwise `-distance / 8` degrees
//! - opacity: full inside the fade threshold, linear fade to a 0.1 floor at max distance

use serde::{Deserialize, Serialize};

use crate::consts::{OPACITY_FLOOR, ROTATION_SENSITIVITY};
use crate::error::{LayoutError, Result};

/// One item's distance from the focal axis plus the fade geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityInput {
    /// Item center minus axis position; positive means right of the axis
    pub signed_distance: f64,
    /// Rotation is suppressed while `|signed_distance| < dead_zone`
    pub dead_zone: f64,
    /// Opacity stays at 1.0 while `|signed_distance| < fade_threshold`
    pub fade_threshold: f64,
    /// Distance at which opacity reaches its floor
    pub max_distance: f64,
}

/// Rendering transform for one item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityOutput {
    /// Rotation about the vertical axis (degrees)
    pub rotation_degrees: f64,
    /// In `[0.1, 1.0]`
    pub opacity: f64,
    /// In `(0.0, 1.0]`
    pub scale: f64,
}

impl ProximityOutput {
    /// Untransformed item
    pub const IDENTITY: Self = Self {
        rotation_degrees: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };
}

impl ProximityInput {
    pub fn new(signed_distance: f64, dead_zone: f64, fade_threshold: f64, max_distance: f64) -> Self {
        Self {
            signed_distance,
            dead_zone,
            fade_threshold,
            max_distance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let finite = self.signed_distance.is_finite()
            && self.dead_zone.is_finite()
            && self.fade_threshold.is_finite()
            && self.max_distance.is_finite();
        if !finite {
            return Err(LayoutError::NonFiniteProximity);
        }
        if self.dead_zone < 0.0 {
            return Err(LayoutError::NegativeDeadZone(self.dead_zone));
        }
        if self.fade_threshold < 0.0 {
            return Err(LayoutError::NegativeFadeThreshold(self.fade_threshold));
        }
        if self.max_distance <= self.fade_threshold {
            return Err(LayoutError::FadeRangeEmpty {
                fade_threshold: self.fade_threshold,
                max_distance: self.max_distance,
            });
        }
        Ok(())
    }

    /// Rotation in degrees; items right of the axis turn to face it
    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        // `== 0.0` also catches -0.0, which would otherwise negate to a signed zero
        if self.signed_distance.abs() < self.dead_zone || self.signed_distance == 0.0 {
            0.0
        } else {
            -self.signed_distance / ROTATION_SENSITIVITY
        }
    }

    /// Opacity after the linear fade, floored at [`OPACITY_FLOOR`]
    #[inline]
    pub fn opacity(&self) -> f64 {
        let distance = self.signed_distance.abs();
        if distance < self.fade_threshold {
            1.0
        } else {
            let fade = (distance - self.fade_threshold) / (self.max_distance - self.fade_threshold);
            (1.0 - fade).max(OPACITY_FLOOR)
        }
    }
}

/// Evaluate the cover-flow transform for one item
pub fn compute_transform(input: &ProximityInput) -> Result<ProximityOutput> {
    input.validate()?;
    Ok(ProximityOutput {
        rotation_degrees: input.rotation_degrees(),
        opacity: input.opacity(),
        scale: 1.0,
    })
}
