//! Horizontal cover-flow strip
//!
//! Turns strip geometry (viewport width, item width, scroll offset) into the
//! per-item [`ProximityInput`] the transform expects. The focal axis is the
//! viewport midpoint; opacity starts fading outside the central 80%.

use serde::{Deserialize, Serialize};

use super::proximity::{ProximityInput, ProximityOutput, compute_transform};
use crate::consts::FADE_THRESHOLD_FRACTION;
use crate::error::{LayoutError, Result};

/// Viewport-relative fade geometry for a scrolling strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverFlowStrip {
    pub viewport_width: f64,
    /// Width of each item cell along the strip
    pub item_width: f64,
    #[serde(default)]
    pub dead_zone: f64,
    /// Fraction of the half-width kept fully opaque
    #[serde(default = "default_fade_fraction")]
    pub fade_fraction: f64,
}

fn default_fade_fraction() -> f64 {
    FADE_THRESHOLD_FRACTION
}

impl CoverFlowStrip {
    pub fn new(viewport_width: f64, item_width: f64) -> Self {
        Self {
            viewport_width,
            item_width,
            dead_zone: 0.0,
            fade_fraction: FADE_THRESHOLD_FRACTION,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.viewport_width.is_finite() && self.viewport_width > 0.0) {
            return Err(LayoutError::InvalidViewport(self.viewport_width));
        }
        if !(self.item_width.is_finite() && self.item_width > 0.0) {
            return Err(LayoutError::InvalidItemSize(self.item_width));
        }
        if !(0.0..1.0).contains(&self.fade_fraction) {
            return Err(LayoutError::FadeRangeEmpty {
                fade_threshold: self.fade_threshold(),
                max_distance: self.max_distance(),
            });
        }
        Ok(())
    }

    /// Focal axis position in viewport coordinates
    #[inline]
    pub fn axis(&self) -> f64 {
        self.viewport_width / 2.0
    }

    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.viewport_width / 2.0
    }

    #[inline]
    pub fn fade_threshold(&self) -> f64 {
        self.max_distance() * self.fade_fraction
    }

    /// Leading padding that centers item 0 on the axis at zero scroll
    pub fn leading_padding(&self) -> f64 {
        self.axis() - self.item_width / 2.0
    }

    /// Center of item `index` in viewport coordinates
    pub fn item_center(&self, index: usize, scroll_offset: f64) -> f64 {
        self.leading_padding() + (index as f64 + 0.5) * self.item_width - scroll_offset
    }

    /// Proximity input for an item whose center sits at `item_center_x`
    pub fn input_at(&self, item_center_x: f64) -> ProximityInput {
        ProximityInput {
            signed_distance: item_center_x - self.axis(),
            dead_zone: self.dead_zone,
            fade_threshold: self.fade_threshold(),
            max_distance: self.max_distance(),
        }
    }

    /// Transforms for `item_count` items at the given scroll offset
    pub fn transforms(&self, item_count: usize, scroll_offset: f64) -> Result<Vec<ProximityOutput>> {
        self.validate()?;
        (0..item_count)
            .map(|i| compute_transform(&self.input_at(self.item_center(i, scroll_offset))))
            .collect()
    }

    /// Item nearest the axis at the given scroll offset
    pub fn focused_index(&self, item_count: usize, scroll_offset: f64) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        let raw = (scroll_offset / self.item_width).round();
        Some(raw.clamp(0.0, (item_count - 1) as f64) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_strip() {
        let strip = CoverFlowStrip::new(800.0, 300.0);
        assert_eq!(strip.max_distance(), 400.0);
        assert_eq!(strip.fade_threshold(), 160.0);
        assert_eq!(strip.item_center(0, 0.0), 400.0);
        assert_eq!(strip.item_center(1, 0.0), 700.0);
    }

    #[test]
    fn test_centered_item_is_untransformed() {
        let strip = CoverFlowStrip::new(800.0, 300.0);
        let out = strip.transforms(3, 300.0).unwrap();
        assert_eq!(out[1].rotation_degrees, 0.0);
        assert_eq!(out[1].opacity, 1.0);
        // Neighbours turn toward the axis from opposite sides
        assert!(out[0].rotation_degrees > 0.0);
        assert!(out[2].rotation_degrees < 0.0);
        assert_eq!(out[0].opacity, out[2].opacity);
    }

    #[test]
    fn test_far_items_hit_floor() {
        let strip = CoverFlowStrip::new(800.0, 300.0);
        let out = strip.transforms(19, 0.0).unwrap();
        assert_eq!(out.len(), 19);
        assert_eq!(out[18].opacity, 0.1);
    }

    #[test]
    fn test_focused_index() {
        let strip = CoverFlowStrip::new(800.0, 300.0);
        assert_eq!(strip.focused_index(0, 0.0), None);
        assert_eq!(strip.focused_index(10, 0.0), Some(0));
        assert_eq!(strip.focused_index(10, 460.0), Some(2));
        assert_eq!(strip.focused_index(10, -500.0), Some(0));
        assert_eq!(strip.focused_index(10, 1e6), Some(9));
    }

    #[test]
    fn test_invalid_strip() {
        assert!(matches!(
            CoverFlowStrip::new(0.0, 300.0).transforms(1, 0.0),
            Err(LayoutError::InvalidViewport(_))
        ));
        let mut strip = CoverFlowStrip::new(800.0, 300.0);
        strip.fade_fraction = 1.0;
        assert!(strip.transforms(1, 0.0).is_err());
    }
}
