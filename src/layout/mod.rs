//! Spiral honeycomb layout
//!
//! Items fill concentric hexagonal rings outward from a center point.
//! This module must stay pure and deterministic:
//! - No hidden state between calls
//! - Stable emission order (center, then ring by ring, corners before infill)
//! - No rendering or platform dependencies

pub mod honeycomb;
pub mod ring;

pub use honeycomb::{HoneycombSlots, Slot, compute_positions, compute_slots};
pub use ring::{HexRing, SlotKind, rings_needed, slots_through_ring};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ITEM_RADIUS, ITEM_SIZE, RING_SPACING};
use crate::error::{LayoutError, Result};

/// Position relative to the layout-local center
pub type Position = DVec2;

/// Ring geometry for one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Square extent proposed to each item
    pub item_size: f64,
    /// Item radius; sets the base distance between rings
    pub item_radius: f64,
    /// Extra gap added between rings
    pub ring_spacing: f64,
    /// Uniform rotation of every ring (radians)
    #[serde(default)]
    pub angle_offset_radians: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            item_size: ITEM_SIZE,
            item_radius: ITEM_RADIUS,
            ring_spacing: RING_SPACING,
            angle_offset_radians: 0.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(item_size: f64, item_radius: f64, ring_spacing: f64) -> Self {
        Self {
            item_size,
            item_radius,
            ring_spacing,
            angle_offset_radians: 0.0,
        }
    }

    pub fn with_angle_offset(mut self, radians: f64) -> Self {
        self.angle_offset_radians = radians;
        self
    }

    pub fn with_ring_spacing(mut self, spacing: f64) -> Self {
        self.ring_spacing = spacing;
        self
    }

    /// Reject configurations that would produce degenerate geometry
    pub fn validate(&self) -> Result<()> {
        if !(self.item_radius.is_finite() && self.item_radius > 0.0) {
            return Err(LayoutError::InvalidItemRadius(self.item_radius));
        }
        if !(self.ring_spacing.is_finite() && self.ring_spacing >= 0.0) {
            return Err(LayoutError::InvalidRingSpacing(self.ring_spacing));
        }
        if !(self.item_size.is_finite() && self.item_size > 0.0) {
            return Err(LayoutError::InvalidItemSize(self.item_size));
        }
        if !self.angle_offset_radians.is_finite() {
            return Err(LayoutError::InvalidAngleOffset(self.angle_offset_radians));
        }
        Ok(())
    }

    /// Distance between consecutive ring centers: `radius * √3 + spacing`
    #[inline]
    pub fn ring_distance(&self) -> f64 {
        self.item_radius * 3.0_f64.sqrt() + self.ring_spacing
    }

    /// Radius of the smallest circle enclosing `count` item centers
    pub fn extent(&self, count: usize) -> f64 {
        rings_needed(count) as f64 * self.ring_distance()
    }
}

/// The layout claims a square of the smaller proposed dimension
pub fn size_that_fits(width: f64, height: f64) -> f64 {
    width.min(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_geometry() {
        let config = LayoutConfig::default();
        assert_eq!(config.item_size, 50.0);
        assert_eq!(config.item_radius, 25.0);
        assert!((config.ring_distance() - (25.0 * 3.0_f64.sqrt() + 20.0)).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let config = LayoutConfig::new(50.0, 0.0, 20.0);
        assert!(matches!(config.validate(), Err(LayoutError::InvalidItemRadius(_))));
        let config = LayoutConfig::new(50.0, -3.0, 20.0);
        assert!(config.validate().is_err());
        let config = LayoutConfig::new(50.0, f64::NAN, 20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_spacing() {
        assert!(LayoutConfig::new(50.0, 25.0, 0.0).validate().is_ok());
        let config = LayoutConfig::new(50.0, 25.0, -1.0);
        assert!(matches!(config.validate(), Err(LayoutError::InvalidRingSpacing(_))));
    }

    #[test]
    fn test_validate_angle_offset() {
        let config = LayoutConfig::default().with_angle_offset(f64::INFINITY);
        assert!(matches!(config.validate(), Err(LayoutError::InvalidAngleOffset(_))));
    }

    #[test]
    fn test_extent() {
        let config = LayoutConfig::new(100.0, 50.0, 20.0);
        assert_eq!(config.extent(1), 0.0);
        assert!((config.extent(7) - config.ring_distance()).abs() < 1e-12);
        assert!((config.extent(8) - 2.0 * config.ring_distance()).abs() < 1e-12);
    }

    #[test]
    fn test_size_that_fits() {
        assert_eq!(size_that_fits(800.0, 600.0), 600.0);
        assert_eq!(size_that_fits(320.0, 320.0), 320.0);
    }
}
