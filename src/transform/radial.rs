//! Front-item selection for a rotating radial ring
//!
//! Items sit at `index * 360/N + offset` degrees. The item nearest 0° is the
//! front item and renders at full scale; every other item renders at half.
//! The front index is derived from the offset on every call and never cached,
//! so it cannot drift from the visual rotation.
//!
//! In 3D the ring lies in the xz-plane around the viewer: an item at angle θ
//! sits at `(r·sin θ, 0, -r·cos θ)`, so 0° is straight ahead on -z.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::ProximityOutput;
use crate::consts::{BACK_SCALE, FRONT_SCALE};
use crate::error::{LayoutError, Result};
use crate::wrap_index;

/// A ring of `item_count` items rotated by a continuous angular offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialFocus {
    item_count: usize,
    angle_offset_degrees: f64,
}

impl RadialFocus {
    pub fn new(item_count: usize, angle_offset_degrees: f64) -> Result<Self> {
        if item_count == 0 {
            return Err(LayoutError::EmptyRing);
        }
        if !angle_offset_degrees.is_finite() {
            return Err(LayoutError::InvalidAngleOffset(angle_offset_degrees));
        }
        Ok(Self {
            item_count,
            angle_offset_degrees,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn angle_offset_degrees(&self) -> f64 {
        self.angle_offset_degrees
    }

    /// Replace the offset, keeping the item count
    pub fn set_angle_offset(&mut self, degrees: f64) -> Result<()> {
        if !degrees.is_finite() {
            return Err(LayoutError::InvalidAngleOffset(degrees));
        }
        self.angle_offset_degrees = degrees;
        Ok(())
    }

    #[inline]
    pub fn degrees_per_item(&self) -> f64 {
        360.0 / self.item_count as f64
    }

    /// Angle of item `index` including the ring's offset (degrees, not wrapped)
    pub fn item_angle_degrees(&self, index: usize) -> f64 {
        index as f64 * self.degrees_per_item() + self.angle_offset_degrees
    }

    /// Position of item `index` on a ring of `radius` around the origin
    pub fn position(&self, index: usize, radius: f64) -> DVec3 {
        let angle = self.item_angle_degrees(index).to_radians();
        DVec3::new(radius * angle.sin(), 0.0, -radius * angle.cos())
    }

    /// Positions of every item, rotated by the ring's offset
    pub fn positions(&self, radius: f64) -> Result<Vec<DVec3>> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(LayoutError::InvalidRingRadius(radius));
        }
        Ok((0..self.item_count)
            .map(|index| self.position(index, radius))
            .collect())
    }

    /// Index of the item currently nearest the front
    pub fn front_index(&self) -> usize {
        let raw = (-self.angle_offset_degrees / self.degrees_per_item()).round();
        wrap_index(raw as i64, self.item_count)
    }

    pub fn is_front(&self, index: usize) -> bool {
        index % self.item_count == self.front_index()
    }

    /// Binary scale: full for the front item, half otherwise
    pub fn scale_for(&self, index: usize) -> f64 {
        if self.is_front(index) {
            FRONT_SCALE
        } else {
            BACK_SCALE
        }
    }

    pub fn transform_for(&self, index: usize) -> ProximityOutput {
        ProximityOutput {
            scale: self.scale_for(index),
            ..ProximityOutput::IDENTITY
        }
    }
}

/// Front index for a ring of `item_count` items at `angle_offset_degrees`
pub fn front_index(item_count: usize, angle_offset_degrees: f64) -> Result<usize> {
    Ok(RadialFocus::new(item_count, angle_offset_degrees)?.front_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_front_index_literal_cases() {
        assert_eq!(front_index(12, 0.0).unwrap(), 0);
        assert_eq!(front_index(12, 30.0).unwrap(), 11);
        assert_eq!(front_index(12, -30.0).unwrap(), 1);
        assert_eq!(front_index(12, 360.0).unwrap(), 0);
    }

    #[test]
    fn test_front_index_rounds_to_nearest() {
        // 11 items: 32.7° per item
        assert_eq!(front_index(11, 10.0).unwrap(), 0);
        assert_eq!(front_index(11, 20.0).unwrap(), 10);
        assert_eq!(front_index(11, -50.0).unwrap(), 2);
    }

    #[test]
    fn test_front_index_tracks_offset_changes() {
        let mut focus = RadialFocus::new(12, 0.0).unwrap();
        assert_eq!(focus.front_index(), 0);
        focus.set_angle_offset(60.0).unwrap();
        assert_eq!(focus.front_index(), 10);
        focus.set_angle_offset(-90.0).unwrap();
        assert_eq!(focus.front_index(), 3);
    }

    #[test]
    fn test_scale_is_binary() {
        let focus = RadialFocus::new(12, 30.0).unwrap();
        assert_eq!(focus.scale_for(11), 1.0);
        assert_eq!(focus.scale_for(0), 0.5);
        assert_eq!(focus.scale_for(5), 0.5);
        let t = focus.transform_for(11);
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.rotation_degrees, 0.0);
    }

    #[test]
    fn test_front_item_sits_near_zero() {
        let focus = RadialFocus::new(11, 47.0).unwrap();
        let angle = focus.item_angle_degrees(focus.front_index()).rem_euclid(360.0);
        let distance = angle.min(360.0 - angle);
        assert!(distance <= focus.degrees_per_item() / 2.0 + 1e-9);
    }

    #[test]
    fn test_positions_start_in_front() {
        let r = 3.0;
        let positions = RadialFocus::new(8, 0.0).unwrap().positions(r).unwrap();
        assert_eq!(positions.len(), 8);
        assert!((positions[0] - DVec3::new(0.0, 0.0, -r)).length() < 1e-12);
        assert!((positions[2] - DVec3::new(r, 0.0, 0.0)).length() < 1e-12);
        assert!((positions[4] - DVec3::new(0.0, 0.0, r)).length() < 1e-12);
        for p in &positions {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - r).abs() < 1e-12);
        }
    }

    #[test]
    fn test_positions_follow_offset() {
        let r = 2.0;
        // Rotating by -90° brings item 2 to the front
        let focus = RadialFocus::new(8, -90.0).unwrap();
        let positions = focus.positions(r).unwrap();
        assert_eq!(focus.front_index(), 2);
        assert!((positions[2] - DVec3::new(0.0, 0.0, -r)).length() < 1e-12);
        assert!((positions[0] - DVec3::new(-r, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_positions_reject_bad_radius() {
        let focus = RadialFocus::new(8, 0.0).unwrap();
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(focus.positions(r), Err(LayoutError::InvalidRingRadius(_))));
        }
    }

    #[test]
    fn test_invalid_ring() {
        assert!(matches!(RadialFocus::new(0, 0.0), Err(LayoutError::EmptyRing)));
        assert!(matches!(
            RadialFocus::new(4, f64::NAN),
            Err(LayoutError::InvalidAngleOffset(_))
        ));
        let mut focus = RadialFocus::new(4, 0.0).unwrap();
        assert!(focus.set_angle_offset(f64::INFINITY).is_err());
        assert_eq!(focus.angle_offset_degrees(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_front_index_in_range(count in 1usize..64, offset in -10_000.0f64..10_000.0) {
            let focus = RadialFocus::new(count, offset).unwrap();
            prop_assert!(focus.front_index() < count);
            let fronts = (0..count).filter(|&i| focus.is_front(i)).count();
            prop_assert_eq!(fronts, 1);
        }

        #[test]
        fn prop_front_item_is_closest_to_viewer(count in 1usize..64, offset in -720.0f64..720.0) {
            let focus = RadialFocus::new(count, offset).unwrap();
            let positions = focus.positions(1.0).unwrap();
            let front_z = positions[focus.front_index()].z;
            for p in &positions {
                prop_assert!(front_z <= p.z + 1e-9);
            }
        }
    }
}
