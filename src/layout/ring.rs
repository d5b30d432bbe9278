//! Hexagonal ring geometry
//!
//! Ring `r` sits at nominal radius `r * spacing` and holds `6r` slots:
//! - 6 corner slots at 60° intervals, on the nominal radius
//! - `6(r - 1)` infill slots between consecutive corners, pulled inward

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::Position;
use crate::consts::{HEX_CORNERS, INFILL_RADIUS_FACTOR};
use crate::polar_to_cartesian;

/// Where a slot sits within its ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// The layout center (ring 0)
    Center,
    /// One of the six primary angles
    Corner { corner: usize },
    /// Interpolated between `sector` and `sector + 1`, `step` of `ring` steps
    Infill { sector: usize, step: usize },
}

/// One concentric ring of the honeycomb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexRing {
    /// Ring number, counted outward from 1 (0 is the center)
    pub index: usize,
    /// Distance between consecutive rings
    pub spacing: f64,
    /// Rotation applied to every corner angle (radians)
    pub angle_offset: f64,
}

impl HexRing {
    pub fn new(index: usize, spacing: f64, angle_offset: f64) -> Self {
        Self {
            index,
            spacing,
            angle_offset,
        }
    }

    /// Nominal radius, where the corners sit
    #[inline]
    pub fn radius(&self) -> f64 {
        self.index as f64 * self.spacing
    }

    /// Radius of the infill slots
    #[inline]
    pub fn infill_radius(&self) -> f64 {
        self.radius() * INFILL_RADIUS_FACTOR
    }

    /// Number of slots this ring contributes
    pub fn slot_count(&self) -> usize {
        if self.index == 0 {
            1
        } else {
            HEX_CORNERS * self.index
        }
    }

    /// Number of infill slots (zero for the first ring)
    pub fn infill_count(&self) -> usize {
        HEX_CORNERS * self.index.saturating_sub(1)
    }

    /// Angle of corner `i` (radians, not wrapped)
    #[inline]
    pub fn corner_angle(&self, i: usize) -> f64 {
        i as f64 * PI / 3.0 + self.angle_offset
    }

    /// Angle of infill `step` (1..index) in the sector following corner `sector`
    pub fn infill_angle(&self, sector: usize, step: usize) -> f64 {
        let start = self.corner_angle(sector);
        let end = self.corner_angle(sector + 1);
        start + (end - start) * step as f64 / self.index as f64
    }

    /// Corner positions, in angular order
    pub fn corners(self) -> impl Iterator<Item = (SlotKind, Position)> {
        let radius = self.radius();
        (0..HEX_CORNERS).map(move |corner| {
            (
                SlotKind::Corner { corner },
                polar_to_cartesian(radius, self.corner_angle(corner)),
            )
        })
    }

    /// Infill positions, sector by sector
    pub fn infill(self) -> impl Iterator<Item = (SlotKind, Position)> {
        let radius = self.infill_radius();
        let steps = 1..self.index.max(1);
        (0..HEX_CORNERS).flat_map(move |sector| {
            steps.clone().map(move |step| {
                (
                    SlotKind::Infill { sector, step },
                    polar_to_cartesian(radius, self.infill_angle(sector, step)),
                )
            })
        })
    }

    /// Every slot of the ring in emission order: all corners, then all infill
    pub fn slots(self) -> impl Iterator<Item = (SlotKind, Position)> {
        self.corners().chain(self.infill())
    }
}

/// Total slots in rings `0..=ring` (center included): `1 + 3r(r + 1)`
pub fn slots_through_ring(ring: usize) -> usize {
    1 + 3 * ring * (ring + 1)
}

/// Smallest ring whose completion holds `count` items (0 for zero or one item)
pub fn rings_needed(count: usize) -> usize {
    let mut ring = 0;
    while slots_through_ring(ring) < count {
        ring += 1;
    }
    ring
}
