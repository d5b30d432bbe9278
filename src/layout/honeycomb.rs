//! Spiral honeycomb enumeration
//!
//! Emission order:
//! 1. Center (index 0)
//! 2. For each ring r = 1, 2, ...: its 6 corners, then its 6(r - 1) infill slots
//!
//! The last ring is truncated to the requested item count.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ring::{HexRing, SlotKind};
use super::{LayoutConfig, Position};
use crate::error::Result;

/// A placed slot with its ring bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub index: usize,
    pub ring: usize,
    pub kind: SlotKind,
    pub position: Position,
}

/// Lazy slot sequence for a validated config
///
/// Unbounded; pair with `take` to lay out a fixed number of items.
#[derive(Debug, Clone)]
pub struct HoneycombSlots {
    spacing: f64,
    angle_offset: f64,
    next_index: usize,
    ring: usize,
    pending: Vec<(SlotKind, Position)>,
}

impl HoneycombSlots {
    pub fn new(config: &LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            spacing: config.ring_distance(),
            angle_offset: config.angle_offset_radians,
            next_index: 0,
            ring: 0,
            pending: Vec::new(),
        })
    }

    fn fill_next_ring(&mut self) {
        self.ring += 1;
        let ring = HexRing::new(self.ring, self.spacing, self.angle_offset);
        self.pending.clear();
        self.pending.extend(ring.slots());
        // Popped from the back
        self.pending.reverse();
    }
}

impl Iterator for HoneycombSlots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let index = self.next_index;
        self.next_index += 1;

        if index == 0 {
            return Some(Slot {
                index,
                ring: 0,
                kind: SlotKind::Center,
                position: DVec2::ZERO,
            });
        }

        if self.pending.is_empty() {
            self.fill_next_ring();
        }
        let (kind, position) = self.pending.pop()?;
        Some(Slot {
            index,
            ring: self.ring,
            kind,
            position,
        })
    }
}

/// Lay out `item_count` items, one position per item in generation order
pub fn compute_positions(item_count: usize, config: &LayoutConfig) -> Result<Vec<Position>> {
    Ok(HoneycombSlots::new(config)?
        .take(item_count)
        .map(|slot| slot.position)
        .collect())
}

/// Like [`compute_positions`], keeping ring and slot bookkeeping
pub fn compute_slots(item_count: usize, config: &LayoutConfig) -> Result<Vec<Slot>> {
    Ok(HoneycombSlots::new(config)?.take(item_count).collect())
}
