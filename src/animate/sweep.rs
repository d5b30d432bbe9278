//! Stepped sweeps driven by a periodic tick
//!
//! Each sweep advances one step per tick and never looks at wall-clock time;
//! the scheduler decides how often to tick.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::transform::RadialFocus;

/// Oscillates between `min` and `max`, reversing at each bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PingPong {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// True while moving toward `max`
    pub rising: bool,
}

impl PingPong {
    /// Depth sweep used to fan a radial ring out along z: 0.5 per tick over [0, 30]
    pub const DEPTH_FAN: Self = Self {
        value: 0.0,
        min: 0.0,
        max: 30.0,
        step: 0.5,
        rising: true,
    };

    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(LayoutError::InvalidAnimation("sweep bounds must satisfy min < max"));
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(LayoutError::InvalidAnimation("sweep step must be positive"));
        }
        Ok(Self {
            value: min,
            min,
            max,
            step,
            rising: true,
        })
    }

    /// Advance one step; direction flips once a bound is reached
    pub fn tick(&mut self) -> f64 {
        if self.rising {
            self.value += self.step;
            if self.value >= self.max {
                self.rising = false;
            }
        } else {
            self.value -= self.step;
            if self.value <= self.min {
                self.rising = true;
            }
        }
        self.value
    }

    /// Back to `min`, rising
    pub fn reset(&mut self) {
        self.value = self.min;
        self.rising = true;
    }

    /// Offset for item `index` when the sweep fans items apart
    pub fn offset_for(&self, index: usize) -> f64 {
        self.value * index as f64
    }
}

/// Rotates a radial ring by a fixed increment per step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleStepper {
    pub offset_degrees: f64,
    pub step_degrees: f64,
}

impl AngleStepper {
    pub fn new(step_degrees: f64) -> Result<Self> {
        if !step_degrees.is_finite() || step_degrees == 0.0 {
            return Err(LayoutError::InvalidAnimation("angle step must be finite and non-zero"));
        }
        Ok(Self {
            offset_degrees: 0.0,
            step_degrees,
        })
    }

    /// Advance and return the new offset (degrees, unwrapped)
    pub fn advance(&mut self) -> f64 {
        self.offset_degrees += self.step_degrees;
        self.offset_degrees
    }

    /// Current focus for a ring of `item_count` items
    pub fn focus(&self, item_count: usize) -> Result<RadialFocus> {
        RadialFocus::new(item_count, self.offset_degrees)
    }
}

/// Cycles a focal index through `0..count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAdvance {
    index: usize,
    count: usize,
}

impl AutoAdvance {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(LayoutError::EmptyRing);
        }
        Ok(Self { index: 0, count })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tick(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }

    /// Jump to `index` (wrapped into range)
    pub fn set_index(&mut self, index: usize) {
        self.index = index % self.count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_pong_reverses_at_bounds() {
        let mut sweep = PingPong::DEPTH_FAN;
        for _ in 0..60 {
            sweep.tick();
        }
        assert_eq!(sweep.value, 30.0);
        assert!(!sweep.rising);

        for _ in 0..60 {
            sweep.tick();
        }
        assert_eq!(sweep.value, 0.0);
        assert!(sweep.rising);

        sweep.tick();
        assert_eq!(sweep.value, 0.5);
    }

    #[test]
    fn test_ping_pong_stays_in_bounds() {
        let mut sweep = PingPong::new(-1.0, 1.0, 0.25).unwrap();
        for _ in 0..1000 {
            let v = sweep.tick();
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_ping_pong_reset_and_offsets() {
        let mut sweep = PingPong::DEPTH_FAN;
        sweep.tick();
        sweep.tick();
        assert_eq!(sweep.offset_for(4), 4.0);
        sweep.reset();
        assert_eq!(sweep.value, 0.0);
        assert_eq!(sweep.offset_for(10), 0.0);
    }

    #[test]
    fn test_ping_pong_rejects_bad_bounds() {
        assert!(PingPong::new(1.0, 1.0, 0.1).is_err());
        assert!(PingPong::new(0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_angle_stepper_moves_front() {
        let mut stepper = AngleStepper::new(30.0).unwrap();
        assert_eq!(stepper.focus(12).unwrap().front_index(), 0);
        stepper.advance();
        assert_eq!(stepper.focus(12).unwrap().front_index(), 11);
        stepper.advance();
        assert_eq!(stepper.focus(12).unwrap().front_index(), 10);
        assert_eq!(stepper.offset_degrees, 60.0);
    }

    #[test]
    fn test_auto_advance_wraps() {
        let mut advance = AutoAdvance::new(3).unwrap();
        assert_eq!(advance.tick(), 1);
        assert_eq!(advance.tick(), 2);
        assert_eq!(advance.tick(), 0);
        advance.set_index(7);
        assert_eq!(advance.index(), 1);
        assert!(AutoAdvance::new(0).is_err());
    }
}
