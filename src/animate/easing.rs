//! Easing curves
//!
//! Map elapsed time to transition progress. `Linear` and `EaseInOut` run over
//! a fixed duration; `Spring` is a damped oscillator parameterised by its
//! response (undamped period, seconds) and damping fraction, and may overshoot.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Envelope amplitude below which a spring counts as settled
const SPRING_SETTLE_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease in, ease out
    EaseInOut,
    Spring {
        response: f64,
        damping_fraction: f64,
    },
}

impl Easing {
    /// Spring used for the honeycomb spacing entrance
    pub const ENTRANCE_SPRING: Self = Easing::Spring {
        response: 0.8,
        damping_fraction: 0.6,
    };

    pub fn validate(&self) -> Result<()> {
        if let Easing::Spring {
            response,
            damping_fraction,
        } = *self
        {
            if !(response.is_finite() && response > 0.0) {
                return Err(LayoutError::InvalidAnimation("spring response must be positive"));
            }
            if !(damping_fraction.is_finite() && damping_fraction > 0.0) {
                return Err(LayoutError::InvalidAnimation("spring damping must be positive"));
            }
        }
        Ok(())
    }

    /// Progress at `elapsed` seconds into a transition of `duration` seconds.
    ///
    /// 0.0 at the start; 1.0 once finished. Springs ignore `duration`.
    pub fn progress(&self, elapsed: f64, duration: f64) -> f64 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        match *self {
            Easing::Linear => (elapsed / duration).min(1.0),
            Easing::EaseInOut => {
                let t = (elapsed / duration).min(1.0);
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::Spring {
                response,
                damping_fraction,
            } => spring_progress(elapsed, response, damping_fraction),
        }
    }

    /// Time after which the curve has (visibly) come to rest
    pub fn settle_time(&self, duration: f64) -> f64 {
        match *self {
            Easing::Linear | Easing::EaseInOut => duration,
            Easing::Spring {
                response,
                damping_fraction,
            } => {
                let omega = TAU / response;
                let decay = if damping_fraction < 1.0 {
                    damping_fraction * omega
                } else {
                    // Slowest mode of an overdamped spring
                    omega * (damping_fraction - (damping_fraction * damping_fraction - 1.0).sqrt())
                };
                (1.0 / SPRING_SETTLE_EPSILON).ln() / decay
            }
        }
    }
}

/// Step response of a unit spring from 0 toward 1
fn spring_progress(t: f64, response: f64, zeta: f64) -> f64 {
    let omega = TAU / response;
    if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
    } else if zeta == 1.0 {
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    } else {
        let omega_d = omega * (zeta * zeta - 1.0).sqrt();
        let envelope = (-zeta * omega * t).exp();
        1.0 - envelope * ((omega_d * t).cosh() + (zeta * omega / omega_d) * (omega_d * t).sinh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(Easing::Linear.progress(0.0, 2.0), 0.0);
        assert_eq!(Easing::Linear.progress(1.0, 2.0), 0.5);
        assert_eq!(Easing::Linear.progress(3.0, 2.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        let e = Easing::EaseInOut;
        assert_eq!(e.progress(0.25, 0.5), 0.5);
        let a = e.progress(0.1, 1.0);
        let b = e.progress(0.9, 1.0);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert_eq!(e.progress(0.5, 0.5), 1.0);
    }

    #[test]
    fn test_spring_settles() {
        let spring = Easing::ENTRANCE_SPRING;
        let settle = spring.settle_time(0.0);
        assert!(settle > 0.0);
        assert!((spring.progress(settle * 2.0, 0.0) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let spring = Easing::ENTRANCE_SPRING;
        let peak = (1..200)
            .map(|i| spring.progress(i as f64 * 0.01, 0.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_critical_and_overdamped_do_not_overshoot() {
        for zeta in [1.0, 1.5] {
            let spring = Easing::Spring {
                response: 0.5,
                damping_fraction: zeta,
            };
            for i in 1..400 {
                assert!(spring.progress(i as f64 * 0.01, 0.0) <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_spring_validation() {
        let bad = Easing::Spring {
            response: 0.0,
            damping_fraction: 0.6,
        };
        assert!(bad.validate().is_err());
        assert!(Easing::ENTRANCE_SPRING.validate().is_ok());
    }
}
