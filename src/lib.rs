//! Spatial Layout - procedural layouts for spatial UI
//!
//! Core modules:
//! - `layout`: Spiral honeycomb packing (index -> position)
//! - `transform`: Focal-axis proximity transforms (distance -> rotation/opacity/scale)
//! - `animate`: Interpolation, sweeps and the scheduler seam that drive the layouts
//! - `platform`: Browser bindings and boundary helpers
//! - `settings`: Data-driven layout presets

pub mod animate;
pub mod error;
pub mod layout;
pub mod platform;
pub mod settings;
pub mod transform;

pub use error::{LayoutError, Result};
pub use layout::{LayoutConfig, Position, compute_positions};
pub use settings::{Preset, Settings};
pub use transform::{ProximityInput, ProximityOutput, RadialFocus, compute_transform};

use glam::DVec2;

/// Layout tuning constants
pub mod consts {
    /// Default item extent (square)
    pub const ITEM_SIZE: f64 = 50.0;
    /// Default item radius (half the item extent)
    pub const ITEM_RADIUS: f64 = ITEM_SIZE / 2.0;
    /// Default gap added between ring centers
    pub const RING_SPACING: f64 = 20.0;

    /// Corner slots per hexagonal ring
    pub const HEX_CORNERS: usize = 6;
    /// Infill slots sit at 85% of the ring radius (pulled in by 15%)
    pub const INFILL_RADIUS_FACTOR: f64 = 1.0 - 0.15;

    /// Degrees of rotation per unit of distance from the focal axis
    pub const ROTATION_SENSITIVITY: f64 = 8.0;
    /// Opacity never fades below this
    pub const OPACITY_FLOOR: f64 = 0.1;
    /// Items stay fully opaque over the central 80% of the strip
    pub const FADE_THRESHOLD_FRACTION: f64 = 0.4;

    /// Scale of the item facing front in a radial ring
    pub const FRONT_SCALE: f64 = 1.0;
    /// Scale of every other item in a radial ring
    pub const BACK_SCALE: f64 = 0.5;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}

/// Non-negative modulo: always lands in `[0, n)` regardless of the sign of `value`
#[inline]
pub fn wrap_index(value: i64, n: usize) -> usize {
    let n = n as i64;
    (((value % n) + n) % n) as usize
}
