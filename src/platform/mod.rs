//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Exported layout entry points (wasm-bindgen)
//! - Timers (`setInterval` behind the `Scheduler` seam)
//! - Logging backend setup

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::IntervalScheduler;

use crate::error::{LayoutError, Result};

/// Item counts arrive as signed integers from JS; reject negatives up front
pub fn checked_item_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| LayoutError::NegativeItemCount(count))
}

/// Flatten positions into interleaved `x, y` pairs for GPU/JS upload
pub fn interleave(positions: &[crate::Position]) -> Vec<f32> {
    positions
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32])
        .collect()
}
