//! Focal-axis proximity transforms
//!
//! Per-item rotation, opacity and scale derived from where an item sits
//! relative to a focal point. Stateless; cheap enough to re-run every frame.

pub mod cover_flow;
pub mod proximity;
pub mod radial;

pub use cover_flow::CoverFlowStrip;
pub use proximity::{ProximityInput, ProximityOutput, compute_transform};
pub use radial::{RadialFocus, front_index};
