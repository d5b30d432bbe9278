//! Error types
//!
//! Every fallible operation in the crate reports through [`LayoutError`].
//! Geometry is never silently clamped: a caller handed wrong positions would
//! misrender, so bad configuration is rejected at the call boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("item radius must be positive and finite, got {0}")]
    InvalidItemRadius(f64),
    #[error("ring spacing must be non-negative and finite, got {0}")]
    InvalidRingSpacing(f64),
    #[error("item size must be positive and finite, got {0}")]
    InvalidItemSize(f64),
    #[error("angle offset must be finite, got {0}")]
    InvalidAngleOffset(f64),
    #[error("max distance ({max_distance}) must exceed fade threshold ({fade_threshold})")]
    FadeRangeEmpty {
        fade_threshold: f64,
        max_distance: f64,
    },
    #[error("fade threshold must be non-negative, got {0}")]
    NegativeFadeThreshold(f64),
    #[error("dead zone must be non-negative, got {0}")]
    NegativeDeadZone(f64),
    #[error("proximity input must be finite")]
    NonFiniteProximity,
    #[error("radial ring needs at least one item")]
    EmptyRing,
    #[error("item count must be non-negative, got {0}")]
    NegativeItemCount(i64),
    #[error("item count must be an integer, got {0:?}")]
    InvalidItemCount(String),
    #[error("ring radius must be positive and finite, got {0}")]
    InvalidRingRadius(f64),
    #[error("viewport width must be positive and finite, got {0}")]
    InvalidViewport(f64),
    #[error("animation parameter out of range: {0}")]
    InvalidAnimation(&'static str),
    #[error("Platform error: {0}")]
    Platform(String),
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl LayoutError {
    /// True for the configuration family (everything except I/O and platform failures).
    pub fn is_invalid_configuration(&self) -> bool {
        !matches!(
            self,
            LayoutError::Io(_) | LayoutError::Settings(_) | LayoutError::Platform(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
