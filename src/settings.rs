//! Layout settings and presets
//!
//! Persisted as JSON. Every section is validated on load so a bad file fails
//! before any geometry is produced.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animate::PingPong;
use crate::error::{LayoutError, Result};
use crate::layout::LayoutConfig;
use crate::transform::{CoverFlowStrip, RadialFocus};

/// Layout preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Small honeycomb behind a title card
    #[default]
    Background,
    /// Large honeycomb with generous spacing
    Spacious,
    /// Wide strip tuned for cover flow
    CoverFlow,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Background => "Background",
            Preset::Spacious => "Spacious",
            Preset::CoverFlow => "CoverFlow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "background" | "bg" => Some(Preset::Background),
            "spacious" => Some(Preset::Spacious),
            "coverflow" | "cover-flow" | "cover_flow" => Some(Preset::CoverFlow),
            _ => None,
        }
    }

    /// Honeycomb geometry for this preset
    pub fn honeycomb(&self) -> LayoutConfig {
        match self {
            Preset::Background => LayoutConfig::default(),
            Preset::Spacious => LayoutConfig::new(100.0, 50.0, 20.0),
            Preset::CoverFlow => LayoutConfig::new(300.0, 150.0, 20.0),
        }
    }

    /// Strip geometry for this preset
    pub fn strip(&self) -> CoverFlowStrip {
        match self {
            Preset::Background | Preset::Spacious => CoverFlowStrip::new(800.0, 200.0),
            Preset::CoverFlow => CoverFlowStrip::new(800.0, 300.0),
        }
    }
}

/// Radial ring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialSettings {
    pub item_count: usize,
    /// Rotation applied per "shift" step (degrees)
    pub angle_step_degrees: f64,
    /// Depth fan sweep (per-item z offset)
    pub depth_sweep: PingPong,
    /// Depth sweep tick interval (milliseconds)
    pub sweep_interval_ms: u64,
}

impl Default for RadialSettings {
    fn default() -> Self {
        Self {
            item_count: 11,
            angle_step_degrees: 30.0,
            depth_sweep: PingPong::DEPTH_FAN,
            sweep_interval_ms: 50,
        }
    }
}

/// Complete settings for one layout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub preset: Preset,

    // === Honeycomb ===
    /// Items placed in the honeycomb
    pub item_count: usize,
    pub honeycomb: LayoutConfig,

    // === Cover flow ===
    /// Items in the scrolling strip
    pub strip_count: usize,
    pub strip: CoverFlowStrip,

    // === Radial ring ===
    #[serde(default)]
    pub radial: RadialSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Preset::Background)
    }
}

impl Settings {
    /// Create settings from a preset (applies preset defaults)
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            item_count: 72,
            honeycomb: preset.honeycomb(),
            strip_count: 19,
            strip: preset.strip(),
            radial: RadialSettings::default(),
        }
    }

    /// Apply a preset (replaces the preset-dependent geometry)
    pub fn apply_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.honeycomb = preset.honeycomb();
        self.strip = preset.strip();
    }

    pub fn validate(&self) -> Result<()> {
        self.honeycomb.validate()?;
        self.strip.validate()?;
        RadialFocus::new(self.radial.item_count, 0.0)?;
        let sweep = &self.radial.depth_sweep;
        PingPong::new(sweep.min, sweep.max, sweep.step)?;
        if self.radial.sweep_interval_ms == 0 {
            return Err(LayoutError::InvalidAnimation("sweep interval must be non-zero"));
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        for preset in [Preset::Background, Preset::Spacious, Preset::CoverFlow] {
            assert_eq!(Preset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(Preset::from_str("cover-flow"), Some(Preset::CoverFlow));
        assert_eq!(Preset::from_str("nope"), None);
    }

    #[test]
    fn test_defaults_validate() {
        for preset in [Preset::Background, Preset::Spacious, Preset::CoverFlow] {
            assert!(Settings::from_preset(preset).validate().is_ok());
        }
    }

    #[test]
    fn test_apply_preset() {
        let mut settings = Settings::default();
        settings.item_count = 5;
        settings.apply_preset(Preset::Spacious);
        assert_eq!(settings.honeycomb.item_radius, 50.0);
        assert_eq!(settings.item_count, 5);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::from_preset(Preset::CoverFlow);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_json_defaults_optional_fields() {
        let json = r#"{
            "preset": "Spacious",
            "item_count": 12,
            "honeycomb": { "item_size": 100.0, "item_radius": 50.0, "ring_spacing": 20.0 },
            "strip_count": 5,
            "strip": { "viewport_width": 800.0, "item_width": 300.0 }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.honeycomb.angle_offset_radians, 0.0);
        assert_eq!(settings.strip.fade_fraction, 0.4);
        assert_eq!(settings.radial.item_count, 11);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.honeycomb.item_radius = 0.0;
        let json = serde_json::to_string(&settings).unwrap();
        let err = Settings::from_json(&json).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LayoutError::Settings(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/spatial-layout.json").unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }
}
