//! Pipeline configuration.
//!
//! One injectable structure replaces the scattered per-script constants of
//! the original tooling (background hex, scale ratio, canvas size, density
//! table, output tree). It serializes to JSON so a frontend or a config
//! file can drive the pipeline.
//!
//! # Example
//!
//! ```
//! use icon_foundry::PipelineConfig;
//!
//! let config = PipelineConfig::default().with_target_ratio(0.55);
//! let json = config.to_json().unwrap();
//! let restored = PipelineConfig::from_json(&json).unwrap();
//! assert_eq!(restored.target_ratio, 0.55);
//! ```

use std::path::PathBuf;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::compose::MaskShape;
use crate::export::{self, DensityTier};

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Background color for composited variants. `None` means derive it
    /// from the source image via dominant-color extraction.
    #[serde(with = "crate::color::hex_opt")]
    pub background_color: Option<Srgb<u8>>,

    /// Color used when dominant-color extraction finds no matching pixel.
    #[serde(with = "crate::color::hex")]
    pub fallback_color: Srgb<u8>,

    /// Fraction of the canvas the foreground's longer side should occupy,
    /// in (0, 1]. The original tooling used anything from 0.55 to 0.8
    /// depending on the script; no single value is authoritative.
    pub target_ratio: f32,

    /// Square canvas edge for composited variants, in pixels.
    pub canvas_size: u32,

    /// Mask applied by the standalone compose operation. Android round
    /// variants always use the circle mask regardless of this setting.
    pub mask_shape: MaskShape,

    /// Density tiers for mipmap export.
    pub density_table: Vec<DensityTier>,

    /// Root of the Android resource tree the mipmap directories live under.
    pub res_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            background_color: Some(Srgb::new(0x01, 0x83, 0xfd)),
            fallback_color: Srgb::new(0x00, 0x85, 0xff),
            target_ratio: 0.6,
            canvas_size: 512,
            mask_shape: MaskShape::None,
            density_table: export::default_density_table(),
            res_dir: PathBuf::from("android/app/src/main/res"),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fixed background with auto-extraction from the source.
    pub fn with_auto_background(mut self) -> Self {
        self.background_color = None;
        self
    }

    pub fn with_background(mut self, color: Srgb<u8>) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_target_ratio(mut self, ratio: f32) -> Self {
        self.target_ratio = ratio;
        self
    }

    pub fn with_canvas_size(mut self, size: u32) -> Self {
        self.canvas_size = size;
        self
    }

    pub fn with_res_dir(mut self, res_dir: impl Into<PathBuf>) -> Self {
        self.res_dir = res_dir.into();
        self
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes from JSON. Unknown fields are ignored; missing fields
    /// take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_original_tooling_constants() {
        let config = PipelineConfig::default();
        assert_eq!(config.background_color, Some(Srgb::new(1, 131, 253)));
        assert_eq!(config.target_ratio, 0.6);
        assert_eq!(config.canvas_size, 512);
        assert_eq!(config.density_table.len(), 5);
    }

    #[test]
    fn json_round_trip() {
        let config = PipelineConfig::default()
            .with_auto_background()
            .with_target_ratio(0.65)
            .with_res_dir("out/res");

        let json = config.to_json().unwrap();
        let restored = PipelineConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn colors_serialize_as_hex_strings() {
        let json = PipelineConfig::default().to_json().unwrap();
        assert!(json.contains("\"backgroundColor\": \"#0183fd\""));
        assert!(json.contains("\"fallbackColor\": \"#0085ff\""));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = PipelineConfig::from_json(r#"{ "targetRatio": 0.8 }"#).unwrap();
        assert_eq!(config.target_ratio, 0.8);
        assert_eq!(config.canvas_size, 512);
        assert_eq!(config.background_color, Some(Srgb::new(1, 131, 253)));
    }

    #[test]
    fn null_background_means_auto() {
        let config = PipelineConfig::from_json(r#"{ "backgroundColor": null }"#).unwrap();
        assert_eq!(config.background_color, None);
    }
}
