// THEORY:
// `QuizConfig` gathers every tunable of the generator and the difficulty ladder in
// one plain struct, so behaviour can be adjusted without touching the algorithms.
// It deserialises from JSON with `#[serde(default)]`, meaning a config file only
// needs to name the fields it wants to change.

use crate::core_modules::error::ConfigError;
use crate::core_modules::grid_raster::RenderStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Probability that a blob claims an eligible neighbour of the cell it is expanding.
pub const DEFAULT_GROWTH_PROBABILITY: f64 = 0.6;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;
pub const DEFAULT_MAX_BLOB_RESEEDS: u32 = 32;
pub const DEFAULT_BLOB_MIN_CELLS: usize = 6;
pub const DEFAULT_BLOB_MAX_CELLS: usize = 14;

/// Configuration for the generator, difficulty ladder and renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub growth_probability: f64,
    /// Upper bound on generation attempts before giving up on a shape kind.
    pub max_attempts: u32,
    /// How many times a stalled blob may reseed its frontier from the whole region.
    pub max_blob_reseeds: u32,
    pub blob_min_cells: usize,
    pub blob_max_cells: usize,
    pub start_level: u8,
    pub min_level: u8,
    pub max_level: u8,
    pub render: RenderStyle,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            growth_probability: DEFAULT_GROWTH_PROBABILITY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_blob_reseeds: DEFAULT_MAX_BLOB_RESEEDS,
            blob_min_cells: DEFAULT_BLOB_MIN_CELLS,
            blob_max_cells: DEFAULT_BLOB_MAX_CELLS,
            start_level: 1,
            min_level: 1,
            max_level: 5,
            render: RenderStyle::default(),
        }
    }
}

impl QuizConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.growth_probability > 0.0 && self.growth_probability <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "growth_probability must be in (0, 1], got {}",
                self.growth_probability
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be at least 1".into()));
        }
        if self.blob_min_cells == 0 || self.blob_min_cells > self.blob_max_cells {
            return Err(ConfigError::Invalid(format!(
                "blob size range {}..={} is empty",
                self.blob_min_cells, self.blob_max_cells
            )));
        }
        if self.min_level == 0 || self.min_level > self.max_level {
            return Err(ConfigError::Invalid(format!(
                "level range {}..={} is empty",
                self.min_level, self.max_level
            )));
        }
        if !(self.min_level..=self.max_level).contains(&self.start_level) {
            return Err(ConfigError::Invalid(format!(
                "start_level {} is outside {}..={}",
                self.start_level, self.min_level, self.max_level
            )));
        }
        if self.render.cell_size == 0 {
            return Err(ConfigError::Invalid("render.cell_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(QuizConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = QuizConfig::from_json_str(r#"{ "growth_probability": 0.9, "max_level": 4 }"#).unwrap();
        assert_eq!(config.growth_probability, 0.9);
        assert_eq!(config.max_level, 4);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.render, RenderStyle::default());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            QuizConfig::from_json_str(r#"{ "growth_probability": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            QuizConfig::from_json_str(r#"{ "blob_min_cells": 10, "blob_max_cells": 4 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            QuizConfig::from_json_str(r#"{ "start_level": 9 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            QuizConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            QuizConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
