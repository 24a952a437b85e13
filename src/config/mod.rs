//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Where the background loop is written when no output is configured
pub const DEFAULT_OUTPUT: &str = "assets/audio/music/background.wav";

/// Example configuration written by `ambience init`
pub const EXAMPLE_CONFIG: &str = include_str!("../../ambience.example.yaml");

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {:?}", path))?;
    let config: GeneratorConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
