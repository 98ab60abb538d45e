//! Configuration management for the MST visualizer session

use std::time::Duration;

use crate::graph::generator::GeneratorOptions;
use crate::viz::{DisplayMode, ThemeName};

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial GV name field
    pub gv_name: String,

    /// Initial GV size field
    pub gv_size: String,

    /// Initial GV dividers field
    pub gv_dividers: String,

    /// Apply the fallbacks below to unusable GV fields instead of failing
    pub lenient_gv_input: bool,

    /// Size used when the size field cannot be parsed
    pub fallback_size: i64,

    /// Divider used for each divider token that cannot be parsed
    pub fallback_divider: i64,

    /// GV generation options
    pub generator: GeneratorOptions,

    /// Pause between animation steps
    pub animation_interval: Duration,

    pub theme: ThemeName,

    pub mode: DisplayMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gv_name: "Zaitsev Evgeny Alexandrovich".to_string(),
            gv_size: "7".to_string(),
            gv_dividers: "2 3".to_string(),
            lenient_gv_input: false,
            fallback_size: 7,
            fallback_divider: 1,
            generator: GeneratorOptions::default(),
            animation_interval: Duration::from_millis(500),
            theme: ThemeName::Dark,
            mode: DisplayMode::ThreeD,
        }
    }
}

impl Config {
    /// Create a new configuration with custom GV fields and pacing
    pub fn new(
        gv_name: impl Into<String>,
        gv_size: impl Into<String>,
        gv_dividers: impl Into<String>,
        animation_interval: Duration,
    ) -> Self {
        Self {
            gv_name: gv_name.into(),
            gv_size: gv_size.into(),
            gv_dividers: gv_dividers.into(),
            animation_interval,
            ..Self::default()
        }
    }
}
