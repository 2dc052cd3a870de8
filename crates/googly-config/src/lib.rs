//! On-disk configuration for the googly binary.
//!
//! A single TOML file controls canvas geometry, palette, frame rate, and
//! which behaviors start enabled. Every field has a default, so a missing
//! file (the common case) just runs the stock eyes; a malformed file is an
//! error rather than a silent fallback.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration schema (`config.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub colors: ColorConfig,
    pub autoblinker: TimerConfig,
    pub idle: TimerConfig,
    /// Start with the auto-cycling demo sequence running.
    pub demo: bool,
    /// Fixed RNG seed for reproducible runs; omit for OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            colors: ColorConfig::default(),
            autoblinker: TimerConfig {
                enabled: true,
                interval_s: 2,
                jitter_s: 3,
            },
            idle: TimerConfig {
                enabled: false,
                interval_s: 1,
                jitter_s: 3,
            },
            demo: true,
            seed: None,
        }
    }
}

/// Native canvas resolution and tick rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
            fps: 50,
        }
    }
}

/// Palette, as `[r, g, b]` triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: [u8; 3],
    pub main: [u8; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            main: [0, 200, 255],
        }
    }
}

/// Startup state for a periodic behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
    pub enabled: bool,
    pub interval_s: u64,
    pub jitter_s: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_s: 1,
            jitter_s: 3,
        }
    }
}

/// Resolve the config file path.
///
/// Precedence: `GOOGLY_CONFIG` env var > platform config dir
/// (`~/.config/googly/config.toml` on Linux) > `config.toml` in the working
/// directory.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("GOOGLY_CONFIG") {
        return PathBuf::from(path);
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("googly").join("config.toml");
    }
    PathBuf::from("config.toml")
}

impl Config {
    /// Parse and validate configuration TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("failed to parse configuration TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    /// Load from [`config_path`], falling back to defaults when no file
    /// exists. A present-but-broken file is an error.
    pub fn load_or_default() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check semantic constraints the type system cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width <= 0 || self.canvas.height <= 0 {
            bail!(
                "canvas dimensions must be positive, got {}x{}",
                self.canvas.width,
                self.canvas.height
            );
        }
        if self.canvas.fps == 0 {
            bail!("canvas.fps must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas.width, 1024);
        assert_eq!(config.canvas.height, 512);
        assert_eq!(config.canvas.fps, 50);
        assert!(config.autoblinker.enabled);
        assert!(!config.idle.enabled);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = Config::from_toml_str(
            r#"
            demo = false

            [canvas]
            width = 640
            height = 320

            [colors]
            main = [255, 128, 0]
            "#,
        )
        .unwrap();

        assert!(!config.demo);
        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 320);
        assert_eq!(config.canvas.fps, 50);
        assert_eq!(config.colors.main, [255, 128, 0]);
        assert_eq!(config.colors.background, [0, 0, 0]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_toml_str("frobnicate = 1");
        assert!(err.is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml_str("canvas = [").is_err());
    }

    #[test]
    fn zero_fps_is_rejected() {
        let err = Config::from_toml_str(
            r#"
            [canvas]
            fps = 0
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn negative_canvas_is_rejected() {
        let err = Config::from_toml_str(
            r#"
            [canvas]
            width = -10
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn seed_round_trips() {
        let config = Config::from_toml_str("seed = 42").unwrap();
        assert_eq!(config.seed, Some(42));
        let rendered = toml::to_string(&config).unwrap();
        let back = Config::from_toml_str(&rendered).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_file_is_a_contextual_error() {
        let err = Config::from_path(Path::new("/nonexistent/googly-config.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
