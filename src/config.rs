//! User configuration: scroll tuning, frame pacing and persistence.
//!
//! Stored as TOML at `$XDG_CONFIG_HOME/glide/config.toml`
//! (default `~/.config/glide/config.toml`).  Missing keys fall back to their
//! defaults, so a file only needs the values it changes:
//!
//! ```toml
//! [scroll]
//! duration_secs = 0.6
//! easing = "ease_out_cubic"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::easing::Easing;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialise config: {0}")]
    Serialise(#[from] toml::ser::Error),
}

// ───────────────────────────────────────── scroll ────────────

/// Animator tuning.  Fixed once an animator is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Default eased-run duration.  Zero or negative jumps on the first frame.
    pub duration_secs: f64,
    /// Default eased-run curve.
    pub easing: Easing,
    /// Take over wheel input as soon as the animator is built.
    pub smooth_enabled: bool,
    /// Fraction of the remaining distance covered per wheel-smoothing frame.
    pub wheel_lerp: f64,
    /// Wheel smoothing goes idle once within this distance of its target.
    pub settle_threshold: f64,
    /// Host units moved per wheel notch.
    pub wheel_step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.2,
            easing: Easing::EaseOutQuart,
            smooth_enabled: true,
            wheel_lerp: 0.1,
            settle_threshold: 0.5,
            wheel_step: 3.0,
        }
    }
}

impl ScrollConfig {
    /// Pull out-of-range values back to something the animator can run with.
    /// A finite non-positive `duration_secs` is kept: it means an instant jump.
    /// A non-finite one falls back to the default.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.wheel_lerp.is_nan() || self.wheel_lerp <= 0.0 {
            self.wheel_lerp = defaults.wheel_lerp;
        }
        self.wheel_lerp = self.wheel_lerp.min(1.0);
        if self.settle_threshold.is_nan() || self.settle_threshold < 0.0 {
            self.settle_threshold = defaults.settle_threshold;
        }
        if self.wheel_step.is_nan() || self.wheel_step <= 0.0 {
            self.wheel_step = defaults.wheel_step;
        }
        if !self.duration_secs.is_finite() {
            self.duration_secs = defaults.duration_secs;
        }
        self
    }
}

// ───────────────────────────────────────── app ───────────────

/// Whole-application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scroll: ScrollConfig,
    /// Frames per second while an animation wants frames.
    pub frame_rate: u32,
    /// Tick interval while nothing is animating.
    pub idle_tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            frame_rate: 60,
            idle_tick_ms: 250,
        }
    }
}

impl AppConfig {
    /// Interval between animation frames.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.frame_rate.clamp(1, 240)))
    }

    pub fn idle_tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.idle_tick_ms.clamp(16, 5000))
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location, falling back to defaults when
    /// the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Persist current config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/glide/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("glide").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.scroll.easing, Easing::EaseOutQuart);
        assert_eq!(config.scroll.wheel_lerp, 0.1);
        assert_eq!(config.scroll.settle_threshold, 0.5);
        assert!(config.scroll.smooth_enabled);
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            frame_rate = 120

            [scroll]
            duration_secs = 0.6
            easing = "ease_out_cubic"
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.frame_rate, 120);
        assert_eq!(config.scroll.duration_secs, 0.6);
        assert_eq!(config.scroll.easing, Easing::EaseOutCubic);
        assert_eq!(config.scroll.wheel_lerp, 0.1);
        assert_eq!(config.idle_tick_ms, 250);
    }

    #[test]
    fn unknown_easing_is_an_error() {
        let err = AppConfig::from_toml_str("[scroll]\neasing = \"bounce\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("glide-config-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.scroll.duration_secs = 0.25;
        config.scroll.easing = Easing::Linear;
        config.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("glide-definitely-missing").join("config.toml");
        assert_eq!(AppConfig::load_from(&path).expect("defaults"), AppConfig::default());
    }

    #[test]
    fn sanitized_repairs_tunables_but_keeps_duration() {
        let config = ScrollConfig {
            duration_secs: -1.0,
            wheel_lerp: 4.0,
            settle_threshold: -2.0,
            wheel_step: 0.0,
            ..ScrollConfig::default()
        }
        .sanitized();
        assert_eq!(config.duration_secs, -1.0);
        assert_eq!(config.wheel_lerp, 1.0);
        assert_eq!(config.settle_threshold, 0.5);
        assert_eq!(config.wheel_step, 3.0);

        let zero = ScrollConfig {
            wheel_lerp: 0.0,
            ..ScrollConfig::default()
        }
        .sanitized();
        assert_eq!(zero.wheel_lerp, 0.1);
    }

    #[test]
    fn sanitized_replaces_non_finite_duration() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let config = ScrollConfig {
                duration_secs: bad,
                ..ScrollConfig::default()
            }
            .sanitized();
            assert_eq!(config.duration_secs, 1.2);
        }
    }

    #[test]
    fn frame_interval_follows_rate() {
        let config = AppConfig {
            frame_rate: 50,
            ..AppConfig::default()
        };
        assert_eq!(config.frame_interval(), std::time::Duration::from_millis(20));
    }
}
