//! Map settings, with defaults and loading from environment variables.

use serde::{Deserialize, Serialize};

use crate::raster::CanvasSize;

pub const DEFAULT_CANVAS_SIZE_PX: i32 = 512;
pub const DEFAULT_METERS_PER_PIXEL: f64 = 1.2;
pub const DEFAULT_DOT_RADIUS_PX: f64 = 4.0;
pub const DEFAULT_ROTATION_OFFSET_DEG: f64 = -90.0;
pub const DEFAULT_TOGGLE_KEY: &str = "M";

pub const ENV_CANVAS_SIZE_PX: &str = "MAP_SIZE_PX";
pub const ENV_METERS_PER_PIXEL: &str = "MAP_METERS_PER_PIXEL";
pub const ENV_DOT_RADIUS_PX: &str = "MAP_DOT_RADIUS_PX";
pub const ENV_ROTATION_OFFSET_DEG: &str = "MAP_ROTATION_OFFSET_DEG";
pub const ENV_TOGGLE_KEY: &str = "MAP_TOGGLE_KEY";

/// Error returned by [`MapConfig::validate`] and [`MapConfig::from_env`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("meters per pixel must be a positive finite number, got {0}")]
    MetersPerPixel(f64),
    #[error("dot radius must be a finite number >= 0, got {0}")]
    DotRadius(f64),
    #[error("rotation offset must be finite, got {0}")]
    RotationOffset(f64),
}

/// Settings read once at the start of every refresh.
///
/// `canvas_size_px` is stored as requested; the refresh clamps it through
/// [`MapConfig::canvas_size`]. `toggle_key` is only displayed in the hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub canvas_size_px: i32,
    pub meters_per_pixel: f64,
    pub dot_radius_px: f64,
    /// Degrees, counter-clockwise positive. 90 turns the map left, -90 right.
    pub rotation_offset_deg: f64,
    pub toggle_key: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            canvas_size_px: DEFAULT_CANVAS_SIZE_PX,
            meters_per_pixel: DEFAULT_METERS_PER_PIXEL,
            dot_radius_px: DEFAULT_DOT_RADIUS_PX,
            rotation_offset_deg: DEFAULT_ROTATION_OFFSET_DEG,
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
        }
    }
}

impl MapConfig {
    /// Canvas side after clamping into the allowed range.
    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::clamped(self.canvas_size_px)
    }

    /// Reject values the projection cannot use. The canvas size is never
    /// rejected; it is clamped instead.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.meters_per_pixel.is_finite() && self.meters_per_pixel > 0.0) {
            return Err(ConfigError::MetersPerPixel(self.meters_per_pixel));
        }
        if !(self.dot_radius_px.is_finite() && self.dot_radius_px >= 0.0) {
            return Err(ConfigError::DotRadius(self.dot_radius_px));
        }
        if !self.rotation_offset_deg.is_finite() {
            return Err(ConfigError::RotationOffset(self.rotation_offset_deg));
        }
        Ok(())
    }

    /// Build config from environment variables.
    ///
    /// All optional; absent or unparseable values fall back to defaults:
    /// - `MAP_SIZE_PX`: default 512 (clamped to 256..=1024 at refresh)
    /// - `MAP_METERS_PER_PIXEL`: default 1.2
    /// - `MAP_DOT_RADIUS_PX`: default 4.0
    /// - `MAP_ROTATION_OFFSET_DEG`: default -90
    /// - `MAP_TOGGLE_KEY`: default `M`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a parsed value fails [`MapConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            canvas_size_px: env_parse(ENV_CANVAS_SIZE_PX, DEFAULT_CANVAS_SIZE_PX),
            meters_per_pixel: env_parse(ENV_METERS_PER_PIXEL, DEFAULT_METERS_PER_PIXEL),
            dot_radius_px: env_parse(ENV_DOT_RADIUS_PX, DEFAULT_DOT_RADIUS_PX),
            rotation_offset_deg: env_parse(ENV_ROTATION_OFFSET_DEG, DEFAULT_ROTATION_OFFSET_DEG),
            toggle_key: env_string(ENV_TOGGLE_KEY, DEFAULT_TOGGLE_KEY),
        };
        config.validate()?;
        Ok(config)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

fn env_string(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
