//! Encoder settings: simplification tolerance and zoom level granularity.

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, Result};

const DEFAULT_NUM_LEVELS: u32 = 18;
const DEFAULT_ZOOM_FACTOR: f64 = 2.0;
const DEFAULT_VERY_SMALL: f64 = 0.00001;

/// Immutable encoder configuration.
///
/// `zoom_level_breaks` is derived from the other four fields on every
/// construction and is never set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SettingsConfig", into = "SettingsConfig")]
pub struct Settings {
    num_levels: u32,
    zoom_factor: f64,
    very_small: f64,
    force_endpoints: bool,
    zoom_level_breaks: Vec<f64>,
}

/// Serialized form of [`Settings`], without the derived breaks table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub num_levels: u32,
    pub zoom_factor: f64,
    pub very_small: f64,
    pub force_endpoints: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            num_levels: DEFAULT_NUM_LEVELS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            very_small: DEFAULT_VERY_SMALL,
            force_endpoints: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = SettingsConfig::default();
        Self {
            zoom_level_breaks: zoom_level_breaks(
                DEFAULT_NUM_LEVELS as i32 - 1,
                config.zoom_factor,
                config.very_small,
            ),
            num_levels: config.num_levels,
            zoom_factor: config.zoom_factor,
            very_small: config.very_small,
            force_endpoints: config.force_endpoints,
        }
    }
}

impl Settings {
    pub fn new(
        num_levels: u32,
        zoom_factor: f64,
        very_small: f64,
        force_endpoints: bool,
    ) -> Result<Self> {
        if num_levels < 1 {
            return Err(EncodeError::InvalidSettings(
                "num_levels must be at least 1".to_string(),
            ));
        }
        if !zoom_factor.is_finite() || zoom_factor <= 1.0 {
            return Err(EncodeError::InvalidSettings(format!(
                "zoom_factor must be a finite number greater than 1, got {}",
                zoom_factor
            )));
        }
        if !very_small.is_finite() || very_small <= 0.0 {
            return Err(EncodeError::InvalidSettings(format!(
                "very_small must be a finite positive number, got {}",
                very_small
            )));
        }

        let top_exponent = i32::try_from(num_levels - 1).map_err(|_| {
            EncodeError::InvalidSettings(format!("num_levels {} is too large", num_levels))
        })?;
        if !(very_small * zoom_factor.powi(top_exponent)).is_finite() {
            return Err(EncodeError::InvalidSettings(format!(
                "top zoom break very_small * zoom_factor^{} overflows",
                top_exponent
            )));
        }

        Ok(Self {
            num_levels,
            zoom_factor,
            very_small,
            force_endpoints,
            zoom_level_breaks: zoom_level_breaks(top_exponent, zoom_factor, very_small),
        })
    }

    pub fn with_num_levels(self, num_levels: u32) -> Result<Self> {
        Self::new(num_levels, self.zoom_factor, self.very_small, self.force_endpoints)
    }

    pub fn with_zoom_factor(self, zoom_factor: f64) -> Result<Self> {
        Self::new(self.num_levels, zoom_factor, self.very_small, self.force_endpoints)
    }

    pub fn with_very_small(self, very_small: f64) -> Result<Self> {
        Self::new(self.num_levels, self.zoom_factor, very_small, self.force_endpoints)
    }

    /// Toggling endpoint forcing never invalidates the breaks table.
    pub fn with_force_endpoints(mut self, force_endpoints: bool) -> Self {
        self.force_endpoints = force_endpoints;
        self
    }

    pub fn num_levels(&self) -> u32 {
        self.num_levels
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Simplification tolerance, in coordinate units.
    pub fn very_small(&self) -> f64 {
        self.very_small
    }

    pub fn force_endpoints(&self) -> bool {
        self.force_endpoints
    }

    /// Descending distance thresholds, one per zoom level.
    pub fn zoom_level_breaks(&self) -> &[f64] {
        &self.zoom_level_breaks
    }

    /// Highest level code, given to forced endpoints.
    pub fn max_level(&self) -> u32 {
        self.num_levels - 1
    }
}

impl TryFrom<SettingsConfig> for Settings {
    type Error = EncodeError;

    fn try_from(config: SettingsConfig) -> Result<Self> {
        Settings::new(
            config.num_levels,
            config.zoom_factor,
            config.very_small,
            config.force_endpoints,
        )
    }
}

impl From<Settings> for SettingsConfig {
    fn from(settings: Settings) -> Self {
        Self {
            num_levels: settings.num_levels,
            zoom_factor: settings.zoom_factor,
            very_small: settings.very_small,
            force_endpoints: settings.force_endpoints,
        }
    }
}

/// `breaks[i] = very_small * zoom_factor^(top_exponent - i)`, where
/// `top_exponent = num_levels - 1`.
fn zoom_level_breaks(top_exponent: i32, zoom_factor: f64, very_small: f64) -> Vec<f64> {
    (0..=top_exponent)
        .rev()
        .map(|exponent| very_small * zoom_factor.powi(exponent))
        .collect()
}
