//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a lodestar.toml, and if present we load
//! settings from there. This provides the tracking constants (reference line,
//! observation-band margins, throttle cadence) and file extension preferences.

use crate::tracker::{EmptyConfigure, TrackerOptions};
use crate::viewport::Band;
use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from lodestar.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 4.0)]
    /// Distance in rows from the pane top used as the active-section anchor.
    pub reference_line: f64,
    #[facet(default = 0.0)]
    /// Observation-band adjustment at the pane top, in rows.
    pub band_top_margin: f64,
    #[facet(default = -2.0)]
    /// Observation-band adjustment at the pane bottom, in rows.
    pub band_bottom_margin: f64,
    #[facet(default)]
    /// Bottom adjustment as a percentage of pane height, overriding
    /// `band_bottom_margin` when set (e.g. -50.0).
    pub band_bottom_percent: Option<f64>,
    #[facet(default = 50)]
    /// Trailing-edge scroll throttle, in milliseconds.
    pub throttle_ms: u64,
    #[facet(default)]
    /// Fall back to the first visible section when the best candidate sits
    /// further than this many rows from the reference line.
    pub fallback_beyond: Option<f64>,
    #[facet(default = false)]
    /// Whether reconfiguring with an empty section list clears tracking
    /// state instead of preserving it.
    pub clear_on_empty: bool,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Config {
    #[must_use]
    /// Load configuration from lodestar.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("lodestar.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    #[must_use]
    /// Tracker options derived from this configuration.
    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            reference_line: self.reference_line,
            throttle_ms: self.throttle_ms,
            fallback_beyond: self.fallback_beyond,
            on_empty: if self.clear_on_empty {
                EmptyConfigure::Clear
            } else {
                EmptyConfigure::Preserve
            },
        }
    }

    #[must_use]
    /// Observation band derived from this configuration.
    pub fn band(&self) -> Band {
        Band {
            top_margin: self.band_top_margin,
            bottom_margin: self.band_bottom_margin,
            bottom_percent: self.band_bottom_percent,
        }
    }
}
