//! Header configuration
//!
//! Branding and the sticky threshold. Every field has a default, so an empty
//! JSON object (or no file at all) yields the stock header.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::shared::constants::{LOGO_ALT, LOGO_SRC, SITE_NAME, SITE_TAGLINE, STICKY_THRESHOLD_PX};
use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub site_name: String,
    pub tagline: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub sticky_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            site_name: SITE_NAME.to_string(),
            tagline: SITE_TAGLINE.to_string(),
            logo_src: LOGO_SRC.to_string(),
            logo_alt: LOGO_ALT.to_string(),
            sticky_threshold_px: STICKY_THRESHOLD_PX,
        }
    }
}

impl HeaderConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HeaderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.sticky_threshold_px.is_finite() || self.sticky_threshold_px < 0.0 {
            return Err(AppError::ConfigError(format!(
                "sticky_threshold_px must be a non-negative number, got {}",
                self.sticky_threshold_px
            )));
        }
        if self.site_name.trim().is_empty() {
            return Err(AppError::ConfigError("site_name must not be empty".to_string()));
        }
        Ok(())
    }
}
