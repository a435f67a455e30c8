//! Navigation configuration

use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::error::{NavError, Result};

/// Which viewport observation strategy the engine runs
///
/// An engine runs exactly one of these for its whole lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObserverStrategy {
    /// Focal line at scroll offset plus header height, with an end-of-document override
    #[default]
    SpyLine,
    /// Sections entering the vertical midline band of the viewport
    Membership,
}

/// Tunables for the navigation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    /// Observation strategy
    pub strategy: ObserverStrategy,

    /// Distance of the spy-line below the viewport top, in pixels
    pub header_offset: f32,

    /// Tolerance for "scrolled to the end of the document"
    pub bottom_epsilon: f32,

    /// Scroll distance required before the end-of-document rule applies
    pub bottom_min_scroll: f32,

    /// Delay of the one-shot indicator recomputation after mount
    pub settle_delay_ms: u64,

    /// Scroll offset past which the header counts as scrolled
    pub scrolled_threshold: f32,

    /// Fraction of a section that must be visible before it is revealed
    pub reveal_threshold: f32,

    /// Viewport width below which the mobile nav layout is used
    pub mobile_breakpoint: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            strategy: ObserverStrategy::SpyLine,
            header_offset: 80.0,
            bottom_epsilon: 20.0,
            bottom_min_scroll: 100.0,
            settle_delay_ms: 100,
            scrolled_threshold: 20.0,
            reveal_threshold: 0.1,
            mobile_breakpoint: 768.0,
        }
    }
}

impl NavConfig {
    /// Parse a config from JSON; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that every distance is a finite, non-negative number
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("header_offset", self.header_offset),
            ("bottom_epsilon", self.bottom_epsilon),
            ("bottom_min_scroll", self.bottom_min_scroll),
            ("scrolled_threshold", self.scrolled_threshold),
            ("mobile_breakpoint", self.mobile_breakpoint),
        ];

        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(NavError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(NavError::InvalidConfig(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }

        Ok(())
    }

    /// The post-mount settle delay as a `Duration`
    pub fn settle_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.settle_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = NavConfig::from_json_str(r#"{ "header_offset": 64.0 }"#).unwrap();

        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.bottom_epsilon, 20.0);
        assert_eq!(config.strategy, ObserverStrategy::SpyLine);
    }

    #[test]
    fn test_strategy_names() {
        let config = NavConfig::from_json_str(r#"{ "strategy": "membership" }"#).unwrap();
        assert_eq!(config.strategy, ObserverStrategy::Membership);
    }

    #[test]
    fn test_rejects_negative_distance() {
        let err = NavConfig::from_json_str(r#"{ "bottom_epsilon": -1.0 }"#).unwrap_err();
        assert!(matches!(err, NavError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_reveal_threshold_out_of_range() {
        let err = NavConfig::from_json_str(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, NavError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = NavConfig::from_json_str("{ header_offset").unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "settle_delay_ms": 250 }}"#).unwrap();

        let config = NavConfig::load(file.path()).unwrap();
        assert_eq!(config.settle_delay(), std::time::Duration::from_millis(250));
    }

    #[test]
    fn test_load_missing_file() {
        let err = NavConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, NavError::Io(_)));
    }
}
