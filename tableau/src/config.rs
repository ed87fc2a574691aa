//! Engine configuration
//!
//! Verbosity is carried here and threaded into each selector instead of
//! living in process-wide state.

use tableau_core::SelectorChoice;

/// Configuration for selection and median queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EngineConfig {
    /// 0 = silent, 1 = one summary event per query, 2 = every search step
    pub debug_level: u8,
    /// Strategy used when the caller does not name one
    pub selector: SelectorChoice,
    /// Verify answers against the sort-based oracle
    pub cross_check: bool,
}

impl EngineConfig {
    /// Summary events only
    pub const SUMMARY: u8 = 1;

    /// Per-step events as well
    pub const STEPS: u8 = 2;

    /// Set the debug level
    pub fn with_debug_level(mut self, debug_level: u8) -> Self {
        self.debug_level = debug_level;
        self
    }

    /// Set the default selector
    pub fn with_selector(mut self, selector: SelectorChoice) -> Self {
        self.selector = selector;
        self
    }

    /// Enable or disable oracle verification
    pub fn with_cross_check(mut self, cross_check: bool) -> Self {
        self.cross_check = cross_check;
        self
    }

    /// Whether per-query summary events are emitted
    pub fn traces_summary(&self) -> bool {
        self.debug_level >= Self::SUMMARY
    }

    /// Whether per-step events are emitted
    pub fn traces_steps(&self) -> bool {
        self.debug_level >= Self::STEPS
    }

    /// Parse a JSON configuration document
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debug_level: 0,
            selector: SelectorChoice::BinarySearch,
            cross_check: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_levels() {
        let config = EngineConfig::default()
            .with_debug_level(2)
            .with_selector(SelectorChoice::Frontier)
            .with_cross_check(true);
        assert!(config.traces_summary());
        assert!(config.traces_steps());
        assert_eq!(config.selector, SelectorChoice::Frontier);

        let quiet = EngineConfig::default();
        assert!(!quiet.traces_summary());
        assert!(!quiet.cross_check);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_config() {
        let config =
            EngineConfig::from_json_str(r#"{"debug_level": 1, "selector": "extraction"}"#).unwrap();
        assert_eq!(config.debug_level, 1);
        assert_eq!(config.selector, SelectorChoice::Extraction);
        assert!(!config.cross_check);

        assert!(EngineConfig::from_json_str(r#"{"verbose": true}"#).is_err());
    }
}
