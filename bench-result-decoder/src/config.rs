//! Decoder configuration types
//!
//! The defaults reproduce the lenient behavior of the benchmark tooling: the start
//! marker is only checked by position and an unterminated trailing group is dropped.
//! Stricter checks are opt-in.

use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// What to do with values after the last sentinel
    #[serde(default)]
    pub trailing_group: TrailingGroupPolicy,

    /// Fail when the start marker is not `0xDEADBEEF`
    #[serde(default)]
    pub validate_start_marker: bool,

    /// Optional: stop after this many closed groups
    #[serde(default)]
    pub max_groups: Option<usize>,
}

/// Handling of data records that are not followed by a sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingGroupPolicy {
    /// Discard the values (logged as a warning)
    #[default]
    Drop,
    /// Fail with `DecoderError::UnterminatedGroup`
    Reject,
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the trailing group policy
    pub fn with_trailing_group(mut self, policy: TrailingGroupPolicy) -> Self {
        self.trailing_group = policy;
        self
    }

    /// Builder method: enable or disable start marker validation
    pub fn with_start_marker_validation(mut self, enabled: bool) -> Self {
        self.validate_start_marker = enabled;
        self
    }

    /// Builder method: limit the number of decoded groups
    pub fn with_max_groups(mut self, max_groups: usize) -> Self {
        self.max_groups = Some(max_groups);
        self
    }

    /// Check if another group may be emitted after `emitted` groups
    pub fn allows_group(&self, emitted: usize) -> bool {
        match self.max_groups {
            Some(max) => emitted < max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::new()
            .with_trailing_group(TrailingGroupPolicy::Reject)
            .with_start_marker_validation(true)
            .with_max_groups(2);

        assert_eq!(config.trailing_group, TrailingGroupPolicy::Reject);
        assert!(config.validate_start_marker);
        assert_eq!(config.max_groups, Some(2));
    }

    #[test]
    fn test_defaults_are_lenient() {
        let config = DecoderConfig::new();

        assert_eq!(config.trailing_group, TrailingGroupPolicy::Drop);
        assert!(!config.validate_start_marker);
        assert!(config.allows_group(usize::MAX - 1));
    }

    #[test]
    fn test_group_limit() {
        let config = DecoderConfig::new().with_max_groups(1);

        assert!(config.allows_group(0));
        assert!(!config.allows_group(1));
    }
}
