//! Selection configuration: typed settings with serde defaults.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::relatedness::RelatednessWeights;

const DEFAULT_DESIRED_COUNT: usize = 3;
const DEFAULT_POOL_LIMIT: usize = 20;
const DEFAULT_COVER_URL: &str = "/assets/default-cover.png";

/// Tuning for the related-content widget. Defaults: 3 cards, a pool of up
/// to 20 candidates, default heuristic weights.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of related posts to return. Zero is allowed and yields an
    /// empty selection.
    pub desired_count: usize,
    /// Candidate pool size to gather before ranking; must be at least 1.
    pub pool_limit: usize,
    /// Cover image used when a post has none.
    pub default_cover_url: String,
    pub weights: RelatednessWeights,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            desired_count: DEFAULT_DESIRED_COUNT,
            pool_limit: DEFAULT_POOL_LIMIT,
            default_cover_url: DEFAULT_COVER_URL.to_string(),
            weights: RelatednessWeights::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pool_limit must be at least 1")]
    ZeroPoolLimit,
    #[error("recency_window_days must be positive and finite, got {0}")]
    InvalidRecencyWindow(f64),
    #[error("recency_divisor must be positive and finite, got {0}")]
    InvalidRecencyDivisor(f64),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidWeight { field: &'static str, value: f64 },
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_limit == 0 {
            return Err(ConfigError::ZeroPoolLimit);
        }

        let weights = &self.weights;
        if !(weights.recency_window_days.is_finite() && weights.recency_window_days > 0.0) {
            return Err(ConfigError::InvalidRecencyWindow(weights.recency_window_days));
        }
        if !(weights.recency_divisor.is_finite() && weights.recency_divisor > 0.0) {
            return Err(ConfigError::InvalidRecencyDivisor(weights.recency_divisor));
        }
        for (field, value) in [
            ("tag_weight", weights.tag_weight),
            ("title_bonus", weights.title_bonus),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidWeight { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_heuristic() {
        let config = SelectionConfig::default();

        assert_eq!(config.desired_count, 3);
        assert_eq!(config.pool_limit, 20);
        assert_eq!(config.weights.tag_weight, 2.0);
        assert_eq!(config.weights.title_bonus, 3.0);
        assert_eq!(config.weights.recency_window_days, 30.0);
        assert_eq!(config.weights.recency_divisor, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_from_partial_toml() {
        let config: SelectionConfig = toml::from_str(
            r#"
            desired_count = 5

            [weights]
            tag_weight = 1.5
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.desired_count, 5);
        assert_eq!(config.weights.tag_weight, 1.5);
        // Unspecified fields keep their defaults.
        assert_eq!(config.pool_limit, 20);
        assert_eq!(config.weights.title_bonus, 3.0);
    }

    #[test]
    fn rejects_zero_pool_limit() {
        let config = SelectionConfig {
            pool_limit: 0,
            ..SelectionConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPoolLimit)));
    }

    #[test]
    fn rejects_non_positive_recency_window() {
        let mut config = SelectionConfig::default();
        config.weights.recency_window_days = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRecencyWindow(_))
        ));
    }

    #[test]
    fn rejects_negative_weights() {
        let mut config = SelectionConfig::default();
        config.weights.title_bonus = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeight { field: "title_bonus", .. })
        ));
    }
}
