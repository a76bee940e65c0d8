//! Tunable weights and trait breakpoints.

use serde::{Deserialize, Serialize};

/// Multiplicative weight applied to each feature factor.
///
/// All six keys are required when deserializing; a missing key is rejected
/// by the loader rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(rename = "W_TRAIT")]
    pub trait_proximity: f32,
    #[serde(rename = "W_ITEMS")]
    pub item_slam: f32,
    #[serde(rename = "W_STAGE")]
    pub stage_urgency: f32,
    #[serde(rename = "W_HP")]
    pub hp_danger: f32,
    #[serde(rename = "W_SYNERGY")]
    pub synergy: f32,
    /// Expected to be negative.
    #[serde(rename = "W_CONFLICT")]
    pub conflict: f32,
}

/// Weights plus the trait-count thresholds shared by all traits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub trait_breakpoints: Vec<i32>,
}

impl ScoringConfig {
    /// Create a config; breakpoints are sorted and deduplicated.
    pub fn new(weights: Weights, trait_breakpoints: impl IntoIterator<Item = i32>) -> Self {
        let mut config = Self {
            weights,
            trait_breakpoints: trait_breakpoints.into_iter().collect(),
        };
        config.normalize();
        config
    }

    /// Sort and deduplicate breakpoints in place.
    pub fn normalize(&mut self) {
        self.trait_breakpoints.sort_unstable();
        self.trait_breakpoints.dedup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_WEIGHTS: &str = "W_TRAIT = 0.35
W_ITEMS = 0.25
W_STAGE = 0.15
W_HP = 0.2
W_SYNERGY = 0.2
";

    fn weights() -> Weights {
        Weights {
            trait_proximity: 0.35,
            item_slam: 0.25,
            stage_urgency: 0.15,
            hp_danger: 0.2,
            synergy: 0.2,
            conflict: -0.6,
        }
    }

    #[test]
    fn test_breakpoints_normalized() {
        let config = ScoringConfig::new(weights(), [6, 2, 4, 2]);
        assert_eq!(config.trait_breakpoints, vec![2, 4, 6]);
    }

    #[test]
    fn test_weights_use_upper_case_keys() {
        let document = format!("{}W_CONFLICT = -0.6\n", FIVE_WEIGHTS);
        let parsed: Weights = toml::from_str(&document).unwrap();
        assert_eq!(parsed, weights());
    }

    #[test]
    fn test_missing_weight_rejected() {
        let parsed: Result<Weights, _> = toml::from_str(FIVE_WEIGHTS);
        assert!(parsed.is_err());
    }
}
