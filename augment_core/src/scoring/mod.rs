//! Score Aggregator - turns an offered augment and the board into a score.
//!
//! The score is multiplicative:
//! 1. **Base**: catalog base score (60 for unknown augments)
//! 2. **Factors**: six bounded feature signals from [`features`]
//! 3. **Multiplier**: `1 + Σ weight_i * factor_i`
//! 4. **Score**: `base * multiplier`
//!
//! The multiplier is not clamped; a strongly negative conflict weight can
//! push a score below zero.

pub mod features;

use board_state::GameState;
use serde::{Deserialize, Serialize};

use crate::knowledge_base::{KnowledgeBase, Weights};

/// Factors at or below this magnitude are left out of reports.
pub const NEGLIGIBLE_FACTOR: f32 = 1e-6;

/// The six feature values behind one score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureFactors {
    pub trait_proximity: f32,
    pub item_slam: f32,
    pub stage_urgency: f32,
    pub hp_danger: f32,
    pub synergy: f32,
    pub conflict: f32,
}

impl FeatureFactors {
    /// Human-readable label and value for each factor, in report order.
    pub fn labelled(&self) -> [(&'static str, f32); 6] {
        [
            ("Trait proximity", self.trait_proximity),
            ("Item slam", self.item_slam),
            ("Stage urgency", self.stage_urgency),
            ("HP danger", self.hp_danger),
            ("Synergy tags", self.synergy),
            ("Conflict (penalty)", self.conflict),
        ]
    }

    /// `1 + Σ weight * factor`.
    pub fn multiplier(&self, weights: &Weights) -> f32 {
        1.0 + weights.trait_proximity * self.trait_proximity
            + weights.item_slam * self.item_slam
            + weights.stage_urgency * self.stage_urgency
            + weights.hp_danger * self.hp_danger
            + weights.synergy * self.synergy
            + weights.conflict * self.conflict
    }
}

/// Everything needed to explain a score without recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f32,
    pub multiplier: f32,
    pub factors: FeatureFactors,
}

impl ScoreBreakdown {
    /// Final score, `base * multiplier`.
    pub fn score(&self) -> f32 {
        self.base * self.multiplier
    }
}

/// Compute the feature factors for one augment.
pub fn feature_factors(augment: &str, state: &GameState, kb: &KnowledgeBase) -> FeatureFactors {
    let (_, tags) = kb.base_score_and_tags(augment);
    let preferred = kb.trait_names_for_tags(tags);

    FeatureFactors {
        trait_proximity: features::trait_proximity(&state.traits, kb.breakpoints(), &preferred),
        item_slam: features::item_slam_bonus(
            &state.bench_parts,
            kb.bonus_family(augment),
            kb.slam_values(),
        ),
        stage_urgency: features::stage_urgency(&state.stage),
        hp_danger: features::hp_danger(state.hp),
        synergy: features::synergy_tag_bonus(tags, &preferred, &state.traits),
        conflict: features::conflict_penalty(augment, &state.taken_augments),
    }
}

/// Score one augment against the board.
///
/// Never fails: unknown augments, tags, traits and components all fall back
/// to neutral values.
pub fn score_option(augment: &str, state: &GameState, kb: &KnowledgeBase) -> (f32, ScoreBreakdown) {
    let (base, _) = kb.base_score_and_tags(augment);
    let factors = feature_factors(augment, state, kb);
    let breakdown = ScoreBreakdown {
        base,
        multiplier: factors.multiplier(kb.weights()),
        factors,
    };

    log::trace!("{}: {:?}", augment, factors);
    log::debug!(
        "scored '{}': base={:.1} mult={:.3} score={:.2}",
        augment,
        breakdown.base,
        breakdown.multiplier,
        breakdown.score()
    );

    (breakdown.score(), breakdown)
}
