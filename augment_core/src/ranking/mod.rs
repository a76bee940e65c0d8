//! Ranker - scores every offered augment and orders them best first.

mod report;

pub use report::*;

use board_state::GameState;
use serde::{Deserialize, Serialize};

use crate::knowledge_base::KnowledgeBase;
use crate::scoring::{score_option, ScoreBreakdown};

/// One augment with its position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOption {
    /// 1-based position.
    pub rank: usize,
    pub option: String,
    pub score: f32,
    pub breakdown: ScoreBreakdown,
}

/// Offered augments sorted by score, highest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ranking {
    options: Vec<RankedOption>,
}

impl Ranking {
    /// The recommended augment, if any were offered.
    pub fn best(&self) -> Option<&RankedOption> {
        self.options.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Render the ranking as a text report.
    pub fn explain(&self) -> String {
        explain(self)
    }
}

/// Score each augment and sort by score descending.
///
/// The sort is stable: augments with exactly equal scores keep their offered
/// order.
pub fn rank<S: AsRef<str>>(options: &[S], state: &GameState, kb: &KnowledgeBase) -> Ranking {
    let mut scored: Vec<_> = options
        .iter()
        .map(|option| {
            let option = option.as_ref();
            let (score, breakdown) = score_option(option, state, kb);
            (option.to_string(), score, breakdown)
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let options: Vec<_> = scored
        .into_iter()
        .enumerate()
        .map(|(i, (option, score, breakdown))| RankedOption {
            rank: i + 1,
            option,
            score,
            breakdown,
        })
        .collect();

    if let Some(best) = options.first() {
        log::debug!(
            "ranked {} augments, best '{}' at {:.1}",
            options.len(),
            best.option,
            best.score
        );
    }

    Ranking { options }
}
