//! Explainer - renders a ranking as a human-readable report.

use super::Ranking;
use crate::scoring::NEGLIGIBLE_FACTOR;

/// Format the ranking, one numbered block per augment.
///
/// Only factors with a magnitude above [`NEGLIGIBLE_FACTOR`] are listed.
/// Pure formatting: scores and order are printed exactly as ranked.
pub fn explain(ranking: &Ranking) -> String {
    let mut lines = Vec::new();

    for ranked in ranking.iter() {
        let breakdown = &ranked.breakdown;
        lines.push(format!("{}. {}: {:.1}", ranked.rank, ranked.option, ranked.score));
        lines.push(format!(
            "   base={:.3}  x  mult={:.3}",
            breakdown.base, breakdown.multiplier
        ));
        lines.push("   reasons:".to_string());

        for (label, value) in breakdown.factors.labelled() {
            if value.abs() <= NEGLIGIBLE_FACTOR {
                continue;
            }
            lines.push(format!("     • {}: {:.2}", label, value));
        }
    }

    lines.join("\n")
}
