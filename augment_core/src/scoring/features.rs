//! Feature functions - bounded, independent signals about the board.
//!
//! Every function is total: malformed or unknown input degrades to a neutral
//! value instead of failing. All results lie in `[0, 1]`; the conflict factor
//! is exactly 0 or 1.

use std::collections::{BTreeSet, HashMap};

use board_state::stage;

use crate::knowledge_base::{BonusFamily, ComponentSlamValues};

/// Divisor for the component-grab slam total.
const COMPONENT_GRAB_DIVISOR: f32 = 20.0;

/// Belt/Chain payoff: per-component weights and divisor.
const BELT_WEIGHT: i64 = 10;
const CHAIN_WEIGHT: i64 = 9;
const BELT_CHAIN_DIVISOR: f32 = 15.0;

/// Health at or above which there is no danger.
const SAFE_HP: i32 = 60;

/// Later stages favor immediate strength. Stage 2 -> 0.0, stage 6+ -> 1.0.
pub fn stage_urgency(stage: &str) -> f32 {
    let major = stage::major_stage_or_default(stage);
    (major.saturating_sub(2) as f32 / 4.0).clamp(0.0, 1.0)
}

/// Lower health raises urgency, ramping from 0 at 60 HP to 1 at 0 HP.
pub fn hp_danger(hp: i32) -> f32 {
    (SAFE_HP.saturating_sub(hp) as f32 / SAFE_HP as f32).clamp(0.0, 1.0)
}

/// How close the preferred traits are to their next breakpoint.
///
/// Each preferred trait on the board adds `1 / distance` to its next higher
/// breakpoint. The sum is clamped, so a single trait one unit away already
/// saturates the bonus.
pub fn trait_proximity(
    traits: &HashMap<String, i32>,
    breakpoints: &[i32],
    preferred: &[&str],
) -> f32 {
    let mut bonus: f32 = 0.0;

    for name in preferred {
        let Some(&current) = traits.get(*name) else {
            continue;
        };
        if let Some(next) = breakpoints.iter().copied().find(|bp| *bp > current) {
            let distance = next.saturating_sub(current).max(1) as f32;
            bonus += 1.0 / distance;
        }
    }

    bonus.clamp(0.0, 1.0)
}

/// Reward augments that turn components on the bench into immediate power.
pub fn item_slam_bonus(
    bench_parts: &HashMap<String, i32>,
    family: Option<BonusFamily>,
    slam_values: &ComponentSlamValues,
) -> f32 {
    let part = |name: &str| i64::from(bench_parts.get(name).copied().unwrap_or(0));

    match family {
        Some(BonusFamily::ComponentGrab) => {
            let raw: i64 = slam_values
                .iter()
                .map(|(name, value)| part(name) * i64::from(value))
                .sum();
            (raw as f32 / COMPONENT_GRAB_DIVISOR).clamp(0.0, 1.0)
        }
        Some(BonusFamily::BeltChainPayoff) => {
            let raw = part("Belt") * BELT_WEIGHT + part("Chain") * CHAIN_WEIGHT;
            (raw as f32 / BELT_CHAIN_DIVISOR).clamp(0.0, 1.0)
        }
        None => 0.0,
    }
}

/// 1.0 if the augment was already taken (exact match), else 0.0.
pub fn conflict_penalty(augment: &str, taken: &[String]) -> f32 {
    if taken.iter().any(|t| t == augment) {
        1.0
    } else {
        0.0
    }
}

/// Light bump when the augment's tags match the board's identity.
///
/// Counts preferred traits present on the board (duplicates count twice):
/// one match -> 0.5, two or more -> 1.0. Untagged augments get 0.
pub fn synergy_tag_bonus(
    tags: &BTreeSet<String>,
    preferred: &[&str],
    traits: &HashMap<String, i32>,
) -> f32 {
    if tags.is_empty() {
        return 0.0;
    }
    let matches = preferred.iter().filter(|t| traits.contains_key(**t)).count();
    (matches as f32 / 2.0).clamp(0.0, 1.0)
}
