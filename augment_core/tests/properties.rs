use augment_core::scoring::features::{
    conflict_penalty, hp_danger, stage_urgency, synergy_tag_bonus, trait_proximity,
};
use augment_core::{
    rank, score_option, AugmentCatalog, AugmentEntry, ComponentSlamValues, KnowledgeBase,
    ScoringConfig, TraitGroups, Weights,
};
use board_state::GameState;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

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

fn knowledge_base() -> KnowledgeBase {
    let catalog = AugmentCatalog::new()
        .with_entry("Blue Battery", AugmentEntry::new(72.0).with_tag("AP"))
        .with_entry("Sunfire Board", AugmentEntry::new(64.0).with_tag("Tank"))
        .with_entry("Jeweled Lotus", AugmentEntry::new(70.0).with_tag("AP"));
    let groups = TraitGroups::new()
        .with_group("AP", ["Sorcerer", "Invoker"])
        .with_group("Tank", ["Bruiser", "Warden"]);
    let slam = ComponentSlamValues::new()
        .with_component("Belt", 10)
        .with_component("Rod", 8)
        .with_component("Chain", 9)
        .with_component("Bow", 7);

    KnowledgeBase::new(catalog, groups, slam, ScoringConfig::new(weights(), [2, 4, 6]))
}

const AUGMENTS: [&str; 6] = [
    "Blue Battery",
    "Sunfire Board",
    "Jeweled Lotus",
    "Component Grab Bag",
    "Pandora\u{2019}s Items",
    "Unknown Pick",
];
const TRAITS: [&str; 4] = ["Sorcerer", "Invoker", "Bruiser", "Warden"];
const PARTS: [&str; 4] = ["Belt", "Rod", "Chain", "Bow"];

fn arb_state() -> impl Strategy<Value = GameState> {
    (
        1i32..9,
        1i32..8,
        -20i32..120,
        proptest::collection::vec(0i32..8, TRAITS.len()),
        proptest::collection::vec(0i32..4, PARTS.len()),
        proptest::collection::vec(any::<bool>(), AUGMENTS.len()),
    )
        .prop_map(|(major, minor, hp, trait_counts, part_counts, taken)| {
            let mut state = GameState::new(format!("{}-{}", major, minor), hp);
            for (name, count) in TRAITS.iter().zip(trait_counts) {
                if count > 0 {
                    state = state.with_trait(*name, count);
                }
            }
            for (name, count) in PARTS.iter().zip(part_counts) {
                state = state.with_part(*name, count);
            }
            for (name, picked) in AUGMENTS.iter().zip(taken) {
                if picked {
                    state = state.with_taken(*name);
                }
            }
            state
        })
}

proptest! {
    #[test]
    fn stage_urgency_is_monotonic(major in 2i32..8, minor in 1i32..8) {
        let here = stage_urgency(&format!("{}-{}", major, minor));
        let next = stage_urgency(&format!("{}-{}", major + 1, minor));
        prop_assert!(next >= here);
        prop_assert!((0.0..=1.0).contains(&here));
        if major >= 6 {
            prop_assert_eq!(here, 1.0);
        }
    }

    #[test]
    fn stage_urgency_saturates_past_i32_range(
        major in 2_147_483_648u64..u64::MAX,
        minor in 1u32..8,
    ) {
        prop_assert_eq!(stage_urgency(&format!("{}-{}", major, minor)), 1.0);
    }

    #[test]
    fn stage_urgency_never_panics(stage in ".*") {
        let urgency = stage_urgency(&stage);
        prop_assert!((0.0..=1.0).contains(&urgency));
    }

    #[test]
    fn hp_danger_matches_formula(hp in 0i32..=100) {
        let expected = ((60 - hp) as f32 / 60.0).clamp(0.0, 1.0);
        prop_assert!((hp_danger(hp) - expected).abs() < 1e-6);
    }

    #[test]
    fn conflict_only_on_exact_member(name in "[A-Za-z ]{1,12}", other in "[A-Za-z ]{1,12}") {
        prop_assume!(name != other);
        let taken = vec![other.clone()];
        prop_assert_eq!(conflict_penalty(&name, &taken), 0.0);
        prop_assert_eq!(conflict_penalty(&other, &taken), 1.0);
    }

    #[test]
    fn untagged_augments_get_no_synergy(count in 0i32..9) {
        let traits: HashMap<String, i32> = [("Sorcerer".to_string(), count)].into_iter().collect();
        let bonus = synergy_tag_bonus(&BTreeSet::new(), &["Sorcerer", "Sorcerer"], &traits);
        prop_assert_eq!(bonus, 0.0);
    }

    #[test]
    fn factors_stay_in_range(state in arb_state()) {
        let kb = knowledge_base();
        for augment in AUGMENTS {
            let (score, breakdown) = score_option(augment, &state, &kb);
            let f = breakdown.factors;
            for (_, value) in f.labelled() {
                prop_assert!((0.0..=1.0).contains(&value));
            }
            prop_assert!(f.conflict == 0.0 || f.conflict == 1.0);
            prop_assert!((score - breakdown.base * breakdown.multiplier).abs() < 1e-4);
        }
    }

    #[test]
    fn ranking_is_sorted_and_repeatable(state in arb_state()) {
        let kb = knowledge_base();
        let first = rank(&AUGMENTS, &state, &kb);
        let second = rank(&AUGMENTS, &state, &kb);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.explain(), second.explain());

        let scores: Vec<f32> = first.iter().map(|r| r.score).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(first.len(), AUGMENTS.len());
    }

    #[test]
    fn taken_augment_scores_lower(state in arb_state()) {
        let kb = knowledge_base();
        let fresh = GameState { taken_augments: Vec::new(), ..state };
        let taken = fresh.clone().with_taken("Blue Battery");

        let (without, _) = score_option("Blue Battery", &fresh, &kb);
        let (with, breakdown) = score_option("Blue Battery", &taken, &kb);

        prop_assert!(with < without);
        prop_assert_eq!(breakdown.factors.conflict, 1.0);
    }
}

#[test]
fn trait_proximity_saturation_point() {
    let breakpoints = [2, 4, 6];
    let traits: HashMap<String, i32> = [
        ("Sorcerer".to_string(), 3),
        ("Invoker".to_string(), 1),
        ("Bruiser".to_string(), 5),
    ]
    .into_iter()
    .collect();

    // a single trait one unit short of a breakpoint already reaches the cap
    assert_eq!(trait_proximity(&traits, &breakpoints, &["Sorcerer"]), 1.0);
    // further near-breakpoint traits add nothing once capped
    assert_eq!(trait_proximity(&traits, &breakpoints, &["Sorcerer", "Invoker", "Bruiser"]), 1.0);

    let far: HashMap<String, i32> = [("Sorcerer".to_string(), 0), ("Invoker".to_string(), 0)]
        .into_iter()
        .collect();
    // 0 -> 2 twice: 0.5 + 0.5
    assert_eq!(trait_proximity(&far, &breakpoints, &["Sorcerer"]), 0.5);
    assert_eq!(trait_proximity(&far, &breakpoints, &["Sorcerer", "Invoker"]), 1.0);
}

#[test]
fn equal_scores_keep_offered_order() {
    let kb = knowledge_base();
    let state = GameState::new("3-2", 52);

    let ranking = rank(&["Mystery Two", "Mystery One"], &state, &kb);
    let names: Vec<_> = ranking.iter().map(|r| r.option.as_str()).collect();
    assert_eq!(names, ["Mystery Two", "Mystery One"]);
}
