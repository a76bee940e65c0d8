//! Knowledge Base module - read-only static tables used for scoring.
//!
//! The knowledge base consists of:
//! - **Catalog**: base score and abstract tags per augment
//! - **Trait groups**: tag -> concrete trait names
//! - **Slam values**: item component weights
//! - **Config**: feature weights and trait breakpoints
//!
//! It is built once, never mutated, and can be shared across any number of
//! ranking calls.

mod catalog;
mod config;
mod loader;
mod tables;

pub use catalog::*;
pub use config::*;
pub use loader::*;
pub use tables::*;

use std::collections::{BTreeSet, HashMap};

static NO_TAGS: BTreeSet<String> = BTreeSet::new();

/// Immutable lookup over the four static tables.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    catalog: AugmentCatalog,
    trait_groups: TraitGroups,
    slam_values: ComponentSlamValues,
    config: ScoringConfig,

    /// Augment name (every spelling) -> bonus family.
    families: HashMap<String, BonusFamily>,
}

impl KnowledgeBase {
    /// Assemble a knowledge base and classify augments into bonus families.
    pub fn new(
        catalog: AugmentCatalog,
        trait_groups: TraitGroups,
        slam_values: ComponentSlamValues,
        mut config: ScoringConfig,
    ) -> Self {
        config.normalize();
        let families = classify(&catalog);

        log::debug!(
            "knowledge base: {} augments, {} trait groups, {} components, {} classified names",
            catalog.len(),
            trait_groups.trait_groups.len(),
            slam_values.components.len(),
            families.len()
        );

        Self {
            catalog,
            trait_groups,
            slam_values,
            config,
            families,
        }
    }

    /// Base score and tags for an augment; unknown names get
    /// [`DEFAULT_BASE_SCORE`] and no tags.
    pub fn base_score_and_tags(&self, name: &str) -> (f32, &BTreeSet<String>) {
        match self.catalog.get(name) {
            Some(entry) => (entry.score, &entry.tags),
            None => (DEFAULT_BASE_SCORE, &NO_TAGS),
        }
    }

    /// All traits registered under any of the tags. Duplicates are kept.
    pub fn trait_names_for_tags(&self, tags: &BTreeSet<String>) -> Vec<&str> {
        tags.iter()
            .flat_map(|tag| self.trait_groups.traits_for(tag))
            .map(String::as_str)
            .collect()
    }

    /// Slam weight of a component, 0 when unknown.
    pub fn slam_value(&self, component: &str) -> i32 {
        self.slam_values.value(component)
    }

    /// Item-slam family of an augment, if it belongs to one.
    pub fn bonus_family(&self, name: &str) -> Option<BonusFamily> {
        self.families.get(name).copied()
    }

    pub fn slam_values(&self) -> &ComponentSlamValues {
        &self.slam_values
    }

    pub fn weights(&self) -> &Weights {
        &self.config.weights
    }

    /// Trait breakpoints in ascending order.
    pub fn breakpoints(&self) -> &[i32] {
        &self.config.trait_breakpoints
    }
}
