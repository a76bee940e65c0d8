//! Augment catalog and bonus family classification.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Base score given to augments that are not in the catalog.
pub const DEFAULT_BASE_SCORE: f32 = 60.0;

/// Augments that receive special item-slam treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusFamily {
    /// Hands out item components; rewards components already on the bench.
    ComponentGrab,
    /// Pays off holding Belts and Chains.
    BeltChainPayoff,
}

impl BonusFamily {
    /// Canonical augment names in this family.
    pub fn canonical_members(&self) -> &'static [&'static str] {
        match self {
            BonusFamily::ComponentGrab => {
                &["Component Grab Bag", "Portable Forge", "Pandora's Items"]
            }
            BonusFamily::BeltChainPayoff => &["Sunfire Board", "Exiles", "Triumphant Return"],
        }
    }

    /// All families, in classification order.
    pub fn all() -> [BonusFamily; 2] {
        [BonusFamily::ComponentGrab, BonusFamily::BeltChainPayoff]
    }
}

/// Spellings an augment name may appear under in client data.
///
/// Names with an ASCII apostrophe are also registered with the typographic
/// apostrophe and with the apostrophe dropped.
pub fn name_spellings(name: &str) -> Vec<String> {
    let mut spellings = vec![name.to_string()];
    if name.contains('\'') {
        spellings.push(name.replace('\'', "\u{2019}"));
        spellings.push(name.replace('\'', ""));
    }
    spellings
}

/// Build the name -> family lookup used during scoring.
///
/// Built-in members are registered first; explicit `family` entries in the
/// catalog override them, applied in name order so colliding spellings always
/// resolve the same way.
pub fn classify(catalog: &AugmentCatalog) -> HashMap<String, BonusFamily> {
    let mut families = HashMap::new();

    for family in BonusFamily::all() {
        for member in family.canonical_members() {
            for spelling in name_spellings(member) {
                families.insert(spelling, family);
            }
        }
    }

    let mut entries: Vec<_> = catalog.base_scores.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (name, entry) in entries {
        if let Some(family) = entry.family {
            for spelling in name_spellings(name) {
                families.insert(spelling, family);
            }
        }
    }

    families
}

fn default_base_score() -> f32 {
    DEFAULT_BASE_SCORE
}

/// Static data for one augment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentEntry {
    /// Base score before any situational multiplier.
    #[serde(default = "default_base_score")]
    pub score: f32,

    /// Abstract tags such as `"AP"` or `"Tank"`, resolved through trait groups.
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Explicit item-slam family, if any.
    #[serde(default)]
    pub family: Option<BonusFamily>,
}

impl AugmentEntry {
    /// Create an entry with a base score and no tags.
    pub fn new(score: f32) -> Self {
        Self {
            score,
            tags: BTreeSet::new(),
            family: None,
        }
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Assign a bonus family.
    pub fn with_family(mut self, family: BonusFamily) -> Self {
        self.family = Some(family);
        self
    }
}

/// Every augment with a known base score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AugmentCatalog {
    #[serde(default)]
    pub base_scores: HashMap<String, AugmentEntry>,
}

impl AugmentCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn with_entry(mut self, name: impl Into<String>, entry: AugmentEntry) -> Self {
        self.base_scores.insert(name.into(), entry);
        self
    }

    /// Look up an augment by exact name.
    pub fn get(&self, name: &str) -> Option<&AugmentEntry> {
        self.base_scores.get(name)
    }

    /// Number of catalogued augments.
    pub fn len(&self) -> usize {
        self.base_scores.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.base_scores.is_empty()
    }
}
