//! The game state snapshot consumed by the scoring engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::stage;

/// Everything the advisor knows about the player at a decision point.
///
/// Constructed once per decision and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Round identifier such as `"3-2"`. Only the major part is used.
    pub stage: String,

    /// Player health, nominally 1..=100 but not enforced.
    pub hp: i32,

    /// Reserved; not used by scoring.
    #[serde(default)]
    pub gold: i32,

    /// Reserved; not used by scoring.
    #[serde(default)]
    pub level: i32,

    /// Trait name -> number of units contributing to it.
    #[serde(default)]
    pub traits: HashMap<String, i32>,

    /// Item component name -> count held on the bench.
    #[serde(default)]
    pub bench_parts: HashMap<String, i32>,

    /// Augments picked at earlier decision points.
    #[serde(default)]
    pub taken_augments: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new("2-1", 100)
    }
}

impl GameState {
    /// Create a state with the given stage and health and an empty board.
    pub fn new(stage: impl Into<String>, hp: i32) -> Self {
        Self {
            stage: stage.into(),
            hp,
            gold: 0,
            level: 1,
            traits: HashMap::new(),
            bench_parts: HashMap::new(),
            taken_augments: Vec::new(),
        }
    }

    /// Set the current gold.
    pub fn with_gold(mut self, gold: i32) -> Self {
        self.gold = gold;
        self
    }

    /// Set the player level.
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Set the unit count for a trait.
    pub fn with_trait(mut self, name: impl Into<String>, count: i32) -> Self {
        self.traits.insert(name.into(), count);
        self
    }

    /// Set the number of a component held on the bench.
    pub fn with_part(mut self, name: impl Into<String>, count: i32) -> Self {
        self.bench_parts.insert(name.into(), count);
        self
    }

    /// Record an augment picked earlier in the game.
    pub fn with_taken(mut self, augment: impl Into<String>) -> Self {
        self.taken_augments.push(augment.into());
        self
    }

    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Major stage, or `None` if the stage identifier is malformed.
    pub fn major_stage(&self) -> Option<i32> {
        stage::major_stage(&self.stage)
    }

    /// Current count for a trait, 0 when absent.
    pub fn trait_count(&self, name: &str) -> i32 {
        self.traits.get(name).copied().unwrap_or(0)
    }

    /// Whether the trait appears on the board at all (regardless of count).
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.contains_key(name)
    }

    /// Number of a component on the bench, 0 when absent.
    pub fn part_count(&self, name: &str) -> i32 {
        self.bench_parts.get(name).copied().unwrap_or(0)
    }

    /// Whether the augment was already taken (exact name match).
    pub fn has_taken(&self, augment: &str) -> bool {
        self.taken_augments.iter().any(|t| t == augment)
    }
}
