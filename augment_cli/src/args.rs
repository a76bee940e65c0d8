//! Command-line arguments and the small text formats they use.

use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use board_state::GameState;

#[derive(Debug, Parser)]
#[command(name = "augment-advisor")]
#[command(about = "Rule-based augment advisor: ranks the offered augments and explains why")]
pub struct Args {
    /// Augments being offered (comma-separated)
    #[arg(long)]
    pub augments: String,

    /// Stage like 3-2
    #[arg(long, default_value = "3-2")]
    pub stage: String,

    /// Current HP, 1..100
    #[arg(long, default_value_t = 60, allow_hyphen_values = true)]
    pub hp: i32,

    /// Current gold
    #[arg(long, default_value_t = 0)]
    pub gold: i32,

    /// Player level
    #[arg(long, default_value_t = 1)]
    pub level: i32,

    /// Traits like Sorcerer=3,Bruiser=2
    #[arg(long, default_value = "")]
    pub traits: String,

    /// Bench components like Belt=1,Rod=1
    #[arg(long, default_value = "")]
    pub parts: String,

    /// Previously taken augments (comma-separated)
    #[arg(long, default_value = "")]
    pub taken: String,

    /// JSON game state snapshot; replaces the board flags above
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Directory with augments.toml, traits.toml, items.toml and config.toml
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Print the ranking as JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Offered augment names.
    pub fn offered(&self) -> Vec<String> {
        split_csv(&self.augments)
    }

    /// Build the board snapshot from the individual flags.
    pub fn game_state(&self) -> GameState {
        GameState {
            stage: self.stage.clone(),
            hp: self.hp,
            gold: self.gold,
            level: self.level,
            traits: parse_kv(&self.traits),
            bench_parts: parse_kv(&self.parts),
            taken_augments: split_csv(&self.taken),
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parse `Name=3,Other=1`. Malformed pairs and non-integer counts are skipped.
pub fn parse_kv(s: &str) -> HashMap<String, i32> {
    let mut map = HashMap::new();
    for part in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let Some((key, value)) = part.split_once('=') else {
            log::warn!("ignoring '{}': expected Name=count", part);
            continue;
        };
        match value.trim().parse::<i32>() {
            Ok(count) => {
                map.insert(key.trim().to_string(), count);
            }
            Err(_) => log::warn!("ignoring '{}': count is not an integer", part),
        }
    }
    map
}
