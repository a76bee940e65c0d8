//! Loading the knowledge base from TOML documents.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{AugmentCatalog, ComponentSlamValues, KnowledgeBase, ScoringConfig, TraitGroups};

pub const AUGMENTS_FILE: &str = "augments.toml";
pub const TRAITS_FILE: &str = "traits.toml";
pub const ITEMS_FILE: &str = "items.toml";
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while reading or parsing knowledge base documents.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Raw text of the four knowledge base documents.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBaseSources<'a> {
    pub augments: &'a str,
    pub traits: &'a str,
    pub items: &'a str,
    pub config: &'a str,
}

/// Builds a [`KnowledgeBase`] from TOML.
pub struct KnowledgeBaseLoader;

impl KnowledgeBaseLoader {
    /// Load `augments.toml`, `traits.toml`, `items.toml` and `config.toml`
    /// from a directory.
    pub fn load_dir(dir: &Path) -> Result<KnowledgeBase, KnowledgeBaseError> {
        let augments = read_file(&dir.join(AUGMENTS_FILE))?;
        let traits = read_file(&dir.join(TRAITS_FILE))?;
        let items = read_file(&dir.join(ITEMS_FILE))?;
        let config = read_file(&dir.join(CONFIG_FILE))?;

        log::debug!("loading knowledge base from {}", dir.display());

        Self::load_from_strs(KnowledgeBaseSources {
            augments: &augments,
            traits: &traits,
            items: &items,
            config: &config,
        })
    }

    /// Parse the four documents from in-memory strings.
    pub fn load_from_strs(
        sources: KnowledgeBaseSources<'_>,
    ) -> Result<KnowledgeBase, KnowledgeBaseError> {
        let catalog: AugmentCatalog = parse(AUGMENTS_FILE, sources.augments)?;
        let trait_groups: TraitGroups = parse(TRAITS_FILE, sources.traits)?;
        let slam_values: ComponentSlamValues = parse(ITEMS_FILE, sources.items)?;
        let config: ScoringConfig = parse(CONFIG_FILE, sources.config)?;

        for (name, entry) in &catalog.base_scores {
            for tag in &entry.tags {
                if !trait_groups.trait_groups.contains_key(tag) {
                    log::warn!("augment '{}' has tag '{}' with no trait group", name, tag);
                }
            }
        }

        Ok(KnowledgeBase::new(catalog, trait_groups, slam_values, config))
    }
}

fn read_file(path: &Path) -> Result<String, KnowledgeBaseError> {
    std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(document: &str, text: &str) -> Result<T, KnowledgeBaseError> {
    toml::from_str(text).map_err(|source| KnowledgeBaseError::Parse {
        document: document.to_string(),
        source,
    })
}
