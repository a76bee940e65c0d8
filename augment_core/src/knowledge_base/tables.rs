//! Trait groups and component slam values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Concrete traits behind one abstract tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitGroup {
    #[serde(default)]
    pub traits: Vec<String>,
}

/// Tag name -> traits belonging to that tag family.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitGroups {
    #[serde(default)]
    pub trait_groups: HashMap<String, TraitGroup>,
}

impl TraitGroups {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the traits for a tag, replacing any previous group.
    pub fn with_group<I, S>(mut self, tag: impl Into<String>, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let traits = traits.into_iter().map(Into::into).collect();
        self.trait_groups.insert(tag.into(), TraitGroup { traits });
        self
    }

    /// Traits registered under a tag, empty when the tag is unknown.
    pub fn traits_for(&self, tag: &str) -> &[String] {
        self.trait_groups
            .get(tag)
            .map(|g| g.traits.as_slice())
            .unwrap_or(&[])
    }
}

/// Item component name -> slam weight.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentSlamValues {
    #[serde(default)]
    pub components: HashMap<String, i32>,
}

impl ComponentSlamValues {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slam weight for a component.
    pub fn with_component(mut self, name: impl Into<String>, value: i32) -> Self {
        self.components.insert(name.into(), value);
        self
    }

    /// Slam weight for a component, 0 when unknown.
    pub fn value(&self, name: &str) -> i32 {
        self.components.get(name).copied().unwrap_or(0)
    }

    /// Iterate over every known component and its weight.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.components.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
