//! # Augment Core
//!
//! Scores and ranks the augments offered at a decision point. Every score is
//! closed-form arithmetic over configured weights, and every contribution is
//! kept so it can be shown to the player.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Read-only static tables (catalog, trait groups, slam values, weights)
//! - **scoring**: Feature functions and the multiplicative score aggregator
//! - **ranking**: Stable ordering of offered augments and the text report
//!
//! ## Design Philosophy
//!
//! - **Value in, value out**: No shared mutable state; a [`KnowledgeBase`] can be shared freely
//! - **Total**: Unknown augments, tags, traits and components degrade to neutral values
//! - **Explainable**: Each score carries a [`ScoreBreakdown`]

pub mod knowledge_base;
pub mod ranking;
pub mod scoring;

pub use knowledge_base::*;
pub use ranking::*;
pub use scoring::{feature_factors, score_option, FeatureFactors, ScoreBreakdown, NEGLIGIBLE_FACTOR};
