//! Structural hierarchy walk for legal documents.
//!
//! This module converts nested document trees into triples. The hierarchy
//! (which levels nest where, which child tags become attributes) is declared
//! once in [`create_legal_hierarchy`]; the four realization modes are
//! described by [`ModePolicy`]; [`GraphWalker`] applies both.

mod config;
mod engine;
mod mode;
mod registry;
mod types;

pub use config::create_legal_hierarchy;
pub use engine::GraphWalker;
pub use mode::{ModePolicy, Realization, Transposition, NATIONAL_ABSTRACT_MARKER};
pub use registry::HierarchyRegistry;
pub use types::{LevelSpec, NumberRule, TitleField, WalkContext};
