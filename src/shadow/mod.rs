//! Shadow forests: per-author trees of works depending on a root text

mod classify;
mod tree;


pub use classify::{build_shadow_forest, build_shadow_forest_from_value, Classifier};
pub use tree::{ShadowChildren, ShadowEntry, ShadowForest, ShadowNode, ShadowTree, WorkKind};
