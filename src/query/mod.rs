//! Query system for shadow forests
//!
//! Answers exact-path lookups: which authors have a classified work at a
//! given segment path.

mod path;
mod types;

pub use path::{find_by_path, PathQuery};
pub use types::MatchRecord;
