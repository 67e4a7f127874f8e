//! Shadowtree: per-author shadow trees over a catalog table of contents
//!
//! Walks a nested catalog of texts, picks out the commentaries and
//! translations that depend on one root text, and files each under its
//! author's *shadow tree*, mirroring the catalog branch it was found in.
//! Shadow trees then answer exact-path lookups.
//!
//! # Core Concepts
//!
//! - **TocNode**: a catalog record; leaves are works, inner nodes are categories
//! - **ShadowForest**: author identity → shadow tree, built once per
//!   (catalog, root text) pair and read-only afterwards
//! - **PathQuery**: which authors have a work at exactly this segment path
//!
//! # Example
//!
//! ```
//! use shadowtree::{build_shadow_forest, find_by_path, TocNode};
//!
//! let toc = vec![
//!     TocNode::new("Genesis").with_category("Tanakh"),
//!     TocNode::new("Rashi on Genesis")
//!         .with_he_title("רש\"י")
//!         .with_category("Commentary")
//!         .with_base_text("Genesis"),
//! ];
//!
//! let forest = build_shadow_forest(&toc, "Genesis");
//! let matches = find_by_path(&forest, &["רש\"י"]);
//! assert_eq!(matches[0].title, "Rashi on Genesis");
//! ```

pub mod config;
pub mod query;
pub mod shadow;
pub mod toc;

pub use config::{ClassifierConfig, ConfigError};
pub use query::{find_by_path, MatchRecord, PathQuery};
pub use shadow::{
    build_shadow_forest, build_shadow_forest_from_value, Classifier, ShadowEntry, ShadowForest,
    ShadowNode, ShadowTree, WorkKind,
};
pub use toc::{
    category_path, load_toc, parse_toc, parse_toc_str, TitleIndex, TocError, TocNode, TocResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
