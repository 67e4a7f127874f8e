//! Catalog table of contents: input model, parsing and title lookups

mod index;
mod node;
mod parse;

pub use index::{category_path, TitleIndex};
pub use node::TocNode;
pub use parse::{load_toc, parse_toc, parse_toc_str, TocError, TocResult};
