//! Title lookups over a parsed table of contents

use super::node::TocNode;
use indexmap::IndexMap;

/// Hebrew → English title map covering every labelled node in a catalog
///
/// Only nodes carrying both labels are indexed. When two nodes share a
/// Hebrew label the later one (in pre-order) wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleIndex {
    he_to_en: IndexMap<String, String>,
}

impl TitleIndex {
    /// Build the index with a depth-first walk over the catalog
    pub fn build(toc: &[TocNode]) -> Self {
        let mut index = Self::default();
        index.collect(toc);
        index
    }

    fn collect(&mut self, nodes: &[TocNode]) {
        for node in nodes {
            if !node.he_title.is_empty() && !node.title.is_empty() {
                self.he_to_en.insert(node.he_title.clone(), node.title.clone());
            }
            self.collect(&node.children);
        }
    }

    /// English title for a Hebrew label
    pub fn english(&self, he_title: &str) -> Option<&str> {
        self.he_to_en.get(he_title).map(String::as_str)
    }

    /// Number of indexed titles
    pub fn len(&self) -> usize {
        self.he_to_en.len()
    }

    pub fn is_empty(&self) -> bool {
        self.he_to_en.is_empty()
    }

    /// Iterate over (Hebrew, English) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.he_to_en.iter().map(|(he, en)| (he.as_str(), en.as_str()))
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.he_to_en
    }
}

/// Segment path from the catalog root to the first node labelled `he_title`
///
/// The returned path ends with the node's own label. Returns `None` when no
/// node carries that Hebrew label.
pub fn category_path(toc: &[TocNode], he_title: &str) -> Option<Vec<String>> {
    fn search(nodes: &[TocNode], he_title: &str, ancestors: &[String]) -> Option<Vec<String>> {
        for node in nodes {
            let mut path = ancestors.to_vec();
            path.push(node.label().to_string());
            if node.he_title == he_title {
                return Some(path);
            }
            if let Some(found) = search(&node.children, he_title, &path) {
                return Some(found);
            }
        }
        None
    }

    if he_title.is_empty() {
        return None;
    }
    search(toc, he_title, &[])
}
