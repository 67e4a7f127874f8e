//! Node representation in the table of contents

use serde::{Deserialize, Serialize};

/// A node in the catalog hierarchy
///
/// Leaves are actual works; nodes with children are grouping categories.
/// Every field is optional in the source data and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    /// English label (`title`, or `category` on grouping records)
    pub title: String,
    /// Hebrew label (`heTitle`, `heCategory` or `altTitle`)
    pub he_title: String,
    /// Genre / classification tags, outermost first
    pub categories: Vec<String>,
    /// `Some("Commentary")` marks a dependent work
    pub dependence: Option<String>,
    /// Root texts a dependent work attaches to
    pub base_text_titles: Vec<String>,
    /// Free-text description, only consulted by the exclusion filter
    pub short_description: String,
    /// Nested nodes, in catalog order
    pub children: Vec<TocNode>,
}

impl TocNode {
    /// Create a node with an English label
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the Hebrew label
    pub fn with_he_title(mut self, he_title: impl Into<String>) -> Self {
        self.he_title = he_title.into();
        self
    }

    /// Append a category tag
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Set the dependence marker
    pub fn with_dependence(mut self, dependence: impl Into<String>) -> Self {
        self.dependence = Some(dependence.into());
        self
    }

    /// Append a base text title
    pub fn with_base_text(mut self, base_text: impl Into<String>) -> Self {
        self.base_text_titles.push(base_text.into());
        self
    }

    /// Set the short description
    pub fn with_short_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = description.into();
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: TocNode) -> Self {
        self.children.push(child);
        self
    }

    /// Author identity and final path segment of a classified work: Hebrew
    /// label, falling back to English
    pub fn label(&self) -> &str {
        if self.he_title.is_empty() {
            &self.title
        } else {
            &self.he_title
        }
    }

    /// Display title, also the segment this node contributes to its
    /// descendants' paths: English label, falling back to Hebrew
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.he_title
        } else {
            &self.title
        }
    }

    /// Whether this node is an actual work rather than a grouping category
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
