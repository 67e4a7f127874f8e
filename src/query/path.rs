//! Exact-path matching across every author's shadow tree

use super::types::MatchRecord;
use crate::shadow::ShadowForest;
use tracing::{debug, info};

/// Query for the works sitting at one exact segment path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathQuery {
    /// Segments from a tree root, outermost first
    pub segments: Vec<String>,
}

impl PathQuery {
    /// Create a query for the given segment path
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The Torah-book path `Tanakh / Torah / <root_text>`, searched when the
    /// caller names no segments
    pub fn torah_book(root_text: impl Into<String>) -> Self {
        Self::new(["Tanakh", "Torah"]).then(root_text)
    }

    /// Append one more segment
    pub fn then(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Execute the query against a forest
    ///
    /// Authors are visited in forest order. An author matches only if every
    /// segment resolves and the final node is a terminal; prefixes and
    /// grouping levels never match.
    pub fn execute(&self, forest: &ShadowForest) -> Vec<MatchRecord> {
        let matches: Vec<MatchRecord> = forest
            .iter()
            .filter_map(|(author, tree)| {
                let entry = tree.lookup(&self.segments)?.entry()?;
                debug!(author, title = %entry.title, "path match");
                Some(MatchRecord::from_entry(author, entry))
            })
            .collect();

        info!(path = ?self.segments, matches = matches.len(), "searched shadow forest");
        matches
    }
}

/// Authors with a work at exactly `segments`
pub fn find_by_path<S: AsRef<str>>(forest: &ShadowForest, segments: &[S]) -> Vec<MatchRecord> {
    PathQuery::new(segments.iter().map(|s| s.as_ref())).execute(forest)
}
