//! Query result structures

use crate::shadow::{ShadowEntry, WorkKind};
use serde::{Deserialize, Serialize};

/// One author's work found at a queried path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Author identity (forest key)
    pub author: String,
    /// Display title of the work
    pub title: String,
    pub kind: WorkKind,
    /// Full segment path of the work
    pub path: Vec<String>,
}

impl MatchRecord {
    pub fn from_entry(author: impl Into<String>, entry: &ShadowEntry) -> Self {
        Self {
            author: author.into(),
            title: entry.title.clone(),
            kind: entry.kind,
            path: entry.path.clone(),
        }
    }
}
