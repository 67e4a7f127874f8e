//! Shadow trees: per-author reconstructions of the relevant catalog slice

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What a classified work is relative to its root text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkKind {
    Commentary,
    Translation,
}

impl std::fmt::Display for WorkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkKind::Commentary => write!(f, "Commentary"),
            WorkKind::Translation => write!(f, "Translation"),
        }
    }
}

/// Payload carried by a terminal node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowEntry {
    /// Display title of the work
    pub title: String,
    /// Segments from the tree root down to this node, inclusive
    pub path: Vec<String>,
    pub kind: WorkKind,
}

/// Child nodes keyed by path segment, in insertion order
pub type ShadowChildren = IndexMap<String, ShadowNode>;

/// A node in a shadow tree
///
/// Branches are grouping levels created on the way to a classified work.
/// Terminals are the works themselves; they keep their own children because
/// a later work by the same author may nest beneath them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum ShadowNode {
    Branch {
        children: ShadowChildren,
    },
    Terminal {
        entry: ShadowEntry,
        children: ShadowChildren,
    },
}

impl ShadowNode {
    fn branch() -> Self {
        ShadowNode::Branch {
            children: ShadowChildren::new(),
        }
    }

    /// The classified work at this node, if it is a terminal
    pub fn entry(&self) -> Option<&ShadowEntry> {
        match self {
            ShadowNode::Branch { .. } => None,
            ShadowNode::Terminal { entry, .. } => Some(entry),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ShadowNode::Terminal { .. })
    }

    pub fn children(&self) -> &ShadowChildren {
        match self {
            ShadowNode::Branch { children } | ShadowNode::Terminal { children, .. } => children,
        }
    }

    /// Child reached through one path segment
    pub fn child(&self, segment: &str) -> Option<&ShadowNode> {
        self.children().get(segment)
    }

    fn children_mut(&mut self) -> &mut ShadowChildren {
        match self {
            ShadowNode::Branch { children } | ShadowNode::Terminal { children, .. } => children,
        }
    }

    /// Turn this node into a terminal carrying `entry`, keeping its children.
    /// An existing entry is replaced.
    fn set_entry(&mut self, entry: ShadowEntry) {
        let children = std::mem::take(self.children_mut());
        *self = ShadowNode::Terminal { entry, children };
    }

    fn collect_terminals<'a>(&'a self, out: &mut Vec<&'a ShadowEntry>) {
        if let Some(entry) = self.entry() {
            out.push(entry);
        }
        for child in self.children().values() {
            child.collect_terminals(out);
        }
    }
}

/// One author's shadow tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadowTree {
    root: ShadowChildren,
}

impl ShadowTree {
    /// Top-level nodes of the tree
    pub fn roots(&self) -> &ShadowChildren {
        &self.root
    }

    /// Walk the tree along `segments`
    ///
    /// Fails fast on the first missing segment. The empty path names the
    /// tree root, which is not a node, so it resolves to `None`.
    pub fn lookup<S: AsRef<str>>(&self, segments: &[S]) -> Option<&ShadowNode> {
        let (first, rest) = segments.split_first()?;
        let mut node = self.root.get(first.as_ref())?;
        for segment in rest {
            node = node.child(segment.as_ref())?;
        }
        Some(node)
    }

    /// All classified works in pre-order
    pub fn terminals(&self) -> Vec<&ShadowEntry> {
        let mut out = Vec::new();
        for node in self.root.values() {
            node.collect_terminals(&mut out);
        }
        out
    }

    /// Place `entry` at `entry.path`, creating branch levels as needed
    pub(crate) fn insert(&mut self, entry: ShadowEntry) {
        let Some((last, parents)) = entry.path.split_last() else {
            return;
        };
        let last = last.clone();

        let mut level = &mut self.root;
        for segment in parents {
            level = level
                .entry(segment.clone())
                .or_insert_with(ShadowNode::branch)
                .children_mut();
        }
        level
            .entry(last)
            .or_insert_with(ShadowNode::branch)
            .set_entry(entry);
    }
}

/// Author identity → shadow tree, in classification order
///
/// Built by [`Classifier`](super::Classifier); read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadowForest {
    trees: IndexMap<String, ShadowTree>,
}

impl ShadowForest {
    /// Tree for one author
    pub fn get(&self, author: &str) -> Option<&ShadowTree> {
        self.trees.get(author)
    }

    /// Author identities in insertion order
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShadowTree)> {
        self.trees.iter().map(|(author, tree)| (author.as_str(), tree))
    }

    /// Number of authors
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Total classified works across all authors
    pub fn terminal_count(&self) -> usize {
        self.trees.values().map(|tree| tree.terminals().len()).sum()
    }

    /// Add a work to an author's tree, creating the tree on first use
    pub(crate) fn insert(&mut self, author: &str, entry: ShadowEntry) {
        self.trees.entry(author.to_string()).or_default().insert(entry);
    }
}
