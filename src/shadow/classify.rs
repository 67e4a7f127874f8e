//! Classification of catalog nodes into per-author shadow trees

use super::tree::{ShadowEntry, ShadowForest, WorkKind};
use crate::config::ClassifierConfig;
use crate::toc::{parse_toc, TocNode, TocResult};
use serde_json::Value;
use tracing::{debug, info};

/// Walks a catalog and files every dependent work on a root text under its
/// author's shadow tree
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    /// Lower-cased copy of `config.exclusion_keywords`
    exclusion_keywords: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        let exclusion_keywords = config
            .exclusion_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        Self {
            config,
            exclusion_keywords,
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Build the shadow forest for `root_text`
    ///
    /// Pre-order walk over the whole catalog. Each node is tested on its own;
    /// an excluded or unattributable node is skipped but its children are
    /// still visited. Ancestor segments use the English label, the work's own
    /// final segment uses the Hebrew one.
    pub fn build(&self, toc: &[TocNode], root_text: &str) -> ShadowForest {
        let mut forest = ShadowForest::default();
        self.walk(toc, &[], root_text, &mut forest);

        info!(
            root_text,
            authors = forest.len(),
            works = forest.terminal_count(),
            "built shadow forest"
        );
        forest
    }

    fn walk(
        &self,
        nodes: &[TocNode],
        ancestors: &[String],
        root_text: &str,
        forest: &mut ShadowForest,
    ) {
        for node in nodes {
            if self.qualifies(node, root_text) {
                let author = node.label();
                if author.is_empty() {
                    debug!(?ancestors, "skipping qualifying node without a title");
                } else {
                    let mut path = ancestors.to_vec();
                    path.push(author.to_string());
                    debug!(author, ?path, "classified work");
                    forest.insert(
                        author,
                        ShadowEntry {
                            title: node.display_title().to_string(),
                            path,
                            kind: self.kind_of(node),
                        },
                    );
                }
            }

            let mut descent = ancestors.to_vec();
            descent.push(node.display_title().to_string());
            self.walk(&node.children, &descent, root_text, forest);
        }
    }

    /// Whether `node` itself belongs in the forest for `root_text`
    pub fn qualifies(&self, node: &TocNode, root_text: &str) -> bool {
        !self.is_excluded(node) && self.is_dependent(node) && self.targets(node, root_text)
    }

    /// Short description mentions one of the exclusion keywords
    fn is_excluded(&self, node: &TocNode) -> bool {
        if node.short_description.is_empty() {
            return false;
        }
        let description = node.short_description.to_lowercase();
        self.exclusion_keywords
            .iter()
            .any(|keyword| description.contains(keyword.as_str()))
    }

    /// Tagged as a commentary or translation, by category or dependence
    fn is_dependent(&self, node: &TocNode) -> bool {
        let by_category = node
            .categories
            .iter()
            .any(|c| self.config.dependent_categories.contains(c));
        let by_dependence = node
            .dependence
            .as_ref()
            .is_some_and(|d| self.config.dependence_markers.contains(d));
        by_category || by_dependence
    }

    /// Attached to `root_text`, either as its single base text or through a
    /// category name containing it
    fn targets(&self, node: &TocNode, root_text: &str) -> bool {
        let single_base =
            node.base_text_titles.len() == 1 && node.base_text_titles[0] == root_text;
        single_base || node.categories.iter().any(|c| c.contains(root_text))
    }

    fn kind_of(&self, node: &TocNode) -> WorkKind {
        if node
            .categories
            .iter()
            .any(|c| self.config.translation_categories.contains(c))
        {
            WorkKind::Translation
        } else {
            WorkKind::Commentary
        }
    }
}

/// Build a shadow forest with the default rules
pub fn build_shadow_forest(toc: &[TocNode], root_text: &str) -> ShadowForest {
    Classifier::default().build(toc, root_text)
}

/// Parse raw catalog JSON, then build a shadow forest with the default rules
///
/// A malformed catalog fails before any classification happens.
pub fn build_shadow_forest_from_value(toc: &Value, root_text: &str) -> TocResult<ShadowForest> {
    let toc = parse_toc(toc)?;
    Ok(build_shadow_forest(&toc, root_text))
}
