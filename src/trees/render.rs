//! Text output for trees and predictions.
use std::fmt::{self, Display, Formatter};

use super::node::TreeNode;
use super::predict::Probabilities;
use super::split::Split;
use crate::data::attributes::FeatureNames;
use crate::data::dataset::{ClassLabel, RealNumber};

const INDENT: &str = "  ";

/// Renders splits with human-readable feature names.
#[derive(Clone, Debug, Default)]
pub struct TreeRenderer {
    feature_names: FeatureNames,
}

impl TreeRenderer {
    pub fn new(feature_names: FeatureNames) -> Self {
        Self { feature_names }
    }

    pub fn split<XT: RealNumber>(&self, split: &Split<XT>) -> String {
        format!(
            "{} >= {}",
            self.feature_names.name(split.feature_index()),
            split.threshold()
        )
    }

    /// Indented outline of the tree, true branch first.
    pub fn tree<'a, XT: RealNumber, YT: ClassLabel>(
        &'a self,
        tree: &'a TreeNode<XT, YT>,
    ) -> RenderedTree<'a, XT, YT> {
        RenderedTree {
            renderer: self,
            tree,
        }
    }

    pub fn prediction<YT: ClassLabel>(
        &self,
        actual: &YT,
        probabilities: &Probabilities<YT>,
    ) -> String {
        let predicted = probabilities
            .iter()
            .map(|(label, p)| format!("{}: {}", label, p))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Actual: {}. Predicted: {{{}}}", actual, predicted)
    }

    fn write_node<XT: RealNumber, YT: ClassLabel>(
        &self,
        f: &mut Formatter<'_>,
        node: &TreeNode<XT, YT>,
        level: usize,
    ) -> fmt::Result {
        let indent = INDENT.repeat(level);
        match node {
            TreeNode::Leaf(leaf) => writeln!(f, "{}Predict: {}", indent, leaf.counts()),
            TreeNode::Node(decision) => {
                writeln!(f, "{}{}", indent, self.split(decision.split()))?;
                writeln!(f, "{}True_Branch:", indent)?;
                self.write_node(f, decision.true_branch(), level + 1)?;
                writeln!(f, "{}False_Branch:", indent)?;
                self.write_node(f, decision.false_branch(), level + 1)
            }
        }
    }
}

/// Display adapter returned by [`TreeRenderer::tree`].
pub struct RenderedTree<'a, XT: RealNumber, YT: ClassLabel> {
    renderer: &'a TreeRenderer,
    tree: &'a TreeNode<XT, YT>,
}

impl<XT: RealNumber, YT: ClassLabel> Display for RenderedTree<'_, XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.renderer.write_node(f, self.tree, 0)
    }
}
