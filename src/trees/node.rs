use super::impurity::ClassCounts;
use super::split::Split;
use crate::data::dataset::{ClassLabel, RealNumber};

/// Terminal node holding the label counts of the records that reached it.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf<YT: ClassLabel> {
    counts: ClassCounts<YT>,
}

impl<YT: ClassLabel> Leaf<YT> {
    pub fn new(counts: ClassCounts<YT>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &ClassCounts<YT> {
        &self.counts
    }
}

/// Internal node. Records matching `split` go to `true_branch`, the rest to `false_branch`.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionNode<XT: RealNumber, YT: ClassLabel> {
    split: Split<XT>,
    true_branch: Box<TreeNode<XT, YT>>,
    false_branch: Box<TreeNode<XT, YT>>,
}

impl<XT: RealNumber, YT: ClassLabel> DecisionNode<XT, YT> {
    pub fn new(
        split: Split<XT>,
        true_branch: TreeNode<XT, YT>,
        false_branch: TreeNode<XT, YT>,
    ) -> Self {
        Self {
            split,
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }
    }

    pub fn split(&self) -> &Split<XT> {
        &self.split
    }

    pub fn true_branch(&self) -> &TreeNode<XT, YT> {
        &self.true_branch
    }

    pub fn false_branch(&self) -> &TreeNode<XT, YT> {
        &self.false_branch
    }
}

/// Decision tree node
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode<XT: RealNumber, YT: ClassLabel> {
    Leaf(Leaf<YT>),
    Node(DecisionNode<XT, YT>),
}

impl<XT: RealNumber, YT: ClassLabel> TreeNode<XT, YT> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Number of decision levels; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, level)) = stack.pop() {
            match node {
                TreeNode::Leaf(_) => depth = depth.max(level),
                TreeNode::Node(node) => {
                    stack.push((node.false_branch.as_ref(), level + 1));
                    stack.push((node.true_branch.as_ref(), level + 1));
                }
            }
        }
        depth
    }

    pub fn n_leaves(&self) -> usize {
        self.leaves().len()
    }

    /// Leaves in true-branch-first order.
    pub fn leaves(&self) -> Vec<&Leaf<YT>> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::Leaf(leaf) => leaves.push(leaf),
                TreeNode::Node(node) => {
                    stack.push(&node.false_branch);
                    stack.push(&node.true_branch);
                }
            }
        }
        leaves
    }

    /// Splits in pre-order, true branch first.
    pub fn splits(&self) -> Vec<&Split<XT>> {
        let mut splits = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let TreeNode::Node(node) = node {
                splits.push(&node.split);
                stack.push(&node.false_branch);
                stack.push(&node.true_branch);
            }
        }
        splits
    }
}
