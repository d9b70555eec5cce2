//! Routing records through a built tree.
use std::collections::BTreeMap;

use super::impurity::ClassCounts;
use super::node::TreeNode;
use crate::data::dataset::{ClassLabel, RealNumber, Record};
use crate::errors::TreeError;

/// Probability per label, in label order.
pub type Probabilities<YT> = BTreeMap<YT, f64>;

/// Returns the class counts of the leaf `record` lands in.
///
/// # Panics
///
/// Panics if `record` is narrower than the data the tree was built from.
/// `DecisionTreeClassifier::classify` checks the width first.
pub fn classify<'a, XT: RealNumber, YT: ClassLabel>(
    record: &Record<XT, YT>,
    tree: &'a TreeNode<XT, YT>,
) -> &'a ClassCounts<YT> {
    let mut node = tree;
    loop {
        match node {
            TreeNode::Leaf(leaf) => return leaf.counts(),
            TreeNode::Node(decision) => {
                node = if decision.split().matches_record(record) {
                    decision.true_branch()
                } else {
                    decision.false_branch()
                };
            }
        }
    }
}

/// Normalizes counts into a distribution.
///
/// Leaves of a built tree are never empty, so `TreeError::EmptyLeaf` is only
/// reachable with hand-made counts.
pub fn to_probabilities<YT: ClassLabel>(
    counts: &ClassCounts<YT>,
) -> Result<Probabilities<YT>, TreeError> {
    if counts.is_empty() {
        return Err(TreeError::EmptyLeaf);
    }
    let total = counts.total() as f64;
    Ok(counts
        .iter()
        .map(|(label, count)| (label.clone(), count as f64 / total))
        .collect())
}

/// Label with the highest probability. Ties go to the label that sorts first.
pub fn most_probable<YT: ClassLabel>(probabilities: &Probabilities<YT>) -> Option<&YT> {
    let mut best: Option<(&YT, f64)> = None;
    for (label, &p) in probabilities {
        if best.map_or(true, |(_, best_p)| p > best_p) {
            best = Some((label, p));
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::node::{DecisionNode, Leaf};
    use crate::trees::split::Split;
    use approx::assert_relative_eq;

    fn leaf(labels: &[&'static str]) -> TreeNode<f64, &'static str> {
        TreeNode::Leaf(Leaf::new(labels.iter().collect()))
    }

    fn stump() -> TreeNode<f64, &'static str> {
        TreeNode::Node(DecisionNode::new(
            Split::new(0, 3.0),
            leaf(&["B"]),
            leaf(&["A", "A", "B"]),
        ))
    }

    #[test]
    fn test_classify_routes_by_split() {
        let tree = stump();
        let high = Record::from_vec(vec![4.0], "?");
        let low = Record::from_vec(vec![1.0], "?");
        assert_eq!(classify(&high, &tree).get(&"B"), 1);
        assert_eq!(classify(&low, &tree).get(&"A"), 2);
    }

    #[test]
    fn test_classify_threshold_goes_true() {
        let tree = stump();
        let exact = Record::from_vec(vec![3.0], "?");
        assert_eq!(classify(&exact, &tree).total(), 1);
    }

    #[test]
    fn test_to_probabilities() {
        let counts: ClassCounts<_> = ["A", "A", "B"].iter().collect();
        let probabilities = to_probabilities(&counts).unwrap();

        assert_relative_eq!(probabilities[&"A"], 2.0 / 3.0);
        assert_relative_eq!(probabilities[&"B"], 1.0 / 3.0);
        assert_relative_eq!(probabilities.values().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_probabilities_empty() {
        let counts: ClassCounts<String> = ClassCounts::new();
        assert_eq!(to_probabilities(&counts), Err(TreeError::EmptyLeaf));
    }

    #[test]
    fn test_most_probable() {
        let probabilities: Probabilities<&str> = [("A", 0.25), ("B", 0.75)].into_iter().collect();
        assert_eq!(most_probable(&probabilities), Some(&"B"));

        let tied: Probabilities<&str> = [("B", 0.5), ("A", 0.5)].into_iter().collect();
        assert_eq!(most_probable(&tied), Some(&"A"));

        assert_eq!(most_probable(&Probabilities::<&str>::new()), None);
    }
}
