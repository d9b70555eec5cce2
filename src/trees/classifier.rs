//! Decision Tree Classifier
use tracing::{debug, info, trace};

use super::impurity::{class_counts, ClassCounts};
use super::node::{DecisionNode, Leaf, TreeNode};
use super::predict::{classify, most_probable, to_probabilities, Probabilities};
use super::split::best_split;
use crate::data::dataset::{ClassLabel, Dataset, RealNumber, Record};
use crate::errors::TreeError;
use crate::metrics::confusion::ClassificationMetrics;

/// Grows a tree by repeatedly taking the split with the largest Gini gain.
///
/// A node becomes a leaf exactly when no split has positive gain; there is no
/// depth or size limit.
///
/// # Errors
///
/// Returns `TreeError::EmptyDataset` if `dataset` has no records.
pub fn build_tree<XT: RealNumber, YT: ClassLabel>(
    dataset: &Dataset<XT, YT>,
) -> Result<TreeNode<XT, YT>, TreeError> {
    build_node(dataset, 0)
}

fn build_node<XT: RealNumber, YT: ClassLabel>(
    dataset: &Dataset<XT, YT>,
    depth: usize,
) -> Result<TreeNode<XT, YT>, TreeError> {
    if !dataset.is_not_empty() {
        return Err(TreeError::EmptyDataset);
    }

    match best_split(dataset)? {
        (gain, Some(split)) => {
            debug!(depth, %split, gain, rows = dataset.nrows(), "split");
            let (matching, rest) = split.partition(dataset);
            let true_branch = build_node(&matching, depth + 1)?;
            let false_branch = build_node(&rest, depth + 1)?;
            Ok(TreeNode::Node(DecisionNode::new(split, true_branch, false_branch)))
        }
        (_, None) => {
            let counts = class_counts(dataset);
            trace!(depth, %counts, "leaf");
            Ok(TreeNode::Leaf(Leaf::new(counts)))
        }
    }
}

/// Decision Tree Classifier
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<XT: RealNumber, YT: ClassLabel> {
    root: Option<TreeNode<XT, YT>>,
    n_features: usize,
}

impl<XT: RealNumber, YT: ClassLabel> Default for DecisionTreeClassifier<XT, YT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<XT: RealNumber, YT: ClassLabel> ClassificationMetrics<YT> for DecisionTreeClassifier<XT, YT> {}

impl<XT: RealNumber, YT: ClassLabel> DecisionTreeClassifier<XT, YT> {
    pub fn new() -> Self {
        Self {
            root: None,
            n_features: 0,
        }
    }

    /// Builds the tree from a dataset, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::EmptyDataset` if the dataset has no records.
    pub fn fit(&mut self, dataset: &Dataset<XT, YT>) -> Result<(), TreeError> {
        let root = build_tree(dataset)?;
        info!(
            rows = dataset.nrows(),
            features = dataset.n_features(),
            depth = root.depth(),
            leaves = root.n_leaves(),
            "finished building the tree"
        );
        self.root = Some(root);
        self.n_features = dataset.n_features();
        Ok(())
    }

    pub fn root(&self) -> Option<&TreeNode<XT, YT>> {
        self.root.as_ref()
    }

    /// Width of the training data.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Class counts of the leaf the record reaches.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree wasn't built yet or the record is narrower
    /// than the training data.
    pub fn classify(&self, record: &Record<XT, YT>) -> Result<&ClassCounts<YT>, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        if record.n_features() < self.n_features {
            return Err(TreeError::FeatureCountMismatch {
                expected: self.n_features,
                found: record.n_features(),
            });
        }
        Ok(classify(record, root))
    }

    /// Probability of each label seen in the leaf the record reaches.
    pub fn predict_proba(&self, record: &Record<XT, YT>) -> Result<Probabilities<YT>, TreeError> {
        to_probabilities(self.classify(record)?)
    }

    /// Most probable label for every row of `dataset`.
    pub fn predict(&self, dataset: &Dataset<XT, YT>) -> Result<Vec<YT>, TreeError> {
        dataset
            .records()
            .map(|record| {
                let probabilities = self.predict_proba(&record)?;
                most_probable(&probabilities).cloned().ok_or(TreeError::EmptyLeaf)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::split::Split;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;

    fn dataset(
        rows: usize,
        cols: usize,
        x: &[f64],
        y: &[&'static str],
    ) -> Dataset<f64, &'static str> {
        Dataset::new(DMatrix::from_row_slice(rows, cols, x), y.to_vec()).unwrap()
    }

    fn assert_leaves_partition(
        node: &TreeNode<f64, &'static str>,
        data: &Dataset<f64, &'static str>,
    ) {
        match node {
            TreeNode::Leaf(leaf) => {
                assert!(!leaf.counts().is_empty());
                assert_eq!(leaf.counts(), &class_counts(data));
            }
            TreeNode::Node(decision) => {
                let (matching, rest) = decision.split().partition(data);
                assert!(matching.is_not_empty());
                assert!(rest.is_not_empty());
                assert_eq!(matching.nrows() + rest.nrows(), data.nrows());
                assert_leaves_partition(decision.true_branch(), &matching);
                assert_leaves_partition(decision.false_branch(), &rest);
            }
        }
    }

    /// Two interleaved classes on two features; needs more than one level.
    fn checkerboard() -> Dataset<f64, &'static str> {
        dataset(
            8,
            2,
            &[
                1.0, 1.0, 2.0, 1.5, 1.0, 6.0, 2.0, 7.0, //
                6.0, 1.0, 7.0, 2.0, 6.0, 6.0, 7.0, 8.0,
            ],
            &["a", "a", "b", "b", "b", "b", "a", "c"],
        )
    }

    #[test]
    fn test_build_tree_two_records() {
        let mut x = vec![0.5; 32];
        x[0] = 1.0;
        x[16] = 5.0;
        let data = dataset(2, 16, &x, &["A", "B"]);

        let tree = build_tree(&data).unwrap();
        match &tree {
            TreeNode::Node(decision) => {
                assert_eq!(decision.split(), &Split::new(0, 3.0));
                let expected_true: ClassCounts<_> = ["B"].iter().collect();
                let expected_false: ClassCounts<_> = ["A"].iter().collect();
                match (decision.true_branch(), decision.false_branch()) {
                    (TreeNode::Leaf(t), TreeNode::Leaf(f)) => {
                        assert_eq!(t.counts(), &expected_true);
                        assert_eq!(f.counts(), &expected_false);
                    }
                    _ => panic!("children should be leaves"),
                }
            }
            TreeNode::Leaf(_) => panic!("expected a decision node"),
        }
    }

    #[test]
    fn test_build_tree_single_label() {
        let data = dataset(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &["x", "x", "x"]);
        let tree = build_tree(&data).unwrap();
        match &tree {
            TreeNode::Leaf(leaf) => {
                assert_eq!(leaf.counts().get(&"x"), 3);
                assert_eq!(leaf.counts().len(), 1);
            }
            TreeNode::Node(_) => panic!("expected a single leaf"),
        }

        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&data).unwrap();
        let probabilities = classifier
            .predict_proba(&Record::from_vec(vec![100.0, -100.0], "?"))
            .unwrap();
        assert_eq!(probabilities.len(), 1);
        assert_relative_eq!(probabilities[&"x"], 1.0);
    }

    #[test]
    fn test_build_tree_duplicate_rows_different_labels() {
        let data = dataset(3, 2, &[1.0, 1.0, 1.0, 1.0, 9.0, 9.0], &["A", "B", "C"]);
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&data).unwrap();

        let probabilities = classifier
            .predict_proba(&Record::from_vec(vec![1.0, 1.0], "?"))
            .unwrap();
        assert_eq!(probabilities.len(), 2);
        assert_relative_eq!(probabilities[&"A"], 0.5);
        assert_relative_eq!(probabilities[&"B"], 0.5);
    }

    #[test]
    fn test_build_tree_empty_dataset() {
        let data: Dataset<f64, &'static str> = Dataset::new(DMatrix::zeros(0, 2), vec![]).unwrap();
        assert_eq!(build_tree(&data), Err(TreeError::EmptyDataset));
    }

    #[test]
    fn test_build_tree_children_partition_records() {
        let data = checkerboard();
        let tree = build_tree(&data).unwrap();
        assert!(tree.depth() >= 2);
        assert_leaves_partition(&tree, &data);

        let leaf_total: usize = tree.leaves().iter().map(|leaf| leaf.counts().total()).sum();
        assert_eq!(leaf_total, data.nrows());
    }

    #[test]
    fn test_build_tree_fits_training_data() {
        let data = checkerboard();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&data).unwrap();
        let predictions = classifier.predict(&data).unwrap();
        assert_eq!(predictions, data.labels());
        assert_relative_eq!(classifier.accuracy(data.labels(), &predictions).unwrap(), 1.0);
    }

    #[test]
    fn test_build_tree_is_deterministic() {
        let data = checkerboard();
        let first = build_tree(&data).unwrap();
        let second = build_tree(&data).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.splits(), second.splits());
    }

    #[test]
    fn test_predict_proba_is_normalized() {
        let data = dataset(
            6,
            1,
            &[1.0, 1.0, 1.0, 2.0, 2.0, 3.0],
            &["a", "b", "b", "c", "c", "a"],
        );
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&data).unwrap();

        for value in [0.0, 1.0, 1.5, 2.0, 2.5, 3.0, 10.0] {
            let probabilities = classifier
                .predict_proba(&Record::from_vec(vec![value], "?"))
                .unwrap();
            let total: f64 = probabilities.values().sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-9);
            assert!(probabilities.values().all(|&p| (0.0..=1.0).contains(&p)));
        }
    }

    #[test]
    fn test_classify_before_fit() {
        let classifier: DecisionTreeClassifier<f64, &'static str> = DecisionTreeClassifier::new();
        let record = Record::from_vec(vec![1.0], "a");
        assert_eq!(classifier.classify(&record), Err(TreeError::NotFitted));
        assert!(classifier.root().is_none());
    }

    #[test]
    fn test_classify_narrow_record() {
        let data = dataset(2, 2, &[1.0, 2.0, 3.0, 4.0], &["a", "b"]);
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&data).unwrap();
        assert_eq!(classifier.n_features(), 2);

        let record = Record::from_vec(vec![1.0], "a");
        assert_eq!(
            classifier.predict_proba(&record),
            Err(TreeError::FeatureCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
