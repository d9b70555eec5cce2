//! Univariate threshold splits and the search for the best one.
use nalgebra::DVector;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use super::impurity::{gini_impurity, information_gain, ClassCounts};
use crate::data::dataset::{ClassLabel, Dataset, RealNumber, Record};
use crate::errors::TreeError;

/// Test `x[feature_index] >= threshold`. Values equal to the threshold match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Split<XT: RealNumber> {
    feature_index: usize,
    threshold: XT,
}

impl<XT: RealNumber> Display for Split<XT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "x[{}] >= {}", self.feature_index, self.threshold)
    }
}

impl<XT: RealNumber> Split<XT> {
    pub fn new(feature_index: usize, threshold: XT) -> Self {
        Self {
            feature_index,
            threshold,
        }
    }

    pub fn feature_index(&self) -> usize {
        self.feature_index
    }

    pub fn threshold(&self) -> XT {
        self.threshold
    }

    /// # Panics
    ///
    /// Panics if `features` has no value at `feature_index`.
    pub fn matches(&self, features: &DVector<XT>) -> bool {
        features[self.feature_index] >= self.threshold
    }

    pub fn matches_record<YT: ClassLabel>(&self, record: &Record<XT, YT>) -> bool {
        self.matches(record.features())
    }

    /// Returns `(matching, rest)`. Together they hold every row of `dataset` exactly once.
    pub fn partition<YT: ClassLabel>(
        &self,
        dataset: &Dataset<XT, YT>,
    ) -> (Dataset<XT, YT>, Dataset<XT, YT>) {
        dataset.split_on_threshold(self.feature_index, self.threshold)
    }

    /// Label counts of both sides, without materializing the subsets.
    fn side_counts<YT: ClassLabel>(
        &self,
        dataset: &Dataset<XT, YT>,
    ) -> (ClassCounts<YT>, ClassCounts<YT>) {
        let mut matching = ClassCounts::new();
        let mut rest = ClassCounts::new();
        for (row, label) in dataset.labels().iter().enumerate() {
            if dataset.value(row, self.feature_index) >= self.threshold {
                matching.add(label);
            } else {
                rest.add(label);
            }
        }
        (matching, rest)
    }
}

/// Finds the split with the largest positive information gain.
///
/// Candidate thresholds are the midpoints between adjacent distinct values of each
/// feature. Candidates leaving a side empty are skipped. Ties keep the first
/// candidate by feature index, then by threshold. Returns `(0.0, None)` when no
/// candidate improves on the parent.
pub fn best_split<XT: RealNumber, YT: ClassLabel>(
    dataset: &Dataset<XT, YT>,
) -> Result<(f64, Option<Split<XT>>), TreeError> {
    let parent_impurity = gini_impurity(dataset)?;

    let per_feature = (0..dataset.n_features())
        .into_par_iter()
        .map(|feature_index| best_split_for_feature(dataset, feature_index, parent_impurity))
        .collect::<Result<Vec<_>, _>>()?;

    let mut best_gain = 0.0;
    let mut best = None;
    for (gain, split) in per_feature.into_iter().flatten() {
        if gain > best_gain {
            best_gain = gain;
            best = Some(split);
        }
    }
    Ok((best_gain, best))
}

fn best_split_for_feature<XT: RealNumber, YT: ClassLabel>(
    dataset: &Dataset<XT, YT>,
    feature_index: usize,
    parent_impurity: f64,
) -> Result<Option<(f64, Split<XT>)>, TreeError> {
    let mut unique_values: Vec<XT> = dataset.column(feature_index).collect();
    unique_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    unique_values.dedup();

    let two = XT::one() + XT::one();
    let mut best_gain = 0.0;
    let mut best = None;

    for pair in unique_values.windows(2) {
        let split = Split::new(feature_index, (pair[0] + pair[1]) / two);
        let (matching, rest) = split.side_counts(dataset);
        if matching.is_empty() || rest.is_empty() {
            continue;
        }

        let gain = information_gain(&matching, &rest, parent_impurity)?;
        if gain > best_gain {
            best_gain = gain;
            best = Some((gain, split));
        }
    }
    Ok(best)
}
