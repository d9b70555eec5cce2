//! Gini impurity and information gain.
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use crate::data::dataset::{ClassLabel, Dataset, RealNumber};
use crate::errors::TreeError;

/// Number of records per label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassCounts<YT: ClassLabel> {
    counts: BTreeMap<YT, usize>,
    total: usize,
}

impl<YT: ClassLabel> Default for ClassCounts<YT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, YT: ClassLabel> FromIterator<&'a YT> for ClassCounts<YT> {
    fn from_iter<I: IntoIterator<Item = &'a YT>>(labels: I) -> Self {
        let mut counts = Self::new();
        labels.into_iter().for_each(|label| counts.add(label));
        counts
    }
}

impl<YT: ClassLabel> ClassCounts<YT> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    pub fn add(&mut self, label: &YT) {
        *self.counts.entry(label.clone()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, label: &YT) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Labels in ascending order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&YT, usize)> + '_ {
        self.counts.iter().map(|(label, &count)| (label, count))
    }

    /// `1 - sum(p_i^2)` over the label proportions.
    pub fn gini_impurity(&self) -> Result<f64, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let total = self.total as f64;
        Ok(self.counts.values().fold(1.0, |impurity, &count| {
            let p = count as f64 / total;
            impurity - p * p
        }))
    }
}

impl<YT: ClassLabel> Display for ClassCounts<YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", label, count)?;
        }
        write!(f, "}}")
    }
}

pub fn class_counts<XT: RealNumber, YT: ClassLabel>(dataset: &Dataset<XT, YT>) -> ClassCounts<YT> {
    dataset.labels().iter().collect()
}

pub fn gini_impurity<XT: RealNumber, YT: ClassLabel>(
    dataset: &Dataset<XT, YT>,
) -> Result<f64, TreeError> {
    class_counts(dataset).gini_impurity()
}

/// Impurity removed by splitting a parent into `left` and `right`, each side
/// weighted by its share of the records.
pub fn information_gain<YT: ClassLabel>(
    left: &ClassCounts<YT>,
    right: &ClassCounts<YT>,
    parent_impurity: f64,
) -> Result<f64, TreeError> {
    let total = (left.total() + right.total()) as f64;
    let weight_left = left.total() as f64 / total;
    let weight_right = right.total() as f64 / total;

    Ok(parent_impurity
        - weight_left * left.gini_impurity()?
        - weight_right * right.gini_impurity()?)
}
