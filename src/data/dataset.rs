use nalgebra::{DMatrix, DVector};
use num_traits::{Float, FromPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::{self, Debug, Display, Formatter};

use crate::errors::DataError;

/// Numeric type a feature column can hold.
pub trait RealNumber: Float + FromPrimitive + Debug + Display + Send + Sync + 'static {}
impl<T> RealNumber for T where T: Float + FromPrimitive + Debug + Display + Send + Sync + 'static {}

/// Categorical target. Labels are ordered so class counts iterate deterministically.
pub trait ClassLabel: Clone + Ord + Debug + Display + Send + Sync + 'static {}
impl<T> ClassLabel for T where T: Clone + Ord + Debug + Display + Send + Sync + 'static {}

/// A single observation: a feature vector and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Record<XT: RealNumber, YT: ClassLabel> {
    features: DVector<XT>,
    label: YT,
}

impl<XT: RealNumber, YT: ClassLabel> Record<XT, YT> {
    pub fn new(features: DVector<XT>, label: YT) -> Self {
        Self { features, label }
    }

    pub fn from_vec(features: Vec<XT>, label: YT) -> Self {
        Self::new(DVector::from_vec(features), label)
    }

    pub fn features(&self) -> &DVector<XT> {
        &self.features
    }

    pub fn label(&self) -> &YT {
        &self.label
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }
}

/// Ordered collection of records sharing one schema.
///
/// Row `i` of `x` holds the features of the record labelled `y[i]`.
#[derive(Clone, PartialEq)]
pub struct Dataset<XT: RealNumber, YT: ClassLabel> {
    pub x: DMatrix<XT>,
    pub y: Vec<YT>,
}

impl<XT: RealNumber, YT: ClassLabel> Debug for Dataset<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    x: [\n")?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for j in 0..self.x.ncols() {
                write!(f, "{:?}, ", self.x[(i, j)])?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for label in &self.y {
            write!(f, "{:?}, ", label)?;
        }
        write!(f, "]\n}}")
    }
}

impl<XT: RealNumber, YT: ClassLabel> Dataset<XT, YT> {
    pub fn new(x: DMatrix<XT>, y: Vec<YT>) -> Result<Self, DataError> {
        if x.nrows() != y.len() {
            return Err(DataError::ShapeMismatch {
                rows: x.nrows(),
                labels: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Builds a dataset whose width is taken from the first record.
    pub fn from_records(records: &[Record<XT, YT>]) -> Result<Self, DataError> {
        let n_features = records.first().map_or(0, Record::n_features);
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| record.n_features() != n_features)
        {
            return Err(DataError::UnequalWidth {
                record: index,
                expected: n_features,
                found: record.n_features(),
            });
        }

        let x = DMatrix::from_fn(records.len(), n_features, |row, col| {
            records[row].features[col]
        });
        let y = records.iter().map(|record| record.label.clone()).collect();
        Ok(Self { x, y })
    }

    pub fn is_not_empty(&self) -> bool {
        !self.y.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    /// Width of the schema; every split search iterates exactly this many columns.
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn labels(&self) -> &[YT] {
        &self.y
    }

    pub fn value(&self, row: usize, feature_index: usize) -> XT {
        self.x[(row, feature_index)]
    }

    /// Values of one feature, in row order.
    pub fn column(&self, feature_index: usize) -> impl Iterator<Item = XT> + '_ {
        (0..self.nrows()).map(move |row| self.value(row, feature_index))
    }

    pub fn record(&self, row: usize) -> Record<XT, YT> {
        Record::new(self.x.row(row).transpose(), self.y[row].clone())
    }

    pub fn records(&self) -> impl Iterator<Item = Record<XT, YT>> + '_ {
        (0..self.nrows()).map(move |row| self.record(row))
    }

    /// Keeps the given rows, in the given order.
    pub fn select(&self, rows: &[usize]) -> Self {
        Self {
            x: self.x.select_rows(rows),
            y: rows.iter().map(|&row| self.y[row].clone()).collect(),
        }
    }

    /// Splits rows into those with `x[feature_index] >= threshold` and the rest.
    /// Relative order is preserved on both sides.
    pub fn split_on_threshold(&self, feature_index: usize, threshold: XT) -> (Self, Self) {
        let (matching, rest): (Vec<usize>, Vec<usize>) =
            (0..self.nrows()).partition(|&row| self.value(row, feature_index) >= threshold);

        (self.select(&matching), self.select(&rest))
    }

    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), DataError> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(DataError::InvalidTrainSize(train_size));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.nrows() as f64 * train_size).floor() as usize;

        Ok((
            self.select(&indices[..train_size]),
            self.select(&indices[train_size..]),
        ))
    }
}
