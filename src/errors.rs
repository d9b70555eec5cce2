//! Errors
//!
//! Error types returned by tree induction, prediction and data loading.
use thiserror::Error;

/// Errors raised while building a tree or predicting with it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TreeError {
    /// Impurity or tree construction was asked to work on zero records.
    #[error("Cannot compute on an empty dataset.")]
    EmptyDataset,
    /// Probabilities were requested from class counts that sum to zero.
    /// Leaves always hold at least one record, so a built tree never produces this.
    #[error("Cannot turn empty class counts into probabilities.")]
    EmptyLeaf,
    /// The classifier was used before `fit`.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// A record is narrower than the schema the tree was trained on.
    #[error("Expected a record with {expected} features, but {found} were provided.")]
    FeatureCountMismatch { expected: usize, found: usize },
}

/// Errors raised while scoring predictions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Predictions and labels are of different sizes ({actual} vs {predicted}).")]
    LengthMismatch { actual: usize, predicted: usize },
    #[error("Cannot score an empty set of predictions.")]
    Empty,
}

/// Errors raised while turning delimited text into a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying csv/io failure, including rows of unequal width.
    #[error("Unable to read records: {0}")]
    Csv(#[from] csv::Error),
    /// A line without a label field.
    #[error("Line {line} has no label.")]
    MissingLabel { line: u64 },
    /// A feature field that is not a number.
    #[error("Line {line}, column {column}: '{value}' is not a number.")]
    InvalidFeature {
        line: u64,
        column: usize,
        value: String,
    },
    /// A feature field that parsed to NaN or infinity.
    #[error("Line {line}, column {column}: feature value is not finite.")]
    NonFiniteFeature { line: u64, column: usize },
    /// A record whose width differs from the first record's.
    #[error("Record {record} has {found} features, expected {expected}.")]
    UnequalWidth {
        record: usize,
        expected: usize,
        found: usize,
    },
    /// The input held no records.
    #[error("No records found.")]
    Empty,
    /// Train fraction outside `0.0..=1.0`.
    #[error("Train size should be between 0.0 and 1.0, got {0}.")]
    InvalidTrainSize(f64),
    /// Feature rows and labels disagree in length.
    #[error("Dataset has {rows} feature rows but {labels} labels.")]
    ShapeMismatch { rows: usize, labels: usize },
}
