use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::data::dataset::ClassLabel;
use crate::errors::MetricsError;

/// Counts of (actual, predicted) pairs. Rows are actual classes, columns predicted
/// ones, both in `classes` order.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionMatrix<T: ClassLabel> {
    pub classes: Vec<T>,
    pub matrix: DMatrix<usize>,
}

pub trait ClassificationMetrics<T: ClassLabel> {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length.
    fn confusion_matrix(
        &self,
        y_true: &[T],
        y_pred: &[T],
    ) -> Result<ConfusionMatrix<T>, MetricsError> {
        if y_true.len() != y_pred.len() {
            return Err(MetricsError::LengthMismatch {
                actual: y_true.len(),
                predicted: y_pred.len(),
            });
        }

        let classes: Vec<T> = y_true
            .iter()
            .chain(y_pred)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred) {
            // Both labels were inserted into `classes` above.
            if let (Ok(row), Ok(col)) = (classes.binary_search(y_t), classes.binary_search(y_p)) {
                matrix[(row, col)] += 1;
            }
        }

        Ok(ConfusionMatrix { classes, matrix })
    }

    /// Share of predictions equal to the true label.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices differ in length or are empty.
    fn accuracy(&self, y_true: &[T], y_pred: &[T]) -> Result<f64, MetricsError> {
        if y_true.is_empty() {
            return Err(MetricsError::Empty);
        }
        let matrix = self.confusion_matrix(y_true, y_pred)?.matrix;
        let correct: usize = matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }
}
