//! Reads comma separated records.
//!
//! Each line holds the feature values followed by the class label. The label is
//! cut at its first `.`, so `lesion.` and `lesion.1` both read as `lesion`. A label
//! that is empty after the cut, such as `.x`, is rejected.
use csv::{ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

use super::dataset::{Dataset, Record};
use crate::errors::DataError;

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Dataset<f64, String>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(csv::Error::from)?;
    let dataset = read_from(file)?;
    debug!(
        path = %path.display(),
        rows = dataset.nrows(),
        features = dataset.n_features(),
        "loaded records"
    );
    Ok(dataset)
}

pub fn read_from<R: Read>(source: R) -> Result<Dataset<f64, String>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(source);

    let records = reader
        .records()
        .map(|result| parse_record(&result?))
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(DataError::Empty);
    }
    Dataset::from_records(&records)
}

fn parse_record(record: &StringRecord) -> Result<Record<f64, String>, DataError> {
    let line = record.position().map_or(0, |position| position.line());
    let label_index = match record.len() {
        0 => return Err(DataError::MissingLabel { line }),
        len => len - 1,
    };

    let label = record[label_index]
        .split('.')
        .next()
        .unwrap_or_default()
        .trim();
    if label.is_empty() {
        return Err(DataError::MissingLabel { line });
    }

    let features = record
        .iter()
        .take(label_index)
        .enumerate()
        .map(|(column, field)| {
            let value = field
                .parse::<f64>()
                .map_err(|_| DataError::InvalidFeature {
                    line,
                    column,
                    value: field.to_string(),
                })?;
            if !value.is_finite() {
                return Err(DataError::NonFiniteFeature { line, column });
            }
            Ok(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record::from_vec(features, label.to_string()))
}
