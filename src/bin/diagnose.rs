use rusty_cart::data::attributes::FeatureNames;
use rusty_cart::data::dataset::Dataset;
use rusty_cart::data::reader::read_records;
use rusty_cart::metrics::confusion::ClassificationMetrics;
use rusty_cart::trees::classifier::DecisionTreeClassifier;
use rusty_cart::trees::predict::most_probable;
use rusty_cart::trees::render::TreeRenderer;
use std::error::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: diagnose <training.csv> [test.csv]";
const TRAIN_SIZE: f64 = 0.75;
const SPLIT_SEED: u64 = 42;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Splits the training data when no test file is given. Both halves need a record.
fn hold_out(
    train: Dataset<f64, String>,
) -> Result<(Dataset<f64, String>, Dataset<f64, String>), Box<dyn Error>> {
    if train.nrows() < 2 {
        return Err(format!(
            "need at least 2 training records to hold out a test set, found {}; pass a test file",
            train.nrows()
        )
        .into());
    }
    warn!(
        train_size = TRAIN_SIZE,
        seed = SPLIT_SEED,
        "no test file given, holding out part of the training data"
    );
    Ok(train.train_test_split(TRAIN_SIZE, Some(SPLIT_SEED))?)
}

fn load(
    train_path: &str,
    test_path: Option<&str>,
) -> Result<(Dataset<f64, String>, Dataset<f64, String>), Box<dyn Error>> {
    let train = read_records(train_path)?;
    match test_path {
        Some(path) => Ok((train, read_records(path)?)),
        None => hold_out(train),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (train_path, test_path) = match args.as_slice() {
        [train] => (train.as_str(), None),
        [train, test] => (train.as_str(), Some(test.as_str())),
        _ => return Err(USAGE.into()),
    };

    let (train_dataset, test_dataset) = load(train_path, test_path)?;
    info!(
        train = train_dataset.nrows(),
        test = test_dataset.nrows(),
        "loaded datasets"
    );

    let mut classifier = DecisionTreeClassifier::new();
    classifier.fit(&train_dataset)?;

    let renderer = TreeRenderer::new(FeatureNames::horse_colic());
    if let Some(root) = classifier.root() {
        println!("{}", renderer.tree(root));
    }

    let mut predictions = Vec::with_capacity(test_dataset.nrows());
    for record in test_dataset.records() {
        let probabilities = classifier.predict_proba(&record)?;
        println!("{}", renderer.prediction(record.label(), &probabilities));
        predictions.extend(most_probable(&probabilities).cloned());
    }

    if test_dataset.is_not_empty() {
        let accuracy = classifier.accuracy(test_dataset.labels(), &predictions)?;
        println!("Accuracy: {}%", accuracy * 100.0);
    }
    Ok(())
}
