//! # Rusty-cart
//!
//! `rusty-cart` grows binary decision trees from labeled numeric records (CART with
//! Gini impurity) and uses them to estimate class probabilities for new records.
//!
//! ## Getting Started
//!
//! To use `rusty-cart`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-cart = "*"
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use rusty_cart::data::dataset::{Dataset, Record};
//! use rusty_cart::trees::classifier::DecisionTreeClassifier;
//!
//! let records = vec![
//!     Record::from_vec(vec![1.0, 0.0], "healthy".to_string()),
//!     Record::from_vec(vec![5.0, 0.0], "lesion".to_string()),
//! ];
//! let dataset = Dataset::from_records(&records).unwrap();
//!
//! let mut model = DecisionTreeClassifier::new();
//! model.fit(&dataset).unwrap();
//!
//! let query = Record::from_vec(vec![4.0, 0.0], String::new());
//! let probabilities = model.predict_proba(&query).unwrap();
//! assert_eq!(probabilities["lesion"], 1.0);
//! ```

/// Records, datasets and the record reader
pub mod data;
/// Error types
pub mod errors;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
