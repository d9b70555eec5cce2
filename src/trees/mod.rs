/// Tree induction and the classifier facade
pub mod classifier;
/// Class counts, Gini impurity and information gain
pub mod impurity;
/// Tree node types
pub mod node;
/// Leaf lookup and probability estimates
pub mod predict;
/// Human-readable output
pub mod render;
/// Threshold splits and split search
pub mod split;
