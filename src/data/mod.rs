/// Feature-name table used for display
pub mod attributes;
/// Records, datasets and their numeric bounds
pub mod dataset;
/// Delimited-text record reader
pub mod reader;
