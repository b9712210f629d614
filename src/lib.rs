//! polytext-prep: preprocessing pipeline for multilingual labeled text
//!
//! Ingests per-language CSV corpora (`text`, `label`), scrubs the text,
//! merges the sources and emits a reproducible stratified
//! train/validation/test partition.

pub mod commands;
pub mod data;
pub mod error;
pub mod utils;

// Main re-exports
pub use data::{
    label_distribution, load_labeled_csv, shuffle_samples, stratified_holdout, train_val_test,
    write_split_csv, Sample, SourceStats, SplitRatios, SplitSets, TextCleaner, SOURCE_ORDER,
};
pub use error::{PrepError, Result};
