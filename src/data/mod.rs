// src/data/mod.rs

mod cleaner;
mod corpus;
mod split;

pub use cleaner::TextCleaner;

pub use corpus::{load_labeled_csv, write_split_csv, Sample, SourceStats, SOURCE_ORDER};

pub use split::{
    label_distribution, shuffle_samples, stratified_holdout, train_val_test, SplitRatios,
    SplitSets,
};
