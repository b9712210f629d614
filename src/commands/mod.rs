//! Commands Module
//!
//! All CLI subcommand implementations.

pub mod preprocess;
pub mod stats;
