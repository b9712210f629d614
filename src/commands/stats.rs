//! Stats Command
//!
//! Reports per-source row accounting and the merged label distribution
//! without writing any output. A dry run before committing to a split.

use std::path::Path;

use crate::data::{label_distribution, load_labeled_csv, Sample, TextCleaner, SOURCE_ORDER};
use crate::error::Result;
use crate::utils::format_number;

pub fn execute(data_dir: &Path) -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  📊 Corpus statistics");
    println!("═══════════════════════════════════════════════════════════");
    println!("  Data dir: {:?}", data_dir);
    println!();

    let cleaner = TextCleaner::new();
    let mut combined: Vec<Sample> = Vec::new();

    for name in SOURCE_ORDER {
        let path = data_dir.join(format!("{}.csv", name));
        let (samples, stats) = load_labeled_csv(&path, &cleaner)?;

        println!("  {}.csv", name);
        println!("    rows: {}", format_number(stats.rows_read as usize));
        println!("    kept: {}", format_number(stats.rows_kept as usize));
        println!("    dropped (missing field): {}", stats.rows_dropped_missing);
        println!("    dropped (empty after clean): {}", stats.rows_dropped_empty);

        combined.extend(samples);
    }

    println!();
    println!("  Combined: {} rows", format_number(combined.len()));
    for (label, count) in label_distribution(&combined) {
        println!("    label {}: {}", label, format_number(count));
    }
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}
