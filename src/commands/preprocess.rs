//! Preprocess Command
//!
//! Full pipeline: load the per-language sources, clean and filter,
//! merge, shuffle and write the stratified train/val/test CSVs.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::data::{
    label_distribution, load_labeled_csv, shuffle_samples, train_val_test, write_split_csv,
    Sample, SplitRatios, TextCleaner, SOURCE_ORDER,
};
use crate::error::Result;
use crate::utils::{format_duration, format_number};

const OUTPUT_FILES: [&str; 3] = ["train_data.csv", "val_data.csv", "test_data.csv"];

pub fn execute(data_dir: &Path, output: &Path, seed: u64, ratios: SplitRatios) -> Result<()> {
    ratios.validate()?;

    println!("═══════════════════════════════════════════════════════════");
    println!("  🧹 Preprocessing multilingual corpus");
    println!("═══════════════════════════════════════════════════════════");
    println!("  Data dir: {:?}", data_dir);
    println!("  Output: {:?}", output);
    println!("  Seed: {}", seed);
    println!(
        "  Ratios - Train: {}, Val: {}, Test: {}",
        ratios.train, ratios.val, ratios.test
    );
    println!();

    let start = Instant::now();
    let cleaner = TextCleaner::new();
    let mut combined: Vec<Sample> = Vec::new();

    for name in SOURCE_ORDER {
        let path = data_dir.join(format!("{}.csv", name));
        let (samples, stats) = load_labeled_csv(&path, &cleaner)?;

        info!(
            source = name,
            read = stats.rows_read,
            kept = stats.rows_kept,
            "source loaded"
        );
        println!(
            "  {}.csv: kept {} / {} (missing: {}, empty after clean: {})",
            name,
            format_number(stats.rows_kept as usize),
            format_number(stats.rows_read as usize),
            stats.rows_dropped_missing,
            stats.rows_dropped_empty
        );

        combined.extend(samples);
    }

    println!();
    println!("  Combined: {} rows", format_number(combined.len()));
    for (label, count) in label_distribution(&combined) {
        println!("    label {}: {}", label, format_number(count));
    }
    println!();

    shuffle_samples(&mut combined, seed);
    let sets = train_val_test(combined, ratios, seed)?;

    std::fs::create_dir_all(output)?;
    for (name, split) in OUTPUT_FILES
        .iter()
        .zip([&sets.train, &sets.val, &sets.test])
    {
        let path = output.join(name);
        write_split_csv(&path, split)?;
        println!(
            "  {} rows -> {:?}",
            format_number(split.len()),
            path
        );
    }

    let elapsed = start.elapsed();
    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ Preprocessing finished!");
    println!(
        "  Data preprocessing and splitting completed. Files saved as \
         'train_data.csv', 'val_data.csv', and 'test_data.csv'."
    );
    println!("  Time: {}", format_duration(elapsed.as_secs()));
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}
