//! Labeled CSV ingestion and split output.
//!
//! Every source file carries at least a `text` and a `label` column;
//! extra columns are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::TextCleaner;
use crate::error::{PrepError, Result};

/// Fixed concatenation order of the per-language sources.
pub const SOURCE_ORDER: [&str; 4] = ["marathi", "bangla", "english", "hindi"];

/// A cleaned, labeled text sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub text: String,
    pub label: i64,
}

/// Raw CSV row as read from disk. Empty fields deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    text: Option<String>,
    label: Option<String>,
}

/// Per-source row accounting.
#[derive(Debug, Clone)]
pub struct SourceStats {
    pub path: PathBuf,
    pub rows_read: u64,
    pub rows_kept: u64,
    pub rows_dropped_missing: u64,
    pub rows_dropped_empty: u64,
}

impl SourceStats {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            rows_read: 0,
            rows_kept: 0,
            rows_dropped_missing: 0,
            rows_dropped_empty: 0,
        }
    }
}

/// Labels arrive as "1" or, when a source was exported through a float
/// dtype, as "1.0". Both coerce to integer; floats truncate toward zero.
fn parse_label(raw: &str) -> Option<i64> {
    let t = raw.trim();
    if let Ok(v) = t.parse::<i64>() {
        return Some(v);
    }
    t.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64)
}

/// Reads one labeled CSV source, dropping rows with missing fields and
/// rows whose text cleans down to nothing. Row order is preserved.
pub fn load_labeled_csv(path: &Path, cleaner: &TextCleaner) -> Result<(Vec<Sample>, SourceStats)> {
    if !path.exists() {
        return Err(PrepError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in ["text", "label"] {
        if !headers.iter().any(|h| h == required) {
            return Err(PrepError::MissingColumn {
                path: path.to_path_buf(),
                column: required.to_string(),
            });
        }
    }

    let mut samples = Vec::new();
    let mut stats = SourceStats::new(path);

    for row in reader.deserialize() {
        let row: RawRow = row?;
        stats.rows_read += 1;

        let (text, raw_label) = match (row.text, row.label) {
            (Some(t), Some(l)) => (t, l),
            _ => {
                stats.rows_dropped_missing += 1;
                continue;
            }
        };

        let label = parse_label(&raw_label).ok_or_else(|| PrepError::InvalidLabel {
            path: path.to_path_buf(),
            row: stats.rows_read,
            value: raw_label.clone(),
        })?;

        let cleaned = cleaner.clean(&text);
        if cleaned.is_empty() {
            stats.rows_dropped_empty += 1;
            continue;
        }

        stats.rows_kept += 1;
        samples.push(Sample {
            text: cleaned,
            label,
        });
    }

    Ok((samples, stats))
}

/// Writes one split as `text,label` CSV, UTF-8, no index column.
/// The header row is written even when the split is empty.
pub fn write_split_csv(path: &Path, samples: &[Sample]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["text", "label"])?;
    for sample in samples {
        writer.write_record([sample.text.as_str(), &sample.label.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
