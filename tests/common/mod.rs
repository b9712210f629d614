//! Common test utilities and helpers
//!
//! Shared helpers for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a labeled CSV file with a `text,label` header under `dir`.
pub fn write_labeled_csv(dir: &Path, name: &str, rows: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create csv");
    writeln!(file, "text,label").expect("Failed to write header");
    for (text, label) in rows {
        writeln!(file, "\"{}\",{}", text, label).expect("Failed to write row");
    }
    path
}

/// Creates the four conventional source files, each with 20 rows split
/// evenly between labels 0 and 1. Some rows carry URL/handle noise so
/// the cleaner has work to do.
pub fn write_default_sources(dir: &Path) {
    for source in ["marathi", "bangla", "english", "hindi"] {
        let mut rows: Vec<(String, String)> = Vec::new();
        for i in 0..10 {
            rows.push((
                format!("plain {} sentence number {} with words", source, i),
                "0".to_string(),
            ));
            rows.push((
                format!("@someone angry {} post {} http://sp.am/{} !!!", source, i, i),
                "1".to_string(),
            ));
        }
        let borrowed: Vec<(&str, &str)> = rows
            .iter()
            .map(|(t, l)| (t.as_str(), l.as_str()))
            .collect();
        write_labeled_csv(dir, &format!("{}.csv", source), &borrowed);
    }
}

/// Reads a split CSV back as (text, label) pairs.
pub fn read_split(path: &Path) -> Vec<(String, String)> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open split csv");
    assert_eq!(
        reader.headers().expect("Failed to read headers").iter().collect::<Vec<_>>(),
        vec!["text", "label"]
    );
    reader
        .records()
        .map(|r| {
            let r = r.expect("Failed to read record");
            (r[0].to_string(), r[1].to_string())
        })
        .collect()
}
