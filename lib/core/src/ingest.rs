//! File ingestion helpers.
//!
//! Reads line-delimited JSON corpora and feeds each mapping through the
//! normalizer. I/O and syntax faults here are the caller's to handle; the
//! normalization itself stays total.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::normalize::Normalizer;
use crate::record::Record;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
}

/// Read a JSONL file: one raw mapping per non-blank line, each normalized
/// into a canonical [`Record`].
pub fn read_jsonl(path: impl AsRef<Path>, normalizer: &Normalizer) -> Result<Vec<Record>, IngestError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let raw: serde_json::Value = serde_json::from_str(&line).map_err(|source| {
            IngestError::Json {
                line: idx + 1,
                source,
            }
        })?;
        records.push(normalizer.normalize(&raw));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_records_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"title": "First", "identifier": "10.1/a"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"Title": "Second"}}"#).unwrap();

        let records = read_jsonl(file.path(), &Normalizer::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[1].title, "Second");
    }

    #[test]
    fn invalid_json_reports_line_number() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"title": "ok"}}"#).unwrap();
        writeln!(file, "not json").unwrap();

        let err = read_jsonl(file.path(), &Normalizer::default()).unwrap_err();
        match err {
            IngestError::Json { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
