//! Summary statistics over previously written reports.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fairmeta_core::Scores;

/// One report's score section, for corpus-level summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Report file name the entry was read from.
    pub file: String,
    pub identifier: String,
    pub scores: Scores,
}

/// Load the score sections of every JSON report under `base_dir`.
///
/// Entries are ordered by file name; unreadable or malformed files are
/// skipped rather than failing the whole load.
#[must_use]
pub fn load_all_scores(base_dir: impl AsRef<Path>) -> Vec<ScoreSummary> {
    let json_dir = base_dir.as_ref().join("json");
    let mut paths: Vec<_> = match fs::read_dir(&json_dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(_) => return Vec::new(),
    };
    paths.sort();

    let mut summaries = Vec::new();
    for path in paths {
        let Ok(text) = fs::read_to_string(&path) else {
            continue;
        };
        let Ok(document) = serde_json::from_str::<serde_json::Value>(&text) else {
            continue;
        };
        let Ok(scores) =
            serde_json::from_value::<Scores>(document["result"]["scores"].clone())
        else {
            continue;
        };
        let identifier = document["record"]["identifier"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        summaries.push(ScoreSummary {
            file,
            identifier,
            scores,
        });
    }
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::ReportWriter;
    use fairmeta_core::{Enricher, Normalizer, Scorer};
    use serde_json::json;

    #[test]
    fn loads_written_reports_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(dir.path()).unwrap();
        let pipeline = (Normalizer::default(), Enricher::default(), Scorer::default());

        for identifier in ["10.1/b", "10.1/a"] {
            let mut rec = pipeline.0.normalize(&json!({"identifier": identifier}));
            pipeline.1.enrich(&mut rec);
            let result = pipeline.2.score(&rec);
            writer.write(&rec, &result).unwrap();
        }

        let summaries = load_all_scores(dir.path());
        assert_eq!(summaries.len(), 2);
        let mut files: Vec<_> = summaries.iter().map(|s| s.file.clone()).collect();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
        files.dedup();
        assert_eq!(files.len(), 2);
        for summary in &summaries {
            assert!(summary.identifier.starts_with("10.1/"));
            assert!(summary.scores.findable > 0.0);
        }
    }

    #[test]
    fn skips_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let _writer = ReportWriter::new(dir.path()).unwrap();
        fs::write(dir.path().join("json/broken.json"), "not json").unwrap();
        assert!(load_all_scores(dir.path()).is_empty());
    }

    #[test]
    fn missing_directory_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_all_scores(dir.path().join("nope")).is_empty());
    }
}
