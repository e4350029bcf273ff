//! FAIR report persistence.
//!
//! For each scored record the writer persists one machine-readable JSON
//! document and one human-readable Markdown summary, both keyed by
//! `record_id`. The Markdown summary carries a deterministic remediation
//! list derived from the failed rubric checks.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use atomicwrites::{AtomicFile, OverwriteBehavior};
use serde::Serialize;
use thiserror::Error;

use fairmeta_core::{Record, ScoreResult};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The JSON report document: the enriched record together with its score.
#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    record: &'a Record,
    result: &'a ScoreResult,
}

/// Writes per-record FAIR reports under a base directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    json_dir: PathBuf,
    md_dir: PathBuf,
}

impl ReportWriter {
    /// Create the writer, ensuring `json/` and `md/` subdirectories exist.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base = base_dir.as_ref();
        let json_dir = base.join("json");
        let md_dir = base.join("md");
        fs::create_dir_all(&json_dir)?;
        fs::create_dir_all(&md_dir)?;
        Ok(Self { json_dir, md_dir })
    }

    #[inline]
    #[must_use]
    pub fn json_dir(&self) -> &Path {
        &self.json_dir
    }

    #[inline]
    #[must_use]
    pub fn md_dir(&self) -> &Path {
        &self.md_dir
    }

    /// Persist both report documents for one scored record. Returns the
    /// paths written, JSON first.
    pub fn write(&self, rec: &Record, result: &ScoreResult) -> Result<(PathBuf, PathBuf)> {
        let rid = if rec.record_id.is_empty() {
            "unknown"
        } else {
            rec.record_id.as_str()
        };

        let json_path = self.json_dir.join(format!("{rid}.json"));
        let document = ReportDocument { record: rec, result };
        let json = serde_json::to_vec_pretty(&document)?;
        write_atomic(&json_path, &json)?;

        let md_path = self.md_dir.join(format!("{rid}.md"));
        let markdown = render_markdown(rec, result);
        write_atomic(&md_path, markdown.as_bytes())?;

        Ok((json_path, md_path))
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = AtomicFile::new(path, OverwriteBehavior::AllowOverwrite);
    file.write(|f| f.write_all(bytes)).map_err(|e| match e {
        atomicwrites::Error::Internal(err) | atomicwrites::Error::User(err) => Error::Io(err),
    })
}

fn render_markdown(rec: &Record, result: &ScoreResult) -> String {
    let title = if rec.title.is_empty() {
        "(no title)"
    } else {
        rec.title.as_str()
    };
    let s = &result.scores;

    let mut md = Vec::new();
    md.push(format!("# FAIR Report — {title}"));
    md.push(String::new());
    md.push(format!("- **Record ID**: `{}`", rec.record_id));
    md.push(format!("- **Identifier**: `{}`", rec.identifier));
    md.push(format!("- **License**: `{}`", rec.license));
    md.push(format!("- **Format**: `{}`", rec.format));
    md.push(String::new());
    md.push("## Scores".to_string());
    md.push(format!(
        "- **F**: {}  |  **A**: {}  |  **I**: {}  |  **R**: {}  |  **Total**: **{}**",
        s.findable, s.accessible, s.interoperable, s.reusable, s.total
    ));
    md.push(String::new());
    md.push("## Recommendations".to_string());
    for suggestion in remediation(result) {
        md.push(format!("- {suggestion}"));
    }
    md.push(String::new());
    md.join("\n")
}

/// Fixed remediation suggestions for the failed checks, in F, A, I, R
/// dimension order. When every check passes, a single acknowledgment line
/// is returned instead.
#[must_use]
pub fn remediation(result: &ScoreResult) -> Vec<&'static str> {
    let checks = &result.checks;
    let mut suggestions = Vec::new();

    if !checks.findable.pid {
        suggestions.push("Add a persistent identifier (DOI, Handle).");
    }
    if !checks.findable.keywords {
        suggestions.push("Provide ≥3 keywords; align to controlled vocabularies.");
    }
    if !checks.findable.landing_page {
        suggestions.push("Add a landing page URL for human access.");
    }
    if !checks.accessible.access_url {
        suggestions.push("Provide a direct access/download URL.");
    }
    if !checks.accessible.license_present_and_open {
        suggestions.push("Add an open license (e.g., CC-BY-4.0 or CC0).");
    }
    if !checks.accessible.contact_point {
        suggestions.push("Add a contact email or maintainer info.");
    }
    if !checks.accessible.format_open {
        suggestions.push("Provide machine-readable/open formats (CSV/JSON/Parquet).");
    }
    if !checks.interoperable.vocab_alignment_hint {
        suggestions.push("Map keywords to common vocabularies (Schema.org/DCAT).");
    }
    if !checks.reusable.provenance {
        suggestions.push("Document provenance/methods sufficiently.");
    }
    if !checks.reusable.versioning {
        suggestions.push("Add a version string and changelog.");
    }
    if !checks.reusable.citation_possible {
        suggestions.push("Include publisher + title + PID for proper citation.");
    }

    if suggestions.is_empty() {
        suggestions.push("Great job! This record meets most FAIR best practices.");
    }
    suggestions
}
