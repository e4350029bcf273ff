//! FAIR rubric scoring.
//!
//! A fixed set of named boolean checks across the four FAIR dimensions.
//! Scoring is a total function of the enriched record: every record
//! produces a result, and the predicate set is enumerable configuration,
//! never discovered at runtime.

use serde::{Deserialize, Serialize};

use crate::config::{
    MACHINE_READABLE_FORMATS, MIN_KEYWORDS, MIN_PROVENANCE_LEN, OPEN_LICENSES,
};
use crate::record::Record;

/// Per-dimension scores in [0, 1], rounded to 3 decimals, plus their mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "F")]
    pub findable: f64,
    #[serde(rename = "A")]
    pub accessible: f64,
    #[serde(rename = "I")]
    pub interoperable: f64,
    #[serde(rename = "R")]
    pub reusable: f64,
    pub total: f64,
}

/// Outcome of every rubric predicate, grouped by dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checks {
    #[serde(rename = "F")]
    pub findable: FindableChecks,
    #[serde(rename = "A")]
    pub accessible: AccessibleChecks,
    #[serde(rename = "I")]
    pub interoperable: InteroperableChecks,
    #[serde(rename = "R")]
    pub reusable: ReusableChecks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindableChecks {
    /// Identifier starts with `10.`, `hdl:` or `http`.
    pub pid: bool,
    /// At least [`MIN_KEYWORDS`] keywords (union with suggested subjects).
    pub keywords: bool,
    pub landing_page: bool,
    /// Constant true: the rubric reserves this slot for a future check.
    pub machine_readable_metadata: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibleChecks {
    pub access_url: bool,
    pub license_present_and_open: bool,
    /// At least one detected contact email.
    pub contact_point: bool,
    pub format_open: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteroperableChecks {
    pub uses_identifiers: bool,
    pub machine_readable_format: bool,
    /// At least one canonical subject was suggested.
    pub vocab_alignment_hint: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReusableChecks {
    pub clear_license: bool,
    /// Trimmed provenance text of at least [`MIN_PROVENANCE_LEN`] characters.
    pub provenance: bool,
    pub versioning: bool,
    /// PID, title and publisher all present.
    pub citation_possible: bool,
}

impl FindableChecks {
    fn fraction(&self) -> f64 {
        fraction(&[
            self.pid,
            self.keywords,
            self.landing_page,
            self.machine_readable_metadata,
        ])
    }
}

impl AccessibleChecks {
    fn fraction(&self) -> f64 {
        fraction(&[
            self.access_url,
            self.license_present_and_open,
            self.contact_point,
            self.format_open,
        ])
    }
}

impl InteroperableChecks {
    fn fraction(&self) -> f64 {
        fraction(&[
            self.uses_identifiers,
            self.machine_readable_format,
            self.vocab_alignment_hint,
        ])
    }
}

impl ReusableChecks {
    fn fraction(&self) -> f64 {
        fraction(&[
            self.clear_license,
            self.provenance,
            self.versioning,
            self.citation_possible,
        ])
    }
}

/// Result of scoring one record. Derived, read-only, never written back
/// into the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scores: Scores,
    pub checks: Checks,
}

impl ScoreResult {
    /// True when every rubric predicate passed.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.scores.total == 1.0
    }
}

/// Evaluates the fixed FAIR rubric over enriched records.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    open_licenses: &'static [&'static str],
    machine_readable_formats: &'static [&'static str],
    min_keywords: usize,
    min_provenance_len: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            open_licenses: OPEN_LICENSES,
            machine_readable_formats: MACHINE_READABLE_FORMATS,
            min_keywords: MIN_KEYWORDS,
            min_provenance_len: MIN_PROVENANCE_LEN,
        }
    }
}

impl Scorer {
    #[must_use]
    pub fn new(
        open_licenses: &'static [&'static str],
        machine_readable_formats: &'static [&'static str],
        min_keywords: usize,
        min_provenance_len: usize,
    ) -> Self {
        Self {
            open_licenses,
            machine_readable_formats,
            min_keywords,
            min_provenance_len,
        }
    }

    /// Score a record against the rubric. Total: never fails.
    #[must_use]
    pub fn score(&self, rec: &Record) -> ScoreResult {
        let pid = has_pid(rec);
        let open_license = self.has_open_license(rec);
        let format_open = self.is_machine_readable(rec);

        let findable = FindableChecks {
            pid,
            keywords: self.has_keywords(rec),
            landing_page: !rec.landing_page.is_empty(),
            machine_readable_metadata: true,
        };
        let accessible = AccessibleChecks {
            access_url: !rec.access_url.is_empty(),
            license_present_and_open: open_license,
            contact_point: !rec.enrichment.detected_emails.is_empty(),
            format_open,
        };
        let interoperable = InteroperableChecks {
            uses_identifiers: pid,
            machine_readable_format: format_open,
            vocab_alignment_hint: !rec.enrichment.canonical_subjects.is_empty(),
        };
        let reusable = ReusableChecks {
            clear_license: open_license,
            provenance: rec.provenance.trim().chars().count() >= self.min_provenance_len,
            versioning: !rec.version.is_empty(),
            citation_possible: pid && !rec.title.is_empty() && !rec.publisher.is_empty(),
        };

        let f = round3(findable.fraction());
        let a = round3(accessible.fraction());
        let i = round3(interoperable.fraction());
        let r = round3(reusable.fraction());
        let scores = Scores {
            findable: f,
            accessible: a,
            interoperable: i,
            reusable: r,
            total: round3((f + a + i + r) / 4.0),
        };

        ScoreResult {
            scores,
            checks: Checks {
                findable,
                accessible,
                interoperable,
                reusable,
            },
        }
    }

    fn has_keywords(&self, rec: &Record) -> bool {
        let count = if rec.enrichment.keyword_union.is_empty() {
            rec.keywords.len()
        } else {
            rec.enrichment.keyword_union.len()
        };
        count >= self.min_keywords
    }

    fn has_open_license(&self, rec: &Record) -> bool {
        let license = rec.license.to_uppercase();
        self.open_licenses.iter().any(|open| license.contains(open))
    }

    fn is_machine_readable(&self, rec: &Record) -> bool {
        let format = rec.format.to_uppercase();
        self.machine_readable_formats.contains(&format.as_str())
    }
}

fn has_pid(rec: &Record) -> bool {
    let ident = rec.identifier.to_lowercase();
    ident.starts_with("10.") || ident.starts_with("hdl:") || ident.starts_with("http")
}

fn fraction(outcomes: &[bool]) -> f64 {
    let passed = outcomes.iter().filter(|&&b| b).count();
    passed as f64 / outcomes.len() as f64
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::Enricher;
    use crate::normalize::Normalizer;
    use serde_json::json;

    fn score_raw(raw: serde_json::Value) -> ScoreResult {
        let mut rec = Normalizer::default().normalize(&raw);
        Enricher::default().enrich(&mut rec);
        Scorer::default().score(&rec)
    }

    #[test]
    fn empty_record_scores_only_the_constant_check() {
        let result = score_raw(json!({}));
        assert!(result.checks.findable.machine_readable_metadata);
        assert!(!result.checks.findable.pid);
        assert_eq!(result.scores.findable, 0.25);
        assert_eq!(result.scores.accessible, 0.0);
        assert_eq!(result.scores.interoperable, 0.0);
        assert_eq!(result.scores.reusable, 0.0);
        assert_eq!(result.scores.total, 0.063);
    }

    #[test]
    fn doi_identifier_passes_pid_checks() {
        let result = score_raw(json!({
            "title": "Climate Data",
            "identifier": "10.1234/abcd",
        }));
        assert!(result.checks.findable.pid);
        assert!(result.checks.interoperable.uses_identifiers);
        // Landing page was backfilled from the DOI.
        assert!(result.checks.findable.landing_page);
    }

    #[test]
    fn open_license_and_format_pass_accessible_checks() {
        let result = score_raw(json!({
            "license": "CC-BY-4.0",
            "format": "csv",
        }));
        assert!(result.checks.accessible.license_present_and_open);
        assert!(result.checks.accessible.format_open);
        assert!(result.checks.interoperable.machine_readable_format);
        assert!(result.checks.reusable.clear_license);
    }

    #[test]
    fn license_match_is_substring_of_uppercased() {
        let result = score_raw(json!({"license": "Creative Commons cc-by-4.0"}));
        assert!(result.checks.accessible.license_present_and_open);

        let result = score_raw(json!({"license": "proprietary"}));
        assert!(!result.checks.accessible.license_present_and_open);
    }

    #[test]
    fn provenance_threshold_is_thirty_characters() {
        let short = score_raw(json!({"provenance": "short note"}));
        assert!(!short.checks.reusable.provenance);

        let long = score_raw(json!({
            "provenance": "Collected hourly from 40 automated stations during 2023."
        }));
        assert!(long.checks.reusable.provenance);
    }

    #[test]
    fn keyword_check_counts_union_with_suggested_subjects() {
        // Two explicit keywords plus one suggested subject reach the
        // three-keyword threshold through the union.
        let result = score_raw(json!({
            "keywords": "zebra, quagga",
            "title": "Weather dataset",
        }));
        assert!(result.checks.findable.keywords);

        let result = score_raw(json!({"keywords": "one, two"}));
        assert!(!result.checks.findable.keywords);
    }

    #[test]
    fn citation_needs_pid_title_and_publisher() {
        let result = score_raw(json!({
            "identifier": "10.1/x",
            "title": "T",
            "publisher": "P",
        }));
        assert!(result.checks.reusable.citation_possible);

        let result = score_raw(json!({"identifier": "10.1/x", "title": "T"}));
        assert!(!result.checks.reusable.citation_possible);
    }

    #[test]
    fn scores_stay_in_unit_interval_and_total_is_mean() {
        let result = score_raw(json!({
            "title": "Weather dataset",
            "identifier": "10.1234/abcd",
            "keywords": "climate, temperature, stations",
            "license": "CC0",
            "format": "json",
            "publisher": "Example Org",
            "version": "1.2",
        }));
        let s = result.scores;
        for value in [s.findable, s.accessible, s.interoperable, s.reusable, s.total] {
            assert!((0.0..=1.0).contains(&value));
        }
        let mean = (s.findable + s.accessible + s.interoperable + s.reusable) / 4.0;
        assert!((s.total - mean).abs() < 0.001);
    }

    #[test]
    fn interoperable_score_rounds_to_three_decimals() {
        // Only vocab alignment passes: 1/3 rounds to 0.333.
        let result = score_raw(json!({"title": "Weather dataset"}));
        assert!(result.checks.interoperable.vocab_alignment_hint);
        assert!(!result.checks.interoperable.uses_identifiers);
        assert_eq!(result.scores.interoperable, 0.333);
    }

    #[test]
    fn result_serializes_with_dimension_letters() {
        let result = score_raw(json!({"identifier": "10.1/x"}));
        let value = serde_json::to_value(result).unwrap();
        assert!(value["scores"]["F"].is_number());
        assert_eq!(value["checks"]["F"]["pid"], json!(true));
        assert_eq!(value["checks"]["A"]["contact_point"], json!(false));
    }
}
