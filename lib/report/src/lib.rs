//! # fairmeta Report
//!
//! Report sink for the fairmeta pipeline. Given a scored record it persists:
//!
//! - `json/{record_id}.json` - the enriched record plus its score result
//! - `md/{record_id}.md` - a human-readable summary with a deterministic
//!   remediation list derived from the failed rubric checks
//!
//! Writes are atomic (tmp file + rename) so concurrent readers never see a
//! partial report. [`load_all_scores`] aggregates the score sections of all
//! previously written reports for corpus-level statistics.

pub mod stats;
pub mod writer;

pub use stats::{load_all_scores, ScoreSummary};
pub use writer::{remediation, Error, ReportWriter, Result};
