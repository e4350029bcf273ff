//! # fairmeta Core
//!
//! Core library for the fairmeta metadata-quality pipeline.
//!
//! This crate provides the canonical data model and the three pure pipeline
//! stages:
//!
//! - [`Record`] - Canonical dataset-description record with defaulted fields
//! - [`Normalizer`] - Alias-table key resolution and stable identity
//! - [`Enricher`] - Regex fact extraction and controlled-vocabulary tagging
//! - [`Scorer`] - Fixed four-dimension FAIR rubric with rounded scores
//!
//! The pipeline degrades rather than fails: malformed input resolves to
//! documented defaults, and every syntactically valid record can be
//! normalized, enriched and scored.
//!
//! ## Example
//!
//! ```rust
//! use fairmeta_core::{Enricher, Normalizer, Scorer};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "Title": "Climate Data",
//!     "identifier": "10.1234/abcd",
//!     "keywords": "climate, temperature, stations",
//! });
//!
//! let mut record = Normalizer::default().normalize(&raw);
//! Enricher::default().enrich(&mut record);
//! let result = Scorer::default().score(&record);
//!
//! assert!(result.checks.findable.pid);
//! assert_eq!(record.landing_page, "https://doi.org/10.1234/abcd");
//! ```

pub mod config;
pub mod enrich;
pub mod ingest;
pub mod nlp;
pub mod normalize;
pub mod record;
pub mod score;

pub use enrich::Enricher;
pub use ingest::{read_jsonl, IngestError};
pub use nlp::{NlpProvider, NoopProvider};
pub use normalize::{AliasTable, Normalizer, DEFAULT_ALIASES};
pub use record::{AdvancedEnrichment, Creator, Enrichment, NamedEntity, Record};
pub use score::{
    AccessibleChecks, Checks, FindableChecks, InteroperableChecks, ReusableChecks, ScoreResult,
    Scorer, Scores,
};
