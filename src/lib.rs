//! # fairmeta
//!
//! A FAIR metadata quality pipeline for dataset descriptions.
//!
//! fairmeta ingests heterogeneous dataset-description records, converts
//! them to a canonical schema, augments them with pattern-derived facts and
//! controlled-vocabulary tags, scores them against the four-dimension FAIR
//! rubric, and answers content-based similarity queries over a corpus of
//! such records.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install fairmeta
//! fairmeta --http-port 8000 --reports-dir ./reports
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use fairmeta::prelude::*;
//! use serde_json::json;
//!
//! // Normalize → enrich → score one raw record
//! let raw = json!({
//!     "Title": "Climate Data",
//!     "identifier": "10.1234/abcd",
//!     "keywords": "climate, temperature, stations",
//! });
//! let mut record = Normalizer::default().normalize(&raw);
//! Enricher::default().enrich(&mut record);
//! let result = Scorer::default().score(&record);
//! assert!(result.checks.findable.pid);
//!
//! // Build a recommendation index over a corpus
//! let corpus = vec![record];
//! let mut recommender = Recommender::new(&corpus);
//! recommender.fit();
//! let matches = recommender.recommend_for_query("climate", 5);
//! assert_eq!(matches.len(), 1);
//! ```
//!
//! ## Crate Structure
//!
//! fairmeta is composed of several crates:
//!
//! - [`fairmeta-core`](https://docs.rs/fairmeta-core) - Canonical record model, normalizer, enricher, FAIR scorer
//! - [`fairmeta-recommend`](https://docs.rs/fairmeta-recommend) - TF-IDF vectorization and top-k cosine recommendation
//! - [`fairmeta-report`](https://docs.rs/fairmeta-report) - JSON/Markdown report sink with remediation suggestions
//! - [`fairmeta-harvest`](https://docs.rs/fairmeta-harvest) - Zenodo and CKAN catalog adapters
//! - [`fairmeta-api`](https://docs.rs/fairmeta-api) - REST API
//!
//! ## Degradation over failure
//!
//! The core pipeline is total: malformed input resolves to documented
//! defaults, scoring always produces a result, and recommendation queries
//! in degraded environments return empty results instead of errors. Only
//! the harvesters (network collaborators) surface hard errors.

// Re-export core types
pub use fairmeta_core::{
    AliasTable, Creator, Enricher, Enrichment, NlpProvider, NoopProvider, Normalizer, Record,
    ScoreResult, Scorer, Scores,
};

// Re-export recommendation
pub use fairmeta_recommend::{NoopVectorizer, Recommender, TextVectorizer, TfidfVectorizer};

// Re-export report sink
pub use fairmeta_report::{load_all_scores, remediation, ReportWriter};

// Re-export harvesters under a namespaced module: unlike the core pipeline
// they talk to the network and surface hard errors.
pub use fairmeta_harvest as harvest;

// Re-export API
pub use fairmeta_api::{AppContext, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AppContext, Creator, Enricher, Enrichment, Normalizer, Recommender, Record, ReportWriter,
        RestApi, ScoreResult, Scorer, Scores, TfidfVectorizer,
    };
}

/// Rubric and vocabulary configuration tables
pub mod config {
    pub use fairmeta_core::config::{
        CONTROLLED_VOCAB, DOI_RESOLVER, MACHINE_READABLE_FORMATS, MIN_KEYWORDS,
        MIN_PROVENANCE_LEN, OPEN_LICENSES,
    };
}
