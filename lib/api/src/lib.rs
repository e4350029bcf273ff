//! # fairmeta API
//!
//! REST surface for the fairmeta pipeline:
//!
//! - `GET /health` - liveness probe
//! - `POST /score` - normalize, enrich and score one raw mapping; persists
//!   JSON/Markdown reports and returns `{record, result}`
//! - `PUT /corpus` - load a batch of raw mappings, build a fresh
//!   recommendation index and swap it in atomically
//! - `POST /recommend/index`, `POST /recommend/query` - top-k similarity
//!   queries against the installed corpus
//! - `GET /harvest/zenodo/{id}`, `GET /harvest/ckan` - pull and normalize
//!   records from external catalogs

pub mod rest;

pub use rest::{AppContext, RestApi};
