//! # fairmeta Harvest
//!
//! Catalog adapters that pull dataset descriptions from third-party
//! registries and map them into the canonical record schema. Adapters
//! supply an arbitrary string-keyed mapping and rely on the normalizer's
//! alias resolution; they never pre-normalize key casing themselves.
//!
//! Unlike the core pipeline, harvesting talks to the network and is the one
//! place where hard errors propagate to the caller.

use std::time::Duration;

use thiserror::Error;

pub mod ckan;
pub mod zenodo;

pub use ckan::fetch_dataset;
pub use zenodo::{fetch_by_doi, fetch_by_record_id, ZENODO_API};

/// Upstream-collaborator faults surfaced by the harvesters.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Lookup(String),
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}
