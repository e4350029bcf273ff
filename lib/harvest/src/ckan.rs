//! CKAN harvester.
//!
//! Fetches datasets through a CKAN portal's `package_show` action and maps
//! the package shape into the canonical record schema.

use serde_json::{json, Value};
use tracing::debug;

use fairmeta_core::{Normalizer, Record};

use crate::{client, Error};

/// Map one CKAN package into a canonical record.
///
/// `base_url` is the portal root, used to synthesize the landing page.
#[must_use]
pub fn map_package(base_url: &str, pkg: &Value) -> Record {
    let base = base_url.trim_end_matches('/');

    let keywords: Vec<Value> = pkg["tags"]
        .as_array()
        .map(|tags| {
            tags.iter()
                .filter_map(|t| t["name"].as_str())
                .filter(|name| !name.is_empty())
                .map(|name| Value::String(name.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let resources = pkg["resources"].as_array();
    let access_url = resources
        .and_then(|r| r.first())
        .and_then(|r| r["url"].as_str())
        .unwrap_or_default();
    let format = resources
        .and_then(|r| r.first())
        .and_then(|r| r["format"].as_str())
        .unwrap_or_default()
        .to_uppercase();

    let creator = json!({
        "name": first_text(&[&pkg["author"], &pkg["maintainer"]]),
        "email": first_text(&[&pkg["author_email"], &pkg["maintainer_email"]]),
    });

    let raw = json!({
        "title": pkg["title"],
        "description": pkg["notes"],
        "keywords": keywords,
        "creators": [creator],
        "landing_page": format!("{base}/dataset/{}", pkg["name"].as_str().unwrap_or_default()),
        "access_url": access_url,
        "identifier": pkg["id"],
        "license": first_text(&[&pkg["license_id"], &pkg["license_title"]]),
        "format": format,
        "provenance": pkg["metadata_created"],
        "version": pkg["version"],
        "publisher": pkg["organization"]["title"],
        "funder": "",
        "issued": pkg["metadata_created"],
        "modified": pkg["metadata_modified"],
    });

    Normalizer::default().normalize(&raw)
}

/// Fetch and map one dataset from a CKAN portal.
pub async fn fetch_dataset(base_url: &str, dataset_id: &str) -> Result<Record, Error> {
    let api = format!("{}/api/3/action/package_show", base_url.trim_end_matches('/'));
    debug!(%api, dataset_id, "fetching ckan dataset");
    let response = client()?
        .get(&api)
        .query(&[("id", dataset_id)])
        .send()
        .await?
        .error_for_status()?;
    let body: Value = response.json().await?;
    if !body["success"].as_bool().unwrap_or(false) {
        return Err(Error::Lookup(format!("CKAN lookup failed: {body}")));
    }
    Ok(map_package(base_url, &body["result"]))
}

fn first_text(candidates: &[&Value]) -> String {
    candidates
        .iter()
        .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}
