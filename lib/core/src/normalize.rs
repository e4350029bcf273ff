//! Record normalization.
//!
//! Maps arbitrary source key names onto the canonical [`Record`] schema via
//! an explicit ordered alias table, and assigns a stable record identity.
//! Normalization is total: malformed or missing fields resolve to the field
//! defaults, never to an error.

use ahash::AHashMap;
use serde_json::Value;
use uuid::Uuid;

use crate::record::{Creator, Record};

/// Candidate source keys per canonical field, tried in order.
///
/// Keys match case-insensitively against the input mapping; the first
/// candidate with a non-null, non-empty value wins.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    /// Identity-bearing keys used for content-addressed `record_id`.
    pub identity: &'static [&'static str],
    pub title: &'static [&'static str],
    pub description: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub creators: &'static [&'static str],
    pub landing_page: &'static [&'static str],
    pub access_url: &'static [&'static str],
    pub identifier: &'static [&'static str],
    pub license: &'static [&'static str],
    pub format: &'static [&'static str],
    pub provenance: &'static [&'static str],
    pub version: &'static [&'static str],
    pub publisher: &'static [&'static str],
    pub funder: &'static [&'static str],
    pub issued: &'static [&'static str],
    pub modified: &'static [&'static str],
}

/// The alias table understood by upstream catalog adapters.
pub const DEFAULT_ALIASES: AliasTable = AliasTable {
    identity: &["id", "identifier", "doi", "handle", "pid", "url"],
    title: &["title"],
    description: &["description", "abstract"],
    keywords: &["keywords", "tags"],
    creators: &["creators", "authors", "contributors"],
    landing_page: &["landing_page", "landing", "homepage", "url"],
    access_url: &["access_url", "download_url", "data_url", "contentUrl"],
    identifier: &["identifier", "doi", "handle", "pid", "url"],
    license: &["license", "licence", "rights"],
    format: &["format", "file_format", "mediaType"],
    provenance: &["provenance", "methods", "lineage"],
    version: &["version", "version_info", "ver"],
    publisher: &["publisher", "organization", "organisation"],
    funder: &["funder", "funder_name", "funding"],
    issued: &["issued", "publication_date", "datePublished"],
    modified: &["modified", "dateModified", "updated"],
};

/// Normalizes raw source mappings into canonical records.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    aliases: AliasTable,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_ALIASES)
    }
}

impl Normalizer {
    #[inline]
    #[must_use]
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    #[inline]
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Convert an arbitrary string-keyed mapping into a canonical [`Record`].
    ///
    /// Non-object input yields the all-default record (with a fresh random
    /// identity). Never fails.
    #[must_use]
    pub fn normalize(&self, raw: &Value) -> Record {
        let lookup = KeyLookup::build(raw);
        let a = &self.aliases;

        Record {
            record_id: self.assign_identity(&lookup),
            title: lookup.text(a.title),
            description: lookup.text(a.description),
            keywords: keywords_from(lookup.first(a.keywords)),
            creators: creators_from(lookup.first(a.creators)),
            landing_page: lookup.text(a.landing_page),
            access_url: lookup.text(a.access_url),
            identifier: lookup.text(a.identifier),
            license: lookup.text(a.license),
            format: lookup.text(a.format).to_uppercase(),
            provenance: lookup.text(a.provenance),
            version: lookup.text(a.version),
            publisher: lookup.text(a.publisher),
            funder: lookup.text(a.funder),
            issued: lookup.text(a.issued),
            modified: lookup.text(a.modified),
            enrichment: Default::default(),
            advanced: None,
        }
    }

    /// Content-addressed identity when an identity-bearing field is present,
    /// fresh random identity otherwise.
    fn assign_identity(&self, lookup: &KeyLookup<'_>) -> String {
        match lookup.first(self.aliases.identity) {
            Some(value) => {
                let seed = value_to_text(value);
                Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.as_bytes()).to_string()
            }
            None => Uuid::new_v4().to_string(),
        }
    }
}

/// Case-insensitive key index over one input mapping, built once per call.
///
/// Keys are lowered on insertion; when two source keys collide on the same
/// lowercase form, the first non-empty value wins.
struct KeyLookup<'a> {
    entries: AHashMap<String, &'a Value>,
}

impl<'a> KeyLookup<'a> {
    fn build(raw: &'a Value) -> Self {
        let mut entries: AHashMap<String, &'a Value> = AHashMap::new();
        if let Some(map) = raw.as_object() {
            for (key, value) in map {
                entries
                    .entry(key.to_lowercase())
                    .and_modify(|existing| {
                        if value_is_empty(existing) && !value_is_empty(value) {
                            *existing = value;
                        }
                    })
                    .or_insert(value);
            }
        }
        Self { entries }
    }

    /// First candidate key whose value is non-null and non-empty.
    fn first(&self, candidates: &[&str]) -> Option<&'a Value> {
        candidates.iter().find_map(|key| {
            self.entries
                .get(&key.to_lowercase())
                .copied()
                .filter(|v| !value_is_empty(v))
        })
    }

    /// Resolve to a string field, defaulting to empty.
    fn text(&self, candidates: &[&str]) -> String {
        self.first(candidates).map(value_to_text).unwrap_or_default()
    }
}

fn value_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Stringify a scalar the way loosely-typed sources expect: strings pass
/// through verbatim, numbers and booleans print their literal form, and
/// containers fall back to their JSON text.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerce a keywords value: sequences pass through, strings split on commas,
/// anything else yields an empty sequence.
fn keywords_from(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => split_commas(s),
        _ => Vec::new(),
    }
}

/// Coerce a creators value, polymorphic over the shapes sources produce:
/// structured maps, bare-name sequences, comma-separated strings, or a
/// single scalar.
fn creators_from(value: Option<&Value>) -> Vec<Creator> {
    match value {
        Some(Value::Array(items)) => items.iter().map(creator_from_item).collect(),
        Some(Value::String(s)) => split_commas(s).into_iter().map(Creator::named).collect(),
        Some(other) => vec![Creator::named(value_to_text(other))],
        None => Vec::new(),
    }
}

fn creator_from_item(item: &Value) -> Creator {
    match item {
        Value::Object(map) => {
            let name = ["name", "familyName", "givenName"]
                .iter()
                .find_map(|k| {
                    map.get(*k)
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                })
                .unwrap_or_default()
                .to_string();
            Creator {
                name,
                orcid: map.get("orcid").and_then(Value::as_str).map(String::from),
                email: map.get("email").and_then(Value::as_str).map(String::from),
            }
        }
        other => Creator::named(value_to_text(other).trim().to_string()),
    }
}

fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_keys_case_insensitively() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({
            "Title": "Ocean Currents",
            "ABSTRACT": "Drift measurements.",
            "License": "CC-BY-4.0",
        }));
        assert_eq!(rec.title, "Ocean Currents");
        assert_eq!(rec.description, "Drift measurements.");
        assert_eq!(rec.license, "CC-BY-4.0");
    }

    #[test]
    fn prefers_earlier_alias_with_value() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({
            "homepage": "https://example.org/ds",
            "landing_page": "https://example.org/landing",
        }));
        assert_eq!(rec.landing_page, "https://example.org/landing");
    }

    #[test]
    fn skips_empty_values_when_resolving() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({
            "description": "",
            "abstract": "The real description",
        }));
        assert_eq!(rec.description, "The real description");
    }

    #[test]
    fn identity_is_stable_for_same_identifier() {
        let normalizer = Normalizer::default();
        let a = normalizer.normalize(&json!({"doi": "10.1234/abcd", "title": "A"}));
        let b = normalizer.normalize(&json!({"identifier": "10.1234/abcd", "title": "B"}));
        assert_eq!(a.record_id, b.record_id);

        let c = normalizer.normalize(&json!({"doi": "10.9999/zzzz"}));
        assert_ne!(a.record_id, c.record_id);
    }

    #[test]
    fn identity_is_random_without_identifier() {
        let normalizer = Normalizer::default();
        let a = normalizer.normalize(&json!({"title": "No identifier"}));
        let b = normalizer.normalize(&json!({"title": "No identifier"}));
        assert_ne!(a.record_id, b.record_id);
        assert!(!a.record_id.is_empty());
    }

    #[test]
    fn keyword_string_splits_on_commas() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({"keywords": "climate, ocean , , weather"}));
        assert_eq!(rec.keywords, vec!["climate", "ocean", "weather"]);
    }

    #[test]
    fn keyword_sequence_passes_through() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({"tags": ["a", "b", 3]}));
        assert_eq!(rec.keywords, vec!["a", "b", "3"]);
    }

    #[test]
    fn keyword_other_types_yield_empty() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({"keywords": {"nested": true}}));
        assert!(rec.keywords.is_empty());
    }

    #[test]
    fn creators_from_structured_maps() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({
            "creators": [
                {"name": "Ada Lovelace", "orcid": "0000-0001", "email": "ada@example.org"},
                {"familyName": "Babbage"},
            ]
        }));
        assert_eq!(rec.creators.len(), 2);
        assert_eq!(rec.creators[0].name, "Ada Lovelace");
        assert_eq!(rec.creators[0].orcid.as_deref(), Some("0000-0001"));
        assert_eq!(rec.creators[0].email.as_deref(), Some("ada@example.org"));
        assert_eq!(rec.creators[1].name, "Babbage");
        assert!(rec.creators[1].email.is_none());
    }

    #[test]
    fn creators_from_string_and_scalar() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({"authors": "A. One, B. Two"}));
        assert_eq!(rec.creators.len(), 2);
        assert_eq!(rec.creators[1].name, "B. Two");

        let rec = normalizer.normalize(&json!({"authors": 42}));
        assert_eq!(rec.creators.len(), 1);
        assert_eq!(rec.creators[0].name, "42");
    }

    #[test]
    fn format_is_uppercased() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!({"format": "csv"}));
        assert_eq!(rec.format, "CSV");
    }

    #[test]
    fn non_object_input_yields_default_record() {
        let normalizer = Normalizer::default();
        let rec = normalizer.normalize(&json!("not a mapping"));
        assert_eq!(rec.title, "");
        assert!(rec.keywords.is_empty());
        assert!(!rec.record_id.is_empty());
    }

    #[test]
    fn normalization_is_idempotent_modulo_identity() {
        let normalizer = Normalizer::default();
        let first = normalizer.normalize(&json!({
            "Title": "Climate Data",
            "identifier": "10.1234/abcd",
            "keywords": "climate, temperature",
            "creators": [{"name": "Ada Lovelace"}],
            "FORMAT": "csv",
        }));
        let second = normalizer.normalize(&serde_json::to_value(&first).unwrap());
        assert_eq!(first, second);
    }
}
