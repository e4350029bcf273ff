use serde::{Deserialize, Serialize};

/// A dataset author, maintainer or contributor.
///
/// Only `name` is guaranteed; `orcid` and `email` are carried through when
/// the source supplies them and omitted from serialized output otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Creator {
    /// Create a creator from a bare name.
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            orcid: None,
            email: None,
        }
    }
}

/// Canonical dataset-description record.
///
/// Every field is always present: string fields default to empty, sequence
/// fields to empty sequences. The canonical fields are written once by the
/// normalizer; only the [`Enrichment`] slot is mutated afterwards, and only
/// additively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Stable identity. Content-addressed (UUIDv5 over the source
    /// identifier) whenever an identity-bearing field is present, random
    /// UUIDv4 otherwise.
    pub record_id: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub creators: Vec<Creator>,
    pub landing_page: String,
    pub access_url: String,
    pub identifier: String,
    pub license: String,
    /// Uppercased file/media format token, e.g. `CSV`.
    pub format: String,
    pub provenance: String,
    pub version: String,
    pub publisher: String,
    pub funder: String,
    pub issued: String,
    pub modified: String,
    /// Pattern-derived facts and vocabulary tags. Merged in place by the
    /// enricher, never replaced wholesale.
    pub enrichment: Enrichment,
    /// Deep-NLP facts supplied by an external provider, when one ran.
    #[serde(
        rename = "advanced_enrichment",
        skip_serializing_if = "Option::is_none"
    )]
    pub advanced: Option<AdvancedEnrichment>,
}

/// Pattern-derived facts attached to a record.
///
/// The `detected_*` lists are de-duplicated preserving first-occurrence
/// order. `suggested_keywords`, `keyword_union` and `canonical_subjects`
/// are sorted sets; `canonical_subjects` intentionally duplicates
/// `suggested_keywords` as a separately named view for downstream
/// consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enrichment {
    pub detected_dois: Vec<String>,
    pub detected_handles: Vec<String>,
    pub detected_urls: Vec<String>,
    pub detected_emails: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub keyword_union: Vec<String>,
    pub canonical_subjects: Vec<String>,
}

impl Enrichment {
    /// True when no fact of any kind has been attached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detected_dois.is_empty()
            && self.detected_handles.is_empty()
            && self.detected_urls.is_empty()
            && self.detected_emails.is_empty()
            && self.suggested_keywords.is_empty()
            && self.keyword_union.is_empty()
            && self.canonical_subjects.is_empty()
    }
}

/// Deep-NLP enrichment produced by an external [`crate::nlp::NlpProvider`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedEnrichment {
    /// Sentiment polarity in [-1, 1].
    pub sentiment: f64,
    pub entities: Vec<NamedEntity>,
    /// Topic labels; joined into the recommender's text view.
    pub topics: Vec<String>,
}

impl AdvancedEnrichment {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentiment == 0.0 && self.entities.is_empty() && self.topics.is_empty()
    }
}

/// A named entity recognized in record text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: String,
}
