//! Pattern enrichment.
//!
//! Scans a record's text surfaces for persistent identifiers, URLs and
//! contact addresses, aligns the text against the controlled vocabulary,
//! and backfills the identifier and landing page when they can be derived
//! from a detected DOI. Enrichment never fails: empty surfaces yield empty
//! result lists.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{CONTROLLED_VOCAB, DOI_RESOLVER};
use crate::record::Record;

static DOI_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"10\.\d{4,9}/[-._;()/:A-Za-z0-9]+").unwrap());
static HANDLE_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:hdl:)?\d{4,5}/[A-Za-z0-9.\-_/]+").unwrap());
static URL_RX: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());
static EMAIL_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Enriches canonical records with pattern-derived facts and vocabulary
/// tags.
#[derive(Debug, Clone, Copy)]
pub struct Enricher {
    vocab: &'static [(&'static str, &'static [&'static str])],
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new(CONTROLLED_VOCAB)
    }
}

impl Enricher {
    #[inline]
    #[must_use]
    pub fn new(vocab: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { vocab }
    }

    /// Merge pattern-derived facts into the record's enrichment slot.
    ///
    /// The record is mutated in place: canonical fields are only touched by
    /// the identifier/landing-page backfill, and the enrichment lists grow
    /// additively (repeated enrichment never drops or duplicates entries).
    pub fn enrich(&self, rec: &mut Record) {
        let surface = combined_surface(rec);

        let mut dois = find_all(&DOI_RX, &surface);
        if dois.is_empty() {
            dois = find_all(&DOI_RX, &rec.identifier);
        }
        let handles = find_all(&HANDLE_RX, &surface);

        let mut urls = find_all(&URL_RX, &surface);
        urls.extend(find_all(&URL_RX, &rec.landing_page));
        urls.extend(find_all(&URL_RX, &rec.access_url));

        let mut emails = find_all(&EMAIL_RX, &surface);
        for creator in &rec.creators {
            if let Some(email) = creator.email.as_deref().filter(|e| !e.is_empty()) {
                emails.push(email.to_string());
            }
        }

        let lower = surface.to_lowercase();
        let suggested: Vec<String> = self
            .vocab
            .iter()
            .filter(|(canonical, aliases)| {
                lower.contains(canonical) || aliases.iter().any(|alias| lower.contains(alias))
            })
            .map(|(canonical, _)| canonical.to_string())
            .collect();

        if rec.identifier.is_empty() {
            if let Some(first) = dois.first() {
                rec.identifier = first.clone();
            }
        }
        if rec.landing_page.is_empty() && rec.identifier.starts_with("10.") {
            rec.landing_page = format!("{}{}", DOI_RESOLVER, rec.identifier);
        }

        extend_unique(&mut rec.enrichment.detected_dois, dois);
        extend_unique(&mut rec.enrichment.detected_handles, handles);
        extend_unique(&mut rec.enrichment.detected_urls, urls);
        extend_unique(&mut rec.enrichment.detected_emails, emails);

        let mut subjects: BTreeSet<String> =
            rec.enrichment.suggested_keywords.iter().cloned().collect();
        subjects.extend(suggested);
        rec.enrichment.suggested_keywords = subjects.iter().cloned().collect();

        let mut union: BTreeSet<String> = rec.keywords.iter().cloned().collect();
        union.extend(subjects.iter().cloned());
        rec.enrichment.keyword_union = union.into_iter().collect();

        // Same value as suggested_keywords, kept as a separately named view.
        rec.enrichment.canonical_subjects = subjects.into_iter().collect();
    }
}

/// Combined scan surface: title, description, and the joined keywords.
fn combined_surface(rec: &Record) -> String {
    let mut surface =
        String::with_capacity(rec.title.len() + rec.description.len() + 32);
    surface.push_str(&rec.title);
    surface.push(' ');
    surface.push_str(&rec.description);
    surface.push(' ');
    surface.push_str(&rec.keywords.join(" "));
    surface
}

fn find_all(rx: &Regex, text: &str) -> Vec<String> {
    rx.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Append items not already present, preserving first-occurrence order.
fn extend_unique(dst: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !dst.contains(&item) {
            dst.push(item);
        }
    }
}
