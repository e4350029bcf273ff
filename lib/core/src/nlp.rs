//! Seam for optional deep-NLP enrichment providers.
//!
//! Named-entity recognition, sentiment and topic modelling are supplied by
//! an external provider; the pipeline merges the provider's facts into the
//! record but implements none of them. The capability is resolved once at
//! construction time, with [`NoopProvider`] as the documented default, so
//! the hot path never probes for availability.

use crate::record::{AdvancedEnrichment, Record};

/// Produces deep-NLP facts for a record's textual fields.
pub trait NlpProvider: Send + Sync {
    /// Analyze the record's core text. Implementations degrade to partial
    /// (or empty) results rather than failing.
    fn analyze(&self, title: &str, description: &str) -> AdvancedEnrichment;

    /// Merge this provider's facts into the record's advanced-enrichment
    /// slot, additively: topics and entities are appended (de-duplicated),
    /// sentiment is replaced by the newest analysis.
    fn apply(&self, rec: &mut Record) {
        let facts = self.analyze(&rec.title, &rec.description);
        if facts.is_empty() {
            return;
        }
        let slot = rec.advanced.get_or_insert_with(Default::default);
        slot.sentiment = facts.sentiment;
        for entity in facts.entities {
            if !slot.entities.contains(&entity) {
                slot.entities.push(entity);
            }
        }
        for topic in facts.topics {
            if !slot.topics.contains(&topic) {
                slot.topics.push(topic);
            }
        }
    }
}

/// Default provider for environments without any NLP capability: always
/// returns the empty analysis, so [`NlpProvider::apply`] leaves the record
/// untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProvider;

impl NlpProvider for NoopProvider {
    fn analyze(&self, _title: &str, _description: &str) -> AdvancedEnrichment {
        AdvancedEnrichment::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NamedEntity;

    struct FixedProvider;

    impl NlpProvider for FixedProvider {
        fn analyze(&self, _title: &str, _description: &str) -> AdvancedEnrichment {
            AdvancedEnrichment {
                sentiment: 0.4,
                entities: vec![NamedEntity {
                    text: "Zenodo".to_string(),
                    label: "ORG".to_string(),
                }],
                topics: vec!["Topic 1: climate, stations".to_string()],
            }
        }
    }

    #[test]
    fn noop_provider_leaves_record_untouched() {
        let mut rec = Record::default();
        NoopProvider.apply(&mut rec);
        assert!(rec.advanced.is_none());
    }

    #[test]
    fn provider_facts_merge_without_duplicates() {
        let mut rec = Record::default();
        FixedProvider.apply(&mut rec);
        FixedProvider.apply(&mut rec);
        let advanced = rec.advanced.as_ref().unwrap();
        assert_eq!(advanced.topics.len(), 1);
        assert_eq!(advanced.entities.len(), 1);
        assert_eq!(advanced.sentiment, 0.4);
    }
}
