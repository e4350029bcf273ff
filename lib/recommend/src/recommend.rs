//! Corpus recommender.
//!
//! Builds a lexical vector index over a finite, ordered corpus of enriched
//! records and answers item-based and free-text similarity queries. The
//! index is immutable once fit; corpus changes require building a fresh
//! recommender and swapping references. Degraded environments (no
//! vectorization capability) and out-of-range queries produce empty
//! results, never errors.

use fairmeta_core::Record;
use tracing::warn;

use crate::tfidf::{SparseVector, TextVectorizer, TfidfVectorizer};

/// Self-similarity sentinel: below every valid cosine score, so the queried
/// item can never survive top-k selection.
pub const SELF_SIMILARITY: f32 = -1.0;

/// Content-based recommender over an ordered record corpus.
///
/// Owns no record state: only the derived text views and, once [`fit`] has
/// run, the vector matrix keyed by corpus position.
///
/// [`fit`]: Recommender::fit
pub struct Recommender {
    texts: Vec<String>,
    vectorizer: Box<dyn TextVectorizer>,
    matrix: Option<Vec<SparseVector>>,
}

impl Recommender {
    /// Build over a corpus with the default TF-IDF vectorizer.
    #[must_use]
    pub fn new(corpus: &[Record]) -> Self {
        Self::with_vectorizer(corpus, Box::new(TfidfVectorizer::default()))
    }

    /// Build over a corpus with an injected vectorization capability.
    #[must_use]
    pub fn with_vectorizer(corpus: &[Record], vectorizer: Box<dyn TextVectorizer>) -> Self {
        Self {
            texts: corpus.iter().map(combined_text).collect(),
            vectorizer,
            matrix: None,
        }
    }

    /// Number of corpus records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// True once the vector index has been built.
    #[inline]
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.matrix.is_some()
    }

    /// Build the vector index. When the vectorization capability is
    /// unavailable this is a no-op and all subsequent queries return empty
    /// results; that is the degradation contract, not a failure.
    pub fn fit(&mut self) {
        match self.vectorizer.fit_transform(&self.texts) {
            Some(matrix) => self.matrix = Some(matrix),
            None => {
                warn!("vectorization unavailable; recommender queries will return empty results");
            }
        }
    }

    /// Top-k most similar corpus items for the record at `idx`.
    ///
    /// The queried index is never part of the result. Out-of-range indices
    /// and unfitted recommenders yield an empty result.
    #[must_use]
    pub fn recommend_for_index(&self, idx: usize, k: usize) -> Vec<(usize, f32)> {
        let Some(matrix) = &self.matrix else {
            return Vec::new();
        };
        if idx >= matrix.len() {
            return Vec::new();
        }

        let query = &matrix[idx];
        let mut sims: Vec<(usize, f32)> = matrix
            .iter()
            .enumerate()
            .map(|(i, vector)| (i, query.dot(vector)))
            .collect();
        sims[idx].1 = SELF_SIMILARITY;

        let mut top = top_k(sims, k);
        top.retain(|&(_, score)| score > SELF_SIMILARITY);
        top
    }

    /// Top-k corpus items matching a free-text query, vectorized in the
    /// already-fitted space. No self-exclusion applies.
    #[must_use]
    pub fn recommend_for_query(&self, text: &str, k: usize) -> Vec<(usize, f32)> {
        let Some(matrix) = &self.matrix else {
            return Vec::new();
        };

        let query = self.vectorizer.transform(text);
        let sims: Vec<(usize, f32)> = matrix
            .iter()
            .enumerate()
            .map(|(i, vector)| (i, query.dot(vector)))
            .collect();
        top_k(sims, k)
    }
}

/// Per-record text view: title, description, joined keywords, and any
/// externally supplied topic labels.
fn combined_text(rec: &Record) -> String {
    let mut parts: Vec<String> = vec![rec.title.clone(), rec.description.clone()];
    if !rec.keywords.is_empty() {
        parts.push(rec.keywords.join(" "));
    }
    if let Some(advanced) = &rec.advanced {
        if !advanced.topics.is_empty() {
            parts.push(advanced.topics.join(" "));
        }
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

/// Highest k scores, descending, ties broken by ascending corpus index.
fn top_k(mut sims: Vec<(usize, f32)>, k: usize) -> Vec<(usize, f32)> {
    sims.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    sims.truncate(k);
    sims
}
