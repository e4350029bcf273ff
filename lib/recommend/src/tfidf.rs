//! TF-IDF vectorization over record text.
//!
//! Builds a capped vocabulary from the corpus, weights term counts by
//! smoothed inverse document frequency, and L2-normalizes the resulting
//! sparse vectors so that cosine similarity reduces to a sparse dot
//! product.

use ahash::AHashMap;

/// Vocabulary size cap: only the most frequent terms are kept.
pub const MAX_FEATURES: usize = 5000;

/// English stop words excluded from the vocabulary.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
];

/// Sparse vector: parallel (term index, weight) arrays sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Dot product via a merge walk over the sorted index arrays.
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0f32;
        let (mut i, mut j) = (0usize, 0usize);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Normalize to unit L2 length; the zero vector stays zero.
    pub fn l2_normalize(&mut self) {
        let norm: f32 = self.values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            let inv = 1.0 / norm;
            for v in &mut self.values {
                *v *= inv;
            }
        }
    }

    fn from_weights(mut weights: Vec<(u32, f32)>) -> Self {
        weights.sort_unstable_by_key(|(idx, _)| *idx);
        let mut vector = Self {
            indices: weights.iter().map(|(idx, _)| *idx).collect(),
            values: weights.iter().map(|(_, w)| *w).collect(),
        };
        vector.l2_normalize();
        vector
    }
}

/// Capability seam for turning corpus text into vectors.
///
/// Resolved once when the recommender is constructed; implementations must
/// not probe for availability in the query path. [`NoopVectorizer`] is the
/// documented degraded-environment stand-in.
pub trait TextVectorizer: Send + Sync {
    /// Fit on the corpus and return one vector per document, or `None` when
    /// the vectorization capability is unavailable.
    fn fit_transform(&mut self, docs: &[String]) -> Option<Vec<SparseVector>>;

    /// Vectorize a query in the already-fitted space. Returns the zero
    /// vector before a successful fit.
    fn transform(&self, text: &str) -> SparseVector;
}

/// No-op vectorizer: `fit_transform` reports the capability as unavailable
/// and every query maps to the zero vector. Queries against a recommender
/// built with this vectorizer return empty results.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVectorizer;

impl TextVectorizer for NoopVectorizer {
    fn fit_transform(&mut self, _docs: &[String]) -> Option<Vec<SparseVector>> {
        None
    }

    fn transform(&self, _text: &str) -> SparseVector {
        SparseVector::default()
    }
}

/// TF-IDF vectorizer with a frequency-capped vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
    vocabulary: AHashMap<String, u32>,
    idf: Vec<f32>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(MAX_FEATURES)
    }
}

impl TfidfVectorizer {
    #[must_use]
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Tokenize text for vectorization: lowercase, split on whitespace and
    /// punctuation, drop single characters and stop words.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|s| s.len() > 1 && !STOP_WORDS.contains(&s.as_str()))
            .collect()
    }

    fn vector_from_tokens(&self, tokens: &[String]) -> SparseVector {
        let mut counts: AHashMap<u32, f32> = AHashMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        let weights = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx as usize]))
            .collect();
        SparseVector::from_weights(weights)
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn fit_transform(&mut self, docs: &[String]) -> Option<Vec<SparseVector>> {
        let tokenized: Vec<Vec<String>> = docs.iter().map(|d| Self::tokenize(d)).collect();

        // Corpus-wide term and document frequencies.
        let mut total_tf: AHashMap<&str, u64> = AHashMap::new();
        let mut df: AHashMap<&str, u32> = AHashMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = Vec::new();
            for token in tokens {
                *total_tf.entry(token.as_str()).or_insert(0) += 1;
                if !seen.contains(&token.as_str()) {
                    seen.push(token.as_str());
                    *df.entry(token.as_str()).or_insert(0) += 1;
                }
            }
        }

        // Keep the most frequent terms, ties broken lexicographically, then
        // index the surviving vocabulary in sorted order so that fits over
        // the same corpus are deterministic.
        let mut terms: Vec<(&str, u64)> = total_tf.into_iter().collect();
        terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        terms.truncate(self.max_features);
        let mut selected: Vec<&str> = terms.into_iter().map(|(term, _)| term).collect();
        selected.sort_unstable();

        let doc_count = docs.len() as f32;
        self.vocabulary = selected
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx as u32))
            .collect();
        self.idf = selected
            .iter()
            .map(|term| {
                let term_df = df.get(term).copied().unwrap_or(0) as f32;
                ((1.0 + doc_count) / (1.0 + term_df)).ln() + 1.0
            })
            .collect();

        Some(
            tokenized
                .iter()
                .map(|tokens| self.vector_from_tokens(tokens))
                .collect(),
        )
    }

    fn transform(&self, text: &str) -> SparseVector {
        self.vector_from_tokens(&Self::tokenize(text))
    }
}
