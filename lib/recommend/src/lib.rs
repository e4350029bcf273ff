//! # fairmeta Recommend
//!
//! Content-based similarity recommendation over enriched metadata records.
//!
//! A [`Recommender`] is constructed over a finite, ordered corpus, builds a
//! TF-IDF vector space with [`Recommender::fit`], and then answers
//! item-based ([`Recommender::recommend_for_index`]) and free-text
//! ([`Recommender::recommend_for_query`]) top-k cosine queries.
//!
//! ## Degradation contract
//!
//! Vectorization is an injected capability ([`TextVectorizer`]) resolved
//! once at construction. With the no-op implementation, or before a
//! successful fit, every query returns an empty result; callers never need
//! to catch anything.
//!
//! ## Example
//!
//! ```rust
//! use fairmeta_core::Record;
//! use fairmeta_recommend::Recommender;
//!
//! let corpus = vec![
//!     Record { title: "Climate data".into(), ..Default::default() },
//!     Record { title: "Climate summaries".into(), ..Default::default() },
//! ];
//! let mut recommender = Recommender::new(&corpus);
//! recommender.fit();
//!
//! let matches = recommender.recommend_for_query("climate", 1);
//! assert_eq!(matches.len(), 1);
//! ```

pub mod recommend;
pub mod tfidf;

pub use recommend::{Recommender, SELF_SIMILARITY};
pub use tfidf::{
    NoopVectorizer, SparseVector, TextVectorizer, TfidfVectorizer, MAX_FEATURES, STOP_WORDS,
};
