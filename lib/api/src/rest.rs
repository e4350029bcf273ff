//! REST surface for the fairmeta pipeline.
//!
//! Exposes scoring, corpus loading, recommendation and harvesting
//! endpoints. The pipeline components live in a shared [`AppContext`]; the
//! recommender index is rebuilt off to the side on corpus load and swapped
//! in atomically, so in-flight queries always see a consistent index.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use fairmeta_core::{Enricher, Normalizer, Record, ScoreResult, Scorer};
use fairmeta_recommend::Recommender;
use fairmeta_report::ReportWriter;

/// A fitted recommender together with the corpus it was built over, swapped
/// as one unit.
struct CorpusIndex {
    records: Vec<Record>,
    recommender: Recommender,
}

/// Shared pipeline state handed to every handler.
pub struct AppContext {
    normalizer: Normalizer,
    enricher: Enricher,
    scorer: Scorer,
    reports: ReportWriter,
    index: RwLock<Option<Arc<CorpusIndex>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(reports: ReportWriter) -> Self {
        Self {
            normalizer: Normalizer::default(),
            enricher: Enricher::default(),
            scorer: Scorer::default(),
            reports,
            index: RwLock::new(None),
        }
    }

    /// Run one raw mapping through normalize → enrich → score.
    #[must_use]
    pub fn score_raw(&self, raw: &Value) -> (Record, ScoreResult) {
        let mut rec = self.normalizer.normalize(raw);
        self.enricher.enrich(&mut rec);
        let result = self.scorer.score(&rec);
        (rec, result)
    }

    /// Normalize + enrich a batch, build a fresh recommender over it, and
    /// swap the shared index. Returns (corpus size, index ready).
    pub fn install_corpus_raw(&self, raws: &[Value]) -> (usize, bool) {
        let records: Vec<Record> = raws
            .iter()
            .map(|raw| {
                let mut rec = self.normalizer.normalize(raw);
                self.enricher.enrich(&mut rec);
                rec
            })
            .collect();
        self.install_corpus(records)
    }

    /// Build and swap the index over already-canonical records.
    pub fn install_corpus(&self, records: Vec<Record>) -> (usize, bool) {
        let mut recommender = Recommender::new(&records);
        recommender.fit();
        let ready = recommender.is_fitted();
        let size = records.len();
        let index = Arc::new(CorpusIndex {
            records,
            recommender,
        });
        *self.index.write() = Some(index);
        info!(corpus_size = size, index_ready = ready, "corpus installed");
        (size, ready)
    }

    fn current_index(&self) -> Option<Arc<CorpusIndex>> {
        self.index.read().clone()
    }

    #[must_use]
    pub fn reports(&self) -> &ReportWriter {
        &self.reports
    }
}

#[derive(Deserialize)]
struct IndexQueryRequest {
    index: usize,
    #[serde(default = "default_k")]
    k: usize,
}

#[derive(Deserialize)]
struct TextQueryRequest {
    query: String,
    #[serde(default = "default_k")]
    k: usize,
}

fn default_k() -> usize {
    5
}

#[derive(Deserialize)]
struct CkanQuery {
    base_url: String,
    dataset: String,
}

#[derive(Serialize)]
struct RecommendationMatch {
    index: usize,
    score: f32,
    record_id: String,
    title: String,
}

#[derive(Serialize)]
struct RecommendationResponse {
    matches: Vec<RecommendationMatch>,
}

fn to_matches(index: &CorpusIndex, ranked: Vec<(usize, f32)>) -> RecommendationResponse {
    let matches = ranked
        .into_iter()
        .map(|(i, score)| RecommendationMatch {
            index: i,
            score,
            record_id: index.records[i].record_id.clone(),
            title: index.records[i].title.clone(),
        })
        .collect();
    RecommendationResponse { matches }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(ctx: Arc<AppContext>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(ctx.clone()))
                .route("/health", web::get().to(health))
                .route("/score", web::post().to(score))
                .route("/corpus", web::put().to(load_corpus))
                .route("/recommend/index", web::post().to(recommend_index))
                .route("/recommend/query", web::post().to(recommend_query))
                .route("/harvest/zenodo/{id}", web::get().to(harvest_zenodo))
                .route("/harvest/ckan", web::get().to(harvest_ckan))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

async fn score(
    ctx: web::Data<Arc<AppContext>>,
    raw: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let (record, result) = ctx.score_raw(&raw);
    if let Err(e) = ctx.reports().write(&record, &result) {
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("report sink failed: {e}")
        })));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "record": record,
        "result": result,
    })))
}

async fn load_corpus(
    ctx: web::Data<Arc<AppContext>>,
    raws: web::Json<Vec<Value>>,
) -> ActixResult<HttpResponse> {
    let (corpus_size, index_ready) = ctx.install_corpus_raw(&raws);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": true,
        "corpus_size": corpus_size,
        "index_ready": index_ready,
    })))
}

async fn recommend_index(
    ctx: web::Data<Arc<AppContext>>,
    req: web::Json<IndexQueryRequest>,
) -> ActixResult<HttpResponse> {
    let response = match ctx.current_index() {
        Some(index) => {
            let ranked = index.recommender.recommend_for_index(req.index, req.k);
            to_matches(&index, ranked)
        }
        None => RecommendationResponse {
            matches: Vec::new(),
        },
    };
    Ok(HttpResponse::Ok().json(response))
}

async fn recommend_query(
    ctx: web::Data<Arc<AppContext>>,
    req: web::Json<TextQueryRequest>,
) -> ActixResult<HttpResponse> {
    let response = match ctx.current_index() {
        Some(index) => {
            let ranked = index.recommender.recommend_for_query(&req.query, req.k);
            to_matches(&index, ranked)
        }
        None => RecommendationResponse {
            matches: Vec::new(),
        },
    };
    Ok(HttpResponse::Ok().json(response))
}

async fn harvest_zenodo(path: web::Path<u64>) -> ActixResult<HttpResponse> {
    let record_id = path.into_inner();
    match fairmeta_harvest::fetch_by_record_id(record_id).await {
        Ok(record) => Ok(HttpResponse::Ok().json(record)),
        Err(e) => Ok(HttpResponse::BadGateway().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn harvest_ckan(query: web::Query<CkanQuery>) -> ActixResult<HttpResponse> {
    match fairmeta_harvest::fetch_dataset(&query.base_url, &query.dataset).await {
        Ok(record) => Ok(HttpResponse::Ok().json(record)),
        Err(e) => Ok(HttpResponse::BadGateway().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> AppContext {
        let dir = tempfile::tempdir().unwrap();
        AppContext::new(ReportWriter::new(dir.path()).unwrap())
    }

    #[test]
    fn score_raw_runs_the_full_pipeline() {
        let ctx = context();
        let (record, result) = ctx.score_raw(&json!({
            "Title": "Climate Data",
            "identifier": "10.1234/abcd",
        }));
        assert_eq!(record.title, "Climate Data");
        assert_eq!(record.landing_page, "https://doi.org/10.1234/abcd");
        assert!(result.checks.findable.pid);
    }

    #[test]
    fn corpus_install_swaps_a_ready_index() {
        let ctx = context();
        let (size, ready) = ctx.install_corpus_raw(&[
            json!({"title": "Climate observations", "keywords": "climate, weather"}),
            json!({"title": "Climate summaries", "keywords": "climate"}),
        ]);
        assert_eq!(size, 2);
        assert!(ready);

        let index = ctx.current_index().unwrap();
        let ranked = index.recommender.recommend_for_index(0, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, 1);
    }

    #[test]
    fn reinstall_replaces_the_previous_index() {
        let ctx = context();
        ctx.install_corpus_raw(&[json!({"title": "One"})]);
        let first = ctx.current_index().unwrap();
        ctx.install_corpus_raw(&[json!({"title": "Two"}), json!({"title": "Three"})]);
        let second = ctx.current_index().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.records.len(), 2);
    }

    #[test]
    fn queries_without_corpus_yield_no_matches() {
        let ctx = context();
        assert!(ctx.current_index().is_none());
    }
}
