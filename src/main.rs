use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fairmeta_api::{AppContext, RestApi};
use fairmeta_core::{read_jsonl, Enricher, Normalizer};
use fairmeta_report::ReportWriter;

/// FAIR metadata scoring and recommendation service
#[derive(Parser, Debug)]
#[command(name = "fairmeta")]
#[command(about = "FAIR metadata scoring and recommendation service", long_about = None)]
struct Args {
    /// Directory where JSON and Markdown reports are written
    #[arg(short, long, default_value = "./reports")]
    reports_dir: PathBuf,

    /// Optional JSONL corpus preloaded into the recommender at startup
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fairmeta v{}", env!("CARGO_PKG_VERSION"));
    info!("Reports directory: {:?}", args.reports_dir);
    info!("HTTP API port: {}", args.http_port);

    let reports = ReportWriter::new(&args.reports_dir)?;
    let ctx = Arc::new(AppContext::new(reports));

    if let Some(path) = &args.corpus {
        let mut records = read_jsonl(path, &Normalizer::default())?;
        let enricher = Enricher::default();
        for record in &mut records {
            enricher.enrich(record);
        }
        let (size, ready) = ctx.install_corpus(records);
        info!("Preloaded corpus of {} records (index ready: {})", size, ready);
    }

    let ctx_http = ctx.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(ctx_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("fairmeta started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
