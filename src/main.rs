use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use hobby_algo::config::Settings;
use hobby_algo::core::Recommender;
use hobby_algo::routes::{self, AppState};
use hobby_algo::services::{CatalogStore, SurveyStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // Initialize logging; RUST_LOG wins over LOG_LEVEL, which wins over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Hobby Algo recommendation service...");

    // Load the read-only catalog snapshot
    let catalog = CatalogStore::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load hobby catalog: {}", e);
        std::io::Error::other(e)
    })?;

    info!("Catalog loaded ({} hobbies)", catalog.len());

    let surveys = SurveyStore::new(settings.surveys.capacity, settings.surveys.ttl_secs);

    info!(
        "Survey store initialized (capacity: {}, TTL: {}s)",
        settings.surveys.capacity, settings.surveys.ttl_secs
    );

    let recommender = Recommender::with_default_config();

    info!("Recommender initialized with weights: {:?}", recommender.config().weights());

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        surveys: Arc::new(surveys),
        recommender,
        limits: settings.recommendation,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
