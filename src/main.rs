use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use zameen_price::config::Settings;
use zameen_price::core::{Formatter, Predictor, RangeAdvisor};
use zameen_price::routes::{self, AppState};
use zameen_price::services::Artifacts;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the configured level applies
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Zameen price prediction service...");

    // Model and schema are required; there is no degraded mode
    let artifacts = Artifacts::load(&settings.artifacts).await.map_err(|e| {
        error!("Failed to load model artifacts: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    let advisor = RangeAdvisor::new(settings.advisory.rules.clone());
    info!("Range advisor initialized with {} rules", advisor.rules().len());

    let app_state = AppState {
        predictor: Predictor::new(artifacts.schema, artifacts.model, advisor),
        formatter: Formatter::new(settings.presentation.currency.clone()),
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
