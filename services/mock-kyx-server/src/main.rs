use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use mock_kyx_server::{config::Config, registry, AppState};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "mock_kyx_server=info,kyx_core=info,actix_web=info";

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Mock KYX Server...");
    info!("Configuration loaded successfully");
    info!(
        "Providers enabled: goplus={}, chainalysis={}",
        config.providers.goplus_enabled, config.providers.chainalysis_enabled
    );

    // Initialize components
    let state = AppState::new(&config.chainalysis);

    if config.providers.chainalysis_enabled {
        tokio::spawn(registry::run_cleanup_scheduler(
            state.registrations.clone(),
            Duration::from_secs(config.chainalysis.cleanup_interval_secs),
        ));
    }

    let server_config = config.server.clone();
    let providers = config.providers.clone();

    info!(
        "Starting HTTP server on {}:{}",
        server_config.host, server_config.port
    );

    HttpServer::new(move || {
        let state = state.clone();
        let providers = providers.clone();

        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(middleware::Logger::default())
            .configure(move |cfg| state.configure(cfg, &providers))
    })
    .workers(server_config.workers)
    .bind((server_config.host.as_str(), server_config.port))
    .with_context(|| format!("Failed to bind {}:{}", server_config.host, server_config.port))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
