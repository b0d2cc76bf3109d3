use actix_cors::Cors;
use actix_web::{http::header, middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use once_cell::sync::Lazy;
use portfolio_site::{
    constants::START_TIME,
    graceful_shutdown::shutdown_signal,
    repositories::{experience::StaticExperienceRepo, project::StaticProjectRepo},
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    AppState,
};
use tracing_actix_web::TracingLogger;

fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(config.log_format);
    Lazy::force(&START_TIME);
    tracing::info!("Loaded configuration: {:?}", config);

    let projects = StaticProjectRepo::load(config.projects_file.as_deref())
        .context("Failed to load project catalog")?;
    tracing::info!(count = projects.len(), "Project catalog loaded");

    let experience = StaticExperienceRepo::load(config.experience_file.as_deref())
        .context("Failed to load experience timeline")?;
    tracing::info!(count = experience.len(), "Experience timeline loaded");

    let app_state = web::Data::new(
        AppState::new(&config, projects, experience).context("Failed to compile templates")?
    );

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&cors_config))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res.context("Server error")?,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            tracing::info!("Server stopped");
        }
    }

    Ok(())
}
