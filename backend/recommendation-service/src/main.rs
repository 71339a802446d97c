use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::io;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphy_client::{GraphyClient, GraphyConfig};
use recommendation_service::config::Config;
use recommendation_service::handlers::{get_recommendations, RecommendationHandlerState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    tracing::info!(
        "Starting {} v{}",
        config.app.service_name,
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Environment: {}", config.app.env);

    // Initialize the Graphy LMS client
    let graphy = GraphyClient::new(GraphyConfig::from_env())
        .map_err(|e| io::Error::other(e.to_string()))?;
    if !graphy.is_configured() {
        tracing::warn!("Graphy API credentials missing, serving demo identities");
    }

    let handler_state = web::Data::new(RecommendationHandlerState {
        graphy: Arc::new(graphy),
        utc_offset_minutes: config.context.utc_offset_minutes,
    });

    let port = config.app.port;
    tracing::info!("HTTP server listening on 0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(handler_state.clone())
            .route("/health", web::get().to(health_summary))
            .route("/ready", web::get().to(readiness_summary))
            .service(get_recommendations)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn health_summary() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "recommendation-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_summary(state: web::Data<RecommendationHandlerState>) -> HttpResponse {
    // Demo mode still serves recommendations, so an unconfigured Graphy
    // client is degraded rather than unready.
    let graphy_status = if state.graphy.is_configured() {
        "configured"
    } else {
        "demo-mode"
    };

    HttpResponse::Ok().json(serde_json::json!({
        "ready": true,
        "checks": {
            "graphy": { "status": graphy_status }
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
