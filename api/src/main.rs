//! Showcase API Server
//!
//! REST API backing the marketing site's testimonial carousel. The
//! collection lives in memory for the process lifetime; there is no
//! storage backend, and no authentication is enforced.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{seed_testimonials, MemoryTestimonialStore};
use app::TestimonialService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub testimonial_service: Arc<TestimonialService<MemoryTestimonialStore>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router. Factored out of `main` so the
/// integration tests can mount the same routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/testimonials",
            get(handlers::list_testimonials).post(handlers::create_testimonial),
        )
        .route(
            "/testimonials/:id",
            get(handlers::get_testimonial)
                .put(handlers::update_testimonial)
                .delete(handlers::delete_testimonial),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,showcase_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting showcase API...");

    let config = Config::from_env();

    let store = if config.seed_demo_data {
        let seeds = seed_testimonials();
        tracing::info!("Seeding {} demo testimonials", seeds.len());
        Arc::new(MemoryTestimonialStore::with_records(seeds))
    } else {
        Arc::new(MemoryTestimonialStore::new())
    };

    let testimonial_service = Arc::new(TestimonialService::new(
        store,
        config.read_latency,
        config.write_latency,
    ));

    let state = AppState {
        testimonial_service,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}
