//! API Server for the Todo Summary Assistant
//!
//! Serves the todo REST API, the summarize endpoint and the browser frontend
//! on a single port (5000 unless `PORT` says otherwise).

mod config;
mod routes;
mod state;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;

fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::frontend::router())
        .merge(routes::health::router())
        .merge(routes::todos::router())
        .merge(routes::summarize::router())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment directly
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=debug,todo_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        tracing::info!("Loaded environment from {:?}", path);
    }

    let config = Config::from_env().context("Invalid configuration")?;
    let state = AppState::from_config(&config);

    if !state.summary().is_configured() {
        tracing::warn!("COHERE_API_KEY or SLACK_WEBHOOK_URL not set, /summarize will fail");
    }

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Backend listening on {} (store: {})", addr, state.store_kind());

    axum::serve(listener, build_app(state))
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use todo_core::task::InMemoryTaskStore;
    use tower::ServiceExt;

    use super::build_app;
    use crate::state::AppState;

    #[tokio::test]
    async fn cors_preflight_is_allowed() {
        let store = Arc::new(InMemoryTaskStore::new());
        let state = AppState::with_parts(store, "memory", None, None);
        let response = build_app(state)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/todos")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn all_routes_are_mounted() {
        let store = Arc::new(InMemoryTaskStore::new());
        let state = AppState::with_parts(store, "memory", None, None);
        let app = build_app(state);

        for uri in ["/", "/health", "/todos"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        }
    }
}
