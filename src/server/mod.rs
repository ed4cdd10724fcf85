//! HTTP server for the Cadastro service.
//!
//! This module exposes the customer and contact routes over axum and owns
//! the process-level server loop.

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorPayload};
pub use state::AppState;

use crate::commands::{AdicionarCliente, AdicionarContato};
use crate::config::Config;
use crate::domain::{ClienteId, ContatoId, Sexo};
use crate::notifications::Notifications;
use crate::observability::MetricsSnapshot;
use anyhow::Result;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Health check body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub metrics: MetricsSnapshot,
}

/// Health check
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        metrics: state.metrics.snapshot(),
    })
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/clientes", routes::router())
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn track_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let route = request.uri().path().to_string();
    let response = next.run(request).await;
    let status = response.status();
    state
        .metrics
        .track_http_request(&route, !(status.is_client_error() || status.is_server_error()));
    response
}

/// Register one demo customer with a contact.
pub async fn seed_demo(state: &AppState) {
    let cliente_id = ClienteId::gerar();
    let mut notifications = Notifications::new();

    state
        .mediator
        .enviar_comando(
            AdicionarCliente::new(cliente_id, "Ana", "Souza", "123.456.789-09", Sexo::Feminino),
            &mut notifications,
        )
        .await;
    state
        .mediator
        .enviar_comando(
            AdicionarContato::new(
                ContatoId::gerar(),
                cliente_id,
                11,
                987_654_321,
                "ana@example.com",
            ),
            &mut notifications,
        )
        .await;

    if notifications.operacao_valida() {
        info!(cliente_id = %cliente_id, "Demo customer registered");
    } else {
        warn!(errors = ?notifications.mensagens_erro(), "Demo customer could not be registered");
    }
}

/// Run the HTTP server until Ctrl-C.
pub async fn run_server(config: &Config, state: AppState) -> Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
