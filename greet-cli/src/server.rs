//! HTTP boundary for the greeting service.
//!
//! `POST /hello` takes a person document and answers `{"Hello": "..."}`.
//! Rejected documents get `422` with one `detail` entry per violation.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use greet::samples::{Sample, samples};
use greet::{ValidationConfig, ValidationError, greet_with};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::logging::LoggingMiddleware;

/// Server settings, populated from the command line.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub verbose: u8,
    pub validation: ValidationConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
            verbose: 0,
            validation: ValidationConfig::default(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone)]
struct AppState {
    validation: Arc<ValidationConfig>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    loc: Vec<String>,
    #[serde(rename = "type")]
    kind: &'static str,
    msg: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: Vec<ErrorDetail>,
}

impl From<&ValidationError> for ErrorBody {
    fn from(err: &ValidationError) -> Self {
        Self {
            detail: err
                .violations()
                .iter()
                .map(|v| ErrorDetail {
                    loc: vec![v.field.clone()],
                    kind: v.reason.as_str(),
                    msg: v.message.clone(),
                })
                .collect(),
        }
    }
}

/// Build the application router. Tests drive this directly without a socket.
#[must_use]
pub fn router(config: &ServerConfig) -> Router {
    let state = AppState {
        validation: Arc::new(config.validation.clone()),
    };
    let logging = LoggingMiddleware::new(config.verbose);

    Router::new()
        .route("/hello", post(hello))
        .route("/samples", get(list_samples))
        .route("/health", get(health))
        .layer(middleware::from_fn(move |request: Request, next: Next| {
            let logging = logging.clone();
            async move { logging.handle(request, next).await }
        }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "greeting server listening");
    axum::serve(listener, router(config)).await?;
    Ok(())
}

async fn hello(State(state): State<AppState>, body: Bytes) -> Response {
    let raw: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!(%err, "request body is not JSON");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": format!("invalid JSON body: {err}")})),
            )
                .into_response();
        }
    };

    match greet_with(&raw, &state.validation) {
        Ok(greeting) => (StatusCode::OK, Json(greeting)).into_response(),
        Err(err) => {
            tracing::info!(violations = err.violations().len(), "person rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody::from(&err)),
            )
                .into_response()
        }
    }
}

async fn list_samples() -> Json<Vec<Sample>> {
    Json(samples())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
