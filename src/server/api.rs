//! HTTP API server implementation

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::core::client::TranslatorClient;
use crate::core::config::ProxyConfig;
use crate::core::errors::{ProxyError, Result};
use crate::core::models::{ErrorResponse, TranslateResponse, TranslatePayload};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ProxyConfig>,
    translator: TranslatorClient,
}

impl AppState {
    /// Build state from configuration
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let translator = TranslatorClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            translator,
        })
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Add the CORS headers every response carries; successful responses also
/// advertise what a preflight may use.
fn with_cors(mut response: Response, success: bool) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    if success {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        );
    }
    response
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        with_cors((status, Json(body)).into_response(), false)
    }
}

/// Translation handler
///
/// Accepts any method so that non-POST requests get the JSON 405 body
/// instead of the router's empty one.
async fn translate(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    match handle_translate(&state, &method, &body).await {
        Ok(response) => with_cors((StatusCode::OK, Json(response)).into_response(), true),
        Err(e) => {
            let status = e.status_code();
            if status.is_client_error() && !matches!(e, ProxyError::ProviderError { .. }) {
                warn!("Rejected {} request: {}", method, e);
            } else {
                error!("Translation error: {}", e);
            }
            e.into_response()
        }
    }
}

/// Method gate, credentials, parsing, validation, one upstream call
async fn handle_translate(
    state: &AppState,
    method: &Method,
    body: &[u8],
) -> Result<TranslateResponse> {
    if *method != Method::POST {
        return Err(ProxyError::MethodNotAllowed);
    }

    let credentials = state.config.credentials()?;
    let request = TranslatePayload::from_slice(body)?.into_request()?;

    let translations = state.translator.translate(&credentials, &request).await?;

    Ok(TranslateResponse { translations })
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/translate", any(translate))
        .route("/.netlify/functions/translate", any(translate))
        .with_state(Arc::new(state))
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, config: ProxyConfig) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
