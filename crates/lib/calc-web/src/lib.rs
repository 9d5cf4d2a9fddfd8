//! HTTP server for the calc-index directory page.
//!
//! Serves the rendered calculator index as HTML and, optionally, the tool
//! registry as JSON.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use calc_core::{IndexRenderer, ToolCatalog};
use calc_registry::ToolDescriptor;
use calc_registry::schema::{INDEX_PATH, ROUTE_PREFIX};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Configuration for the index HTTP server.
#[derive(Debug, Clone)]
pub struct IndexServerConfig {
    pub addr: SocketAddr,
    pub api_enabled: bool,
}

impl IndexServerConfig {
    #[must_use]
    pub const fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            api_enabled: true,
        }
    }

    #[must_use]
    pub const fn with_api_enabled(mut self, api_enabled: bool) -> Self {
        self.api_enabled = api_enabled;
        self
    }
}

impl Default for IndexServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 4030)))
    }
}

/// HTTP server wrapper around a rendered index page.
pub struct IndexServer {
    config: IndexServerConfig,
    state: AppState,
}

impl IndexServer {
    /// Renders the index once; every request is served from that output.
    #[must_use]
    pub fn new(catalog: ToolCatalog, config: IndexServerConfig) -> Self {
        let page = IndexRenderer::render(&catalog);
        let state = AppState {
            catalog,
            index_html: Bytes::from(page.to_html()),
        };
        Self { config, state }
    }

    #[must_use]
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), self.config.api_enabled)
    }

    /// Runs the HTTP server until ctrl-c or SIGTERM.
    ///
    /// # Errors
    /// Returns any listener or server error.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Runs the HTTP server until `signal` resolves, then drains open requests.
    ///
    /// # Errors
    /// Returns any listener or server error.
    pub async fn serve_with_shutdown<F>(
        self,
        signal: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let app = self.router();

        info!(
            tools = self.state.catalog.len(),
            api = self.config.api_enabled,
            "calc-index listening on {addr}"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("shutdown signal received");
}

#[derive(Clone)]
struct AppState {
    catalog: ToolCatalog,
    index_html: Bytes,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = Json(ErrorResponse { error: self.message });
        (self.status, payload).into_response()
    }
}

fn build_router(state: AppState, api_enabled: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route(INDEX_PATH, get(index))
        .route(ROUTE_PREFIX, get(root));

    if api_enabled {
        router = router
            .route("/api/tools", get(list_tools))
            .route("/api/tools/:id", get(get_tool));
    }

    router.fallback(fallback).with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn root() -> Redirect {
    Redirect::permanent(INDEX_PATH)
}

async fn index(State(state): State<AppState>) -> Html<Bytes> {
    debug!("serving calculator index");
    Html(state.index_html)
}

async fn list_tools(State(state): State<AppState>) -> Json<&'static [ToolDescriptor]> {
    Json(state.catalog.all())
}

async fn get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static ToolDescriptor>, ApiError> {
    state.catalog.get(&id).map(Json).ok_or_else(|| {
        warn!(id = %id, "unknown tool requested");
        ApiError::not_found(format!("unknown tool: {id}"))
    })
}

async fn fallback(uri: Uri) -> ApiError {
    debug!(%uri, "no route matched");
    ApiError::not_found(format!("no route for {}", uri.path()))
}
