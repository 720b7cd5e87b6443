use crate::core::handler::handle;
use crate::domain::ports::{ConfigProvider, InboundRequest, OutboundResponse};
use crate::utils::error::{PredictorError, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct AppState {
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            max_body_bytes: config.max_body_bytes(),
        }
    }
}

/// Wraps an axum request so the handler can read it through `InboundRequest`.
pub struct AxumRequest {
    method: String,
    body: Option<Body>,
    limit: usize,
}

impl AxumRequest {
    pub fn new(request: Request, limit: usize) -> Self {
        let (parts, body) = request.into_parts();
        Self {
            method: parts.method.as_str().to_string(),
            body: Some(body),
            limit,
        }
    }
}

#[async_trait]
impl InboundRequest for AxumRequest {
    fn method(&self) -> &str {
        &self.method
    }

    async fn read_body(&mut self) -> Result<Vec<u8>> {
        let Some(body) = self.body.take() else {
            return Ok(Vec::new());
        };

        let bytes = axum::body::to_bytes(body, self.limit)
            .await
            .map_err(|e| PredictorError::BodyRead {
                message: e.to_string(),
            })?;

        Ok(bytes.to_vec())
    }
}

impl IntoResponse for OutboundResponse {
    fn into_response(self) -> Response {
        let mut builder = axum::http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = self.body.map(Body::from).unwrap_or_else(Body::empty);
        builder.body(body).unwrap_or_else(|e| {
            tracing::error!("❌ Failed to build response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
    }
}

async fn trajectory_endpoint(State(state): State<AppState>, request: Request) -> Response {
    handle(AxumRequest::new(request, state.max_body_bytes))
        .await
        .into_response()
}

/// Every method and path lands on the same endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(trajectory_endpoint)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let listener = TcpListener::bind((config.host(), config.port()))
        .await
        .map_err(|e| PredictorError::ServerError {
            message: format!(
                "failed to bind {}:{}: {}",
                config.host(),
                config.port(),
                e
            ),
        })?;

    tracing::info!(
        "🚀 Trajectory predictor listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, router(AppState::from_config(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
