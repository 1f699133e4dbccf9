use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tokio::net;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};

use crate::domain::device::ports::DeviceService;
use crate::inbound::http::handlers::{
    create_device::create_device, delete_device::delete_device, get_device::get_device,
    missing_id,
    update_device::{update_device, update_device_by_id},
};

mod handlers;
mod responses;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub host: &'a str,
    pub port: &'a str,
    /// Upper bound on receiving a request body.
    pub read_timeout: Duration,
    /// Upper bound on handling a request end to end.
    pub write_timeout: Duration,
}

#[derive(Debug, Clone)]
struct AppState<DS: DeviceService> {
    device_service: Arc<DS>,
}

pub struct HttpServer {
    router: axum::Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(
        device_service: impl DeviceService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            },
        );

        let router = router(device_service)
            .layer(RequestBodyTimeoutLayer::new(config.read_timeout))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                config.write_timeout,
            ))
            .layer(trace_layer);

        let address = format!("{}:{}", config.host, config.port);
        let listener = net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to listen on {}", address))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let address = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::info!("listening on {}", address);

        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;

        Ok(())
    }
}

/// Device routes bound to `device_service`, without server-level layers.
pub fn router(device_service: impl DeviceService) -> Router {
    let state = AppState {
        device_service: Arc::new(device_service),
    };

    device_routes().with_state(state)
}

fn device_routes<DS: DeviceService>() -> Router<AppState<DS>> {
    Router::new()
        .route("/devices", post(create_device).put(update_device))
        .route(
            "/devices/{id}",
            get(get_device).put(update_device_by_id).delete(delete_device),
        )
        .route("/devices/", get(missing_id).delete(missing_id))
}
