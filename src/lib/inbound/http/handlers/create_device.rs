use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::handlers::DeviceHttpData;
use crate::inbound::http::responses::ApiError;

pub async fn create_device<DS: DeviceService>(
    State(state): State<AppState<DS>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let device = DeviceHttpData::from_body(&body)?.try_into_domain()?;

    state
        .device_service
        .create_device(&device)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::OK)
}
