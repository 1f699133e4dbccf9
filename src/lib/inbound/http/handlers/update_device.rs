use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::handlers::DeviceHttpData;
use crate::inbound::http::responses::ApiError;

/// `PUT /devices`: the body alone names the device to replace.
pub async fn update_device<DS: DeviceService>(
    State(state): State<AppState<DS>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let body = DeviceHttpData::from_body(&body)?;

    replace(&state, body).await
}

/// `PUT /devices/{id}`: the path id must agree with the body's serial number.
pub async fn update_device_by_id<DS: DeviceService>(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState<DS>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let body = DeviceHttpData::from_body(&body)?;

    if body.serial_num != id {
        return Err(ApiError::BadRequest(format!(
            "serial number {} does not match path id {}",
            body.serial_num, id
        )));
    }

    replace(&state, body).await
}

async fn replace<DS: DeviceService>(
    state: &AppState<DS>,
    body: DeviceHttpData,
) -> Result<StatusCode, ApiError> {
    let device = body.try_into_domain()?;

    state
        .device_service
        .update_device(&device)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::OK)
}
