use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::device::models::device::SerialNum;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::responses::ApiError;

pub async fn delete_device<DS: DeviceService>(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState<DS>>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let serial_num = SerialNum::new(&id)?;

    state
        .device_service
        .delete_device(&serial_num)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::OK)
}
