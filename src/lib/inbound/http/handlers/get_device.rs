use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::device::models::device::SerialNum;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::handlers::DeviceHttpData;
use crate::inbound::http::responses::{ApiError, ApiSuccess};

pub async fn get_device<DS: DeviceService>(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState<DS>>,
) -> Result<ApiSuccess<DeviceHttpData>, ApiError> {
    let Path(id) = id?;
    let serial_num = SerialNum::new(&id)?;

    state
        .device_service
        .get_device(&serial_num)
        .await
        .map_err(ApiError::from)
        .map(|ref device| ApiSuccess::new(StatusCode::OK, device.into()))
}
