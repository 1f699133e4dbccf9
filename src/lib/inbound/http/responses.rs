use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::device::models::device::{
    CreateDeviceError, DeleteDeviceError, GetDeviceError, SerialNumEmptyError, UpdateDeviceError,
};

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponseData {
    pub message: String,
}

/// Every domain failure is reported as a bad request; only backend failures surface as 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        tracing::debug!("rejected request body: {}", e);
        Self::BadRequest("can not unmarshal request body".to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        Self::BadRequest(e.body_text())
    }
}

impl From<SerialNumEmptyError> for ApiError {
    fn from(e: SerialNumEmptyError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

fn unknown(cause: anyhow::Error) -> ApiError {
    tracing::error!("{:?}\n{}", cause, cause.backtrace());
    ApiError::InternalServerError("Internal server error".to_string())
}

impl From<GetDeviceError> for ApiError {
    fn from(e: GetDeviceError) -> Self {
        match e {
            GetDeviceError::NotFound(cause) => Self::BadRequest(cause.to_string()),
            GetDeviceError::Unknown(cause) => unknown(cause),
        }
    }
}

impl From<CreateDeviceError> for ApiError {
    fn from(e: CreateDeviceError) -> Self {
        match e {
            CreateDeviceError::Duplicate(cause) => Self::BadRequest(cause.to_string()),
            CreateDeviceError::Unknown(cause) => unknown(cause),
        }
    }
}

impl From<UpdateDeviceError> for ApiError {
    fn from(e: UpdateDeviceError) -> Self {
        match e {
            UpdateDeviceError::NotFound(cause) => Self::BadRequest(cause.to_string()),
            UpdateDeviceError::Unknown(cause) => unknown(cause),
        }
    }
}

impl From<DeleteDeviceError> for ApiError {
    fn from(e: DeleteDeviceError) -> Self {
        match e {
            DeleteDeviceError::NotFound(cause) => Self::BadRequest(cause.to_string()),
            DeleteDeviceError::Unknown(cause) => unknown(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        match self {
            InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponseData { message }),
            )
                .into_response(),
            BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponseData { message })).into_response()
            }
        }
    }
}
