use serde::{Deserialize, Serialize};

use crate::domain::device::models::device::{Device, SerialNum, SerialNumEmptyError};
use crate::inbound::http::responses::ApiError;

pub mod create_device;
pub mod delete_device;
pub mod get_device;
pub mod update_device;

/// Wire shape of a device, used both for request bodies and for the body of `GET /devices/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceHttpData {
    serial_num: String,
    ip: String,
    model: String,
}

impl DeviceHttpData {
    /// Decodes a request body regardless of its declared content type.
    fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    fn try_into_domain(self) -> Result<Device, SerialNumEmptyError> {
        let serial_num = SerialNum::new(&self.serial_num)?;

        Ok(Device::new(serial_num, self.ip, self.model))
    }
}

impl From<&Device> for DeviceHttpData {
    fn from(device: &Device) -> Self {
        Self {
            serial_num: device.serial_num().to_string(),
            ip: device.ip().to_string(),
            model: device.model().to_string(),
        }
    }
}

/// Answers routes whose `{id}` segment was left empty.
pub async fn missing_id() -> ApiError {
    ApiError::BadRequest("'id' is required param".to_string())
}
