use derive_more::Display;
use thiserror::Error;

/// Represents always valid device serial number.
#[derive(Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerialNum(String);

#[derive(Clone, Debug, Error, PartialEq)]
#[error("serial number cannot be empty")]
pub struct SerialNumEmptyError;
impl SerialNum {
    pub fn new(raw_serial_num: &str) -> Result<Self, SerialNumEmptyError> {
        if raw_serial_num.is_empty() {
            Err(SerialNumEmptyError)
        } else {
            Ok(Self(raw_serial_num.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Snapshot of a registered device. Identity is the serial number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Device {
    serial_num: SerialNum,
    ip: String,
    model: String,
}

impl Device {
    pub fn new(serial_num: SerialNum, ip: String, model: String) -> Self {
        Self {
            serial_num,
            ip,
            model,
        }
    }

    pub fn serial_num(&self) -> &SerialNum {
        &self.serial_num
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("device with serial number {serial_num} not found")]
pub struct DeviceNotFoundError {
    pub serial_num: SerialNum,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("device with serial number {serial_num} already exists")]
pub struct DeviceAlreadyExistsError {
    pub serial_num: SerialNum,
}

#[derive(Debug, Error)]
pub enum GetDeviceError {
    #[error(transparent)]
    NotFound(#[from] DeviceNotFoundError),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum CreateDeviceError {
    #[error(transparent)]
    Duplicate(#[from] DeviceAlreadyExistsError),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum UpdateDeviceError {
    #[error(transparent)]
    NotFound(#[from] DeviceNotFoundError),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum DeleteDeviceError {
    #[error(transparent)]
    NotFound(#[from] DeviceNotFoundError),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}


#[cfg(test)]
mod device_tests {
    use super::*;

    #[test]
    fn test_new_success() {
        let serial_num = SerialNum::new("123").unwrap();
        let device = Device::new(serial_num.clone(), "1.1.1.1".to_string(), "m1".to_string());

        assert_eq!(device.serial_num(), &serial_num);
        assert_eq!(device.ip(), "1.1.1.1");
        assert_eq!(device.model(), "m1");
    }

    #[test]
    fn test_error_messages_carry_serial_num() {
        let serial_num = SerialNum::new("123").unwrap();

        let not_found = DeviceNotFoundError {
            serial_num: serial_num.clone(),
        };
        let already_exists = DeviceAlreadyExistsError { serial_num };

        assert_eq!(
            not_found.to_string(),
            "device with serial number 123 not found"
        );
        assert_eq!(
            already_exists.to_string(),
            "device with serial number 123 already exists"
        );
    }

    #[test]
    fn test_operation_errors_are_transparent() {
        let serial_num = SerialNum::new("123").unwrap();

        let err = UpdateDeviceError::from(DeviceNotFoundError {
            serial_num: serial_num.clone(),
        });
        assert_eq!(err.to_string(), "device with serial number 123 not found");

        let err = CreateDeviceError::from(DeviceAlreadyExistsError { serial_num });
        assert_eq!(
            err.to_string(),
            "device with serial number 123 already exists"
        );
    }
}
