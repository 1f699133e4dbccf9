use crate::domain::device::models::device::{
    CreateDeviceError, DeleteDeviceError, GetDeviceError, UpdateDeviceError,
};
use crate::domain::device::models::device::{Device, SerialNum};
use crate::domain::device::ports::{DeviceRepository, DeviceService};

/// Canonical implementation of the [DeviceService] port, through which the device domain API is
/// consumed.
///
/// Requests are handed to the repository as they are and its results are returned unchanged.
#[derive(Debug, Clone)]
pub struct Service<R: DeviceRepository> {
    repo: R,
}

impl<R: DeviceRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: DeviceRepository> DeviceService for Service<R> {
    async fn get_device(&self, serial_num: &SerialNum) -> Result<Device, GetDeviceError> {
        self.repo.get(serial_num).await
    }

    async fn create_device(&self, device: &Device) -> Result<(), CreateDeviceError> {
        self.repo.create(device).await
    }

    async fn update_device(&self, device: &Device) -> Result<(), UpdateDeviceError> {
        self.repo.update(device).await
    }

    async fn delete_device(&self, serial_num: &SerialNum) -> Result<(), DeleteDeviceError> {
        self.repo.delete(serial_num).await
    }
}
