use std::future::Future;

use crate::domain::device::models::device::{
    CreateDeviceError, DeleteDeviceError, GetDeviceError, UpdateDeviceError,
};
use crate::domain::device::models::device::{Device, SerialNum};

/// `DeviceService` is the public API for the device domain.
pub trait DeviceService: Clone + Send + Sync + 'static {
    fn get_device(
        &self,
        serial_num: &SerialNum,
    ) -> impl Future<Output = Result<Device, GetDeviceError>> + Send;

    fn create_device(
        &self,
        device: &Device,
    ) -> impl Future<Output = Result<(), CreateDeviceError>> + Send;

    fn update_device(
        &self,
        device: &Device,
    ) -> impl Future<Output = Result<(), UpdateDeviceError>> + Send;

    fn delete_device(
        &self,
        serial_num: &SerialNum,
    ) -> impl Future<Output = Result<(), DeleteDeviceError>> + Send;
}

/// `DeviceRepository` represents a store of device data.
///
/// Every operation either applies fully or leaves the store untouched, and
/// the existence check it performs is atomic with the write that follows.
pub trait DeviceRepository: Send + Sync + Clone + 'static {
    /// Returns a snapshot of the device stored under `serial_num`.
    fn get(
        &self,
        serial_num: &SerialNum,
    ) -> impl Future<Output = Result<Device, GetDeviceError>> + Send;

    /// Stores `device`, failing if its serial number is already taken.
    fn create(&self, device: &Device) -> impl Future<Output = Result<(), CreateDeviceError>> + Send;

    /// Replaces the whole record stored under `device`'s serial number.
    fn update(&self, device: &Device) -> impl Future<Output = Result<(), UpdateDeviceError>> + Send;

    fn delete(
        &self,
        serial_num: &SerialNum,
    ) -> impl Future<Output = Result<(), DeleteDeviceError>> + Send;
}
