use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use crate::domain::device::models::device::{
    CreateDeviceError, DeleteDeviceError, DeviceAlreadyExistsError, DeviceNotFoundError,
    GetDeviceError, UpdateDeviceError,
};
use crate::domain::device::models::device::{Device, SerialNum};
use crate::domain::device::ports::DeviceRepository;

type DeviceTable = HashMap<SerialNum, Device>;

/// In-process device store. Clones share the same table.
///
/// Reads take the shared lock, writes take the exclusive one for the whole
/// check-then-act step. The lock is never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct InMemory {
    devices: Arc<RwLock<DeviceTable>>,
}

impl InMemory {
    pub fn new() -> InMemory {
        InMemory::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, DeviceTable>, anyhow::Error> {
        self.devices
            .read()
            .map_err(|_| anyhow!("device table lock is poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, DeviceTable>, anyhow::Error> {
        self.devices
            .write()
            .map_err(|_| anyhow!("device table lock is poisoned"))
    }
}

impl DeviceRepository for InMemory {
    async fn get(&self, serial_num: &SerialNum) -> Result<Device, GetDeviceError> {
        let devices = self.read()?;

        devices.get(serial_num).cloned().ok_or_else(|| {
            DeviceNotFoundError {
                serial_num: serial_num.clone(),
            }
            .into()
        })
    }

    async fn create(&self, device: &Device) -> Result<(), CreateDeviceError> {
        let mut devices = self.write()?;

        match devices.entry(device.serial_num().clone()) {
            Entry::Occupied(_) => Err(DeviceAlreadyExistsError {
                serial_num: device.serial_num().clone(),
            }
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(device.clone());
                tracing::debug!(serial_num = %device.serial_num(), "device created");
                Ok(())
            }
        }
    }

    async fn update(&self, device: &Device) -> Result<(), UpdateDeviceError> {
        let mut devices = self.write()?;

        match devices.get_mut(device.serial_num()) {
            Some(stored) => {
                *stored = device.clone();
                tracing::debug!(serial_num = %device.serial_num(), "device updated");
                Ok(())
            }
            None => Err(DeviceNotFoundError {
                serial_num: device.serial_num().clone(),
            }
            .into()),
        }
    }

    async fn delete(&self, serial_num: &SerialNum) -> Result<(), DeleteDeviceError> {
        let mut devices = self.write()?;

        match devices.remove(serial_num) {
            Some(_) => {
                tracing::debug!(serial_num = %serial_num, "device deleted");
                Ok(())
            }
            None => Err(DeviceNotFoundError {
                serial_num: serial_num.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod in_memory_tests {
    use super::*;

    const TEST_SERIAL_NUM_1: &str = "test 1";
    const TEST_SERIAL_NUM_2: &str = "test 2";
    const TEST_SERIAL_NUM_3: &str = "test 3";

    fn serial(raw: &str) -> SerialNum {
        SerialNum::new(raw).unwrap()
    }

    fn device(serial_num: &str, ip: &str, model: &str) -> Device {
        Device::new(serial(serial_num), ip.to_string(), model.to_string())
    }

    /// Store seeded with two devices, written straight into the table.
    fn seeded() -> (InMemory, Vec<Device>) {
        let store = InMemory::new();
        let values = vec![
            device(TEST_SERIAL_NUM_1, "test ip 1", "test model 1"),
            device(TEST_SERIAL_NUM_2, "test ip 2", "test model 2"),
        ];

        {
            let mut table = store.devices.write().unwrap();
            for value in &values {
                table.insert(value.serial_num().clone(), value.clone());
            }
        }

        (store, values)
    }

    #[tokio::test]
    async fn test_get() {
        let (store, values) = seeded();

        let actual = store.get(&serial(TEST_SERIAL_NUM_1)).await.unwrap();

        assert_eq!(actual, values[0]);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let (store, _) = seeded();

        let result = store.get(&serial(TEST_SERIAL_NUM_3)).await;

        match result {
            Err(GetDeviceError::NotFound(err)) => {
                assert_eq!(err.serial_num, serial(TEST_SERIAL_NUM_3))
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (store, _) = seeded();
        let created = device(TEST_SERIAL_NUM_3, "test ip 3", "test model 3");

        store.create(&created).await.unwrap();

        assert_eq!(store.get(&serial(TEST_SERIAL_NUM_3)).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_first() {
        let (store, values) = seeded();
        let duplicate = device(TEST_SERIAL_NUM_1, "test ip 3", "test model 3");

        let result = store.create(&duplicate).await;

        match result {
            Err(CreateDeviceError::Duplicate(err)) => {
                assert_eq!(err.serial_num, serial(TEST_SERIAL_NUM_1))
            }
            other => panic!("expected Duplicate, got {:?}", other),
        }
        assert_eq!(
            store.get(&serial(TEST_SERIAL_NUM_1)).await.unwrap(),
            values[0]
        );
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let (store, _) = seeded();
        let replacement = device(TEST_SERIAL_NUM_1, "test ip 3", "test model 3");

        store.update(&replacement).await.unwrap();

        let actual = store.devices.read().unwrap()[&serial(TEST_SERIAL_NUM_1)].clone();
        assert_eq!(actual, replacement);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_no_record() {
        let (store, _) = seeded();
        let missing = device(TEST_SERIAL_NUM_3, "test ip 1", "test model 1");

        let result = store.update(&missing).await;

        assert!(matches!(result, Err(UpdateDeviceError::NotFound(_))));
        assert!(
            !store
                .devices
                .read()
                .unwrap()
                .contains_key(&serial(TEST_SERIAL_NUM_3))
        );
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (store, _) = seeded();

        store.delete(&serial(TEST_SERIAL_NUM_1)).await.unwrap();

        assert!(matches!(
            store.get(&serial(TEST_SERIAL_NUM_1)).await,
            Err(GetDeviceError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(&serial(TEST_SERIAL_NUM_1)).await,
            Err(DeleteDeviceError::NotFound(_))
        ));
        assert!(store.get(&serial(TEST_SERIAL_NUM_2)).await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_table() {
        let store = InMemory::new();
        let other = store.clone();
        let created = device(TEST_SERIAL_NUM_1, "test ip 1", "test model 1");

        store.create(&created).await.unwrap();

        assert_eq!(other.get(&serial(TEST_SERIAL_NUM_1)).await.unwrap(), created);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_create_has_single_winner() {
        const RACERS: usize = 64;
        let store = InMemory::new();

        let handles: Vec<_> = (0..RACERS)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let candidate = device(TEST_SERIAL_NUM_1, &format!("10.0.0.{i}"), "racer");
                    let result = store.create(&candidate).await;
                    (candidate, result)
                })
            })
            .collect();

        let mut winners = Vec::new();
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                (candidate, Ok(())) => winners.push(candidate),
                (_, Err(CreateDeviceError::Duplicate(_))) => duplicates += 1,
                (_, Err(other)) => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(winners.len(), 1);
        assert_eq!(duplicates, RACERS - 1);
        assert_eq!(
            store.get(&serial(TEST_SERIAL_NUM_1)).await.unwrap(),
            winners[0]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_delete_has_single_winner() {
        const RACERS: usize = 32;
        let (store, _) = seeded();

        let handles: Vec<_> = (0..RACERS)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.delete(&serial(TEST_SERIAL_NUM_1)).await })
            })
            .collect();

        let mut deleted = 0;
        let mut not_found = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => deleted += 1,
                Err(DeleteDeviceError::NotFound(_)) => not_found += 1,
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        assert_eq!(deleted, 1);
        assert_eq!(not_found, RACERS - 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_update_and_delete() {
        const UPDATERS: usize = 32;
        let (store, _) = seeded();

        let updates: Vec<_> = (0..UPDATERS)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let replacement = device(TEST_SERIAL_NUM_1, &format!("10.0.0.{i}"), "racer");
                    store.update(&replacement).await
                })
            })
            .collect();
        let delete = {
            let store = store.clone();
            tokio::spawn(async move { store.delete(&serial(TEST_SERIAL_NUM_1)).await })
        };

        assert!(delete.await.unwrap().is_ok());
        for handle in updates {
            match handle.await.unwrap() {
                Ok(()) | Err(UpdateDeviceError::NotFound(_)) => {}
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        assert!(matches!(
            store.get(&serial(TEST_SERIAL_NUM_1)).await,
            Err(GetDeviceError::NotFound(_))
        ));
        assert!(matches!(
            store.update(&device(TEST_SERIAL_NUM_1, "test ip 1", "test model 1")).await,
            Err(UpdateDeviceError::NotFound(_))
        ));
    }
}
