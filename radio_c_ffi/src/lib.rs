// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! C-linkage surface of the soft bus radio adapters.
//!
//! The eight functions of `ble_adapter.h` and `wifi_direct.h` drive one
//! process-wide adapter per radio. The `*_new` / `*_handle_*` / `*_free`
//! family gives callers independent adapters addressed by opaque handles.
//! Every function returns `0` on success and `-1` on failure.

mod default_adapter;
mod handle_api;
mod handle_map;

pub use handle_api::*;

use std::ffi::CStr;
use std::sync::Arc;

use libc::{c_char, c_int};
use log::{error, info};
use softbus_radio::api::{Advertiser, Radio, ScanListener, Scanner};
use softbus_radio::{
    to_status, AdapterConfig, BleAddress, DeviceName, DiscoveredDevice, RadioError,
};

use crate::default_adapter::{default_ble_adapter, default_wifi_direct_adapter};

/// Value for `softbus_radio_set_lifecycle_policy`: tolerate out-of-order calls.
pub const SOFTBUS_RADIO_POLICY_LENIENT: c_int = 0;
/// Value for `softbus_radio_set_lifecycle_policy`: fail out-of-order calls.
pub const SOFTBUS_RADIO_POLICY_STRICT: c_int = 1;

/// Invoked with the address and RSSI of each device found while scanning.
pub type BleScanCallback = Option<extern "C" fn(address: u64, rssi: i8)>;

pub(crate) struct CallbackListener {
    callback: extern "C" fn(u64, i8),
}

impl ScanListener for CallbackListener {
    fn on_device_found(&self, device: DiscoveredDevice) {
        (self.callback)(u64::from(device.address), device.rssi);
    }
}

pub(crate) fn scan_listener(callback: BleScanCallback) -> Option<Arc<dyn ScanListener>> {
    callback.map(|callback| Arc::new(CallbackListener { callback }) as Arc<dyn ScanListener>)
}

pub(crate) fn discovered_device(address: u64, rssi: i8) -> DiscoveredDevice {
    DiscoveredDevice::new(BleAddress::new(address), rssi)
}

/// Runs the scan callback for an accepted advertisement. Must be called with
/// no adapter lock held: the callback may call back into this library.
pub(crate) fn notify_scan_listener(
    call: &str,
    accepted: Result<Option<Arc<dyn ScanListener>>, RadioError>,
    device: DiscoveredDevice,
) -> c_int {
    match accepted {
        Ok(listener) => {
            if let Some(listener) = listener {
                listener.on_device_found(device);
            }
            0
        }
        Err(e) => status(call, Err(e)),
    }
}

/// Logs a failed call and converts the result to a C status code.
pub(crate) fn status(call: &str, result: Result<(), RadioError>) -> c_int {
    if let Err(e) = &result {
        error!("{} failed: {}", call, e);
    }
    to_status(result)
}

/// Copies a caller-owned C string. The pointer is not used after return.
pub(crate) unsafe fn device_name_from_raw(
    device_name: *const c_char,
) -> Result<DeviceName, RadioError> {
    if device_name.is_null() {
        return Err(RadioError::InvalidDeviceName(String::from("null pointer")));
    }
    Ok(DeviceName::from_c_str(CStr::from_ptr(device_name)))
}

pub(crate) fn config_for_policy(policy: c_int) -> Option<AdapterConfig> {
    match policy {
        SOFTBUS_RADIO_POLICY_LENIENT => Some(AdapterConfig::lenient()),
        SOFTBUS_RADIO_POLICY_STRICT => Some(AdapterConfig::strict()),
        _ => None,
    }
}

/// Initialises `env_logger` from `RUST_LOG`. Safe to call more than once.
#[no_mangle]
pub extern "C" fn softbus_radio_init_logging() -> c_int {
    if env_logger::try_init().is_ok() {
        info!("softbus radio {} logging initialized.", softbus_radio::VERSION);
    }
    0
}

/// Switches both default adapters to `SOFTBUS_RADIO_POLICY_LENIENT` or
/// `SOFTBUS_RADIO_POLICY_STRICT`. Their current state is kept.
#[no_mangle]
pub extern "C" fn softbus_radio_set_lifecycle_policy(policy: c_int) -> c_int {
    let config = match config_for_policy(policy) {
        Some(config) => config,
        None => {
            error!("Unknown lifecycle policy {}.", policy);
            return -1;
        }
    };
    default_ble_adapter().configure(config);
    default_wifi_direct_adapter().configure(config);
    info!("Lifecycle policy set to {:?}.", config.policy);
    0
}

#[no_mangle]
pub extern "C" fn ble_adapter_init() -> c_int {
    status("ble_adapter_init", default_ble_adapter().init())
}

#[no_mangle]
pub extern "C" fn ble_adapter_cleanup() -> c_int {
    status("ble_adapter_cleanup", default_ble_adapter().cleanup())
}

#[no_mangle]
pub extern "C" fn ble_adapter_start_scan() -> c_int {
    status("ble_adapter_start_scan", default_ble_adapter().start_scan())
}

#[no_mangle]
pub extern "C" fn ble_adapter_stop_scan() -> c_int {
    status("ble_adapter_stop_scan", default_ble_adapter().stop_scan())
}

/// Returns `1` while the default BLE adapter is scanning, `0` otherwise.
#[no_mangle]
pub extern "C" fn ble_adapter_is_scanning() -> c_int {
    default_ble_adapter().is_scanning() as c_int
}

/// Registers the scan result callback of the default BLE adapter. NULL
/// unregisters.
#[no_mangle]
pub extern "C" fn ble_adapter_set_scan_callback(callback: BleScanCallback) -> c_int {
    default_ble_adapter().set_scan_listener(scan_listener(callback));
    0
}

/// Called by the platform layer for each advertisement it receives. Fails
/// unless the default BLE adapter is scanning.
#[no_mangle]
pub extern "C" fn ble_adapter_report_advertisement(address: u64, rssi: i8) -> c_int {
    let device = discovered_device(address, rssi);
    let accepted = default_ble_adapter().accept_advertisement(device);
    notify_scan_listener("ble_adapter_report_advertisement", accepted, device)
}

#[no_mangle]
pub extern "C" fn wifi_direct_init() -> c_int {
    status("wifi_direct_init", default_wifi_direct_adapter().init())
}

#[no_mangle]
pub extern "C" fn wifi_direct_cleanup() -> c_int {
    status("wifi_direct_cleanup", default_wifi_direct_adapter().cleanup())
}

/// # Safety
///
/// `device_name` must be NULL or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn wifi_direct_start_advertising(device_name: *const c_char) -> c_int {
    let result = device_name_from_raw(device_name)
        .and_then(|name| default_wifi_direct_adapter().start_advertising(&name));
    status("wifi_direct_start_advertising", result)
}

#[no_mangle]
pub extern "C" fn wifi_direct_stop_advertising() -> c_int {
    status(
        "wifi_direct_stop_advertising",
        default_wifi_direct_adapter().stop_advertising(),
    )
}

/// Returns `1` while the default Wi-Fi Direct adapter is advertising, `0`
/// otherwise.
#[no_mangle]
pub extern "C" fn wifi_direct_is_advertising() -> c_int {
    default_wifi_direct_adapter().is_advertising() as c_int
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;
    use std::ptr;
    use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use softbus_radio::AdapterState;

    use super::*;
    use crate::default_adapter::testing::fresh_default_adapters;

    #[test]
    fn test_wifi_direct_init_returns_zero() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        assert_eq!(wifi_direct_init(), 0);
        assert!(output.contains(b"Initializing Wi-Fi Direct adapter"));
    }

    #[test]
    fn test_start_advertising_prints_name() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        let name = CString::new("DeviceA").unwrap();
        assert_eq!(wifi_direct_init(), 0);
        assert_eq!(unsafe { wifi_direct_start_advertising(name.as_ptr()) }, 0);
        assert!(output.contains(b"DeviceA"));
        assert_eq!(wifi_direct_is_advertising(), 1);
    }

    #[test]
    fn test_start_advertising_accepts_empty_name() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        let name = CString::new("").unwrap();
        assert_eq!(unsafe { wifi_direct_start_advertising(name.as_ptr()) }, 0);
        assert!(output.contains(b"Starting Wi-Fi Direct advertising as: \n"));
    }

    #[test]
    fn test_start_advertising_keeps_non_utf8_name_verbatim() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        let name = CString::new(vec![b'x', 0xFF, 0xFE, b'y']).unwrap();
        assert_eq!(unsafe { wifi_direct_start_advertising(name.as_ptr()) }, 0);
        assert!(output.contains(&[b'x', 0xFF, 0xFE, b'y']));
    }

    #[test]
    fn test_start_advertising_rejects_null_name() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        assert_eq!(unsafe { wifi_direct_start_advertising(ptr::null()) }, -1);
        assert!(output.contents().is_empty());
        assert_eq!(wifi_direct_is_advertising(), 0);
    }

    #[test]
    fn test_wifi_direct_calls_succeed_in_any_order() {
        let (_guard, _output) = fresh_default_adapters(AdapterConfig::default());
        assert_eq!(wifi_direct_stop_advertising(), 0);
        assert_eq!(wifi_direct_cleanup(), 0);
        let name = CString::new("DeviceA").unwrap();
        assert_eq!(unsafe { wifi_direct_start_advertising(name.as_ptr()) }, 0);
        assert_eq!(unsafe { wifi_direct_start_advertising(name.as_ptr()) }, 0);
        assert_eq!(wifi_direct_init(), 0);
        assert_eq!(wifi_direct_init(), 0);
        assert_eq!(wifi_direct_cleanup(), 0);
    }

    #[test]
    fn test_lenient_repeated_init_and_cleanup_still_print() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        assert_eq!(wifi_direct_cleanup(), 0);
        assert_eq!(wifi_direct_init(), 0);
        assert_eq!(wifi_direct_init(), 0);
        assert_eq!(ble_adapter_cleanup(), 0);
        assert_eq!(
            output.lines(),
            vec![
                "Cleaning up Wi-Fi Direct adapter",
                "Initializing Wi-Fi Direct adapter",
                "Initializing Wi-Fi Direct adapter",
                "Cleaning up BLE adapter",
            ]
        );
        assert_eq!(default_wifi_direct_adapter().state(), AdapterState::Initialized);
        assert_eq!(default_ble_adapter().state(), AdapterState::Uninitialized);
    }

    #[test]
    fn test_concurrent_calls_are_serialized() {
        const THREADS: usize = 8;
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());

        let workers: Vec<_> = (0..THREADS)
            .map(|i| {
                thread::spawn(move || {
                    let name = CString::new(format!("Device{}", i)).unwrap();
                    assert_eq!(wifi_direct_init(), 0);
                    assert_eq!(unsafe { wifi_direct_start_advertising(name.as_ptr()) }, 0);
                    assert_eq!(wifi_direct_stop_advertising(), 0);
                    assert_eq!(ble_adapter_init(), 0);
                    assert_eq!(ble_adapter_start_scan(), 0);
                    assert_eq!(ble_adapter_stop_scan(), 0);
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let lines = output.lines();
        assert_eq!(lines.len(), THREADS * 6);
        for i in 0..THREADS {
            let expected = format!("Starting Wi-Fi Direct advertising as: Device{}", i);
            assert!(lines.contains(&expected));
        }
        assert_eq!(wifi_direct_is_advertising(), 0);
        assert_eq!(ble_adapter_is_scanning(), 0);
        assert_eq!(default_wifi_direct_adapter().state(), AdapterState::Initialized);
        assert_eq!(default_ble_adapter().state(), AdapterState::Initialized);
    }

    #[test]
    fn test_ble_adapter_lifecycle() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        assert_eq!(ble_adapter_init(), 0);
        assert_eq!(ble_adapter_start_scan(), 0);
        assert_eq!(ble_adapter_is_scanning(), 1);
        assert_eq!(ble_adapter_stop_scan(), 0);
        assert_eq!(ble_adapter_is_scanning(), 0);
        assert_eq!(ble_adapter_cleanup(), 0);
        assert_eq!(
            output.lines(),
            vec![
                "Initializing BLE adapter",
                "BLE scan started",
                "BLE scan stopped",
                "Cleaning up BLE adapter",
            ]
        );
    }

    #[test]
    fn test_strict_policy_fails_out_of_order_calls() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        assert_eq!(softbus_radio_set_lifecycle_policy(SOFTBUS_RADIO_POLICY_STRICT), 0);
        assert_eq!(ble_adapter_start_scan(), -1);
        assert_eq!(ble_adapter_stop_scan(), -1);
        assert_eq!(wifi_direct_stop_advertising(), -1);
        assert_eq!(wifi_direct_cleanup(), -1);
        assert!(output.contents().is_empty());

        assert_eq!(wifi_direct_init(), 0);
        let long_name = CString::new("n".repeat(33)).unwrap();
        assert_eq!(unsafe { wifi_direct_start_advertising(long_name.as_ptr()) }, -1);
        assert_eq!(softbus_radio_set_lifecycle_policy(SOFTBUS_RADIO_POLICY_LENIENT), 0);
        assert_eq!(unsafe { wifi_direct_start_advertising(long_name.as_ptr()) }, 0);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let (_guard, _output) = fresh_default_adapters(AdapterConfig::default());
        assert_eq!(softbus_radio_set_lifecycle_policy(7), -1);
    }

    static LAST_ADDRESS: AtomicU64 = AtomicU64::new(0);

    extern "C" fn record_address(address: u64, _rssi: i8) {
        LAST_ADDRESS.store(address, Ordering::SeqCst);
    }

    #[test]
    fn test_scan_callback_receives_reported_devices() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        LAST_ADDRESS.store(0, Ordering::SeqCst);
        assert_eq!(ble_adapter_set_scan_callback(Some(record_address)), 0);

        assert_eq!(ble_adapter_report_advertisement(0x112233445566, -50), -1);
        assert_eq!(LAST_ADDRESS.load(Ordering::SeqCst), 0);

        assert_eq!(ble_adapter_init(), 0);
        assert_eq!(ble_adapter_start_scan(), 0);
        assert_eq!(ble_adapter_report_advertisement(0x112233445566, -50), 0);
        assert_eq!(LAST_ADDRESS.load(Ordering::SeqCst), 0x112233445566);
        assert!(output.contains(b"BLE device found: 11:22:33:44:55:66"));

        assert_eq!(ble_adapter_set_scan_callback(None), 0);
        assert_eq!(ble_adapter_report_advertisement(0xAABBCCDDEEFF, -50), 0);
        assert_eq!(LAST_ADDRESS.load(Ordering::SeqCst), 0x112233445566);
    }

    static NESTED_STOP_STATUS: AtomicI32 = AtomicI32::new(1);

    extern "C" fn stop_scan_from_callback(_address: u64, _rssi: i8) {
        NESTED_STOP_STATUS.store(ble_adapter_stop_scan(), Ordering::SeqCst);
    }

    #[test]
    fn test_scan_callback_may_call_back_into_the_adapter() {
        let (_guard, output) = fresh_default_adapters(AdapterConfig::default());
        NESTED_STOP_STATUS.store(1, Ordering::SeqCst);
        assert_eq!(ble_adapter_init(), 0);
        assert_eq!(ble_adapter_start_scan(), 0);
        assert_eq!(ble_adapter_set_scan_callback(Some(stop_scan_from_callback)), 0);

        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            done_tx
                .send(ble_adapter_report_advertisement(0x112233445566, -40))
                .unwrap();
        });
        let status = done_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("report_advertisement did not return");

        assert_eq!(status, 0);
        assert_eq!(NESTED_STOP_STATUS.load(Ordering::SeqCst), 0);
        assert_eq!(ble_adapter_is_scanning(), 0);
        assert_eq!(
            output.lines(),
            vec![
                "Initializing BLE adapter",
                "BLE scan started",
                "BLE device found: 11:22:33:44:55:66",
                "BLE scan stopped",
            ]
        );
        assert_eq!(ble_adapter_set_scan_callback(None), 0);
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        assert_eq!(softbus_radio_init_logging(), 0);
        assert_eq!(softbus_radio_init_logging(), 0);
    }
}
