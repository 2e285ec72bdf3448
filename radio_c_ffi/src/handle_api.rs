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

// Handle-based adapters. Each `*_new` call creates an adapter owned by the
// library; the caller drives it through the returned handle and releases it
// with `*_free`. Unknown handles fail with -1.

use libc::{c_char, c_int};
use log::{error, warn};
use softbus_radio::api::{Advertiser, Radio, Scanner};
use softbus_radio::{
    AdapterConfig, AdapterState, BleAdapter, Platform, RadioError, WifiDirectAdapter,
};

use crate::handle_map::{get_ble_handle_map, get_wifi_direct_handle_map};
use crate::{
    device_name_from_raw, discovered_device, notify_scan_listener, scan_listener, status,
    BleScanCallback,
};

fn with_ble_adapter<F>(call: &str, handle: u64, op: F) -> c_int
where
    F: FnOnce(&mut BleAdapter) -> Result<(), RadioError>,
{
    match get_ble_handle_map().get(&handle) {
        Some(adapter) => status(call, op(adapter)),
        None => {
            error!("{}: unknown BLE adapter handle {:#x}.", call, handle);
            -1
        }
    }
}

fn with_wifi_direct_adapter<F>(call: &str, handle: u64, op: F) -> c_int
where
    F: FnOnce(&mut WifiDirectAdapter) -> Result<(), RadioError>,
{
    match get_wifi_direct_handle_map().get(&handle) {
        Some(adapter) => status(call, op(adapter)),
        None => {
            error!("{}: unknown Wi-Fi Direct adapter handle {:#x}.", call, handle);
            -1
        }
    }
}

/// Creates a BLE adapter configured from `SOFTBUS_RADIO_POLICY` and returns
/// its non-zero handle.
#[no_mangle]
pub extern "C" fn ble_adapter_new() -> u64 {
    get_ble_handle_map().insert(Platform::default_ble_adapter(AdapterConfig::from_env()))
}

/// Releases a BLE adapter, cleaning it up first if needed.
#[no_mangle]
pub extern "C" fn ble_adapter_free(handle: u64) -> c_int {
    let mut adapter = match get_ble_handle_map().remove(&handle) {
        Some(adapter) => adapter,
        None => {
            error!("ble_adapter_free: unknown BLE adapter handle {:#x}.", handle);
            return -1;
        }
    };
    if adapter.state() != AdapterState::Uninitialized {
        if let Err(e) = adapter.cleanup() {
            warn!("Cleanup of freed BLE adapter failed: {}", e);
        }
    }
    0
}

#[no_mangle]
pub extern "C" fn ble_adapter_handle_init(handle: u64) -> c_int {
    with_ble_adapter("ble_adapter_handle_init", handle, |adapter| adapter.init())
}

#[no_mangle]
pub extern "C" fn ble_adapter_handle_cleanup(handle: u64) -> c_int {
    with_ble_adapter("ble_adapter_handle_cleanup", handle, |adapter| {
        adapter.cleanup()
    })
}

#[no_mangle]
pub extern "C" fn ble_adapter_handle_start_scan(handle: u64) -> c_int {
    with_ble_adapter("ble_adapter_handle_start_scan", handle, |adapter| {
        adapter.start_scan()
    })
}

#[no_mangle]
pub extern "C" fn ble_adapter_handle_stop_scan(handle: u64) -> c_int {
    with_ble_adapter("ble_adapter_handle_stop_scan", handle, |adapter| {
        adapter.stop_scan()
    })
}

#[no_mangle]
pub extern "C" fn ble_adapter_handle_set_scan_callback(
    handle: u64,
    callback: BleScanCallback,
) -> c_int {
    with_ble_adapter("ble_adapter_handle_set_scan_callback", handle, |adapter| {
        adapter.set_scan_listener(scan_listener(callback));
        Ok(())
    })
}

#[no_mangle]
pub extern "C" fn ble_adapter_handle_report_advertisement(
    handle: u64,
    address: u64,
    rssi: i8,
) -> c_int {
    let device = discovered_device(address, rssi);
    let accepted = match get_ble_handle_map().get(&handle) {
        Some(adapter) => adapter.accept_advertisement(device),
        None => {
            error!(
                "ble_adapter_handle_report_advertisement: unknown BLE adapter handle {:#x}.",
                handle
            );
            return -1;
        }
    };
    notify_scan_listener("ble_adapter_handle_report_advertisement", accepted, device)
}

/// Creates a Wi-Fi Direct adapter configured from `SOFTBUS_RADIO_POLICY` and
/// returns its non-zero handle.
#[no_mangle]
pub extern "C" fn wifi_direct_new() -> u64 {
    get_wifi_direct_handle_map()
        .insert(Platform::default_wifi_direct_adapter(AdapterConfig::from_env()))
}

/// Releases a Wi-Fi Direct adapter, stopping and cleaning it up first if
/// needed.
#[no_mangle]
pub extern "C" fn wifi_direct_free(handle: u64) -> c_int {
    let mut adapter = match get_wifi_direct_handle_map().remove(&handle) {
        Some(adapter) => adapter,
        None => {
            error!("wifi_direct_free: unknown Wi-Fi Direct adapter handle {:#x}.", handle);
            return -1;
        }
    };
    if adapter.state() != AdapterState::Uninitialized {
        if let Err(e) = adapter.cleanup() {
            warn!("Cleanup of freed Wi-Fi Direct adapter failed: {}", e);
        }
    }
    0
}

#[no_mangle]
pub extern "C" fn wifi_direct_handle_init(handle: u64) -> c_int {
    with_wifi_direct_adapter("wifi_direct_handle_init", handle, |adapter| {
        adapter.init()
    })
}

#[no_mangle]
pub extern "C" fn wifi_direct_handle_cleanup(handle: u64) -> c_int {
    with_wifi_direct_adapter("wifi_direct_handle_cleanup", handle, |adapter| {
        adapter.cleanup()
    })
}

/// # Safety
///
/// `device_name` must be NULL or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn wifi_direct_handle_start_advertising(
    handle: u64,
    device_name: *const c_char,
) -> c_int {
    let device_name = match device_name_from_raw(device_name) {
        Ok(device_name) => device_name,
        Err(e) => return status("wifi_direct_handle_start_advertising", Err(e)),
    };
    with_wifi_direct_adapter("wifi_direct_handle_start_advertising", handle, |adapter| {
        adapter.start_advertising(&device_name)
    })
}

#[no_mangle]
pub extern "C" fn wifi_direct_handle_stop_advertising(handle: u64) -> c_int {
    with_wifi_direct_adapter("wifi_direct_handle_stop_advertising", handle, |adapter| {
        adapter.stop_advertising()
    })
}
