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

// Process-wide adapters behind the handle-less C functions of
// `ble_adapter.h` and `wifi_direct.h`.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use softbus_radio::{AdapterConfig, BleAdapter, Platform, WifiDirectAdapter};

pub(crate) fn default_ble_adapter() -> MutexGuard<'static, BleAdapter> {
    DEFAULT_BLE_ADAPTER
        .lock()
        .unwrap_or_else(|err_guard| err_guard.into_inner())
}

pub(crate) fn default_wifi_direct_adapter() -> MutexGuard<'static, WifiDirectAdapter> {
    DEFAULT_WIFI_DIRECT_ADAPTER
        .lock()
        .unwrap_or_else(|err_guard| err_guard.into_inner())
}

lazy_static! {
    static ref DEFAULT_BLE_ADAPTER: Mutex<BleAdapter> =
        Mutex::new(Platform::default_ble_adapter(AdapterConfig::from_env()));
    static ref DEFAULT_WIFI_DIRECT_ADAPTER: Mutex<WifiDirectAdapter> =
        Mutex::new(Platform::default_wifi_direct_adapter(AdapterConfig::from_env()));
}
