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

//! Radio adapters for soft bus device discovery: BLE scanning and Wi-Fi
//! Direct advertising behind owned, lifecycle-checked handles.

pub mod api;
mod ble_adapter;
mod common;
pub mod console;
mod wifi_direct_adapter;

pub use ble_adapter::BleAdapter;
pub use common::{
    to_status, AdapterConfig, AdapterState, BleAddress, DeviceName, DiscoveredDevice,
    LifecyclePolicy, Operation, RadioError, POLICY_ENV_VAR, STATUS_FAILURE, STATUS_OK,
    WPS_DEVICE_NAME_MAX_LEN,
};
pub use wifi_direct_adapter::WifiDirectAdapter;

use console::{Console, ConsoleBleDriver, ConsoleWifiDirectDriver};

/// Library version, reported to C callers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Platform;

impl Platform {
    /// BLE adapter backed by the default driver for this platform.
    pub fn default_ble_adapter(config: AdapterConfig) -> BleAdapter {
        Self::ble_adapter_with_console(Console::stdout(), config)
    }

    /// Wi-Fi Direct adapter backed by the default driver for this platform.
    pub fn default_wifi_direct_adapter(config: AdapterConfig) -> WifiDirectAdapter {
        Self::wifi_direct_adapter_with_console(Console::stdout(), config)
    }

    pub fn ble_adapter_with_console(console: Console, config: AdapterConfig) -> BleAdapter {
        BleAdapter::new(ConsoleBleDriver::new(console), config)
    }

    pub fn wifi_direct_adapter_with_console(
        console: Console,
        config: AdapterConfig,
    ) -> WifiDirectAdapter {
        WifiDirectAdapter::new(ConsoleWifiDirectDriver::new(console), config)
    }
}
