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

mod address;
mod config;
mod device_name;
mod error;
mod state;

pub use address::BleAddress;
pub use config::{AdapterConfig, LifecyclePolicy, POLICY_ENV_VAR};
pub use device_name::{DeviceName, WPS_DEVICE_NAME_MAX_LEN};
pub use error::{to_status, RadioError, STATUS_FAILURE, STATUS_OK};
pub use state::{AdapterState, Lifecycle, Operation};

/// A BLE advertisement reported by the platform while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscoveredDevice {
    pub address: BleAddress,
    pub rssi: i8,
}

impl DiscoveredDevice {
    pub fn new(address: BleAddress, rssi: i8) -> Self {
        Self { address, rssi }
    }
}
