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

use super::Radio;
use crate::common::{DiscoveredDevice, RadioError};

/// Concrete types implementing this trait are BLE Central radios that can
/// look for nearby advertisements.
pub trait Scanner: Radio {
    /// Begin scanning for nearby advertisements.
    fn start_scan(&mut self) -> Result<(), RadioError>;

    /// Stop scanning for nearby advertisements.
    fn stop_scan(&mut self) -> Result<(), RadioError>;

    /// Called for each device accepted while scanning.
    fn device_found(&self, _device: &DiscoveredDevice) {}
}

/// Receives devices found while a scan is running. Listeners are shared, so
/// the adapter can be released before a listener runs.
pub trait ScanListener: Send + Sync {
    fn on_device_found(&self, device: DiscoveredDevice);
}
