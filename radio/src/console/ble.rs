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

use log::info;

use super::Console;
use crate::api::{Radio, Scanner};
use crate::common::{DiscoveredDevice, RadioError};

/// BLE driver that only reports what it was asked to do.
#[derive(Clone, Default)]
pub struct ConsoleBleDriver {
    console: Console,
}

impl ConsoleBleDriver {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Radio for ConsoleBleDriver {
    fn name(&self) -> &'static str {
        "BLE"
    }

    fn init(&mut self) -> Result<(), RadioError> {
        info!("Initializing BLE adapter");
        self.console.emit_str("Initializing BLE adapter");
        Ok(())
    }

    fn cleanup(&mut self) -> Result<(), RadioError> {
        info!("Cleaning up BLE adapter");
        self.console.emit_str("Cleaning up BLE adapter");
        Ok(())
    }
}

impl Scanner for ConsoleBleDriver {
    fn start_scan(&mut self) -> Result<(), RadioError> {
        info!("BLE scan started");
        self.console.emit_str("BLE scan started");
        Ok(())
    }

    fn stop_scan(&mut self) -> Result<(), RadioError> {
        info!("BLE scan stopped");
        self.console.emit_str("BLE scan stopped");
        Ok(())
    }

    fn device_found(&self, device: &DiscoveredDevice) {
        info!("BLE device found: {} (rssi {})", device.address, device.rssi);
        self.console
            .emit_str(&format!("BLE device found: {}", device.address));
    }
}
