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
use crate::api::{Advertiser, Radio};
use crate::common::{DeviceName, RadioError};

/// Wi-Fi Direct driver that only reports what it was asked to do.
#[derive(Clone, Default)]
pub struct ConsoleWifiDirectDriver {
    console: Console,
}

impl ConsoleWifiDirectDriver {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Radio for ConsoleWifiDirectDriver {
    fn name(&self) -> &'static str {
        "Wi-Fi Direct"
    }

    fn init(&mut self) -> Result<(), RadioError> {
        info!("Initializing Wi-Fi Direct adapter");
        self.console.emit_str("Initializing Wi-Fi Direct adapter");
        Ok(())
    }

    fn cleanup(&mut self) -> Result<(), RadioError> {
        info!("Cleaning up Wi-Fi Direct adapter");
        self.console.emit_str("Cleaning up Wi-Fi Direct adapter");
        Ok(())
    }
}

impl Advertiser for ConsoleWifiDirectDriver {
    fn start_advertising(&mut self, device_name: &DeviceName) -> Result<(), RadioError> {
        info!("Starting Wi-Fi Direct advertising as: {}", device_name);
        self.console.emit(&[
            b"Starting Wi-Fi Direct advertising as: ",
            device_name.as_bytes(),
        ]);
        Ok(())
    }

    fn stop_advertising(&mut self) -> Result<(), RadioError> {
        info!("Stopping Wi-Fi Direct advertising");
        self.console.emit_str("Stopping Wi-Fi Direct advertising");
        Ok(())
    }
}
