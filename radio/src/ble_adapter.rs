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

use std::sync::Arc;

use log::debug;

use crate::api::{Radio, ScanListener, Scanner};
use crate::common::{
    AdapterConfig, AdapterState, DiscoveredDevice, Lifecycle, LifecyclePolicy, Operation,
    RadioError,
};
use crate::console::ConsoleBleDriver;

/// Owned BLE adapter handle. Wraps a platform [`Scanner`] and only lets
/// calls through in the order the lifecycle allows, per the configured
/// [`LifecyclePolicy`].
pub struct BleAdapter<D: Scanner = ConsoleBleDriver> {
    driver: D,
    lifecycle: Lifecycle,
    listener: Option<Arc<dyn ScanListener>>,
}

impl<D: Scanner> BleAdapter<D> {
    pub fn new(driver: D, config: AdapterConfig) -> Self {
        Self {
            lifecycle: Lifecycle::new(driver.name(), config.policy),
            driver,
            listener: None,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.lifecycle.state()
    }

    pub fn is_scanning(&self) -> bool {
        self.state() == AdapterState::Active
    }

    pub fn policy(&self) -> LifecyclePolicy {
        self.lifecycle.policy()
    }

    /// Applies a new configuration. The current state is kept.
    pub fn configure(&mut self, config: AdapterConfig) {
        self.lifecycle.set_policy(config.policy);
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Registers the listener for devices found while scanning, replacing
    /// any previous one. `None` unregisters.
    pub fn set_scan_listener(&mut self, listener: Option<Arc<dyn ScanListener>>) {
        self.listener = listener;
    }

    /// Entry point for the platform to hand over a received advertisement.
    /// Reports arriving while no scan runs are dropped.
    pub fn report_advertisement(&self, device: DiscoveredDevice) -> Result<(), RadioError> {
        if let Some(listener) = self.accept_advertisement(device)? {
            listener.on_device_found(device);
        }
        Ok(())
    }

    /// Checks that a scan is running and reports `device` to the driver.
    /// The listener is returned, not notified. Callers holding the adapter
    /// behind a lock must release it before notifying.
    pub fn accept_advertisement(
        &self,
        device: DiscoveredDevice,
    ) -> Result<Option<Arc<dyn ScanListener>>, RadioError> {
        if !self.is_scanning() {
            debug!("Dropping advertisement from {}: not scanning.", device.address);
            return Err(RadioError::NotActive(self.driver.name().to_string()));
        }
        self.driver.device_found(&device);
        Ok(self.listener.clone())
    }

    fn apply<F>(&mut self, op: Operation, call: F) -> Result<(), RadioError>
    where
        F: FnOnce(&mut D) -> Result<(), RadioError>,
    {
        let plan = self.lifecycle.plan(op)?;
        if plan.stop_first {
            self.driver.stop_scan()?;
            self.lifecycle.commit(AdapterState::Initialized);
        }
        if plan.run_driver {
            call(&mut self.driver)?;
        }
        debug!("BLE adapter {:?}: {:?} -> {:?}", op, self.state(), plan.target);
        self.lifecycle.commit(plan.target);
        Ok(())
    }
}

impl Default for BleAdapter<ConsoleBleDriver> {
    fn default() -> Self {
        Self::new(ConsoleBleDriver::default(), AdapterConfig::default())
    }
}

impl<D: Scanner> Radio for BleAdapter<D> {
    fn name(&self) -> &'static str {
        self.driver.name()
    }

    fn init(&mut self) -> Result<(), RadioError> {
        self.apply(Operation::Init, |driver| driver.init())
    }

    fn cleanup(&mut self) -> Result<(), RadioError> {
        self.apply(Operation::Cleanup, |driver| driver.cleanup())
    }
}

impl<D: Scanner> Scanner for BleAdapter<D> {
    fn start_scan(&mut self) -> Result<(), RadioError> {
        self.apply(Operation::Start, |driver| driver.start_scan())
    }

    fn stop_scan(&mut self) -> Result<(), RadioError> {
        self.apply(Operation::Stop, |driver| driver.stop_scan())
    }

    fn device_found(&self, device: &DiscoveredDevice) {
        self.driver.device_found(device);
    }
}
