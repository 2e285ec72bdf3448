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

use log::debug;

use crate::api::{Advertiser, Radio};
use crate::common::{
    AdapterConfig, AdapterState, DeviceName, Lifecycle, LifecyclePolicy, Operation, RadioError,
};
use crate::console::ConsoleWifiDirectDriver;

/// Owned Wi-Fi Direct adapter handle. Wraps a platform [`Advertiser`] and
/// enforces the lifecycle per the configured [`LifecyclePolicy`].
pub struct WifiDirectAdapter<D: Advertiser = ConsoleWifiDirectDriver> {
    driver: D,
    lifecycle: Lifecycle,
    max_device_name_len: Option<usize>,
    device_name: Option<DeviceName>,
}

impl<D: Advertiser> WifiDirectAdapter<D> {
    pub fn new(driver: D, config: AdapterConfig) -> Self {
        Self {
            lifecycle: Lifecycle::new(driver.name(), config.policy),
            driver,
            max_device_name_len: config.max_device_name_len,
            device_name: None,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.lifecycle.state()
    }

    pub fn is_advertising(&self) -> bool {
        self.state() == AdapterState::Active
    }

    /// Name currently advertised, if any.
    pub fn current_device_name(&self) -> Option<&DeviceName> {
        self.device_name.as_ref()
    }

    pub fn policy(&self) -> LifecyclePolicy {
        self.lifecycle.policy()
    }

    /// Applies a new configuration. The current state and the advertised
    /// name are kept.
    pub fn configure(&mut self, config: AdapterConfig) {
        self.lifecycle.set_policy(config.policy);
        self.max_device_name_len = config.max_device_name_len;
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    fn apply<F>(&mut self, op: Operation, call: F) -> Result<(), RadioError>
    where
        F: FnOnce(&mut D) -> Result<(), RadioError>,
    {
        let plan = self.lifecycle.plan(op)?;
        if plan.stop_first {
            self.driver.stop_advertising()?;
            self.device_name = None;
            self.lifecycle.commit(AdapterState::Initialized);
        }
        if plan.run_driver {
            call(&mut self.driver)?;
        }
        debug!(
            "Wi-Fi Direct adapter {:?}: {:?} -> {:?}",
            op,
            self.state(),
            plan.target
        );
        self.lifecycle.commit(plan.target);
        if plan.target != AdapterState::Active {
            self.device_name = None;
        }
        Ok(())
    }
}

impl Default for WifiDirectAdapter<ConsoleWifiDirectDriver> {
    fn default() -> Self {
        Self::new(ConsoleWifiDirectDriver::default(), AdapterConfig::default())
    }
}

impl<D: Advertiser> Radio for WifiDirectAdapter<D> {
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

impl<D: Advertiser> Advertiser for WifiDirectAdapter<D> {
    fn start_advertising(&mut self, device_name: &DeviceName) -> Result<(), RadioError> {
        if self.policy() == LifecyclePolicy::Strict {
            if let Some(max_len) = self.max_device_name_len {
                device_name.check_len(max_len)?;
            }
        }
        self.apply(Operation::Start, |driver| {
            driver.start_advertising(device_name)
        })?;
        self.device_name = Some(device_name.clone());
        Ok(())
    }

    fn stop_advertising(&mut self) -> Result<(), RadioError> {
        self.apply(Operation::Stop, |driver| driver.stop_advertising())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{CapturedOutput, Console};

    fn adapter(config: AdapterConfig) -> (WifiDirectAdapter, CapturedOutput) {
        let (console, output) = Console::capture();
        (
            WifiDirectAdapter::new(ConsoleWifiDirectDriver::new(console), config),
            output,
        )
    }

    #[test]
    fn test_wifi_direct_adapter_creation() {
        let (adapter, _) = adapter(AdapterConfig::default());
        assert_eq!(adapter.state(), AdapterState::Uninitialized);
        assert_eq!(adapter.name(), "Wi-Fi Direct");
        assert!(adapter.current_device_name().is_none());
    }

    #[test]
    fn advertising_records_the_name() {
        let (mut adapter, output) = adapter(AdapterConfig::strict());
        adapter.init().unwrap();
        adapter.start_advertising(&DeviceName::from("DeviceA")).unwrap();
        assert!(adapter.is_advertising());
        assert_eq!(
            adapter.current_device_name(),
            Some(&DeviceName::from("DeviceA"))
        );
        assert!(output.contains(b"Starting Wi-Fi Direct advertising as: DeviceA"));

        adapter.stop_advertising().unwrap();
        assert!(!adapter.is_advertising());
        assert!(adapter.current_device_name().is_none());
    }

    #[test]
    fn lenient_accepts_any_order_and_any_name() {
        let (mut adapter, output) = adapter(AdapterConfig::lenient());
        adapter.stop_advertising().unwrap();
        adapter.start_advertising(&DeviceName::from("")).unwrap();
        let long_name = DeviceName::from("n".repeat(200).as_str());
        adapter.start_advertising(&long_name).unwrap();
        assert_eq!(adapter.current_device_name(), Some(&long_name));
        adapter.cleanup().unwrap();
        let lines = output.lines();
        assert_eq!(lines[0], "Stopping Wi-Fi Direct advertising");
        assert_eq!(lines[1], "Starting Wi-Fi Direct advertising as: ");
        assert_eq!(
            lines[2],
            format!("Starting Wi-Fi Direct advertising as: {}", "n".repeat(200))
        );
    }

    #[test]
    fn strict_rejects_overlong_names_before_the_driver() {
        let (mut adapter, output) = adapter(AdapterConfig::strict());
        adapter.init().unwrap();
        output.clear();
        let long_name = DeviceName::from("n".repeat(33).as_str());
        assert!(matches!(
            adapter.start_advertising(&long_name),
            Err(RadioError::InvalidDeviceName(_))
        ));
        assert_eq!(adapter.state(), AdapterState::Initialized);
        assert!(output.contents().is_empty());
    }

    #[test]
    fn configure_switches_policy_in_place() {
        let (mut adapter, _) = adapter(AdapterConfig::lenient());
        adapter.start_advertising(&DeviceName::from("DeviceA")).unwrap();
        adapter.configure(AdapterConfig::strict());
        assert!(adapter.is_advertising());
        assert_eq!(adapter.policy(), LifecyclePolicy::Strict);
        assert!(matches!(
            adapter.start_advertising(&DeviceName::from("DeviceB")),
            Err(RadioError::AlreadyActive(_))
        ));
    }

    #[test]
    fn strict_rejects_advertising_before_init() {
        let (mut adapter, _) = adapter(AdapterConfig::strict());
        assert_eq!(
            adapter.start_advertising(&DeviceName::from("DeviceA")),
            Err(RadioError::NotInitialized(String::from("Wi-Fi Direct")))
        );
        assert!(adapter.current_device_name().is_none());
    }

    #[test]
    fn cleanup_while_advertising_stops_first() {
        let (mut adapter, output) = adapter(AdapterConfig::default());
        adapter.init().unwrap();
        adapter.start_advertising(&DeviceName::from("DeviceA")).unwrap();
        adapter.cleanup().unwrap();
        assert_eq!(adapter.state(), AdapterState::Uninitialized);
        assert!(adapter.current_device_name().is_none());
        assert_eq!(
            output.lines(),
            vec![
                "Initializing Wi-Fi Direct adapter",
                "Starting Wi-Fi Direct advertising as: DeviceA",
                "Stopping Wi-Fi Direct advertising",
                "Cleaning up Wi-Fi Direct adapter",
            ]
        );
    }
}
