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
use crate::common::{DeviceName, RadioError};

/// Concrete types implementing this trait make the local device visible to
/// Wi-Fi Direct peers under a device name.
pub trait Advertiser: Radio {
    /// Begin advertising as `device_name`. Implementations copy what they
    /// need; the name is not borrowed past the call.
    fn start_advertising(&mut self, device_name: &DeviceName) -> Result<(), RadioError>;

    /// Stop advertising.
    fn stop_advertising(&mut self) -> Result<(), RadioError>;
}
