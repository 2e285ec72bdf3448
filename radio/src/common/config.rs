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

use std::env;

use log::warn;

use super::WPS_DEVICE_NAME_MAX_LEN;

/// Environment variable consulted by [`AdapterConfig::from_env`].
pub const POLICY_ENV_VAR: &str = "SOFTBUS_RADIO_POLICY";

/// How an adapter reacts to calls made in the wrong lifecycle state, e.g.
/// `start_scan()` before `init()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LifecyclePolicy {
    /// Log a warning and carry on. The driver still runs, so a double
    /// `init()` or a `cleanup()` while uninitialized is still reported.
    #[default]
    Lenient,
    /// Fail the call without touching the driver.
    Strict,
}

impl LifecyclePolicy {
    /// Parses `strict` or `lenient`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(LifecyclePolicy::Lenient),
            "strict" => Some(LifecyclePolicy::Strict),
            _ => None,
        }
    }
}

/// Options shared by every adapter handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AdapterConfig {
    pub policy: LifecyclePolicy,
    /// Upper bound on advertised device names, in bytes. Only enforced under
    /// [`LifecyclePolicy::Strict`].
    pub max_device_name_len: Option<usize>,
}

impl AdapterConfig {
    pub fn strict() -> Self {
        Self {
            policy: LifecyclePolicy::Strict,
            max_device_name_len: Some(WPS_DEVICE_NAME_MAX_LEN),
        }
    }

    pub fn lenient() -> Self {
        Self::default()
    }

    /// Builds the configuration named by `SOFTBUS_RADIO_POLICY`, defaulting
    /// to lenient.
    pub fn from_env() -> Self {
        Self::from_policy_value(env::var(POLICY_ENV_VAR).ok().as_deref())
    }

    fn from_policy_value(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        match LifecyclePolicy::parse(value) {
            Some(LifecyclePolicy::Strict) => Self::strict(),
            Some(LifecyclePolicy::Lenient) => Self::lenient(),
            None => {
                warn!(
                    "Unknown {} value {:?}, falling back to lenient.",
                    POLICY_ENV_VAR, value
                );
                Self::default()
            }
        }
    }

    pub fn with_policy(mut self, policy: LifecyclePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_device_name_len(mut self, max_len: Option<usize>) -> Self {
        self.max_device_name_len = max_len;
        self
    }
}
