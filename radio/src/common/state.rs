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

use log::warn;

use super::{LifecyclePolicy, RadioError};

/// Lifecycle of an adapter handle.
///
/// `Active` is "scanning" for BLE and "advertising" for Wi-Fi Direct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AdapterState {
    #[default]
    Uninitialized,
    Initialized,
    Active,
}

/// Operations that drive the lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Init,
    Cleanup,
    Start,
    Stop,
}

/// A call made in a state that does not allow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    AlreadyInitialized,
    NotInitialized,
    AlreadyActive,
    NotActive,
}

impl Violation {
    pub fn into_error(self, adapter: &str) -> RadioError {
        let adapter = adapter.to_string();
        match self {
            Violation::AlreadyInitialized => RadioError::AlreadyInitialized(adapter),
            Violation::NotInitialized => RadioError::NotInitialized(adapter),
            Violation::AlreadyActive => RadioError::AlreadyActive(adapter),
            Violation::NotActive => RadioError::NotActive(adapter),
        }
    }
}

impl AdapterState {
    /// The strict transition table.
    pub fn next(self, op: Operation) -> Result<AdapterState, Violation> {
        use AdapterState::*;
        match (self, op) {
            (Uninitialized, Operation::Init) => Ok(Initialized),
            (Initialized | Active, Operation::Init) => Err(Violation::AlreadyInitialized),

            (Uninitialized, Operation::Cleanup) => Err(Violation::NotInitialized),
            (Initialized | Active, Operation::Cleanup) => Ok(Uninitialized),

            (Uninitialized, Operation::Start) => Err(Violation::NotInitialized),
            (Initialized, Operation::Start) => Ok(Active),
            (Active, Operation::Start) => Err(Violation::AlreadyActive),

            (Uninitialized, Operation::Stop) => Err(Violation::NotInitialized),
            (Initialized, Operation::Stop) => Err(Violation::NotActive),
            (Active, Operation::Stop) => Ok(Initialized),
        }
    }
}

/// What an adapter has to do to carry out an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Whether the driver is called at all.
    pub run_driver: bool,
    /// Stop the running scan/advertisement before the driver call.
    pub stop_first: bool,
    /// State to commit once the driver call succeeds.
    pub target: AdapterState,
}

/// Tracks an adapter's state and applies the configured policy to
/// out-of-order calls.
#[derive(Debug)]
pub struct Lifecycle {
    adapter: &'static str,
    policy: LifecyclePolicy,
    state: AdapterState,
}

impl Lifecycle {
    pub fn new(adapter: &'static str, policy: LifecyclePolicy) -> Self {
        Self {
            adapter,
            policy,
            state: AdapterState::Uninitialized,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    pub fn policy(&self) -> LifecyclePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LifecyclePolicy) {
        self.policy = policy;
    }

    /// Decides how `op` is carried out from the current state. Nothing is
    /// committed until [`Lifecycle::commit`].
    pub fn plan(&self, op: Operation) -> Result<Plan, RadioError> {
        let violation = match self.state.next(op) {
            Ok(target) => {
                return Ok(Plan {
                    run_driver: true,
                    stop_first: op == Operation::Cleanup && self.state == AdapterState::Active,
                    target,
                })
            }
            Err(violation) => violation,
        };

        if self.policy == LifecyclePolicy::Strict {
            return Err(violation.into_error(self.adapter));
        }

        warn!(
            "{} adapter: {:?} while {:?} ({:?}), tolerated by lenient policy.",
            self.adapter, op, self.state, violation
        );
        let plan = match (op, violation) {
            // Repeated init keeps the state; the driver still reports it.
            (Operation::Init, _) => Plan {
                run_driver: true,
                stop_first: false,
                target: self.state,
            },
            (Operation::Cleanup, _) => Plan {
                run_driver: true,
                stop_first: false,
                target: AdapterState::Uninitialized,
            },
            (Operation::Start, _) => Plan {
                run_driver: true,
                stop_first: false,
                target: AdapterState::Active,
            },
            (Operation::Stop, Violation::NotActive) => Plan {
                run_driver: true,
                stop_first: false,
                target: AdapterState::Initialized,
            },
            (Operation::Stop, _) => Plan {
                run_driver: true,
                stop_first: false,
                target: AdapterState::Uninitialized,
            },
        };
        Ok(plan)
    }

    pub fn commit(&mut self, state: AdapterState) {
        self.state = state;
    }
}
