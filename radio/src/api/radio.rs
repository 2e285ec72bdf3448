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

use crate::common::RadioError;

/// Lifecycle shared by every radio: platform drivers as well as the guarded
/// adapter handles wrapping them.
pub trait Radio {
    /// Human readable radio name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Acquire the platform radio.
    fn init(&mut self) -> Result<(), RadioError>;

    /// Release the platform radio.
    fn cleanup(&mut self) -> Result<(), RadioError>;
}
