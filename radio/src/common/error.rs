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

use std::os::raw::c_int;

use thiserror::Error;

/// Status code returned across the C boundary on success.
pub const STATUS_OK: c_int = 0;
/// Status code returned across the C boundary on any failure.
pub const STATUS_FAILURE: c_int = -1;

/// Library error type.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadioError {
    /// The operation needs an initialized adapter, e.g. `start_scan()` before
    /// `init()`.
    #[error("{0} adapter is not initialized")]
    NotInitialized(String),
    /// `init()` was called on an adapter that is already initialized.
    #[error("{0} adapter is already initialized")]
    AlreadyInitialized(String),
    /// The adapter is already scanning or advertising.
    #[error("{0} adapter is already active")]
    AlreadyActive(String),
    /// The operation needs an active adapter, e.g. `stop_scan()` without a
    /// prior `start_scan()`.
    #[error("{0} adapter is not active")]
    NotActive(String),
    /// Reported when a device name fails validation, or a null name pointer
    /// is passed in from C.
    #[error("invalid device name: {0}")]
    InvalidDeviceName(String),
    /// The platform has no driver for this radio.
    #[error("radio operation not supported by system: {0}")]
    NotSupported(String),
    /// Reported when a bug occurs inside the library. Whenever a seemingly
    /// impossible error condition arises where you could call `expect()`,
    /// return this error instead.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RadioError {
    /// Collapses the error into the C status convention. Every failure kind
    /// is `-1`; callers that need the kind read the log.
    pub fn status(&self) -> c_int {
        STATUS_FAILURE
    }
}

/// Maps a library result onto the `0` / `-1` convention of the C headers.
pub fn to_status<T>(result: Result<T, RadioError>) -> c_int {
    match result {
        Ok(_) => STATUS_OK,
        Err(err) => err.status(),
    }
}
