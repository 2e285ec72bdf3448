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

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;

use super::RadioError;

/// Longest device name a Wi-Fi Direct peer will carry in the WPS Device Name
/// attribute.
pub const WPS_DEVICE_NAME_MAX_LEN: usize = 32;

/// A device name owned by the adapter.
///
/// Names arriving from C are copied out of the caller's buffer, so the
/// pointer is never held past the call that passed it. The raw bytes are
/// kept as-is: a name is not required to be UTF-8 and is written to the
/// console byte-for-byte.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DeviceName(Vec<u8>);

impl DeviceName {
    /// Copies the bytes of a NUL-terminated C string, without the terminator.
    pub fn from_c_str(name: &CStr) -> Self {
        Self(name.to_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 rendering, for logs.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Rejects names longer than `max_len` bytes.
    pub fn check_len(&self, max_len: usize) -> Result<(), RadioError> {
        if self.0.len() > max_len {
            return Err(RadioError::InvalidDeviceName(format!(
                "{} bytes exceeds the {} byte limit",
                self.0.len(),
                max_len
            )));
        }
        Ok(())
    }
}

impl From<&str> for DeviceName {
    fn from(name: &str) -> Self {
        Self(name.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for DeviceName {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceName({:?})", self.to_string_lossy())
    }
}
