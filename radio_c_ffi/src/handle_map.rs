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

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use rand::Rng;
use softbus_radio::{BleAdapter, WifiDirectAdapter};

/// Owns adapters created through the handle API. C callers only ever see the
/// random `u64` key, never a pointer into Rust memory.
pub(crate) struct HandleMap<T> {
    map: HashMap<u64, T>,
}

impl<T> HandleMap<T> {
    pub(crate) fn init() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Inserts an entry and returns its randomly generated, non-zero handle.
    pub(crate) fn insert(&mut self, data: T) -> u64 {
        let mut rng = rand::thread_rng();
        let mut handle: u64 = rng.gen();

        while handle == 0 || self.map.contains_key(&handle) {
            handle = rng.gen();
        }

        self.map.insert(handle, data);
        handle
    }

    /// Removes an entry at a given handle returning an Option of the owned value
    pub(crate) fn remove(&mut self, handle: &u64) -> Option<T> {
        self.map.remove(handle)
    }

    /// Gets a reference to the entry stored at the specified handle
    pub(crate) fn get(&mut self, handle: &u64) -> Option<&mut T> {
        self.map.get_mut(handle)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}

pub(crate) fn get_ble_handle_map() -> MutexGuard<'static, HandleMap<BleAdapter>> {
    BLE_HANDLE_MAP
        .lock()
        .unwrap_or_else(|err_guard| err_guard.into_inner())
}

pub(crate) fn get_wifi_direct_handle_map() -> MutexGuard<'static, HandleMap<WifiDirectAdapter>> {
    WIFI_DIRECT_HANDLE_MAP
        .lock()
        .unwrap_or_else(|err_guard| err_guard.into_inner())
}

lazy_static! {
    static ref BLE_HANDLE_MAP: Mutex<HandleMap<BleAdapter>> = Mutex::new(HandleMap::init());
    static ref WIFI_DIRECT_HANDLE_MAP: Mutex<HandleMap<WifiDirectAdapter>> =
        Mutex::new(HandleMap::init());
}
