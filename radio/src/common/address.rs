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

use std::fmt;

/// Struct representing a 48-bit BLE Address. Bytes are stored little-endian,
/// the way platform scan APIs hand them over as a `u64`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct BleAddress {
    val: [u8; 6],
}

impl BleAddress {
    /// `BleAddress` constructor. The two most significant bytes of `addr`
    /// are dropped.
    pub fn new(addr: u64) -> Self {
        BleAddress {
            val: u64_to_6lsb(addr),
        }
    }
}

#[inline]
fn u64_to_6lsb(num: u64) -> [u8; 6] {
    let bytes = num.to_le_bytes();
    [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]]
}

impl From<BleAddress> for u64 {
    fn from(addr: BleAddress) -> Self {
        let mut bytes = [0u8; 8];
        bytes[..6].copy_from_slice(&addr.val);

        u64::from_le_bytes(bytes)
    }
}

/// Colon-separated, most significant byte first: `11:22:33:44:55:66`.
impl fmt::Display for BleAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b0, b1, b2, b3, b4, b5] = self.val;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            b5, b4, b3, b2, b1, b0
        )
    }
}
