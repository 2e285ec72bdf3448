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

//! Drivers that stand in for platform radio integrations. They perform no
//! radio work; each operation is reported as a diagnostic line on a
//! [`Console`] and as a `log` record.

mod ble;
mod wifi_direct;

pub use ble::ConsoleBleDriver;
pub use wifi_direct::ConsoleWifiDirectDriver;

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Line-oriented diagnostic output. Clones share the same writer.
#[derive(Clone)]
pub struct Console {
    sink: Sink,
}

impl Console {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// A console writing into memory, and a handle to read it back.
    pub fn capture() -> (Self, CapturedOutput) {
        let output = CapturedOutput::default();
        (Self::with_writer(output.clone()), output)
    }

    /// Writes the concatenation of `parts` followed by a newline. Parts are
    /// written byte-for-byte so non-UTF-8 device names survive.
    pub fn emit(&self, parts: &[&[u8]]) {
        let mut sink = lock(&self.sink);
        let result = parts
            .iter()
            .try_for_each(|part| sink.write_all(part))
            .and_then(|_| sink.write_all(b"\n"))
            .and_then(|_| sink.flush());
        if let Err(e) = result {
            warn!("Failed to write diagnostic line: {}", e);
        }
    }

    pub fn emit_str(&self, line: &str) {
        self.emit(&[line.as_bytes()]);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

/// In-memory console contents.
#[derive(Clone, Default)]
pub struct CapturedOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    pub fn contents(&self) -> Vec<u8> {
        lock(&self.buf).clone()
    }

    pub fn contains(&self, needle: &[u8]) -> bool {
        let buf = lock(&self.buf);
        needle.is_empty() || buf.windows(needle.len()).any(|window| window == needle)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&lock(&self.buf))
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn clear(&self) {
        lock(&self.buf).clear();
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        lock(&self.buf).extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// A panic while holding the lock leaves only diagnostic bytes behind, so the
// poisoned guard is still usable.
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|err_guard| err_guard.into_inner())
}
