// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Host device identification via `sysinfo`.

use sysinfo::System;

/// Returns a one-line descriptor of the host, e.g.
/// `"AMD Ryzen 9 5950X / Ubuntu 24.04"`.
///
/// Intended to be captured once at startup and carried verbatim in
/// detailed snapshots. Unknown fields degrade to placeholders, never an
/// error.
pub fn host_device_label() -> String {
    let mut system = System::new();
    system.refresh_cpu_all();

    let cpu = system
        .cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "Unknown CPU".to_string());

    let os = match (System::name(), System::os_version()) {
        (Some(name), Some(version)) => format!("{name} {version}"),
        (Some(name), None) => name,
        _ => "unknown OS".to_string(),
    };

    format!("{cpu} / {os}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_has_both_halves() {
        let label = host_device_label();
        assert!(label.contains(" / "));
        assert!(!label.starts_with(" /"));
    }
}
