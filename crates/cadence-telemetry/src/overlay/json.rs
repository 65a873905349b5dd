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

//! Line-delimited JSON export of statistics snapshots.

use super::StatsSink;
use cadence_core::{CompactSnapshot, DetailedSnapshot, TelemetryError, TelemetryResult};
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;

/// Writes each published snapshot as one JSON object per line, suitable
/// for ingestion by external tooling.
#[derive(Debug)]
pub struct JsonLineExporter<W: Write + Send + Debug> {
    out: W,
}

impl<W: Write + Send + Debug> JsonLineExporter<W> {
    /// Wraps a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the exporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, kind: &str, snapshot: &T) -> TelemetryResult<()> {
        let record = Record { kind, snapshot };
        serde_json::to_writer(&mut self.out, &record)
            .map_err(|error| TelemetryError::Sink(error.to_string()))?;
        self.out
            .write_all(b"\n")
            .map_err(|error| TelemetryError::Sink(error.to_string()))
    }
}

#[derive(Serialize)]
struct Record<'a, T: Serialize> {
    kind: &'a str,
    #[serde(flatten)]
    snapshot: &'a T,
}

impl<W: Write + Send + Debug> StatsSink for JsonLineExporter<W> {
    fn publish_compact(&mut self, snapshot: &CompactSnapshot) -> TelemetryResult<()> {
        self.write_line("compact", snapshot)
    }

    fn publish_detailed(
        &mut self,
        snapshot: &DetailedSnapshot,
        _graphs: bool,
    ) -> TelemetryResult<()> {
        self.write_line("detailed", snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_parseable_object_per_snapshot() {
        let mut exporter = JsonLineExporter::new(Vec::new());
        exporter
            .publish_compact(&CompactSnapshot {
                frame_rate: 144,
                round_trip_ms: Some(21),
            })
            .unwrap();
        exporter
            .publish_compact(&CompactSnapshot {
                frame_rate: 143,
                round_trip_ms: None,
            })
            .unwrap();

        let written = String::from_utf8(exporter.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["kind"], "compact");
        assert_eq!(first["frame_rate"], 144);
        assert_eq!(first["round_trip_ms"], 21);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["round_trip_ms"], serde_json::Value::Null);
    }
}
