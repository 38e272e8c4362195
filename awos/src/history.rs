// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 the awos authors
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

//! Bounded per-station report history, the source of the previous sample
//! trends compare against.

use std::collections::{HashMap, VecDeque};

use log::debug;

use metar::Report;

/// Reports kept per station before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 10;

/// A bounded first-in first-out history of reports, keyed by station.
#[derive(Clone, Debug)]
pub struct ReportHistory {
    capacity: usize,
    stations: HashMap<String, VecDeque<Report>>,
}

impl ReportHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A history keeping at most `capacity` reports per station. A capacity
    /// of zero is raised to one so the latest report is always retained.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            stations: HashMap::new(),
        }
    }

    /// Appends a report to its station's history, evicting the oldest entry
    /// once the station is at capacity.
    pub fn push(&mut self, report: Report) {
        let reports = self.stations.entry(report.station_id.clone()).or_default();
        if reports.len() == self.capacity {
            reports.pop_front();
            debug!("history for {} at capacity, dropped oldest report", report.station_id);
        }
        reports.push_back(report);
    }

    /// The most recent report of a station.
    pub fn latest(&self, station: &str) -> Option<&Report> {
        self.stations.get(station)?.back()
    }

    /// The report before the most recent one, the comparison sample for
    /// trend computation.
    pub fn previous(&self, station: &str) -> Option<&Report> {
        let reports = self.stations.get(station)?;
        if reports.len() < 2 {
            return None;
        }
        reports.get(reports.len() - 2)
    }

    /// Reports currently held for a station.
    pub fn len(&self, station: &str) -> usize {
        self.stations.get(station).map_or(0, VecDeque::len)
    }

    pub fn is_empty(&self, station: &str) -> bool {
        self.len(station) == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ReportHistory {
    fn default() -> Self {
        Self::new()
    }
}
