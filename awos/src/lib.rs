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

//! Automated weather observation processing on top of decoded reports.
//!
//! Where the [`metar`] crate turns raw report text into a structured
//! [`metar::Report`], this crate derives what an observation display needs
//! from it:
//!
//! - [`metrics`] converts pressures between units, computes the field-level
//!   QFE and resolves the wind into runway head- and crosswind components,
//! - [`trend`] compares consecutive reports of a station and tells whether a
//!   value moved up or down,
//! - [`history`] keeps the bounded per-station report history the trends are
//!   computed from,
//! - [`reference`] loads the airport and runway reference data the metrics
//!   need for elevations and runway headings.
//!
//! # Examples
//!
//! ```
//! use awos::{history::ReportHistory, trend};
//!
//! # fn main() -> Result<(), metar::Error> {
//! let mut history = ReportHistory::new();
//! history.push(metar::decode("UUEE 121800Z 24015KT 9999 10/03 Q1013")?);
//! history.push(metar::decode("UUEE 121830Z 24018KT 9999 12/03 Q1015")?);
//!
//! let current = history.latest("UUEE").unwrap();
//! let previous = history.previous("UUEE").unwrap();
//!
//! assert_eq!(trend::qnh_trend(current, previous), Some(trend::Trend::Up));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod history;
pub mod metrics;
pub mod reference;
pub mod trend;

pub use error::Error;
