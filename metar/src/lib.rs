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

//! METAR weather report decoder.
//!
//! This crate decodes raw METAR text into a structured [`Report`]. Each
//! whitespace-delimited token of the report body is matched against a closed
//! set of [`Token`] categories in a fixed priority order; tokens that match
//! no category are dropped so that a partially garbled report still decodes
//! on a best-effort basis. The free-text remarks section after `RMK` uses a
//! smaller grammar of its own and contributes the QFE and QBB
//! [`SpecialConditions`].
//!
//! # Examples
//!
//! Decode a report and read a few of its fields:
//!
//! ```
//! # fn main() -> Result<(), metar::Error> {
//! let report = metar::decode(
//!     "UUEE 121830Z 24015G20KT 210V270 9999 BKN020 10/03 Q1013 RMK QFE745/0993",
//! )?;
//!
//! assert_eq!(report.station_id, "UUEE");
//! assert_eq!(report.wind.direction, Some(240));
//! assert_eq!(report.wind.gust, 20);
//! assert_eq!(report.qnh_hpa, 1013);
//! assert_eq!(report.special_conditions.qfe_hpa, Some(993));
//! # Ok(())
//! # }
//! ```

mod cloud;
mod error;
mod remarks;
mod report;
mod runway;
mod token;
mod wind;

pub use cloud::{CloudCoverage, CloudLayer, ConvectiveType};
pub use error::Error;
pub use remarks::SpecialConditions;
pub use report::{decode, Report};
pub use runway::{DepositDepth, RunwayState, RvrPrefix, RvrReading, RvrValue, StateRunway};
pub use token::{classify, Token};
pub use wind::{Wind, WindSector, WindUnit};
