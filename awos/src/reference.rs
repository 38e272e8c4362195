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

//! Airport and runway reference data.
//!
//! The reference data comes as the OurAirports CSV dumps, `airports.csv` and
//! `runways.csv`. Columns are resolved by header name rather than position
//! since the dumps grow columns over time.

use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod constants {
    /// Metres per foot; the dumps report all lengths and elevations in feet.
    pub const METERS_IN_FOOT: f64 = 0.3048;
}

/// When a runway end has no surveyed heading, low-numbered ends default to
/// north and high-numbered ends to south so the two stay opposite.
const DEFAULT_LE_HEADING_DEG: f64 = 0.0;
const DEFAULT_HE_HEADING_DEG: f64 = 180.0;

/// One physical runway with its two ends.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayRecord {
    /// Low-numbered end designator, e.g. `06`.
    pub le_ident: String,
    /// High-numbered end designator, e.g. `24`.
    pub he_ident: String,
    pub le_heading_deg: f64,
    pub he_heading_deg: f64,
    pub le_elevation_m: Option<f64>,
    pub he_elevation_m: Option<f64>,
    pub length_m: f64,
    pub width_m: f64,
    pub surface: String,
}

/// An airport with at least one open runway.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    pub icao: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Field elevation in metres, `0` when the dump has none.
    pub elevation_m: f64,
    pub runways: Vec<RunwayRecord>,
}

impl Airport {
    /// The elevation at a runway end, falling back to the field elevation
    /// when the end has no surveyed elevation of its own.
    pub fn runway_elevation(&self, designator: &str) -> f64 {
        for runway in &self.runways {
            if runway.le_ident == designator {
                return runway.le_elevation_m.unwrap_or(self.elevation_m);
            }
            if runway.he_ident == designator {
                return runway.he_elevation_m.unwrap_or(self.elevation_m);
            }
        }
        self.elevation_m
    }

    /// All runway end designators, sorted and deduplicated.
    pub fn runway_designators(&self) -> Vec<&str> {
        let mut designators: Vec<&str> = self
            .runways
            .iter()
            .flat_map(|runway| [runway.le_ident.as_str(), runway.he_ident.as_str()])
            .filter(|ident| !ident.is_empty() && *ident != "-")
            .collect();
        designators.sort_unstable();
        designators.dedup();
        designators
    }
}

/// The loaded reference data, indexed by ICAO identifier.
#[derive(Clone, Debug, Default)]
pub struct AirportIndex {
    airports: HashMap<String, Airport>,
}

struct Columns {
    file: &'static str,
    headers: StringRecord,
}

impl Columns {
    fn required(&self, column: &'static str) -> Result<usize, Error> {
        self.headers
            .iter()
            .position(|header| header == column)
            .ok_or(Error::MissingColumn {
                file: self.file,
                column,
            })
    }
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn field_f64(record: &StringRecord, index: usize) -> Option<f64> {
    field(record, index).parse().ok()
}

fn feet_to_meters(record: &StringRecord, index: usize) -> Option<f64> {
    field_f64(record, index).map(|ft| ft * constants::METERS_IN_FOOT)
}

fn is_icao(ident: &str) -> bool {
    ident.len() == 4
        && ident
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

impl AirportIndex {
    /// Loads the index from the two OurAirports dumps.
    ///
    /// Closed airports and closed runways are skipped, airports whose
    /// identifier is no four-character ICAO code likewise, and airports left
    /// without a single runway are dropped from the index.
    pub fn from_csv<A: Read, R: Read>(airports: A, runways: R) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(airports);
        let columns = Columns {
            file: "airports.csv",
            headers: reader.headers()?.clone(),
        };
        let ident = columns.required("ident")?;
        let kind = columns.required("type")?;
        let name = columns.required("name")?;
        let latitude = columns.required("latitude_deg")?;
        let longitude = columns.required("longitude_deg")?;
        let elevation = columns.required("elevation_ft")?;

        let mut index: HashMap<String, Airport> = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let icao = field(&record, ident);
            if !is_icao(icao) || field(&record, kind) == "closed" {
                continue;
            }
            index.insert(
                icao.to_string(),
                Airport {
                    icao: icao.to_string(),
                    name: field(&record, name).to_string(),
                    latitude: field_f64(&record, latitude).unwrap_or(0.0),
                    longitude: field_f64(&record, longitude).unwrap_or(0.0),
                    elevation_m: feet_to_meters(&record, elevation).unwrap_or(0.0),
                    runways: Vec::new(),
                },
            );
        }

        let mut reader = ReaderBuilder::new().flexible(true).from_reader(runways);
        let columns = Columns {
            file: "runways.csv",
            headers: reader.headers()?.clone(),
        };
        let airport_ident = columns.required("airport_ident")?;
        let closed = columns.required("closed")?;
        let le_ident = columns.required("le_ident")?;
        let he_ident = columns.required("he_ident")?;
        let le_heading = columns.required("le_heading_degT")?;
        let he_heading = columns.required("he_heading_degT")?;
        let le_elevation = columns.required("le_elevation_ft")?;
        let he_elevation = columns.required("he_elevation_ft")?;
        let length = columns.required("length_ft")?;
        let width = columns.required("width_ft")?;
        let surface = columns.required("surface")?;

        for record in reader.records() {
            let record = record?;
            if field(&record, closed) == "1" {
                continue;
            }
            let Some(airport) = index.get_mut(field(&record, airport_ident)) else {
                continue;
            };
            airport.runways.push(RunwayRecord {
                le_ident: field(&record, le_ident).to_string(),
                he_ident: field(&record, he_ident).to_string(),
                le_heading_deg: field_f64(&record, le_heading).unwrap_or(DEFAULT_LE_HEADING_DEG),
                he_heading_deg: field_f64(&record, he_heading).unwrap_or(DEFAULT_HE_HEADING_DEG),
                le_elevation_m: feet_to_meters(&record, le_elevation),
                he_elevation_m: feet_to_meters(&record, he_elevation),
                length_m: feet_to_meters(&record, length).unwrap_or(0.0),
                width_m: feet_to_meters(&record, width).unwrap_or(0.0),
                surface: field(&record, surface).to_string(),
            });
        }

        index.retain(|_, airport| !airport.runways.is_empty());
        debug!("loaded reference data for {} airports", index.len());

        Ok(Self { airports: index })
    }

    /// Looks up an airport, ignoring the query's case.
    pub fn find(&self, icao: &str) -> Option<&Airport> {
        self.airports.get(&icao.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}
