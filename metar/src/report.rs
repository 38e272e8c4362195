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

//! The decoded report and the decoder entry point.

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cloud::CloudLayer;
use crate::error::Error;
use crate::remarks::{self, SpecialConditions};
use crate::runway::{RunwayState, RvrReading, StateRunway};
use crate::token::{classify, Token};
use crate::wind::{Wind, WindUnit};

/// Knots per metre per second, for live wind overrides on reports that carry
/// their wind in metres per second.
const KNOTS_IN_MPS: f64 = 1.944;

/// A decoded report.
///
/// Fields a report does not carry keep their unreported value: `None` for
/// optional groups, `0` for the QNH, empty vectors for repeatable groups.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    /// The reporting station, the first token of the report.
    pub station_id: String,
    /// Raw observation timestamp, e.g. `121830Z`.
    pub observation_time: Option<String>,
    /// Surface wind.
    pub wind: Wind,
    /// Prevailing visibility in metres.
    pub visibility_m: Option<u32>,
    /// Air temperature in degrees Celsius.
    pub temperature_c: Option<i16>,
    /// Dewpoint in degrees Celsius.
    pub dewpoint_c: Option<i16>,
    /// QNH in hectopascals, `0` when unreported.
    pub qnh_hpa: u16,
    /// Cloud layers in report order.
    pub cloud_layers: Vec<CloudLayer>,
    /// Raw weather phenomenon codes in report order, e.g. `+TSRA`.
    pub weather_phenomena: Vec<String>,
    /// Runway visual range groups in report order.
    pub rvr_readings: Vec<RvrReading>,
    /// Runway surface state groups in report order.
    pub runway_states: Vec<RunwayState>,
    /// Conditions decoded from the remarks section.
    pub special_conditions: SpecialConditions,
    /// The raw report text as given to [`decode`].
    pub raw: String,
}

impl Report {
    /// Returns the RVR group for a runway, if the report carries one.
    pub fn rvr_for(&self, designator: &str) -> Option<&RvrReading> {
        self.rvr_readings
            .iter()
            .find(|rvr| rvr.runway == designator)
    }

    /// Returns the surface state for a runway. A group covering all runways
    /// applies to every designator.
    pub fn runway_state_for(&self, designator: &str) -> Option<&RunwayState> {
        self.runway_states.iter().find(|state| match &state.runway {
            StateRunway::Designator(runway) => runway == designator,
            StateRunway::AllRunways => true,
        })
    }

    /// Replaces the decoded wind with a live sensor reading in knots.
    ///
    /// The reading is converted into the report's wind unit so the report
    /// stays self-consistent. The sector is dropped since the sensor does
    /// not report one.
    pub fn with_wind_override(
        mut self,
        direction: Option<u16>,
        speed_kt: u16,
        gust_kt: u16,
    ) -> Self {
        let (speed, gust) = match self.wind.unit {
            WindUnit::Knots => (speed_kt, gust_kt),
            WindUnit::MetersPerSecond => (
                (f64::from(speed_kt) / KNOTS_IN_MPS).round() as u16,
                (f64::from(gust_kt) / KNOTS_IN_MPS).round() as u16,
            ),
        };
        let calm = direction.unwrap_or(0) == 0 && speed == 0 && gust == 0;
        self.wind = Wind {
            direction: if calm { None } else { direction },
            speed,
            gust,
            unit: self.wind.unit,
            calm,
            variable: false,
            sector: None,
        };
        self
    }
}

/// Decodes a raw report.
///
/// The first token is always taken as the station identifier; every further
/// token of the body is classified independently, so a malformed group is
/// dropped without failing the report. When a group repeats, the last
/// occurrence wins for scalar fields while repeatable groups accumulate in
/// report order.
pub fn decode(raw: &str) -> Result<Report, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyReport);
    }

    let (body, remarks) = match trimmed.find(" RMK ") {
        Some(at) => (&trimmed[..at], Some(&trimmed[at + 5..])),
        None => (trimmed, None),
    };

    let mut tokens = body.split_whitespace();
    let mut report = Report {
        // never empty, the trimmed report has at least one token
        station_id: tokens.next().unwrap_or_default().to_string(),
        raw: trimmed.to_string(),
        ..Report::default()
    };

    for token in tokens {
        match classify(token) {
            Token::ObservationTime(time) => report.observation_time = Some(time),
            Token::Wind(wind) => {
                // a sector decoded ahead of its wind group survives
                let sector = report.wind.sector.take();
                report.wind = Wind { sector, ..wind };
            }
            Token::WindSector(sector) => report.wind.sector = Some(sector),
            Token::Visibility(visibility) => report.visibility_m = Some(visibility),
            Token::TemperatureDewpoint {
                temperature,
                dewpoint,
            } => {
                report.temperature_c = Some(temperature);
                report.dewpoint_c = Some(dewpoint);
            }
            Token::Qnh(qnh) => report.qnh_hpa = qnh,
            Token::Cloud(layer) => report.cloud_layers.push(layer),
            Token::Phenomenon(code) => report.weather_phenomena.push(code),
            Token::Rvr(rvr) => report.rvr_readings.push(rvr),
            Token::RunwayState(state) => report.runway_states.push(state),
            Token::Unrecognized => trace!("dropping unrecognized token {token:?}"),
        }
    }

    report.special_conditions = remarks::decode(remarks);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::CloudCoverage;
    use crate::runway::{RvrPrefix, RvrValue};
    use crate::wind::WindSector;

    const UUEE: &str =
        "UUEE 121830Z 24015G20KT 210V270 9999 -SHRA BKN020 10/03 Q1013 R24L/P1500 R24/290155 RMK QFE745/0993 QBB150";

    #[test]
    fn decodes_full_report() {
        let report = decode(UUEE).unwrap();

        assert_eq!(report.station_id, "UUEE");
        assert_eq!(report.observation_time.as_deref(), Some("121830Z"));
        assert_eq!(report.wind.direction, Some(240));
        assert_eq!(report.wind.speed, 15);
        assert_eq!(report.wind.gust, 20);
        assert_eq!(report.wind.sector, Some(WindSector { from: 210, to: 270 }));
        assert_eq!(report.visibility_m, Some(9999));
        assert_eq!(report.weather_phenomena, vec!["-SHRA".to_string()]);
        assert_eq!(report.cloud_layers.len(), 1);
        assert_eq!(report.cloud_layers[0].coverage, CloudCoverage::Bkn);
        assert_eq!(report.temperature_c, Some(10));
        assert_eq!(report.dewpoint_c, Some(3));
        assert_eq!(report.qnh_hpa, 1013);
        assert_eq!(report.rvr_readings.len(), 1);
        assert_eq!(report.runway_states.len(), 1);
        assert_eq!(report.special_conditions.qfe_hpa, Some(993));
        assert_eq!(report.special_conditions.qbb_m, Some(150));
        assert_eq!(report.raw, UUEE);
    }

    #[test]
    fn empty_report_fails() {
        assert!(matches!(decode("   "), Err(Error::EmptyReport)));
    }

    #[test]
    fn station_only_report_decodes() {
        let report = decode("UUEE").unwrap();
        assert_eq!(report.station_id, "UUEE");
        assert_eq!(report.qnh_hpa, 0);
        assert_eq!(report.visibility_m, None);
        assert!(report.cloud_layers.is_empty());
    }

    #[test]
    fn malformed_groups_are_dropped() {
        let report = decode("UUEE 1218Z 240KT Q10 10/").unwrap();
        assert_eq!(report.observation_time, None);
        assert!(report.wind.speed == 0 && report.wind.direction.is_none());
        assert_eq!(report.qnh_hpa, 0);
        assert_eq!(report.temperature_c, None);
    }

    #[test]
    fn last_scalar_group_wins() {
        let report = decode("UUEE Q1013 Q1015").unwrap();
        assert_eq!(report.qnh_hpa, 1015);
    }

    #[test]
    fn sector_ahead_of_wind_group_survives() {
        let report = decode("UUEE 210V270 24015KT").unwrap();
        assert_eq!(report.wind.direction, Some(240));
        assert_eq!(report.wind.sector, Some(WindSector { from: 210, to: 270 }));
    }

    #[test]
    fn rvr_lookup_by_designator() {
        let report = decode("UUEE R24L/P1500 R06/0400V0800").unwrap();
        assert_eq!(
            report.rvr_for("06").map(|rvr| &rvr.value),
            Some(&RvrValue {
                value_m: 400,
                prefix: RvrPrefix::None,
            })
        );
        assert!(report.rvr_for("24R").is_none());
    }

    #[test]
    fn all_runways_state_applies_everywhere() {
        let report = decode("UUEE 88/290155").unwrap();
        assert!(report.runway_state_for("06").is_some());
        assert!(report.runway_state_for("24L").is_some());
    }

    #[test]
    fn wind_override_keeps_report_unit() {
        let report = decode("UUEE 18004MPS").unwrap();
        let report = report.with_wind_override(Some(240), 16, 0);
        assert_eq!(report.wind.direction, Some(240));
        assert_eq!(report.wind.speed, 8);
        assert_eq!(report.wind.unit, WindUnit::MetersPerSecond);

        let report = decode("UUEE 24015KT").unwrap();
        let report = report.with_wind_override(Some(180), 16, 22);
        assert_eq!(report.wind.speed, 16);
        assert_eq!(report.wind.gust, 22);
    }

    #[test]
    fn wind_override_to_zero_is_calm() {
        let report = decode("UUEE 24015KT")
            .unwrap()
            .with_wind_override(Some(0), 0, 0);
        assert!(report.wind.calm);
        assert_eq!(report.wind.direction, None);
    }
}
