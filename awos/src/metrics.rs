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

//! Derived metrics: pressure conversions, field-level pressure and runway
//! wind components.

use log::warn;

use metar::{Report, Wind};

use crate::reference::RunwayRecord;

mod constants {
    /// Millimetres of mercury per hectopascal.
    pub const MMHG_IN_HPA: f64 = 0.750062;

    /// Inches of mercury per hectopascal.
    pub const INHG_IN_HPA: f64 = 0.029_53;

    /// Metres of altitude per hectopascal of pressure drop near sea level.
    pub const METERS_PER_HPA: f64 = 8.5;
}

/// A pressure in the three customary cockpit units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PressureReadout {
    /// Hectopascals, as reported.
    pub hpa: u16,
    /// Millimetres of mercury, rounded to a whole millimetre.
    pub mmhg: u16,
    /// Inches of mercury, rounded to two decimals.
    pub inhg: f64,
}

/// Converts a pressure in hectopascals into all readout units.
pub fn convert_pressure(hpa: u16) -> PressureReadout {
    PressureReadout {
        hpa,
        mmhg: (f64::from(hpa) * constants::MMHG_IN_HPA).round() as u16,
        inhg: (f64::from(hpa) * constants::INHG_IN_HPA * 100.0).round() / 100.0,
    }
}

/// Computes the field-level pressure from the QNH and the field elevation
/// using the standard atmosphere's pressure lapse.
///
/// Returns `None` when the QNH is unreported or the elevation unknown.
pub fn calculate_qfe(qnh_hpa: u16, elevation_m: Option<f64>) -> Option<u16> {
    if qnh_hpa == 0 {
        return None;
    }
    let elevation_m = elevation_m?;
    Some((f64::from(qnh_hpa) - elevation_m / constants::METERS_PER_HPA).round() as u16)
}

/// The QFE to display for a report.
///
/// A QFE the station put in its remarks is authoritative and wins over the
/// value computed from the QNH.
pub fn effective_qfe(report: &Report, elevation_m: Option<f64>) -> Option<u16> {
    report
        .special_conditions
        .qfe_hpa
        .or_else(|| calculate_qfe(report.qnh_hpa, elevation_m))
}

/// Wind resolved along and across a runway, in the wind's reporting unit.
///
/// A positive headwind blows down the runway towards the threshold; a
/// positive crosswind blows from the right.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WindComponents {
    pub headwind: f64,
    pub crosswind: f64,
}

/// Resolves the wind into runway components, rounded to one decimal.
///
/// Calm and variable wind has no usable direction, so no components.
pub fn wind_components(wind: &Wind, runway_heading_deg: f64) -> Option<WindComponents> {
    if wind.calm || wind.variable {
        return None;
    }
    let direction = f64::from(wind.direction?);
    let angle = (direction - runway_heading_deg).to_radians();
    let speed = f64::from(wind.speed);
    Some(WindComponents {
        headwind: round_tenth(speed * angle.cos()),
        crosswind: round_tenth(speed * angle.sin()),
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A runway heading, tagged with where it came from.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RunwayHeading {
    /// True heading from the reference data.
    Surveyed(f64),
    /// Estimated from the designator digits when the reference data has no
    /// entry for the runway.
    Estimated(f64),
}

impl RunwayHeading {
    pub fn degrees(&self) -> f64 {
        match self {
            Self::Surveyed(deg) | Self::Estimated(deg) => *deg,
        }
    }
}

/// Looks up the true heading of a runway end in the reference records,
/// falling back to the designator digits times ten.
pub fn resolve_runway_heading(designator: &str, runways: &[RunwayRecord]) -> RunwayHeading {
    for runway in runways {
        if runway.le_ident == designator {
            return RunwayHeading::Surveyed(runway.le_heading_deg);
        }
        if runway.he_ident == designator {
            return RunwayHeading::Surveyed(runway.he_heading_deg);
        }
    }

    warn!("no reference heading for runway {designator}, estimating from the designator");
    let digits: String = designator.chars().filter(|c| c.is_ascii_digit()).collect();
    RunwayHeading::Estimated(digits.parse::<f64>().unwrap_or(0.0) * 10.0)
}

/// Returns the designator of the other end of a runway, if the reference
/// data knows the runway.
pub fn resolve_opposite_end<'a>(
    designator: &str,
    runways: &'a [RunwayRecord],
) -> Option<&'a str> {
    for runway in runways {
        if runway.le_ident == designator {
            return Some(&runway.he_ident);
        }
        if runway.he_ident == designator {
            return Some(&runway.le_ident);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use metar::WindUnit;

    fn runway(le: &str, le_hdg: f64, he: &str, he_hdg: f64) -> RunwayRecord {
        RunwayRecord {
            le_ident: le.to_string(),
            he_ident: he.to_string(),
            le_heading_deg: le_hdg,
            he_heading_deg: he_hdg,
            le_elevation_m: Some(190.0),
            he_elevation_m: Some(192.0),
            length_m: 3500.0,
            width_m: 60.0,
            surface: "ASP".to_string(),
        }
    }

    #[test]
    fn converts_pressure_units() {
        let readout = convert_pressure(1013);
        assert_eq!(readout.hpa, 1013);
        assert_eq!(readout.mmhg, 760);
        assert_eq!(readout.inhg, 29.91);
    }

    #[test]
    fn computes_qfe_from_elevation() {
        assert_eq!(calculate_qfe(1013, Some(85.0)), Some(1003));
        assert_eq!(calculate_qfe(0, Some(85.0)), None);
        assert_eq!(calculate_qfe(1013, None), None);
    }

    #[test]
    fn remarks_qfe_overrides_computed() {
        let report = metar::decode("UUEE Q1013 RMK QFE0993").unwrap();
        assert_eq!(effective_qfe(&report, Some(85.0)), Some(993));

        let report = metar::decode("UUEE Q1013").unwrap();
        assert_eq!(effective_qfe(&report, Some(85.0)), Some(1003));
    }

    #[test]
    fn resolves_wind_components() {
        let wind = Wind {
            direction: Some(240),
            speed: 15,
            gust: 0,
            unit: WindUnit::Knots,
            calm: false,
            variable: false,
            sector: None,
        };
        let components = wind_components(&wind, 240.0).unwrap();
        assert_eq!(components.headwind, 15.0);
        assert_eq!(components.crosswind, 0.0);

        let components = wind_components(&wind, 150.0).unwrap();
        assert_eq!(components.headwind, 0.0);
        assert_eq!(components.crosswind, 15.0);
    }

    #[test]
    fn calm_and_variable_wind_have_no_components() {
        let calm = Wind {
            calm: true,
            ..Wind::default()
        };
        assert_eq!(wind_components(&calm, 240.0), None);

        let variable = Wind {
            variable: true,
            speed: 5,
            ..Wind::default()
        };
        assert_eq!(wind_components(&variable, 240.0), None);
    }

    #[test]
    fn looks_up_surveyed_heading() {
        let runways = [runway("06", 62.0, "24", 242.0)];
        assert_eq!(
            resolve_runway_heading("24", &runways),
            RunwayHeading::Surveyed(242.0)
        );
    }

    #[test]
    fn estimates_heading_from_designator() {
        assert_eq!(
            resolve_runway_heading("24L", &[]),
            RunwayHeading::Estimated(240.0)
        );
        assert_eq!(resolve_runway_heading("--", &[]), RunwayHeading::Estimated(0.0));
    }

    #[test]
    fn finds_opposite_runway_end() {
        let runways = [runway("06", 62.0, "24", 242.0)];
        assert_eq!(resolve_opposite_end("06", &runways), Some("24"));
        assert_eq!(resolve_opposite_end("24", &runways), Some("06"));
        assert_eq!(resolve_opposite_end("18", &runways), None);
    }
}
