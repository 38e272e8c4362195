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

//! Trends between consecutive reports of a station.
//!
//! A trend only exists when both samples carry the field and the change
//! exceeds the field's threshold; everything else yields `None`, which the
//! presentation layer renders as a steady value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use metar::Report;

use crate::metrics::effective_qfe;

/// The direction a value moved between two reports.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Trend {
    Up,
    Down,
}

/// Compares two samples of a field.
///
/// Changes up to and including `threshold` count as steady.
pub fn trend(current: Option<f64>, previous: Option<f64>, threshold: f64) -> Option<Trend> {
    let diff = current? - previous?;
    if diff.abs() <= threshold {
        None
    } else if diff > 0.0 {
        Some(Trend::Up)
    } else {
        Some(Trend::Down)
    }
}

fn reported_qnh(report: &Report) -> Option<f64> {
    (report.qnh_hpa > 0).then_some(f64::from(report.qnh_hpa))
}

pub fn qnh_trend(current: &Report, previous: &Report) -> Option<Trend> {
    trend(reported_qnh(current), reported_qnh(previous), 0.0)
}

pub fn temperature_trend(current: &Report, previous: &Report) -> Option<Trend> {
    trend(
        current.temperature_c.map(f64::from),
        previous.temperature_c.map(f64::from),
        0.0,
    )
}

pub fn dewpoint_trend(current: &Report, previous: &Report) -> Option<Trend> {
    trend(
        current.dewpoint_c.map(f64::from),
        previous.dewpoint_c.map(f64::from),
        0.0,
    )
}

pub fn visibility_trend(current: &Report, previous: &Report) -> Option<Trend> {
    trend(
        current.visibility_m.map(f64::from),
        previous.visibility_m.map(f64::from),
        0.0,
    )
}

/// Cloud base trend from the QBB remarks group.
pub fn qbb_trend(current: &Report, previous: &Report) -> Option<Trend> {
    trend(
        current.special_conditions.qbb_m.map(f64::from),
        previous.special_conditions.qbb_m.map(f64::from),
        0.0,
    )
}

/// Wind speed trend. Calm and variable wind has no stable speed reading, so
/// either sample being calm or variable suppresses the trend.
pub fn wind_speed_trend(current: &Report, previous: &Report) -> Option<Trend> {
    let unstable = |report: &Report| report.wind.calm || report.wind.variable;
    if unstable(current) || unstable(previous) {
        return None;
    }
    trend(
        Some(f64::from(current.wind.speed)),
        Some(f64::from(previous.wind.speed)),
        0.0,
    )
}

/// Gust trend. A gust appearing where there was none is an upward trend; a
/// gust disappearing reads as steady since the current report shows no gust
/// value to attach a trend to.
pub fn gust_trend(current: &Report, previous: &Report) -> Option<Trend> {
    if current.wind.variable || previous.wind.variable {
        return None;
    }
    if current.wind.gust == 0 {
        return None;
    }
    if previous.wind.gust == 0 {
        return Some(Trend::Up);
    }
    trend(
        Some(f64::from(current.wind.gust)),
        Some(f64::from(previous.wind.gust)),
        0.0,
    )
}

/// RVR trend for one runway end.
pub fn rvr_trend(current: &Report, previous: &Report, designator: &str) -> Option<Trend> {
    trend(
        current
            .rvr_for(designator)
            .map(|rvr| f64::from(rvr.value.value_m)),
        previous
            .rvr_for(designator)
            .map(|rvr| f64::from(rvr.value.value_m)),
        0.0,
    )
}

/// Trend of the displayed QFE, so a remarks-reported QFE and a computed one
/// compare against each other seamlessly.
pub fn qfe_trend(current: &Report, previous: &Report, elevation_m: Option<f64>) -> Option<Trend> {
    trend(
        effective_qfe(current, elevation_m).map(f64::from),
        effective_qfe(previous, elevation_m).map(f64::from),
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(raw: &str) -> Report {
        metar::decode(raw).unwrap()
    }

    #[test]
    fn trend_respects_threshold() {
        assert_eq!(trend(Some(10.0), Some(8.0), 0.0), Some(Trend::Up));
        assert_eq!(trend(Some(8.0), Some(10.0), 0.0), Some(Trend::Down));
        assert_eq!(trend(Some(10.0), Some(10.0), 0.0), None);
        assert_eq!(trend(Some(10.5), Some(10.0), 1.0), None);
        assert_eq!(trend(None, Some(10.0), 0.0), None);
        assert_eq!(trend(Some(10.0), None, 0.0), None);
    }

    #[test]
    fn qnh_trend_needs_both_reports() {
        let current = report("UUEE Q1015");
        let previous = report("UUEE Q1013");
        assert_eq!(qnh_trend(&current, &previous), Some(Trend::Up));

        let unreported = report("UUEE");
        assert_eq!(qnh_trend(&current, &unreported), None);
    }

    #[test]
    fn temperature_and_dewpoint_trend() {
        let current = report("UUEE 12/05");
        let previous = report("UUEE 10/07");
        assert_eq!(temperature_trend(&current, &previous), Some(Trend::Up));
        assert_eq!(dewpoint_trend(&current, &previous), Some(Trend::Down));
    }

    #[test]
    fn visibility_trend_between_reports() {
        let current = report("UUEE 4000");
        let previous = report("UUEE 9999");
        assert_eq!(visibility_trend(&current, &previous), Some(Trend::Down));
    }

    #[test]
    fn calm_wind_suppresses_speed_trend() {
        let current = report("UUEE 24015KT");
        let calm = report("UUEE 00000KT");
        assert_eq!(wind_speed_trend(&current, &calm), None);
        assert_eq!(wind_speed_trend(&calm, &current), None);
    }

    #[test]
    fn variable_wind_suppresses_speed_trend() {
        let current = report("UUEE 24015KT");
        let variable = report("UUEE VRB05KT");
        assert_eq!(wind_speed_trend(&current, &variable), None);
    }

    #[test]
    fn wind_speed_trend_between_directional_reports() {
        let current = report("UUEE 24018KT");
        let previous = report("UUEE 24015KT");
        assert_eq!(wind_speed_trend(&current, &previous), Some(Trend::Up));
    }

    #[test]
    fn gust_appearing_trends_up() {
        let current = report("UUEE 24015G25KT");
        let previous = report("UUEE 24015KT");
        assert_eq!(gust_trend(&current, &previous), Some(Trend::Up));
    }

    #[test]
    fn gust_disappearing_is_steady() {
        let current = report("UUEE 24015KT");
        let previous = report("UUEE 24015G25KT");
        assert_eq!(gust_trend(&current, &previous), None);
    }

    #[test]
    fn gust_trend_between_gusting_reports() {
        let current = report("UUEE 24015G20KT");
        let previous = report("UUEE 24015G25KT");
        assert_eq!(gust_trend(&current, &previous), Some(Trend::Down));
    }

    #[test]
    fn rvr_trend_per_runway() {
        let current = report("UUEE R24L/0600 R06/1000");
        let previous = report("UUEE R24L/0400 R06/1000");
        assert_eq!(rvr_trend(&current, &previous, "24L"), Some(Trend::Up));
        assert_eq!(rvr_trend(&current, &previous, "06"), None);
        assert_eq!(rvr_trend(&current, &previous, "24R"), None);
    }

    #[test]
    fn qfe_trend_mixes_remarks_and_computed() {
        let current = report("UUEE Q1013 RMK QFE0996");
        let previous = report("UUEE Q1013");
        // previous computes 1003 from elevation, current remarks say 996
        assert_eq!(
            qfe_trend(&current, &previous, Some(85.0)),
            Some(Trend::Down)
        );
    }

    #[test]
    fn qbb_trend_between_remarks() {
        let current = report("UUEE RMK QBB200");
        let previous = report("UUEE RMK QBB150");
        assert_eq!(qbb_trend(&current, &previous), Some(Trend::Up));
    }
}
