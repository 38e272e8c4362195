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

//! Report token classification.
//!
//! Each whitespace-delimited token of a report body is classified into
//! exactly one [`Token`] variant by [`classify`]. The categories are matched
//! in a fixed priority order and extract their numeric sub-fields by
//! fixed-width slicing keyed to the category's token layout. A token that
//! matches no category classifies as [`Token::Unrecognized`].

use crate::cloud::{CloudCoverage, CloudLayer, ConvectiveType};
use crate::runway::{RunwayState, RvrPrefix, RvrReading, RvrValue, StateRunway};
use crate::wind::{Wind, WindSector, WindUnit};

/// A classified report token.
#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    /// Observation timestamp, e.g. `121830Z`. Kept as the raw token.
    ObservationTime(String),
    /// A wind group, directional, variable (`VRB`) or calm.
    Wind(Wind),
    /// A direction fluctuation sector, e.g. `210V270`.
    WindSector(WindSector),
    /// Prevailing visibility in metres.
    Visibility(u32),
    /// Temperature and dewpoint in degrees Celsius.
    TemperatureDewpoint { temperature: i16, dewpoint: i16 },
    /// QNH in hectopascals, e.g. `Q1013`.
    Qnh(u16),
    /// A cloud layer, e.g. `BKN020` or `FEW030CB`.
    Cloud(CloudLayer),
    /// A weather phenomenon code, e.g. `RA` or `+TSRA`. Kept raw.
    Phenomenon(String),
    /// A runway visual range group.
    Rvr(RvrReading),
    /// A runway surface state group.
    RunwayState(RunwayState),
    /// No category matched; the decoder drops these.
    Unrecognized,
}

/// Classifies one report token.
///
/// The categories are mutually exclusive by construction; the first
/// structural match wins.
pub fn classify(token: &str) -> Token {
    if let Some(time) = match_observation_time(token) {
        return Token::ObservationTime(time);
    }
    if let Some(wind) = match_wind(token) {
        return Token::Wind(wind);
    }
    if let Some(sector) = match_wind_sector(token) {
        return Token::WindSector(sector);
    }
    if let Some(visibility) = match_visibility(token) {
        return Token::Visibility(visibility);
    }
    if let Some((temperature, dewpoint)) = match_temperature_dewpoint(token) {
        return Token::TemperatureDewpoint {
            temperature,
            dewpoint,
        };
    }
    if let Some(qnh) = match_qnh(token) {
        return Token::Qnh(qnh);
    }
    if let Some(layer) = match_cloud(token) {
        return Token::Cloud(layer);
    }
    if let Some(code) = match_phenomenon(token) {
        return Token::Phenomenon(code);
    }
    if let Some(rvr) = match_rvr(token) {
        return Token::Rvr(rvr);
    }
    if let Some(state) = match_runway_state(token) {
        return Token::RunwayState(state);
    }
    Token::Unrecognized
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Six digits followed by `Z`.
fn match_observation_time(s: &str) -> Option<String> {
    let body = s.strip_suffix('Z')?;
    (body.len() == 6 && all_digits(body)).then(|| s.to_string())
}

/// A wind group: `dddss(Gss)KT|MPS` with `VRB` in place of the direction for
/// variable wind. `00000` decodes as calm.
pub(crate) fn match_wind(s: &str) -> Option<Wind> {
    let (body, unit) = if let Some(body) = s.strip_suffix("KT") {
        (body, WindUnit::Knots)
    } else if let Some(body) = s.strip_suffix("MPS") {
        (body, WindUnit::MetersPerSecond)
    } else {
        return None;
    };

    let (direction_part, rest) = body.split_at_checked(3)?;
    let variable = direction_part == "VRB";
    let direction: Option<u16> = if variable {
        None
    } else if all_digits(direction_part) {
        let direction = direction_part.parse().ok()?;
        if direction > 360 {
            return None;
        }
        Some(direction)
    } else {
        return None;
    };

    let (speed_part, gust_part) = rest.split_at_checked(2)?;
    if !all_digits(speed_part) {
        return None;
    }
    let speed: u16 = speed_part.parse().ok()?;

    let gust: u16 = match gust_part.strip_prefix('G') {
        Some(gust) if gust.len() == 2 && all_digits(gust) => gust.parse().ok()?,
        Some(_) => return None,
        None if gust_part.is_empty() => 0,
        None => return None,
    };

    let calm = !variable && direction == Some(0) && speed == 0 && gust == 0;
    Some(Wind {
        direction: if calm { None } else { direction },
        speed,
        gust,
        unit,
        calm,
        variable,
        sector: None,
    })
}

/// `dddVddd`, the sector the wind direction fluctuates across.
fn match_wind_sector(s: &str) -> Option<WindSector> {
    let (from, to) = s.split_once('V')?;
    if from.len() != 3 || to.len() != 3 || !all_digits(from) || !all_digits(to) {
        return None;
    }
    Some(WindSector {
        from: from.parse().ok()?,
        to: to.parse().ok()?,
    })
}

/// Four digits above 100 m; smaller values would collide with other
/// four-digit groups and are not reported as prevailing visibility.
fn match_visibility(s: &str) -> Option<u32> {
    if s.len() != 4 || !all_digits(s) {
        return None;
    }
    let visibility: u32 = s.parse().ok()?;
    (visibility > 100).then_some(visibility)
}

/// `tt/tt` with an `M` prefix for negative values, e.g. `10/M02`.
fn match_temperature_dewpoint(s: &str) -> Option<(i16, i16)> {
    let (temperature, dewpoint) = s.split_once('/')?;
    Some((signed_two_digits(temperature)?, signed_two_digits(dewpoint)?))
}

fn signed_two_digits(s: &str) -> Option<i16> {
    let (negative, digits) = match s.strip_prefix('M') {
        Some(digits) => (true, digits),
        None => (false, s),
    };
    if digits.len() != 2 || !all_digits(digits) {
        return None;
    }
    let value: i16 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `Qdddd`, QNH in whole hectopascals.
fn match_qnh(s: &str) -> Option<u16> {
    let digits = s.strip_prefix('Q')?;
    (digits.len() == 4 && all_digits(digits))
        .then(|| digits.parse().ok())
        .flatten()
}

const COVERAGES: [(&str, CloudCoverage); 8] = [
    ("SKC", CloudCoverage::Skc),
    ("CLR", CloudCoverage::Clr),
    ("FEW", CloudCoverage::Few),
    ("SCT", CloudCoverage::Sct),
    ("BKN", CloudCoverage::Bkn),
    ("OVC", CloudCoverage::Ovc),
    ("NSC", CloudCoverage::Nsc),
    ("NCD", CloudCoverage::Ncd),
];

/// A coverage code with an optional three-digit height and an optional
/// convective type, e.g. `BKN020`, `FEW030CB` or `NSC`.
fn match_cloud(s: &str) -> Option<CloudLayer> {
    let (rest, coverage) = COVERAGES
        .iter()
        .find_map(|(code, coverage)| s.strip_prefix(code).map(|rest| (rest, *coverage)))?;

    let (digits, convective) = if let Some(digits) = rest.strip_suffix("TCU") {
        (digits, Some(ConvectiveType::Tcu))
    } else if let Some(digits) = rest.strip_suffix("CB") {
        (digits, Some(ConvectiveType::Cb))
    } else {
        (rest, None)
    };

    if !digits.is_empty() && !(digits.len() <= 3 && all_digits(digits)) {
        return None;
    }

    // The height is reported in hundreds of feet; anything but the full
    // three digits leaves it unknown.
    let height_ft = if digits.len() == 3 {
        Some(digits.parse::<u32>().ok()? * 100)
    } else {
        None
    };

    Some(CloudLayer {
        coverage,
        height_ft,
        convective,
    })
}

const DESCRIPTORS: [&str; 8] = ["MI", "PR", "BC", "DR", "BL", "SH", "TS", "FZ"];
const PRECIPITATION: [&str; 9] = ["DZ", "RA", "SN", "SG", "IC", "PL", "GR", "GS", "UP"];
const OBSCURATION: [&str; 8] = ["BR", "FG", "FU", "VA", "DU", "SA", "HZ", "PY"];
const OTHER: [&str; 5] = ["PO", "SQ", "FC", "SS", "DS"];

/// Tokens that belong to other categories but would otherwise satisfy the
/// loose phenomenon layout. A phenomenon must not double-count these.
const CLAIMED_PREFIXES: [&str; 13] = [
    "SKC", "CLR", "FEW", "SCT", "BKN", "OVC", "NSC", "NCD", "CAVOK", "NOSIG", "TEMPO", "BECMG",
    "RMK",
];

fn is_claimed_elsewhere(s: &str) -> bool {
    if CLAIMED_PREFIXES.iter().any(|prefix| s.starts_with(prefix)) {
        return true;
    }
    let bytes = s.as_bytes();
    // Qdddd pressure groups and Rdd… RVR/runway-state groups.
    (bytes.len() >= 5 && bytes[0] == b'Q' && bytes[1..5].iter().all(|b| b.is_ascii_digit()))
        || (bytes.len() >= 3 && bytes[0] == b'R' && bytes[1..3].iter().all(|b| b.is_ascii_digit()))
}

/// A weather phenomenon: an optional intensity prefix followed by ordered
/// optional descriptor, precipitation, obscuration and other groups, each at
/// most once, consuming the whole token.
fn match_phenomenon(s: &str) -> Option<String> {
    if is_claimed_elsewhere(s) {
        return None;
    }

    let mut rest = s
        .strip_prefix('+')
        .or_else(|| s.strip_prefix('-'))
        .or_else(|| s.strip_prefix("VC"))
        .unwrap_or(s);

    let mut matched = false;
    for group in [
        &DESCRIPTORS[..],
        &PRECIPITATION[..],
        &OBSCURATION[..],
        &OTHER[..],
    ] {
        if let Some(tail) = group.iter().find_map(|code| rest.strip_prefix(code)) {
            rest = tail;
            matched = true;
        }
    }

    (matched && rest.is_empty()).then(|| s.to_string())
}

/// Two digits with an optional side letter, e.g. `24` or `06L`.
fn split_runway_designator(s: &str) -> Option<(&str, &str)> {
    let (digits, rest) = s.split_at_checked(2)?;
    if !all_digits(digits) {
        return None;
    }
    match rest.as_bytes().first() {
        Some(b'L' | b'R' | b'C') => s.split_at_checked(3),
        _ => Some((digits, rest)),
    }
}

fn match_rvr_value(s: &str) -> Option<(RvrValue, &str)> {
    let (prefix, s) = match s.as_bytes().first() {
        Some(b'P') => (RvrPrefix::GreaterThan, &s[1..]),
        Some(b'M') => (RvrPrefix::LessThan, &s[1..]),
        _ => (RvrPrefix::None, s),
    };
    let (digits, rest) = s.split_at_checked(4)?;
    if !all_digits(digits) {
        return None;
    }
    Some((
        RvrValue {
            value_m: digits.parse().ok()?,
            prefix,
        },
        rest,
    ))
}

/// `Rdd[LRC]/[PM]dddd` with an optional `V[PM]dddd` variation bound.
fn match_rvr(s: &str) -> Option<RvrReading> {
    let rest = s.strip_prefix('R')?;
    let (runway, rest) = split_runway_designator(rest)?;
    let rest = rest.strip_prefix('/')?;
    let (value, rest) = match_rvr_value(rest)?;

    let variable_max = if let Some(rest) = rest.strip_prefix('V') {
        let (max, tail) = match_rvr_value(rest)?;
        if !tail.is_empty() {
            return None;
        }
        Some(max)
    } else if rest.is_empty() {
        None
    } else {
        return None;
    };

    Some(RvrReading {
        runway: runway.to_string(),
        value,
        variable_max,
    })
}

/// `[R]dd[LRC]/dddddd` or `88/dddddd` covering all runways; the six digits
/// are deposit, extent, two-digit depth and two-digit friction codes.
fn match_runway_state(s: &str) -> Option<RunwayState> {
    let body = s.strip_prefix('R').unwrap_or(s);
    let (designator, rest) = split_runway_designator(body)?;
    let digits = rest.strip_prefix('/')?;
    if digits.len() != 6 || !all_digits(digits) {
        return None;
    }

    let runway = if designator == "88" {
        StateRunway::AllRunways
    } else {
        StateRunway::Designator(designator.to_string())
    };

    Some(RunwayState {
        runway,
        deposit: digits[0..1].parse().ok()?,
        extent: digits[1..2].parse().ok()?,
        depth: digits[2..4].parse().ok()?,
        friction: digits[4..6].parse().ok()?,
    })
}
