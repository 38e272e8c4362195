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

//! Remarks section decoding.
//!
//! The remarks section carries station-specific extras after the `RMK`
//! marker. Only QFE and cloud base (QBB) groups are decoded; forecast
//! amendments (`TEMPO`, `BECMG`, `PROBxx`) end the observational part of the
//! section and everything after them is ignored.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod constants {
    pub const MMHG_IN_HPA: f64 = 0.750062;
}

/// Conditions decoded from the remarks section.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialConditions {
    /// Station-reported QFE in hectopascals.
    pub qfe_hpa: Option<u16>,
    /// Cloud base in metres above the station.
    pub qbb_m: Option<u16>,
}

/// Decodes the remarks section, if the report has one.
pub(crate) fn decode(remarks: Option<&str>) -> SpecialConditions {
    let mut conditions = SpecialConditions::default();
    let Some(remarks) = remarks else {
        return conditions;
    };

    for token in remarks.split_whitespace() {
        if is_forecast_amendment(token) {
            break;
        }
        let token = token.trim_end_matches('=');
        if let Some(qfe) = match_qfe(token) {
            conditions.qfe_hpa = Some(qfe);
        } else if let Some(qbb) = match_qbb(token) {
            conditions.qbb_m = Some(qbb);
        }
    }
    conditions
}

fn is_forecast_amendment(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    upper == "TEMPO"
        || upper == "BECMG"
        || (upper.len() == 6
            && upper.starts_with("PROB")
            && upper[4..].bytes().all(|b| b.is_ascii_digit()))
}

/// `QFEddd(d)` or `QFEddd(d)/dddd`. The slash form repeats the value reduced
/// to hectopascals; the plain form needs a unit heuristic since stations
/// report it in either millimetres of mercury or hectopascals.
fn match_qfe(token: &str) -> Option<u16> {
    let body = strip_prefix_ignore_case(token, "QFE")?;

    if let Some((_, reduced)) = body.split_once('/') {
        let reduced = reduced.strip_prefix('0').unwrap_or(reduced);
        if !(3..=4).contains(&reduced.len()) || !all_digits(reduced) {
            return None;
        }
        return reduced.parse().ok();
    }

    if !(3..=4).contains(&body.len()) || !all_digits(body) {
        return None;
    }
    let value: u16 = body.parse().ok()?;

    // Values in the mmHg band are converted; everything else is taken as
    // already being in hectopascals.
    if (600..800).contains(&value) {
        Some((f64::from(value) / constants::MMHG_IN_HPA).round() as u16)
    } else {
        Some(value)
    }
}

/// `QBBddd(d)`, cloud base in metres.
fn match_qbb(token: &str) -> Option<u16> {
    let body = strip_prefix_ignore_case(token, "QBB")?;
    if !(3..=4).contains(&body.len()) || !all_digits(body) {
        return None;
    }
    body.parse().ok()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let (head, tail) = s.split_at_checked(prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then_some(tail)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_qfe_in_mmhg() {
        let conditions = decode(Some("QFE762"));
        assert_eq!(conditions.qfe_hpa, Some(1016));
    }

    #[test]
    fn decodes_qfe_in_hpa() {
        let conditions = decode(Some("QFE0998"));
        assert_eq!(conditions.qfe_hpa, Some(998));
    }

    #[test]
    fn decodes_qfe_slash_form() {
        // the reduced value after the slash wins, verbatim
        let conditions = decode(Some("QFE745/0993"));
        assert_eq!(conditions.qfe_hpa, Some(993));
    }

    #[test]
    fn decodes_qbb() {
        let conditions = decode(Some("QBB150"));
        assert_eq!(conditions.qbb_m, Some(150));
    }

    #[test]
    fn stops_at_forecast_amendments() {
        let conditions = decode(Some("QBB200 TEMPO QFE745"));
        assert_eq!(conditions.qbb_m, Some(200));
        assert_eq!(conditions.qfe_hpa, None);

        let conditions = decode(Some("PROB40 QFE745"));
        assert_eq!(conditions.qfe_hpa, None);
    }

    #[test]
    fn trims_trailing_equals_sign() {
        let conditions = decode(Some("QFE745/0993="));
        assert_eq!(conditions.qfe_hpa, Some(993));
    }

    #[test]
    fn ignores_unknown_remark_groups() {
        let conditions = decode(Some("OBST OBSC MT APCH CLSD"));
        assert_eq!(conditions, SpecialConditions::default());
    }

    #[test]
    fn missing_section_decodes_empty() {
        assert_eq!(decode(None), SpecialConditions::default());
    }
}
