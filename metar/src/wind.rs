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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::token;

/// Unit the wind group was reported in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindUnit {
    Knots,
    MetersPerSecond,
}

impl fmt::Display for WindUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Knots => write!(f, "kt"),
            Self::MetersPerSecond => write!(f, "m/s"),
        }
    }
}

/// Sector the wind direction fluctuates across, e.g. `210V270`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindSector {
    pub from: u16,
    pub to: u16,
}

/// Decoded surface wind.
///
/// The direction is `None` for calm wind and for variable (`VRB`) wind where
/// no mean direction is reported. A gust of 0 means no gusts were reported.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    /// Mean direction in degrees true, 0–360.
    pub direction: Option<u16>,
    pub speed: u16,
    pub gust: u16,
    pub unit: WindUnit,
    pub calm: bool,
    /// Direction reported as `VRB`.
    pub variable: bool,
    /// Fluctuation sector when the direction varies across a reported range.
    pub sector: Option<WindSector>,
}

impl Default for Wind {
    fn default() -> Self {
        Self {
            direction: None,
            speed: 0,
            gust: 0,
            unit: WindUnit::Knots,
            calm: false,
            variable: false,
            sector: None,
        }
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind group like `24015G25KT`, `VRB03MPS` or `00000KT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        token::match_wind(s).ok_or_else(|| Error::InvalidWind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directional_wind() {
        let wind: Wind = "24015G25KT".parse().expect("should parse wind group");
        assert_eq!(wind.direction, Some(240));
        assert_eq!(wind.speed, 15);
        assert_eq!(wind.gust, 25);
        assert_eq!(wind.unit, WindUnit::Knots);
        assert!(!wind.calm);
        assert!(!wind.variable);
    }

    #[test]
    fn parses_calm_wind() {
        let wind: Wind = "00000KT".parse().expect("should parse calm wind");
        assert!(wind.calm);
        assert_eq!(wind.speed, 0);
        assert_eq!(wind.direction, None);
    }

    #[test]
    fn fails_on_invalid_group() {
        assert_eq!(
            "240KT".parse::<Wind>(),
            Err(Error::InvalidWind("240KT".to_string()))
        );
    }
}
