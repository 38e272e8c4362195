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

//! Per-runway report groups: runway visual range and runway surface state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Qualifier of an RVR value at the limit of the measuring range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RvrPrefix {
    None,
    /// `M`, below the minimum the instrument can assess.
    LessThan,
    /// `P`, above the maximum the instrument can assess.
    GreaterThan,
}

/// A single RVR value with its range qualifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RvrValue {
    pub value_m: u32,
    pub prefix: RvrPrefix,
}

/// Runway visual range group, e.g. `R24L/P1500` or `R06/0400V0800`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RvrReading {
    pub runway: String,
    pub value: RvrValue,
    /// Upper bound when the RVR varies across a reported range.
    pub variable_max: Option<RvrValue>,
}

/// Runway a surface state group applies to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StateRunway {
    Designator(String),
    /// The `88` sentinel, the state applies to all runways.
    AllRunways,
}

/// Deposit depth decoded from the two-digit depth code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DepositDepth {
    Millimetres(u8),
    Centimetres(u8),
    /// Code 99, depth not reported or not measurable.
    NotReported,
}

/// Runway surface state group, e.g. `R24/290155` or `88/290155`.
///
/// The six digits encode deposit type, contamination extent, deposit depth
/// and friction in fixed positions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayState {
    pub runway: StateRunway,
    pub deposit: u8,
    pub extent: u8,
    pub depth: u8,
    pub friction: u8,
}

impl RunwayState {
    /// Short label for the deposit type code.
    pub fn deposit_description(&self) -> &'static str {
        match self.deposit {
            0 => "CLR",
            1 => "WET",
            2 => "H₂O",
            3 => "RIME",
            4 => "DRY SNW",
            5 => "WET SNW",
            6 => "SLH",
            7 => "ICE",
            8 => "CMP SNW",
            _ => "RUT",
        }
    }

    /// Contamination extent as a coverage percentage.
    ///
    /// Returns `None` for codes without a defined extent.
    pub fn contamination_extent(&self) -> Option<&'static str> {
        match self.extent {
            1 => Some("10%"),
            2 => Some("25%"),
            5 => Some("50%"),
            9 => Some("100%"),
            _ => None,
        }
    }

    /// Braking action when the friction code reports one instead of a
    /// measured coefficient.
    pub fn braking_action(&self) -> Option<&'static str> {
        match self.friction {
            91 => Some("POOR"),
            92 => Some("M/POOR"),
            93 => Some("MEDIUM"),
            94 => Some("M/GOOD"),
            95 => Some("GOOD"),
            99 => Some("N/A"),
            _ => None,
        }
    }

    /// Deposit depth decoded from the depth code.
    ///
    /// Codes up to 90 are a depth in millimetres, 92–98 are coarse steps in
    /// centimetres and 99 means the depth is not reported.
    pub fn deposit_depth(&self) -> DepositDepth {
        match self.depth {
            92 => DepositDepth::Centimetres(10),
            93 => DepositDepth::Centimetres(15),
            94 => DepositDepth::Centimetres(20),
            95 => DepositDepth::Centimetres(25),
            96 => DepositDepth::Centimetres(30),
            97 => DepositDepth::Centimetres(35),
            98 => DepositDepth::Centimetres(40),
            99 => DepositDepth::NotReported,
            mm => DepositDepth::Millimetres(mm),
        }
    }
}
