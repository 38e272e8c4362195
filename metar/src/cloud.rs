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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cloud amount of a layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudCoverage {
    /// Sky clear.
    Skc,
    /// Clear (automated station).
    Clr,
    /// Few, 1–2 oktas.
    Few,
    /// Scattered, 3–4 oktas.
    Sct,
    /// Broken, 5–7 oktas.
    Bkn,
    /// Overcast, 8 oktas.
    Ovc,
    /// No significant cloud.
    Nsc,
    /// No cloud detected (automated station).
    Ncd,
}

impl CloudCoverage {
    /// The coverage code as it appears in the report.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Skc => "SKC",
            Self::Clr => "CLR",
            Self::Few => "FEW",
            Self::Sct => "SCT",
            Self::Bkn => "BKN",
            Self::Ovc => "OVC",
            Self::Nsc => "NSC",
            Self::Ncd => "NCD",
        }
    }
}

impl fmt::Display for CloudCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Convective cloud type appended to a layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConvectiveType {
    /// Cumulonimbus.
    Cb,
    /// Towering cumulus.
    Tcu,
}

/// One cloud layer in report order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudLayer {
    pub coverage: CloudCoverage,
    /// Layer base above aerodrome level in feet, a multiple of 100.
    pub height_ft: Option<u32>,
    pub convective: Option<ConvectiveType>,
}
