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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The report text was empty or all whitespace.
    EmptyReport,
    /// The string is not a valid wind group.
    InvalidWind(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReport => {
                write!(f, "report text is empty")
            }
            Self::InvalidWind(s) => {
                write!(f, "\"{s}\" is not a valid wind group")
            }
        }
    }
}

impl error::Error for Error {}
