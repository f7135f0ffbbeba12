// Copyright (C) 2025 The rtelephone Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::{Display, EnumIter};

/// The three components a telephone number is split into, in the order they
/// appear in the input.
#[derive(Debug, EnumIter, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// **Country code.**
    /// The leading part right after the prefix marker, e.g. `44` in `+441483924732`.
    /// It is not checked against any table of real calling codes.
    #[strum(serialize = "country code")]
    Country,
    /// **Area code.**
    /// The part following the country code, e.g. `1483`.
    #[strum(serialize = "area code")]
    Area,
    /// **Local number.**
    /// The remaining subscriber number, e.g. `924732`.
    #[strum(serialize = "local number")]
    Local,
}

/// Ways to render already split parts back into a single string.
///
/// For `+441483924732`:
/// - **E164**: `+441483924732`
/// - **INTERNATIONAL**: `+44 1483 924732`
/// - **NATIONAL**: `01483 924732`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartsFormat {
    /// Plus sign followed by all parts without separators.
    E164,
    /// Plus sign, then the parts separated by single spaces.
    International,
    /// Trunk prefix `0` with the area code, a space, then the local number.
    /// The country code is dropped.
    National,
}
