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

use std::fmt;

use super::{
    enums::{Part, PartsFormat},
    helper_constants::{PART_SEPARATOR, PLUS_SIGN, TRUNK_PREFIX},
};

/// Country code, area code and local number borrowed from the input they
/// were split from. Parts are raw substrings and may be empty or shorter
/// than their nominal width when produced by permissive splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TelephoneParts<'a> {
    pub country: &'a str,
    pub area: &'a str,
    pub local: &'a str,
}

impl<'a> TelephoneParts<'a> {
    pub fn new(country: &'a str, area: &'a str, local: &'a str) -> Self {
        Self { country, area, local }
    }

    pub fn get(&self, part: Part) -> &'a str {
        match part {
            Part::Country => self.country,
            Part::Area => self.area,
            Part::Local => self.local,
        }
    }

    /// Returns `(country, area, local)`.
    pub fn into_tuple(self) -> (&'a str, &'a str, &'a str) {
        (self.country, self.area, self.local)
    }

    pub fn format(&self, parts_format: PartsFormat) -> String {
        match parts_format {
            PartsFormat::E164 => {
                fast_cat::concat_str!(PLUS_SIGN, self.country, self.area, self.local)
            }
            PartsFormat::International => fast_cat::concat_str!(
                PLUS_SIGN,
                self.country,
                PART_SEPARATOR,
                self.area,
                PART_SEPARATOR,
                self.local
            ),
            PartsFormat::National => {
                fast_cat::concat_str!(TRUNK_PREFIX, self.area, PART_SEPARATOR, self.local)
            }
        }
    }
}

impl<'a> From<TelephoneParts<'a>> for (&'a str, &'a str, &'a str) {
    fn from(value: TelephoneParts<'a>) -> Self {
        value.into_tuple()
    }
}

impl fmt::Display for TelephoneParts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PLUS_SIGN}{} {} {}", self.country, self.area, self.local)
    }
}
