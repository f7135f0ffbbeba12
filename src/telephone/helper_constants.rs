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

// Widths of the default layout, e.g. `+` `44` `1483` `924732`.
pub const DEFAULT_PREFIX_LEN: usize = 1;
pub const DEFAULT_COUNTRY_CODE_LEN: usize = 2;
pub const DEFAULT_AREA_CODE_LEN: usize = 4;
pub const DEFAULT_LOCAL_NUMBER_LEN: usize = 6;

/// Characters accepted as a leading marker by strict splitting: the plus
/// sign, its full-width variant and the `0` trunk/access digit.
pub const VALID_PREFIX_CHARS: &'static str = "+\u{FF0B}0";

pub const PLUS_SIGN: &'static str = "+";
pub const TRUNK_PREFIX: &'static str = "0";
pub const PART_SEPARATOR: &'static str = " ";

pub const DIGITS: &'static str = r"\p{Nd}";
