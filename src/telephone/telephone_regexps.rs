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

use regex::Regex;

use super::helper_constants::DIGITS;

pub(super) struct TelephoneRegExps {
    /// Matches a single decimal digit from any script, e.g. `4` or `４`.
    pub digit_pattern: Regex,
}

impl TelephoneRegExps {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            digit_pattern: Regex::new(&format!("^{DIGITS}$"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TelephoneRegExps;

    #[test]
    fn digit_pattern_matches_single_decimal() {
        let reg_exps = TelephoneRegExps::new().unwrap();
        assert!(reg_exps.digit_pattern.is_match("7"));
        assert!(reg_exps.digit_pattern.is_match("\u{FF17}"));
        assert!(!reg_exps.digit_pattern.is_match("x"));
        assert!(!reg_exps.digit_pattern.is_match("77"));
    }
}
