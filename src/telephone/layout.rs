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

use std::ops::Range;

use strum::IntoEnumIterator;

use super::{
    enums::Part,
    errors::LayoutError,
    helper_constants::{
        DEFAULT_AREA_CODE_LEN, DEFAULT_COUNTRY_CODE_LEN, DEFAULT_LOCAL_NUMBER_LEN,
        DEFAULT_PREFIX_LEN,
    },
};

/// Fixed char widths of every segment of a telephone number, in input order:
/// prefix marker, country code, area code, local number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitLayout {
    pub prefix_len: usize,
    pub country_len: usize,
    pub area_len: usize,
    pub local_len: usize,
}

impl SplitLayout {
    /// `+` `44` `1483` `924732`: windows `[1, 3)`, `[3, 7)` and `[7, 13)`.
    pub const DEFAULT: SplitLayout = SplitLayout {
        prefix_len: DEFAULT_PREFIX_LEN,
        country_len: DEFAULT_COUNTRY_CODE_LEN,
        area_len: DEFAULT_AREA_CODE_LEN,
        local_len: DEFAULT_LOCAL_NUMBER_LEN,
    };

    pub fn width(&self, part: Part) -> usize {
        match part {
            Part::Country => self.country_len,
            Part::Area => self.area_len,
            Part::Local => self.local_len,
        }
    }

    /// Returns the char positions occupied by `part`. Bounds saturate at
    /// `usize::MAX` for layouts rejected by validation.
    pub fn range(&self, part: Part) -> Range<usize> {
        let start = match part {
            Part::Country => self.prefix_len,
            Part::Area => self.prefix_len.saturating_add(self.country_len),
            Part::Local => self
                .prefix_len
                .saturating_add(self.country_len)
                .saturating_add(self.area_len),
        };
        start..start.saturating_add(self.width(part))
    }

    /// Total number of chars a well-formed number has under this layout,
    /// saturating at `usize::MAX`.
    pub fn nominal_len(&self) -> usize {
        self.checked_nominal_len().unwrap_or(usize::MAX)
    }

    fn checked_nominal_len(&self) -> Option<usize> {
        Part::iter().try_fold(self.prefix_len, |acc, part| acc.checked_add(self.width(part)))
    }

    pub(super) fn validate(&self) -> Result<(), LayoutError> {
        if let Some(part) = Part::iter().find(|part| self.width(*part) == 0) {
            return Err(LayoutError::EmptyPart(part));
        }
        if self.checked_nominal_len().is_none() {
            return Err(LayoutError::TooLong);
        }
        Ok(())
    }
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use crate::telephone::{enums::Part, errors::LayoutError, layout::SplitLayout};

    #[test]
    fn default_windows() {
        let layout = SplitLayout::DEFAULT;
        assert_eq!(layout.range(Part::Country), 1..3);
        assert_eq!(layout.range(Part::Area), 3..7);
        assert_eq!(layout.range(Part::Local), 7..13);
        assert_eq!(layout.nominal_len(), 13);
    }

    #[test]
    fn zero_width_part_is_rejected() {
        let layout = SplitLayout { area_len: 0, ..SplitLayout::DEFAULT };
        assert!(matches!(layout.validate(), Err(LayoutError::EmptyPart(Part::Area))));

        let no_prefix = SplitLayout { prefix_len: 0, ..SplitLayout::DEFAULT };
        assert!(no_prefix.validate().is_ok());
    }

    #[test]
    fn overflowing_layout_is_rejected() {
        let layout = SplitLayout { prefix_len: usize::MAX, ..SplitLayout::DEFAULT };
        assert!(matches!(layout.validate(), Err(LayoutError::TooLong)));
        assert_eq!(layout.nominal_len(), usize::MAX);
        assert_eq!(layout.range(Part::Local), usize::MAX..usize::MAX);

        let layout = SplitLayout { local_len: usize::MAX - 6, ..SplitLayout::DEFAULT };
        assert!(matches!(layout.validate(), Err(LayoutError::TooLong)));

        let largest = SplitLayout { local_len: usize::MAX - 7, ..SplitLayout::DEFAULT };
        assert!(largest.validate().is_ok());
        assert_eq!(largest.nominal_len(), usize::MAX);
    }
}
