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

use log::{debug, trace};

use super::{
    enums::Part,
    errors::{InvalidFormatError, LayoutError},
    helper_constants::VALID_PREFIX_CHARS,
    helper_types::TelephoneParts,
    layout::SplitLayout,
    telephone_regexps::TelephoneRegExps,
};
use crate::string_util::char_window;

pub struct TelephoneSplitter {
    /// Char widths of every segment of the number.
    layout: SplitLayout,

    /// Patterns used by strict splitting, compiled once.
    reg_exps: TelephoneRegExps,
}

impl TelephoneSplitter {
    /// Creates a splitter for the `+` `44` `1483` `924732` layout.
    pub fn new() -> Self {
        match Self::with_layout(SplitLayout::DEFAULT) {
            Ok(splitter) => splitter,
            Err(err) => {
                let err_message = format!("Could not build splitter for default layout: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    pub fn with_layout(layout: SplitLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let reg_exps = TelephoneRegExps::new()?;
        Ok(Self { layout, reg_exps })
    }

    pub fn layout(&self) -> SplitLayout {
        self.layout
    }

    /// Splits `phone_number` into country code, area code and local number by
    /// position alone.
    ///
    /// Nothing is validated: the prefix is skipped whatever it is, parts may
    /// contain any characters, and input shorter than the nominal length yields
    /// truncated or empty parts. Characters past the nominal length are ignored.
    pub fn split<'a>(&self, phone_number: &'a str) -> TelephoneParts<'a> {
        let window = |part: Part| char_window(phone_number, self.layout.range(part));
        let parts = TelephoneParts::new(
            window(Part::Country),
            window(Part::Area),
            window(Part::Local),
        );
        // local part is the last one, so it's short only when the input is
        if parts.local.chars().count() < self.layout.local_len {
            debug!(
                "Input {:?} is shorter than {} characters, parts are truncated",
                phone_number,
                self.layout.nominal_len()
            );
        }
        trace!("Split {:?} into {:?}", phone_number, parts);
        parts
    }

    /// Same as [`split`](Self::split), but only accepts input of exactly the
    /// nominal length made of valid prefix characters followed by decimal
    /// digits.
    pub fn split_strict<'a>(
        &self,
        phone_number: &'a str,
    ) -> Result<TelephoneParts<'a>, InvalidFormatError> {
        let expected = self.layout.nominal_len();
        let actual = phone_number.chars().count();
        if actual < expected {
            return Err(InvalidFormatError::TooShort { expected, actual });
        }
        if actual > expected {
            return Err(InvalidFormatError::TooLong { expected, actual });
        }

        for (position, found) in phone_number.chars().enumerate() {
            if position < self.layout.prefix_len {
                if !VALID_PREFIX_CHARS.contains(found) {
                    return Err(InvalidFormatError::InvalidPrefix { position, found });
                }
            } else if !self.is_digit(found) {
                return Err(InvalidFormatError::NonDigit { position, found });
            }
        }
        Ok(self.split(phone_number))
    }

    /// Checks whether [`split_strict`](Self::split_strict) would accept
    /// `phone_number`.
    pub fn is_viable(&self, phone_number: &str) -> bool {
        self.split_strict(phone_number).is_ok()
    }

    fn is_digit(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.reg_exps.digit_pattern.is_match(c.encode_utf8(&mut buf))
    }
}

impl Default for TelephoneSplitter {
    fn default() -> Self {
        Self::new()
    }
}
