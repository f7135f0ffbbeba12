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

use thiserror::Error;

use super::enums::Part;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Layout has zero width for {0}")]
    EmptyPart(Part),
    #[error("Layout widths add up to more than usize::MAX characters")]
    TooLong,
    #[error("An error occurred while trying to create regex: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Reasons a number is rejected by strict splitting. Positions are counted
/// in chars from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFormatError {
    #[error("Too short: expected {expected} characters, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("Too long: expected {expected} characters, got {actual}")]
    TooLong { expected: usize, actual: usize },
    #[error("Invalid prefix character {found:?} at position {position}")]
    InvalidPrefix { position: usize, found: char },
    #[error("Not a digit: {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
}
