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

/// Returns byte offset of the `n`th char of `s`, or `s.len()` if the
/// string has `n` chars or fewer.
pub fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Slices `s` by char positions instead of bytes. Out of range bounds are
/// clamped to the end of the string, so this never panics and yields an
/// empty slice when `range` starts at or past the end.
pub fn char_window(s: &str, range: Range<usize>) -> &str {
    if range.start >= range.end {
        return "";
    }
    let start = char_offset(s, range.start);
    // continue from start instead of rescanning the prefix
    let end = start + char_offset(&s[start..], range.end - range.start);
    &s[start..end]
}
