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

use log::trace;

const GREETING: &'static str = "Hello";

/// Prepares a greeting message for a user.
///
/// Names are appended right after `Hello` with no separators, so
/// `greet(Some("Ada"), Some("Lovelace"))` is `"HelloAdaLovelace"`.
/// A missing name contributes nothing.
pub fn greet(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let greeting = fast_cat::concat_str!(
        GREETING,
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    );
    trace!("Prepared greeting {:?}", greeting);
    greeting
}
