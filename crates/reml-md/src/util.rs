// Dweve REML - Report Element Materialization Library
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Small markdown helpers shared by the renderers.

use reml_core::element;
use serde_json::Value;

/// Escape a value for use inside a markdown table cell.
///
/// Pipes would break the row and newlines would break the table, so both
/// are rewritten.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

/// A GitHub-style anchor slug for a heading or identifier.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            out.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// A markdown link to an in-document anchor.
pub fn anchor_link(text: &str, anchor: &str) -> String {
    format!("[{}](#{})", text, anchor)
}

/// Compact cell summary of promoted elements: display names joined.
pub fn summarize(promoted: &[Value]) -> String {
    promoted
        .iter()
        .map(element::display_name)
        .collect::<Vec<_>>()
        .join("; ")
}
