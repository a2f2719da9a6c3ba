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

//! Render command - element file through a spec to any output type

use super::{read_file, write_output};
use crate::error::CliError;
use reml::{OutputType, RenderLimits, RenderOptions, SpecRegistry};
use serde_json::Value;
use std::path::Path;

/// Render the elements in `file` through `spec` as `output_type`.
///
/// The file holds one element object or an array of them; any other JSON
/// shape is treated as a single malformed element and rendered with
/// placeholders rather than rejected. Text output goes to `out` or
/// stdout; structured output is pretty-printed.
#[allow(clippy::too_many_arguments)]
pub fn render(
    registry: &SpecRegistry,
    file: &Path,
    spec: &str,
    output_type: OutputType,
    out: Option<&Path>,
    no_preamble: bool,
    max_depth: Option<usize>,
) -> Result<(), CliError> {
    let text = read_file(file)?;
    let payload: Value = serde_json::from_str(&text)?;
    let elements: Vec<Value> = match payload {
        Value::Array(items) => items,
        other => vec![other],
    };

    let limits = match max_depth {
        Some(depth) => RenderLimits::with_depth(depth),
        None => RenderLimits::default(),
    };
    let opts = RenderOptions {
        include_preamble: !no_preamble,
        limits,
    };

    let rendered = reml::render_elements(registry, &elements, spec, output_type, &opts)?;
    let mut output = rendered.to_display_string();
    if !output.ends_with('\n') {
        output.push('\n');
    }
    write_output(&output, out)
}
