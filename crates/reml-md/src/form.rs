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

//! Form-style rendering: editable, concise blocks.
//!
//! Like the narrative report, but nested columns are always summarized
//! so the output stays flat enough to edit and send back.

use crate::util::summarize;
use reml_core::{
    element, Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat,
    SpecRegistry,
};
use serde_json::Value;

/// The `FORM` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormRenderer;

impl Renderer for FormRenderer {
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let mut out = String::new();
        if opts.include_preamble {
            out.push_str(&format!("# {} Form\n", resolved.set.heading));
            if !resolved.set.description.is_empty() {
                out.push_str(&format!("\n{}\n", resolved.set.description));
            }
        }
        let materializer = Materializer::with_limits(registry, opts.limits.clone());
        for el in elements {
            out.push_str(&format!("\n## {}\n\n", element::display_name(el)));
            let record = materializer.materialize(el, resolved);
            for attr in &resolved.format.attributes {
                let text = match &attr.detail_spec {
                    Some(detail_label) => {
                        summarize(&materializer.promoted_elements(el, &attr.key, detail_label))
                    }
                    None => record
                        .get(&attr.key)
                        .and_then(|f| f.as_scalar())
                        .map(element::scalar_text)
                        .unwrap_or_default(),
                };
                out.push_str(&format!("- **{}**: {}\n", attr.name, text));
            }
        }
        Ok(Rendered::Text(out))
    }
}
