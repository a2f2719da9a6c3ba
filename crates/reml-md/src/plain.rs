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

//! Legacy plain-markdown rendering.
//!
//! The original flat layout kept for older tooling: no document
//! preamble, no anchors or cross-links, nested data summarized inline.

use crate::util::summarize;
use reml_core::{
    element, Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat,
    SpecRegistry,
};
use serde_json::Value;

/// The `MD` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let mut out = String::new();
        let materializer = Materializer::with_limits(registry, opts.limits.clone());
        for el in elements {
            out.push_str(&format!("## {}\n\n", element::display_name(el)));
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
                if !text.is_empty() {
                    out.push_str(&format!("{}: {}\n", attr.name, text));
                }
            }
            out.push('\n');
        }
        Ok(Rendered::Text(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reml_core::{Attribute, Format, FormatSet, OutputType};
    use serde_json::json;

    #[test]
    fn test_plain_has_no_preamble_or_links() {
        let mut reg = SpecRegistry::new();
        reg.register(
            "Orgs",
            FormatSet::new("Organizations", "A description.", "Organization").with_format(
                Format::new(
                    vec![OutputType::All],
                    vec![Attribute::new("Name", "display_name").linked()],
                ),
            ),
        )
        .unwrap();
        let resolved = reg.resolve("Orgs", OutputType::Markdown).unwrap();
        let el = json!({"guid": "org-1", "display_name": "Acme"});
        let out = PlainRenderer
            .render(&reg, &[el], &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        assert!(text.contains("## Acme"));
        assert!(text.contains("Name: Acme"));
        assert!(!text.contains("# Organizations"));
        assert!(!text.contains("](#"));
    }
}
