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

//! HTML table wrapper over the materialized records.
//!
//! With the preamble enabled the output is a complete standalone
//! document; recursive/nested callers get just the `<table>` fragment.
//! All values pass through [`escape_html`].

use reml_core::{
    element, Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat,
    SpecRegistry,
};
use serde_json::Value;

/// The `HTML` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

/// Escape a value for HTML text content and attribute positions.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Renderer for HtmlRenderer {
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let materializer = Materializer::with_limits(registry, opts.limits.clone());
        let mut out = String::new();
        if opts.include_preamble {
            out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
            out.push_str(&format!(
                "<title>{}</title>\n</head>\n<body>\n",
                escape_html(&resolved.set.heading)
            ));
            out.push_str(&format!("<h1>{}</h1>\n", escape_html(&resolved.set.heading)));
            if !resolved.set.description.is_empty() {
                out.push_str(&format!("<p>{}</p>\n", escape_html(&resolved.set.description)));
            }
        }

        out.push_str("<table>\n<thead>\n<tr>");
        for attr in &resolved.format.attributes {
            out.push_str(&format!("<th>{}</th>", escape_html(&attr.name)));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");

        for el in elements {
            let record = materializer.materialize(el, resolved);
            out.push_str("<tr>");
            for attr in &resolved.format.attributes {
                let text = match &attr.detail_spec {
                    Some(detail_label) => materializer
                        .promoted_elements(el, &attr.key, detail_label)
                        .iter()
                        .map(element::display_name)
                        .collect::<Vec<_>>()
                        .join("; "),
                    None => record
                        .get(&attr.key)
                        .and_then(|f| f.as_scalar())
                        .map(element::scalar_text)
                        .unwrap_or_default(),
                };
                out.push_str(&format!("<td>{}</td>", escape_html(&text)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");

        if opts.include_preamble {
            out.push_str("</body>\n</html>\n");
        }
        Ok(Rendered::Text(out))
    }
}
