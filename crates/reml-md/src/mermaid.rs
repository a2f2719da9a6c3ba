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

//! Mermaid `flowchart` text over the same closure the graph report walks.
//!
//! Child relationships become directed edges, peer relationships
//! undirected ones. Node identifiers are sanitized for mermaid syntax;
//! labels carry the display name.

use reml_core::{
    element, Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat,
    SpecRegistry,
};
use serde_json::Value;
use std::collections::BTreeSet;

/// The `MERMAID` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidRenderer;

impl Renderer for MermaidRenderer {
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let materializer = Materializer::with_limits(registry, opts.limits.clone());
        let mut out = String::from("flowchart TD\n");
        let mut declared = BTreeSet::new();
        let mut edges = BTreeSet::new();
        let mut queue: Vec<Value> = elements.to_vec();
        let mut emitted = 0usize;

        while let Some(el) = queue.pop() {
            let id = mermaid_id(&el);
            if !declared.insert(id.clone()) {
                continue;
            }
            if emitted >= opts.limits.max_graph_nodes {
                out.push_str("    %% truncated: node budget reached\n");
                break;
            }
            emitted += 1;
            out.push_str(&format!("    {}[\"{}\"]\n", id, mermaid_label(&el)));

            for attr in &resolved.format.attributes {
                let Some(detail_label) = &attr.detail_spec else {
                    continue;
                };
                for child in materializer.promoted_elements(&el, &attr.key, detail_label) {
                    edges.insert(format!("    {} --> {}", id, mermaid_id(&child)));
                    queue.push(child);
                }
            }
            for summary in element::related_summaries(&el) {
                let is_peer = element::relationship_type(summary)
                    .map(|t| t.to_lowercase().contains("peer"))
                    .unwrap_or(false);
                if !is_peer {
                    continue;
                }
                if let Some(peer) = element::related_element(summary) {
                    let peer_id = mermaid_id(peer);
                    // One undirected edge per pair, regardless of which
                    // side we reached first.
                    let (a, b) = if id <= peer_id {
                        (id.clone(), peer_id)
                    } else {
                        (mermaid_id(peer), id.clone())
                    };
                    edges.insert(format!("    {} --- {}", a, b));
                    queue.push(peer.clone());
                }
            }
        }

        for edge in edges {
            out.push_str(&edge);
            out.push('\n');
        }
        Ok(Rendered::Text(out))
    }
}

fn mermaid_id(el: &Value) -> String {
    let raw = element::guid(el)
        .map(str::to_string)
        .unwrap_or_else(|| element::display_name(el));
    let mut id: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if id.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        id.insert(0, 'n');
    }
    id
}

fn mermaid_label(el: &Value) -> String {
    element::display_name(el).replace('"', "'")
}
