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

//! Linked graph report: one anchored section per unique element.
//!
//! Walks the transitive closure of peer and child relationships from the
//! root elements. Each identifier is rendered exactly once; every later
//! reference becomes a hyperlink to its anchor. The visited map is scoped
//! to one render call, so concurrent renders do not interfere.
//!
//! Children are the elements promoted through the format's detail-spec
//! columns. Peers are relationship summaries whose relationship type
//! contains `peer` (case-insensitive), rendered with the same spec as
//! the element that references them.

use crate::util::{anchor_link, slug};
use reml_core::{
    element, Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat,
    SpecRegistry,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// The `GRAPH` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer;

#[derive(Debug, Clone, Copy, PartialEq)]
enum NodeState {
    Rendering,
    Rendered,
}

struct Walk<'a> {
    registry: &'a SpecRegistry,
    materializer: Materializer<'a>,
    visited: BTreeMap<String, NodeState>,
    emitted: usize,
    truncated: bool,
    max_nodes: usize,
}

impl Renderer for GraphRenderer {
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let mut out = String::new();
        if opts.include_preamble {
            out.push_str(&format!("# {}\n", resolved.set.heading));
            if !resolved.set.description.is_empty() {
                out.push_str(&format!("\n{}\n", resolved.set.description));
            }
        }
        let mut walk = Walk {
            registry,
            materializer: Materializer::with_limits(registry, opts.limits.clone()),
            visited: BTreeMap::new(),
            emitted: 0,
            truncated: false,
            max_nodes: opts.limits.max_graph_nodes,
        };
        for el in elements {
            walk.visit(el, resolved, &mut out, 0);
        }
        if walk.truncated {
            out.push_str("\n*Graph truncated: node budget reached.*\n");
        }
        Ok(Rendered::Text(out))
    }
}

impl<'a> Walk<'a> {
    fn visit(&mut self, el: &Value, resolved: &ResolvedFormat<'_>, out: &mut String, level: usize) {
        let id = node_id(el);
        if self.visited.contains_key(&id) {
            return;
        }
        if self.emitted >= self.max_nodes {
            self.truncated = true;
            return;
        }
        self.visited.insert(id.clone(), NodeState::Rendering);
        self.emitted += 1;

        let heading = "#".repeat((level + 2).min(6));
        out.push_str(&format!(
            "\n<a id=\"{}\"></a>\n\n{} {}\n\n",
            id,
            heading,
            element::display_name(el)
        ));

        // Scalar properties of this node.
        let record = self.materializer.materialize(el, resolved);
        for attr in &resolved.format.attributes {
            if attr.detail_spec.is_some() {
                continue;
            }
            let text = record
                .get(&attr.key)
                .and_then(|f| f.as_scalar())
                .map(element::scalar_text)
                .unwrap_or_default();
            if !text.is_empty() {
                out.push_str(&format!("- **{}**: {}\n", attr.name, text));
            }
        }

        let peers = peer_elements(el);
        if !peers.is_empty() {
            out.push_str("\n**Peers**:\n");
            for peer in &peers {
                out.push_str(&format!(
                    "- {}\n",
                    anchor_link(&element::display_name(peer), &node_id(peer))
                ));
            }
        }

        // Children per detail column, pooled with their spec for the
        // recursive sections below.
        let mut child_groups: Vec<(ResolvedFormat<'a>, Vec<Value>)> = Vec::new();
        for attr in &resolved.format.attributes {
            let Some(detail_label) = &attr.detail_spec else {
                continue;
            };
            let children = self.materializer.promoted_elements(el, &attr.key, detail_label);
            if children.is_empty() {
                continue;
            }
            out.push_str(&format!("\n**{}**:\n", attr.name));
            for child in &children {
                out.push_str(&format!(
                    "- {}\n",
                    anchor_link(&element::display_name(child), &node_id(child))
                ));
            }
            if let Some(nested) = self.detail_resolved(detail_label, resolved) {
                child_groups.push((nested, children));
            }
        }

        // Sections for unvisited references; already-visited identifiers
        // stay links only.
        for peer in &peers {
            self.visit(peer, resolved, out, level);
        }
        for (nested, children) in &child_groups {
            for child in children {
                self.visit(child, nested, out, level + 1);
            }
        }

        self.visited.insert(id, NodeState::Rendered);
    }

    fn detail_resolved(
        &self,
        detail_label: &str,
        parent: &ResolvedFormat<'_>,
    ) -> Option<ResolvedFormat<'a>> {
        let set = self.registry.get(detail_label).ok()?;
        let format = set.format_for_lenient(parent.output_type)?;
        Some(ResolvedFormat {
            label: detail_label.to_string(),
            set,
            format,
            output_type: parent.output_type,
        })
    }
}

/// Stable per-render identifier: the guid when present, else a slug of
/// the display name.
fn node_id(el: &Value) -> String {
    match element::guid(el) {
        Some(guid) => slug(guid),
        None => slug(&element::display_name(el)),
    }
}

/// Related elements linked through a peer relationship.
fn peer_elements(el: &Value) -> Vec<Value> {
    element::related_summaries(el)
        .iter()
        .filter(|summary| {
            element::relationship_type(summary)
                .map(|t| t.to_lowercase().contains("peer"))
                .unwrap_or(false)
        })
        .filter_map(element::related_element)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reml_core::{Attribute, Format, FormatSet, OutputType, RenderLimits};
    use serde_json::json;

    fn registry() -> SpecRegistry {
        let mut reg = SpecRegistry::new();
        reg.register(
            "Supply Chains",
            FormatSet::new("Supply Chains", "Information supply chains.", "InformationSupplyChain")
                .with_format(Format::new(
                    vec![OutputType::Graph],
                    vec![
                        Attribute::new("Name", "display_name"),
                        Attribute::new("Scope", "scope"),
                        Attribute::new("Segments", "segments").with_detail("Segments"),
                    ],
                )),
        )
        .unwrap();
        reg.register(
            "Segments",
            FormatSet::new("Segments", "", "Segment").with_format(Format::new(
                vec![OutputType::All],
                vec![Attribute::new("Name", "display_name")],
            )),
        )
        .unwrap();
        reg
    }

    fn peer_pair() -> Vec<Value> {
        let one = json!({
            "guid": "sc-1",
            "display_name": "Chain One",
            "relatedElements": [{
                "relationshipHeader": {"type": {"typeName": "PeerLink"}},
                "relatedElement": {"guid": "sc-2", "display_name": "Chain Two"}
            }]
        });
        let two = json!({
            "guid": "sc-2",
            "display_name": "Chain Two",
            "relatedElements": [{
                "relationshipHeader": {"type": {"typeName": "PeerLink"}},
                "relatedElement": {"guid": "sc-1", "display_name": "Chain One"}
            }]
        });
        vec![one, two]
    }

    #[test]
    fn test_cyclic_peers_render_once_with_cross_links() {
        let reg = registry();
        let resolved = reg.resolve("Supply Chains", OutputType::Graph).unwrap();
        let out = GraphRenderer
            .render(&reg, &peer_pair(), &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        // Each node rendered exactly once.
        assert_eq!(text.matches("<a id=\"sc-1\"></a>").count(), 1);
        assert_eq!(text.matches("<a id=\"sc-2\"></a>").count(), 1);
        // Each links to the other.
        assert!(text.contains("[Chain Two](#sc-2)"));
        assert!(text.contains("[Chain One](#sc-1)"));
    }

    #[test]
    fn test_children_get_sections_and_links() {
        let reg = registry();
        let resolved = reg.resolve("Supply Chains", OutputType::Graph).unwrap();
        let el = json!({
            "guid": "sc-1",
            "display_name": "Chain One",
            "scope": "EMEA",
            "relatedElements": [{
                "relatedElement": {
                    "elementHeader": {"guid": "seg-1", "type": {"typeName": "Segment"}},
                    "properties": {"name": "Ingest"}
                }
            }]
        });
        let out = GraphRenderer
            .render(&reg, &[el], &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        assert!(text.contains("- **Scope**: EMEA"));
        assert!(text.contains("**Segments**:\n- [Ingest](#seg-1)"));
        assert!(text.contains("<a id=\"seg-1\"></a>"));
        assert!(text.contains("### Ingest"));
    }

    #[test]
    fn test_node_budget_truncates() {
        let reg = registry();
        let resolved = reg.resolve("Supply Chains", OutputType::Graph).unwrap();
        let opts = RenderOptions {
            include_preamble: true,
            limits: RenderLimits {
                max_graph_nodes: 1,
                ..RenderLimits::default()
            },
        };
        let out = GraphRenderer
            .render(&reg, &peer_pair(), &resolved, &opts)
            .unwrap();
        let text = out.as_text().unwrap();
        assert_eq!(text.matches("<a id=").count(), 1);
        assert!(text.contains("Graph truncated"));
    }

    #[test]
    fn test_guidless_nodes_key_by_name() {
        let reg = registry();
        let resolved = reg.resolve("Supply Chains", OutputType::Graph).unwrap();
        let el = json!({"display_name": "No Guid Chain"});
        let out = GraphRenderer
            .render(&reg, &[el], &resolved, &RenderOptions::default())
            .unwrap();
        assert!(out.as_text().unwrap().contains("<a id=\"no-guid-chain\"></a>"));
    }
}
