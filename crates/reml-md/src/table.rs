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

//! Tabular markdown rendering: one row per element.
//!
//! Detail columns render a compact summary in the cell plus a link to a
//! sub-section appended after the table, where the promoted elements are
//! rendered with the linked spec (preamble suppressed). Detail chains
//! are walked recursively; a spec already rendered on the current chain
//! only gets its cell summary, which keeps mutually-referencing specs
//! from looping.

use crate::util::{anchor_link, escape_cell, slug, summarize};
use reml_core::{
    element, Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat,
    SpecRegistry,
};
use serde_json::Value;
use std::collections::BTreeSet;

/// The `TABLE` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let mut out = String::new();
        let mut on_chain = BTreeSet::from([resolved.label.clone()]);
        render_table(registry, elements, resolved, opts, &mut out, &mut on_chain, 0);
        Ok(Rendered::Text(out))
    }
}

fn render_table(
    registry: &SpecRegistry,
    elements: &[Value],
    resolved: &ResolvedFormat<'_>,
    opts: &RenderOptions,
    out: &mut String,
    on_chain: &mut BTreeSet<String>,
    level: usize,
) {
    let materializer = Materializer::with_limits(registry, opts.limits.clone());

    if opts.include_preamble {
        out.push_str(&format!("# {}\n\n", resolved.set.heading));
        if !resolved.set.description.is_empty() {
            out.push_str(&format!("{}\n\n", resolved.set.description));
        }
    }

    let attrs = &resolved.format.attributes;
    out.push('|');
    for attr in attrs {
        out.push_str(&format!(" {} |", escape_cell(&attr.name)));
    }
    out.push_str("\n|");
    for _ in attrs {
        out.push_str("---|");
    }
    out.push('\n');

    // Promoted elements per detail column, pooled across all rows for the
    // sub-sections below the table.
    let mut pooled: Vec<(String, Vec<Value>)> = Vec::new();

    for el in elements {
        let record = materializer.materialize(el, resolved);
        out.push('|');
        for attr in attrs {
            let cell = match &attr.detail_spec {
                Some(detail_label) => {
                    let promoted = materializer.promoted_elements(el, &attr.key, detail_label);
                    let summary = escape_cell(&summarize(&promoted));
                    pool_promoted(&mut pooled, detail_label, promoted);
                    if summary.is_empty() {
                        summary
                    } else {
                        let target = detail_anchor(registry, detail_label);
                        format!("{} {}", summary, anchor_link("»", &target))
                    }
                }
                None => {
                    let text = record
                        .get(&attr.key)
                        .and_then(|f| f.as_scalar())
                        .map(element::scalar_text)
                        .unwrap_or_default();
                    let text = escape_cell(&text);
                    if attr.link && !text.is_empty() {
                        match element::guid(el) {
                            Some(guid) => anchor_link(&text, &slug(guid)),
                            None => text,
                        }
                    } else {
                        text
                    }
                }
            };
            out.push_str(&format!(" {} |", cell));
        }
        out.push('\n');
    }

    // One sub-section per detail column, rendered with the linked spec.
    for (detail_label, promoted) in pooled {
        if promoted.is_empty() || !on_chain.insert(detail_label.clone()) {
            continue;
        }
        if let Ok(detail_set) = registry.get(&detail_label) {
            if let Some(detail_format) = detail_set.format_for_lenient(resolved.output_type) {
                let nested = ResolvedFormat {
                    label: detail_label.clone(),
                    set: detail_set,
                    format: detail_format,
                    output_type: resolved.output_type,
                };
                let heading_level = "#".repeat((level + 2).min(6));
                out.push_str(&format!(
                    "\n<a id=\"{}\"></a>\n\n{} {}\n\n",
                    detail_anchor(registry, &detail_label),
                    heading_level,
                    detail_set.heading
                ));
                render_table(
                    registry,
                    &promoted,
                    &nested,
                    &opts.nested(),
                    out,
                    on_chain,
                    level + 1,
                );
            }
        }
        on_chain.remove(&detail_label);
    }
}

fn pool_promoted(pooled: &mut Vec<(String, Vec<Value>)>, label: &str, promoted: Vec<Value>) {
    match pooled.iter_mut().find(|(l, _)| l == label) {
        Some((_, existing)) => {
            for el in promoted {
                let duplicate = element::guid(&el)
                    .map(|g| existing.iter().any(|e| element::guid(e) == Some(g)))
                    .unwrap_or(false);
                if !duplicate {
                    existing.push(el);
                }
            }
        }
        None => pooled.push((label.to_string(), promoted)),
    }
}

fn detail_anchor(registry: &SpecRegistry, detail_label: &str) -> String {
    registry
        .get(detail_label)
        .map(|set| slug(&set.heading))
        .unwrap_or_else(|_| slug(detail_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reml_core::{Attribute, Format, FormatSet, OutputType};
    use serde_json::json;

    fn registry() -> SpecRegistry {
        let mut reg = SpecRegistry::new();
        reg.register(
            "Orgs",
            FormatSet::new("Organizations", "Registered organizations.", "Organization")
                .with_format(Format::new(
                    vec![OutputType::All],
                    vec![
                        Attribute::new("Name", "display_name").linked(),
                        Attribute::new("Roles", "roles").with_detail("Roles"),
                    ],
                )),
        )
        .unwrap();
        reg.register(
            "Roles",
            FormatSet::new("Roles", "", "Role").with_format(Format::new(
                vec![OutputType::All],
                vec![Attribute::new("Role Name", "name")],
            )),
        )
        .unwrap();
        reg
    }

    fn acme() -> Value {
        json!({
            "guid": "org-1",
            "display_name": "Acme",
            "relatedElements": [{
                "relatedElement": {
                    "elementHeader": {"guid": "r-1", "type": {"typeName": "Role"}},
                    "properties": {"name": "Admin"}
                }
            }]
        })
    }

    #[test]
    fn test_table_layout() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Table).unwrap();
        let out = TableRenderer
            .render(&reg, &[acme()], &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        assert!(text.starts_with("# Organizations\n"));
        assert!(text.contains("| Name | Roles |"));
        assert!(text.contains("[Acme](#org-1)"));
        assert!(text.contains("Admin"));
    }

    #[test]
    fn test_detail_subsection_without_second_preamble() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Table).unwrap();
        let out = TableRenderer
            .render(&reg, &[acme()], &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        // Sub-section for Roles appears once, below the table.
        assert!(text.contains("## Roles"));
        assert!(text.contains("| Role Name |"));
        // Exactly one top-level heading.
        assert_eq!(text.matches("\n# ").count() + usize::from(text.starts_with("# ")), 1);
    }

    #[test]
    fn test_preamble_suppressed() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Table).unwrap();
        let opts = RenderOptions {
            include_preamble: false,
            ..Default::default()
        };
        let out = TableRenderer.render(&reg, &[acme()], &resolved, &opts).unwrap();
        assert!(!out.as_text().unwrap().contains("# Organizations"));
    }

    #[test]
    fn test_pipe_escaped_in_cells() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Table).unwrap();
        let el = json!({"display_name": "A|B"});
        let out = TableRenderer
            .render(&reg, &[el], &resolved, &RenderOptions::default())
            .unwrap();
        assert!(out.as_text().unwrap().contains("A\\|B"));
    }

    #[test]
    fn test_malformed_element_renders_empty_row() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Table).unwrap();
        let out = TableRenderer
            .render(&reg, &[json!(42), acme()], &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        // The good element still renders.
        assert!(text.contains("Acme"));
    }
}
