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

//! Vertical narrative rendering: one labeled block per element.
//!
//! Detail columns expand into a bulleted hierarchy, recursing into the
//! linked spec with the preamble suppressed. Recursion is bounded by the
//! depth budget and by the chain of specs already being rendered, so
//! mutually-referencing detail specs terminate.

use crate::util::{anchor_link, slug, summarize};
use reml_core::{
    element, Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat,
    SpecRegistry,
};
use serde_json::Value;
use std::collections::BTreeSet;

/// The `REPORT` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl Renderer for ReportRenderer {
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
        let materializer = Materializer::with_limits(registry, opts.limits.clone());
        let mut on_chain = BTreeSet::from([resolved.label.clone()]);
        for el in elements {
            render_block(
                registry,
                &materializer,
                el,
                resolved,
                &mut out,
                &mut on_chain,
                0,
            );
        }
        Ok(Rendered::Text(out))
    }
}

fn render_block(
    registry: &SpecRegistry,
    materializer: &Materializer<'_>,
    el: &Value,
    resolved: &ResolvedFormat<'_>,
    out: &mut String,
    on_chain: &mut BTreeSet<String>,
    indent: usize,
) {
    let pad = "  ".repeat(indent);
    let name = element::display_name(el);
    if indent == 0 {
        match element::guid(el) {
            Some(guid) => out.push_str(&format!("\n<a id=\"{}\"></a>\n\n## {}\n\n", slug(guid), name)),
            None => out.push_str(&format!("\n## {}\n\n", name)),
        }
    } else {
        out.push_str(&format!("{}- **{}**\n", pad, name));
    }

    let record = materializer.materialize(el, resolved);
    let field_pad = if indent == 0 {
        String::new()
    } else {
        "  ".repeat(indent + 1)
    };

    for attr in &resolved.format.attributes {
        match &attr.detail_spec {
            Some(detail_label) => {
                let promoted = materializer.promoted_elements(el, &attr.key, detail_label);
                if promoted.is_empty() {
                    continue;
                }
                let recurse = on_chain.insert(detail_label.clone());
                let nested = recurse
                    .then(|| detail_resolved(registry, detail_label, resolved))
                    .flatten();
                match nested {
                    Some(nested) => {
                        out.push_str(&format!("{}- **{}**:\n", field_pad, attr.name));
                        for child in &promoted {
                            render_block(
                                registry,
                                materializer,
                                child,
                                &nested,
                                out,
                                on_chain,
                                indent + 1,
                            );
                        }
                    }
                    // Spec already on the chain (or unresolvable): summarize.
                    None => out.push_str(&format!(
                        "{}- **{}**: {}\n",
                        field_pad,
                        attr.name,
                        summarize(&promoted)
                    )),
                }
                if recurse {
                    on_chain.remove(detail_label);
                }
            }
            None => {
                let text = record
                    .get(&attr.key)
                    .and_then(|f| f.as_scalar())
                    .map(element::scalar_text)
                    .unwrap_or_default();
                if text.is_empty() {
                    continue;
                }
                let text = if attr.link {
                    match element::guid(el) {
                        Some(guid) => anchor_link(&text, &slug(guid)),
                        None => text,
                    }
                } else {
                    text
                };
                out.push_str(&format!("{}- **{}**: {}\n", field_pad, attr.name, text));
            }
        }
    }
}

fn detail_resolved<'a>(
    registry: &'a SpecRegistry,
    detail_label: &str,
    parent: &ResolvedFormat<'_>,
) -> Option<ResolvedFormat<'a>> {
    let set = registry.get(detail_label).ok()?;
    let format = set.format_for_lenient(parent.output_type)?;
    Some(ResolvedFormat {
        label: detail_label.to_string(),
        set,
        format,
        output_type: parent.output_type,
    })
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
                        Attribute::new("Name", "display_name"),
                        Attribute::new("Description", "description"),
                        Attribute::new("Roles", "roles").with_detail("Roles"),
                    ],
                )),
        )
        .unwrap();
        reg.register(
            "Roles",
            FormatSet::new("Roles", "Roles held.", "Role").with_format(Format::new(
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
            "description": "Widget maker",
            "relatedElements": [{
                "relatedElement": {
                    "elementHeader": {"guid": "r-1", "type": {"typeName": "Role"}},
                    "properties": {"name": "Admin"}
                }
            }]
        })
    }

    #[test]
    fn test_narrative_block() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Report).unwrap();
        let out = ReportRenderer
            .render(&reg, &[acme()], &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        assert!(text.contains("# Organizations"));
        assert!(text.contains("## Acme"));
        assert!(text.contains("- **Description**: Widget maker"));
        assert!(text.contains("- **Roles**:"));
        assert!(text.contains("- **Admin**"));
    }

    #[test]
    fn test_exactly_one_top_level_heading() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Report).unwrap();
        let out = ReportRenderer
            .render(&reg, &[acme()], &resolved, &RenderOptions::default())
            .unwrap();
        let text = out.as_text().unwrap();
        let top_headings = text
            .lines()
            .filter(|l| l.starts_with("# ") && !l.starts_with("## "))
            .count();
        assert_eq!(top_headings, 1);
    }

    #[test]
    fn test_empty_scalars_omitted() {
        let reg = registry();
        let resolved = reg.resolve("Orgs", OutputType::Report).unwrap();
        let out = ReportRenderer
            .render(
                &reg,
                &[json!({"display_name": "Bare"})],
                &resolved,
                &RenderOptions::default(),
            )
            .unwrap();
        let text = out.as_text().unwrap();
        assert!(text.contains("## Bare"));
        assert!(!text.contains("**Description**"));
        assert!(!text.contains("**Roles**"));
    }

    #[test]
    fn test_self_referencing_detail_summarizes_instead_of_looping() {
        let mut reg = SpecRegistry::new();
        reg.register(
            "Folders",
            FormatSet::new("Folders", "", "Folder").with_format(Format::new(
                vec![OutputType::All],
                vec![
                    Attribute::new("Name", "display_name"),
                    Attribute::new("Children", "children").with_detail("Folders"),
                ],
            )),
        )
        .unwrap();
        let el = json!({
            "guid": "f-1",
            "display_name": "Top",
            "typeName": "Folder",
            "relatedElements": [{
                "relatedElement": {
                    "elementHeader": {"guid": "f-2", "type": {"typeName": "Folder"}},
                    "properties": {"name": "Child"},
                    "relatedElements": [{
                        "relatedElement": {
                            "elementHeader": {"guid": "f-1", "type": {"typeName": "Folder"}},
                            "properties": {"name": "Top"}
                        }
                    }]
                }
            }]
        });
        let resolved = reg.resolve("Folders", OutputType::Report).unwrap();
        let out = ReportRenderer
            .render(&reg, &[el], &resolved, &RenderOptions::default())
            .unwrap();
        // Terminates, and the child level summarizes rather than expanding.
        let text = out.as_text().unwrap();
        assert!(text.contains("## Top"));
        assert!(text.contains("Child"));
    }
}
