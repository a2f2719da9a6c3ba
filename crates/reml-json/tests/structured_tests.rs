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

//! Structured back-end tests over the shared fixtures.

use reml_core::{Attribute, Format, FormatSet, OutputType, RenderOptions, Renderer, SpecRegistry};
use reml_json::{DictRenderer, RawRenderer};
use reml_test::fixtures;
use serde_json::json;

// The shared fixtures stop at one level of nesting; chained-detail tests
// need a registry whose role spec links on to a scope spec.
fn chained_registry() -> SpecRegistry {
    let mut reg = SpecRegistry::new();
    reg.register(
        "Orgs",
        FormatSet::new("Organizations", "", "Organization").with_format(Format::new(
            vec![OutputType::All],
            vec![
                Attribute::new("Name", "display_name"),
                Attribute::new("Roles", "roles").with_detail("Roles"),
            ],
        )),
    )
    .unwrap();
    reg.register(
        "Roles",
        FormatSet::new("Roles", "", "Role").with_format(Format::new(
            vec![OutputType::All],
            vec![
                Attribute::new("Role Name", "name"),
                Attribute::new("Scopes", "scopes").with_detail("Scopes"),
            ],
        )),
    )
    .unwrap();
    reg.register(
        "Scopes",
        FormatSet::new("Scopes", "", "Scope").with_format(Format::new(
            vec![OutputType::All],
            vec![Attribute::new("Name", "name")],
        )),
    )
    .unwrap();
    reg
}

fn org_with_scoped_role() -> serde_json::Value {
    json!({
        "display_name": "Acme",
        "relatedElements": [{
            "relatedElement": {
                "elementHeader": {"guid": "r-1", "type": {"typeName": "Role"}},
                "properties": {"name": "Admin"},
                "relatedElements": [{
                    "relatedElement": {
                        "elementHeader": {"guid": "s-1", "type": {"typeName": "Scope"}},
                        "properties": {"name": "EMEA"}
                    }
                }]
            }
        }]
    })
}

#[test]
fn dict_dedups_promoted_roles() {
    let reg = fixtures::org_registry();
    let resolved = reg.resolve("Orgs", OutputType::Dict).unwrap();
    let out = DictRenderer
        .render(
            &reg,
            &[fixtures::org_with_duplicate_role()],
            &resolved,
            &RenderOptions::default(),
        )
        .unwrap();
    let value = out.as_value().unwrap();
    let roles = value["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0]["name"], "Admin");
}

#[test]
fn dict_is_total_over_malformed_elements() {
    let reg = fixtures::org_registry();
    let resolved = reg.resolve("Orgs", OutputType::Dict).unwrap();
    let out = DictRenderer
        .render(
            &reg,
            &fixtures::malformed_elements(),
            &resolved,
            &RenderOptions::default(),
        )
        .unwrap();
    let value = out.as_value().unwrap();
    // One record per input, each carrying every declared column.
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), fixtures::malformed_elements().len());
    for record in records {
        assert!(record.get("display_name").is_some());
        assert!(record["roles"].as_array().unwrap().is_empty());
    }
}

#[test]
fn dict_column_order_matches_declaration() {
    let reg = fixtures::org_registry();
    let resolved = reg.resolve("Orgs", OutputType::Dict).unwrap();
    let out = DictRenderer
        .render(
            &reg,
            &[fixtures::org_with_roles()],
            &resolved,
            &RenderOptions::default(),
        )
        .unwrap();
    let keys: Vec<&String> = out.as_value().unwrap().as_object().unwrap().keys().collect();
    assert_eq!(keys, ["display_name", "description", "guid", "roles"]);
}

#[test]
fn dict_carries_second_level_nesting() {
    let reg = chained_registry();
    let resolved = reg.resolve("Orgs", OutputType::Dict).unwrap();
    let out = DictRenderer
        .render(
            &reg,
            &[org_with_scoped_role()],
            &resolved,
            &RenderOptions::default(),
        )
        .unwrap();
    let value = out.as_value().unwrap();
    let roles = value["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 1);
    let scopes = roles[0]["scopes"].as_array().unwrap();
    assert_eq!(scopes.len(), 1);
    assert_eq!(scopes[0]["name"], "EMEA");
}

#[test]
fn dict_round_trip_preserves_nested_levels() {
    // Feeding a rendered dict back through the renderer keeps both
    // nesting levels: the inlined arrays are re-promoted under their
    // column keys.
    let reg = chained_registry();
    let resolved = reg.resolve("Orgs", OutputType::Dict).unwrap();
    let first = DictRenderer
        .render(
            &reg,
            &[org_with_scoped_role()],
            &resolved,
            &RenderOptions::default(),
        )
        .unwrap()
        .as_value()
        .unwrap()
        .clone();
    let second = DictRenderer
        .render(
            &reg,
            std::slice::from_ref(&first),
            &resolved,
            &RenderOptions::default(),
        )
        .unwrap();
    let value = second.as_value().unwrap();
    assert_eq!(value["display_name"], "Acme");
    assert_eq!(value["roles"][0]["name"], "Admin");
    assert_eq!(value["roles"][0]["scopes"][0]["name"], "EMEA");
}

#[test]
fn raw_round_trips_the_batch() {
    let reg = fixtures::org_registry();
    let resolved = reg.resolve("Orgs", OutputType::Raw).unwrap();
    let elements = fixtures::peer_cycle();
    let out = RawRenderer
        .render(&reg, &elements, &resolved, &RenderOptions::default())
        .unwrap();
    assert_eq!(out.as_value().unwrap().as_array().unwrap().len(), 2);
    assert_eq!(out.as_value().unwrap()[0], elements[0]);
}
