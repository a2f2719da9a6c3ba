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

//! Canonical fixture elements and registries.

use reml_core::{Attribute, Format, FormatSet, OutputType, SpecRegistry};
use serde_json::{json, Value};

/// A registry with an `Orgs` set whose `roles` column promotes through a
/// `Roles` detail spec.
pub fn org_registry() -> SpecRegistry {
    let mut reg = SpecRegistry::new();
    reg.register(
        "Orgs",
        FormatSet::new("Organizations", "Registered organizations.", "Organization")
            .with_aliases(&["Organizations"])
            .with_format(Format::new(
                vec![OutputType::Table],
                vec![
                    Attribute::new("Name", "display_name").linked(),
                    Attribute::new("Description", "description"),
                    Attribute::new("Roles", "roles").with_detail("Roles"),
                ],
            ))
            .with_format(Format::new(
                vec![OutputType::All],
                vec![
                    Attribute::new("Name", "display_name"),
                    Attribute::new("Description", "description"),
                    Attribute::new("GUID", "guid"),
                    Attribute::new("Roles", "roles").with_detail("Roles"),
                ],
            )),
    )
    .expect("fixture registry is collision-free");
    reg.register(
        "Roles",
        FormatSet::new("Roles", "Roles held within an organization.", "Role").with_format(
            Format::new(
                vec![OutputType::All],
                vec![
                    Attribute::new("Role Name", "name"),
                    Attribute::new("GUID", "guid"),
                ],
            ),
        ),
    )
    .expect("fixture registry is collision-free");
    reg
}

/// One organization with two distinct roles.
pub fn org_with_roles() -> Value {
    json!({
        "elementHeader": {"guid": "org-1", "type": {"typeName": "Organization"}},
        "properties": {"displayName": "Acme", "description": "Widget maker"},
        "relatedElements": [
            role_summary("r-1", "Admin"),
            role_summary("r-2", "Steward")
        ]
    })
}

/// One organization where the same role guid is reachable through two
/// different relationships.
pub fn org_with_duplicate_role() -> Value {
    json!({
        "elementHeader": {"guid": "org-2", "type": {"typeName": "Organization"}},
        "properties": {"displayName": "Duplicated"},
        "relatedElements": [
            role_summary("r-1", "Admin"),
            {
                "relationshipProperties": {"via": "second path"},
                "relatedElement": {
                    "elementHeader": {"guid": "r-1", "type": {"typeName": "Role"}},
                    "properties": {"name": "Admin"}
                }
            }
        ]
    })
}

/// Two elements whose peer links form a cycle.
pub fn peer_cycle() -> Vec<Value> {
    vec![
        json!({
            "guid": "p-1",
            "display_name": "One",
            "relatedElements": [{
                "relationshipHeader": {"type": {"typeName": "PeerDuplicateLink"}},
                "relatedElement": {"guid": "p-2", "display_name": "Two"}
            }]
        }),
        json!({
            "guid": "p-2",
            "display_name": "Two",
            "relatedElements": [{
                "relationshipHeader": {"type": {"typeName": "PeerDuplicateLink"}},
                "relatedElement": {"guid": "p-1", "display_name": "One"}
            }]
        }),
    ]
}

/// Payload shapes the materializer must degrade on, not reject.
pub fn malformed_elements() -> Vec<Value> {
    vec![
        json!(null),
        json!(42),
        json!("just a string"),
        json!([]),
        json!({"relatedElements": "not an array"}),
        json!({"relatedElements": [null, 17, {"relatedElement": []}]}),
        json!({"properties": "not a map"}),
    ]
}

fn role_summary(guid: &str, name: &str) -> Value {
    json!({
        "relationshipHeader": {"type": {"typeName": "AssignmentScope"}},
        "relatedElement": {
            "elementHeader": {"guid": guid, "type": {"typeName": "Role"}},
            "properties": {"name": name}
        }
    })
}
