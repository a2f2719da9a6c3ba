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

//! Property tests for selector determinism and materializer totality.

use proptest::prelude::*;
use reml_core::{Attribute, Format, FormatSet, Materializer, OutputType, SpecRegistry};
use serde_json::{json, Value};

fn output_type_strategy() -> impl Strategy<Value = OutputType> {
    prop::sample::select(OutputType::CONCRETE.to_vec())
}

// Arbitrary JSON values of bounded depth; enough to exercise every
// degradation path in the materializer.
fn json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9_ ]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-zA-Z_]{1,10}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn wildcard_registry() -> SpecRegistry {
    let mut reg = SpecRegistry::new();
    reg.register(
        "Things",
        FormatSet::new("Things", "", "Thing")
            .with_format(Format::new(
                vec![OutputType::Table],
                vec![
                    Attribute::new("Name", "display_name"),
                    Attribute::new("GUID", "guid"),
                ],
            ))
            .with_format(Format::new(
                vec![OutputType::All],
                vec![
                    Attribute::new("Name", "display_name"),
                    Attribute::new("Related", "related").with_detail("Things"),
                ],
            )),
    )
    .unwrap();
    reg
}

proptest! {
    #[test]
    fn selector_is_deterministic(t in output_type_strategy()) {
        let reg = wildcard_registry();
        let first = reg.resolve("Things", t).unwrap().format.clone();
        for _ in 0..4 {
            let again = reg.resolve("Things", t).unwrap().format.clone();
            prop_assert_eq!(&first, &again);
        }
    }

    #[test]
    fn wildcard_only_set_resolves_every_type(t in output_type_strategy()) {
        let mut reg = SpecRegistry::new();
        reg.register(
            "W",
            FormatSet::new("W", "", "Thing").with_format(Format::new(
                vec![OutputType::All],
                vec![Attribute::new("Name", "name")],
            )),
        )
        .unwrap();
        let resolved = reg.resolve("W", t).unwrap();
        prop_assert_eq!(resolved.format.attributes.len(), 1);
    }

    #[test]
    fn materializer_is_total_over_arbitrary_json(el in json_strategy(), t in output_type_strategy()) {
        let reg = wildcard_registry();
        let resolved = reg.resolve("Things", t).unwrap();
        let m = Materializer::new(&reg);
        // Must not panic, and must produce one field per attribute.
        let record = m.materialize(&el, &resolved);
        prop_assert_eq!(record.len(), resolved.format.attributes.len());
    }

    #[test]
    fn record_to_value_is_always_an_object(el in json_strategy()) {
        let reg = wildcard_registry();
        let resolved = reg.resolve("Things", OutputType::Dict).unwrap();
        let m = Materializer::new(&reg);
        let value = m.materialize(&el, &resolved).to_value();
        prop_assert!(value.is_object());
    }
}

#[test]
fn materializer_handles_self_referencing_detail_spec() {
    // "Things" promotes through a detail spec pointing back at itself;
    // the depth budget bounds the walk.
    let reg = wildcard_registry();
    let resolved = reg.resolve("Things", OutputType::Report).unwrap();
    let m = Materializer::new(&reg);
    let el = json!({
        "display_name": "Root",
        "typeName": "Thing",
        "relatedElements": [{
            "relatedElement": {
                "elementHeader": {"guid": "child", "type": {"typeName": "Thing"}},
                "properties": {"name": "Child"},
                "relatedElements": [{
                    "relatedElement": {
                        "elementHeader": {"guid": "grandchild", "type": {"typeName": "Thing"}},
                        "properties": {"name": "Grandchild"}
                    }
                }]
            }
        }]
    });
    let record = m.materialize(&el, &resolved);
    let related = record.get("related").unwrap().as_nested().unwrap();
    assert_eq!(related.len(), 2);
}
