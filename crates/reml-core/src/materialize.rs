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

//! Shaping raw elements into records keyed by a format's attributes.
//!
//! Materialization is total over garbage input: the upstream payload
//! shape is not contractually guaranteed, so a missing key yields a null
//! placeholder and malformed nested data degrades to an empty list. The
//! only errors a caller can see come from spec resolution before
//! materialization starts.
//!
//! # Detail-spec aggregation
//!
//! An attribute carrying a `detail_spec` collects the elements inlined
//! under the column's own key (tiered lookup, top level then
//! `properties`) followed by every element reachable through the
//! relationship-summary tree (bounded by [`RenderLimits::max_depth`])
//! whose type matches the referenced set's target type or documented
//! subtypes. Collected elements are deduplicated first seen wins, in
//! traversal order, keyed by guid or, for guid-less elements, by display
//! name; elements with neither are kept individually. Each survivor is
//! materialized against the detail set's format for the same output type
//! (lenient selection, so a detail set without an exact match still
//! renders), recursively through its own detail columns. A detail label
//! already being materialized on the current chain flattens to scalars,
//! so mutually-referencing specs terminate.

use crate::element;
use crate::limits::RenderLimits;
use crate::output::OutputType;
use crate::registry::{ResolvedFormat, SpecRegistry};
use crate::spec::{Format, FormatSet};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// The value of one materialized column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A scalar extracted from the element (null when absent).
    Scalar(Value),
    /// Records promoted through a detail spec.
    Nested(Vec<Record>),
}

impl FieldValue {
    /// The scalar value, if this field is one.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Nested(_) => None,
        }
    }

    /// The nested records, if this field holds any.
    pub fn as_nested(&self) -> Option<&[Record]> {
        match self {
            Self::Scalar(_) => None,
            Self::Nested(records) => Some(records),
        }
    }
}

/// One materialized element: column key → field value, in the format's
/// declared attribute order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Look up a field by its column key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldValue)> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to a JSON object preserving column order; nested records
    /// become arrays of objects.
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.fields.len());
        for (key, field) in &self.fields {
            let value = match field {
                FieldValue::Scalar(v) => v.clone(),
                FieldValue::Nested(records) => {
                    Value::Array(records.iter().map(Record::to_value).collect())
                }
            };
            map.insert(key.clone(), value);
        }
        Value::Object(map)
    }

    fn push(&mut self, key: String, value: FieldValue) {
        self.fields.push((key, value));
    }
}

/// Shapes raw elements against resolved formats.
pub struct Materializer<'a> {
    registry: &'a SpecRegistry,
    limits: RenderLimits,
}

impl<'a> Materializer<'a> {
    /// A materializer with default limits.
    pub fn new(registry: &'a SpecRegistry) -> Self {
        Self::with_limits(registry, RenderLimits::default())
    }

    /// A materializer with caller-chosen limits.
    pub fn with_limits(registry: &'a SpecRegistry, limits: RenderLimits) -> Self {
        Self { registry, limits }
    }

    /// The limits in effect.
    pub fn limits(&self) -> &RenderLimits {
        &self.limits
    }

    /// Materialize one element against a resolved format.
    pub fn materialize(&self, element: &Value, resolved: &ResolvedFormat<'_>) -> Record {
        let mut on_chain = BTreeSet::from([resolved.label.clone()]);
        self.materialize_inner(element, resolved.format, resolved.output_type, &mut on_chain)
    }

    /// Materialize one element against an explicit format and output type.
    pub fn materialize_format(
        &self,
        element: &Value,
        format: &Format,
        output_type: OutputType,
    ) -> Record {
        let mut on_chain = BTreeSet::new();
        self.materialize_inner(element, format, output_type, &mut on_chain)
    }

    fn materialize_inner(
        &self,
        element: &Value,
        format: &Format,
        output_type: OutputType,
        on_chain: &mut BTreeSet<String>,
    ) -> Record {
        let mut record = Record::default();
        for attr in &format.attributes {
            let field = match &attr.detail_spec {
                Some(detail_label) => {
                    let promoted = self.promoted_elements(element, &attr.key, detail_label);
                    FieldValue::Nested(self.materialize_promoted(
                        &promoted,
                        detail_label,
                        output_type,
                        on_chain,
                    ))
                }
                None => FieldValue::Scalar(self.scalar(element, &attr.key)),
            };
            record.push(attr.key.clone(), field);
        }
        record
    }

    /// The deduplicated raw elements a detail column promotes, in
    /// traversal order: elements inlined under `key` first, then the
    /// relationship-summary walk. Unknown detail labels and malformed
    /// nested data degrade to an empty list.
    pub fn promoted_elements(&self, element: &Value, key: &str, detail_label: &str) -> Vec<Value> {
        let Ok(detail_set) = self.registry.get(detail_label) else {
            return Vec::new();
        };
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        self.collect_inline(element, key, detail_set, &mut seen, &mut out);
        self.collect_matching(
            element::related_summaries(element),
            detail_set,
            self.limits.max_depth,
            &mut seen,
            &mut out,
        );
        out
    }

    /// Normalized relationship summaries of an element: relationship and
    /// related-element properties merged into one clean structure, with
    /// the summary's own nested collection recursively normalized.
    pub fn normalized_related(&self, element: &Value, depth: usize) -> Vec<Value> {
        element::related_summaries(element)
            .iter()
            .filter_map(|summary| {
                let rel = element::related_element(summary)?;
                Some(self.merged_view(summary, rel, depth))
            })
            .collect()
    }

    // Elements inlined as an array under the column's own key. The key
    // scopes them already, so a missing type name is accepted; a present
    // one must still match the detail set.
    fn collect_inline(
        &self,
        element: &Value,
        key: &str,
        detail_set: &FormatSet,
        seen: &mut BTreeSet<String>,
        out: &mut Vec<Value>,
    ) {
        let Some(obj) = element.as_object() else {
            return;
        };
        let found = element::lookup(obj, key)
            .or_else(|| element::properties(element).and_then(|p| element::lookup(p, key)));
        let Some(items) = found.and_then(Value::as_array) else {
            return;
        };
        for item in items {
            if !item.is_object() || out.len() >= self.limits.max_promoted {
                continue;
            }
            let matches = element::type_name(item)
                .map(|t| detail_set.matches_type(t))
                .unwrap_or(true);
            if !matches {
                continue;
            }
            let fresh = match identity(item) {
                Some(id) => seen.insert(id),
                None => true,
            };
            if fresh {
                out.push(item.clone());
            }
        }
    }

    fn collect_matching(
        &self,
        summaries: &[Value],
        detail_set: &FormatSet,
        depth: usize,
        seen: &mut BTreeSet<String>,
        out: &mut Vec<Value>,
    ) {
        for summary in summaries {
            if let Some(rel) = element::related_element(summary) {
                let matches = element::type_name(rel)
                    .map(|t| detail_set.matches_type(t))
                    .unwrap_or(false);
                if matches && out.len() < self.limits.max_promoted {
                    // First seen wins; elements with no usable identity
                    // are kept individually.
                    let fresh = match identity(rel) {
                        Some(id) => seen.insert(id),
                        None => true,
                    };
                    if fresh {
                        out.push(self.merged_view(summary, rel, depth));
                    }
                }
                if depth > 0 {
                    self.collect_matching(
                        element::related_summaries(rel),
                        detail_set,
                        depth - 1,
                        seen,
                        out,
                    );
                }
            }
            if depth > 0 {
                self.collect_matching(
                    element::nested_summaries(summary),
                    detail_set,
                    depth - 1,
                    seen,
                    out,
                );
            }
        }
    }

    fn materialize_promoted(
        &self,
        promoted: &[Value],
        detail_label: &str,
        output_type: OutputType,
        on_chain: &mut BTreeSet<String>,
    ) -> Vec<Record> {
        let Ok(detail_set) = self.registry.get(detail_label) else {
            return Vec::new();
        };
        let Some(detail_format) = detail_set.format_for_lenient(output_type) else {
            return Vec::new();
        };
        // A label already being materialized on this chain flattens to
        // scalars, cutting spec-reference cycles.
        if !on_chain.insert(detail_label.to_string()) {
            return promoted
                .iter()
                .map(|el| self.shallow_record(el, detail_format))
                .collect();
        }
        let records = promoted
            .iter()
            .map(|el| self.materialize_inner(el, detail_format, output_type, on_chain))
            .collect();
        on_chain.remove(detail_label);
        records
    }

    // Cycle cut: scalars as usual, detail columns as empty nested lists
    // so every declared key stays present.
    fn shallow_record(&self, element: &Value, format: &Format) -> Record {
        let mut record = Record::default();
        for attr in &format.attributes {
            let field = match &attr.detail_spec {
                Some(_) => FieldValue::Nested(Vec::new()),
                None => FieldValue::Scalar(self.scalar(element, &attr.key)),
            };
            record.push(attr.key.clone(), field);
        }
        record
    }

    /// One merged view of a summary: the related element's own fields,
    /// relationship properties filled in where absent, and the nested
    /// collection exposed as the element's related elements (bounded by
    /// `depth`).
    fn merged_view(&self, summary: &Value, rel: &Value, depth: usize) -> Value {
        let mut obj = rel.as_object().cloned().unwrap_or_default();
        if let Some(rel_props) = element::relationship_properties(summary) {
            for (key, value) in rel_props {
                obj.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        if depth > 0 {
            let nested = element::nested_summaries(summary);
            if !nested.is_empty() && element::lookup(&obj, "related_elements").is_none() {
                obj.insert("relatedElements".to_string(), Value::Array(nested.to_vec()));
            }
        }
        Value::Object(obj)
    }

    fn scalar(&self, element: &Value, key: &str) -> Value {
        if let Some(obj) = element.as_object() {
            if let Some(v) = element::lookup(obj, key) {
                return v.clone();
            }
            if let Some(props) = element::properties(element) {
                if let Some(v) = element::lookup(props, key) {
                    return v.clone();
                }
            }
        }
        // Header-derived fields get one more chance. The display name
        // falls through the accessor's name/qualified_name/title chain.
        match key {
            "display_name" | "displayName" => Value::String(element::display_name(element)),
            "guid" | "GUID" => element::guid(element)
                .map(|g| Value::String(g.to_string()))
                .unwrap_or(Value::Null),
            "type_name" | "typeName" | "type" => element::type_name(element)
                .map(|t| Value::String(t.to_string()))
                .unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }
}

/// Dedup key for a promoted element: the guid, else the display name.
/// The namespaces are tagged so a guid never collides with a name.
fn identity(el: &Value) -> Option<String> {
    if let Some(guid) = element::guid(el) {
        return Some(format!("id:{guid}"));
    }
    let name = element::display_name(el);
    (name != element::NO_NAME).then(|| format!("name:{name}"))
}
