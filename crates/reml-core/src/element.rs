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

//! Read-only accessors over raw platform elements.
//!
//! Elements arrive from the metadata platform as `serde_json::Value` trees
//! whose exact shape is not contractually guaranteed beyond "valid JSON".
//! Every accessor in this module is total: a missing or malformed field
//! yields `None` or an empty slice, never an error.
//!
//! # Key resolution
//!
//! Server payloads mix naming conventions (`display_name`, `displayName`,
//! `DISPLAY_NAME`). [`lookup`] resolves a key against a mapping using an
//! ordered list of string transforms: exact, camelCase, snake_case,
//! UPPERCASE. The first hit wins.

use serde_json::{Map, Value};

/// Placeholder rendered for elements with no usable display name.
pub const NO_NAME: &str = "---";

/// Convert a `snake_case` key to `camelCase`.
///
/// Keys already in camelCase pass through unchanged.
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a `camelCase` key to `snake_case`.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Resolve `key` against a mapping using the tiered transforms.
///
/// Tried in order: exact, camelCase conversion, snake_case conversion,
/// uppercased. Returns `None` once all tiers miss.
pub fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(v) = map.get(key) {
        return Some(v);
    }
    let camel = snake_to_camel(key);
    if camel != key {
        if let Some(v) = map.get(&camel) {
            return Some(v);
        }
    }
    let snake = camel_to_snake(key);
    if snake != key {
        if let Some(v) = map.get(&snake) {
            return Some(v);
        }
    }
    let upper = key.to_uppercase();
    if upper != key {
        return map.get(&upper);
    }
    None
}

/// The element's stable identifier.
///
/// Checked at the top level first, then inside the element header.
pub fn guid(element: &Value) -> Option<&str> {
    let obj = element.as_object()?;
    if let Some(g) = lookup(obj, "guid").and_then(Value::as_str) {
        return Some(g);
    }
    let header = lookup(obj, "element_header")?.as_object()?;
    lookup(header, "guid").and_then(Value::as_str)
}

/// The element's open-metadata type name, if present.
pub fn type_name(element: &Value) -> Option<&str> {
    let obj = element.as_object()?;
    if let Some(t) = lookup(obj, "type_name").and_then(Value::as_str) {
        return Some(t);
    }
    if let Some(t) = lookup(obj, "type") {
        if let Some(name) = type_field_name(t) {
            return Some(name);
        }
    }
    let header = lookup(obj, "element_header")?.as_object()?;
    lookup(header, "type").and_then(type_field_name)
}

fn type_field_name(field: &Value) -> Option<&str> {
    match field {
        Value::String(s) => Some(s),
        Value::Object(o) => lookup(o, "type_name").and_then(Value::as_str),
        _ => None,
    }
}

/// The element's `properties` sub-map, if present.
pub fn properties(element: &Value) -> Option<&Map<String, Value>> {
    element
        .as_object()
        .and_then(|o| lookup(o, "properties"))
        .and_then(Value::as_object)
}

/// A human-readable name for the element.
///
/// First of `display_name`, `name`, `qualified_name`, `title` found at the
/// top level or inside `properties`; falls back to the guid, then to
/// [`NO_NAME`].
pub fn display_name(element: &Value) -> String {
    const NAME_KEYS: [&str; 4] = ["display_name", "name", "qualified_name", "title"];
    if let Some(obj) = element.as_object() {
        for key in NAME_KEYS {
            if let Some(name) = lookup(obj, key).and_then(Value::as_str) {
                return name.to_string();
            }
        }
        if let Some(props) = properties(element) {
            for key in NAME_KEYS {
                if let Some(name) = lookup(props, key).and_then(Value::as_str) {
                    return name.to_string();
                }
            }
        }
    }
    guid(element).unwrap_or(NO_NAME).to_string()
}

/// The embedded relationship-summary collection, or an empty slice.
pub fn related_summaries(element: &Value) -> &[Value] {
    collection(element, "related_elements")
}

/// The summary's own nested relationship collection, or an empty slice.
pub fn nested_summaries(summary: &Value) -> &[Value] {
    collection(summary, "nested_elements")
}

fn collection<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .as_object()
        .and_then(|o| lookup(o, key))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The related element carried by a relationship summary.
///
/// Summaries usually wrap the far end under `related_element`; some
/// endpoints inline it, in which case the summary itself is the element.
pub fn related_element(summary: &Value) -> Option<&Value> {
    let obj = summary.as_object()?;
    if let Some(rel) = lookup(obj, "related_element") {
        if rel.is_object() {
            return Some(rel);
        }
    }
    if lookup(obj, "element_header").is_some() || lookup(obj, "properties").is_some() {
        return Some(summary);
    }
    None
}

/// Relationship-level properties carried by a summary.
pub fn relationship_properties(summary: &Value) -> Option<&Map<String, Value>> {
    summary
        .as_object()
        .and_then(|o| lookup(o, "relationship_properties"))
        .and_then(Value::as_object)
}

/// The relationship's type name (e.g. `CollectionMembership`, `PeerLink`).
pub fn relationship_type(summary: &Value) -> Option<&str> {
    let obj = summary.as_object()?;
    if let Some(t) = lookup(obj, "relationship_type").and_then(Value::as_str) {
        return Some(t);
    }
    let header = lookup(obj, "relationship_header")?.as_object()?;
    lookup(header, "type").and_then(type_field_name)
}

/// Render a scalar value as cell/line text.
///
/// Nulls become the empty string; flat arrays are joined with `", "`;
/// everything else falls back to compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("display_name"), "displayName");
        assert_eq!(snake_to_camel("guid"), "guid");
        assert_eq!(snake_to_camel("a_b_c"), "aBC");
    }

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("displayName"), "display_name");
        assert_eq!(camel_to_snake("guid"), "guid");
        assert_eq!(camel_to_snake("HTMLBody"), "h_t_m_l_body");
    }

    #[test]
    fn test_lookup_exact_match() {
        let map = json!({"display_name": "Acme"});
        let v = lookup(map.as_object().unwrap(), "display_name").unwrap();
        assert_eq!(v, &json!("Acme"));
    }

    #[test]
    fn test_lookup_camel_tier() {
        let map = json!({"displayName": "Acme"});
        let v = lookup(map.as_object().unwrap(), "display_name").unwrap();
        assert_eq!(v, &json!("Acme"));
    }

    #[test]
    fn test_lookup_snake_tier() {
        let map = json!({"display_name": "Acme"});
        let v = lookup(map.as_object().unwrap(), "displayName").unwrap();
        assert_eq!(v, &json!("Acme"));
    }

    #[test]
    fn test_lookup_upper_tier() {
        let map = json!({"DISPLAY_NAME": "Acme"});
        let v = lookup(map.as_object().unwrap(), "display_name").unwrap();
        assert_eq!(v, &json!("Acme"));
    }

    #[test]
    fn test_lookup_miss() {
        let map = json!({"other": 1});
        assert!(lookup(map.as_object().unwrap(), "display_name").is_none());
    }

    #[test]
    fn test_guid_top_level() {
        let el = json!({"guid": "abc-123"});
        assert_eq!(guid(&el), Some("abc-123"));
    }

    #[test]
    fn test_guid_in_header() {
        let el = json!({"elementHeader": {"guid": "abc-123"}});
        assert_eq!(guid(&el), Some("abc-123"));
    }

    #[test]
    fn test_guid_absent() {
        assert_eq!(guid(&json!({"name": "x"})), None);
        assert_eq!(guid(&json!("not an object")), None);
    }

    #[test]
    fn test_type_name_variants() {
        assert_eq!(type_name(&json!({"typeName": "Collection"})), Some("Collection"));
        assert_eq!(type_name(&json!({"type": "Collection"})), Some("Collection"));
        assert_eq!(
            type_name(&json!({"elementHeader": {"type": {"typeName": "Collection"}}})),
            Some("Collection")
        );
        assert_eq!(type_name(&json!({})), None);
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(display_name(&json!({"displayName": "A"})), "A");
        assert_eq!(display_name(&json!({"properties": {"name": "B"}})), "B");
        assert_eq!(display_name(&json!({"guid": "g-1"})), "g-1");
        assert_eq!(display_name(&json!({})), NO_NAME);
        assert_eq!(display_name(&json!(42)), NO_NAME);
    }

    #[test]
    fn test_related_summaries_absent_is_empty() {
        assert!(related_summaries(&json!({})).is_empty());
        assert!(related_summaries(&json!({"relatedElements": "garbage"})).is_empty());
    }

    #[test]
    fn test_related_element_wrapped_and_inline() {
        let wrapped = json!({"relatedElement": {"guid": "g-1"}});
        assert_eq!(guid(related_element(&wrapped).unwrap()), Some("g-1"));

        let inline = json!({"elementHeader": {"guid": "g-2"}});
        assert_eq!(guid(related_element(&inline).unwrap()), Some("g-2"));

        assert!(related_element(&json!({"other": true})).is_none());
    }

    #[test]
    fn test_relationship_type() {
        let summary = json!({"relationshipHeader": {"type": {"typeName": "PeerLink"}}});
        assert_eq!(relationship_type(&summary), Some("PeerLink"));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!(null)), "");
        assert_eq!(scalar_text(&json!("x")), "x");
        assert_eq!(scalar_text(&json!(3)), "3");
        assert_eq!(scalar_text(&json!(["a", "b"])), "a, b");
    }
}
