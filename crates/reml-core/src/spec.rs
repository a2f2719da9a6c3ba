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

//! The declarative spec model: format sets, formats and attributes.
//!
//! A [`FormatSet`] bundles everything needed to present one category of
//! entity: a heading and description for preambles, the target type used
//! during detail promotion, one or more [`Format`] entries scoped to
//! output types, and optional action metadata describing the platform
//! fetch that supplies elements.
//!
//! All spec types round-trip through serde so declarative sources are
//! plain JSON mappings of label to format-set data. Legacy sources that
//! spell the attribute list `columns` are normalized at load time; the
//! runtime model carries a single canonical `attributes` field.

use crate::output::OutputType;
use serde::{Deserialize, Serialize};

/// One data point to extract and display.
///
/// `key` is resolved against materialized elements with the tiered lookup
/// in [`crate::element::lookup`], so either naming convention works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Display name used for table headers and report labels.
    pub name: String,
    /// Extraction key, underscore or camelCase.
    pub key: String,
    /// Render the value as a hyperlink-safe anchor target.
    #[serde(default, skip_serializing_if = "is_false")]
    pub link: bool,
    /// Label of another format set used to render this column when it
    /// holds nested or related elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_spec: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Attribute {
    /// A plain scalar attribute.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            link: false,
            detail_spec: None,
        }
    }

    /// Mark the attribute as a link column.
    pub fn linked(mut self) -> Self {
        self.link = true;
        self
    }

    /// Attach a detail spec for nested rendering.
    pub fn with_detail(mut self, detail_spec: impl Into<String>) -> Self {
        self.detail_spec = Some(detail_spec.into());
        self
    }
}

/// One presentation configuration scoped to a set of output types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    /// Output types this format applies to; may include [`OutputType::All`].
    pub types: Vec<OutputType>,
    /// Ordered attribute list. Legacy sources may spell this `columns`.
    #[serde(alias = "columns")]
    pub attributes: Vec<Attribute>,
}

impl Format {
    /// Create a format from types and attributes.
    pub fn new(types: Vec<OutputType>, attributes: Vec<Attribute>) -> Self {
        Self { types, attributes }
    }

    /// True if this format declares the given output type exactly.
    pub fn declares(&self, output_type: OutputType) -> bool {
        self.types.contains(&output_type)
    }

    /// True if this format carries the wildcard tag.
    pub fn is_wildcard(&self) -> bool {
        self.types.contains(&OutputType::All)
    }
}

/// Metadata describing the platform fetch that supplies elements for a set.
///
/// Carried for front ends that want to invoke the fetch themselves; the
/// core never calls it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Name of the client function to invoke.
    pub function: String,
    /// Parameters the function requires.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_params: Vec<String>,
    /// Parameters the function accepts optionally.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_params: Vec<String>,
    /// Spec label to render the fetched elements with, when it differs
    /// from the set the action is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_name: Option<String>,
}

/// A named bundle of rendering rules for one category of entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSet {
    /// Heading emitted in document preambles.
    pub heading: String,
    /// Description emitted under the heading.
    pub description: String,
    /// Open-metadata type this set presents.
    pub target_type: String,
    /// Optional family tag for grouping (`filter_by_family`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Alternative labels resolving to this set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Documented subtypes also matched during detail promotion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_subtypes: Vec<String>,
    /// Presentation configurations, in declaration order.
    pub formats: Vec<Format>,
    /// Optional fetch metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionSpec>,
}

impl FormatSet {
    /// Create a set with no formats yet.
    pub fn new(
        heading: impl Into<String>,
        description: impl Into<String>,
        target_type: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            description: description.into(),
            target_type: target_type.into(),
            family: None,
            aliases: Vec::new(),
            target_subtypes: Vec::new(),
            formats: Vec::new(),
            action: None,
        }
    }

    /// Set the family tag.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Add aliases.
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }

    /// Add documented subtypes.
    pub fn with_subtypes(mut self, subtypes: &[&str]) -> Self {
        self.target_subtypes
            .extend(subtypes.iter().map(|s| s.to_string()));
        self
    }

    /// Append a format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.formats.push(format);
        self
    }

    /// Attach action metadata.
    pub fn with_action(mut self, action: ActionSpec) -> Self {
        self.action = Some(action);
        self
    }

    /// True if `type_name` equals the target type or a documented subtype.
    pub fn matches_type(&self, type_name: &str) -> bool {
        self.target_type == type_name || self.target_subtypes.iter().any(|t| t == type_name)
    }

    /// Strict format selection: exact type match (first declared wins),
    /// then the wildcard entry. `None` when neither exists.
    pub fn format_for(&self, output_type: OutputType) -> Option<&Format> {
        self.formats
            .iter()
            .find(|f| f.declares(output_type))
            .or_else(|| self.formats.iter().find(|f| f.is_wildcard()))
    }

    /// Lenient selection used when recursing into detail specs: strict
    /// selection, then the first declared format as a best-effort
    /// fallback. `None` only when the set has no formats at all.
    pub fn format_for_lenient(&self, output_type: OutputType) -> Option<&Format> {
        self.format_for(output_type).or_else(|| self.formats.first())
    }

    /// Distinct output-type tags declared across all formats.
    pub fn supported_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for format in &self.formats {
            for t in &format.types {
                let tag = t.tag().to_string();
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        tags
    }
}
