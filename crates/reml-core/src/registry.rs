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

//! The in-memory catalogue of format sets.
//!
//! [`SpecRegistry`] is an explicit object constructed by the host and
//! passed by reference wherever spec resolution is needed; there is no
//! global singleton. The registry is read-mostly after startup loading:
//! concurrent reads are safe, and the host serializes any later mutation.
//!
//! Lookup distinguishes two failure modes: an unknown label
//! ([`RemlError::SpecNotFound`], listing registered labels) and a known
//! label whose set does not cover the requested output type
//! ([`RemlError::FormatUnsupported`], listing the types it does cover).

use crate::error::{RemlError, RemlResult};
use crate::output::OutputType;
use crate::spec::{Format, FormatSet};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// The outcome of resolving a label and output type: the set, the chosen
/// format, and the resolution context renderers need.
#[derive(Debug, Clone)]
pub struct ResolvedFormat<'a> {
    /// The canonical label the set is registered under.
    pub label: String,
    /// The resolved set.
    pub set: &'a FormatSet,
    /// The format selected for the requested output type.
    pub format: &'a Format,
    /// The output type the caller requested.
    pub output_type: OutputType,
}

/// An in-memory catalogue of named format sets with alias resolution.
#[derive(Debug, Clone, Default)]
pub struct SpecRegistry {
    sets: BTreeMap<String, FormatSet>,
    // alias -> canonical label
    aliases: BTreeMap<String, String>,
}

impl SpecRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered sets (aliases not counted).
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True when no sets are registered.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Registered labels, sorted.
    pub fn labels(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }

    /// Register a set under `label`.
    ///
    /// Fails with [`RemlError::SpecCollision`] if the label or any of the
    /// set's aliases is already taken, leaving the registry unchanged.
    pub fn register(&mut self, label: impl Into<String>, set: FormatSet) -> RemlResult<()> {
        let label = label.into();
        if self.is_taken(&label) {
            return Err(RemlError::SpecCollision { label });
        }
        for alias in &set.aliases {
            if self.is_taken(alias) {
                return Err(RemlError::SpecCollision {
                    label: alias.clone(),
                });
            }
        }
        for alias in &set.aliases {
            self.aliases.insert(alias.clone(), label.clone());
        }
        self.sets.insert(label, set);
        Ok(())
    }

    /// Register with explicit replace semantics: an existing set under the
    /// same label (and its aliases) is removed first.
    pub fn register_replace(&mut self, label: impl Into<String>, set: FormatSet) -> RemlResult<()> {
        let label = label.into();
        if self.sets.contains_key(&label) {
            // Ignore the not-found case: the label may only exist as an alias.
            let _ = self.unregister(&label);
        }
        self.register(label, set)
    }

    /// Remove a set by label (aliases are not accepted here).
    ///
    /// A missing label is a typed [`RemlError::SpecNotFound`] so front
    /// ends can list the labels that do exist.
    pub fn unregister(&mut self, label: &str) -> RemlResult<FormatSet> {
        match self.sets.remove(label) {
            Some(set) => {
                self.aliases.retain(|_, target| target != label);
                Ok(set)
            }
            None => Err(RemlError::SpecNotFound {
                label: label.to_string(),
                known: self.labels(),
            }),
        }
    }

    /// Load every entry of a declarative source (label → format-set data).
    ///
    /// Legacy key names are normalized during deserialization. The first
    /// collision or parse failure aborts the rest of the source; entries
    /// already applied stay registered. Returns the number of sets loaded.
    pub fn load_from_source(&mut self, source: &Map<String, Value>) -> RemlResult<usize> {
        let mut loaded = 0;
        for (label, raw) in source {
            let set: FormatSet = serde_json::from_value(raw.clone())
                .map_err(|e| RemlError::source_parse(label.clone(), e))?;
            self.register(label.clone(), set)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Load every `*.json` file in a directory as one source each, in
    /// lexical filename order. Returns the total number of sets loaded.
    pub fn load_dir(&mut self, dir: &Path) -> RemlResult<usize> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(|e| RemlError::io(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let text = std::fs::read_to_string(&path).map_err(|e| RemlError::io(&path, e))?;
            let source: Map<String, Value> = serde_json::from_str(&text)
                .map_err(|e| RemlError::source_parse(path.display().to_string(), e))?;
            loaded += self.load_from_source(&source)?;
        }
        Ok(loaded)
    }

    /// Look up a set by label, then by alias.
    pub fn get(&self, label_or_alias: &str) -> RemlResult<&FormatSet> {
        if let Some(set) = self.sets.get(label_or_alias) {
            return Ok(set);
        }
        if let Some(label) = self.aliases.get(label_or_alias) {
            if let Some(set) = self.sets.get(label) {
                return Ok(set);
            }
        }
        Err(RemlError::SpecNotFound {
            label: label_or_alias.to_string(),
            known: self.labels(),
        })
    }

    /// The canonical label for a label or alias.
    pub fn canonical_label(&self, label_or_alias: &str) -> RemlResult<String> {
        if self.sets.contains_key(label_or_alias) {
            return Ok(label_or_alias.to_string());
        }
        if let Some(label) = self.aliases.get(label_or_alias) {
            return Ok(label.clone());
        }
        Err(RemlError::SpecNotFound {
            label: label_or_alias.to_string(),
            known: self.labels(),
        })
    }

    /// Resolve a label (or alias) and output type to a concrete format.
    ///
    /// Selection is exact-match-first (declaration order breaks ties),
    /// then the wildcard entry. A known label with no covering format is
    /// [`RemlError::FormatUnsupported`], distinct from an unknown label.
    pub fn resolve(&self, label_or_alias: &str, output_type: OutputType) -> RemlResult<ResolvedFormat<'_>> {
        let label = self.canonical_label(label_or_alias)?;
        let set = &self.sets[&label];
        match set.format_for(output_type) {
            Some(format) => Ok(ResolvedFormat {
                label,
                set,
                format,
                output_type,
            }),
            None => Err(RemlError::FormatUnsupported {
                label,
                requested: output_type,
                supported: set.supported_tags(),
            }),
        }
    }

    /// Sets whose family tag case-insensitively equals `family`.
    ///
    /// The empty string matches sets with no family set.
    pub fn filter_by_family(&self, family: &str) -> Vec<(&str, &FormatSet)> {
        let wanted = family.to_lowercase();
        self.sets
            .iter()
            .filter(|(_, set)| match &set.family {
                Some(f) => f.to_lowercase() == wanted,
                None => wanted.is_empty(),
            })
            .map(|(label, set)| (label.as_str(), set))
            .collect()
    }

    /// Sets whose target type (or a documented subtype) covers `type_name`.
    pub fn find_for_type(&self, type_name: &str) -> Vec<(&str, &FormatSet)> {
        self.sets
            .iter()
            .filter(|(_, set)| set.matches_type(type_name))
            .map(|(label, set)| (label.as_str(), set))
            .collect()
    }

    fn is_taken(&self, name: &str) -> bool {
        self.sets.contains_key(name) || self.aliases.contains_key(name)
    }
}
