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

//! Error types for spec resolution and rendering.
//!
//! Structural and lookup failures (unknown spec, unsupported output type,
//! registration collisions) are typed errors carrying enough context to be
//! printed as a user-facing message without further translation. Data-shape
//! anomalies inside an element are never errors: materialization degrades
//! to placeholders instead.

use crate::output::OutputType;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the REML crates.
pub type RemlResult<T> = Result<T, RemlError>;

/// The error type for spec registry and rendering operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemlError {
    /// The requested label or alias matches no registered format set.
    #[error("no report spec registered under '{label}'; known specs: {}", format_list(.known))]
    SpecNotFound {
        /// The label the caller asked for.
        label: String,
        /// Labels currently registered, sorted.
        known: Vec<String>,
    },

    /// The label is known but no format covers the requested output type.
    #[error("report spec '{label}' does not support output type {requested}; supported: {}", format_list(.supported))]
    FormatUnsupported {
        /// The label that was resolved.
        label: String,
        /// The output type the caller asked for.
        requested: OutputType,
        /// Tags the spec's formats do declare.
        supported: Vec<String>,
    },

    /// Registration hit an already-registered label or alias.
    #[error("report spec label or alias '{label}' is already registered")]
    SpecCollision {
        /// The colliding label or alias.
        label: String,
    },

    /// An output-type tag outside the closed enumeration.
    #[error("unknown output type tag '{tag}'")]
    UnknownOutputType {
        /// The offending tag.
        tag: String,
    },

    /// A declarative spec source entry failed to deserialize.
    #[error("invalid spec source entry '{context}': {message}")]
    SourceParse {
        /// The label (or file) being parsed.
        context: String,
        /// Deserializer message.
        message: String,
    },

    /// Filesystem failure while loading spec sources or element files.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The error message.
        message: String,
    },
}

impl RemlError {
    /// Construct an I/O error from a path and source error.
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Construct a source-parse error.
    pub fn source_parse(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::SourceParse {
            context: context.into(),
            message: err.to_string(),
        }
    }
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_not_found_lists_known_labels() {
        let err = RemlError::SpecNotFound {
            label: "Nope".to_string(),
            known: vec!["Collections".to_string(), "Data Products".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Nope'"));
        assert!(msg.contains("Collections, Data Products"));
    }

    #[test]
    fn test_spec_not_found_empty_registry() {
        let err = RemlError::SpecNotFound {
            label: "Nope".to_string(),
            known: vec![],
        };
        assert!(err.to_string().contains("(none)"));
    }

    #[test]
    fn test_format_unsupported_names_supported_types() {
        let err = RemlError::FormatUnsupported {
            label: "Y".to_string(),
            requested: OutputType::Report,
            supported: vec!["DICT".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("REPORT"));
        assert!(msg.contains("DICT"));
    }

    #[test]
    fn test_io_constructor() {
        let err = RemlError::io("/tmp/specs.json", "permission denied");
        assert!(err.to_string().contains("/tmp/specs.json"));
        assert!(err.to_string().contains("permission denied"));
    }
}
