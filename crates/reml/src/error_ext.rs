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

//! Error conversion helpers for improved ergonomics.
//!
//! Loading spec sources and element files mixes `std::io::Error` and
//! `serde_json::Error` with [`RemlError`]. This module provides an
//! extension trait that converts both foreign types in `?` position
//! while attaching the path or source label the failure belongs to.
//!
//! # Examples
//!
//! ```rust
//! use reml::{RemlResult, RemlResultExt};
//! use std::path::Path;
//!
//! fn read_elements(path: &Path) -> RemlResult<serde_json::Value> {
//!     let text = std::fs::read_to_string(path).at_path(path)?;
//!     serde_json::from_str(&text).in_source(path.display().to_string())
//! }
//! ```

use reml_core::{RemlError, RemlResult};
use std::path::PathBuf;

/// Extension trait converting foreign errors into [`RemlError`].
///
/// Both methods are available on `Result<T, std::io::Error>` and
/// `Result<T, serde_json::Error>`; pick the one whose annotation fits
/// the failure. `at_path` yields [`RemlError::Io`], `in_source` yields
/// [`RemlError::SourceParse`].
pub trait RemlResultExt<T> {
    /// Convert the error, recording the filesystem path it concerns.
    fn at_path(self, path: impl Into<PathBuf>) -> RemlResult<T>;

    /// Convert the error, recording the spec-source entry or file label
    /// being parsed.
    fn in_source(self, context: impl Into<String>) -> RemlResult<T>;
}

impl<T> RemlResultExt<T> for Result<T, std::io::Error> {
    fn at_path(self, path: impl Into<PathBuf>) -> RemlResult<T> {
        self.map_err(|e| RemlError::io(path, e))
    }

    fn in_source(self, context: impl Into<String>) -> RemlResult<T> {
        self.map_err(|e| RemlError::source_parse(context, e))
    }
}

impl<T> RemlResultExt<T> for Result<T, serde_json::Error> {
    fn at_path(self, path: impl Into<PathBuf>) -> RemlResult<T> {
        self.map_err(|e| RemlError::io(path, e))
    }

    fn in_source(self, context: impl Into<String>) -> RemlResult<T> {
        self.map_err(|e| RemlError::source_parse(context, e))
    }
}
