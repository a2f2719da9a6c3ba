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

//! The shared rendering contract implemented by every back end.
//!
//! Renderers are pure functions of (elements, resolved format, options):
//! no shared mutable state survives a call, so independent renders are
//! safe to run concurrently as long as the registry is not mutated
//! underneath them.

use crate::error::RemlResult;
use crate::limits::RenderLimits;
use crate::registry::{ResolvedFormat, SpecRegistry};
use serde_json::Value;

/// Options threaded through a render call.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit the document preamble (heading and description). Renderers
    /// recursing into detail specs pass `false` so nested sections do not
    /// repeat the top-of-document header.
    pub include_preamble: bool,
    /// Bounds on aggregation depth and graph size.
    pub limits: RenderLimits,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_preamble: true,
            limits: RenderLimits::default(),
        }
    }
}

impl RenderOptions {
    /// Options for a recursive call into a detail spec.
    pub fn nested(&self) -> Self {
        Self {
            include_preamble: false,
            limits: self.limits.clone(),
        }
    }
}

/// A rendered report: text for the markdown-family back ends, a
/// structured value for `DICT` and `RAW`.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Text output (markdown, mermaid, HTML).
    Text(String),
    /// Structured output.
    Value(Value),
}

impl Rendered {
    /// Borrow the text output, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Value(_) => None,
        }
    }

    /// Borrow the structured output, if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Text(_) => None,
            Self::Value(_) => self.value(),
        }
    }

    fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// A displayable string: text as-is, values pretty-printed.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Value(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        }
    }
}

/// One rendering strategy.
///
/// The registry is passed per call (not stored) so a renderer value can
/// serve many registries and the borrow stays scoped to the render.
pub trait Renderer {
    /// Render a batch of elements against a resolved format.
    ///
    /// A malformed element degrades within its own row/section; it never
    /// aborts the batch.
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered>;
}
