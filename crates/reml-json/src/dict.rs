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

//! Structured-dict rendering: materialized records as JSON values.
//!
//! This is the canonical form the other renderers are layered over.
//! Nothing is summarized: nested records are carried in full, keyed in
//! declared column order. A single input element yields one object; a
//! batch yields an array.

use reml_core::{
    Materializer, Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat, SpecRegistry,
};
use serde_json::Value;

/// The `DICT` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictRenderer;

impl Renderer for DictRenderer {
    fn render(
        &self,
        registry: &SpecRegistry,
        elements: &[Value],
        resolved: &ResolvedFormat<'_>,
        opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let materializer = Materializer::with_limits(registry, opts.limits.clone());
        let mut records: Vec<Value> = elements
            .iter()
            .map(|el| materializer.materialize(el, resolved).to_value())
            .collect();
        let value = if records.len() == 1 {
            records.remove(0)
        } else {
            Value::Array(records)
        };
        Ok(Rendered::Value(value))
    }
}
