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

//! Raw passthrough: the server payload verbatim, no materialization.

use reml_core::{Rendered, RenderOptions, Renderer, RemlResult, ResolvedFormat, SpecRegistry};
use serde_json::Value;

/// The `RAW` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRenderer;

impl Renderer for RawRenderer {
    fn render(
        &self,
        _registry: &SpecRegistry,
        elements: &[Value],
        _resolved: &ResolvedFormat<'_>,
        _opts: &RenderOptions,
    ) -> RemlResult<Rendered> {
        let value = if elements.len() == 1 {
            elements[0].clone()
        } else {
            Value::Array(elements.to_vec())
        };
        Ok(Rendered::Value(value))
    }
}
