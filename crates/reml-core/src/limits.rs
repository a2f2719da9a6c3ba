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

//! Bounds on recursive materialization and graph rendering.

/// Configurable limits for materialization and rendering.
///
/// These bounds keep recursive aggregation and graph walks total on
/// pathological payloads (deep nesting, huge relationship fans, cyclic
/// graphs). They are deterministic, not time-based, and are threaded
/// through each call rather than held in global state.
#[derive(Debug, Clone)]
pub struct RenderLimits {
    /// Maximum relationship hops followed during detail-spec aggregation
    /// (default: 3). Zero restricts aggregation to immediate summaries.
    pub max_depth: usize,
    /// Maximum unique nodes emitted by one graph-report render (default: 512).
    pub max_graph_nodes: usize,
    /// Maximum elements promoted into a single detail column (default: 1024).
    pub max_promoted: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_graph_nodes: 512,
            max_promoted: 1024,
        }
    }
}

impl RenderLimits {
    /// Limits with a caller-chosen aggregation depth, other bounds default.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_graph_nodes: usize::MAX,
            max_promoted: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_depth() {
        assert_eq!(RenderLimits::default().max_depth, 3);
    }

    #[test]
    fn test_default_max_graph_nodes() {
        assert_eq!(RenderLimits::default().max_graph_nodes, 512);
    }

    #[test]
    fn test_default_max_promoted() {
        assert_eq!(RenderLimits::default().max_promoted, 1024);
    }

    #[test]
    fn test_with_depth() {
        let limits = RenderLimits::with_depth(0);
        assert_eq!(limits.max_depth, 0);
        assert_eq!(limits.max_graph_nodes, 512);
    }

    #[test]
    fn test_unlimited() {
        let limits = RenderLimits::unlimited();
        assert_eq!(limits.max_depth, usize::MAX);
    }
}
