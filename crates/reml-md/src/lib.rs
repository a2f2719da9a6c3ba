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

//! Markdown rendering back ends for REML reports.
//!
//! All renderers consume the materialization core from `reml-core` and
//! differ only in layout and in how they recurse into detail specs:
//!
//! - [`TableRenderer`]: one row per element, detail columns summarized in
//!   the cell and expanded into linked sub-sections after the table
//! - [`ReportRenderer`]: vertical narrative blocks with bulleted detail
//!   hierarchies
//! - [`FormRenderer`]: narrative layout with detail columns always
//!   summarized, for editable output
//! - [`PlainRenderer`]: the legacy flat markdown layout
//! - [`GraphRenderer`]: cycle-safe linked graph report, one anchored
//!   section per unique element
//! - [`MermaidRenderer`]: `flowchart` diagram text over the same closure

mod form;
mod graph;
mod mermaid;
mod plain;
mod report;
mod table;
pub mod util;

pub use form::FormRenderer;
pub use graph::GraphRenderer;
pub use mermaid::MermaidRenderer;
pub use plain::PlainRenderer;
pub use report::ReportRenderer;
pub use table::TableRenderer;
