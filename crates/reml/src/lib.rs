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

//! # REML - Report Element Materialization Library
//!
//! REML turns metadata elements (the JSON payloads a governance platform
//! returns for collections, glossary terms, data products and so on) into
//! reports. A declarative *format set* names the columns a report should
//! carry; REML materializes those columns from the raw payload and renders
//! the result as a markdown table, a report document, a linked graph, a
//! mermaid diagram, HTML, or structured JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use reml::{builtin_registry, render_elements, OutputType, RenderOptions};
//! use serde_json::json;
//!
//! let registry = builtin_registry();
//! let elements = vec![json!({
//!     "elementHeader": {"guid": "c-1", "type": {"typeName": "Collection"}},
//!     "properties": {"name": "Engineering", "description": "Team workspace"}
//! })];
//!
//! let rendered = render_elements(
//!     &registry,
//!     &elements,
//!     "Collections",
//!     OutputType::Table,
//!     &RenderOptions::default(),
//! ).expect("Collections supports TABLE");
//!
//! println!("{}", rendered.to_display_string());
//! ```
//!
//! ## Crates
//!
//! - `reml-core`: format sets, the spec registry, the selector and the
//!   materializer
//! - `reml-md`: markdown back ends (table, report, form, plain, graph,
//!   mermaid)
//! - `reml-json`: structured back ends (dict, raw passthrough, HTML)
//!
//! This crate re-exports the public surface of all three and adds
//! [`render_elements`], the output-type dispatcher.

// Re-export the core model
pub use reml_core::{
    builtin::{builtin_registry, register_builtins},
    element,
    ActionSpec,
    Attribute,
    FieldValue,
    Format,
    FormatSet,
    Materializer,
    OutputType,
    Record,
    RemlError,
    RemlResult,
    RenderLimits,
    RenderOptions,
    Rendered,
    Renderer,
    ResolvedFormat,
    SpecRegistry,
};

// Re-export the back ends
pub use reml_json::{escape_html, DictRenderer, HtmlRenderer, RawRenderer};
pub use reml_md::{
    FormRenderer, GraphRenderer, MermaidRenderer, PlainRenderer, ReportRenderer, TableRenderer,
};

// Error handling extensions
mod error_ext;
pub use error_ext::RemlResultExt;

use serde_json::Value;

/// Resolve `label` against the registry and render `elements` with the
/// back end for the requested output type.
///
/// `ALL` is accepted as a request and renders as a table, mirroring what
/// a wildcard format declares as its broadest concrete form. Resolution
/// failures surface as [`RemlError::SpecNotFound`] or
/// [`RemlError::FormatUnsupported`]; once a format is selected, rendering
/// is total over whatever payload shapes `elements` contains.
pub fn render_elements(
    registry: &SpecRegistry,
    elements: &[Value],
    label: &str,
    output_type: OutputType,
    opts: &RenderOptions,
) -> RemlResult<Rendered> {
    let resolved = registry.resolve(label, output_type)?;
    renderer_for(output_type).render(registry, elements, &resolved, opts)
}

/// The back end a given output type dispatches to.
pub fn renderer_for(output_type: OutputType) -> &'static dyn Renderer {
    match output_type {
        OutputType::Dict => &DictRenderer,
        OutputType::Raw => &RawRenderer,
        OutputType::Table | OutputType::All => &TableRenderer,
        OutputType::Report => &ReportRenderer,
        OutputType::Graph => &GraphRenderer,
        OutputType::Form => &FormRenderer,
        OutputType::Markdown => &PlainRenderer,
        OutputType::Mermaid => &MermaidRenderer,
        OutputType::Html => &HtmlRenderer,
    }
}
