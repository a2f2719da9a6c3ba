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

//! Core spec model, registry and materializer for REML reports.
//!
//! REML turns heterogeneous, nested metadata elements fetched from a
//! governance platform into reports. This crate holds everything the
//! rendering back ends share:
//!
//! - The declarative spec model ([`FormatSet`], [`Format`], [`Attribute`])
//!   and the closed [`OutputType`] enumeration
//! - The [`SpecRegistry`] catalogue with alias resolution, declarative
//!   source loading and collision detection
//! - Format selection (exact match, then wildcard, with typed errors
//!   distinguishing unknown specs from unsupported output types)
//! - The [`Materializer`], which shapes raw elements into ordered
//!   [`Record`]s, recursively aggregating and deduplicating related
//!   elements promoted through detail specs
//! - The [`Renderer`] contract and [`RenderLimits`] bounds the back-end
//!   crates build on
//!
//! Rendering itself lives in `reml-md` (markdown family) and `reml-json`
//! (structured family); the `reml` umbrella crate dispatches by output
//! type.

pub mod builtin;
pub mod element;
mod error;
mod limits;
mod materialize;
mod output;
mod registry;
mod render;
mod spec;

pub use error::{RemlError, RemlResult};
pub use limits::RenderLimits;
pub use materialize::{FieldValue, Materializer, Record};
pub use output::OutputType;
pub use registry::{ResolvedFormat, SpecRegistry};
pub use render::{Rendered, RenderOptions, Renderer};
pub use spec::{ActionSpec, Attribute, Format, FormatSet};
