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

//! REML CLI library for command-line parsing and execution.
//!
//! The `reml` binary renders already-fetched governance element payloads
//! (JSON files) through the report specs registered in a [`SpecRegistry`].
//!
//! # Commands
//!
//! ## Spec catalogue
//!
//! - **specs list**: Table of registered specs, optionally filtered by family
//! - **specs show**: Heading, aliases, action metadata and formats of one spec
//! - **specs validate**: Load a directory of declarative spec sources and
//!   report per-file entry counts and collisions
//!
//! ## Rendering
//!
//! - **render**: Render an element file through a spec to any output type
//!   (table, report, graph, mermaid, form, HTML, dict, raw)
//!
//! ## Utilities
//!
//! - **completion**: Generate shell completion scripts (bash, zsh, fish,
//!   powershell, elvish)
//!
//! # Spec sources
//!
//! Every command resolves against the built-in catalogue, then directories
//! given via repeated `--spec-dir` flags, then directories listed in the
//! `REML_SPEC_PATH` environment variable (`:`-separated), in that order.
//! A later source colliding with an earlier label is an error, not an
//! override.
//!
//! # Security
//!
//! Element files are size-checked before reading (configurable via
//! `REML_MAX_FILE_SIZE`) to prevent memory exhaustion on hostile inputs.
//!
//! [`SpecRegistry`]: reml::SpecRegistry

pub mod cli;
pub mod commands;
pub mod error;
pub mod sources;
