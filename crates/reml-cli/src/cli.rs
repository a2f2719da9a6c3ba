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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use crate::sources;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use reml::OutputType;
use std::path::PathBuf;

/// REML - render governance element reports.
///
/// Renders already-fetched metadata element payloads (JSON files) through
/// declarative report specs into markdown tables, reports, graphs, mermaid
/// diagrams, forms, HTML, or structured JSON.
#[derive(Parser)]
#[command(name = "reml")]
#[command(author, version, about = "REML - render governance element reports", long_about = None)]
pub struct Cli {
    /// Additional spec source directory (repeatable; loaded after built-ins)
    #[arg(long = "spec-dir", global = true, value_name = "DIR")]
    pub spec_dirs: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Execute the parsed command.
    pub fn execute(self) -> Result<(), CliError> {
        self.command.execute(&self.spec_dirs)
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the spec catalogue
    #[command(subcommand)]
    Specs(SpecsCommands),

    /// Render an element file through a report spec
    ///
    /// FILE holds one element or an array of elements as returned by the
    /// platform. The spec's format matching the requested output type
    /// decides the columns; the result goes to stdout or --out.
    Render {
        /// JSON file holding one element or an array of elements
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Spec label or alias to render through
        #[arg(long)]
        spec: String,

        /// Output type (TABLE, REPORT, GRAPH, MERMAID, FORM, MD, HTML, DICT, RAW)
        #[arg(long, default_value = "TABLE", value_name = "TYPE")]
        output_type: OutputType,

        /// Output file path (defaults to stdout)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Suppress the heading/description preamble
        #[arg(long)]
        no_preamble: bool,

        /// Maximum relationship hops for detail-spec aggregation
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

impl Commands {
    /// Execute the command against the configured spec sources.
    pub fn execute(self, spec_dirs: &[PathBuf]) -> Result<(), CliError> {
        match self {
            Commands::Specs(cmd) => cmd.execute(spec_dirs),
            Commands::Render {
                file,
                spec,
                output_type,
                out,
                no_preamble,
                max_depth,
            } => {
                let registry = sources::load_registry(spec_dirs)?;
                commands::render(
                    &registry,
                    &file,
                    &spec,
                    output_type,
                    out.as_deref(),
                    no_preamble,
                    max_depth,
                )
            }
            Commands::Completion { shell } => {
                let mut cmd = Cli::command();
                commands::generate_completion_for_command(shell, &mut cmd)
            }
        }
    }
}

/// Spec catalogue commands.
#[derive(Subcommand)]
pub enum SpecsCommands {
    /// List registered specs
    List {
        /// Only show specs in this family (case-insensitive)
        #[arg(long, value_name = "FAMILY")]
        family: Option<String>,
    },

    /// Show one spec in detail
    Show {
        /// Spec label or alias
        #[arg(value_name = "LABEL")]
        label: String,

        /// Resolve and show the attribute list for this output type
        #[arg(long, value_name = "TYPE")]
        output_type: Option<OutputType>,
    },

    /// Validate a directory of declarative spec sources
    ///
    /// Loads each *.json file in the directory on top of the built-in
    /// catalogue and reports per-file entry counts and collisions.
    Validate {
        /// Directory holding *.json spec source files
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

impl SpecsCommands {
    /// Execute the spec catalogue command.
    pub fn execute(self, spec_dirs: &[PathBuf]) -> Result<(), CliError> {
        match self {
            SpecsCommands::List { family } => {
                let registry = sources::load_registry(spec_dirs)?;
                commands::specs_list(&registry, family.as_deref())
            }
            SpecsCommands::Show { label, output_type } => {
                let registry = sources::load_registry(spec_dirs)?;
                commands::specs_show(&registry, &label, output_type)
            }
            SpecsCommands::Validate { dir } => commands::specs_validate(&dir),
        }
    }
}
