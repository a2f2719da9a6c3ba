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

//! Spec source resolution: built-ins, `--spec-dir` flags, `REML_SPEC_PATH`.

use crate::error::CliError;
use reml::{builtin_registry, SpecRegistry};
use std::path::{Path, PathBuf};

/// Environment variable holding `:`-separated spec source directories.
pub const SPEC_PATH_ENV: &str = "REML_SPEC_PATH";

/// Build the registry every command resolves against.
///
/// Load order is fixed: the built-in catalogue, then each `--spec-dir` in
/// the order given, then each directory from [`SPEC_PATH_ENV`]. A later
/// source redefining an earlier label or alias is a collision error.
pub fn load_registry(spec_dirs: &[PathBuf]) -> Result<SpecRegistry, CliError> {
    let mut registry = builtin_registry();
    for dir in spec_dirs {
        registry.load_dir(dir)?;
    }
    for dir in env_spec_dirs() {
        registry.load_dir(&dir)?;
    }
    Ok(registry)
}

/// Directories named by [`SPEC_PATH_ENV`], empty segments skipped.
pub fn env_spec_dirs() -> Vec<PathBuf> {
    match std::env::var(SPEC_PATH_ENV) {
        Ok(value) => value
            .split(':')
            .filter(|segment| !segment.is_empty())
            .map(|segment| Path::new(segment).to_path_buf())
            .collect(),
        Err(_) => Vec::new(),
    }
}
