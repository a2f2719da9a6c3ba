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

//! Specs validate command - check a directory of declarative spec sources

use crate::error::CliError;
use colored::Colorize;
use reml::builtin_registry;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Validate every `*.json` spec source file under `dir`.
///
/// Files load in name order on top of the built-in catalogue, so a source
/// redefining a built-in label (or one from an earlier file) reports as a
/// collision. Prints one line per file; returns
/// [`CliError::SourceErrors`] if any file failed.
pub fn specs_validate(dir: &Path) -> Result<(), CliError> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .map_err(|e| CliError::io_error(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(CliError::invalid_input(format!(
            "no *.json spec source files in '{}'",
            dir.display()
        )));
    }

    let mut registry = builtin_registry();
    let mut failed = false;
    for path in &files {
        let outcome = fs::read_to_string(path)
            .map_err(|e| CliError::io_error(path, e))
            .and_then(|text| {
                serde_json::from_str::<Map<String, Value>>(&text).map_err(CliError::from)
            })
            .and_then(|source| registry.load_from_source(&source).map_err(CliError::from));
        match outcome {
            Ok(count) => println!(
                "{} {}: {} spec{}",
                "✓".green().bold(),
                path.display(),
                count,
                if count == 1 { "" } else { "s" }
            ),
            Err(e) => {
                failed = true;
                println!("{} {}: {}", "✗".red().bold(), path.display(), e);
            }
        }
    }

    if failed {
        Err(CliError::SourceErrors)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("reml-validate-test").join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_valid_source_dir() {
        let dir = temp_dir("valid");
        fs::write(
            dir.join("orgs.json"),
            r#"{"Orgs": {
                "heading": "Organizations",
                "description": "",
                "target_type": "Organization",
                "formats": [{"types": ["ALL"], "attributes": [{"name": "Name", "key": "display_name"}]}]
            }}"#,
        )
        .unwrap();
        specs_validate(&dir).unwrap();
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_collision_with_builtin() {
        let dir = temp_dir("collision");
        fs::write(
            dir.join("clash.json"),
            r#"{"Collections": {
                "heading": "Shadow",
                "description": "",
                "target_type": "Collection",
                "formats": [{"types": ["ALL"], "attributes": []}]
            }}"#,
        )
        .unwrap();
        let err = specs_validate(&dir).unwrap_err();
        assert!(matches!(err, CliError::SourceErrors));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_dir_is_invalid_input() {
        let dir = temp_dir("empty");
        let err = specs_validate(&dir).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        fs::remove_dir_all(&dir).ok();
    }
}
