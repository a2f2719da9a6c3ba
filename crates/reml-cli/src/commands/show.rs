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

//! Specs show command - inspect one spec in detail

use crate::error::CliError;
use colored::Colorize;
use reml::{Attribute, OutputType, SpecRegistry};

/// Show one spec: heading, description, aliases, action metadata and
/// formats.
///
/// With `output_type`, the selector runs and only the winning format's
/// attribute list is shown; an unsupported type surfaces the registry's
/// own error. Without it, every declared format is listed.
pub fn specs_show(
    registry: &SpecRegistry,
    label: &str,
    output_type: Option<OutputType>,
) -> Result<(), CliError> {
    let canonical = registry.canonical_label(label)?;
    let set = registry.get(&canonical)?;

    println!("{} ({})", set.heading.bold(), canonical);
    if !set.description.is_empty() {
        println!("  {}", set.description);
    }
    println!("  Target type: {}", set.target_type);
    if !set.target_subtypes.is_empty() {
        println!("  Subtypes: {}", set.target_subtypes.join(", "));
    }
    if !set.aliases.is_empty() {
        println!("  Aliases: {}", set.aliases.join(", "));
    }
    if let Some(family) = &set.family {
        println!("  Family: {family}");
    }
    if let Some(action) = &set.action {
        println!("  Action: {}", action.function);
        if !action.required_params.is_empty() {
            println!("    Required: {}", action.required_params.join(", "));
        }
        if !action.optional_params.is_empty() {
            println!("    Optional: {}", action.optional_params.join(", "));
        }
    }

    match output_type {
        Some(requested) => {
            let resolved = registry.resolve(&canonical, requested)?;
            println!("  {} {}", "Format for".bold(), requested);
            print_attributes(&resolved.format.attributes);
        }
        None => {
            for format in &set.formats {
                let tags: Vec<String> = format.types.iter().map(|t| t.to_string()).collect();
                println!("  {} {}", "Format:".bold(), tags.join(", "));
                print_attributes(&format.attributes);
            }
        }
    }
    Ok(())
}

fn print_attributes(attributes: &[Attribute]) {
    for attr in attributes {
        let mut line = format!("    {} <- {}", attr.name, attr.key);
        if attr.link {
            line.push_str(" [linked]");
        }
        if let Some(detail) = &attr.detail_spec {
            line.push_str(&format!(" [detail: {detail}]"));
        }
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reml::{builtin_registry, RemlError};

    #[test]
    fn test_show_builtin() {
        let registry = builtin_registry();
        specs_show(&registry, "Collections", None).unwrap();
    }

    #[test]
    fn test_show_through_alias() {
        let registry = builtin_registry();
        specs_show(&registry, "Folders", Some(OutputType::Table)).unwrap();
    }

    #[test]
    fn test_show_unknown_label() {
        let registry = builtin_registry();
        let err = specs_show(&registry, "Nope", None).unwrap_err();
        assert!(matches!(err, CliError::Spec(RemlError::SpecNotFound { .. })));
    }
}
