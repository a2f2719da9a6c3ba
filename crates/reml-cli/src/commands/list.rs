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

//! Specs list command - tabulate the registered spec catalogue

use crate::error::CliError;
use colored::Colorize;
use reml::{FormatSet, SpecRegistry};

/// List registered specs as a plain-text table.
///
/// Shows label, target type, family and the output types each spec's
/// formats declare. With `family`, only specs in that family (matched
/// case-insensitively) are shown.
pub fn specs_list(registry: &SpecRegistry, family: Option<&str>) -> Result<(), CliError> {
    let entries: Vec<(String, &FormatSet)> = match family {
        Some(f) => registry
            .filter_by_family(f)
            .into_iter()
            .map(|(label, set)| (label.to_string(), set))
            .collect(),
        None => registry
            .labels()
            .into_iter()
            .filter_map(|label| registry.get(&label).ok().map(|set| (label, set)))
            .collect(),
    };

    if entries.is_empty() {
        match family {
            Some(f) => println!("No specs in family '{f}'"),
            None => println!("No specs registered"),
        }
        return Ok(());
    }

    let label_width = column_width(entries.iter().map(|(label, _)| label.as_str()), "Label");
    let type_width = column_width(
        entries.iter().map(|(_, set)| set.target_type.as_str()),
        "Type",
    );
    let family_width = column_width(
        entries.iter().map(|(_, set)| set.family.as_deref().unwrap_or("")),
        "Family",
    );

    println!(
        "{}",
        format!(
            "{:label_width$}  {:type_width$}  {:family_width$}  {}",
            "Label", "Type", "Family", "Output Types"
        )
        .bold()
    );
    for (label, set) in &entries {
        println!(
            "{:label_width$}  {:type_width$}  {:family_width$}  {}",
            label,
            set.target_type,
            set.family.as_deref().unwrap_or(""),
            set.supported_tags().join(", ")
        );
    }
    Ok(())
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
