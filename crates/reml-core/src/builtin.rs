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

//! The built-in governance spec catalogue.
//!
//! These sets cover the common entity categories the platform serves
//! (collections, data products, glossary terms, supply chains) and
//! demonstrate detail-spec chaining. External declarative sources are
//! loaded on top of them; a source redefining a built-in label is a
//! collision, not a silent override.

use crate::error::RemlResult;
use crate::output::OutputType;
use crate::registry::SpecRegistry;
use crate::spec::{ActionSpec, Attribute, Format, FormatSet};

/// A registry preloaded with the built-in catalogue.
pub fn builtin_registry() -> SpecRegistry {
    let mut registry = SpecRegistry::new();
    // Built-ins carry distinct labels and aliases; registration cannot
    // collide against an empty registry.
    register_builtins(&mut registry).expect("built-in catalogue is collision-free");
    registry
}

/// Register the built-in catalogue into an existing registry.
pub fn register_builtins(registry: &mut SpecRegistry) -> RemlResult<()> {
    registry.register("Collections", collections())?;
    registry.register("Collection Members", collection_members())?;
    registry.register("Data Products", data_products())?;
    registry.register("Glossary Terms", glossary_terms())?;
    registry.register("Supply Chains", supply_chains())?;
    registry.register("Supply Chain Segments", supply_chain_segments())?;
    Ok(())
}

fn collections() -> FormatSet {
    FormatSet::new(
        "Collections",
        "Collections group related elements into folders and hierarchies.",
        "Collection",
    )
    .with_family("Collections")
    .with_aliases(&["Folders", "RootCollection"])
    .with_subtypes(&["Folder", "RootCollection", "HomeCollection"])
    .with_format(Format::new(
        vec![OutputType::Table],
        vec![
            Attribute::new("Display Name", "display_name").linked(),
            Attribute::new("Description", "description"),
            Attribute::new("Category", "category"),
            Attribute::new("Members", "members").with_detail("Collection Members"),
        ],
    ))
    .with_format(Format::new(
        vec![OutputType::All],
        vec![
            Attribute::new("Display Name", "display_name").linked(),
            Attribute::new("Description", "description"),
            Attribute::new("Category", "category"),
            Attribute::new("GUID", "guid"),
            Attribute::new("Members", "members").with_detail("Collection Members"),
        ],
    ))
    .with_action(ActionSpec {
        function: "find_collections".to_string(),
        required_params: vec!["search_string".to_string()],
        optional_params: vec!["page_size".to_string(), "start_from".to_string()],
        spec_name: None,
    })
}

fn collection_members() -> FormatSet {
    FormatSet::new(
        "Collection Members",
        "Elements held as members of a collection.",
        "Collection",
    )
    .with_family("Collections")
    .with_subtypes(&["Folder", "DataProduct", "Agreement"])
    .with_format(Format::new(
        vec![OutputType::All],
        vec![
            Attribute::new("Display Name", "display_name").linked(),
            Attribute::new("Description", "description"),
            Attribute::new("Type", "type_name"),
            Attribute::new("GUID", "guid"),
        ],
    ))
}

fn data_products() -> FormatSet {
    FormatSet::new(
        "Data Products",
        "Data products published for consumption, with their delivery terms.",
        "DataProduct",
    )
    .with_family("Digital Products")
    .with_aliases(&["DataProduct"])
    .with_format(Format::new(
        vec![OutputType::Table],
        vec![
            Attribute::new("Product Name", "display_name").linked(),
            Attribute::new("Status", "product_status"),
            Attribute::new("Description", "description"),
            Attribute::new("Terms", "terms").with_detail("Glossary Terms"),
        ],
    ))
    .with_format(Format::new(
        vec![OutputType::All],
        vec![
            Attribute::new("Product Name", "display_name").linked(),
            Attribute::new("Status", "product_status"),
            Attribute::new("Maturity", "maturity"),
            Attribute::new("Description", "description"),
            Attribute::new("GUID", "guid"),
            Attribute::new("Terms", "terms").with_detail("Glossary Terms"),
        ],
    ))
    .with_action(ActionSpec {
        function: "find_data_products".to_string(),
        required_params: vec!["search_string".to_string()],
        optional_params: vec!["page_size".to_string()],
        spec_name: None,
    })
}

fn glossary_terms() -> FormatSet {
    FormatSet::new(
        "Glossary Terms",
        "Terms defining the vocabulary of the organization.",
        "GlossaryTerm",
    )
    .with_family("Glossary")
    .with_aliases(&["Terms"])
    .with_format(Format::new(
        vec![OutputType::All],
        vec![
            Attribute::new("Term Name", "display_name").linked(),
            Attribute::new("Summary", "summary"),
            Attribute::new("Description", "description"),
            Attribute::new("GUID", "guid"),
        ],
    ))
    .with_action(ActionSpec {
        function: "find_glossary_terms".to_string(),
        required_params: vec!["search_string".to_string()],
        optional_params: vec!["glossary_guid".to_string(), "page_size".to_string()],
        spec_name: None,
    })
}

fn supply_chains() -> FormatSet {
    FormatSet::new(
        "Supply Chains",
        "Information supply chains and the segments they are composed of.",
        "InformationSupplyChain",
    )
    .with_family("Solution Architecture")
    .with_aliases(&["InformationSupplyChains"])
    .with_format(Format::new(
        vec![OutputType::Graph, OutputType::Report],
        vec![
            Attribute::new("Display Name", "display_name").linked(),
            Attribute::new("Description", "description"),
            Attribute::new("Scope", "scope"),
            Attribute::new("Segments", "segments").with_detail("Supply Chain Segments"),
        ],
    ))
    .with_format(Format::new(
        vec![OutputType::All],
        vec![
            Attribute::new("Display Name", "display_name").linked(),
            Attribute::new("Description", "description"),
            Attribute::new("GUID", "guid"),
            Attribute::new("Segments", "segments").with_detail("Supply Chain Segments"),
        ],
    ))
    .with_action(ActionSpec {
        function: "find_information_supply_chains".to_string(),
        required_params: vec!["search_string".to_string()],
        optional_params: vec!["page_size".to_string()],
        spec_name: None,
    })
}

fn supply_chain_segments() -> FormatSet {
    FormatSet::new(
        "Supply Chain Segments",
        "Segments within an information supply chain.",
        "InformationSupplyChainSegment",
    )
    .with_family("Solution Architecture")
    .with_format(Format::new(
        vec![OutputType::All],
        vec![
            Attribute::new("Segment Name", "display_name").linked(),
            Attribute::new("Description", "description"),
            Attribute::new("Integration Style", "integration_style"),
            Attribute::new("GUID", "guid"),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_loads() {
        let reg = builtin_registry();
        assert_eq!(reg.len(), 6);
        assert!(reg.get("Collections").is_ok());
        assert!(reg.get("Folders").is_ok());
    }

    #[test]
    fn test_builtin_detail_chains_resolve() {
        let reg = builtin_registry();
        for label in reg.labels() {
            let set = reg.get(&label).unwrap();
            for format in &set.formats {
                for attr in &format.attributes {
                    if let Some(detail) = &attr.detail_spec {
                        assert!(reg.get(detail).is_ok(), "dangling detail spec {detail}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_builtin_families() {
        let reg = builtin_registry();
        assert_eq!(reg.filter_by_family("collections").len(), 2);
        assert_eq!(reg.filter_by_family("solution architecture").len(), 2);
    }

    #[test]
    fn test_supply_chain_graph_format() {
        let reg = builtin_registry();
        let resolved = reg.resolve("Supply Chains", OutputType::Graph).unwrap();
        assert!(resolved
            .format
            .attributes
            .iter()
            .any(|a| a.detail_spec.as_deref() == Some("Supply Chain Segments")));
    }
}
