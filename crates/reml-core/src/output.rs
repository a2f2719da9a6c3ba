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

//! The closed enumeration of report output types.

use crate::error::RemlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output type tag selecting a renderer strategy.
///
/// Tags parse case-insensitively; `LIST` is accepted as a legacy alias
/// for [`OutputType::Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutputType {
    /// Structured dictionary output (the canonical materialized form).
    #[serde(rename = "DICT", alias = "dict")]
    Dict,
    /// Raw passthrough of the server payload, no materialization.
    #[serde(rename = "RAW", alias = "raw")]
    Raw,
    /// Tabular markdown list, one row per element.
    #[serde(rename = "TABLE", alias = "table", alias = "LIST", alias = "list")]
    Table,
    /// Vertical narrative report, one block per element.
    #[serde(rename = "REPORT", alias = "report")]
    Report,
    /// Recursive linked graph report over peers and children.
    #[serde(rename = "GRAPH", alias = "graph")]
    Graph,
    /// Form-style summary; nested data is never expanded.
    #[serde(rename = "FORM", alias = "form")]
    Form,
    /// Legacy plain markdown without preamble or cross-links.
    #[serde(rename = "MD", alias = "md")]
    Markdown,
    /// Mermaid `flowchart` diagram text.
    #[serde(rename = "MERMAID", alias = "mermaid")]
    Mermaid,
    /// HTML table wrapper.
    #[serde(rename = "HTML", alias = "html")]
    Html,
    /// Wildcard: a format tagged `ALL` applies to every output type.
    #[serde(rename = "ALL", alias = "all")]
    All,
}

impl OutputType {
    /// Every concrete tag, in display order. Excludes the wildcard.
    pub const CONCRETE: [OutputType; 9] = [
        OutputType::Dict,
        OutputType::Raw,
        OutputType::Table,
        OutputType::Report,
        OutputType::Graph,
        OutputType::Form,
        OutputType::Markdown,
        OutputType::Mermaid,
        OutputType::Html,
    ];

    /// The canonical string tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Dict => "DICT",
            Self::Raw => "RAW",
            Self::Table => "TABLE",
            Self::Report => "REPORT",
            Self::Graph => "GRAPH",
            Self::Form => "FORM",
            Self::Markdown => "MD",
            Self::Mermaid => "MERMAID",
            Self::Html => "HTML",
            Self::All => "ALL",
        }
    }

    /// True for tags whose rendered output is a structured value rather
    /// than text (`DICT` and `RAW`).
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Dict | Self::Raw)
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for OutputType {
    type Err = RemlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DICT" => Ok(Self::Dict),
            "RAW" => Ok(Self::Raw),
            "TABLE" | "LIST" => Ok(Self::Table),
            "REPORT" => Ok(Self::Report),
            "GRAPH" => Ok(Self::Graph),
            "FORM" => Ok(Self::Form),
            "MD" => Ok(Self::Markdown),
            "MERMAID" => Ok(Self::Mermaid),
            "HTML" => Ok(Self::Html),
            "ALL" => Ok(Self::All),
            _ => Err(RemlError::UnknownOutputType { tag: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("table".parse::<OutputType>().unwrap(), OutputType::Table);
        assert_eq!("Report".parse::<OutputType>().unwrap(), OutputType::Report);
        assert_eq!("ALL".parse::<OutputType>().unwrap(), OutputType::All);
    }

    #[test]
    fn test_parse_list_alias() {
        assert_eq!("LIST".parse::<OutputType>().unwrap(), OutputType::Table);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "YAML".parse::<OutputType>().unwrap_err();
        assert!(err.to_string().contains("YAML"));
    }

    #[test]
    fn test_display_round_trip() {
        for t in OutputType::CONCRETE {
            assert_eq!(t.tag().parse::<OutputType>().unwrap(), t);
        }
    }

    #[test]
    fn test_serde_tags() {
        let t: OutputType = serde_json::from_str("\"TABLE\"").unwrap();
        assert_eq!(t, OutputType::Table);
        let t: OutputType = serde_json::from_str("\"LIST\"").unwrap();
        assert_eq!(t, OutputType::Table);
        assert_eq!(serde_json::to_string(&OutputType::Markdown).unwrap(), "\"MD\"");
    }

    #[test]
    fn test_is_structured() {
        assert!(OutputType::Dict.is_structured());
        assert!(OutputType::Raw.is_structured());
        assert!(!OutputType::Table.is_structured());
    }
}
