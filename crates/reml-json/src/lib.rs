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

//! Structured rendering back ends for REML reports.
//!
//! - [`DictRenderer`]: materialized records as `serde_json::Value`, the
//!   canonical form the markdown renderers are layered over
//! - [`RawRenderer`]: the server payload verbatim, for callers that need
//!   the exact response shape
//! - [`HtmlRenderer`]: an escaped HTML table wrapper over the records

mod dict;
mod html;
mod raw;

pub use dict::DictRenderer;
pub use html::{escape_html, HtmlRenderer};
pub use raw::RawRenderer;
