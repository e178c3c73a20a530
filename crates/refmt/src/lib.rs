// refmt - structured text format conversion toolkit
//
// Copyright (c) 2025 The refmt contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! refmt: normalize, detect and transform structured text.
//!
//! Conversions pivot through a format-agnostic document tree
//! ([`Node`]): raw text is validated against its declared format
//! ([`normalize`]), the tree is re-derived by an ordered fallback parser
//! chain ([`detect`]), and the target serializer renders the output
//! ([`transform`]).
//!
//! Every call is synchronous, stateless and allocation-local: the tree
//! lives only for the duration of one conversion, so concurrent calls need
//! no coordination. The engine performs no I/O and no logging; sourcing
//! input text and presenting output or errors belongs to the caller
//! (see the `refmt-cli` crate).
//!
//! # Examples
//!
//! ```rust
//! use refmt::{normalize, transform, Format};
//!
//! let normalized = normalize(r#"{"name": "Alice", "age": 30}"#, Format::Json).unwrap();
//! let yaml = transform(&normalized, Format::Yaml).unwrap();
//! assert_eq!(yaml, "name: Alice\nage: 30\n");
//! ```
//!
//! Detection works without a declared format:
//!
//! ```rust
//! use refmt::detect;
//!
//! let tree = detect("name: Alice").unwrap();
//! assert_eq!(tree.as_object().unwrap().get("name").unwrap().as_str(), Some("Alice"));
//! ```

mod detect;
mod engine;
mod normalize;
pub mod table;

pub use detect::{detect, DETECTION_ORDER};
pub use engine::{convert, transform};
pub use normalize::normalize;
pub use refmt_core::{Format, FormatError, Map, Node};
pub use table::to_table;

/// JSON codec, re-exported for callers that want one format directly.
pub mod json {
    pub use refmt_json::{from_json, to_json, JsonError};
}

/// YAML codec.
pub mod yaml {
    pub use refmt_yaml::{from_yaml, to_yaml, YamlError};
}

/// XML codec.
pub mod xml {
    pub use refmt_xml::{from_xml, to_xml, XmlError};
}

/// CSV codec.
pub mod csv {
    pub use refmt_csv::{from_csv, to_csv, CsvError};
}
