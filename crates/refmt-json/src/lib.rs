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

//! JSON codec for refmt document trees.
//!
//! A narrow parse/serialize pair around `serde_json`; the rest of the
//! pipeline never sees the underlying library.
//!
//! ```rust
//! use refmt_json::{from_json, to_json};
//!
//! let tree = from_json(r#"{"name": "Alice"}"#).unwrap();
//! let text = to_json(&tree).unwrap();
//! assert!(text.contains("Alice"));
//! ```

mod error;
mod from_json;
mod to_json;

pub use error::JsonError;
pub use from_json::from_json;
pub use to_json::{node_to_value, to_json};
