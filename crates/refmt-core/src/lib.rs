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

//! Core data model for refmt.
//!
//! This crate holds the pieces shared by every format codec:
//!
//! - [`Node`]: the recursive document tree all conversions pivot through
//! - [`Map`]: the insertion-ordered object mapping
//! - [`Format`]: the set of convertible formats
//! - [`FormatError`]: the conversion error taxonomy
//!
//! The codec crates (`refmt-json`, `refmt-yaml`, `refmt-xml`, `refmt-csv`)
//! each translate between their wire format and [`Node`]; the `refmt` crate
//! composes them into the normalize/detect/transform pipeline.

mod error;
mod format;
mod node;

pub use error::FormatError;
pub use format::Format;
pub use node::{Map, Node};
