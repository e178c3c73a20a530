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

//! XML codec for refmt document trees, backed by `quick-xml` events.
//!
//! The mapping between XML and the tree is deliberately lossy in both
//! directions: attributes and child elements share the object key space on
//! the way in, and everything serializes as elements on the way out. Text
//! content never gets a type inferred; `<age>30</age>` is the string "30".

mod error;
mod from_xml;
mod to_xml;

pub use error::XmlError;
pub use from_xml::from_xml;
pub use to_xml::to_xml;
