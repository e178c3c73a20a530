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

//! Error type for XML codec operations.

use thiserror::Error;

/// Errors raised while converting between XML text and document trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XmlError {
    /// XML parsing failed.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// An object key that is not a valid XML element name.
    #[error("'{0}' is not a valid XML element name")]
    InvalidElementName(String),

    /// XML rendering failed.
    #[error("XML serialize error: {0}")]
    Serialize(String),
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        XmlError::Parse(err.to_string())
    }
}
