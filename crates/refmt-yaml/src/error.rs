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

//! Error type for YAML codec operations.

use thiserror::Error;

/// Errors raised while converting between YAML text and document trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YamlError {
    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    Parse(String),

    /// A mapping key that cannot be carried as a string.
    #[error("unsupported YAML mapping key: {0}")]
    NonStringKey(String),

    /// YAML rendering failed.
    #[error("YAML serialize error: {0}")]
    Serialize(String),
}

impl From<serde_yaml::Error> for YamlError {
    fn from(err: serde_yaml::Error) -> Self {
        YamlError::Parse(err.to_string())
    }
}
