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

//! Error type for JSON codec operations.

use thiserror::Error;

/// Errors raised while converting between JSON text and document trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// JSON rendering failed.
    #[error("JSON serialize error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::Parse(err.to_string())
    }
}
