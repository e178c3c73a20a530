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

//! Error type for CSV codec operations.

use thiserror::Error;

/// Errors raised while converting between CSV text and document trees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CsvError {
    /// CSV parsing failed (malformed quoting, column mismatch, no header).
    #[error("CSV parse error: {0}")]
    Parse(String),

    /// The tree shape cannot be laid out as rows and columns.
    #[error("unsupported tree shape for CSV: {0}")]
    UnsupportedShape(String),

    /// CSV rendering failed.
    #[error("CSV serialize error: {0}")]
    Serialize(String),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        CsvError::Parse(err.to_string())
    }
}
