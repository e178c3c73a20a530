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

//! Structured error types for the refmt CLI.

use refmt::FormatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
///
/// The engine itself never touches files or streams; every I/O variant
/// here originates in this crate.
#[derive(Error, Debug)]
pub enum CliError {
    /// File read, write or metadata access failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path involved.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// The input path does not exist.
    #[error("input file not found at path: {0}")]
    InputNotFound(PathBuf),

    /// The input file exceeds the configured size limit.
    #[error("file '{path}' is too large ({actual} bytes, maximum {max} bytes)")]
    FileTooLarge {
        /// The offending path.
        path: PathBuf,
        /// Actual size in bytes.
        actual: u64,
        /// Configured maximum in bytes.
        max: u64,
    },

    /// A conversion failure from the engine.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl CliError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
