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

//! CLI command implementations.

mod completion;
mod convert;
mod examples;

pub use completion::completion;
pub use convert::convert;
pub use examples::examples;

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// Default maximum input file size (100 MB). Can be overridden via the
/// `REFMT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn max_file_size() -> u64 {
    std::env::var("REFMT_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file into a string, rejecting files over the size limit before
/// reading so a mistyped path to something huge cannot exhaust memory.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io(path, e))?;
    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max,
        });
    }
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Write rendered output to a file.
pub fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::io(path, e))
}
