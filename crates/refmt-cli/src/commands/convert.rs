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

//! The convert command: file/literal input, engine call, file/stdout output.

use super::{read_file, write_file};
use crate::error::CliError;
use refmt::Format;
use std::path::Path;

/// Run a conversion.
///
/// `input` is a literal data string, or a file path when `is_file` is set.
/// `output` is a file path, or `stdout` for console output. Console output
/// is always just the converted value; `clean` additionally suppresses the
/// status message printed after a file write.
///
/// The engine owns validation and conversion; this function owns file
/// reads, writes and nothing else.
pub fn convert(
    input: &str,
    output: &str,
    input_format: Format,
    output_format: Format,
    is_file: bool,
    clean: bool,
) -> Result<(), CliError> {
    let raw = if is_file {
        let path = Path::new(input);
        if !path.exists() {
            return Err(CliError::InputNotFound(path.to_path_buf()));
        }
        read_file(path)?
    } else {
        input.to_string()
    };

    let normalized = refmt::normalize(&raw, input_format)?;
    let rendered = refmt::transform(&normalized, output_format)?;

    if is_file && !output.eq_ignore_ascii_case("stdout") {
        write_file(Path::new(output), &rendered)?;
        if !clean {
            println!("converted output written to {}", output);
        }
    } else if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
