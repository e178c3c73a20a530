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

//! Input normalization: validate raw text against its declared format.

use refmt_core::{Format, FormatError};

/// Validate `raw` under the parser for `format` and return the sanitized
/// text unchanged (not the tree).
///
/// Before any format-specific check, a single leading byte-order marker is
/// stripped and outer whitespace trimmed. Plain text validates
/// unconditionally; [`Format::Table`] is output-only and rejected here.
///
/// # Errors
///
/// [`FormatError::MalformedInput`] if the text fails to parse under the
/// declared format, [`FormatError::UnsupportedFormat`] for `Table`.
pub fn normalize(raw: &str, format: Format) -> Result<String, FormatError> {
    let input = sanitize(raw);
    match format {
        Format::Json => {
            refmt_json::from_json(input).map_err(|e| FormatError::malformed(format, e.to_string()))?;
        }
        Format::Yaml => {
            refmt_yaml::from_yaml(input).map_err(|e| FormatError::malformed(format, e.to_string()))?;
        }
        Format::Xml => {
            refmt_xml::from_xml(input).map_err(|e| FormatError::malformed(format, e.to_string()))?;
        }
        Format::Csv => {
            refmt_csv::from_csv(input).map_err(|e| FormatError::malformed(format, e.to_string()))?;
        }
        Format::PlainText => {}
        Format::Table => {
            return Err(FormatError::unsupported(
                format,
                "table output cannot be used as an input format",
            ));
        }
    }
    Ok(input.to_string())
}

/// Strip one leading U+FEFF, then trim outer whitespace.
pub(crate) fn sanitize(raw: &str) -> &str {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).trim()
}
