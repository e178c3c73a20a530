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

//! The conversion engine: one linear normalize → detect → serialize
//! pipeline, stateless per call.

use crate::detect::detect;
use crate::normalize::normalize;
use crate::table::to_table;
use refmt_core::{Format, FormatError};
use refmt_csv::CsvError;

/// Serialize already-normalized text into the target format.
///
/// The tree is re-derived by detection rather than by a declared format.
/// Plain text is an identity passthrough of the normalized text and never
/// round-trips through the tree. A call either completes fully or fails at
/// the stage boundary where the failure occurred; no partial output.
///
/// # Errors
///
/// [`FormatError::DetectionExhausted`] when no candidate parser accepts
/// the text, [`FormatError::UnsupportedFormat`] when the tree shape cannot
/// be represented in the target format.
pub fn transform(normalized: &str, target: Format) -> Result<String, FormatError> {
    if target == Format::PlainText {
        return Ok(normalized.to_string());
    }

    let tree = detect(normalized)?;
    match target {
        Format::Json => refmt_json::to_json(&tree)
            .map_err(|e| FormatError::unsupported(target, e.to_string())),
        Format::Yaml => refmt_yaml::to_yaml(&tree)
            .map_err(|e| FormatError::unsupported(target, e.to_string())),
        Format::Xml => refmt_xml::to_xml(&tree)
            .map_err(|e| FormatError::unsupported(target, e.to_string())),
        Format::Csv => refmt_csv::to_csv(&tree).map_err(|e| match e {
            CsvError::UnsupportedShape(reason) => FormatError::unsupported(target, reason),
            other => FormatError::unsupported(target, other.to_string()),
        }),
        Format::Table => Ok(to_table(&tree)),
        // handled above
        Format::PlainText => Ok(normalized.to_string()),
    }
}

/// Normalize `raw` under `from`, then transform it into `to`.
///
/// Convenience wrapper over [`normalize`] and [`transform`] for callers
/// that do not need the intermediate text.
pub fn convert(raw: &str, from: Format, to: Format) -> Result<String, FormatError> {
    let normalized = normalize(raw, from)?;
    transform(&normalized, to)
}
