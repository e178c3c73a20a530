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

//! Format detection: re-derive the document tree from normalized text
//! without a declared format.

use refmt_core::{Format, FormatError, Node};

/// The fixed order in which candidate parsers are attempted.
///
/// This order is a contract, not an optimization. JSON is a syntactic
/// subset of YAML, so JSON inputs must meet the JSON parser before YAML
/// can claim them; changing the order changes which format wins on
/// ambiguous input. The first parser that succeeds wins outright — no
/// scoring, no comparison, no backtracking.
pub const DETECTION_ORDER: [Format; 4] = [Format::Json, Format::Yaml, Format::Xml, Format::Csv];

/// Try each candidate parser in [`DETECTION_ORDER`] and return the first
/// successful tree.
///
/// # Errors
///
/// [`FormatError::DetectionExhausted`] when every candidate fails,
/// carrying the failure reason of the last attempt.
pub fn detect(text: &str) -> Result<Node, FormatError> {
    let mut last_failure: Option<(Format, String)> = None;
    for format in DETECTION_ORDER {
        match attempt(text, format) {
            Ok(tree) => return Ok(tree),
            Err(reason) => last_failure = Some((format, reason)),
        }
    }
    // DETECTION_ORDER is non-empty, so a failure was recorded
    let reason = match last_failure {
        Some((format, reason)) => format!("{}: {}", format, reason),
        None => "no candidate parsers".to_string(),
    };
    Err(FormatError::DetectionExhausted { reason })
}

/// One tagged parse attempt; the failure reason is kept as text so the
/// last one can ride along in the exhaustion error.
///
/// Two attempts carry a stricter success bar than their codec:
///
/// - YAML treats nearly any text as a valid plain scalar, XML documents
///   and CSV tables included. A bare scalar here means YAML recognized
///   nothing structural, so only mappings and sequences count; anything
///   else falls through to the later candidates.
/// - CSV consumes an arbitrary first line as a header, so a lone header
///   with no data rows would claim almost any leftover text as an empty
///   table. Detection requires at least one data row.
fn attempt(text: &str, format: Format) -> Result<Node, String> {
    match format {
        Format::Json => refmt_json::from_json(text).map_err(|e| e.to_string()),
        Format::Yaml => match refmt_yaml::from_yaml(text) {
            Ok(tree @ (Node::Object(_) | Node::Array(_))) => Ok(tree),
            Ok(_) => Err("YAML parsed only a bare scalar".to_string()),
            Err(e) => Err(e.to_string()),
        },
        Format::Xml => refmt_xml::from_xml(text).map_err(|e| e.to_string()),
        Format::Csv => match refmt_csv::from_csv(text) {
            Ok(tree) => match tree.as_array() {
                Some(rows) if !rows.is_empty() => Ok(tree),
                _ => Err("no data rows under the header".to_string()),
            },
            Err(e) => Err(e.to_string()),
        },
        Format::PlainText | Format::Table => Err("not a detectable format".to_string()),
    }
}
