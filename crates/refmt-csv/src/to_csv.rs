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

//! Document tree to CSV text conversion.

use crate::error::CsvError;
use csv::WriterBuilder;
use refmt_core::Node;

/// Render a document tree as CSV with a header row.
///
/// The tree must be an array of objects (uniform rows) or a bare object,
/// which is implicitly wrapped into a one-row array. The header is the
/// ordered union of keys as first seen across rows; cells absent from a
/// row render empty. Scalar roots, empty arrays and non-object array
/// elements are unsupported, as are composite values inside a cell.
pub fn to_csv(node: &Node) -> Result<String, CsvError> {
    let rows: &[Node] = match node {
        Node::Array(items) => items,
        Node::Object(_) => std::slice::from_ref(node),
        other => {
            return Err(CsvError::UnsupportedShape(format!(
                "expected an array of objects or an object, got a {}",
                shape_name(other)
            )))
        }
    };

    if rows.is_empty() {
        return Err(CsvError::UnsupportedShape(
            "empty array has no rows to derive a header from".to_string(),
        ));
    }

    // Header: ordered union of keys, first-seen order across rows.
    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        let map = row.as_object().ok_or_else(|| {
            CsvError::UnsupportedShape(format!(
                "array element is a {}, not an object",
                shape_name(row)
            ))
        })?;
        for key in map.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key);
            }
        }
    }

    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(&columns)
        .map_err(|e| CsvError::Serialize(e.to_string()))?;

    for row in rows {
        // checked object above
        let map = match row.as_object() {
            Some(map) => map,
            None => continue,
        };
        let mut record = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = match map.get(*column) {
                Some(value) => cell_text(value)?,
                None => String::new(),
            };
            record.push(cell);
        }
        writer
            .write_record(&record)
            .map_err(|e| CsvError::Serialize(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Serialize(e.to_string()))
}

fn cell_text(node: &Node) -> Result<String, CsvError> {
    match node {
        Node::Null => Ok(String::new()),
        Node::Bool(b) => Ok(b.to_string()),
        Node::Int(n) => Ok(n.to_string()),
        Node::Float(n) => Ok(n.to_string()),
        Node::String(s) => Ok(s.clone()),
        composite => Err(CsvError::UnsupportedShape(format!(
            "nested {} cannot be rendered as a CSV cell",
            shape_name(composite)
        ))),
    }
}

fn shape_name(node: &Node) -> &'static str {
    match node {
        Node::Null => "null",
        Node::Bool(_) => "boolean",
        Node::Int(_) | Node::Float(_) => "number",
        Node::String(_) => "string",
        Node::Array(_) => "array",
        Node::Object(_) => "object",
    }
}
