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

//! CSV text to document tree conversion.

use crate::error::CsvError;
use csv::ReaderBuilder;
use refmt_core::{Map, Node};

/// Parse CSV text into a document tree.
///
/// The first record is the header; every following record becomes an object
/// whose keys are the header columns in header order. Cell values are
/// always carried as strings, never reinterpreted as numbers. A record with
/// a different column count than the header is malformed. Input with no
/// header row is malformed; a lone header row yields an empty array.
pub fn from_csv(text: &str) -> Result<Node, CsvError> {
    if text.trim().is_empty() {
        return Err(CsvError::Parse("empty input, header row required".to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CsvError::Parse(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Map::with_capacity(headers.len());
        for (column, field) in headers.iter().zip(record.iter()) {
            row.insert(column.clone(), Node::String(field.to_string()));
        }
        rows.push(Node::Object(row));
    }

    Ok(Node::Array(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_become_objects_in_header_order() {
        let node = from_csv("name,age\nAlice,30\nBob,25\n").unwrap();
        let rows = node.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        let first = rows[0].as_object().unwrap();
        let keys: Vec<_> = first.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(first.get("age").unwrap().as_str(), Some("30"));
    }

    #[test]
    fn cells_stay_strings() {
        let node = from_csv("n\n42\n").unwrap();
        let rows = node.as_array().unwrap();
        assert_eq!(rows[0].as_object().unwrap().get("n").unwrap().as_str(), Some("42"));
    }

    #[test]
    fn quoted_fields_are_parsed() {
        let node = from_csv("a,b\n\"x,y\",\"he said \"\"hi\"\"\"\n").unwrap();
        let row = node.as_array().unwrap()[0].as_object().unwrap().clone();
        assert_eq!(row.get("a").unwrap().as_str(), Some("x,y"));
        assert_eq!(row.get("b").unwrap().as_str(), Some("he said \"hi\""));
    }

    #[test]
    fn header_only_yields_empty_array() {
        let node = from_csv("name,age\n").unwrap();
        assert_eq!(node.as_array().unwrap().len(), 0);
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(from_csv("").is_err());
        assert!(from_csv("   \n ").is_err());
    }

    #[test]
    fn column_mismatch_is_malformed() {
        assert!(from_csv("a,b\n1,2,3\n").is_err());
        assert!(from_csv("a,b\n1\n").is_err());
    }
}
