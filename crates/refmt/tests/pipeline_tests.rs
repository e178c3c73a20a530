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

//! End-to-end tests for the normalize → detect → transform pipeline.

use refmt::{convert, detect, normalize, transform, Format, FormatError, Node};

#[test]
fn json_to_yaml_and_back_preserves_the_tree() {
    let original = r#"{"name":"Alice","age":30}"#;
    let yaml = convert(original, Format::Json, Format::Yaml).unwrap();
    let json = convert(&yaml, Format::Yaml, Format::Json).unwrap();

    let before = detect(original).unwrap();
    let after = detect(&json).unwrap();
    assert_eq!(before, after);
}

#[test]
fn bare_string_scalar_cannot_become_csv() {
    let normalized = normalize("\"hello\"", Format::Json).unwrap();
    let err = transform(&normalized, Format::Csv).unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedFormat { .. }));
}

#[test]
fn detection_resolves_bare_mapping_via_yaml() {
    let tree = detect("name: Alice").unwrap();
    let map = tree.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("name").unwrap().as_str(), Some("Alice"));

    let json = transform("name: Alice", Format::Json).unwrap();
    let compact: String = json.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(compact, r#"{"name":"Alice"}"#);
}

#[test]
fn json_rows_to_csv_keeps_row_and_column_order() {
    let input = r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#;
    let csv = convert(input, Format::Json, Format::Csv).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,age"));
    assert_eq!(lines.next(), Some("Alice,30"));
    assert_eq!(lines.next(), Some("Bob,25"));
}

#[test]
fn xml_to_json_keeps_root_key_and_string_typing() {
    let input = "<person><name>Alice</name><age>30</age></person>";
    let json = convert(input, Format::Xml, Format::Json).unwrap();
    let tree = detect(&json).unwrap();
    let person = tree.as_object().unwrap().get("person").unwrap();
    let person = person.as_object().unwrap();
    assert_eq!(person.get("name").unwrap().as_str(), Some("Alice"));
    // XML carries no numeric type, so the age stays a string
    assert_eq!(person.get("age").unwrap(), &Node::String("30".to_string()));
}

#[test]
fn plain_text_normalization_trims_outer_whitespace_only() {
    assert_eq!(normalize("  hello \n", Format::PlainText).unwrap(), "hello");
}

#[test]
fn table_is_output_only() {
    let err = normalize("k: v", Format::Table).unwrap_err();
    assert!(matches!(err, FormatError::UnsupportedFormat { .. }));

    // but it is a valid transform target
    let out = convert(r#"{"name":"Alice"}"#, Format::Json, Format::Table).unwrap();
    assert_eq!(out, "name                : Alice\n");
}

#[test]
fn table_renders_row_blocks_for_json_arrays() {
    let input = r#"[{"id":1},{"id":2}]"#;
    let out = convert(input, Format::Json, Format::Table).unwrap();
    assert_eq!(out, "id                  : 1\n\nid                  : 2\n");
}

#[test]
fn csv_input_to_json_carries_cells_as_strings() {
    let json = convert("name,age\nAlice,30\n", Format::Csv, Format::Json).unwrap();
    let rows = detect(&json).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let row = rows[0].as_object().unwrap();
    // CSV carries no types, so every cell arrives as a string
    assert_eq!(row.get("name").unwrap().as_str(), Some("Alice"));
    assert_eq!(row.get("age").unwrap().as_str(), Some("30"));
}

#[test]
fn yaml_to_xml_round_trips_shape() {
    let xml = convert("person:\n  name: Alice\n", Format::Yaml, Format::Xml).unwrap();
    assert!(xml.contains("<person>"));
    assert!(xml.contains("<name>Alice</name>"));
}

#[test]
fn bom_is_stripped_before_validation() {
    let normalized = normalize("\u{feff}{\"a\": 1}", Format::Json).unwrap();
    assert_eq!(normalized, "{\"a\": 1}");
}

#[test]
fn failures_at_normalize_stage_abort_the_call() {
    let err = convert("{broken", Format::Json, Format::Yaml).unwrap_err();
    assert!(matches!(
        err,
        FormatError::MalformedInput { format: Format::Json, .. }
    ));
}
