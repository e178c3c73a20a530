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

//! Document tree to XML text conversion.

use crate::error::XmlError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use refmt_core::Node;
use std::io::Cursor;

/// Render a document tree as pretty-printed XML.
///
/// Object keys become element names and arrays become repeated sibling
/// elements. An object with exactly one key uses that key as the document
/// element (the inverse of `from_xml`'s root handling); any other tree is
/// wrapped in `<root>`, with nameless array elements as `<item>`.
pub fn to_xml(node: &Node) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(serialize_err)?;

    // A single non-array entry can be the document element directly.
    let mut single: Option<(&str, &Node)> = None;
    if let Node::Object(map) = node {
        if map.len() == 1 {
            if let Some((key, value)) = map.iter().next() {
                if is_valid_element_name(key) && !matches!(value, Node::Array(_)) {
                    single = Some((key, value));
                }
            }
        }
    }

    match single {
        Some((key, value)) => write_element(&mut writer, key, value)?,
        None => {
            writer
                .write_event(Event::Start(BytesStart::new("root")))
                .map_err(serialize_err)?;
            write_content(&mut writer, node)?;
            writer
                .write_event(Event::End(BytesEnd::new("root")))
                .map_err(serialize_err)?;
        }
    }

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| XmlError::Serialize(e.to_string()))
}

fn write_content<W: std::io::Write>(writer: &mut Writer<W>, node: &Node) -> Result<(), XmlError> {
    match node {
        Node::Object(map) => {
            for (key, value) in map {
                write_element(writer, key, value)?;
            }
            Ok(())
        }
        Node::Array(items) => {
            for item in items {
                write_element(writer, "item", item)?;
            }
            Ok(())
        }
        Node::Null => Ok(()),
        scalar => writer
            .write_event(Event::Text(BytesText::new(&scalar_text(scalar))))
            .map_err(serialize_err),
    }
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    node: &Node,
) -> Result<(), XmlError> {
    if !is_valid_element_name(name) {
        return Err(XmlError::InvalidElementName(name.to_string()));
    }
    match node {
        Node::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Node::Null => writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(serialize_err),
        Node::Object(map) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(serialize_err)?;
            for (key, value) in map {
                write_element(writer, key, value)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(serialize_err)
        }
        scalar => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(serialize_err)?;
            writer
                .write_event(Event::Text(BytesText::new(&scalar_text(scalar))))
                .map_err(serialize_err)?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(serialize_err)
        }
    }
}

fn scalar_text(node: &Node) -> String {
    match node {
        Node::Bool(b) => b.to_string(),
        Node::Int(n) => n.to_string(),
        Node::Float(n) => n.to_string(),
        Node::String(s) => s.clone(),
        _ => String::new(),
    }
}

fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

fn serialize_err<E: std::fmt::Display>(err: E) -> XmlError {
    XmlError::Serialize(err.to_string())
}
