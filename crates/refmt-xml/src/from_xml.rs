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

//! XML text to document tree conversion.
//!
//! Ingestion is intentionally lossy: attributes and child elements are
//! conflated into object keys (attributes first, in document order), text
//! is always carried as a string with no type inference, and stray text
//! around child elements is dropped.

use crate::error::XmlError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use refmt_core::{Map, Node};

/// Maximum element nesting depth accepted by the parser.
const MAX_DEPTH: usize = 512;

/// Parse XML text into a document tree.
///
/// The root element becomes the single key of the returned object, so
/// `<person><name>Alice</name></person>` parses to
/// `{"person": {"name": "Alice"}}`. Repeated sibling element names collapse
/// into an array under that name; a text-only element becomes a string; an
/// empty element with no attributes becomes null.
pub fn from_xml(text: &str) -> Result<Node, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut root: Option<(String, Node)> = None;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if root.is_some() {
                    return Err(XmlError::Parse("multiple root elements".to_string()));
                }
                let name = decode_name(&e);
                let attributes = collect_attributes(&e)?;
                let node = parse_element(&mut reader, &name, attributes, 0)?;
                root = Some((name, node));
            }
            Ok(Event::Empty(e)) => {
                if root.is_some() {
                    return Err(XmlError::Parse("multiple root elements".to_string()));
                }
                let name = decode_name(&e);
                let attributes = collect_attributes(&e)?;
                root = Some((name, empty_element(attributes)));
            }
            Ok(Event::Text(t)) => {
                // trim_text removed whitespace-only runs already
                let text = t
                    .unescape()
                    .map_err(|e| XmlError::Parse(e.to_string()))?;
                return Err(XmlError::Parse(format!(
                    "unexpected text outside root element: '{}'",
                    text.trim()
                )));
            }
            Ok(Event::End(_)) => {
                return Err(XmlError::Parse("unexpected closing tag".to_string()));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(XmlError::Parse(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )));
            }
        }
    }

    let (name, node) = root.ok_or_else(|| XmlError::Parse("no root element".to_string()))?;
    let mut map = Map::new();
    map.insert(name, node);
    Ok(Node::Object(map))
}

fn parse_element(
    reader: &mut Reader<&[u8]>,
    name: &str,
    attributes: Vec<(String, String)>,
    depth: usize,
) -> Result<Node, XmlError> {
    if depth > MAX_DEPTH {
        return Err(XmlError::Parse(format!(
            "element nesting exceeds {} levels",
            MAX_DEPTH
        )));
    }

    let mut map = Map::new();
    for (key, value) in attributes {
        insert_folding(&mut map, key, Node::String(value));
    }

    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let child_name = decode_name(&e);
                let child_attributes = collect_attributes(&e)?;
                let child = parse_element(reader, &child_name, child_attributes, depth + 1)?;
                insert_folding(&mut map, child_name, child);
            }
            Ok(Event::Empty(e)) => {
                let child_name = decode_name(&e);
                let child_attributes = collect_attributes(&e)?;
                insert_folding(&mut map, child_name, empty_element(child_attributes));
            }
            Ok(Event::Text(t)) => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| XmlError::Parse(e.to_string()))?;
                text.push_str(&unescaped);
            }
            Ok(Event::CData(t)) => {
                text.push_str(&String::from_utf8_lossy(&t.into_inner()));
            }
            // check_end_names is on, so a mismatched tag surfaces as Err
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(XmlError::Parse(format!("unclosed element <{}>", name)));
            }
            Ok(_) => {}
            Err(e) => {
                return Err(XmlError::Parse(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )));
            }
        }
    }

    if map.is_empty() {
        if text.is_empty() {
            Ok(Node::Null)
        } else {
            Ok(Node::String(text))
        }
    } else {
        Ok(Node::Object(map))
    }
}

/// Inserts a key, collapsing repeats into an array in first-seen position.
fn insert_folding(map: &mut Map, key: String, node: Node) {
    match map.get_mut(&key) {
        Some(Node::Array(items)) => items.push(node),
        Some(existing) => {
            let first = std::mem::replace(existing, Node::Null);
            *existing = Node::Array(vec![first, node]);
        }
        None => {
            map.insert(key, node);
        }
    }
}

fn empty_element(attributes: Vec<(String, String)>) -> Node {
    if attributes.is_empty() {
        return Node::Null;
    }
    let mut map = Map::new();
    for (key, value) in attributes {
        insert_folding(&mut map, key, Node::String(value));
    }
    Node::Object(map)
}

fn decode_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}

fn collect_attributes(e: &BytesStart) -> Result<Vec<(String, String)>, XmlError> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| XmlError::Parse(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| XmlError::Parse(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_element_becomes_single_key() {
        let node = from_xml("<person><name>Alice</name><age>30</age></person>").unwrap();
        let root = node.as_object().unwrap();
        let person = root.get("person").unwrap().as_object().unwrap();
        assert_eq!(person.get("name").unwrap().as_str(), Some("Alice"));
        // no type inference: the text stays a string
        assert_eq!(person.get("age").unwrap().as_str(), Some("30"));
    }

    #[test]
    fn attributes_conflate_into_keys() {
        let node = from_xml(r#"<user id="7"><name>Bob</name></user>"#).unwrap();
        let user = node.as_object().unwrap().get("user").unwrap();
        let keys: Vec<_> = user.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(user.as_object().unwrap().get("id").unwrap().as_str(), Some("7"));
    }

    #[test]
    fn repeated_siblings_fold_into_array() {
        let node = from_xml("<list><item>a</item><item>b</item><item>c</item></list>").unwrap();
        let list = node.as_object().unwrap().get("list").unwrap();
        let items = list.as_object().unwrap().get("item").unwrap();
        assert_eq!(items.as_array().unwrap().len(), 3);
    }

    #[test]
    fn empty_element_is_null() {
        let node = from_xml("<a><b/></a>").unwrap();
        let a = node.as_object().unwrap().get("a").unwrap();
        assert!(a.as_object().unwrap().get("b").unwrap().is_null());
    }

    #[test]
    fn entities_are_unescaped() {
        let node = from_xml("<v>a &amp; b &lt;c&gt;</v>").unwrap();
        let v = node.as_object().unwrap().get("v").unwrap();
        assert_eq!(v.as_str(), Some("a & b <c>"));
    }

    #[test]
    fn rejects_unclosed_element() {
        assert!(from_xml("<a><b>text</a>").is_err());
        assert!(from_xml("<a>").is_err());
    }

    #[test]
    fn rejects_plain_text() {
        assert!(from_xml("just some words").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(from_xml("").is_err());
    }
}
