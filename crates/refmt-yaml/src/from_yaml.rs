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

//! YAML text to document tree conversion.

use crate::error::YamlError;
use refmt_core::{Map, Node};
use serde_yaml::Value;

/// Parse YAML text into a document tree.
///
/// `serde_yaml`'s mapping type keeps insertion order, so object keys come
/// out in source order. Tagged values unwrap to their inner value; scalar
/// mapping keys that are not strings are carried as their textual form.
pub fn from_yaml(text: &str) -> Result<Node, YamlError> {
    let value: Value = serde_yaml::from_str(text)?;
    value_to_node(value)
}

fn value_to_node(value: Value) -> Result<Node, YamlError> {
    match value {
        Value::Null => Ok(Node::Null),
        Value::Bool(b) => Ok(Node::Bool(b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Node::Int(i))
            } else {
                Ok(Node::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        Value::String(s) => Ok(Node::String(s)),
        Value::Sequence(items) => {
            let nodes = items
                .into_iter()
                .map(value_to_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Node::Array(nodes))
        }
        Value::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_to_string(key)?, value_to_node(value)?);
            }
            Ok(Node::Object(map))
        }
        Value::Tagged(tagged) => value_to_node(tagged.value),
    }
}

fn key_to_string(key: Value) -> Result<String, YamlError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Sequence(_) => Err(YamlError::NonStringKey("sequence".to_string())),
        Value::Mapping(_) => Err(YamlError::NonStringKey("mapping".to_string())),
        Value::Tagged(tagged) => key_to_string(tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_block_mapping() {
        let node = from_yaml("name: Alice\nage: 30\n").unwrap();
        let map = node.as_object().unwrap();
        assert_eq!(map.get("name").unwrap().as_str(), Some("Alice"));
        assert_eq!(map.get("age").unwrap().as_int(), Some(30));
    }

    #[test]
    fn parses_sequences() {
        let node = from_yaml("- 1\n- 2\n- three\n").unwrap();
        let items = node.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].as_str(), Some("three"));
    }

    #[test]
    fn bare_scalar_is_a_string() {
        assert_eq!(
            from_yaml("hello").unwrap(),
            Node::String("hello".to_string())
        );
    }

    #[test]
    fn numeric_keys_are_stringified() {
        let node = from_yaml("1: one\n2: two\n").unwrap();
        let keys: Vec<_> = node.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["1", "2"]);
    }

    #[test]
    fn preserves_key_order() {
        let node = from_yaml("z: 1\na: 2\nm: 3\n").unwrap();
        let keys: Vec<_> = node.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(from_yaml("key: [unclosed").is_err());
        assert!(from_yaml("a: 1\n- b").is_err());
    }
}
