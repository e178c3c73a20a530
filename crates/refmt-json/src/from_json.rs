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

//! JSON text to document tree conversion.

use crate::error::JsonError;
use refmt_core::{Map, Node};
use serde_json::Value;

/// Parse JSON text into a document tree.
///
/// Object key order follows the source text; serde_json is built with
/// `preserve_order`, so the underlying map iterates in insertion order.
pub fn from_json(text: &str) -> Result<Node, JsonError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(value_to_node(value))
}

fn value_to_node(value: Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Int(i)
            } else {
                // u64 beyond i64::MAX and arbitrary-precision fall back to f64
                Node::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Node::String(s),
        Value::Array(items) => Node::Array(items.into_iter().map(value_to_node).collect()),
        Value::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key, value_to_node(value));
            }
            Node::Object(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scalars() {
        assert_eq!(from_json("null").unwrap(), Node::Null);
        assert_eq!(from_json("true").unwrap(), Node::Bool(true));
        assert_eq!(from_json("42").unwrap(), Node::Int(42));
        assert_eq!(from_json("1.5").unwrap(), Node::Float(1.5));
        assert_eq!(
            from_json(r#""hello""#).unwrap(),
            Node::String("hello".to_string())
        );
    }

    #[test]
    fn parses_nested_structure() {
        let node = from_json(r#"{"users":[{"name":"Alice"},{"name":"Bob"}]}"#).unwrap();
        let users = node.as_object().unwrap().get("users").unwrap();
        assert_eq!(users.as_array().unwrap().len(), 2);
    }

    #[test]
    fn preserves_key_order() {
        let node = from_json(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let keys: Vec<_> = node.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn rejects_malformed_text() {
        let err = from_json("{invalid").unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(from_json("{} trailing").is_err());
    }
}
