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

//! Document tree to JSON text conversion.

use crate::error::JsonError;
use refmt_core::Node;
use serde_json::{Map as JsonMap, Number, Value};

/// Render a document tree as pretty-printed JSON.
pub fn to_json(node: &Node) -> Result<String, JsonError> {
    let value = node_to_value(node);
    serde_json::to_string_pretty(&value).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Convert a document tree into a `serde_json::Value`.
pub fn node_to_value(node: &Node) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Int(n) => Value::Number((*n).into()),
        // Non-finite floats have no JSON representation; degrade to null
        Node::Float(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => Value::Array(items.iter().map(node_to_value).collect()),
        Node::Object(map) => {
            let mut entries = JsonMap::new();
            for (key, value) in map {
                entries.insert(key.clone(), node_to_value(value));
            }
            Value::Object(entries)
        }
    }
}
