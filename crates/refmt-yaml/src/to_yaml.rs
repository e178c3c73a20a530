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

//! Document tree to YAML text conversion.

use crate::error::YamlError;
use refmt_core::Node;
use serde_yaml::{Mapping, Value};

/// Render a document tree as block-style YAML.
pub fn to_yaml(node: &Node) -> Result<String, YamlError> {
    let value = node_to_value(node);
    serde_yaml::to_string(&value).map_err(|e| YamlError::Serialize(e.to_string()))
}

fn node_to_value(node: &Node) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Int(n) => Value::Number((*n).into()),
        Node::Float(n) => Value::Number((*n).into()),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => Value::Sequence(items.iter().map(node_to_value).collect()),
        Node::Object(map) => {
            let mut mapping = Mapping::with_capacity(map.len());
            for (key, value) in map {
                mapping.insert(Value::String(key.clone()), node_to_value(value));
            }
            Value::Mapping(mapping)
        }
    }
}
