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

//! The document tree: the pivot representation every format converts through.

use indexmap::IndexMap;
use std::fmt;

/// Ordered string-keyed mapping used for object nodes.
///
/// Keys iterate in insertion order as encountered during parse; conversion
/// never reorders them. A plain `HashMap` does not give that guarantee,
/// hence `IndexMap`.
pub type Map = IndexMap<String, Node>;

/// A node in the document tree.
///
/// Every supported format parses into this shape and serializes back out of
/// it. A tree is built fresh per conversion call and discarded once the
/// output text exists; nothing is cached across calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// Ordered sequence of nodes.
    Array(Vec<Node>),
    /// Insertion-ordered mapping of string keys to nodes.
    Object(Map),
}

impl Node {
    /// Returns true if this node is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this node is a scalar (not an array or object).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Try to get the node as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the node as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the node as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the node as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the node as an array slice.
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the node as an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }
}

/// Renders the generic textual form: compact, JSON-like, strings quoted.
///
/// This is the display used wherever a node has to appear inside a single
/// line of text, e.g. composite cells in the table report.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::String(s) => write_quoted(f, s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    f.write_str(":")?;
                    write!(f, "{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_object() -> Node {
        let mut map = Map::new();
        map.insert("name".to_string(), Node::String("Alice".to_string()));
        map.insert("age".to_string(), Node::Int(30));
        Node::Object(map)
    }

    #[test]
    fn accessors() {
        assert!(Node::Null.is_null());
        assert_eq!(Node::Int(7).as_int(), Some(7));
        assert_eq!(Node::Int(7).as_float(), Some(7.0));
        assert_eq!(Node::Bool(true).as_bool(), Some(true));
        assert_eq!(Node::String("x".into()).as_str(), Some("x"));
        assert!(Node::Array(vec![]).as_object().is_none());
        assert!(sample_object().as_object().is_some());
    }

    #[test]
    fn scalar_check() {
        assert!(Node::Null.is_scalar());
        assert!(Node::String("x".into()).is_scalar());
        assert!(!Node::Array(vec![]).is_scalar());
        assert!(!sample_object().is_scalar());
    }

    #[test]
    fn display_is_compact_json_like() {
        assert_eq!(
            sample_object().to_string(),
            r#"{"name":"Alice","age":30}"#
        );
        assert_eq!(Node::Array(vec![Node::Null, Node::Bool(false)]).to_string(), "[null,false]");
    }

    #[test]
    fn display_escapes_strings() {
        let node = Node::String("a\"b\\c\nd".to_string());
        assert_eq!(node.to_string(), r#""a\"b\\c\nd""#);
    }

    #[test]
    fn object_keys_keep_insertion_order() {
        let mut map = Map::new();
        map.insert("z".to_string(), Node::Int(1));
        map.insert("a".to_string(), Node::Int(2));
        map.insert("m".to_string(), Node::Int(3));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
