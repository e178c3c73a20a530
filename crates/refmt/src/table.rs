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

//! The tabular report: a write-only, human-readable rendering.
//!
//! No parser recovers a tree from this output.

use refmt_core::{Map, Node};
use std::fmt::Write;

/// Width the key column is left-justified to.
const KEY_WIDTH: usize = 20;

/// Render a document tree as a key/value report.
///
/// An object renders one line per key, the key left-justified to a fixed
/// width. An array of objects renders one block per element with a blank
/// separator line between elements. Any other shape renders as the tree's
/// generic textual form.
pub fn to_table(tree: &Node) -> String {
    match tree {
        Node::Object(map) => object_block(map),
        Node::Array(items) if items.iter().all(|item| item.as_object().is_some()) => {
            let mut out = String::new();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                if let Some(map) = item.as_object() {
                    out.push_str(&object_block(map));
                }
            }
            out
        }
        other => format!("{}\n", other),
    }
}

fn object_block(map: &Map) -> String {
    let mut out = String::new();
    for (key, value) in map {
        // String scalars render literally; everything else in generic form
        let rendered = match value {
            Node::String(s) => s.clone(),
            other => other.to_string(),
        };
        let _ = writeln!(out, "{:<width$}: {}", key, rendered, width = KEY_WIDTH);
    }
    out
}
