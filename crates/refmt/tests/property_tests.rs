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

//! Property tests: tree equality across serialization round trips.

use proptest::prelude::*;
use refmt::{detect, transform, Format, Map, Node};

/// Trees whose scalars survive every grammar unambiguously: strings are
/// alphabetic with a letter prefix so YAML cannot re-read them as numbers
/// or booleans, and floats are left out because their textual width is
/// codec-specific.
fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        any::<i64>().prop_map(Node::Int),
        "s[a-z]{0,8}".prop_map(Node::String),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Array),
            prop::collection::hash_map("[a-z]{1,6}", inner, 0..6).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Node::Object(map)
            }),
        ]
    })
}

/// Trees that are a mapping or sequence at the top level. A bare scalar
/// serialized as YAML is plain prose to the detection chain, so the
/// transform pivot only holds for structured documents.
fn arb_document() -> impl Strategy<Value = Node> {
    prop_oneof![
        prop::collection::vec(arb_node(), 0..6).prop_map(Node::Array),
        prop::collection::hash_map("[a-z]{1,6}", arb_node(), 0..6).prop_map(|entries| {
            let mut map = Map::new();
            for (key, value) in entries {
                map.insert(key, value);
            }
            Node::Object(map)
        }),
    ]
}

proptest! {
    #[test]
    fn json_round_trip_preserves_the_tree(tree in arb_node()) {
        let json = refmt::json::to_json(&tree).unwrap();
        let back = refmt::json::from_json(&json).unwrap();
        prop_assert_eq!(back, tree);
    }

    #[test]
    fn yaml_round_trip_preserves_the_tree(tree in arb_node()) {
        let yaml = refmt::yaml::to_yaml(&tree).unwrap();
        let back = refmt::yaml::from_yaml(&yaml).unwrap();
        prop_assert_eq!(back, tree);
    }

    #[test]
    fn json_to_yaml_to_json_preserves_the_tree(tree in arb_document()) {
        let json = refmt::json::to_json(&tree).unwrap();
        let yaml = transform(&json, Format::Yaml).unwrap();
        let json_again = transform(&yaml, Format::Json).unwrap();
        prop_assert_eq!(detect(&json_again).unwrap(), tree);
    }

    #[test]
    fn detection_recovers_serialized_json(tree in arb_node()) {
        let json = refmt::json::to_json(&tree).unwrap();
        prop_assert_eq!(detect(&json).unwrap(), tree);
    }
}
