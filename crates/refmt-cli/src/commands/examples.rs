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

//! Usage examples for the convert command.

/// Print usage examples to stdout.
pub fn examples() {
    println!("refmt usage examples\n");
    println!("Convert a JSON file to YAML:");
    println!("  $ refmt convert -i input.json -o output.yaml -f json -t yaml --file\n");
    println!("Convert a literal string to JSON on the console:");
    println!("  $ refmt convert -i 'name: Alice' -f yaml -t json\n");
    println!("Render an XML file as a human-readable table:");
    println!("  $ refmt convert -i input.xml -o report.txt -f xml -t table --file\n");
    println!("Clean output for scripting:");
    println!("  $ refmt convert -i input.csv -f csv -t json -c");
}
