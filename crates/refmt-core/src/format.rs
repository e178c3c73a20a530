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

//! The set of formats a conversion can name.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// A structured text format.
///
/// All six values are valid conversion targets; [`Format::Table`] is
/// output-only and is rejected as a declared input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON text.
    Json,
    /// YAML text.
    Yaml,
    /// XML text.
    Xml,
    /// CSV text with a header row.
    Csv,
    /// Unstructured text; carried as a single string scalar.
    PlainText,
    /// Human-readable key/value report. Output-only.
    Table,
}

impl Format {
    /// Formats accepted as a declared input format, i.e. everything
    /// except the output-only table report.
    pub const INPUT_FORMATS: [Format; 5] = [
        Format::Json,
        Format::Yaml,
        Format::Xml,
        Format::Csv,
        Format::PlainText,
    ];

    /// Returns true if this format may be declared for input.
    pub fn is_input(&self) -> bool {
        !matches!(self, Format::Table)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Xml => "XML",
            Format::Csv => "CSV",
            Format::PlainText => "plain text",
            Format::Table => "table",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "xml" => Ok(Format::Xml),
            "csv" => Ok(Format::Csv),
            "plain-text" | "plain_text" | "plaintext" | "text" | "txt" => Ok(Format::PlainText),
            "table" => Ok(Format::Table),
            other => Err(FormatError::UnsupportedFormat {
                format: other.to_string(),
                reason: "not a known format name".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("YAML".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("plain-text".parse::<Format>().unwrap(), Format::PlainText);
        assert_eq!("txt".parse::<Format>().unwrap(), Format::PlainText);
        assert_eq!("table".parse::<Format>().unwrap(), Format::Table);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("toml".parse::<Format>().is_err());
    }

    #[test]
    fn table_is_not_an_input_format() {
        assert!(!Format::Table.is_input());
        assert!(Format::INPUT_FORMATS.iter().all(Format::is_input));
    }
}
