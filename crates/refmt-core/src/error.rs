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

//! The conversion error taxonomy.

use crate::format::Format;
use thiserror::Error;

/// An error raised while normalizing, detecting or transforming text.
///
/// Every variant is terminal for the call that raised it: parsing is
/// deterministic, so nothing is retried, and no partial output accompanies
/// an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Text failed to parse under its declared format, or under a candidate
    /// format during detection. Carries the underlying parser's reason.
    #[error("malformed {format} input: {reason}")]
    MalformedInput {
        /// The format the text was parsed as.
        format: Format,
        /// The underlying parse failure.
        reason: String,
    },

    /// A format value unsupported for the requested operation, or a tree
    /// shape the target serializer cannot represent.
    #[error("unsupported format '{format}': {reason}")]
    UnsupportedFormat {
        /// The offending format name.
        format: String,
        /// Why the format cannot be used here.
        reason: String,
    },

    /// Every candidate parser was attempted without success. Carries the
    /// failure reason of the last attempt.
    #[error("could not detect input format: {reason}")]
    DetectionExhausted {
        /// The last candidate's failure reason.
        reason: String,
    },
}

impl FormatError {
    /// Convenience constructor for malformed input.
    pub fn malformed(format: Format, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            format,
            reason: reason.into(),
        }
    }

    /// Convenience constructor for an unsupported format or tree shape.
    pub fn unsupported(format: impl ToString, reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display() {
        let err = FormatError::malformed(Format::Json, "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "malformed JSON input: expected value at line 1"
        );
    }

    #[test]
    fn unsupported_display() {
        let err = FormatError::unsupported(Format::Table, "table output cannot be re-parsed");
        assert_eq!(
            err.to_string(),
            "unsupported format 'table': table output cannot be re-parsed"
        );
    }

    #[test]
    fn exhausted_display() {
        let err = FormatError::DetectionExhausted {
            reason: "CSV: empty input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not detect input format: CSV: empty input"
        );
    }
}
