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

//! YAML codec for refmt document trees, backed by `serde_yaml`.
//!
//! Note that YAML treats nearly any text as a valid scalar, so
//! [`from_yaml`] succeeds on inputs other formats reject; the detection
//! chain in the `refmt` crate relies on this by ordering YAML after JSON.

mod error;
mod from_yaml;
mod to_yaml;

pub use error::YamlError;
pub use from_yaml::from_yaml;
pub use to_yaml::to_yaml;
