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

//! CSV codec for refmt document trees, backed by the `csv` crate.
//!
//! CSV carries flat tables, so this codec maps between text and
//! `Array<Object>` trees only. Cell values stay strings on ingestion.

mod error;
mod from_csv;
mod to_csv;

pub use error::CsvError;
pub use from_csv::from_csv;
pub use to_csv::to_csv;
