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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use refmt::Format;

/// Convert structured text between JSON, YAML, XML, CSV, plain text and
/// tabular reports.
#[derive(Parser)]
#[command(name = "refmt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert raw text from a declared format into a target format
    Convert {
        /// Input file path or literal data string
        #[arg(short, long)]
        input: String,

        /// Output file path, or 'stdout' for console output
        #[arg(short, long, default_value = "stdout")]
        output: String,

        /// Declared format of the input
        #[arg(short = 'f', long, value_enum)]
        input_format: FormatArg,

        /// Target format of the output
        #[arg(short = 't', long, value_enum)]
        output_format: FormatArg,

        /// Treat input and output as file paths
        #[arg(long)]
        file: bool,

        /// Suppress the status message after writing to a file
        /// (console output is always just the converted value)
        #[arg(short, long)]
        clean: bool,
    },

    /// Show usage examples
    Examples,

    /// Generate a shell completion script on stdout
    Completion {
        /// Shell to generate the script for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Convert {
                input,
                output,
                input_format,
                output_format,
                file,
                clean,
            } => commands::convert(
                &input,
                &output,
                input_format.into(),
                output_format.into(),
                file,
                clean,
            ),
            Commands::Examples => {
                commands::examples();
                Ok(())
            }
            Commands::Completion { shell } => {
                commands::completion(shell);
                Ok(())
            }
        }
    }
}

/// Format names accepted on the command line.
///
/// `table` is accepted as an output format only; the engine rejects it as
/// a declared input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// JSON text
    Json,
    /// YAML text
    Yaml,
    /// XML text
    Xml,
    /// CSV text with a header row
    Csv,
    /// Unstructured text
    PlainText,
    /// Human-readable key/value report (output only)
    Table,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
            FormatArg::Xml => Format::Xml,
            FormatArg::Csv => Format::Csv,
            FormatArg::PlainText => Format::PlainText,
            FormatArg::Table => Format::Table,
        }
    }
}
