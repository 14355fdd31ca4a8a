//! casesheet - Pure-Rust test case text parser and Excel workbook generator
//!
//! This crate parses a delimited plain-text format describing named test
//! cases, each with preconditions and ordered steps (optionally paired with
//! expected results), and emits one spreadsheet row per semantic unit: the
//! case header, each precondition, and each step.
//!
//! # Input Format
//!
//! ```text
//! Login test
//! Preconditions:
//! App installed
//! Steps:
//! Open app
//! Enter credentials (Dashboard shown)
//! ---
//! Logout test
//! ...
//! ```
//!
//! The control strings (case delimiter, section markers, the bracket that
//! splits a step from its expected result, and an optional start marker
//! skipping a preamble) are configurable via [`MarkerConfig`], either in
//! code or from a YAML file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use casesheet::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Open input text file
//!     let input = File::open("cases.txt")?;
//!
//!     // Create output workbook
//!     let output = File::create("cases.xlsx")?;
//!
//!     // Convert text to an Excel workbook
//!     converter.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory conversion, use `Cursor`:
//!
//! ```rust
//! use std::io::Cursor;
//! use casesheet::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().build()?;
//! let text = "Login test\nSteps:\nOpen app\n";
//! let mut workbook_bytes = Vec::new();
//! converter.convert(Cursor::new(text), &mut workbook_bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::fs::File;
//! use casesheet::{ConverterBuilder, MarkerConfig, OutputFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Markers loaded from a YAML settings file
//!     let markers = MarkerConfig::from_yaml_file("Settings/config.yml")?;
//!
//!     let converter = ConverterBuilder::new()
//!         .with_markers(markers)
//!         .with_output_format(OutputFormat::Csv)
//!         .build()?;
//!
//!     let input = File::open("cases.txt")?;
//!     let output = File::create("cases.csv")?;
//!     converter.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Structured Access
//!
//! ```rust
//! use std::io::Cursor;
//! use casesheet::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().build()?;
//! let cases = converter.parse_cases(Cursor::new("Login test\nSteps:\nOpen app\n"))?;
//! assert_eq!(cases.len(), 1);
//! assert_eq!(cases[0].name, "Login test");
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod config;
mod error;
mod flatten;
mod output;
mod parser;
mod security;
mod types;

// 公開API
pub use api::{ColumnLabels, OutputFormat};
pub use builder::{Converter, ConverterBuilder};
pub use config::MarkerConfig;
pub use error::TxtToXlsxError;
pub use types::{Row, TestCase, TestStep};
