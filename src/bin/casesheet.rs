//! casesheet CLI
//!
//! Converts plain-text test case descriptions into spreadsheet workbooks.
//! Accepts either a single input file or a directory; in directory mode
//! every regular file is converted sequentially, and per-file failures are
//! reported without aborting the batch.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use log::{error, info};

use casesheet::{Converter, ConverterBuilder, MarkerConfig, OutputFormat, TxtToXlsxError};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);
    let output_path = PathBuf::from(&args[2]);
    let use_stdout = args[2] == "-" || args.contains(&"--stdout".to_string());

    // Parse options
    let mut config_path: Option<PathBuf> = None;
    let mut format = OutputFormat::Xlsx;
    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a value");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--format" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --format requires a value");
                    process::exit(1);
                }
                format = match args[i + 1].as_str() {
                    "xlsx" => OutputFormat::Xlsx,
                    "csv" => OutputFormat::Csv,
                    "json" => OutputFormat::Json,
                    other => {
                        eprintln!("Error: Unknown format: {}", other);
                        process::exit(1);
                    }
                };
                i += 2;
            }
            "--stdout" => {
                // Already handled above
                i += 1;
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
    }

    // Load marker configuration
    let markers = match &config_path {
        Some(path) => match MarkerConfig::from_yaml_file(path) {
            Ok(markers) => markers,
            Err(e) => {
                handle_error(e);
                process::exit(1);
            }
        },
        None => MarkerConfig::default(),
    };

    let converter = match ConverterBuilder::new()
        .with_markers(markers)
        .with_output_format(format)
        .build()
    {
        Ok(converter) => converter,
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    };

    if input_path.is_dir() {
        match convert_batch(&converter, &input_path, &output_path, format) {
            Ok(0) => {}
            Ok(failed) => {
                error!("{} file(s) failed to convert", failed);
                process::exit(1);
            }
            Err(e) => {
                handle_error(e);
                process::exit(1);
            }
        }
    } else if let Err(e) = convert_file(&converter, &input_path, &output_path, use_stdout) {
        handle_error(e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <input> <output> [options]", program);
    eprintln!("\nWhen <input> is a directory, every regular file in it is converted");
    eprintln!("into <output> (treated as a directory), replacing the input extension");
    eprintln!("with the one of the selected format.");
    eprintln!("\nOptions:");
    eprintln!("  --config <path>      Load marker configuration from a YAML file");
    eprintln!("  --format <fmt>       Output format: xlsx (default), csv, json");
    eprintln!("  --stdout             Write output to stdout instead of a file");
    eprintln!("\nExamples:");
    eprintln!("  {} cases.txt cases.xlsx", program);
    eprintln!("  {} cases.txt cases.csv --format csv", program);
    eprintln!("  {} Input Output --config Settings/config.yml", program);
    eprintln!("  {} cases.txt - --stdout --format csv", program);
}

fn convert_file(
    converter: &Converter,
    input_path: &Path,
    output_path: &Path,
    use_stdout: bool,
) -> Result<(), TxtToXlsxError> {
    let input = File::open(input_path)?;

    if use_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        converter.convert(input, &mut handle)?;
        handle.flush()?;
    } else {
        let output = File::create(output_path)?;
        converter.convert(input, output)?;
        info!(
            "converted {} -> {}",
            input_path.display(),
            output_path.display()
        );
    }

    Ok(())
}

/// Convert every regular file in `input_dir` into `output_dir`.
///
/// Failures are isolated per file: a file that cannot be converted is
/// reported and counted, and the batch continues with the next file.
/// Returns the number of failed files.
fn convert_batch(
    converter: &Converter,
    input_dir: &Path,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<usize, TxtToXlsxError> {
    fs::create_dir_all(output_dir)?;

    let mut entries: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    let mut failed = 0;
    for input_path in &entries {
        let stem = match input_path.file_stem() {
            Some(stem) => stem,
            None => continue,
        };
        let output_path = output_dir.join(stem).with_extension(format.extension());

        if let Err(e) = convert_file(converter, input_path, &output_path, false) {
            error!("failed to convert {}: {}", input_path.display(), e);
            failed += 1;
        }
    }

    Ok(failed)
}

fn handle_error(error: TxtToXlsxError) {
    match error {
        TxtToXlsxError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        TxtToXlsxError::Yaml(yaml_err) => {
            eprintln!("Configuration File Error: {}", yaml_err);
            eprintln!("The configuration file is not valid YAML.");
        }
        TxtToXlsxError::MissingKey(key) => {
            eprintln!("Configuration File Error: missing key '{}'", key);
            eprintln!("The configuration file must define 'delimiter', 'preconditions', 'steps' and 'bracket'.");
        }
        TxtToXlsxError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check your marker configuration.");
        }
        TxtToXlsxError::StartMarkerNotFound(marker) => {
            eprintln!("Parse Error: start marker '{}' not found in input", marker);
            eprintln!("The configured start marker must appear as a full line in the input file.");
        }
        TxtToXlsxError::Workbook(xlsx_err) => {
            eprintln!("Workbook Error: {}", xlsx_err);
            eprintln!("Failed to generate the output workbook.");
        }
        TxtToXlsxError::Json(json_err) => {
            eprintln!("JSON Output Error: {}", json_err);
        }
        TxtToXlsxError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
            eprintln!("The file violates security constraints (e.g., file size limit).");
        }
    }
}
