//! Integration Tests for casesheet
//!
//! End-to-end tests covering the full pipeline: marker configuration,
//! line parsing, row flattening and workbook output.

use std::io::Cursor;
use std::io::Write;

use calamine::{open_workbook_auto_from_rs, Reader};
use casesheet::{ColumnLabels, ConverterBuilder, MarkerConfig, OutputFormat, TxtToXlsxError};

// Helper module for test fixtures
mod fixtures {
    /// The canonical two-case scenario: case 1 expands to 4 rows
    /// (header, 1 precondition, 2 steps), case 2 to 3 rows.
    pub fn login_logout_text() -> &'static str {
        "\
Login test
Preconditions:
App installed
Steps:
Open app
Enter credentials (Dashboard shown)
---
Logout test
Preconditions:
User logged in
Steps:
Click logout (Login screen shown)
"
    }

    pub fn config_yaml() -> &'static str {
        r#"
start: ""
delimiter: "---"
preconditions: "Preconditions:"
steps: "Steps:"
bracket: "("
"#
    }
}

#[test]
fn test_end_to_end_seven_rows_csv() {
    let converter = ConverterBuilder::new()
        .with_output_format(OutputFormat::Csv)
        .build()
        .unwrap();

    let mut output = Vec::new();
    converter
        .convert(Cursor::new(fixtures::login_logout_text()), &mut output)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Header line plus 7 data rows (4 for case 1, 3 for case 2)
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[0],
        "Наименование,Предусловия,Шаги,Ожидаемый результат,Статус"
    );
    assert_eq!(lines[1], "Login test,,,,Готов");
    assert_eq!(lines[2], ",App installed,,,");
    assert_eq!(lines[3], ",,Open app,,");
    assert_eq!(lines[4], ",,Enter credentials,Dashboard shown,");
    assert_eq!(lines[5], "Logout test,,,,Готов");
    assert_eq!(lines[6], ",User logged in,,,");
    assert_eq!(lines[7], ",,Click logout,Login screen shown,");
}

#[test]
fn test_parse_cases_structure() {
    let converter = ConverterBuilder::new().build().unwrap();
    let cases = converter
        .parse_cases(Cursor::new(fixtures::login_logout_text()))
        .unwrap();

    assert_eq!(cases.len(), 2);

    assert_eq!(cases[0].name, "Login test");
    assert_eq!(cases[0].preconditions, vec!["App installed"]);
    assert_eq!(cases[0].steps.len(), 2);
    assert_eq!(cases[0].steps[0].action, "Open app");
    assert_eq!(cases[0].steps[0].expected, None);
    assert_eq!(cases[0].steps[1].action, "Enter credentials");
    assert_eq!(
        cases[0].steps[1].expected,
        Some("Dashboard shown".to_string())
    );

    assert_eq!(cases[1].name, "Logout test");
    assert_eq!(cases[1].preconditions, vec!["User logged in"]);
    assert_eq!(cases[1].steps.len(), 1);
    assert_eq!(
        cases[1].steps[0].expected,
        Some("Login screen shown".to_string())
    );
}

#[test]
fn test_xlsx_round_trip_with_calamine() {
    let converter = ConverterBuilder::new().build().unwrap();
    let buffer = converter
        .convert_to_buffer(Cursor::new(fixtures::login_logout_text()))
        .unwrap();

    let mut sheets = open_workbook_auto_from_rs(Cursor::new(buffer)).unwrap();
    let range = sheets.worksheet_range("Sheet1").unwrap();

    // Header row plus 7 data rows
    assert_eq!(range.height(), 8);

    // Fixed column labels on row 0
    assert_eq!(range.get_value((0, 0)).unwrap().to_string(), "Наименование");
    assert_eq!(range.get_value((0, 1)).unwrap().to_string(), "Предусловия");
    assert_eq!(range.get_value((0, 2)).unwrap().to_string(), "Шаги");
    assert_eq!(
        range.get_value((0, 3)).unwrap().to_string(),
        "Ожидаемый результат"
    );
    assert_eq!(range.get_value((0, 4)).unwrap().to_string(), "Статус");

    // Case header row: name and ready status only
    assert_eq!(range.get_value((1, 0)).unwrap().to_string(), "Login test");
    assert_eq!(range.get_value((1, 4)).unwrap().to_string(), "Готов");

    // Precondition row
    assert_eq!(
        range.get_value((2, 1)).unwrap().to_string(),
        "App installed"
    );

    // Step row with expected result
    assert_eq!(
        range.get_value((4, 2)).unwrap().to_string(),
        "Enter credentials"
    );
    assert_eq!(
        range.get_value((4, 3)).unwrap().to_string(),
        "Dashboard shown"
    );

    // Second case header
    assert_eq!(range.get_value((5, 0)).unwrap().to_string(), "Logout test");
    assert_eq!(range.get_value((5, 4)).unwrap().to_string(), "Готов");
}

#[test]
fn test_json_output() {
    let converter = ConverterBuilder::new()
        .with_output_format(OutputFormat::Json)
        .build()
        .unwrap();

    let buffer = converter
        .convert_to_buffer(Cursor::new(fixtures::login_logout_text()))
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["name"], "Login test");
    assert_eq!(rows[0]["status"], "Готов");
    assert!(rows[0]["precondition"].is_null());
    assert_eq!(rows[1]["precondition"], "App installed");
    assert_eq!(rows[3]["step"], "Enter credentials");
    assert_eq!(rows[3]["expected"], "Dashboard shown");
}

#[test]
fn test_markers_from_yaml_file() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(fixtures::config_yaml().as_bytes())
        .unwrap();

    let markers = MarkerConfig::from_yaml_file(config_file.path()).unwrap();
    assert_eq!(markers, MarkerConfig::default());

    let converter = ConverterBuilder::new()
        .with_markers(markers)
        .with_output_format(OutputFormat::Csv)
        .build()
        .unwrap();

    let mut output = Vec::new();
    converter
        .convert(Cursor::new(fixtures::login_logout_text()), &mut output)
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 8);
}

#[test]
fn test_missing_config_key_surfaces_before_parsing() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    config_file
        .write_all(b"delimiter: \"---\"\npreconditions: \"Preconditions:\"\nbracket: \"(\"\n")
        .unwrap();

    let result = MarkerConfig::from_yaml_file(config_file.path());
    match result {
        Err(TxtToXlsxError::MissingKey(key)) => assert_eq!(key, "steps"),
        _ => panic!("Expected MissingKey error"),
    }
}

#[test]
fn test_start_marker_skips_preamble() {
    let markers = MarkerConfig {
        start: "=== CASES ===".to_string(),
        ..MarkerConfig::default()
    };
    let converter = ConverterBuilder::new().with_markers(markers).build().unwrap();

    let text = format!(
        "Export generated 2024-01-01\nTool version 3\n=== CASES ===\n{}",
        fixtures::login_logout_text()
    );
    let cases = converter.parse_cases(Cursor::new(text)).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].name, "Login test");
}

#[test]
fn test_start_marker_not_found_aborts_without_output() {
    let markers = MarkerConfig {
        start: "=== CASES ===".to_string(),
        ..MarkerConfig::default()
    };
    let converter = ConverterBuilder::new()
        .with_markers(markers)
        .with_output_format(OutputFormat::Csv)
        .build()
        .unwrap();

    let mut output = Vec::new();
    let result = converter.convert(
        Cursor::new(fixtures::login_logout_text()),
        &mut output,
    );

    assert!(matches!(
        result,
        Err(TxtToXlsxError::StartMarkerNotFound(_))
    ));
    // No partial output is written for the failed file
    assert!(output.is_empty());
}

#[test]
fn test_custom_markers_end_to_end() {
    let markers = MarkerConfig {
        start: String::new(),
        delimiter: "=====".to_string(),
        preconditions: "Given:".to_string(),
        steps: "When:".to_string(),
        bracket: "->".to_string(),
    };
    let converter = ConverterBuilder::new()
        .with_markers(markers)
        .build()
        .unwrap();

    let text = "\
Search test
Given:
Index built
When:
Type query -> Results shown]
=====
Empty search
When:
Submit empty query
";
    let cases = converter.parse_cases(Cursor::new(text)).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].preconditions, vec!["Index built"]);
    assert_eq!(cases[0].steps[0].action, "Type query");
    // The closing terminator character after the split is stripped
    assert_eq!(cases[0].steps[0].expected, Some("Results shown".to_string()));
    assert_eq!(cases[1].steps[0].expected, None);
}

#[test]
fn test_custom_labels_in_workbook() {
    let labels = ColumnLabels {
        name: "Name".to_string(),
        preconditions: "Preconditions".to_string(),
        steps: "Steps".to_string(),
        expected: "Expected result".to_string(),
        status: "Status".to_string(),
        ready: "Ready".to_string(),
    };
    let converter = ConverterBuilder::new().with_labels(labels).build().unwrap();

    let buffer = converter
        .convert_to_buffer(Cursor::new("Smoke test\n"))
        .unwrap();

    let mut sheets = open_workbook_auto_from_rs(Cursor::new(buffer)).unwrap();
    let range = sheets.worksheet_range("Sheet1").unwrap();
    assert_eq!(range.get_value((0, 0)).unwrap().to_string(), "Name");
    assert_eq!(range.get_value((1, 0)).unwrap().to_string(), "Smoke test");
    assert_eq!(range.get_value((1, 4)).unwrap().to_string(), "Ready");
}

#[test]
fn test_parsing_is_idempotent() {
    let converter = ConverterBuilder::new().build().unwrap();
    let first = converter
        .parse_cases(Cursor::new(fixtures::login_logout_text()))
        .unwrap();
    let second = converter
        .parse_cases(Cursor::new(fixtures::login_logout_text()))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_row_count_matches_case_structure() {
    let converter = ConverterBuilder::new().build().unwrap();
    let cases = converter
        .parse_cases(Cursor::new(fixtures::login_logout_text()))
        .unwrap();
    let rows = converter.flatten_cases(&cases);

    let expected: usize = cases.iter().map(|c| c.row_count()).sum();
    assert_eq!(rows.len(), expected);
    assert_eq!(rows.len(), 7);
}
