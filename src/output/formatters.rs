//! Output Formatters
//!
//! 各出力フォーマット（XLSX, CSV, JSON）の実装を提供するモジュール。

use std::io::Write;

use rust_xlsxwriter::Workbook;

use crate::api::ColumnLabels;
use crate::error::TxtToXlsxError;
use crate::types::Row;

/// XLSXフォーマッター
///
/// rust_xlsxwriterでワークブックを生成します。1枚のワークシートに、
/// 1行目の列見出しと、以降1レコードずつのフラット行を書き込みます。
/// 設定されているセルのみが書き込まれます。
pub(crate) struct XlsxFormatter;

impl XlsxFormatter {
    pub fn render<W: Write>(
        &self,
        rows: &[Row],
        labels: &ColumnLabels,
        writer: &mut W,
    ) -> Result<(), TxtToXlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in labels.headers().iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let row_num = (idx + 1) as u32;
            if let Some(name) = &row.name {
                worksheet.write_string(row_num, 0, name)?;
            }
            if let Some(precondition) = &row.precondition {
                worksheet.write_string(row_num, 1, precondition)?;
            }
            if let Some(step) = &row.step {
                worksheet.write_string(row_num, 2, step)?;
            }
            if let Some(expected) = &row.expected {
                worksheet.write_string(row_num, 3, expected)?;
            }
            if let Some(status) = &row.status {
                worksheet.write_string(row_num, 4, status)?;
            }
        }

        let buffer = workbook.save_to_buffer()?;
        writer.write_all(&buffer)?;
        Ok(())
    }
}

/// CSVフォーマッター
pub(crate) struct CsvFormatter;

impl CsvFormatter {
    pub fn render<W: Write>(
        &self,
        rows: &[Row],
        labels: &ColumnLabels,
        writer: &mut W,
    ) -> Result<(), TxtToXlsxError> {
        let header = labels
            .headers()
            .iter()
            .map(|h| escape_csv(h))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{}", header)?;

        for row in rows {
            let fields = [
                row.name.as_deref().unwrap_or(""),
                row.precondition.as_deref().unwrap_or(""),
                row.step.as_deref().unwrap_or(""),
                row.expected.as_deref().unwrap_or(""),
                row.status.as_deref().unwrap_or(""),
            ];
            let line = fields
                .iter()
                .map(|f| escape_csv(f))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(writer, "{}", line)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// JSONフォーマッター
///
/// フラット行の配列をそのままシリアライズします。
pub(crate) struct JsonFormatter;

impl JsonFormatter {
    pub fn render<W: Write>(
        &self,
        rows: &[Row],
        _labels: &ColumnLabels,
        writer: &mut W,
    ) -> Result<(), TxtToXlsxError> {
        serde_json::to_writer_pretty(&mut *writer, rows)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// CSV文字列をエスケープ
///
/// ダブルクォート、改行、カンマを含む場合はダブルクォートで囲み、
/// 内部のダブルクォートは2つにエスケープします。
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
