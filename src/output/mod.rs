//! Output Format Module
//!
//! Strategy Patternによる出力フォーマットの抽象化を提供するモジュール。

mod formatters;

use std::io::Write;

use crate::api::{ColumnLabels, OutputFormat};
use crate::error::TxtToXlsxError;
use crate::types::Row;

pub(crate) use formatters::*;

/// 出力フォーマッター（Strategy Pattern）
///
/// 各出力フォーマット（XLSX, CSV, JSON）をenumとして表現します。
#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormatter {
    Xlsx,
    Csv,
    Json,
}

impl OutputFormatter {
    /// 出力フォーマットからフォーマッターを生成
    pub fn from_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xlsx => OutputFormatter::Xlsx,
            OutputFormat::Csv => OutputFormatter::Csv,
            OutputFormat::Json => OutputFormatter::Json,
        }
    }

    /// フラット行の列を指定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `rows` - 出力するフラット行（順序保存）
    /// * `labels` - 列見出し（ヘッダー行の出力に使用）
    /// * `writer` - 出力先のライター
    pub fn render<W: Write>(
        &self,
        rows: &[Row],
        labels: &ColumnLabels,
        writer: &mut W,
    ) -> Result<(), TxtToXlsxError> {
        match self {
            OutputFormatter::Xlsx => XlsxFormatter.render(rows, labels, writer),
            OutputFormatter::Csv => CsvFormatter.render(rows, labels, writer),
            OutputFormatter::Json => JsonFormatter.render(rows, labels, writer),
        }
    }
}
