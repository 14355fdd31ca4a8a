//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use std::io::{BufWriter, Read, Write};

use crate::api::{ColumnLabels, OutputFormat};
use crate::config::MarkerConfig;
use crate::error::TxtToXlsxError;
use crate::flatten;
use crate::output::OutputFormatter;
use crate::parser;
use crate::security::SecurityConfig;
use crate::types::{Row, TestCase};

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone, Default)]
pub(crate) struct ConversionConfig {
    /// マーカー設定
    pub markers: MarkerConfig,

    /// 列見出しと固定ステータス値
    pub labels: ColumnLabels,

    /// 出力フォーマット
    pub output_format: OutputFormat,
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use casesheet::{ConverterBuilder, MarkerConfig, OutputFormat};
///
/// # fn main() -> Result<(), casesheet::TxtToXlsxError> {
/// let converter = ConverterBuilder::new()
///     .with_markers(MarkerConfig::default())
///     .with_output_format(OutputFormat::Csv)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - マーカー: `MarkerConfig::default()`（`---` / `Preconditions:` /
    ///   `Steps:` / `(`、開始マーカーなし）
    /// - 列見出し: `ColumnLabels::default()`
    /// - 出力フォーマット: XLSX
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// マーカー設定を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use casesheet::{ConverterBuilder, MarkerConfig};
    ///
    /// # fn main() -> Result<(), casesheet::TxtToXlsxError> {
    /// let markers = MarkerConfig::from_yaml_file("Settings/config.yml")?;
    /// let builder = ConverterBuilder::new().with_markers(markers);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_markers(mut self, markers: MarkerConfig) -> Self {
        self.config.markers = markers;
        self
    }

    /// 列見出しと固定ステータス値を指定する
    pub fn with_labels(mut self, labels: ColumnLabels) -> Self {
        self.config.labels = labels;
        self
    }

    /// 出力フォーマットを指定する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use casesheet::{ConverterBuilder, OutputFormat};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)`: 設定が有効な場合、Converterインスタンス
    /// * `Err(TxtToXlsxError::Config)`: 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `TxtToXlsxError::Config(String)`: 区切りマーカー、セクション
    ///   マーカー、ブラケットマーカーのいずれかが空文字列の場合。
    ///   開始マーカーのみ空を許容します（前書きスキップなし）。
    pub fn build(self) -> Result<Converter, TxtToXlsxError> {
        let markers = &self.config.markers;
        for (value, key) in [
            (&markers.delimiter, "delimiter"),
            (&markers.preconditions, "preconditions"),
            (&markers.steps, "steps"),
            (&markers.bracket, "bracket"),
        ] {
            if value.is_empty() {
                return Err(TxtToXlsxError::Config(format!(
                    "Marker '{}' must not be empty",
                    key
                )));
            }
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// テストケース記述テキストをスプレッドシートワークブックに変換する
/// ためのメインエントリーポイントです。`ConverterBuilder`を使用して
/// 構築された設定に基づいて変換処理を実行します。
///
/// # 処理フロー
///
/// 1. 入力をメモリへ読み込み（サイズ制限の検査）
/// 2. 行パーサーによるケース列の構築
/// 3. フラット行への展開
/// 4. 出力フォーマッターによる書き出し
///
/// # 使用例
///
/// ```rust
/// use casesheet::ConverterBuilder;
/// use std::io::Cursor;
///
/// # fn main() -> Result<(), casesheet::TxtToXlsxError> {
/// let converter = ConverterBuilder::new().build()?;
/// let input = "Login test\nSteps:\nOpen app\n";
/// let mut output = Vec::new();
/// converter.convert(Cursor::new(input), &mut output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,

    /// セキュリティ設定
    security: SecurityConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            security: SecurityConfig::default(),
        }
    }

    /// テストケース記述テキストをワークブックに変換
    ///
    /// # 引数
    ///
    /// * `input` - テキストを読み込むためのリーダー（Readトレイトを実装）
    /// * `output` - ワークブック出力先のライター（Writeトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 変換に成功した場合
    /// * `Err(TxtToXlsxError)` - エラーが発生した場合。開始マーカーが
    ///   見つからない場合など、エラー時に部分的な出力は書き込まれません。
    pub fn convert<R: Read, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<(), TxtToXlsxError> {
        let text = self.read_input(input)?;

        let cases = parser::parse_text(&text, &self.config.markers)?;
        let rows = flatten::flatten(&cases, &self.config.labels);

        let formatter = OutputFormatter::from_format(self.config.output_format);
        let mut writer = BufWriter::new(&mut output);
        formatter.render(&rows, &self.config.labels, &mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// テストケース記述テキストをバイト列に変換
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use casesheet::ConverterBuilder;
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), casesheet::TxtToXlsxError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let buffer = converter.convert_to_buffer(Cursor::new("Login test\n"))?;
    /// assert!(!buffer.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_buffer<R: Read>(&self, input: R) -> Result<Vec<u8>, TxtToXlsxError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;
        Ok(buffer)
    }

    /// 入力を解析し、構造化されたケース列のみを返す
    ///
    /// フラット化と出力をスキップし、パーサーの結果を直接取得したい
    /// 呼び出し側のためのAPIです。
    pub fn parse_cases<R: Read>(&self, input: R) -> Result<Vec<TestCase>, TxtToXlsxError> {
        let text = self.read_input(input)?;
        parser::parse_text(&text, &self.config.markers)
    }

    /// 確定済みのケース列をフラット行に展開する
    ///
    /// 純粋で決定的、順序保存の変換です。失敗モードはありません。
    pub fn flatten_cases(&self, cases: &[TestCase]) -> Vec<Row> {
        flatten::flatten(cases, &self.config.labels)
    }

    /// 入力をメモリへ読み込み、サイズ制限を検査する
    fn read_input<R: Read>(&self, mut input: R) -> Result<String, TxtToXlsxError> {
        let mut text = String::new();
        let bytes_read = input.read_to_string(&mut text)?;

        if bytes_read as u64 > self.security.max_input_file_size {
            return Err(TxtToXlsxError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.security.max_input_file_size
            )));
        }

        Ok(text)
    }
}
