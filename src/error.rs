//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// casesheetクレート全体で使用するエラー型
///
/// テキストファイルの読み込み、解析、ワークブック出力中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Yaml`: マーカー設定ファイル（YAML）の解析エラー
/// - `MissingKey`: 必須の設定キーが存在しないエラー
/// - `Config`: 設定の検証に失敗したエラー（空のマーカー文字列など）
/// - `StartMarkerNotFound`: 設定された開始マーカーが入力に存在しないエラー
/// - `Workbook`: rust_xlsxwriterによるワークブック生成エラー
///
/// # 使用例
///
/// ```rust,no_run
/// use casesheet::TxtToXlsxError;
/// use std::fs::File;
///
/// fn read_case_file(path: &str) -> Result<(), TxtToXlsxError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum TxtToXlsxError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// マーカー設定ファイル（YAML）の解析エラー
    #[error("Failed to parse configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON出力のシリアライズエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// ワークブック生成エラー
    ///
    /// rust_xlsxwriterがXLSXワークブックを書き出す際に発生したエラーです。
    #[error("Failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// 必須の設定キーが存在しないエラー
    ///
    /// マーカー設定ファイルに`delimiter`、`preconditions`、`steps`、
    /// `bracket`のいずれかが欠けている場合、解析開始前に発生します。
    #[error("Missing configuration key: '{0}'")]
    MissingKey(String),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、区切りマーカーが空文字列の場合などです。
    #[error("Configuration error: {0}")]
    Config(String),

    /// 設定された開始マーカーが入力に存在しないエラー
    ///
    /// 開始マーカーが空でない文字列に設定されているにもかかわらず、
    /// 入力のどの行とも一致しない場合に発生します。該当ファイルの処理は
    /// 中断され、部分的な出力は生成されません。
    #[error("Start marker not found in input: '{0}'")]
    StartMarkerNotFound(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズ制限などのセキュリティ制限に違反した場合に
    /// 発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
