//! Public API Types
//!
//! 公開APIで使用する設定型を定義するモジュール。

/// 出力フォーマット
///
/// テストケースのフラット行を出力する際の形式を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// XLSX形式（デフォルト）
    ///
    /// rust_xlsxwriterを使用してExcelワークブックを生成します。
    /// 1行目に固定の列見出し、2行目以降に1レコードずつ出力されます。
    #[default]
    Xlsx,

    /// CSV形式
    ///
    /// CSV（Comma-Separated Values）形式で出力します。
    /// カンマ、改行、ダブルクォートを含むセルはエスケープされます。
    ///
    /// # 出力例
    ///
    /// ```csv
    /// Наименование,Предусловия,Шаги,Ожидаемый результат,Статус
    /// Login test,,,,Готов
    /// ```
    Csv,

    /// JSON形式
    ///
    /// フラット行の配列をJSONとして出力します。
    ///
    /// # 出力例
    ///
    /// ```json
    /// [
    ///   {"name": "Login test", "precondition": null, "step": null,
    ///    "expected": null, "status": "Готов"}
    /// ]
    /// ```
    Json,
}

impl OutputFormat {
    /// 出力ファイルの拡張子を取得（例: `Xlsx` -> `"xlsx"`）
    ///
    /// バッチ変換時に入力ファイルの拡張子を置き換えるために使用されます。
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// 出力列の見出しと固定ステータス値
///
/// ワークブックの5つの固定列見出しと、ケースヘッダー行に設定される
/// ステータス値を保持します。見出しは表示用の定数であり、解析ロジック
/// には影響しません。
///
/// # デフォルト値
///
/// | フィールド | 値 |
/// |-----------|-----|
/// | `name` | `Наименование` |
/// | `preconditions` | `Предусловия` |
/// | `steps` | `Шаги` |
/// | `expected` | `Ожидаемый результат` |
/// | `status` | `Статус` |
/// | `ready` | `Готов` |
///
/// # 使用例
///
/// ```rust
/// use casesheet::ColumnLabels;
///
/// let labels = ColumnLabels {
///     name: "Name".to_string(),
///     preconditions: "Preconditions".to_string(),
///     steps: "Steps".to_string(),
///     expected: "Expected result".to_string(),
///     status: "Status".to_string(),
///     ready: "Ready".to_string(),
/// };
/// assert_eq!(labels.headers()[0], "Name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    /// ケース名列の見出し
    pub name: String,

    /// 前提条件列の見出し
    pub preconditions: String,

    /// ステップ列の見出し
    pub steps: String,

    /// 期待結果列の見出し
    pub expected: String,

    /// ステータス列の見出し
    pub status: String,

    /// ケースヘッダー行に設定される固定ステータス値
    pub ready: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            name: "Наименование".to_string(),
            preconditions: "Предусловия".to_string(),
            steps: "Шаги".to_string(),
            expected: "Ожидаемый результат".to_string(),
            status: "Статус".to_string(),
            ready: "Готов".to_string(),
        }
    }
}

impl ColumnLabels {
    /// 5つの列見出しを出力順に取得
    pub fn headers(&self) -> [&str; 5] {
        [
            &self.name,
            &self.preconditions,
            &self.steps,
            &self.expected,
            &self.status,
        ]
    }
}
