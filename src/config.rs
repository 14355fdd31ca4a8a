//! Marker Configuration Module
//!
//! 入力テキストの制御文字列（マーカー）設定を定義するモジュール。
//! 設定はYAMLファイルから読み込むか、コード上で直接構築できます。

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TxtToXlsxError;

/// 入力テキストの解析を制御する5つのマーカー文字列
///
/// # フィールド
///
/// - `start`: 省略可能な開始マーカー行。空でない場合、この行までの
///   すべての行（この行を含む）は解析前に破棄されます。空文字列は
///   「前書きをスキップしない」ことを意味します。
/// - `delimiter`: 連続するケースの境界を示す行。
/// - `preconditions`: 前提条件サブセクションの開始を示す行。
/// - `steps`: ステップサブセクションの開始を示す行。
/// - `bracket`: ステップ行を「ステップテキスト」と「期待結果テキスト」に
///   分割する部分文字列。
///
/// # YAMLからの読み込み
///
/// ```yaml
/// start: ""
/// delimiter: "---"
/// preconditions: "Preconditions:"
/// steps: "Steps:"
/// bracket: "("
/// ```
///
/// `start`は省略可能（空文字列にフォールバック）ですが、その他のキーが
/// 欠けている場合は`TxtToXlsxError::MissingKey`が返されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerConfig {
    /// 開始マーカー行（空 = 前書きスキップなし）
    pub start: String,

    /// ケース区切りマーカー行
    pub delimiter: String,

    /// 前提条件セクションマーカー行
    pub preconditions: String,

    /// ステップセクションマーカー行
    pub steps: String,

    /// ステップ分割マーカー
    pub bracket: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            start: String::new(),
            delimiter: "---".to_string(),
            preconditions: "Preconditions:".to_string(),
            steps: "Steps:".to_string(),
            bracket: "(".to_string(),
        }
    }
}

/// YAMLデシリアライズ用の中間表現
///
/// すべてのキーをOptionとして受け取り、必須キーの欠落を
/// `MissingKey`として報告できるようにします。
#[derive(Debug, Deserialize)]
struct RawMarkerConfig {
    start: Option<String>,
    delimiter: Option<String>,
    preconditions: Option<String>,
    steps: Option<String>,
    bracket: Option<String>,
}

impl MarkerConfig {
    /// YAML文字列からマーカー設定を読み込む
    ///
    /// # 発生し得るエラー
    ///
    /// * `TxtToXlsxError::Yaml`: YAMLの構文が不正な場合
    /// * `TxtToXlsxError::MissingKey`: 必須キー（`delimiter`、
    ///   `preconditions`、`steps`、`bracket`）が欠けている場合
    pub fn from_yaml_str(text: &str) -> Result<Self, TxtToXlsxError> {
        let raw: RawMarkerConfig = serde_yaml::from_str(text)?;

        Ok(Self {
            start: raw.start.unwrap_or_default(),
            delimiter: required(raw.delimiter, "delimiter")?,
            preconditions: required(raw.preconditions, "preconditions")?,
            steps: required(raw.steps, "steps")?,
            bracket: required(raw.bracket, "bracket")?,
        })
    }

    /// YAMLファイルからマーカー設定を読み込む
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use casesheet::MarkerConfig;
    ///
    /// # fn main() -> Result<(), casesheet::TxtToXlsxError> {
    /// let markers = MarkerConfig::from_yaml_file("Settings/config.yml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, TxtToXlsxError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

fn required(value: Option<String>, key: &str) -> Result<String, TxtToXlsxError> {
    value.ok_or_else(|| TxtToXlsxError::MissingKey(key.to_string()))
}
