//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use serde::Serialize;

/// テストステップ（操作と期待結果のペア）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestStep {
    /// 操作の説明
    pub action: String,

    /// 期待結果（ブラケットマーカーを含まない行ではNone）
    pub expected: Option<String>,
}

impl TestStep {
    /// 期待結果付きのステップを生成
    pub fn with_expected(action: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            expected: Some(expected.into()),
        }
    }

    /// 期待結果なしのステップを生成
    pub fn plain(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            expected: None,
        }
    }
}

/// 1つの論理的なテストケース
///
/// 名前、前提条件のリスト、ステップのリストから構成されます。
/// パーサーによって逐次構築され、区切りマーカーまたは入力終端で
/// 確定されます。
///
/// 不変条件: ケースは常にちょうど1つの名前（空文字列の場合あり）、
/// 0個以上の前提条件、0個以上のステップを持ちます。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TestCase {
    /// ケース名（NAMEセクションの最後の行。空の場合あり）
    pub name: String,

    /// 前提条件（入力順）
    pub preconditions: Vec<String>,

    /// ステップ（入力順）
    pub steps: Vec<TestStep>,
}

impl TestCase {
    /// 空のケースを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// このケースが展開されるフラット行の数
    ///
    /// ヘッダー行1つ + 前提条件行 + ステップ行。
    pub fn row_count(&self) -> usize {
        1 + self.preconditions.len() + self.steps.len()
    }
}

/// フラット化された出力レコード
///
/// 5つの名前付きフィールドのうち、ちょうど1つの内容フィールドのみが
/// 設定されます。例外はケースヘッダー行で、`name`に加えて`status`にも
/// 固定値が設定されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// ケース名（ヘッダー行のみ）
    pub name: Option<String>,

    /// 前提条件テキスト（前提条件行のみ）
    pub precondition: Option<String>,

    /// ステップテキスト（ステップ行のみ）
    pub step: Option<String>,

    /// 期待結果（ステップ行のみ、存在する場合）
    pub expected: Option<String>,

    /// 固定ステータス値（ヘッダー行のみ）
    pub status: Option<String>,
}

impl Row {
    /// ケースヘッダー行を生成
    pub fn header(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            precondition: None,
            step: None,
            expected: None,
            status: Some(status.into()),
        }
    }

    /// 前提条件行を生成
    pub fn precondition(text: impl Into<String>) -> Self {
        Self {
            name: None,
            precondition: Some(text.into()),
            step: None,
            expected: None,
            status: None,
        }
    }

    /// ステップ行を生成
    pub fn step(step: &TestStep) -> Self {
        Self {
            name: None,
            precondition: None,
            step: Some(step.action.clone()),
            expected: step.expected.clone(),
            status: None,
        }
    }
}
