//! Flatten Module
//!
//! 入れ子のケース構造からフラットな表形式への展開を提供するモジュール。
//! 純粋で決定的、順序保存の構造変換です。

use crate::api::ColumnLabels;
use crate::types::{Row, TestCase};

/// 確定済みのケース列をフラット行の列に展開する
///
/// 各ケースは `1 + |前提条件| + |ステップ|` 行に展開されます。
/// 順序はケース順で、各ケース内ではヘッダー行、前提条件行、
/// ステップ行の順です。前提条件やステップが0個のケースは、その
/// サブセクションに対して0行を寄与します。
///
/// 失敗モードはありません。整形式のケース列はすべて展開可能です。
pub(crate) fn flatten(cases: &[TestCase], labels: &ColumnLabels) -> Vec<Row> {
    cases
        .iter()
        .flat_map(|case| {
            std::iter::once(Row::header(&case.name, &labels.ready))
                .chain(case.preconditions.iter().map(Row::precondition))
                .chain(case.steps.iter().map(Row::step))
        })
        .collect()
}
