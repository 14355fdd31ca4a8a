//! Line Parser Module
//!
//! 区切りテキスト形式のテストケース記述を解析し、順序付きの
//! `TestCase`列を生成するモジュール。マーカー行の認識とセクション
//! 追跡の状態機械を実装します。

mod section;

use crate::config::MarkerConfig;
use crate::error::TxtToXlsxError;
use crate::types::{TestCase, TestStep};

pub(crate) use section::Section;

/// テキスト全体を解析し、順序付きのテストケース列を生成する
///
/// # 前処理
///
/// 各行の末尾の改行文字を取り除き、その結果空になった行を捨てます。
/// `markers.start`が空でない場合、それと完全一致する最初の行までの
/// すべての行（マーカー行自身を含む）を破棄します。
///
/// # 状態機械
///
/// 残りの各行は優先順に解釈されます:
///
/// 1. 区切りマーカー行 → 現在のケースを確定し、アキュムレータと
///    セクションをリセット
/// 2. セクションマーカー行 → セクションを遷移（マーカー行自体は
///    保存されない）
/// 3. それ以外 → 現在のセクションに応じて内容として取り込む
///
/// マーカー行は常に内容の解釈より優先されます。マーカーのエスケープは
/// できません。
///
/// 最終行の処理後、アキュムレータは無条件に確定されます。末尾の区切り
/// マーカーは不要です。前処理後に行が1つもない入力は、空の名前を持つ
/// ケース1つを生成します。
///
/// # 発生し得るエラー
///
/// * `TxtToXlsxError::StartMarkerNotFound`: 開始マーカーが設定されて
///   いるが、どの行とも一致しない場合
pub(crate) fn parse_text(
    text: &str,
    markers: &MarkerConfig,
) -> Result<Vec<TestCase>, TxtToXlsxError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();

    let lines = skip_preamble(&lines, markers)?;

    let mut section = Section::default();
    let mut current = TestCase::new();
    let mut cases = Vec::new();

    for line in lines {
        if *line == markers.delimiter {
            cases.push(std::mem::take(&mut current));
            section = Section::default();
            continue;
        }
        if let Some(next) = Section::from_marker_line(line, markers) {
            section = next;
            continue;
        }
        match section {
            // NAMEセクションの最後の行だけが有効
            Section::Name => current.name = line.trim().to_string(),
            Section::Preconditions => current.preconditions.push(line.trim().to_string()),
            Section::Steps => current.steps.push(split_step(line, &markers.bracket)),
        }
    }

    // 末尾の区切りマーカーがなくても最後のケースは確定される
    cases.push(current);

    Ok(cases)
}

/// 開始マーカーまでの前書きを読み飛ばす
fn skip_preamble<'a, 'b>(
    lines: &'a [&'b str],
    markers: &MarkerConfig,
) -> Result<&'a [&'b str], TxtToXlsxError> {
    if markers.start.is_empty() {
        return Ok(lines);
    }

    let start_idx = lines
        .iter()
        .position(|line| *line == markers.start)
        .ok_or_else(|| TxtToXlsxError::StartMarkerNotFound(markers.start.clone()))?;

    Ok(&lines[start_idx + 1..])
}

/// ステップ行をステップテキストと期待結果に分割する
///
/// ブラケットマーカーの最初の出現位置で分割し、両側をトリムします。
/// 期待結果側は閉じ終端文字1文字を追加で取り除いた後、再度トリム
/// されます。終端文字を欠く不正な入力は末尾の1文字を失います（元の
/// 形式との互換動作）。
fn split_step(line: &str, bracket: &str) -> TestStep {
    match line.split_once(bracket) {
        Some((action, rest)) => {
            let mut expected = rest.trim().to_string();
            expected.pop();
            TestStep {
                action: action.trim().to_string(),
                expected: Some(expected.trim().to_string()),
            }
        }
        None => TestStep::plain(line.trim()),
    }
}
