//! Section Module
//!
//! ケース内の現在の解析コンテキストを表すセクション定義を提供します。

use crate::config::MarkerConfig;

/// ケース内の解析セクション
///
/// ケース区切り直後の初期セクションは`Name`です。セクションマーカー行に
/// よって`Preconditions`または`Steps`へ遷移し、区切りマーカーで`Name`へ
/// 戻ります。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Section {
    /// ケース名
    #[default]
    Name,
    /// 前提条件
    Preconditions,
    /// ステップ
    Steps,
}

impl Section {
    /// 行がセクションマーカーに一致する場合、対応するセクションを返す
    ///
    /// 区切りマーカーはセクションではなくケース境界なので、ここでは
    /// 扱いません。
    pub fn from_marker_line(line: &str, markers: &MarkerConfig) -> Option<Self> {
        if line == markers.preconditions {
            Some(Section::Preconditions)
        } else if line == markers.steps {
            Some(Section::Steps)
        } else {
            None
        }
    }
}
