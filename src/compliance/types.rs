use std::fmt;

/// 州仕様の1要求行
///
/// `pattern` はオプション列のセル、`vehicle_flag` は選択された
/// 車両タイプ列のセル。どちらも空セルは `None`。
#[derive(Debug, Clone)]
pub struct SpecRow {
    pub pattern: Option<String>,
    pub vehicle_flag: Option<String>,
    pub feature: String,
    pub description: String,
}

impl SpecRow {
    /// 選択車両タイプにこの行の要求が適用されるか
    ///
    /// オプション列と車両タイプ列の両方が非空の行だけがレポート対象。
    pub fn is_applicable(&self) -> bool {
        self.pattern.is_some() && self.vehicle_flag.is_some()
    }
}

/// 照合ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Matched,
    Missing,
}

impl MatchStatus {
    /// レポート表記（CSV/Excelにそのまま出力）
    pub fn as_report_str(&self) -> &'static str {
        match self {
            MatchStatus::Matched => "✅ Matched",
            MatchStatus::Missing => "❌ Missing",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_report_str())
    }
}

/// 照合結果（適用行1件につき1件）
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub pattern: String,
    pub status: MatchStatus,
    pub feature: String,
    pub description: String,
}

impl MatchResult {
    pub fn matched(&self) -> bool {
        self.status == MatchStatus::Matched
    }
}
