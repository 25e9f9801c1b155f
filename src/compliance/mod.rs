//! コンプライアンス照合モジュール
//!
//! コンパイル済みパターンを発注コード全体に適用し、州仕様の各行が
//! 満たされているかを判定する。純粋関数のみで、状態は持たない。

mod types;

pub use types::{MatchResult, MatchStatus, SpecRow};

use crate::pattern;

/// いずれかの発注コードがパターンに一致するか
///
/// パターンがコンパイルできない場合は false（不足扱い）。
/// エラーはバッチ全体に伝播させない。
pub fn is_satisfied(pattern: &str, ordered_codes: &[String]) -> bool {
    match pattern::compile(pattern) {
        Ok(matcher) => ordered_codes.iter().any(|code| matcher.is_match(code)),
        Err(_) => false,
    }
}

/// 州仕様の全行を照合してレポート行を生成する
///
/// - 入力順を維持する（レポートの再現性のため）
/// - 適用外の行（オプション列か車両タイプ列が空）は除外する
/// - 1行のコンパイル失敗はその行の判定にだけ影響する
pub fn evaluate(rows: &[SpecRow], ordered_codes: &[String]) -> Vec<MatchResult> {
    let mut results = Vec::new();

    for row in rows {
        if !row.is_applicable() {
            continue;
        }
        let Some(pattern) = row.pattern.as_deref() else {
            continue;
        };

        let status = if is_satisfied(pattern, ordered_codes) {
            MatchStatus::Matched
        } else {
            MatchStatus::Missing
        };

        results.push(MatchResult {
            pattern: pattern.to_string(),
            status,
            feature: row.feature.clone(),
            description: row.description.clone(),
        });
    }

    results
}
