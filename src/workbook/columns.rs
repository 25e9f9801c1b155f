//! 列の特定（スキーマ交渉）
//!
//! ヘッダー行からオプション列を見つけ、車両タイプ列の候補を
//! ヒューリスティックで絞り込む。UIには依存しない純粋関数。

use super::SpecSheet;
use crate::config::Config;
use crate::error::{Result, SpecCheckError};

/// 特定された列配置
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    /// オプションコード列
    pub option_col: usize,
    /// 車両タイプ列の候補
    pub vehicle_candidates: Vec<usize>,
}

/// オプション列と車両タイプ候補列を特定する
///
/// - オプション列: ヘッダーに `option` を含む最初の列（大文字小文字無視）。
///   無ければ `MissingOptionColumn`（このシート選択では続行不可）。
/// - 車両タイプ候補: 非空セルが閾値以上あり、ヘッダーが除外キーワード
///   （feature, source など）を含まない列。
pub fn locate_columns(sheet: &SpecSheet, config: &Config) -> Result<ColumnLayout> {
    let option_col = sheet
        .headers
        .iter()
        .position(|h| h.to_lowercase().contains("option"))
        .ok_or(SpecCheckError::MissingOptionColumn)?;

    let vehicle_candidates = (0..sheet.headers.len())
        .filter(|&c| sheet.non_empty_count(c) >= config.min_column_entries)
        .filter(|&c| {
            let header = sheet.headers[c].to_lowercase();
            !config
                .excluded_header_keywords
                .iter()
                .any(|keyword| header.contains(keyword))
        })
        .collect();

    Ok(ColumnLayout {
        option_col,
        vehicle_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_with_counts(headers: &[&str], counts: &[usize]) -> SpecSheet {
        // counts[c] 行目まで値を入れた本体を合成する
        let height = counts.iter().copied().max().unwrap_or(0);
        let rows = (0..height)
            .map(|r| {
                counts
                    .iter()
                    .map(|&n| (r < n).then(|| "v".to_string()))
                    .collect()
            })
            .collect();
        SpecSheet {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn test_option_column_substring_case_insensitive() {
        let sheet = sheet_with_counts(&["Feature", "OPTION CODES", "Type A"], &[5, 5, 5]);
        let layout = locate_columns(&sheet, &Config::default()).unwrap();
        assert_eq!(layout.option_col, 1);
    }

    #[test]
    fn test_missing_option_column() {
        let sheet = sheet_with_counts(&["Feature", "Type A"], &[5, 5]);
        let result = locate_columns(&sheet, &Config::default());
        assert!(matches!(result, Err(SpecCheckError::MissingOptionColumn)));
    }

    #[test]
    fn test_vehicle_candidates_threshold() {
        // Type B は非空セルが2つしかないので候補から外れる
        let sheet = sheet_with_counts(&["Option", "Type A", "Type B"], &[5, 4, 2]);
        let layout = locate_columns(&sheet, &Config::default()).unwrap();
        assert!(layout.vehicle_candidates.contains(&1));
        assert!(!layout.vehicle_candidates.contains(&2));
    }

    #[test]
    fn test_vehicle_candidates_keyword_exclusion() {
        let sheet = sheet_with_counts(
            &["Option", "Feature", "Source", "Rev Date", "MFSAB"],
            &[9, 9, 9, 9, 9],
        );
        let layout = locate_columns(&sheet, &Config::default()).unwrap();
        assert!(!layout.vehicle_candidates.contains(&1));
        assert!(!layout.vehicle_candidates.contains(&2));
        assert!(!layout.vehicle_candidates.contains(&3));
        assert!(layout.vehicle_candidates.contains(&4));
    }
}
