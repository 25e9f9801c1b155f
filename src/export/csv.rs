//! CSV出力
//!
//! レポートを Pattern / Match Status / Feature / Description の
//! 4列で出力する。カンマ・引用符・改行を含むフィールドは
//! ダブルクォートで囲む。

use crate::compliance::MatchResult;
use crate::error::Result;
use std::path::Path;

const HEADERS: [&str; 4] = ["Pattern", "Match Status", "Feature", "Description"];

/// レポートをCSV文字列に変換する
pub fn render_csv(results: &[MatchResult]) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for result in results {
        let fields = [
            result.pattern.as_str(),
            result.status.as_report_str(),
            result.feature.as_str(),
            result.description.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

/// レポートをCSVファイルに書き出す
pub fn write_csv(results: &[MatchResult], path: &Path) -> Result<()> {
    std::fs::write(path, render_csv(results))?;
    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::MatchStatus;

    fn result(pattern: &str, status: MatchStatus, feature: &str) -> MatchResult {
        MatchResult {
            pattern: pattern.to_string(),
            status,
            feature: feature.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_render_header_and_rows() {
        let results = vec![
            result("71.123", MatchStatus::Matched, "Stop Arm"),
            result("80xx", MatchStatus::Missing, "Heater"),
        ];

        let csv = render_csv(&results);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Pattern,Match Status,Feature,Description");
        assert_eq!(lines[1], "71.123,✅ Matched,Stop Arm,");
        assert_eq!(lines[2], "80xx,❌ Missing,Heater,");
    }

    #[test]
    fn test_render_empty_report() {
        let csv = render_csv(&[]);
        assert_eq!(csv, "Pattern,Match Status,Feature,Description\n");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
