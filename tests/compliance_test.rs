//! 照合ロジックの統合テスト
//!
//! パターンコンパイラと照合処理を組み合わせた振る舞いを検証

use spec_checker_rust::compliance::{evaluate, is_satisfied, MatchStatus, SpecRow};

fn codes(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn row(pattern: &str, vehicle: Option<&str>, feature: &str) -> SpecRow {
    SpecRow {
        pattern: Some(pattern.to_string()),
        vehicle_flag: vehicle.map(|s| s.to_string()),
        feature: feature.to_string(),
        description: String::new(),
    }
}

/// リテラルパターンは空白除去後の完全一致
#[test]
fn test_literal_patterns_exact_match() {
    let ordered = codes(&["71.123", "CH-200"]);

    assert!(is_satisfied("71.123", &ordered));
    assert!(is_satisfied("CH - 200", &ordered));
    assert!(!is_satisfied("71.1234", &ordered));
    assert!(!is_satisfied("71.12", &ordered));
}

/// 数字桁数は厳密（短いコードへの許容はしない）
#[test]
fn test_digit_runs_require_exact_length() {
    assert!(is_satisfied("AB.XXX", &codes(&["AB.123"])));
    assert!(!is_satisfied("AB.XXX", &codes(&["AB.12"])));
    assert!(is_satisfied("AxB", &codes(&["A5B"])));
    assert!(!is_satisfied("AxB", &codes(&["A55B", "AB"])));
}

/// 発注コードが空なら全行が不足になる
#[test]
fn test_empty_order_means_all_missing() {
    let rows = vec![
        row("71.XXX", Some("X"), "Stop Arm"),
        row("80xx", Some("X"), "Heater"),
    ];

    let results = evaluate(&rows, &[]);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.status == MatchStatus::Missing));
}

/// 車両タイプ列が空の行はオプション列の内容に関わらず除外
#[test]
fn test_vehicle_flag_controls_applicability() {
    let rows = vec![
        row("71.XXX", None, "Stop Arm"),
        row("AB[", None, "Broken"),
    ];

    let results = evaluate(&rows, &codes(&["71.123"]));
    assert!(results.is_empty());
}

/// 不正なパターンはエラーにならず不足として報告される
#[test]
fn test_malformed_pattern_reported_as_missing() {
    let rows = vec![
        row("AB[", Some("X"), "Broken"),
        row("71.XXX", Some("X"), "Stop Arm"),
    ];

    let results = evaluate(&rows, &codes(&["71.123"]));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].status, MatchStatus::Missing);
    assert_eq!(results[1].status, MatchStatus::Matched);
}

/// 行順が維持され、除外行は結果から詰められる
#[test]
fn test_order_preserved_with_exclusions() {
    let rows = vec![
        row("AA.111", Some("X"), "first"),
        row("BB.222", None, "skipped"),
        row("CC.333", Some("X"), "last"),
    ];

    let results = evaluate(&rows, &codes(&["CC.333"]));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].feature, "first");
    assert_eq!(results[1].feature, "last");
    assert_eq!(results[1].status, MatchStatus::Matched);
}

/// 同一入力に対する結果は常に同一（純粋関数）
#[test]
fn test_repeated_runs_identical() {
    let rows = vec![
        row("71.XXX", Some("X"), "Stop Arm"),
        row("80xx", Some("X"), "Heater"),
        row("90.5x", Some("X"), "Mirror"),
    ];
    let ordered = codes(&["71.001", "8099"]);

    let first = evaluate(&rows, &ordered);
    let second = evaluate(&rows, &ordered);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.pattern, b.pattern);
        assert_eq!(a.status, b.status);
        assert_eq!(a.feature, b.feature);
    }
}

/// 重複コードがあっても判定は変わらない
#[test]
fn test_duplicate_codes_do_not_matter() {
    let ordered = codes(&["71.123", "71.123", "71.123"]);
    assert!(is_satisfied("71.XXX", &ordered));
    assert!(!is_satisfied("72.XXX", &ordered));
}
