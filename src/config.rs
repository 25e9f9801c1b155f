use crate::error::{Result, SpecCheckError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 取り込み設定
///
/// ワークブックの構造に関する定数をまとめる。設定ファイルが無ければ
/// デフォルト値を使う。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 発注ワークブックのシート名
    pub order_sheet: String,
    /// 発注品目番号の列名
    pub order_item_column: String,
    /// 州シート先頭の読み飛ばし行数
    pub skip_rows: usize,
    /// 州として選択しない管理用タブ
    pub excluded_sheets: Vec<String>,
    /// 車両タイプ候補列に必要な非空セル数
    pub min_column_entries: usize,
    /// 車両タイプ候補から除外するヘッダーキーワード（小文字）
    pub excluded_header_keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            order_sheet: "Mapics".into(),
            order_item_column: "Item Numbers".into(),
            skip_rows: 9,
            excluded_sheets: [
                "OVERVIEW",
                "TEMPLATE",
                "STATE OWNERS",
                "DEALERS CBC",
                "DEALERS MG",
                "FMVSS",
                "ADA",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_column_entries: 3,
            excluded_header_keywords: ["feature", "source", "rev", "description", "date"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SpecCheckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("spec-checker").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.order_sheet, "Mapics");
        assert_eq!(config.order_item_column, "Item Numbers");
        assert_eq!(config.skip_rows, 9);
        assert_eq!(config.excluded_sheets.len(), 7);
        assert!(config.excluded_sheets.iter().any(|s| s == "FMVSS"));
        assert_eq!(config.min_column_entries, 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"skip_rows": 5}"#).unwrap();
        assert_eq!(config.skip_rows, 5);
        assert_eq!(config.order_sheet, "Mapics");
    }
}
