use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spec-checker")]
#[command(about = "州仕様コンプライアンスチェックツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 発注データと州仕様を照合してレポートを生成
    Check {
        /// 発注スプレッドシート (.xlsx)
        #[arg(required = true)]
        order: PathBuf,

        /// 州仕様スプレッドシート (.xlsx)
        #[arg(required = true)]
        spec: PathBuf,

        /// 州シート名（省略時は対話選択）
        #[arg(short, long)]
        sheet: Option<String>,

        /// 車両タイプ列名（省略時は候補から対話選択）
        #[arg(long)]
        vehicle_column: Option<String>,

        /// 出力ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (csv/excel/both)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
    },

    /// 州仕様ワークブックの選択可能なシート一覧を表示
    Sheets {
        /// 州仕様スプレッドシート (.xlsx)
        #[arg(required = true)]
        spec: PathBuf,
    },

    /// シートのオプション列と車両タイプ候補列を表示
    Columns {
        /// 州仕様スプレッドシート (.xlsx)
        #[arg(required = true)]
        spec: PathBuf,

        /// 州シート名（省略時は対話選択）
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// 設定を表示/初期化
    Config {
        /// デフォルト設定を設定ファイルに書き出す
        #[arg(long)]
        init: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
