use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecCheckError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("Excel読み込みエラー: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("オプション列が見つかりません。ヘッダーに「Option」を含む列が必要です")]
    MissingOptionColumn,

    #[error("発注データに「{0}」列が見つかりません")]
    MissingOrderColumn(String),

    #[error("列が見つかりません: {0}")]
    ColumnNotFound(String),

    #[error("選択可能な{0}がありません")]
    NoCandidates(String),

    #[error("パターンコンパイルエラー: {0}")]
    Pattern(String),

    #[error("Excel生成エラー: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("選択プロンプトエラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpecCheckError>;
