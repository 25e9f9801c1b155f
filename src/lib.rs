//! 州仕様コンプライアンスチェッカー
//!
//! 発注オプションコードを州仕様書のワイルドカードパターンと照合し、
//! 必須オプションの有無をレポートする。

pub mod cli;
pub mod compliance;
pub mod config;
pub mod error;
pub mod export;
pub mod pattern;
pub mod selector;
pub mod workbook;

pub use compliance::{evaluate, is_satisfied, MatchResult, MatchStatus, SpecRow};
pub use error::{Result, SpecCheckError};
pub use pattern::{compile, Matcher};
