//! ワークブック取り込みモジュール
//!
//! 発注ワークブックと州仕様ワークブック（.xlsx）をメモリ上の表に
//! 読み込む。州シートは固定のヘッダー領域を読み飛ばし、全空の行・列を
//! 落としてから列の特定を行う。

mod columns;

pub use columns::{locate_columns, ColumnLayout};

use crate::compliance::SpecRow;
use crate::error::{Result, SpecCheckError};
use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 読み込み済み州シート
///
/// `headers` はトリム済みヘッダー行、`rows` はその下の本体。
/// 空セルは `None`。
#[derive(Debug, Clone)]
pub struct SpecSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl SpecSheet {
    /// ヘッダー名から列番号を引く（完全一致）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 列の非空セル数
    pub fn non_empty_count(&self, col: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| row.get(col).map(|v| v.is_some()).unwrap_or(false))
            .count()
    }

    /// 本体行をSpecRowに射影する
    ///
    /// `feature` は `Feature` 列、`description` は `Source` 列から取る
    /// （どちらも無ければ空文字）。
    pub fn spec_rows(&self, option_col: usize, vehicle_col: usize) -> Vec<SpecRow> {
        let feature_col = self.find_header("Feature");
        let source_col = self.find_header("Source");

        self.rows
            .iter()
            .map(|row| SpecRow {
                pattern: row.get(option_col).cloned().flatten(),
                vehicle_flag: row.get(vehicle_col).cloned().flatten(),
                feature: feature_col
                    .and_then(|c| row.get(c).cloned().flatten())
                    .unwrap_or_default(),
                description: source_col
                    .and_then(|c| row.get(c).cloned().flatten())
                    .unwrap_or_default(),
            })
            .collect()
    }

    fn find_header(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    }
}

/// 発注ワークブックからオプションコード一覧を読み込む
///
/// 指定シートの1行目をヘッダーとして品目番号列を探し、その列の
/// 非空セルをトリムして返す。重複はそのまま残す（any-match判定なので
/// 影響しない）。
pub fn load_ordered_codes(path: &Path, sheet_name: &str, column_name: &str) -> Result<Vec<String>> {
    let mut workbook = open_xlsx(path)?;
    let range = worksheet(&mut workbook, sheet_name)?;

    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| SpecCheckError::MissingOrderColumn(column_name.to_string()))?;
    let col = header_row
        .iter()
        .position(|cell| cell_text(cell).as_deref() == Some(column_name))
        .ok_or_else(|| SpecCheckError::MissingOrderColumn(column_name.to_string()))?;

    Ok(rows.filter_map(|row| row.get(col).and_then(cell_text)).collect())
}

/// 州仕様ワークブックの選択可能なシート名一覧
///
/// 管理用タブ（OVERVIEW, TEMPLATE など）は除外する。
pub fn list_spec_sheets(path: &Path, excluded: &[String]) -> Result<Vec<String>> {
    let workbook = open_xlsx(path)?;
    Ok(workbook
        .sheet_names()
        .iter()
        .filter(|name| !excluded.iter().any(|e| e == *name))
        .cloned()
        .collect())
}

/// 州シートを読み込む
///
/// シート先頭から `skip_rows` 行を読み飛ばし、次の行をヘッダーとする。
/// 全セルが空の行と、本体が全て空の列は落とす。
pub fn load_spec_sheet(path: &Path, sheet_name: &str, skip_rows: usize) -> Result<SpecSheet> {
    let mut workbook = open_xlsx(path)?;
    let range = worksheet(&mut workbook, sheet_name)?;

    // calamineのRangeは先頭の空行を含まないため、シート上の絶対行数で
    // 読み飛ばし量を補正する
    let start_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let effective_skip = skip_rows.saturating_sub(start_row);

    let mut header_texts: Vec<Option<String>> = Vec::new();
    let mut body: Vec<Vec<Option<String>>> = Vec::new();

    for (i, row) in range.rows().skip(effective_skip).enumerate() {
        if i == 0 {
            header_texts = row.iter().map(cell_text).collect();
            continue;
        }
        let cells: Vec<Option<String>> = row.iter().map(cell_text).collect();
        if cells.iter().any(|c| c.is_some()) {
            body.push(cells);
        }
    }

    // 本体が全て空の列を落とす（本体が無い場合はヘッダーのある列を残す）
    let width = header_texts.len();
    let keep: Vec<usize> = (0..width)
        .filter(|&c| {
            if body.is_empty() {
                header_texts[c].is_some()
            } else {
                body.iter()
                    .any(|row| row.get(c).map(|v| v.is_some()).unwrap_or(false))
            }
        })
        .collect();

    let headers = keep
        .iter()
        .map(|&c| {
            header_texts[c]
                .clone()
                .unwrap_or_else(|| format!("(無題{})", c + 1))
        })
        .collect();
    let rows = body
        .into_iter()
        .map(|row| keep.iter().map(|&c| row.get(c).cloned().flatten()).collect())
        .collect();

    Ok(SpecSheet { headers, rows })
}

fn open_xlsx(path: &Path) -> Result<Xlsx<BufReader<File>>> {
    if !path.exists() {
        return Err(SpecCheckError::FileNotFound(path.display().to_string()));
    }
    Ok(open_workbook(path)?)
}

fn worksheet(workbook: &mut Xlsx<BufReader<File>>, name: &str) -> Result<Range<Data>> {
    if !workbook.sheet_names().iter().any(|n| n == name) {
        return Err(SpecCheckError::SheetNotFound(name.to_string()));
    }
    Ok(workbook.worksheet_range(name)?)
}

/// セルをトリム済みテキストに変換する。空セルは None
///
/// 数値セルはExcel表示と同様に文字列化する（710.0 → "710"）。
fn cell_text(cell: &Data) -> Option<String> {
    if cell.is_empty() {
        return None;
    }
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Error(_) => return None,
        other => other.to_string().trim().to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
