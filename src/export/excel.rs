//! Excel生成
//!
//! コンプライアンスレポートを1シートのxlsxとして出力する。
//! 不足行は赤字で表示する。

use crate::compliance::MatchResult;
use crate::error::Result;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

const HEADERS: [&str; 4] = ["Pattern", "Match Status", "Feature", "Description"];
const COLUMN_WIDTHS: [f64; 4] = [16.0, 14.0, 28.0, 40.0];

pub fn generate_excel(results: &[MatchResult], path: &Path, sheet_name: &str) -> Result<()> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(10.0)
        .set_align(FormatAlign::Left)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let missing_format = Format::new()
        .set_font_size(10.0)
        .set_font_color(Color::RGB(0xCC0000))
        .set_align(FormatAlign::Left)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, result) in results.iter().enumerate() {
        let row = (i + 1) as u32;
        let format = if result.matched() {
            &value_format
        } else {
            &missing_format
        };

        worksheet.write_string_with_format(row, 0, &result.pattern, format)?;
        worksheet.write_string_with_format(row, 1, result.status.as_report_str(), format)?;
        worksheet.write_string_with_format(row, 2, &result.feature, format)?;
        worksheet.write_string_with_format(row, 3, &result.description, format)?;
    }

    workbook.save(path)?;

    Ok(())
}
