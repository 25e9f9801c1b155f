pub mod csv;
pub mod excel;

use crate::cli::ExportFormat;
use crate::compliance::MatchResult;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// レポートファイル名（拡張子なし）
///
/// `Updated_{州}_{車両タイプ}_Compliance_Summary` 形式。
fn report_basename(state: &str, vehicle_column: &str) -> String {
    format!("Updated_{}_{}_Compliance_Summary", state, vehicle_column)
}

fn output_path(output_dir: &Path, basename: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", basename, extension))
}

pub fn export_results(
    results: &[MatchResult],
    format: &ExportFormat,
    output_dir: &Path,
    state: &str,
    vehicle_column: &str,
) -> Result<()> {
    let basename = report_basename(state, vehicle_column);

    match format {
        ExportFormat::Csv => {
            let path = output_path(output_dir, &basename, "csv");
            println!("- CSVを生成中...");
            csv::write_csv(results, &path)?;
            println!("✔ CSV出力: {}", path.display());
        }
        ExportFormat::Excel => {
            let path = output_path(output_dir, &basename, "xlsx");
            println!("- Excelを生成中...");
            excel::generate_excel(results, &path, state)?;
            println!("✔ Excel出力: {}", path.display());
        }
        ExportFormat::Both => {
            let csv_path = output_path(output_dir, &basename, "csv");
            println!("- CSVを生成中...");
            csv::write_csv(results, &csv_path)?;
            println!("✔ CSV出力: {}", csv_path.display());

            let excel_path = output_path(output_dir, &basename, "xlsx");
            println!("- Excelを生成中...");
            excel::generate_excel(results, &excel_path, state)?;
            println!("✔ Excel出力: {}", excel_path.display());
        }
    }

    Ok(())
}
