use clap::Parser;
use spec_checker_rust::{cli, compliance, config, error, export, selector, workbook};

use cli::{Cli, Commands};
use config::Config;
use error::{Result, SpecCheckError};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            order,
            spec,
            sheet,
            vehicle_column,
            output,
            format,
        } => {
            println!("🚌 spec-checker - 州仕様コンプライアンスチェック");
            println!("📅 実行日時: {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M"));

            // 1. 発注コード読み込み
            println!("[1/4] 発注データを読み込み中...");
            let ordered_codes = workbook::load_ordered_codes(
                &order,
                &config.order_sheet,
                &config.order_item_column,
            )?;
            println!("✔ {}件のオプションコードを検出\n", ordered_codes.len());

            // 2. 州シート読み込み
            println!("[2/4] 州仕様を読み込み中...");
            let sheet_name = match sheet {
                Some(name) => name,
                None => {
                    let sheets = workbook::list_spec_sheets(&spec, &config.excluded_sheets)?;
                    selector::select_sheet(&sheets)?
                }
            };
            let spec_sheet = workbook::load_spec_sheet(&spec, &sheet_name, config.skip_rows)?;
            let layout = workbook::locate_columns(&spec_sheet, &config)?;
            println!(
                "✔ シート「{}」: {}行 x {}列\n",
                sheet_name,
                spec_sheet.rows.len(),
                spec_sheet.headers.len()
            );

            // 3. 車両タイプ列の決定と照合
            println!("[3/4] 照合中...");
            let vehicle_name = match vehicle_column {
                Some(name) => name,
                None => {
                    let candidates: Vec<String> = layout
                        .vehicle_candidates
                        .iter()
                        .map(|&c| spec_sheet.headers[c].clone())
                        .collect();
                    selector::select_vehicle_column(&candidates)?
                }
            };
            let vehicle_col = spec_sheet
                .column_index(&vehicle_name)
                .ok_or_else(|| SpecCheckError::ColumnNotFound(vehicle_name.clone()))?;

            let rows = spec_sheet.spec_rows(layout.option_col, vehicle_col);
            let results = compliance::evaluate(&rows, &ordered_codes);

            let matched = results.iter().filter(|r| r.matched()).count();
            println!(
                "✔ 照合完了: {}件中 {}件一致 / {}件不足\n",
                results.len(),
                matched,
                results.len() - matched
            );

            if cli.verbose {
                for result in &results {
                    println!("  {} {:<12} {}", result.status, result.pattern, result.feature);
                }
                println!();
            }

            // 4. レポート出力
            println!("[4/4] レポートを出力中...");
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            export::export_results(&results, &format, &output_dir, &sheet_name, &vehicle_name)?;

            println!("\n✅ コンプライアンスチェック完了");
        }

        Commands::Sheets { spec } => {
            println!("📋 選択可能な州シート:\n");
            let sheets = workbook::list_spec_sheets(&spec, &config.excluded_sheets)?;

            if sheets.is_empty() {
                println!("⚠ 選択可能なシートがありません");
            } else {
                for (i, name) in sheets.iter().enumerate() {
                    println!("  {}) {}", i + 1, name);
                }
            }
        }

        Commands::Columns { spec, sheet } => {
            let sheet_name = match sheet {
                Some(name) => name,
                None => {
                    let sheets = workbook::list_spec_sheets(&spec, &config.excluded_sheets)?;
                    selector::select_sheet(&sheets)?
                }
            };

            let spec_sheet = workbook::load_spec_sheet(&spec, &sheet_name, config.skip_rows)?;
            let layout = workbook::locate_columns(&spec_sheet, &config)?;

            println!("シート「{}」の列構成:", sheet_name);
            println!("  オプション列: {}", spec_sheet.headers[layout.option_col]);
            println!("  車両タイプ候補:");
            for &c in &layout.vehicle_candidates {
                println!(
                    "    - {} ({}件)",
                    spec_sheet.headers[c],
                    spec_sheet.non_empty_count(c)
                );
            }
        }

        Commands::Config { init, show } => {
            if init {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !init {
                println!("設定:");
                println!("  発注シート: {}", config.order_sheet);
                println!("  品目番号列: {}", config.order_item_column);
                println!("  読み飛ばし行数: {}", config.skip_rows);
                println!("  除外シート: {}", config.excluded_sheets.join(", "));
                println!("  候補列の最小セル数: {}", config.min_column_entries);
                println!(
                    "  除外ヘッダーキーワード: {}",
                    config.excluded_header_keywords.join(", ")
                );
            }
        }
    }

    Ok(())
}
