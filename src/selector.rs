//! シート・列の対話式選択モジュール

use crate::error::{Result, SpecCheckError};
use dialoguer::Select;

/// 州シートを対話式で選択
pub fn select_sheet(sheets: &[String]) -> Result<String> {
    if sheets.is_empty() {
        return Err(SpecCheckError::NoCandidates("シート".into()));
    }

    let index = Select::new()
        .with_prompt("州シートを選択してください")
        .items(sheets)
        .default(0)
        .interact()?;

    Ok(sheets[index].clone())
}

/// 車両タイプ列を対話式で選択
pub fn select_vehicle_column(candidates: &[String]) -> Result<String> {
    if candidates.is_empty() {
        return Err(SpecCheckError::NoCandidates("車両タイプ列".into()));
    }

    let index = Select::new()
        .with_prompt("車両タイプ列を選択してください")
        .items(candidates)
        .default(0)
        .interact()?;

    Ok(candidates[index].clone())
}
