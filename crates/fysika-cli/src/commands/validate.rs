//! The `fysika validate` command.

use std::path::PathBuf;

use anyhow::Result;

use fysika_content::validate_question_bank;

use super::load_banks;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks = load_banks(&bank_path)?;

    let mut total_warnings = 0;

    for bank in &banks {
        println!("Question bank: {} ({} questions)", bank.name, bank.questions.len());

        let warnings = validate_question_bank(bank);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
