//! Subcommand implementations.

pub mod grade;
pub mod init;
pub mod practice;
pub mod stats;
pub mod topics;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use fysika_content::{load_bank_directory, parse_question_bank, QuestionBank};
use fysika_core::Language;

pub(crate) fn parse_language(s: &str) -> Result<Language> {
    s.parse::<Language>().map_err(|e| anyhow::anyhow!(e))
}

/// Load one bank file, or every bank under a directory.
pub(crate) fn load_banks(path: &Path) -> Result<Vec<QuestionBank>> {
    let banks = if path.is_dir() {
        load_bank_directory(path)?
    } else {
        vec![parse_question_bank(path)?]
    };
    anyhow::ensure!(!banks.is_empty(), "no question banks found in {}", path.display());
    Ok(banks)
}

/// Load banks and merge them into one question pool.
pub(crate) fn load_merged_bank(path: &Path) -> Result<QuestionBank> {
    let mut banks = load_banks(path)
        .with_context(|| format!("failed to load question banks from {}", path.display()))?;

    if banks.len() == 1 {
        return Ok(banks.remove(0));
    }

    let questions = banks.iter().flat_map(|b| b.questions.iter().cloned()).collect();
    Ok(QuestionBank {
        id: "combined".to_string(),
        name: "Combined banks".to_string(),
        description: String::new(),
        version: "1.0".to_string(),
        questions,
    })
}
