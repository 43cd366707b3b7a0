//! The `fysika grade` command.
//!
//! One-shot grading for scripting: exit code 0 when the answer is
//! correct, 2 when it is not.

use std::path::PathBuf;

use anyhow::Result;

use fysika_core::{grade_answer, GivenAnswer};

use super::{load_merged_bank, parse_language};

pub fn execute(
    bank_path: PathBuf,
    question_id: String,
    answer: String,
    unit: Option<String>,
    language: String,
    json: bool,
) -> Result<()> {
    let language = parse_language(&language)?;
    let bank = load_merged_bank(&bank_path)?;

    let Some(question) = bank.question(&question_id) else {
        anyhow::bail!("question '{question_id}' not found in {}", bank_path.display());
    };

    let result = grade_answer(
        &question.answer,
        &GivenAnswer::Text(answer),
        unit.as_deref(),
        language,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.feedback);
    }

    if !result.correct {
        std::process::exit(2);
    }

    Ok(())
}
