//! TOML question-bank parser.
//!
//! Loads question banks from TOML files and directories, converts the
//! raw bank format into the typed model, and validates banks for common
//! authoring mistakes. Structural problems (unknown topics or answer
//! types, a unit requirement authored halfway) are errors; semantic
//! soft spots are returned as warnings.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use fysika_core::{parse_numeric_input, AnswerSpec, Language, NumericTolerance, UnitRequirement};

use crate::model::{Difficulty, LocalisedText, Question, QuestionBank};
use crate::topics::TopicId;

/// Structural errors converting the raw bank format into the typed model.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    #[error("unknown answer type: {0}")]
    UnknownAnswerType(String),

    #[error("{0}")]
    InvalidDifficulty(String),

    #[error("numeric correct answer does not parse as a number: {0:?}")]
    InvalidNumericAnswer(String),

    #[error("correct answer must be a number or a string")]
    InvalidAnswerValue,

    #[error("multiple-choice question has no choices")]
    MissingChoices,

    #[error("unit_options and correct_unit must be authored together")]
    PartialUnitPairing,
}

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    question_bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    topic: String,
    #[serde(default = "default_difficulty")]
    difficulty: u8,
    prompt: LocalisedText,
    answer_type: String,
    correct_answer: toml::Value,
    #[serde(default)]
    tolerance: Option<TomlTolerance>,
    #[serde(default)]
    choices: Option<Vec<String>>,
    #[serde(default)]
    unit_options: Option<Vec<String>>,
    #[serde(default)]
    correct_unit: Option<String>,
    #[serde(default)]
    hints: Vec<LocalisedText>,
    #[serde(default)]
    solution_steps: Vec<LocalisedText>,
    #[serde(default)]
    common_mistakes: Vec<LocalisedText>,
}

fn default_difficulty() -> u8 {
    1
}

#[derive(Debug, Deserialize)]
struct TomlTolerance {
    #[serde(default)]
    absolute: Option<f64>,
    #[serde(default)]
    relative: Option<f64>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|raw| {
            let id = raw.id.clone();
            convert_question(raw)
                .with_context(|| format!("question '{id}' in {}", source_path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        id: parsed.question_bank.id,
        name: parsed.question_bank.name,
        description: parsed.question_bank.description,
        version: parsed.question_bank.version,
        questions,
    })
}

fn convert_question(raw: TomlQuestion) -> Result<Question, BankError> {
    let topic: TopicId = raw
        .topic
        .parse()
        .map_err(|_| BankError::UnknownTopic(raw.topic.clone()))?;

    let difficulty =
        Difficulty::try_from(raw.difficulty).map_err(BankError::InvalidDifficulty)?;

    let tolerance = raw.tolerance.map(|t| NumericTolerance {
        absolute: t.absolute,
        relative: t.relative,
    });

    let answer = match raw.answer_type.as_str() {
        "numeric" => {
            let value = numeric_answer_value(&raw.correct_answer)?;
            let unit = match (raw.unit_options, raw.correct_unit) {
                (Some(options), Some(correct)) => Some(UnitRequirement { options, correct }),
                (None, None) => None,
                _ => return Err(BankError::PartialUnitPairing),
            };
            AnswerSpec::Numeric {
                value,
                tolerance,
                unit,
            }
        }
        "mcq" | "multiple-choice" => {
            let choices = raw.choices.ok_or(BankError::MissingChoices)?;
            AnswerSpec::MultipleChoice {
                choices,
                correct: text_answer_value(&raw.correct_answer)?,
            }
        }
        "text" | "free-text" => AnswerSpec::FreeText {
            correct: text_answer_value(&raw.correct_answer)?,
        },
        other => return Err(BankError::UnknownAnswerType(other.to_string())),
    };

    Ok(Question {
        id: raw.id,
        topic,
        difficulty,
        prompt: raw.prompt,
        answer,
        hints: raw.hints,
        solution_steps: raw.solution_steps,
        common_mistakes: raw.common_mistakes,
    })
}

/// A numeric correct answer may be authored as a TOML number or as a
/// string in either decimal notation; strings go through the same parser
/// learner input does.
fn numeric_answer_value(value: &toml::Value) -> Result<f64, BankError> {
    match value {
        toml::Value::Float(f) => Ok(*f),
        toml::Value::Integer(i) => Ok(*i as f64),
        toml::Value::String(s) => {
            parse_numeric_input(s).ok_or_else(|| BankError::InvalidNumericAnswer(s.clone()))
        }
        _ => Err(BankError::InvalidAnswerValue),
    }
}

fn text_answer_value(value: &toml::Value) -> Result<String, BankError> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        _ => Err(BankError::InvalidAnswerValue),
    }
}

/// Recursively load all `.toml` bank files from a directory.
///
/// Files that fail to parse are skipped with a warning so one broken
/// bank does not take down the rest.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {e:#}", path.display());
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from question-bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common authoring issues.
pub fn validate_question_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut warn = |question_id: Option<&str>, message: String| {
        warnings.push(ValidationWarning {
            question_id: question_id.map(str::to_string),
            message,
        });
    };

    // Duplicate question ids
    let mut seen_ids = std::collections::HashSet::new();
    for question in &bank.questions {
        if !seen_ids.insert(&question.id) {
            warn(
                Some(question.id.as_str()),
                format!("duplicate question id: {}", question.id),
            );
        }
    }

    for question in &bank.questions {
        let id = Some(question.id.as_str());

        if question.prompt.get(Language::En).trim().is_empty() {
            warn(id, "prompt is empty".into());
        }

        if question.hints.len() > 3 {
            warn(
                id,
                format!("{} hints authored, learners see at most 3", question.hints.len()),
            );
        }

        match &question.answer {
            AnswerSpec::Numeric {
                value,
                tolerance,
                unit,
            } => {
                if !value.is_finite() {
                    warn(id, "correct answer is not a finite number".into());
                }
                if tolerance.is_some_and(|t| t.is_empty()) {
                    warn(
                        id,
                        "tolerance has neither absolute nor relative bound and will never accept"
                            .into(),
                    );
                }
                if let Some(unit) = unit {
                    if unit.options.is_empty() {
                        warn(id, "unit_options is empty".into());
                    } else if !unit
                        .options
                        .iter()
                        .any(|o| fysika_core::is_unit_correct(o, &unit.correct))
                    {
                        warn(
                            id,
                            format!("correct unit '{}' is not among unit_options", unit.correct),
                        );
                    }
                }
            }
            AnswerSpec::MultipleChoice { choices, correct } => {
                if choices.len() < 2 {
                    warn(id, "multiple-choice question has fewer than 2 choices".into());
                }
                if !choices
                    .iter()
                    .any(|c| c.trim().to_lowercase() == correct.trim().to_lowercase())
                {
                    warn(
                        id,
                        format!("correct answer '{correct}' is not among the choices"),
                    );
                }
            }
            AnswerSpec::FreeText { correct } => {
                if correct.trim().is_empty() {
                    warn(id, "free-text correct answer is empty".into());
                }
            }
        }
    }

    warnings
}
