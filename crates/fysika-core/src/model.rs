//! Core data model types for the grading engine.
//!
//! These are the types the grader consumes (answer keys, submitted
//! answers) and produces (grading results). The content layer builds
//! [`AnswerSpec`] values from question banks; the session layer records
//! the `correct` flag of each [`GradingResult`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feedback languages supported by the grader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Nl => write!(f, "nl"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "nl" | "dutch" | "nederlands" => Ok(Language::Nl),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Permitted deviation between a given numeric answer and the correct value.
///
/// When both bounds are configured the answer passes if *either* accepts
/// it, so the more permissive window wins for that magnitude. With neither
/// bound set the tolerance never accepts; the content layer flags such
/// questions at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericTolerance {
    /// Fixed margin, e.g. ±0.1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute: Option<f64>,
    /// Fraction of the correct value, e.g. 0.05 for 5%.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<f64>,
}

impl NumericTolerance {
    /// True when neither bound is configured.
    pub fn is_empty(&self) -> bool {
        self.absolute.is_none() && self.relative.is_none()
    }
}

/// Unit selection required with a numeric answer.
///
/// Both fields come as a pair: a question either requires a unit choice
/// (options plus the canonical unit) or it does not. Question banks that
/// author one without the other are rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRequirement {
    /// Unit strings offered to the learner.
    pub options: Vec<String>,
    /// The canonical unit the correct answer is authored in.
    pub correct: String,
}

/// The answer key of a question, discriminated by answer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AnswerSpec {
    /// A numeric value, optionally with a tolerance window and a
    /// required unit selection.
    Numeric {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tolerance: Option<NumericTolerance>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<UnitRequirement>,
    },
    /// One canonical choice among the offered options.
    MultipleChoice {
        choices: Vec<String>,
        correct: String,
    },
    /// Exact-match free text (trimmed, case-insensitive).
    FreeText { correct: String },
}

/// A submitted answer: already-numeric, or raw text to be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum GivenAnswer {
    Number(f64),
    Text(String),
}

impl From<f64> for GivenAnswer {
    fn from(value: f64) -> Self {
        GivenAnswer::Number(value)
    }
}

impl From<&str> for GivenAnswer {
    fn from(value: &str) -> Self {
        GivenAnswer::Text(value.to_string())
    }
}

impl From<String> for GivenAnswer {
    fn from(value: String) -> Self {
        GivenAnswer::Text(value)
    }
}

impl fmt::Display for GivenAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GivenAnswer::Number(n) => write!(f, "{n}"),
            GivenAnswer::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The canonical correct value echoed back in a [`GradingResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Number(f64),
    Text(String),
}

impl fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectAnswer::Number(n) => write!(f, "{n}"),
            CorrectAnswer::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Outcome of grading one submitted answer.
///
/// Created fresh per grading call and owned by the caller; the feedback
/// string is already user-facing in the requested language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub correct: bool,
    /// Localized, user-facing feedback.
    pub feedback: String,
    pub correct_answer: CorrectAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<NumericTolerance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_display_and_parse() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Nl.to_string(), "nl");
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("Dutch".parse::<Language>().unwrap(), Language::Nl);
        assert_eq!("nederlands".parse::<Language>().unwrap(), Language::Nl);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn tolerance_is_empty() {
        assert!(NumericTolerance::default().is_empty());
        assert!(!NumericTolerance {
            absolute: Some(0.1),
            relative: None
        }
        .is_empty());
    }

    #[test]
    fn answer_spec_serde_roundtrip() {
        let answer = AnswerSpec::Numeric {
            value: 9.81,
            tolerance: Some(NumericTolerance {
                absolute: Some(0.01),
                relative: None,
            }),
            unit: Some(UnitRequirement {
                options: vec!["m/s²".into(), "m/s".into(), "N".into()],
                correct: "m/s²".into(),
            }),
        };
        let json = serde_json::to_string(&answer).unwrap();
        let deserialized: AnswerSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, answer);
    }

    #[test]
    fn correct_answer_display() {
        assert_eq!(CorrectAnswer::Number(2000.0).to_string(), "2000");
        assert_eq!(CorrectAnswer::Text("Option A".into()).to_string(), "Option A");
    }

    #[test]
    fn given_answer_display() {
        assert_eq!(GivenAnswer::Number(5.0).to_string(), "5");
        assert_eq!(GivenAnswer::Text("5,0".into()).to_string(), "5,0");
    }
}
