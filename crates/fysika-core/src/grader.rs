//! The answer grader.
//!
//! Orchestrates the numeric parser, unit normalizer/converter, and
//! tolerance checker into a single total grading function. Unit checks
//! run before value checks, so a numerically-correct answer with a
//! missing unit is always reported as "missing unit", never as "wrong
//! value". A wrong, non-convertible unit is called out precisely only
//! when the number alone would have been accepted.

use crate::feedback::{messages, Messages};
use crate::model::{
    AnswerSpec, CorrectAnswer, GivenAnswer, GradingResult, Language, NumericTolerance,
    UnitRequirement,
};
use crate::numeric::parse_numeric_input;
use crate::tolerance::{format_tolerance_range, is_within_tolerance};
use crate::units::{are_units_convertible, convert_value, is_unit_correct};

/// Grade a submitted answer against a question's answer key.
///
/// Total function: malformed input of every kind comes back as a
/// [`GradingResult`] with `correct: false` and user-facing feedback in
/// the requested language.
pub fn grade_answer(
    answer: &AnswerSpec,
    given: &GivenAnswer,
    given_unit: Option<&str>,
    language: Language,
) -> GradingResult {
    let msg = messages(language);

    match answer {
        AnswerSpec::MultipleChoice { correct, .. } | AnswerSpec::FreeText { correct } => {
            let is_correct = text_matches(correct, given);
            GradingResult {
                correct: is_correct,
                feedback: if is_correct {
                    msg.correct.to_string()
                } else {
                    format!("{}: {}", msg.incorrect, correct)
                },
                correct_answer: CorrectAnswer::Text(correct.clone()),
                correct_unit: None,
                tolerance: None,
            }
        }
        AnswerSpec::Numeric {
            value,
            tolerance,
            unit,
        } => {
            let (correct, feedback) =
                grade_numeric(*value, tolerance.as_ref(), unit.as_ref(), given, given_unit, msg);
            GradingResult {
                correct,
                feedback,
                correct_answer: CorrectAnswer::Number(*value),
                correct_unit: unit.as_ref().map(|u| u.correct.clone()),
                tolerance: *tolerance,
            }
        }
    }
}

/// Trimmed, case-insensitive equality for choice and free-text answers.
fn text_matches(correct: &str, given: &GivenAnswer) -> bool {
    given.to_string().trim().to_lowercase() == correct.trim().to_lowercase()
}

fn grade_numeric(
    correct_value: f64,
    tolerance: Option<&NumericTolerance>,
    unit: Option<&UnitRequirement>,
    given: &GivenAnswer,
    given_unit: Option<&str>,
    msg: &Messages,
) -> (bool, String) {
    let given_value = match given {
        GivenAnswer::Number(n) => Some(*n),
        GivenAnswer::Text(raw) => parse_numeric_input(raw),
    };
    let Some(given_value) = given_value else {
        return (false, msg.enter_valid_number.to_string());
    };

    // A NaN or infinite answer key is a content-authoring mistake; keep
    // it distinguishable from bad user input.
    if !correct_value.is_finite() {
        return (false, msg.invalid_correct_answer.to_string());
    }

    if let Some(unit) = unit {
        let Some(given_unit) = given_unit.filter(|u| !u.is_empty()) else {
            return (false, msg.select_unit.to_string());
        };

        let correct_unit = unit.correct.as_str();

        if is_unit_correct(given_unit, correct_unit) {
            return value_verdict(given_value, correct_value, tolerance, Some(correct_unit), msg);
        }

        if are_units_convertible(given_unit, correct_unit) {
            if let Some(converted) = convert_value(given_value, given_unit, correct_unit) {
                return value_verdict(converted, correct_value, tolerance, Some(correct_unit), msg);
            }
        }

        // The unit neither matches nor converts. Point at the unit only
        // when the number alone would have been accepted.
        if is_within_tolerance(given_value, correct_value, tolerance) {
            return (
                false,
                format!(
                    "{} {} {}.",
                    msg.number_correct_unit_wrong, msg.correct_unit_is, unit.correct
                ),
            );
        }
        return (
            false,
            incorrect_feedback(correct_value, Some(correct_unit), tolerance, msg),
        );
    }

    value_verdict(given_value, correct_value, tolerance, None, msg)
}

fn value_verdict(
    given: f64,
    correct: f64,
    tolerance: Option<&NumericTolerance>,
    correct_unit: Option<&str>,
    msg: &Messages,
) -> (bool, String) {
    if is_within_tolerance(given, correct, tolerance) {
        (true, msg.correct.to_string())
    } else {
        (false, incorrect_feedback(correct, correct_unit, tolerance, msg))
    }
}

fn incorrect_feedback(
    correct: f64,
    correct_unit: Option<&str>,
    tolerance: Option<&NumericTolerance>,
    msg: &Messages,
) -> String {
    let mut feedback = format!("{} {}", msg.incorrect, correct);
    if let Some(unit) = correct_unit {
        feedback.push(' ');
        feedback.push_str(unit);
    }
    if let Some(tolerance) = tolerance {
        feedback.push_str(&format!(
            " ({}: {})",
            msg.accepted_range,
            format_tolerance_range(correct, tolerance)
        ));
    }
    feedback
}
