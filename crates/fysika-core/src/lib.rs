//! fysika-core — Answer grading and unit conversion engine.
//!
//! This crate grades free-form answers to physics practice questions:
//! it parses learner-entered numbers (comma or period decimals, spaced
//! thousands groups), normalizes and converts physical units, applies
//! tolerance-aware comparison, and produces localized feedback.
//!
//! Everything here is pure and synchronous. The only shared data is a
//! set of immutable static tables, so every function is safe to call
//! concurrently without locking. Grading never fails: malformed input
//! of any kind comes back as a [`model::GradingResult`] with
//! `correct: false` and an explanatory feedback string.

pub mod feedback;
pub mod grader;
pub mod model;
pub mod numeric;
pub mod tolerance;
pub mod units;

pub use grader::grade_answer;
pub use model::{
    AnswerSpec, CorrectAnswer, GivenAnswer, GradingResult, Language, NumericTolerance,
    UnitRequirement,
};
pub use numeric::parse_numeric_input;
pub use tolerance::{format_tolerance_range, is_within_tolerance};
pub use units::{are_units_convertible, convert_value, is_unit_correct, normalize_unit};
