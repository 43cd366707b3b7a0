//! fysika-content — Question banks for the grading engine.
//!
//! Loads TOML question banks into the typed model consumed by
//! `fysika-core`, validates them for authoring mistakes, and carries the
//! topic catalog of the VWO physics curriculum.

pub mod model;
pub mod parser;
pub mod topics;

pub use model::{Difficulty, LocalisedText, Question, QuestionBank};
pub use parser::{
    load_bank_directory, parse_question_bank, parse_question_bank_str, validate_question_bank,
    BankError, ValidationWarning,
};
pub use topics::{topics_for_level, TopicId, TopicInfo, TOPICS};
