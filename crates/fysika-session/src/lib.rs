//! fysika-session — Practice progress and mastery bookkeeping.
//!
//! Records graded attempts, tracks per-topic statistics, mastery and
//! review lists, and the daily practice streak, and selects questions
//! for practice rounds with review-first priority. Progress persists as
//! JSON between sessions.

pub mod progress;
pub mod select;

pub use progress::{
    accuracy_percent, format_time_spent, Attempt, Progress, RoundSummary, TopicStats,
};
pub use select::{recommended_topic, select_questions};
