//! Attempt history, per-topic statistics, and mastery tracking.
//!
//! A question counts as mastered after three correct answers in a row;
//! one miss moves it to the review list and revokes mastery. The daily
//! streak counts consecutive calendar days with at least one attempt.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fysika_content::TopicId;

/// Correct answers in a row needed to master a question.
const MASTERY_STREAK: usize = 3;
/// Recent attempts considered when checking for mastery.
const MASTERY_WINDOW: usize = 5;

/// One graded attempt at a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub question_id: String,
    pub topic: TopicId,
    pub timestamp: DateTime<Utc>,
    pub correct: bool,
    pub given_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_unit: Option<String>,
    /// Seconds spent before submitting.
    pub time_spent_secs: u32,
    /// Hints revealed before submitting.
    pub hints_used: u8,
}

/// Accumulated statistics for one topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicStats {
    pub total_attempts: u32,
    pub correct_attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_practiced: Option<NaiveDate>,
    /// Question ids answered correctly three times in a row.
    #[serde(default)]
    pub questions_mastered: Vec<String>,
    /// Question ids waiting for another go after a miss.
    #[serde(default)]
    pub questions_to_review: Vec<String>,
    /// Average seconds per question.
    pub average_time_secs: u32,
}

/// Complete practice progress, persisted between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub attempts: Vec<Attempt>,
    #[serde(default)]
    pub topic_stats: HashMap<TopicId, TopicStats>,
    /// Consecutive days practiced.
    pub streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_practice_date: Option<NaiveDate>,
    pub total_correct: u32,
    pub total_attempts: u32,
}

impl Progress {
    /// Record a graded attempt and update all derived bookkeeping.
    pub fn record_attempt(&mut self, attempt: Attempt) {
        let topic = attempt.topic;
        let question_id = attempt.question_id.clone();
        let correct = attempt.correct;
        let today = attempt.timestamp.date_naive();

        self.attempts.push(attempt);
        self.total_attempts += 1;
        if correct {
            self.total_correct += 1;
        }

        let topic_attempts = self.attempts.iter().filter(|a| a.topic == topic);
        let (count, total_time) = topic_attempts
            .fold((0u32, 0u64), |(n, t), a| (n + 1, t + u64::from(a.time_spent_secs)));

        let stats = self.topic_stats.entry(topic).or_default();
        stats.total_attempts += 1;
        if correct {
            stats.correct_attempts += 1;
        }
        stats.last_practiced = Some(today);
        stats.average_time_secs = (total_time as f64 / f64::from(count)).round() as u32;

        self.update_mastery(topic, &question_id, correct);
        self.update_streak(today);
    }

    fn update_mastery(&mut self, topic: TopicId, question_id: &str, correct: bool) {
        let recent: Vec<bool> = self
            .attempts
            .iter()
            .filter(|a| a.question_id == question_id)
            .map(|a| a.correct)
            .collect();

        let stats = self.topic_stats.entry(topic).or_default();

        if correct {
            let window = &recent[recent.len().saturating_sub(MASTERY_WINDOW)..];
            let streak = &window[window.len().saturating_sub(MASTERY_STREAK)..];
            if streak.len() >= MASTERY_STREAK && streak.iter().all(|c| *c) {
                if !stats.questions_mastered.iter().any(|id| id == question_id) {
                    stats.questions_mastered.push(question_id.to_string());
                }
            }
            stats.questions_to_review.retain(|id| id != question_id);
        } else {
            if !stats.questions_to_review.iter().any(|id| id == question_id) {
                stats.questions_to_review.push(question_id.to_string());
            }
            // Needs re-mastery after a miss.
            stats.questions_mastered.retain(|id| id != question_id);
        }
    }

    fn update_streak(&mut self, today: NaiveDate) {
        match self.last_practice_date {
            None => self.streak = 1,
            Some(last) => {
                let gap = (today - last).num_days();
                if gap == 1 {
                    self.streak += 1;
                } else if gap != 0 {
                    self.streak = 1;
                }
            }
        }
        self.last_practice_date = Some(today);
    }

    /// Statistics for a topic, if it has ever been practiced.
    pub fn topic(&self, topic: TopicId) -> Option<&TopicStats> {
        self.topic_stats.get(&topic)
    }

    /// Save progress as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize progress")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write progress to {}", path.display()))?;
        Ok(())
    }

    /// Load progress from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read progress from {}", path.display()))?;
        let progress: Progress =
            serde_json::from_str(&content).context("failed to parse progress JSON")?;
        Ok(progress)
    }

    /// Load progress, tolerating a missing or corrupt file.
    ///
    /// A missing file is a fresh start; a corrupt one resets progress
    /// with a warning rather than blocking practice.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_json(path) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::warn!("resetting progress, could not load {}: {e:#}", path.display());
                Self::default()
            }
        }
    }
}

/// Summary of one practice round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub id: Uuid,
    pub topic: TopicId,
    pub started_at: DateTime<Utc>,
    pub total: u32,
    pub correct: u32,
    pub total_time_secs: u32,
}

impl RoundSummary {
    pub fn new(topic: TopicId) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic,
            started_at: Utc::now(),
            total: 0,
            correct: 0,
            total_time_secs: 0,
        }
    }

    /// Fold one graded question into the summary.
    pub fn record(&mut self, correct: bool, time_spent_secs: u32) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
        self.total_time_secs += time_spent_secs;
    }

    pub fn accuracy(&self) -> u8 {
        accuracy_percent(self.correct, self.total)
    }
}

/// Accuracy as a rounded percentage.
pub fn accuracy_percent(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((f64::from(correct) / f64::from(total)) * 100.0).round() as u8
}

/// Compact "95s" / "4m 23s" duration formatting.
pub fn format_time_spent(seconds: u32) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    format!("{}m {}s", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn attempt_on(day: u32, question_id: &str, correct: bool) -> Attempt {
        Attempt {
            question_id: question_id.to_string(),
            topic: TopicId::Power,
            timestamp: Utc.with_ymd_and_hms(2026, 3, day, 10, 0, 0).unwrap(),
            correct,
            given_answer: "42".to_string(),
            given_unit: None,
            time_spent_secs: 30,
            hints_used: 0,
        }
    }

    #[test]
    fn counts_and_accuracy() {
        let mut progress = Progress::default();
        progress.record_attempt(attempt_on(1, "q1", true));
        progress.record_attempt(attempt_on(1, "q2", false));

        assert_eq!(progress.total_attempts, 2);
        assert_eq!(progress.total_correct, 1);
        let stats = progress.topic(TopicId::Power).unwrap();
        assert_eq!(stats.total_attempts, 2);
        assert_eq!(stats.correct_attempts, 1);
        assert_eq!(stats.average_time_secs, 30);
        assert_eq!(stats.last_practiced, Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    }

    #[test]
    fn mastery_after_three_in_a_row() {
        let mut progress = Progress::default();
        progress.record_attempt(attempt_on(1, "q1", true));
        progress.record_attempt(attempt_on(1, "q1", true));
        assert!(progress.topic(TopicId::Power).unwrap().questions_mastered.is_empty());

        progress.record_attempt(attempt_on(1, "q1", true));
        let stats = progress.topic(TopicId::Power).unwrap();
        assert_eq!(stats.questions_mastered, vec!["q1".to_string()]);
    }

    #[test]
    fn a_miss_breaks_the_run_and_revokes_mastery() {
        let mut progress = Progress::default();
        for _ in 0..3 {
            progress.record_attempt(attempt_on(1, "q1", true));
        }
        assert!(!progress.topic(TopicId::Power).unwrap().questions_mastered.is_empty());

        progress.record_attempt(attempt_on(1, "q1", false));
        let stats = progress.topic(TopicId::Power).unwrap();
        assert!(stats.questions_mastered.is_empty());
        assert_eq!(stats.questions_to_review, vec!["q1".to_string()]);

        // Two correct answers after the miss are not enough yet.
        progress.record_attempt(attempt_on(1, "q1", true));
        progress.record_attempt(attempt_on(1, "q1", true));
        let stats = progress.topic(TopicId::Power).unwrap();
        assert!(stats.questions_mastered.is_empty());
        // But any correct answer clears the review flag.
        assert!(stats.questions_to_review.is_empty());

        progress.record_attempt(attempt_on(1, "q1", true));
        assert!(!progress.topic(TopicId::Power).unwrap().questions_mastered.is_empty());
    }

    #[test]
    fn streak_transitions() {
        let mut progress = Progress::default();

        progress.record_attempt(attempt_on(1, "q1", true));
        assert_eq!(progress.streak, 1);

        // Same day: unchanged.
        progress.record_attempt(attempt_on(1, "q2", true));
        assert_eq!(progress.streak, 1);

        // Next day: increment.
        progress.record_attempt(attempt_on(2, "q1", true));
        assert_eq!(progress.streak, 2);

        // Gap: reset.
        progress.record_attempt(attempt_on(5, "q1", true));
        assert_eq!(progress.streak, 1);
    }

    #[test]
    fn json_round_trip() {
        let mut progress = Progress::default();
        progress.record_attempt(attempt_on(1, "q1", true));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        progress.save_json(&path).unwrap();

        let loaded = Progress::load_json(&path).unwrap();
        assert_eq!(loaded.total_attempts, 1);
        assert_eq!(loaded.topic(TopicId::Power), progress.topic(TopicId::Power));
    }

    #[test]
    fn load_or_default_tolerates_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Progress::load_or_default(&dir.path().join("nope.json"));
        assert_eq!(missing.total_attempts, 0);

        let corrupt_path = dir.path().join("corrupt.json");
        std::fs::write(&corrupt_path, "{ not json").unwrap();
        let corrupt = Progress::load_or_default(&corrupt_path);
        assert_eq!(corrupt.total_attempts, 0);
    }

    #[test]
    fn round_summary_accumulates() {
        let mut round = RoundSummary::new(TopicId::Circuits);
        round.record(true, 20);
        round.record(false, 40);
        assert_eq!(round.total, 2);
        assert_eq!(round.correct, 1);
        assert_eq!(round.total_time_secs, 60);
        assert_eq!(round.accuracy(), 50);
    }

    #[test]
    fn accuracy_helpers() {
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(3, 3), 100);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time_spent(45), "45s");
        assert_eq!(format_time_spent(60), "1m 0s");
        assert_eq!(format_time_spent(263), "4m 23s");
    }
}
