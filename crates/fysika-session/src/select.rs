//! Question selection for practice rounds.

use rand::seq::SliceRandom;
use rand::Rng;

use fysika_content::{Question, QuestionBank, TopicId, TOPICS};

use crate::progress::Progress;

/// Pick questions for a practice round on a topic.
///
/// Questions on the review list come first, unseen questions fill the
/// remaining slots, and mastered questions top the round up for
/// reinforcement. The final order is shuffled so difficulty and answer
/// types mix.
pub fn select_questions<'a>(
    bank: &'a QuestionBank,
    topic: TopicId,
    progress: &Progress,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<&'a Question> {
    let topic_questions: Vec<&Question> = bank.questions_for_topic(topic).collect();
    if topic_questions.is_empty() {
        return Vec::new();
    }

    let stats = progress.topic(topic);
    let in_review = |q: &Question| {
        stats.is_some_and(|s| s.questions_to_review.iter().any(|id| *id == q.id))
    };
    let is_mastered = |q: &Question| {
        stats.is_some_and(|s| s.questions_mastered.iter().any(|id| *id == q.id))
    };

    let mut needs_review: Vec<&Question> = topic_questions
        .iter()
        .copied()
        .filter(|q| in_review(q))
        .collect();
    let mut unseen: Vec<&Question> = topic_questions
        .iter()
        .copied()
        .filter(|q| !in_review(q) && !is_mastered(q))
        .collect();
    let mut mastered: Vec<&Question> = topic_questions
        .iter()
        .copied()
        .filter(|q| is_mastered(q))
        .collect();

    needs_review.shuffle(rng);
    unseen.shuffle(rng);
    mastered.shuffle(rng);

    let mut selected: Vec<&Question> = Vec::with_capacity(count);
    selected.extend(needs_review.into_iter().take(count));
    if selected.len() < count {
        let remaining = count - selected.len();
        selected.extend(unseen.into_iter().take(remaining));
    }
    if selected.len() < count {
        let remaining = count - selected.len();
        selected.extend(mastered.into_iter().take(remaining));
    }

    selected.shuffle(rng);
    selected
}

/// Recommend the topic most worth practicing next.
///
/// Untried topics win outright; otherwise the attempted topic with the
/// lowest accuracy. When everything sits at 90% or better, the topic
/// with the longest review queue is suggested instead.
pub fn recommended_topic(progress: &Progress) -> Option<TopicId> {
    let mut lowest_accuracy = 100.0_f64;
    let mut recommended = None;

    for info in TOPICS {
        match progress.topic(info.id) {
            Some(stats) if stats.total_attempts > 0 => {
                let accuracy =
                    f64::from(stats.correct_attempts) / f64::from(stats.total_attempts) * 100.0;
                if accuracy < lowest_accuracy {
                    lowest_accuracy = accuracy;
                    recommended = Some(info.id);
                }
            }
            _ => return Some(info.id),
        }
    }

    if lowest_accuracy >= 90.0 {
        let mut max_review = 0;
        for info in TOPICS {
            if let Some(stats) = progress.topic(info.id) {
                if stats.questions_to_review.len() > max_review {
                    max_review = stats.questions_to_review.len();
                    recommended = Some(info.id);
                }
            }
        }
    }

    recommended
}
