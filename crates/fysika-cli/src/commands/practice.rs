//! The `fysika practice` command.
//!
//! Interactive practice round over stdin/stdout: pick a topic, present
//! questions one by one, grade each answer, and record attempts to the
//! progress file. Typing `?` reveals the next hint; end-of-input ends
//! the round early.

use std::io::{BufRead, Write as _};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;

use fysika_content::{Question, TopicId};
use fysika_core::{grade_answer, AnswerSpec, GivenAnswer, Language};
use fysika_session::{
    format_time_spent, recommended_topic, select_questions, Attempt, Progress, RoundSummary,
};

use super::{load_merged_bank, parse_language};

pub fn execute(
    bank_path: PathBuf,
    topic: Option<String>,
    count: usize,
    language: String,
    progress_path: PathBuf,
) -> Result<()> {
    anyhow::ensure!(count >= 1, "count must be at least 1");
    let language = parse_language(&language)?;

    let bank = load_merged_bank(&bank_path)?;
    let mut progress = Progress::load_or_default(&progress_path);

    let topic: TopicId = match topic {
        Some(t) => t.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => recommended_topic(&progress).unwrap_or(TopicId::ForcesNewton),
    };

    let mut rng = rand::thread_rng();
    let selected = select_questions(&bank, topic, &progress, count, &mut rng);
    if selected.is_empty() {
        println!("No questions available for topic '{topic}'.");
        return Ok(());
    }

    println!(
        "Practicing {} — {} question(s). Type ? for a hint.\n",
        topic.info().name,
        selected.len()
    );

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut round = RoundSummary::new(topic);

    for (i, question) in selected.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, selected.len(), question.prompt.get(language));
        if let AnswerSpec::MultipleChoice { choices, .. } = &question.answer {
            for (j, choice) in choices.iter().enumerate() {
                println!("  {}. {choice}", j + 1);
            }
        }

        let started = Instant::now();
        let Some((answer, hints_used)) = read_answer(&mut input, question, language)? else {
            println!("\nEnding the round early.");
            break;
        };

        let unit = match &question.answer {
            AnswerSpec::Numeric { unit: Some(req), .. } => {
                println!("Units: {}", req.options.join(", "));
                match prompt_line(&mut input, "unit> ")? {
                    Some(unit) => Some(unit),
                    None => break,
                }
            }
            _ => None,
        };

        let given = resolve_choice_index(question, answer);
        let result = grade_answer(
            &question.answer,
            &GivenAnswer::Text(given.clone()),
            unit.as_deref(),
            language,
        );
        println!("{}\n", result.feedback);

        let time_spent_secs = started.elapsed().as_secs() as u32;
        round.record(result.correct, time_spent_secs);
        progress.record_attempt(Attempt {
            question_id: question.id.clone(),
            topic: question.topic,
            timestamp: Utc::now(),
            correct: result.correct,
            given_answer: given,
            given_unit: unit,
            time_spent_secs,
            hints_used,
        });
    }

    progress.save_json(&progress_path)?;
    print_summary(&round, progress.streak);

    Ok(())
}

/// Read an answer line, serving hints for each `?`.
///
/// Returns `None` on end of input, otherwise the answer and the number
/// of hints revealed.
fn read_answer(
    input: &mut impl BufRead,
    question: &Question,
    language: Language,
) -> Result<Option<(String, u8)>> {
    let mut hints_used: u8 = 0;

    loop {
        let Some(line) = prompt_line(input, "> ")? else {
            return Ok(None);
        };

        if line == "?" {
            match question.hints.get(hints_used as usize) {
                Some(hint) => {
                    hints_used += 1;
                    println!("Hint {hints_used}: {}", hint.get(language));
                }
                None => println!("No more hints."),
            }
            continue;
        }

        return Ok(Some((line, hints_used)));
    }
}

/// Let learners answer multiple-choice questions by number.
fn resolve_choice_index(question: &Question, answer: String) -> String {
    if let AnswerSpec::MultipleChoice { choices, .. } = &question.answer {
        if let Ok(index) = answer.trim().parse::<usize>() {
            if index >= 1 && index <= choices.len() {
                return choices[index - 1].clone();
            }
        }
    }
    answer
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_summary(round: &RoundSummary, streak: u32) {
    use comfy_table::Table;

    let mut table = Table::new();
    table.set_header(vec!["Questions", "Correct", "Accuracy", "Time", "Streak"]);
    table.add_row(vec![
        round.total.to_string(),
        round.correct.to_string(),
        format!("{}%", round.accuracy()),
        format_time_spent(round.total_time_secs),
        format!("{streak} day(s)"),
    ]);

    println!("{table}");
}
