//! The `fysika stats` command.

use std::path::PathBuf;

use anyhow::Result;

use fysika_content::TOPICS;
use fysika_session::{accuracy_percent, format_time_spent, Progress};

use super::parse_language;

pub fn execute(progress_path: PathBuf, language: String) -> Result<()> {
    let language = parse_language(&language)?;
    let progress = Progress::load_or_default(&progress_path);

    if progress.total_attempts == 0 {
        println!("No practice recorded yet.");
        return Ok(());
    }

    use comfy_table::Table;

    let mut table = Table::new();
    table.set_header(vec![
        "Topic",
        "Attempts",
        "Correct",
        "Accuracy",
        "Mastered",
        "To review",
        "Avg time",
        "Last practiced",
    ]);

    for info in TOPICS {
        let Some(stats) = progress.topic(info.id) else {
            continue;
        };
        if stats.total_attempts == 0 {
            continue;
        }

        let name = match language {
            fysika_core::Language::En => info.name,
            fysika_core::Language::Nl => info.dutch_name,
        };

        table.add_row(vec![
            name.to_string(),
            stats.total_attempts.to_string(),
            stats.correct_attempts.to_string(),
            format!(
                "{}%",
                accuracy_percent(stats.correct_attempts, stats.total_attempts)
            ),
            stats.questions_mastered.len().to_string(),
            stats.questions_to_review.len().to_string(),
            format_time_spent(stats.average_time_secs),
            stats
                .last_practiced
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{table}");
    println!(
        "\nTotal: {}/{} correct ({}%), streak {} day(s)",
        progress.total_correct,
        progress.total_attempts,
        accuracy_percent(progress.total_correct, progress.total_attempts),
        progress.streak
    );

    Ok(())
}
