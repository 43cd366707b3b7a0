//! fysika CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fysika", version, about = "Physics practice and answer grading")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive practice round
    Practice {
        /// Path to a .toml question bank or directory
        #[arg(long, default_value = "questions.toml")]
        bank: PathBuf,

        /// Topic to practice (defaults to the recommended topic)
        #[arg(long)]
        topic: Option<String>,

        /// Number of questions in the round
        #[arg(long, default_value = "5")]
        count: usize,

        /// Feedback language: en or nl
        #[arg(long, default_value = "en")]
        language: String,

        /// Progress file
        #[arg(long, default_value = "fysika-progress.json")]
        progress: PathBuf,
    },

    /// Grade a single answer against a question
    Grade {
        /// Path to a .toml question bank or directory
        #[arg(long, default_value = "questions.toml")]
        bank: PathBuf,

        /// Question id
        #[arg(long)]
        question: String,

        /// The answer to grade
        #[arg(long)]
        answer: String,

        /// Unit accompanying the answer
        #[arg(long)]
        unit: Option<String>,

        /// Feedback language: en or nl
        #[arg(long, default_value = "en")]
        language: String,

        /// Print the grading result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Show practice statistics
    Stats {
        /// Progress file
        #[arg(long, default_value = "fysika-progress.json")]
        progress: PathBuf,

        /// Display language: en or nl
        #[arg(long, default_value = "en")]
        language: String,
    },

    /// List curriculum topics
    Topics {
        /// Filter to one VWO level (3 or 4)
        #[arg(long)]
        level: Option<u8>,
    },

    /// Create a starter question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fysika=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            bank,
            topic,
            count,
            language,
            progress,
        } => commands::practice::execute(bank, topic, count, language, progress),
        Commands::Grade {
            bank,
            question,
            answer,
            unit,
            language,
            json,
        } => commands::grade::execute(bank, question, answer, unit, language, json),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Stats { progress, language } => commands::stats::execute(progress, language),
        Commands::Topics { level } => commands::topics::execute(level),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
