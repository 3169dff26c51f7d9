mod display;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use duecal_core::{
    DraftPolicy, EventDraft, MissingDeadline, PriorityPolicy, extract_assignment_info,
    parse_deadline,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "duecal",
    about = "Pull assignment details out of pasted course notices",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract title, deadline, points and submission location from a notice
    Extract {
        #[command(flatten)]
        input: NoticeInput,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Normalise a deadline string into a calendar date
    Deadline {
        /// Deadline text, e.g. "2024년 12월 25일" or "12/25"
        deadline: String,
        /// Reference date for year-less deadlines (defaults to today)
        #[arg(long, env = "DUECAL_TODAY")]
        today: Option<NaiveDate>,
    },
    /// Build a calendar event draft from a notice
    Draft {
        #[command(flatten)]
        input: NoticeInput,
        /// Priority source: "suggested" or "high"
        #[arg(long, env = "DUECAL_PRIORITY", default_value = "suggested")]
        priority: PriorityPolicy,
        /// Unparseable deadline handling: "week" (today + 7 days) or "reject"
        #[arg(long, env = "DUECAL_ON_MISSING_DEADLINE", default_value = "week")]
        on_missing_deadline: MissingDeadline,
        /// Reference date for year-less deadlines and the fallback (defaults to today)
        #[arg(long, env = "DUECAL_TODAY")]
        today: Option<NaiveDate>,
        /// Print a readable card instead of JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
struct NoticeInput {
    /// Notice text; read from stdin when neither this nor --file is given
    text: Option<String>,
    /// Read the notice from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl NoticeInput {
    fn read(self) -> anyhow::Result<String> {
        if let Some(text) = self.text {
            return Ok(text);
        }
        if let Some(path) = self.file {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("reading notice from {}", path.display()));
        }
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading notice from stdin")?;
        Ok(text)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging("warn");
    tracing::debug!("duecal v{}", env!("CARGO_PKG_VERSION"));

    match Cli::parse().command {
        Commands::Extract { input, json } => {
            let result = extract_assignment_info(&input.read()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", display::render_extraction(&result));
            }
        }
        Commands::Deadline { deadline, today } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let parsed = parse_deadline(&deadline, today)
                .with_context(|| format!("no recognised date notation in {deadline:?}"))?;
            println!("{}", display::render_deadline(&parsed));
        }
        Commands::Draft {
            input,
            priority,
            on_missing_deadline,
            today,
            pretty,
        } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let result = extract_assignment_info(&input.read()?);
            let policy = DraftPolicy {
                priority,
                missing_deadline: on_missing_deadline,
            };
            let draft = EventDraft::from_extraction(&result, policy, today)
                .context("building event draft")?;
            if pretty {
                print!("{}", display::render_draft(&draft));
            } else {
                println!("{}", serde_json::to_string_pretty(&draft)?);
            }
        }
    }

    Ok(())
}

/// Logging goes to stderr; `RUST_LOG` overrides `default_level`.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
