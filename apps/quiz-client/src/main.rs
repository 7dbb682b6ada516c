use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_quiz_client::commands::{self, QuizStatus};
use vocab_quiz_client::{AppState, ClientConfig, VocabApi};
use vocab_quiz_core::session::QuizState;
use vocab_quiz_core::types::ListId;

#[derive(Parser, Debug)]
#[command(name = "vocab-quiz")]
#[command(version, about = "Self-test vocabulary lists from the terminal", long_about = None)]
struct Args {
    /// Backend base URL (overrides VOCAB_API_URL).
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
    /// Bearer token (overrides VOCAB_API_TOKEN).
    #[arg(long)]
    token: Option<String>,
    /// List to quiz on; repeat for several. Prompts when omitted.
    #[arg(short, long = "list", value_name = "ID")]
    lists: Vec<ListId>,
    /// Source column for a list, as LIST_ID=COLUMN.
    #[arg(short, long = "source", value_name = "LIST_ID=COLUMN", value_parser = parse_source)]
    sources: Vec<(ListId, String)>,
}

fn parse_source(s: &str) -> Result<(ListId, String), String> {
    let (id, column) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LIST_ID=COLUMN, got `{}`", s))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid list id `{}`", id))?;
    Ok((id, column.trim().to_string()))
}

struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// `None` on end of input.
    async fn ask(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        println!("{}", label);
        Ok(self.lines.next_line().await?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = args.api_url {
        config.api_url = url;
    }
    if args.token.is_some() {
        config.token = args.token;
    }

    let api = VocabApi::new(&config).context("failed to build HTTP client")?;
    tracing::info!(url = api.base_url(), "using vocabulary backend");
    let state = AppState::new(api);
    let mut prompt = Prompt::new();

    let mut list_ids = args.lists;
    if list_ids.is_empty() {
        let lists = commands::list_vocab_lists(&state).await?;
        if lists.is_empty() {
            println!("No vocabulary lists found.");
            return Ok(());
        }
        for list in &lists {
            println!("  [{}] {}", list.id, list.name);
        }
        let Some(line) = prompt.ask("Lists to quiz on (ids, separated by spaces):").await? else {
            return Ok(());
        };
        list_ids = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter_map(|s| s.parse().ok())
            .collect();
    }

    for id in &list_ids {
        commands::toggle_list(*id, &state).await?;
    }
    for (id, column) in args.sources {
        commands::choose_source(id, column, &state).await?;
    }

    let mut status = match commands::start_quiz(&state).await {
        Ok(status) => status,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    loop {
        match status.state {
            QuizState::InProgress => {
                if !ask_question(&state, &status, &mut prompt).await? {
                    return Ok(());
                }
                status = commands::quiz_status(&state).await;
            }
            QuizState::Finished => {
                print_report(&state).await?;
                let again = prompt.ask("Again? [y/N]").await?;
                if !matches!(again.as_deref().map(str::trim), Some("y" | "Y")) {
                    return Ok(());
                }
                status = commands::restart_quiz(&state).await?;
            }
            QuizState::Selecting => return Ok(()),
        }
    }
}

/// Returns false when input ended.
async fn ask_question(
    state: &AppState,
    status: &QuizStatus,
    prompt: &mut Prompt,
) -> anyhow::Result<bool> {
    let Some(question) = &status.current else {
        return Ok(true);
    };

    println!(
        "\n[{}/{}] {}: {} -> {}",
        status.position,
        status.total,
        question.list_name,
        question.source_column,
        question.target_column
    );
    let Some(answer) = prompt.ask(&question.prompt).await? else {
        return Ok(false);
    };

    if let Some(outcome) = commands::submit_answer(answer, state).await? {
        if outcome.result.is_correct {
            println!("Correct!");
        } else {
            println!("Wrong, correct: {}", outcome.question.answer);
        }
    }
    Ok(true)
}

async fn print_report(state: &AppState) -> anyhow::Result<()> {
    let report = commands::quiz_report(state).await?;
    println!("\nQuiz finished: {} of {} correct ({}%)", report.score, report.total, report.percent);
    for (i, item) in report.items.iter().enumerate() {
        let given = if item.given.trim().is_empty() {
            "(empty)"
        } else {
            item.given.trim()
        };
        let verdict = if item.is_correct {
            "ok".to_string()
        } else {
            format!("wrong ({})", item.question.answer)
        };
        println!(
            "{:>3}. {} | {} -> {} | {} | {} | {}",
            i + 1,
            item.question.list_name,
            item.question.source_column,
            item.question.target_column,
            item.question.prompt,
            given,
            verdict
        );
    }
    Ok(())
}
