//! Terminal front end: sends one generation request, shows the replies and
//! the recent history.
//!
//! Run with: cargo run --bin praise -- "孩子考试只考了10分，很沮丧" --intensity 8

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, Offset};
use clap::Parser;
use praise_kids::front_end::generate_and_record;
use praise_kids::history::{FileStore, HistoryCache};
use praise_kids::services::praise_api::PraiseApiClient;
use praise_kids::view;

#[derive(Debug, Parser)]
#[command(name = "praise", about = "用AI生成温暖的夸奖话语，让每个孩子都能感受到鼓励")]
struct Args {
    /// What the child said or what happened
    situation: Option<String>,

    /// Tone intensity, 1 (gentle) to 10 (enthusiastic)
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    intensity: u8,

    /// Base URL of the praise server
    #[arg(long, env = "PRAISE_SERVER_URL", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Directory holding the persisted history
    #[arg(long, env = "PRAISE_HISTORY_DIR", default_value = ".praise")]
    history_dir: PathBuf,

    /// Only print the stored history
    #[arg(long)]
    history: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let offset = Local::now().offset().fix();
    let mut history = HistoryCache::load(FileStore::new(&args.history_dir));

    println!("{}\n", view::TITLE);

    let situation = args.situation.as_deref().unwrap_or_default();
    if args.history || situation.trim().is_empty() {
        print!("{}", view::render_history(history.entries(), &offset));
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", view::LOADING);

    let client = PraiseApiClient::new(reqwest::Client::new(), &args.server);
    match generate_and_record(&client, &mut history, situation, args.intensity).await {
        Ok(replies) => println!("\n{}", view::render_replies(&replies)),
        Err(e) => {
            tracing::error!(error = %e, "generation request failed");
            eprintln!("{}", view::FAILURE);
            return Ok(ExitCode::FAILURE);
        }
    }

    print!("{}", view::render_history(history.entries(), &offset));

    Ok(ExitCode::SUCCESS)
}
