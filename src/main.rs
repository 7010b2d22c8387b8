use clap::Parser;
use qald_replay::client::QaClient;
use qald_replay::dataset::Dataset;
use qald_replay::error::HarnessError;
use qald_replay::present;
use qald_replay::session::{Command, Session, Target};
use qald_replay::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Replay QALD benchmark questions against a QA service, one per input line.
///
/// An empty line (or anything that is not an in-range index) dispatches the
/// next question in dataset order; a bare index dispatches that question
/// without advancing the sequence.
#[derive(Parser, Debug)]
#[command(name = "qald-replay")]
struct Args {
    /// Path to the QALD dataset JSON (overrides config).
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// QA service endpoint (overrides config).
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Report blocks go to stdout; logs stay on stderr so they can be piped apart
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"))
        .init();

    let args = Args::parse();
    let config = Config::load()?;

    let dataset_path = args
        .dataset
        .unwrap_or_else(|| config.harness.dataset_path.clone());
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.harness.endpoint.clone());
    let language = config.harness.language.clone();

    // Dataset load failure is fatal; there is no partially loaded state
    let dataset = Arc::new(Dataset::load(&dataset_path)?);
    log::info!(
        "Loaded {} questions from {}",
        dataset.len(),
        dataset_path.display()
    );
    log::info!("QA endpoint: {}", endpoint);

    let client = Arc::new(QaClient::new(endpoint, language.clone())?);
    let mut session = Session::new(dataset.len());

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    while let Some(line) = lines.next_line().await? {
        let command = Command::parse(&line, dataset.len());
        if command == Command::Sequential {
            println!("invalid index, falling back to sequential iteration");
        }

        // The cursor only moves here, before the dispatch task is spawned,
        // so overlapping dispatches never race on it.
        match session.decide(command) {
            Target::Exhausted => println!("No questions remaining"),
            Target::Dispatch { index, .. } => {
                let dataset = Arc::clone(&dataset);
                let client = Arc::clone(&client);
                let language = language.clone();
                tokio::spawn(async move {
                    dispatch_one(&dataset, &client, &language, index).await;
                });
            }
        }
    }

    log::info!("stdin closed, exiting");
    Ok(())
}

/// Resolve one dataset position, query the service and print the report.
/// Per-call failures are printed and swallowed; the loop keeps accepting
/// commands.
async fn dispatch_one(dataset: &Dataset, client: &QaClient, language: &str, index: usize) {
    let record = match dataset.get(index) {
        Some(record) => record,
        // Session::decide only hands out in-range indices
        None => return,
    };

    let question = match record.text_in(language) {
        Some(text) => text.to_string(),
        None => {
            let err = HarnessError::MissingLanguage {
                id: record.id_display(),
                lang: language.to_string(),
            };
            print!("{}", present::render_failure(record, &err));
            return;
        }
    };

    log::debug!("dispatching question {} (id {})", index, record.id_display());

    match client.ask(&question).await {
        Ok(response) => print!("{}", present::render_report(record, &question, &response)),
        Err(err) => {
            log::warn!("dispatch for question {} failed: {}", index, err);
            print!("{}", present::render_failure(record, &err));
        }
    }
}
