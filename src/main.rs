// Entrypoint for the CLI application.
// - `main` installs tracing and reports a failed `run` without a non-zero
//   status; `run` returns `anyhow::Result` and does the wiring: build the
//   config and clients, hand them to a `Session`, run it once on stdin/stdout.
// - Every termination path exits with status 0, including Ctrl-C and
//   end of input at a menu.

use anyhow::{Context, Result};
use crypto_news_cli::config::AppConfig;
use crypto_news_cli::llm::ChatClient;
use crypto_news_cli::news::NewsClient;
use crypto_news_cli::session::{settle, Outcome, Session, EXIT_NOTICE};
use crypto_news_cli::{http, telemetry};
use dialoguer::console::Term;
use std::io;
use tracing::{error, info};

fn main() {
    telemetry::init();
    if let Err(e) = run() {
        error!(error = %e, "run failed");
        eprintln!("Error: {e:#}");
    }
}

fn run() -> Result<()> {
    ctrlc::set_handler(|| {
        println!("\n{EXIT_NOTICE}");
        std::process::exit(0);
    })
    .context("Failed to install Ctrl+C handler")?;

    let config = AppConfig::from_env();
    let client = http::client(&config).context("Failed to build HTTP client")?;
    let news = NewsClient::new(client.clone(), &config);
    let chat = ChatClient::new(client, &config);
    let session = Session::new(&config, news, chat).with_progress(Term::stderr().is_term());

    // stdout stays unlocked so the Ctrl+C handler can still print.
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let result = session.run(&mut input, &mut output);
    match settle(result, &mut output)? {
        Some(Outcome::Completed { answer, logged, .. }) => {
            info!(model_answer = answer.is_model(), logged, "session completed");
        }
        Some(Outcome::NoHeadlines { coin }) => info!(coin = %coin, "no headlines"),
        None => info!("session aborted at a menu"),
    }
    Ok(())
}
