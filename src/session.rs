// One end-to-end run: coin menu, question menu, headline fetch, model call,
// answer display and log append. Owns every error-to-message translation;
// only console failures and an aborted menu reach the caller.

use crate::config::AppConfig;
use crate::error::{ConsoleError, NewsError};
use crate::history::{self, InteractionLog};
use crate::llm::Answer;
use crate::menu::prompt_menu;
use crate::news::fetch_or_report;
use crate::progress;
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const NO_HEADLINES: &str = "No headlines found or API request failed.";
pub const EXIT_NOTICE: &str = "Exiting.";
const RULE_WIDTH: usize = 60;

/// Where headlines come from.
pub trait HeadlineSource {
    fn fetch_headlines(&self, coin: &str, limit: usize) -> Result<Vec<String>, NewsError>;
}

/// Where answers come from. Never fails: failures become `Answer::Degraded`.
pub trait AnswerSource {
    fn ask_model(&self, question: &str, headlines: &[String]) -> Answer;
}

/// How a run ended, short of an aborted menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The headline step came back empty; nothing was asked or logged.
    NoHeadlines { coin: String },
    Completed {
        coin: String,
        question_number: usize,
        answer: Answer,
        logged: bool,
    },
}

pub struct Session<'a, H, A> {
    config: &'a AppConfig,
    headlines: H,
    answers: A,
    log: InteractionLog,
    show_progress: bool,
}

impl<'a, H, A> Session<'a, H, A>
where
    H: HeadlineSource,
    A: AnswerSource,
{
    pub fn new(config: &'a AppConfig, headlines: H, answers: A) -> Self {
        Session {
            config,
            headlines,
            answers,
            log: InteractionLog::new(config.log_path.clone()),
            show_progress: false,
        }
    }

    /// Show a spinner on stderr while network calls are in flight.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<Outcome, ConsoleError>
    where
        R: BufRead,
        W: Write,
    {
        let coins = &self.config.coins;
        let coin_idx = prompt_menu(input, output, "Select a coin:", coins)?;
        let coin = coins[coin_idx - 1].as_str();

        let questions = self.config.questions_for(coin);
        let title = format!("Select a question about {coin}:");
        let question_number = prompt_menu(input, output, &title, &questions)?;
        let question = questions[question_number - 1].as_str();
        info!(coin, question_number, "selection made");

        let count = self.config.headline_count;
        writeln!(output, "\nFetching {count} recent headlines about {coin}…")?;
        let spinner = progress::spinner(self.show_progress, "Waiting for the news service");
        let headlines = fetch_or_report(&self.headlines, coin, count, output);
        spinner.finish_and_clear();
        let headlines = headlines?;

        if headlines.is_empty() {
            writeln!(output, "{NO_HEADLINES}")?;
            return Ok(Outcome::NoHeadlines {
                coin: coin.to_string(),
            });
        }

        writeln!(output, "Asking GPT, please wait…")?;
        let spinner = progress::spinner(self.show_progress, "Waiting for the model");
        let answer = self.answers.ask_model(question, &headlines);
        spinner.finish_and_clear();

        let rule = "-".repeat(RULE_WIDTH);
        writeln!(output, "\n{rule}")?;
        writeln!(output, "{coin} — {question}")?;
        writeln!(output, "{rule}")?;
        writeln!(output, "{}", answer.text())?;
        writeln!(output, "{rule}")?;

        let logged = match self.log.log_interaction(
            &history::timestamp_now(),
            coin,
            question_number,
            answer.text(),
        ) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, path = %self.log.path().display(), "log append failed");
                writeln!(output, "Could not write log file: {e}")?;
                false
            }
        };

        Ok(Outcome::Completed {
            coin: coin.to_string(),
            question_number,
            answer,
            logged,
        })
    }
}

/// Turn an aborted menu into the exit notice. `Ok(None)` means the user left
/// before the run finished; other console failures pass through.
pub fn settle<W: Write>(
    result: Result<Outcome, ConsoleError>,
    output: &mut W,
) -> Result<Option<Outcome>, ConsoleError> {
    match result {
        Ok(outcome) => Ok(Some(outcome)),
        Err(ConsoleError::Aborted) => {
            writeln!(output, "\n{EXIT_NOTICE}")?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
