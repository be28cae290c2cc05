// Chat-completion client. Builds the system/user prompt pair from the
// question and headlines, posts it to an OpenAI-compatible endpoint and
// returns a tagged `Answer` that is always displayable.

use crate::config::AppConfig;
use crate::error::ModelError;
use crate::session::AnswerSource;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const SYSTEM_PROMPT: &str = "You are a concise crypto news assistant. \
Answer the user's question using ONLY the context of the provided headlines. \
If the headlines lack relevant information, say so.";

/// Shown in place of an answer when the service rejects the call for
/// rate-limit or quota reasons.
pub const RATE_LIMIT_MESSAGE: &str =
    "OpenAI rate-limit or quota error. Check your API billing or wait for limits to reset.";

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl ApiErrorDetail {
    fn is_rate_limit(&self) -> bool {
        [self.kind.as_deref(), self.code.as_deref()]
            .into_iter()
            .flatten()
            .any(|tag| matches!(tag, "rate_limit_exceeded" | "insufficient_quota"))
    }
}

/// Why an answer had to be substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degradation {
    RateLimited,
    ServiceError,
}

/// Result of asking the model: either its text or a substitute message.
/// Both display and log the same way; the tag exists so callers can tell
/// them apart without reading the prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Model(String),
    Degraded {
        reason: Degradation,
        message: String,
    },
}

impl Answer {
    pub fn from_result(result: Result<String, ModelError>) -> Self {
        match result {
            Ok(text) => Answer::Model(text),
            Err(ModelError::RateLimited { .. }) => Answer::Degraded {
                reason: Degradation::RateLimited,
                message: RATE_LIMIT_MESSAGE.to_string(),
            },
            Err(e) => Answer::Degraded {
                reason: Degradation::ServiceError,
                message: format!("OpenAI API error: {e}"),
            },
        }
    }

    /// Text to show and log.
    pub fn text(&self) -> &str {
        match self {
            Answer::Model(text) => text,
            Answer::Degraded { message, .. } => message,
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Answer::Model(_))
    }
}

/// User turn: the question followed by one `- ` bullet per headline.
pub fn user_message(question: &str, headlines: &[String]) -> String {
    let bullets: Vec<String> = headlines.iter().map(|h| format!("- {h}")).collect();
    format!("Question: {question}\n\nHeadlines:\n{}", bullets.join("\n"))
}

/// Blocking client for the chat-completion endpoint.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl ChatClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        ChatClient {
            client,
            url: config.chat_url.clone(),
            api_key: config.credentials.openai_api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.timeout,
        }
    }

    /// Send one completion request and return the trimmed first choice.
    pub fn complete(&self, question: &str, headlines: &[String]) -> Result<String, ModelError> {
        let user = user_message(question, headlines);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(model = %self.model, headlines = headlines.len(), "requesting completion");
        let res = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .timeout(self.timeout)
            .send()?;

        let status = res.status();
        let text = res.text()?;
        if !status.is_success() {
            return Err(classify_failure(status, &text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(ModelError::EmptyChoice)?
            .message
            .content
            .unwrap_or_default();
        Ok(content.trim().to_string())
    }
}

impl AnswerSource for ChatClient {
    fn ask_model(&self, question: &str, headlines: &[String]) -> Answer {
        let result = self.complete(question, headlines);
        if let Err(e) = &result {
            warn!(error = %e, "completion request failed");
        }
        Answer::from_result(result)
    }
}

fn classify_failure(status: StatusCode, body: &str) -> ModelError {
    let detail = serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error);
    let rate_limited = status == StatusCode::TOO_MANY_REQUESTS
        || detail.as_ref().is_some_and(ApiErrorDetail::is_rate_limit);

    let message = match detail {
        Some(d) if !d.message.is_empty() => d.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };

    if rate_limited {
        ModelError::RateLimited {
            status: status.as_u16(),
            message,
        }
    } else {
        ModelError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
