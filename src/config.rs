// Runtime configuration. Built once in `main` and handed to every component
// by reference; nothing else in the crate reads the environment.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const COINS: [&str; 5] = ["Bitcoin", "Ethereum", "Solana", "Dogecoin", "Cardano"];

/// Question templates; `{coin}` is replaced with the selected coin name.
pub const QUESTION_TEMPLATES: [&str; 3] = [
    "What’s driving the price movement of {coin}?",
    "Are there any red flags about {coin} right now?",
    "Has {coin} announced anything about scaling or security improvements?",
];

pub const NEWS_URL: &str = "https://newsapi.org/v2/everything";
pub const CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-4o";
pub const HEADLINE_COUNT: usize = 5;
pub const MAX_TOKENS: u32 = 250;
pub const TEMPERATURE: f32 = 0.7;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const LOG_FILE: &str = "log.csv";

const NEWS_KEY_PLACEHOLDER: &str = "Insert NewsAPI key";
const OPENAI_KEY_PLACEHOLDER: &str = "Insert OpenAI API Key";

/// The two static API keys. `Debug` never prints them.
#[derive(Clone)]
pub struct Credentials {
    pub news_api_key: String,
    pub openai_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("news_api_key", &"<redacted>")
            .field("openai_api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub coins: Vec<String>,
    pub question_templates: Vec<String>,
    pub news_url: String,
    pub chat_url: String,
    pub model: String,
    pub headline_count: usize,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
    pub log_path: PathBuf,
    pub credentials: Credentials,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            coins: COINS.iter().map(|c| c.to_string()).collect(),
            question_templates: QUESTION_TEMPLATES.iter().map(|q| q.to_string()).collect(),
            news_url: NEWS_URL.into(),
            chat_url: CHAT_URL.into(),
            model: MODEL.into(),
            headline_count: HEADLINE_COUNT,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            timeout: REQUEST_TIMEOUT,
            log_path: PathBuf::from(LOG_FILE),
            credentials: Credentials {
                news_api_key: NEWS_KEY_PLACEHOLDER.into(),
                openai_api_key: OPENAI_KEY_PLACEHOLDER.into(),
            },
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// `NEWS_API_KEY` and `OPENAI_API_KEY` supply the credentials;
    /// `NEWS_API_URL` and `OPENAI_API_URL` optionally override the endpoints.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("NEWS_API_KEY") {
            config.credentials.news_api_key = key;
        }
        if let Some(key) = non_empty("OPENAI_API_KEY") {
            config.credentials.openai_api_key = key;
        }
        if let Some(url) = non_empty("NEWS_API_URL") {
            config.news_url = url;
        }
        if let Some(url) = non_empty("OPENAI_API_URL") {
            config.chat_url = url;
        }
        config
    }

    /// Instantiate every question template for `coin`, in template order.
    pub fn questions_for(&self, coin: &str) -> Vec<String> {
        self.question_templates
            .iter()
            .map(|template| template.replace("{coin}", coin))
            .collect()
    }
}
