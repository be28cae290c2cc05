// Library root
// -----------
// Crypto news assistant: pick a coin and a canned question, pull a few
// recent headlines, ask a chat model to answer from them, print the answer
// and append it to `log.csv`. The binary (`main.rs`) only wires these
// modules to stdin/stdout.
//
// Module responsibilities:
// - `config`: fixed coin/question lists, endpoints and credentials.
// - `menu`: numbered line-based menu over any reader/writer.
// - `news`: headline fetch from the news-search API.
// - `llm`: prompt construction, chat-completion call, `Answer` tagging.
// - `history`: append-only CSV interaction log.
// - `session`: the end-to-end run and its error-to-message policy.
// - `http`, `progress`, `telemetry`: shared HTTP client, spinner, tracing.
pub mod config;
pub mod error;
pub mod history;
pub mod http;
pub mod llm;
pub mod menu;
pub mod news;
pub mod progress;
pub mod session;
pub mod telemetry;
