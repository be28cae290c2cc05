// News-search client. One blocking GET per run against a NewsAPI-style
// `/v2/everything` endpoint; only article titles are kept.

use crate::config::AppConfig;
use crate::error::NewsError;
use crate::session::HeadlineSource;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Deserialize, Debug)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize, Debug)]
struct Article {
    #[serde(default)]
    title: Option<String>,
}

/// Error payload NewsAPI sends with non-2xx responses.
#[derive(Deserialize, Debug)]
struct NewsErrorBody {
    message: Option<String>,
}

/// Blocking client for the headline endpoint.
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    url: String,
    api_key: String,
    timeout: Duration,
}

impl NewsClient {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        NewsClient {
            client,
            url: config.news_url.clone(),
            api_key: config.credentials.news_api_key.clone(),
            timeout: config.timeout,
        }
    }

    fn transport(&self, err: reqwest::Error) -> NewsError {
        if err.is_timeout() {
            NewsError::Timeout(self.timeout)
        } else {
            NewsError::Transport(err)
        }
    }
}

impl HeadlineSource for NewsClient {
    fn fetch_headlines(&self, coin: &str, limit: usize) -> Result<Vec<String>, NewsError> {
        debug!(coin, limit, url = %self.url, "requesting headlines");
        let page_size = limit.to_string();
        let res = self
            .client
            .get(&self.url)
            .query(&[
                ("q", coin),
                ("language", "en"),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .map_err(|e| self.transport(e))?;

        let status = res.status();
        let body = res.text().map_err(|e| self.transport(e))?;
        if !status.is_success() {
            let body = serde_json::from_str::<NewsErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            return Err(NewsError::Status { status, body });
        }

        let titles = titles_from_body(&body, limit)?;
        debug!(count = titles.len(), "headlines received");
        Ok(titles)
    }
}

/// First `limit` article titles of a successful response body, in order.
/// Articles without a title are skipped.
fn titles_from_body(body: &str, limit: usize) -> Result<Vec<String>, NewsError> {
    let parsed: NewsResponse = serde_json::from_str(body)?;
    Ok(parsed
        .articles
        .into_iter()
        .filter_map(|a| a.title)
        .take(limit)
        .collect())
}

/// Fetch headlines, turning any failure into a printed diagnostic and an
/// empty list. Only a failing `out` is returned as an error.
pub fn fetch_or_report<S, W>(
    source: &S,
    coin: &str,
    limit: usize,
    out: &mut W,
) -> io::Result<Vec<String>>
where
    S: HeadlineSource + ?Sized,
    W: Write,
{
    match source.fetch_headlines(coin, limit) {
        Ok(titles) => Ok(titles),
        Err(e) => {
            warn!(error = %e, coin, "headline fetch failed");
            writeln!(out, "News API error: {e}")?;
            Ok(Vec::new())
        }
    }
}
