use anyhow::{Result, bail};
use async_trait::async_trait;

use super::{Answer, Oracle};
use crate::consts::DEFAULT_API_URL;

/// Asks the public yes/no endpoint. One `GET`, no body, no auth,
/// no timeout and no retry.
pub struct YesNoOracle {
    url: String,
    client: reqwest::Client,
}

impl YesNoOracle {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url: url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform the round trip, surfacing every failure.
    pub async fn fetch(&self) -> Result<Answer> {
        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("answer endpoint error ({}): {}", status, text);
        }

        let answer: Answer = resp.json().await?;
        Ok(answer)
    }
}

#[async_trait]
impl Oracle for YesNoOracle {
    async fn resolve(&self) -> Answer {
        match self.fetch().await {
            Ok(answer) => {
                tracing::debug!(answer = %answer.answer, url = %self.url, "oracle answered");
                answer
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %self.url, "oracle unreachable");
                Answer::error()
            }
        }
    }
}
