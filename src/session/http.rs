//! Session store that talks to a remote tabdeck host over HTTP.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{SessionRecord, SessionStore, SessionStoreError};

/// Reads and writes the record at `{base_url}/api/session`.
#[derive(Debug, Clone)]
pub struct HttpSessionStore {
    client: reqwest::Client,
    url: String,
}

impl HttpSessionStore {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}/api/session", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SessionStore for HttpSessionStore {
    async fn load(&self) -> Result<Option<SessionRecord>, SessionStoreError> {
        let response = self.client.get(&self.url).send().await?;
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => {
                return Err(SessionStoreError::Unavailable(format!(
                    "GET {} returned {}",
                    self.url, status
                )));
            }
            _ => {}
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_slice::<Option<SessionRecord>>(&body)?)
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        self.client
            .put(&self.url)
            .json(record)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
