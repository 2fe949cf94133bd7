// Rust guideline compliant 2026-08-30

//! Remote adapter for the `QuestionSource` port.
//!
//! Fetches a pre-generated question batch over HTTP and hands it to the
//! bank builder for validation and a single shuffle.

use bank::{BankBuilder, BankError};
use domain::{QuestionSource, QuizBank, SourceError, SuppliedQuestion};

/// `QuestionSource` adapter that fetches question batches from the
/// question-supply endpoint.
#[derive(Debug)]
pub struct RemoteSource {
    client: reqwest::Client,
    url: String,
    builder: BankBuilder,
}

impl RemoteSource {
    /// Point the adapter at a supply endpoint.
    #[must_use]
    pub fn new(url: String, builder: BankBuilder) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            builder,
        }
    }
}

impl QuestionSource for RemoteSource {
    async fn load_bank(&self) -> Result<QuizBank, SourceError> {
        log::debug!("remote_source.fetch: url={}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                reason: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Transport {
                reason: format!("supply endpoint returned status {status}"),
            });
        }
        let records: Vec<SuppliedQuestion> =
            response.json().await.map_err(|e| SourceError::Malformed {
                reason: e.to_string(),
            })?;
        self.builder.adopt(records).map_err(|error| match error {
            BankError::Integrity { reason } => SourceError::Integrity { reason },
            other => SourceError::Malformed {
                reason: other.to_string(),
            },
        })
    }
}
