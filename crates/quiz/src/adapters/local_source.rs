// Rust guideline compliant 2026-08-30

//! Local adapter for the `QuestionSource` port.
//!
//! Builds banks in-process with the template catalog; no network involved.

use bank::{BankBuilder, BankError};
use domain::{QuestionSource, QuizBank, SourceError};

/// `QuestionSource` adapter backed by the in-process bank builder.
#[derive(Debug)]
pub struct LocalSource {
    builder: BankBuilder,
}

impl LocalSource {
    /// Wrap a configured builder.
    #[must_use]
    pub fn new(builder: BankBuilder) -> Self {
        Self { builder }
    }
}

impl QuestionSource for LocalSource {
    async fn load_bank(&self) -> Result<QuizBank, SourceError> {
        self.builder.build().map_err(|error| match error {
            BankError::Integrity { reason } => SourceError::Integrity { reason },
            other => SourceError::Malformed {
                reason: other.to_string(),
            },
        })
    }
}
