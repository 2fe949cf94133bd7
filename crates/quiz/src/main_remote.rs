// Rust guideline compliant 2026-08-30

//! Time-complexity quiz entry point, remote variant.
//!
//! Fetches one pre-generated question batch from the question-supply
//! endpoint and plays it as a single pass ending in a final summary.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --bin complexity_quiz_remote -- https://example.net/.netlify/functions/generate-quiz
//! # or
//! QUIZ_SUPPLY_URL=... cargo run --bin complexity_quiz_remote
//! ```

mod adapters;
mod runner;

// Load remote_source directly so it only enters this binary's module tree.
#[path = "adapters/remote_source.rs"]
mod remote_source;

use adapters::console_view::ConsoleView;
use remote_source::RemoteSource;
use anyhow::Context as _;
use bank::{BankBuilder, BankConfig};
use domain::Language;
use session::{Mode, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let url = match std::env::args().nth(1) {
        Some(url) => url,
        None => std::env::var("QUIZ_SUPPLY_URL")
            .context("pass the supply endpoint URL as an argument or set QUIZ_SUPPLY_URL")?,
    };

    // Adopted banks take the batch as served (up to 50 from the endpoint);
    // the configured size only applies to locally built banks.
    let config = BankConfig::builder(50)
        .build()
        .context("failed to build bank config")?;
    let source = RemoteSource::new(url, BankBuilder::new(config));
    let view = ConsoleView::new();
    let mut session = Session::new(Mode::SinglePass);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    // Supplied snippets carry their own language; the flag only affects
    // locally generated bodies, which this variant never produces.
    runner::run_quiz(&mut session, &source, &view, Language::Python, &mut input).await
}
