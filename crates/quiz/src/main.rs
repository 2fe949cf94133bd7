// Rust guideline compliant 2026-08-30

//! Time-complexity quiz entry point, local variant.
//!
//! Wires the session to the in-process bank builder and the console view
//! and runs an infinite quiz: the bank is rebuilt and reshuffled each time
//! it is exhausted, with the running score preserved.
//!
//! # Usage
//!
//! ```text
//! # Pick the snippet language (java, python, or c; default python)
//! RUST_LOG=info cargo run --bin complexity_quiz -- java
//! ```

mod adapters;
mod runner;

// Load local_source directly so it only enters this binary's module tree.
#[path = "adapters/local_source.rs"]
mod local_source;

use adapters::console_view::ConsoleView;
use local_source::LocalSource;
use anyhow::Context as _;
use bank::{BankBuilder, BankConfig};
use domain::Language;
use session::{Mode, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize the log facade before any async work.
    env_logger::init();

    let language = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<Language>()
            .with_context(|| format!("unknown language {arg:?} (expected java, python, or c)"))?,
        None => Language::Python,
    };

    // 100 questions per bank, OS-seeded shuffle. Set .seed(n) here for a
    // reproducible demo run.
    let config = BankConfig::builder(100)
        .build()
        .context("failed to build bank config")?;
    let source = LocalSource::new(BankBuilder::new(config));
    let view = ConsoleView::new();
    let mut session = Session::new(Mode::Infinite);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    runner::run_quiz(&mut session, &source, &view, language, &mut input).await
}
