// Rust guideline compliant 2026-08-30

//! Question-supply entry point.
//!
//! One-shot stand-in for the hosted supply function: reads the API key from
//! the environment, runs a single generation through Gemini, and prints the
//! HTTP-shaped reply to stdout.
//!
//! # Usage
//!
//! ```text
//! GEMINI_API_KEY=... RUST_LOG=info cargo run --bin complexity_quiz_supply
//! ```

// Load gemini_model directly so this binary carries no play-mode adapters.
#[path = "adapters/gemini_model.rs"]
mod gemini_model;

use anyhow::Context as _;
use gemini_model::GeminiModel;
use supply::{QuizGenerator, respond};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A missing key still produces a well-formed 500 reply.
    let result = match GeminiModel::from_env() {
        Ok(model) => QuizGenerator::new(model).generate().await,
        Err(error) => Err(error),
    };

    let reply = respond(result);
    println!("status: {}", reply.status);
    println!(
        "{}",
        serde_json::to_string_pretty(&reply.body).context("failed to serialize reply body")?
    );
    Ok(())
}
