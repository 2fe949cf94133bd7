// Rust guideline compliant 2026-08-30

//! Console adapter for the `QuizView` port.
//!
//! Prints questions, feedback, and summaries to stdout. Never fails; use a
//! custom implementation for a real UI.

use domain::QuizView;

/// `QuizView` adapter that renders to the terminal.
#[derive(Debug)]
pub struct ConsoleView;

impl ConsoleView {
    /// Create a new console view adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizView for ConsoleView {
    fn show_question(&self, number: usize, total: usize, snippet: &str, options: &[String]) {
        println!("\nQuestion {number} of {total}");
        println!("----------------------------------------");
        println!("{snippet}");
        println!("----------------------------------------");
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        println!("Pick 1-{} (q to quit):", options.len());
    }

    fn show_feedback(&self, correct: bool, answer: &str, explanation: &str) {
        if correct {
            println!("Correct! {explanation}");
        } else {
            println!("Wrong. The answer is {answer}. {explanation}");
        }
    }

    fn show_summary(&self, score: u32, attempted: u32) {
        println!("\nFinal score: {score} / {attempted}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}
