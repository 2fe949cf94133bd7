// Rust guideline compliant 2026-08-30

//! Adapters (secondary ports) shared by the quiz-play binaries.
//!
//! Each sub-module implements one hexagonal port trait. Variant-specific
//! adapters (local/remote sources, the Gemini model) are loaded directly
//! into the binary that needs them so no binary carries unused adapters.

pub mod console_view;
