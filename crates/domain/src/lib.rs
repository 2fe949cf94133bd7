// Rust guideline compliant 2026-08-28

//! Shared domain types for the complexity-quiz engine.
//!
//! Defines `ComplexityClass`, `Language`, `TemplateKind`, `NameSet`,
//! `LoopParams`, `QuestionTemplate`, `Question`, `QuizBank`, the wire record
//! `SuppliedQuestion`, and the hexagonal port traits `QuestionSource` and
//! `QuizView`. All engine components depend on this crate; no component
//! crate is imported here.

use serde::{Deserialize, Serialize};

/// Asymptotic growth-rate category used as the ground-truth label of a question.
///
/// Only the first six classes are templated locally; `Exponential` and
/// `Factorial` appear as distractor labels in the local variant and as real
/// categories in server-supplied questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityClass {
    /// `O(1)`
    Constant,
    /// `O(log N)`
    Logarithmic,
    /// `O(N)`
    Linear,
    /// `O(N log N)`
    Linearithmic,
    /// `O(N^2)`
    Quadratic,
    /// `O(N^3)`
    Cubic,
    /// `O(2^N)`
    Exponential,
    /// `O(N!)`
    Factorial,
}

impl ComplexityClass {
    /// Canonical display label, used verbatim as the correct-answer string.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log N)",
            Self::Linear => "O(N)",
            Self::Linearithmic => "O(N log N)",
            Self::Quadratic => "O(N^2)",
            Self::Cubic => "O(N^3)",
            Self::Exponential => "O(2^N)",
            Self::Factorial => "O(N!)",
        }
    }

    /// Parse a label case-insensitively (`"O(log n)"` == `"O(log N)"`).
    ///
    /// Returns `None` for anything that is not one of the eight canonical
    /// labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        const ALL: [ComplexityClass; 8] = [
            ComplexityClass::Constant,
            ComplexityClass::Logarithmic,
            ComplexityClass::Linear,
            ComplexityClass::Linearithmic,
            ComplexityClass::Quadratic,
            ComplexityClass::Cubic,
            ComplexityClass::Exponential,
            ComplexityClass::Factorial,
        ];
        let trimmed = label.trim();
        ALL.into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(trimmed))
    }
}

impl std::fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Target syntax of a rendered snippet.
///
/// Lowercase on the wire, matching the supply-service response format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Python,
    C,
}

impl Language {
    /// Lowercase tag, identical to the wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Python => "python",
            Self::C => "c",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three language tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0}")]
pub struct ParseLanguageError(String);

impl std::str::FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "python" => Ok(Self::Python),
            "c" => Ok(Self::C),
            other => Err(ParseLanguageError(other.to_owned())),
        }
    }
}

/// Snippet archetype. Each kind renders semantically equivalent control flow
/// in every [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Fixed-index array access, `O(1)`.
    ConstantIndex,
    /// Straight-line arithmetic, `O(1)`.
    ConstantArith,
    /// Loop counter multiplied by a constant base, `O(log N)`.
    LogMultiply,
    /// Single pass over the input, `O(N)`.
    LinearScan,
    /// Two sequential linear loops, still `O(N)`.
    LinearSequential,
    /// Linear outer loop with a logarithmic inner loop, `O(N log N)`.
    Linearithmic,
    /// Full nested loop, `O(N^2)`.
    QuadraticGrid,
    /// Triangular nested loop, `O(N^2)`.
    QuadraticTriangular,
    /// Triple nested loop, `O(N^3)`.
    CubicGrid,
}

/// Three generated identifiers attached to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    /// Function name (may carry a `get`/`run` prefix).
    pub function: String,
    /// Scalar variable name.
    pub scalar: String,
    /// Collection name (carries a `List` suffix).
    pub collection: String,
}

/// Class-dependent randomized literals substituted into a snippet.
///
/// Ranges preserve the labeled asymptotic class: bases are always >= 2,
/// steps and multipliers are positive constants, never input-sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopParams {
    /// Linear classes: step in `[1, 3]`, multiplier in `[1, 3]`.
    Linear { step: u32, multiplier: u32 },
    /// Logarithmic class: base in `[2, 3]`.
    Logarithmic { base: u32 },
    /// Linearithmic class: base in `[2, 3]`, start offset in `[0, 4]`.
    Linearithmic { base: u32, offset: u32 },
    /// All other classes carry no loop literals.
    Empty,
}

/// Hand-authored archetype definition: correct class, the four answer
/// options presented with it, and a one-sentence explanation.
///
/// Invariant: exactly one entry of `options` equals `class.label()`.
/// Defined at process start, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub kind: TemplateKind,
    pub class: ComplexityClass,
    pub options: [&'static str; 4],
    pub explanation: &'static str,
}

/// Where a question's snippet text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    /// Local variant: snippet rendered lazily at display time by the
    /// template engine.
    Generated {
        kind: TemplateKind,
        names: NameSet,
        params: LoopParams,
    },
    /// Remote variant: the server supplied the literal snippet text.
    Supplied { language: Language, code: String },
}

/// One materialized bank entry.
///
/// Invariant: `options` holds four pairwise-distinct strings and exactly one
/// equals `answer`. Enforced at bank-construction time, not re-checked at
/// answer time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Unique identifier (UUID v4-compatible random bytes).
    pub id: uuid::Uuid,
    /// Correct-answer label; option matching is exact and case-sensitive.
    pub answer: String,
    /// The four presented options.
    pub options: Vec<String>,
    /// One-sentence explanation shown with feedback.
    pub explanation: String,
    /// Snippet source.
    pub body: QuestionBody,
}

/// Ordered pool of materialized questions for one play-through.
///
/// Rebuilt fresh each time the session exhausts or restarts; ordering is
/// randomized at build time and otherwise insignificant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizBank {
    pub questions: Vec<Question>,
}

impl QuizBank {
    /// Number of questions in the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// `true` when the bank holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index`, if within bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

/// Wire record for one server-supplied question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppliedQuestion {
    /// Correct Big-O label, e.g. `"O(N^2)"`.
    pub complexity: String,
    /// Language of `code`.
    pub language: Language,
    /// Complete snippet text.
    pub code: String,
    /// Exactly four unique strings including `complexity`.
    pub options: Vec<String>,
    /// One-sentence explanation.
    pub explanation: String,
}

/// Errors from the `QuestionSource` hexagonal port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The fetch failed or returned a non-success status.
    #[error("transport failure: {reason}")]
    Transport {
        /// Human-readable description.
        reason: String,
    },
    /// The response did not parse as a non-empty question array.
    #[error("malformed question payload: {reason}")]
    Malformed {
        /// Human-readable description.
        reason: String,
    },
    /// A question violated the option invariant.
    #[error("question integrity violation: {reason}")]
    Integrity {
        /// Human-readable description.
        reason: String,
    },
}

/// Hexagonal port: supplies a fresh `QuizBank` on demand.
///
/// The session depends exclusively on this trait -- never on a concrete
/// adapter. The local adapter never suspends; the remote adapter performs
/// exactly one request/response cycle per call, with no retry.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait QuestionSource {
    /// Build or fetch a fresh bank.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] when the fetch fails,
    /// [`SourceError::Malformed`] when the payload is not a non-empty
    /// question array, or [`SourceError::Integrity`] when a question
    /// violates the option invariant.
    async fn load_bank(&self) -> Result<QuizBank, SourceError>;
}

/// Hexagonal port: presentation sink for the quiz runner.
///
/// The core is invocable without any particular rendering technology;
/// implementations are thin I/O glue and must not fail.
pub trait QuizView {
    /// Render question `number` of `total` with its snippet and options.
    fn show_question(&self, number: usize, total: usize, snippet: &str, options: &[String]);

    /// Render feedback for the locked-in selection.
    fn show_feedback(&self, correct: bool, answer: &str, explanation: &str);

    /// Render the terminal summary (score out of questions attempted).
    fn show_summary(&self, score: u32, attempted: u32);

    /// Render a terminal, non-retrying error message.
    fn show_error(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn labels_round_trip() {
        for class in [
            ComplexityClass::Constant,
            ComplexityClass::Logarithmic,
            ComplexityClass::Linear,
            ComplexityClass::Linearithmic,
            ComplexityClass::Quadratic,
            ComplexityClass::Cubic,
            ComplexityClass::Exponential,
            ComplexityClass::Factorial,
        ] {
            assert_eq!(ComplexityClass::from_label(class.label()), Some(class));
        }
    }

    #[test]
    fn from_label_is_case_insensitive() {
        assert_eq!(
            ComplexityClass::from_label("o(log n)"),
            Some(ComplexityClass::Logarithmic)
        );
        assert_eq!(
            ComplexityClass::from_label(" O(N^2) "),
            Some(ComplexityClass::Quadratic)
        );
        assert_eq!(ComplexityClass::from_label("O(N^4)"), None);
    }

    #[test]
    fn language_parse_and_display() {
        assert_eq!("java".parse::<Language>(), Ok(Language::Java));
        assert_eq!("Python".parse::<Language>(), Ok(Language::Python));
        assert_eq!("C".parse::<Language>(), Ok(Language::C));
        assert!("rust".parse::<Language>().is_err());
        assert_eq!(Language::Python.to_string(), "python");
    }

    #[test]
    fn language_wire_format_is_lowercase() {
        let json = serde_json::to_string(&Language::Java).unwrap();
        assert_eq!(json, "\"java\"");
        let back: Language = serde_json::from_str("\"c\"").unwrap();
        assert_eq!(back, Language::C);
    }

    #[test]
    fn supplied_question_deserializes() {
        let raw = r#"{
            "complexity": "O(N)",
            "language": "python",
            "code": "def f(xs):\n    return sum(xs)",
            "options": ["O(1)", "O(N)", "O(N^2)", "O(log N)"],
            "explanation": "A single pass over the input."
        }"#;
        let q: SuppliedQuestion = serde_json::from_str(raw).unwrap();
        assert_eq!(q.complexity, "O(N)");
        assert_eq!(q.language, Language::Python);
        assert_eq!(q.options.len(), 4);
    }

    #[test]
    fn bank_accessors() {
        let bank = QuizBank::default();
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
        assert!(bank.get(0).is_none());
    }

    #[test]
    fn source_error_messages() {
        let e = SourceError::Transport {
            reason: "connection refused".to_owned(),
        };
        assert_eq!(e.to_string(), "transport failure: connection refused");
        let e = SourceError::Malformed {
            reason: "empty array".to_owned(),
        };
        assert_eq!(e.to_string(), "malformed question payload: empty array");
    }

    /// Verify that a minimal `QuestionSource` implementation compiles and
    /// returns its bank.
    #[tokio::test]
    async fn question_source_minimal_impl() {
        struct FixedSource {
            bank: QuizBank,
        }

        impl QuestionSource for FixedSource {
            async fn load_bank(&self) -> Result<QuizBank, SourceError> {
                Ok(self.bank.clone())
            }
        }

        let question = Question {
            id: uuid::Uuid::new_v4(),
            answer: "O(1)".to_owned(),
            options: vec![
                "O(1)".to_owned(),
                "O(N)".to_owned(),
                "O(log N)".to_owned(),
                "O(N^2)".to_owned(),
            ],
            explanation: "Fixed-index access.".to_owned(),
            body: QuestionBody::Supplied {
                language: Language::C,
                code: "int first(int xs[]) { return xs[0]; }".to_owned(),
            },
        };
        let source = FixedSource {
            bank: QuizBank {
                questions: vec![question],
            },
        };
        let bank = source.load_bank().await.unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get(0).unwrap().answer, "O(1)");
    }

    /// Verify that a minimal `QuizView` implementation compiles and records
    /// every call.
    #[test]
    fn quiz_view_minimal_impl() {
        struct RecordingView {
            events: RefCell<Vec<String>>,
        }

        impl QuizView for RecordingView {
            fn show_question(
                &self,
                number: usize,
                total: usize,
                _snippet: &str,
                options: &[String],
            ) {
                self.events.borrow_mut().push(format!(
                    "question {number}/{total} ({} options)",
                    options.len()
                ));
            }

            fn show_feedback(&self, correct: bool, _answer: &str, _explanation: &str) {
                self.events.borrow_mut().push(format!("feedback {correct}"));
            }

            fn show_summary(&self, score: u32, attempted: u32) {
                self.events
                    .borrow_mut()
                    .push(format!("summary {score}/{attempted}"));
            }

            fn show_error(&self, message: &str) {
                self.events.borrow_mut().push(format!("error {message}"));
            }
        }

        let view = RecordingView {
            events: RefCell::new(vec![]),
        };
        view.show_question(1, 9, "return 0;", &["O(1)".to_owned()]);
        view.show_feedback(true, "O(1)", "constant");
        view.show_summary(1, 1);
        view.show_error("boom");
        assert_eq!(view.events.borrow().len(), 4);
    }
}
