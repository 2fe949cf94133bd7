// Rust guideline compliant 2026-08-30

//! Console quiz runner.
//!
//! Drives a [`Session`] from a line-oriented input stream, rendering
//! questions through the `QuizView` port. Generated bodies are rendered by
//! the template engine at display time in the run's chosen language;
//! supplied bodies are shown verbatim.

use anyhow::Context as _;
use domain::{Language, Question, QuestionBody, QuizView};
use session::{Advance, Selection, Session, SessionError};
use std::io::BufRead;

/// Run one quiz to completion (or until the player quits).
///
/// Bank-load failures are surfaced once through `view.show_error` and end
/// the run; there is no automatic retry.
///
/// # Errors
///
/// Returns an error only on input stream failures or on a snippet render
/// failure, which indicates a bank that escaped validation.
pub async fn run_quiz<S, V>(
    session: &mut Session,
    source: &S,
    view: &V,
    language: Language,
    input: &mut impl BufRead,
) -> anyhow::Result<()>
where
    S: domain::QuestionSource,
    V: QuizView,
{
    if let Err(error) = session.start(source).await {
        view.show_error(&error.to_string());
        return Ok(());
    }

    loop {
        let question = session
            .current()
            .context("session presenting without a current question")?;
        let snippet = snippet_for(question, language)?;
        let (number, total) = session.position();
        view.show_question(number, total, &snippet, &question.options);

        let Some(choice) = read_choice(input, question.options.len())? else {
            view.show_summary(session.score(), session.attempted());
            return Ok(());
        };
        let option = session
            .current()
            .context("session presenting without a current question")?
            .options[choice]
            .clone();

        match session.select(&option) {
            Ok(Selection::Scored(feedback)) => {
                view.show_feedback(feedback.correct, &feedback.answer, &feedback.explanation);
            }
            Ok(Selection::Ignored) => {}
            Err(error) => {
                view.show_error(&error.to_string());
                return Ok(());
            }
        }

        match session.advance(source).await {
            Ok(Advance::Next | Advance::Recycled) => {}
            Ok(Advance::Finished(summary)) => {
                view.show_summary(summary.score, summary.attempted);
                return Ok(());
            }
            Err(error @ (SessionError::Source(_) | SessionError::EmptyBank)) => {
                view.show_error(&error.to_string());
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        }
    }
}

/// Snippet text for one question.
fn snippet_for(question: &Question, language: Language) -> anyhow::Result<String> {
    match &question.body {
        QuestionBody::Generated {
            kind,
            names,
            params,
        } => snippets::render(*kind, language, names, params)
            .context("validated bank produced an unrenderable question"),
        QuestionBody::Supplied { code, .. } => Ok(code.clone()),
    }
}

/// Read the next answer choice: `Ok(Some(index))` for a 1-based pick within
/// bounds, `Ok(None)` for quit or end of input. Anything else re-prompts.
fn read_choice(input: &mut impl BufRead, max: usize) -> anyhow::Result<Option<usize>> {
    loop {
        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n - 1)),
            _ => log::debug!("runner.input: ignoring {trimmed:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{QuestionSource, QuizBank, SourceError};
    use std::cell::RefCell;
    use std::io::Cursor;
    use uuid::Uuid;

    fn question(answer: &str, options: &[&str]) -> Question {
        Question {
            id: Uuid::new_v4(),
            answer: answer.to_owned(),
            options: options.iter().map(|s| (*s).to_owned()).collect(),
            explanation: "why".to_owned(),
            body: QuestionBody::Supplied {
                language: Language::Python,
                code: "print(1)".to_owned(),
            },
        }
    }

    struct FixedSource {
        bank: QuizBank,
    }

    impl QuestionSource for FixedSource {
        async fn load_bank(&self) -> Result<QuizBank, SourceError> {
            Ok(self.bank.clone())
        }
    }

    struct FailingSource;

    impl QuestionSource for FailingSource {
        async fn load_bank(&self) -> Result<QuizBank, SourceError> {
            Err(SourceError::Malformed {
                reason: "empty payload".to_owned(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingView {
        questions: RefCell<Vec<usize>>,
        feedback: RefCell<Vec<bool>>,
        summary: RefCell<Option<(u32, u32)>>,
        errors: RefCell<Vec<String>>,
    }

    impl QuizView for RecordingView {
        fn show_question(&self, number: usize, _total: usize, _snippet: &str, _options: &[String]) {
            self.questions.borrow_mut().push(number);
        }

        fn show_feedback(&self, correct: bool, _answer: &str, _explanation: &str) {
            self.feedback.borrow_mut().push(correct);
        }

        fn show_summary(&self, score: u32, attempted: u32) {
            *self.summary.borrow_mut() = Some((score, attempted));
        }

        fn show_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_owned());
        }
    }

    #[tokio::test]
    async fn single_pass_run_reaches_a_summary() {
        let source = FixedSource {
            bank: QuizBank {
                questions: vec![
                    question("O(1)", &["O(1)", "O(N)", "O(log N)", "O(N^2)"]),
                    question("O(N)", &["O(1)", "O(N)", "O(log N)", "O(N^2)"]),
                ],
            },
        };
        let view = RecordingView::default();
        let mut session = Session::new(session::Mode::SinglePass);
        // Pick option 1 (correct), then option 1 (wrong).
        let mut input = Cursor::new("1\n1\n");

        run_quiz(&mut session, &source, &view, Language::Python, &mut input)
            .await
            .unwrap();

        assert_eq!(*view.questions.borrow(), [1, 2]);
        assert_eq!(*view.feedback.borrow(), [true, false]);
        assert_eq!(*view.summary.borrow(), Some((1, 2)));
        assert!(view.errors.borrow().is_empty());
    }

    #[tokio::test]
    async fn quit_surfaces_the_running_score() {
        let source = FixedSource {
            bank: QuizBank {
                questions: vec![
                    question("O(1)", &["O(1)", "O(N)", "O(log N)", "O(N^2)"]),
                    question("O(N)", &["O(1)", "O(N)", "O(log N)", "O(N^2)"]),
                ],
            },
        };
        let view = RecordingView::default();
        let mut session = Session::new(session::Mode::SinglePass);
        let mut input = Cursor::new("1\nq\n");

        run_quiz(&mut session, &source, &view, Language::Python, &mut input)
            .await
            .unwrap();

        assert_eq!(*view.summary.borrow(), Some((1, 1)));
    }

    #[tokio::test]
    async fn invalid_input_is_ignored_until_a_valid_pick() {
        let source = FixedSource {
            bank: QuizBank {
                questions: vec![question("O(1)", &["O(1)", "O(N)", "O(log N)", "O(N^2)"])],
            },
        };
        let view = RecordingView::default();
        let mut session = Session::new(session::Mode::SinglePass);
        let mut input = Cursor::new("0\n9\nbanana\n1\n");

        run_quiz(&mut session, &source, &view, Language::Python, &mut input)
            .await
            .unwrap();

        assert_eq!(*view.feedback.borrow(), [true]);
        assert_eq!(*view.summary.borrow(), Some((1, 1)));
    }

    #[tokio::test]
    async fn load_failure_is_shown_once_and_ends_the_run() {
        let view = RecordingView::default();
        let mut session = Session::new(session::Mode::SinglePass);
        let mut input = Cursor::new("1\n");

        run_quiz(
            &mut session,
            &FailingSource,
            &view,
            Language::Python,
            &mut input,
        )
        .await
        .unwrap();

        assert_eq!(view.errors.borrow().len(), 1);
        assert!(view.questions.borrow().is_empty(), "never presents");
        assert_eq!(session.phase(), session::Phase::Idle);
    }
}
