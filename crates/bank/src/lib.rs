// Rust guideline compliant 2026-08-29

//! Quiz Bank Builder -- assembles the ordered question pool for one
//! play-through.
//!
//! Entry points: [`BankBuilder::build`] (local variant: cycle the template
//! catalog, materialize with fresh names/params, double-shuffle) and
//! [`BankBuilder::adopt`] (remote variant: validate server-supplied records,
//! shuffle once). Configuration via [`BankConfig::builder`].

mod catalog;

pub use catalog::CATALOG;

use domain::{Question, QuestionBody, QuizBank, SuppliedQuestion};
use namegen::NameGen;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use std::cell::RefCell;

// ---------------------------------------------------------------------------
// BankError
// ---------------------------------------------------------------------------

/// Errors that can occur during bank construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    /// The supplied configuration is invalid.
    #[error("invalid bank configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The remote batch parsed to an empty array.
    #[error("supplied question batch is empty")]
    EmptyBatch,
    /// A question violated the option invariant.
    #[error("question integrity violation: {reason}")]
    Integrity {
        /// Human-readable description of the violation.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// BankConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`BankBuilder`].
///
/// Construct via [`BankConfig::builder`].
#[derive(Debug)]
pub struct BankConfig {
    /// Number of questions per locally built bank.
    pub size: usize,
    /// Optional RNG seed for reproducible banks. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Builder for [`BankConfig`].
///
/// Obtain via [`BankConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct BankConfigBuilder {
    size: usize,
    seed: Option<u64>,
}

impl BankConfig {
    /// Create a builder. `size` is the only required parameter.
    ///
    /// Default values: `seed = None`.
    #[must_use]
    pub fn builder(size: usize) -> BankConfigBuilder {
        BankConfigBuilder { size, seed: None }
    }
}

impl BankConfigBuilder {
    /// Fix the RNG seed for deterministic banks (useful in tests).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InvalidConfig`] when `size` is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<BankConfig, BankError> {
        if self.size == 0 {
            return Err(BankError::InvalidConfig {
                reason: "size must be >= 1".to_owned(),
            });
        }
        Ok(BankConfig {
            size: self.size,
            seed: self.seed,
        })
    }
}

// ---------------------------------------------------------------------------
// Shuffle
// ---------------------------------------------------------------------------

/// Uniform Fisher-Yates shuffle: for index `i` from `len - 1` down to 1,
/// swap element `i` with element `j`, `j` drawn uniformly from `[0, i]`.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

// ---------------------------------------------------------------------------
// BankBuilder
// ---------------------------------------------------------------------------

/// Builds fresh question banks from the template catalog or from
/// server-supplied records.
///
/// Holds its own RNG for shuffling/ids and a [`NameGen`] for per-question
/// names and loop parameters; both are seeded from the config so a seeded
/// builder is fully reproducible.
#[derive(Debug)]
pub struct BankBuilder {
    config: BankConfig,
    /// Interior mutability required because all public methods take `&self`.
    rng: RefCell<StdRng>,
    names: NameGen,
}

impl BankBuilder {
    /// Create a new builder from `config`.
    ///
    /// Seeds both RNG streams from `config.seed` if set, otherwise from the OS.
    #[must_use]
    pub fn new(config: BankConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let names = NameGen::new(config.seed);
        Self {
            config,
            rng: RefCell::new(rng),
            names,
        }
    }

    /// Build one bank of `config.size` questions from the catalog.
    ///
    /// Template indices cycle through the catalog (`i % 9`) to reach the
    /// requested size, the index list is shuffled, each slot is materialized
    /// with a fresh name set, loop parameters, and its own option order, and
    /// the finished sequence is shuffled a second time. Two independent
    /// passes avoid visible clustering of same-class questions.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::Integrity`] if a materialized question violates
    /// the option invariant (unreachable with the shipped catalog; the check
    /// guards hand-edited templates).
    pub fn build(&self) -> Result<QuizBank, BankError> {
        let mut rng = self.rng.borrow_mut();

        let mut indices: Vec<usize> = (0..self.config.size).map(|i| i % CATALOG.len()).collect();
        shuffle(&mut *rng, &mut indices);

        let mut questions = Vec::with_capacity(self.config.size);
        for index in indices {
            let template = &CATALOG[index];
            // Present options in a per-question order; the answer must not
            // sit at a fixed slot per template.
            let mut options: Vec<String> =
                template.options.iter().map(|s| (*s).to_owned()).collect();
            shuffle(&mut *rng, &mut options);
            let question = Question {
                id: next_id(&mut rng),
                answer: template.class.label().to_owned(),
                options,
                explanation: template.explanation.to_owned(),
                body: QuestionBody::Generated {
                    kind: template.kind,
                    names: self.names.name_set(),
                    params: self.names.loop_params(template.class),
                },
            };
            validate(&question)?;
            questions.push(question);
        }

        shuffle(&mut *rng, &mut questions);
        log::debug!("bank.build: size={}", questions.len());
        Ok(QuizBank { questions })
    }

    /// Adopt a batch of server-supplied records into a bank.
    ///
    /// Validates the batch shape (non-empty) and every record's option
    /// invariant, reorders each record's options, then shuffles the result
    /// once.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::EmptyBatch`] for an empty batch, or
    /// [`BankError::Integrity`] for a record with a blank snippet, a
    /// non-four or duplicated option list, or options that do not contain
    /// the record's complexity label exactly once.
    pub fn adopt(&self, records: Vec<SuppliedQuestion>) -> Result<QuizBank, BankError> {
        if records.is_empty() {
            return Err(BankError::EmptyBatch);
        }

        let mut rng = self.rng.borrow_mut();
        let mut questions = Vec::with_capacity(records.len());
        for record in records {
            if record.code.trim().is_empty() {
                return Err(BankError::Integrity {
                    reason: format!("blank snippet for {}", record.complexity),
                });
            }
            let mut options = record.options;
            shuffle(&mut *rng, &mut options);
            let question = Question {
                id: next_id(&mut rng),
                answer: record.complexity,
                options,
                explanation: record.explanation,
                body: QuestionBody::Supplied {
                    language: record.language,
                    code: record.code,
                },
            };
            validate(&question)?;
            questions.push(question);
        }

        shuffle(&mut *rng, &mut questions);
        log::debug!("bank.adopt: size={}", questions.len());
        Ok(QuizBank { questions })
    }
}

/// Build a UUID from raw random bytes (no v4 fast-path needed) so seeded
/// builders stay reproducible.
fn next_id(rng: &mut StdRng) -> uuid::Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Construction-time option-invariant check: four pairwise-distinct options,
/// exactly one equal to the answer label. A violation here would otherwise
/// surface as a silently unscoreable question at play time.
fn validate(question: &Question) -> Result<(), BankError> {
    if question.options.len() != 4 {
        return Err(BankError::Integrity {
            reason: format!(
                "expected 4 options, got {} for {}",
                question.options.len(),
                question.answer
            ),
        });
    }
    for (i, a) in question.options.iter().enumerate() {
        for b in &question.options[i + 1..] {
            if a == b {
                return Err(BankError::Integrity {
                    reason: format!("duplicate option {a} for {}", question.answer),
                });
            }
        }
    }
    let hits = question
        .options
        .iter()
        .filter(|option| **option == question.answer)
        .count();
    if hits != 1 {
        return Err(BankError::Integrity {
            reason: format!(
                "options must contain the answer {} exactly once, found {hits}",
                question.answer
            ),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Language, TemplateKind};

    fn supplied(complexity: &str, options: [&str; 4]) -> SuppliedQuestion {
        SuppliedQuestion {
            complexity: complexity.to_owned(),
            language: Language::Python,
            code: "def f(xs):\n    return xs[0]".to_owned(),
            options: options.iter().map(|s| (*s).to_owned()).collect(),
            explanation: "Fixed-index access.".to_owned(),
        }
    }

    #[test]
    fn config_rejects_zero_size() {
        let result = BankConfig::builder(0).build();
        assert!(matches!(result, Err(BankError::InvalidConfig { .. })));
    }

    #[test]
    fn built_bank_has_exactly_n_questions() {
        let builder = BankBuilder::new(BankConfig::builder(100).seed(1).build().unwrap());
        let bank = builder.build().unwrap();
        assert_eq!(bank.len(), 100);
    }

    #[test]
    fn template_usage_follows_cycling() {
        // 100 slots over 9 templates: the cycle assigns each kind 11 times
        // and one kind a 12th slot, regardless of shuffle order.
        let builder = BankBuilder::new(BankConfig::builder(100).seed(2).build().unwrap());
        let bank = builder.build().unwrap();
        let mut counts = std::collections::HashMap::new();
        for question in &bank.questions {
            let QuestionBody::Generated { kind, .. } = &question.body else {
                panic!("local banks hold generated bodies only");
            };
            *counts.entry(*kind).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 9);
        let mut twelves = 0;
        for (kind, count) in counts {
            assert!(
                count == 11 || count == 12,
                "{kind:?} used {count} times, expected 11 or 12"
            );
            if count == 12 {
                twelves += 1;
            }
        }
        assert_eq!(twelves, 1, "exactly one kind gets the extra slot");
    }

    #[test]
    fn size_nine_uses_each_template_once() {
        let builder = BankBuilder::new(BankConfig::builder(9).seed(3).build().unwrap());
        let bank = builder.build().unwrap();
        let mut kinds: Vec<TemplateKind> = bank
            .questions
            .iter()
            .map(|q| match &q.body {
                QuestionBody::Generated { kind, .. } => *kind,
                QuestionBody::Supplied { .. } => panic!("unexpected supplied body"),
            })
            .collect();
        kinds.sort_by_key(|k| format!("{k:?}"));
        kinds.dedup();
        assert_eq!(kinds.len(), 9, "each template must appear exactly once");
    }

    #[test]
    fn every_question_satisfies_the_option_invariant() {
        let builder = BankBuilder::new(BankConfig::builder(100).seed(4).build().unwrap());
        let bank = builder.build().unwrap();
        for question in &bank.questions {
            assert_eq!(question.options.len(), 4);
            let hits = question
                .options
                .iter()
                .filter(|option| **option == question.answer)
                .count();
            assert_eq!(hits, 1, "answer {} must appear once", question.answer);
        }
    }

    #[test]
    fn option_order_varies_within_a_template() {
        // 100 slots give each template 11+ questions; if options kept the
        // catalog order, the answer would sit at a memorizable fixed slot.
        let builder = BankBuilder::new(BankConfig::builder(100).seed(13).build().unwrap());
        let bank = builder.build().unwrap();
        let orders: Vec<&Vec<String>> = bank
            .questions
            .iter()
            .filter(|q| {
                matches!(
                    q.body,
                    QuestionBody::Generated {
                        kind: TemplateKind::ConstantIndex,
                        ..
                    }
                )
            })
            .map(|q| &q.options)
            .collect();
        assert!(orders.len() >= 11);
        assert!(
            orders.iter().any(|o| *o != orders[0]),
            "every ConstantIndex question presents options in the same order"
        );
    }

    #[test]
    fn adopt_reorders_options_per_record() {
        let builder = BankBuilder::new(BankConfig::builder(50).seed(14).build().unwrap());
        let records: Vec<SuppliedQuestion> = (0..20)
            .map(|_| supplied("O(N)", ["O(1)", "O(N)", "O(log N)", "O(N^2)"]))
            .collect();
        let bank = builder.adopt(records).unwrap();
        let first = &bank.questions[0].options;
        assert!(
            bank.questions.iter().any(|q| &q.options != first),
            "identical batches must not keep one option order"
        );
        for question in &bank.questions {
            assert_eq!(question.options.iter().filter(|o| **o == "O(N)").count(), 1);
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let a = BankBuilder::new(BankConfig::builder(50).seed(99).build().unwrap());
        let b = BankBuilder::new(BankConfig::builder(50).seed(99).build().unwrap());
        assert_eq!(a.build().unwrap(), b.build().unwrap());
    }

    #[test]
    fn consecutive_builds_differ() {
        // Same builder, two builds: fresh names and a fresh shuffle each time.
        let builder = BankBuilder::new(BankConfig::builder(50).seed(5).build().unwrap());
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..100).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<u32>>());
        assert_ne!(items, sorted, "a 100-element shuffle staying sorted is ~impossible");
    }

    #[test]
    fn shuffle_is_deterministic_under_a_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        shuffle(&mut StdRng::seed_from_u64(11), &mut a);
        shuffle(&mut StdRng::seed_from_u64(11), &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn adopt_rejects_empty_batch() {
        let builder = BankBuilder::new(BankConfig::builder(50).seed(6).build().unwrap());
        assert_eq!(builder.adopt(vec![]), Err(BankError::EmptyBatch));
    }

    #[test]
    fn adopt_accepts_valid_records() {
        let builder = BankBuilder::new(BankConfig::builder(50).seed(7).build().unwrap());
        let records = vec![
            supplied("O(1)", ["O(1)", "O(N)", "O(log N)", "O(N^2)"]),
            supplied("O(N)", ["O(1)", "O(N)", "O(N log N)", "O(N!)"]),
            supplied("O(2^N)", ["O(2^N)", "O(N)", "O(N^2)", "O(N^3)"]),
        ];
        let bank = builder.adopt(records).unwrap();
        assert_eq!(bank.len(), 3);
        for question in &bank.questions {
            assert!(matches!(question.body, QuestionBody::Supplied { .. }));
        }
    }

    #[test]
    fn adopt_rejects_missing_answer_option() {
        let builder = BankBuilder::new(BankConfig::builder(50).seed(8).build().unwrap());
        let records = vec![supplied("O(N!)", ["O(1)", "O(N)", "O(log N)", "O(N^2)"])];
        assert!(matches!(
            builder.adopt(records),
            Err(BankError::Integrity { .. })
        ));
    }

    #[test]
    fn adopt_rejects_duplicate_options() {
        let builder = BankBuilder::new(BankConfig::builder(50).seed(9).build().unwrap());
        let records = vec![supplied("O(N)", ["O(N)", "O(N)", "O(log N)", "O(N^2)"])];
        assert!(matches!(
            builder.adopt(records),
            Err(BankError::Integrity { .. })
        ));
    }

    #[test]
    fn adopt_rejects_blank_snippets() {
        let builder = BankBuilder::new(BankConfig::builder(50).seed(10).build().unwrap());
        let mut record = supplied("O(N)", ["O(1)", "O(N)", "O(log N)", "O(N^2)"]);
        record.code = "   ".to_owned();
        assert!(matches!(
            builder.adopt(vec![record]),
            Err(BankError::Integrity { .. })
        ));
    }

    #[test]
    fn adopt_shuffles_but_keeps_all_records() {
        let builder = BankBuilder::new(BankConfig::builder(50).seed(12).build().unwrap());
        let records: Vec<SuppliedQuestion> = (0..50)
            .map(|i| {
                let mut record = supplied("O(N)", ["O(1)", "O(N)", "O(log N)", "O(N^2)"]);
                record.code = format!("def f_{i}(xs):\n    return xs");
                record
            })
            .collect();
        let codes_in: Vec<String> = records.iter().map(|r| r.code.clone()).collect();
        let bank = builder.adopt(records).unwrap();
        let mut codes_out: Vec<String> = bank
            .questions
            .iter()
            .map(|q| match &q.body {
                QuestionBody::Supplied { code, .. } => code.clone(),
                QuestionBody::Generated { .. } => panic!("unexpected generated body"),
            })
            .collect();
        assert_ne!(codes_out, codes_in, "adoption must reorder the batch");
        codes_out.sort();
        let mut codes_in_sorted = codes_in;
        codes_in_sorted.sort();
        assert_eq!(codes_out, codes_in_sorted);
    }
}
