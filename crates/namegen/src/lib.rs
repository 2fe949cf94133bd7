// Rust guideline compliant 2026-08-28

//! Name/Parameter Generator -- randomized identifiers and loop literals that
//! keep generated snippets visually unique.
//!
//! Entry points: [`NameGen::identifier`], [`NameGen::name_set`],
//! [`NameGen::loop_params`]. Seed via [`NameGen::new`] for reproducible
//! output in tests.

use domain::{ComplexityClass, LoopParams, NameSet};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cell::RefCell;

/// Word pool for identifier synthesis.
///
/// 15 entries -- index always derived from `random_range(0..len)`, never panics.
const WORD_POOL: &[&str] = &[
    "calc", "process", "data", "array", "list", "check", "sort", "find", "handle", "value",
    "count", "idx", "temp", "item", "element",
];

/// Verb prefixes applied to function-role identifiers with probability 0.5 each.
const FUNCTION_PREFIXES: [&str; 2] = ["get", "run"];

/// Generates randomized identifiers and class-dependent loop parameters.
///
/// Every call consumes fresh randomness; callers must treat output as a
/// distribution and assert structural properties, not fixed values. Holds a
/// seeded RNG so tests can pin the exact sequence.
#[derive(Debug)]
pub struct NameGen {
    /// Interior mutability required because all public methods take `&self`.
    rng: RefCell<StdRng>,
}

impl NameGen {
    /// Create a generator, seeding the RNG from `seed` if set, otherwise
    /// from the OS.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: RefCell::new(rng),
        }
    }

    /// Draw a fresh camel-case identifier.
    ///
    /// Two words are sampled independently from the pool; the first stays
    /// lowercase, the second is capitalized and appended. When
    /// `function_role` is true, a `get` or `run` prefix is chosen with
    /// probability 0.5 and the whole name is capitalized behind it.
    #[must_use]
    pub fn identifier(&self, function_role: bool) -> String {
        let mut rng = self.rng.borrow_mut();
        let first = WORD_POOL[rng.random_range(0..WORD_POOL.len())];
        let second = WORD_POOL[rng.random_range(0..WORD_POOL.len())];
        let name = format!("{first}{}", capitalize(second));
        if function_role {
            let prefix = FUNCTION_PREFIXES[usize::from(rng.random_bool(0.5))];
            format!("{prefix}{}", capitalize(&name))
        } else {
            name
        }
    }

    /// Draw the three identifiers attached to one question.
    ///
    /// Uniqueness across the set is best-effort (independent draws, not
    /// guaranteed-unique); the `List` suffix keeps the collection name
    /// distinguishable regardless.
    #[must_use]
    pub fn name_set(&self) -> NameSet {
        NameSet {
            function: self.identifier(true),
            scalar: self.identifier(false),
            collection: format!("{}List", self.identifier(false)),
        }
    }

    /// Draw class-dependent loop literals.
    ///
    /// Linear classes get a step and a multiplier in `[1, 3]`; the
    /// logarithmic class gets a base in `[2, 3]`; the linearithmic class
    /// gets a base in `[2, 3]` plus a start offset in `[0, 4]`; every other
    /// class gets [`LoopParams::Empty`]. Ranges preserve the labeled
    /// asymptotic class (base never 1, step never input-sized).
    #[must_use]
    pub fn loop_params(&self, class: ComplexityClass) -> LoopParams {
        let mut rng = self.rng.borrow_mut();
        match class {
            ComplexityClass::Linear => LoopParams::Linear {
                step: rng.random_range(1..=3),
                multiplier: rng.random_range(1..=3),
            },
            ComplexityClass::Logarithmic => LoopParams::Logarithmic {
                base: rng.random_range(2..=3),
            },
            ComplexityClass::Linearithmic => LoopParams::Linearithmic {
                base: rng.random_range(2..=3),
                offset: rng.random_range(0..=4),
            },
            _ => LoopParams::Empty,
        }
    }
}

/// Uppercase the first ASCII character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
