// Rust guideline compliant 2026-08-29

//! The canonical question-template catalog.
//!
//! Nine hand-authored archetypes spanning constant, logarithmic, linear (x2),
//! linearithmic, quadratic (x2), and cubic complexity. Exponential and
//! factorial labels appear only as distractors.

use domain::{ComplexityClass, QuestionTemplate, TemplateKind};

/// The fixed template set, cycled by the bank builder.
///
/// Invariant (checked in tests and at bank construction): each entry's
/// options are pairwise distinct and exactly one equals its class label.
pub const CATALOG: [QuestionTemplate; 9] = [
    QuestionTemplate {
        kind: TemplateKind::ConstantIndex,
        class: ComplexityClass::Constant,
        options: ["O(N)", "O(1)", "O(log N)", "O(N^2)"],
        explanation: "Accessing an array element at a fixed index is a single constant-time operation, regardless of the array's size.",
    },
    QuestionTemplate {
        kind: TemplateKind::ConstantArith,
        class: ComplexityClass::Constant,
        options: ["O(N log N)", "O(N^2)", "O(1)", "O(N)"],
        explanation: "Basic arithmetic operations and assignments take a fixed amount of time, resulting in constant complexity.",
    },
    QuestionTemplate {
        kind: TemplateKind::LogMultiply,
        class: ComplexityClass::Logarithmic,
        options: ["O(N)", "O(N log N)", "O(N^2)", "O(log N)"],
        explanation: "The loop counter is multiplied by a constant each iteration, so the number of iterations scales logarithmically with N.",
    },
    QuestionTemplate {
        kind: TemplateKind::LinearScan,
        class: ComplexityClass::Linear,
        options: ["O(N)", "O(1)", "O(N^3)", "O(N log N)"],
        explanation: "A single loop whose iteration count is directly proportional to N runs in linear time.",
    },
    QuestionTemplate {
        kind: TemplateKind::LinearSequential,
        class: ComplexityClass::Linear,
        options: ["O(N^2)", "O(N)", "O(log N)", "O(1)"],
        explanation: "Sequential loops are additive; O(N) plus O(N) still simplifies to O(N).",
    },
    QuestionTemplate {
        kind: TemplateKind::Linearithmic,
        class: ComplexityClass::Linearithmic,
        options: ["O(N^2)", "O(N log N)", "O(N)", "O(log N)"],
        explanation: "The linear outer loop multiplied by the logarithmic inner loop yields O(N log N) in total.",
    },
    QuestionTemplate {
        kind: TemplateKind::QuadraticGrid,
        class: ComplexityClass::Quadratic,
        options: ["O(N)", "O(N log N)", "O(N^2)", "O(N^3)"],
        explanation: "A nested loop where both levels run proportional to N performs N * N operations, which is quadratic.",
    },
    QuestionTemplate {
        kind: TemplateKind::QuadraticTriangular,
        class: ComplexityClass::Quadratic,
        options: ["O(N^2)", "O(N)", "O(2^N)", "O(N log N)"],
        explanation: "A triangular nested loop runs N + (N-1) + ... + 1 times, which is still dominated by the N^2 term.",
    },
    QuestionTemplate {
        kind: TemplateKind::CubicGrid,
        class: ComplexityClass::Cubic,
        options: ["O(N^2)", "O(N log N)", "O(N^3)", "O(N!)"],
        explanation: "A triple nested loop performs N * N * N operations, leading to cubic time complexity.",
    },
];
