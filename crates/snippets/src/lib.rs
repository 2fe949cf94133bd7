// Rust guideline compliant 2026-08-28

//! Snippet Template Engine -- renders one of nine snippet archetypes into
//! Java, Python, or C source text with the supplied identifiers and loop
//! literals substituted in.
//!
//! Entry point: [`render`]. Pure and deterministic: the same
//! `(kind, language, names, params)` tuple always yields byte-identical
//! output. All randomness lives in the inputs.

use domain::{Language, LoopParams, NameSet, TemplateKind};

/// Errors from the template engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnippetError {
    /// The params shape does not fit the archetype; the engine never falls
    /// back to an empty result.
    #[error("template {kind:?} cannot render with parameters {params:?}")]
    ParamMismatch {
        /// The requested archetype.
        kind: TemplateKind,
        /// The mismatched parameter record.
        params: LoopParams,
    },
}

/// Render `kind` in `language` with `names` and `params` substituted.
///
/// Every archetype renders semantically equivalent control flow in all
/// three target syntaxes; the substituted literals vary the surface text
/// without changing the asymptotic class.
///
/// # Errors
///
/// Returns [`SnippetError::ParamMismatch`] when the params shape does not
/// match what the archetype requires (strict in both directions: a
/// parameterless archetype rejects non-empty params).
pub fn render(
    kind: TemplateKind,
    language: Language,
    names: &NameSet,
    params: &LoopParams,
) -> Result<String, SnippetError> {
    match kind {
        TemplateKind::ConstantIndex => {
            require_empty(kind, params)?;
            Ok(constant_index(language, names))
        }
        TemplateKind::ConstantArith => {
            require_empty(kind, params)?;
            Ok(constant_arith(language, names))
        }
        TemplateKind::LogMultiply => {
            let base = require_log(kind, params)?;
            Ok(log_multiply(language, names, base))
        }
        TemplateKind::LinearScan => {
            let (step, multiplier) = require_linear(kind, params)?;
            Ok(linear_scan(language, names, step, multiplier))
        }
        TemplateKind::LinearSequential => {
            let (step, multiplier) = require_linear(kind, params)?;
            Ok(linear_sequential(language, names, step, multiplier))
        }
        TemplateKind::Linearithmic => {
            let (base, offset) = require_linearithmic(kind, params)?;
            Ok(linearithmic(language, names, base, offset))
        }
        TemplateKind::QuadraticGrid => {
            require_empty(kind, params)?;
            Ok(quadratic_grid(language, names))
        }
        TemplateKind::QuadraticTriangular => {
            require_empty(kind, params)?;
            Ok(quadratic_triangular(language, names))
        }
        TemplateKind::CubicGrid => {
            require_empty(kind, params)?;
            Ok(cubic_grid(language, names))
        }
    }
}

fn require_empty(kind: TemplateKind, params: &LoopParams) -> Result<(), SnippetError> {
    match params {
        LoopParams::Empty => Ok(()),
        other => Err(SnippetError::ParamMismatch {
            kind,
            params: *other,
        }),
    }
}

fn require_log(kind: TemplateKind, params: &LoopParams) -> Result<u32, SnippetError> {
    match params {
        LoopParams::Logarithmic { base } => Ok(*base),
        other => Err(SnippetError::ParamMismatch {
            kind,
            params: *other,
        }),
    }
}

fn require_linear(kind: TemplateKind, params: &LoopParams) -> Result<(u32, u32), SnippetError> {
    match params {
        LoopParams::Linear { step, multiplier } => Ok((*step, *multiplier)),
        other => Err(SnippetError::ParamMismatch {
            kind,
            params: *other,
        }),
    }
}

fn require_linearithmic(
    kind: TemplateKind,
    params: &LoopParams,
) -> Result<(u32, u32), SnippetError> {
    match params {
        LoopParams::Linearithmic { base, offset } => Ok((*base, *offset)),
        other => Err(SnippetError::ParamMismatch {
            kind,
            params: *other,
        }),
    }
}

// ---------------------------------------------------------------------------
// Archetypes
// ---------------------------------------------------------------------------

fn constant_index(language: Language, names: &NameSet) -> String {
    let f = &names.function;
    let a = &names.collection;
    match language {
        Language::Java => format!(
            "public int {f}(int[] {a}) {{\n    \
             // Accessing a fixed index\n    \
             return {a}[0];\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}({a}):\n    \
             # Accessing a fixed index\n    \
             return {a}[0]"
        ),
        Language::C => format!(
            "int {f}(int {a}[], int size) {{\n    \
             // Accessing a fixed index\n    \
             return {a}[0];\n\
             }}"
        ),
    }
}

fn constant_arith(language: Language, names: &NameSet) -> String {
    let f = &names.function;
    let v = &names.scalar;
    match language {
        Language::Java => format!(
            "public int {f}(int {v}, int constant) {{\n    \
             int sum = {v} + constant;\n    \
             return sum * 5;\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}({v}, constant):\n    \
             sum_val = {v} + constant\n    \
             return sum_val * 5"
        ),
        Language::C => format!(
            "int {f}(int {v}, int constant) {{\n    \
             int sum = {v} + constant;\n    \
             return sum * 5;\n\
             }}"
        ),
    }
}

fn log_multiply(language: Language, names: &NameSet, base: u32) -> String {
    let f = &names.function;
    match language {
        Language::Java => format!(
            "public void {f}(int N) {{\n    \
             for (int i = 1; i < N; i *= {base}) {{\n        \
             System.out.println(\"Processing...\");\n    \
             }}\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}(N):\n    \
             i = 1\n    \
             while i < N:\n        \
             print(\"Processing...\")\n        \
             i *= {base}"
        ),
        Language::C => format!(
            "void {f}(int N) {{\n    \
             for (int i = 1; i < N; i *= {base}) {{\n        \
             printf(\"Processing...\\n\");\n    \
             }}\n\
             }}"
        ),
    }
}

fn linear_scan(language: Language, names: &NameSet, step: u32, multiplier: u32) -> String {
    let f = &names.function;
    let v = &names.scalar;
    let a = &names.collection;
    match language {
        Language::Java => format!(
            "public int {f}(int[] {a}) {{\n    \
             int {v} = 0;\n    \
             for (int i = 0; i < {a}.length * {multiplier}; i += {step}) {{\n        \
             {v} += 1;\n    \
             }}\n    \
             return {v};\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}({a}):\n    \
             {v} = 0\n    \
             for i in range(0, len({a}) * {multiplier}, {step}):\n        \
             {v} += 1\n    \
             return {v}"
        ),
        Language::C => format!(
            "int {f}(int {a}[], int size) {{\n    \
             int {v} = 0;\n    \
             for (int i = 0; i < size * {multiplier}; i += {step}) {{\n        \
             {v} += 1;\n    \
             }}\n    \
             return {v};\n\
             }}"
        ),
    }
}

fn linear_sequential(language: Language, names: &NameSet, step: u32, multiplier: u32) -> String {
    let f = &names.function;
    match language {
        Language::Java => format!(
            "public void {f}(int N) {{\n    \
             for (int i = 0; i < N * {step}; i++) {{\n        \
             // O(1) operation\n    \
             }}\n    \
             for (int j = 0; j < N * {multiplier}; j++) {{\n        \
             // Another O(N) loop\n    \
             }}\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}(N):\n    \
             for i in range(N * {step}):\n        \
             pass\n    \
             for j in range(N * {multiplier}):\n        \
             # Another O(N) loop\n        \
             pass"
        ),
        Language::C => format!(
            "void {f}(int N) {{\n    \
             for (int i = 0; i < N * {step}; i++) {{\n        \
             // O(1) operation\n    \
             }}\n    \
             for (int j = 0; j < N * {multiplier}; j++) {{\n        \
             // Another O(N) loop\n    \
             }}\n\
             }}"
        ),
    }
}

fn linearithmic(language: Language, names: &NameSet, base: u32, offset: u32) -> String {
    let f = &names.function;
    match language {
        Language::Java => format!(
            "public void {f}(int N) {{\n    \
             for (int i = {offset}; i < N; i++) {{\n        \
             for (int j = 1; j < N; j *= {base}) {{\n            \
             System.out.println(\"Iteration: \" + i);\n        \
             }}\n    \
             }}\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}(N):\n    \
             for i in range({offset}, N):\n        \
             j = 1\n        \
             while j < N:\n            \
             print(\"Iteration:\", i)\n            \
             j *= {base}"
        ),
        Language::C => format!(
            "void {f}(int N) {{\n    \
             for (int i = {offset}; i < N; i++) {{\n        \
             for (int j = 1; j < N; j *= {base}) {{\n            \
             printf(\"Iteration: %d\\n\", i);\n        \
             }}\n    \
             }}\n\
             }}"
        ),
    }
}

fn quadratic_grid(language: Language, names: &NameSet) -> String {
    let f = &names.function;
    match language {
        Language::Java => format!(
            "public void {f}(int N) {{\n    \
             for (int i = 0; i < N; i++) {{\n        \
             for (int j = 0; j < N; j++) {{\n            \
             // O(1) operation\n        \
             }}\n    \
             }}\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}(N):\n    \
             for i in range(N):\n        \
             for j in range(N):\n            \
             pass"
        ),
        Language::C => format!(
            "void {f}(int N) {{\n    \
             for (int i = 0; i < N; i++) {{\n        \
             for (int j = 0; j < N; j++) {{\n            \
             // O(1) operation\n        \
             }}\n    \
             }}\n\
             }}"
        ),
    }
}

fn quadratic_triangular(language: Language, names: &NameSet) -> String {
    let f = &names.function;
    match language {
        Language::Java => format!(
            "public void {f}(int N) {{\n    \
             for (int i = 0; i < N; i++) {{\n        \
             for (int j = i; j < N; j++) {{\n            \
             System.out.println(\"Pair: \" + i + \",\" + j);\n        \
             }}\n    \
             }}\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}(N):\n    \
             for i in range(N):\n        \
             for j in range(i, N):\n            \
             print(f\"Pair: {{i}},{{j}}\")"
        ),
        Language::C => format!(
            "void {f}(int N) {{\n    \
             for (int i = 0; i < N; i++) {{\n        \
             for (int j = i; j < N; j++) {{\n            \
             printf(\"Pair: %d,%d\\n\", i, j);\n        \
             }}\n    \
             }}\n\
             }}"
        ),
    }
}

fn cubic_grid(language: Language, names: &NameSet) -> String {
    let f = &names.function;
    match language {
        Language::Java => format!(
            "public void {f}(int N) {{\n    \
             for (int i = 0; i < N; i++) {{\n        \
             for (int j = 0; j < N; j++) {{\n            \
             for (int k = 0; k < N; k++) {{\n                \
             // O(1) operation\n            \
             }}\n        \
             }}\n    \
             }}\n\
             }}"
        ),
        Language::Python => format!(
            "def {f}(N):\n    \
             for i in range(N):\n        \
             for j in range(N):\n            \
             for k in range(N):\n                \
             pass"
        ),
        Language::C => format!(
            "void {f}(int N) {{\n    \
             for (int i = 0; i < N; i++) {{\n        \
             for (int j = 0; j < N; j++) {{\n            \
             for (int k = 0; k < N; k++) {{\n                \
             // O(1) operation\n            \
             }}\n        \
             }}\n    \
             }}\n\
             }}"
        ),
    }
}
