//! Property-based tests for normalization
//!
//! Invariants that should hold for ALL inputs:
//! - Idempotence: normalize(normalize(t)) == normalize(t)
//! - Bounded growth: output stays within a constant factor of the input
//! - Rename invariance: consistently renamed sources normalize identically
//! - Self-similarity: score(n, n) == 1.0 for non-empty n

use plagiarism_engine::features::clone_detection::score;
use plagiarism_engine::features::normalization::{
    canonicalize_identifiers, is_reserved, normalize, normalize_with_language, IdentifierStrategy,
    NormalizedText,
};
use plagiarism_engine::Language;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Printable ASCII plus newlines and tabs
fn source_text() -> impl Strategy<Value = String> {
    "[ -~\n\t]{0,300}"
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{2,6}".prop_filter("not reserved", |s| !is_reserved(s))
}

fn program(a: &str, b: &str, c: &str) -> String {
    format!(
        "int {a} = {b} + 1; // seed\nwhile ({a} < {c}) {{\n    {a} = {a} * 2;\n    print(\"{b}\");\n}}\n"
    )
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in source_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_bounded_growth(text in source_text()) {
        prop_assert!(normalize(&text).len() <= 8 * text.len());
    }

    #[test]
    fn prop_normalize_lowercase_single_spaced(text in source_text()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.contains("  "));
        prop_assert!(normalized.lines().all(|l| !l.trim().is_empty()));
        prop_assert_eq!(normalized.to_lowercase(), normalized.clone());
    }

    #[test]
    fn prop_rename_invariance(
        names in prop::collection::hash_set(identifier(), 6)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let original = program(&names[0], &names[1], &names[2]);
        let renamed = program(&names[3], &names[4], &names[5]);
        prop_assert_eq!(normalize(&original), normalize(&renamed));
    }

    #[test]
    fn prop_self_score_is_one(text in source_text()) {
        let normalized = normalize(&text);
        if normalized.split_whitespace().next().is_some() {
            prop_assert_eq!(score(&normalized, &normalized), 1.0);
        } else {
            prop_assert_eq!(score(&normalized, &normalized), 0.0);
        }
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(score(&normalize(""), &normalize("int x = 1;")), 0.0);
}

#[test]
fn test_whitespace_and_case_reformatting() {
    let a = "int total = 0;\ntotal += 1;";
    let b = "  int   TOTAL =  0;\n\n\n\tTOTAL  +=   1;   ";
    assert_eq!(normalize(a), "int var_1 = num_lit;\nvar_1 += num_lit;");
    assert_eq!(normalize(a), normalize(b));
}

#[test]
fn test_structured_python_normalization() {
    let source = "def area(w, h):\n    return w * h  # rectangle\n";
    assert_eq!(
        normalize_with_language(source, Language::Python),
        "def var_1(var_2, var_3):\nreturn var_2 * var_3"
    );
}

#[test]
fn test_canonicalized_text_is_public() {
    let result: NormalizedText = canonicalize_identifiers("a = b + a;", Language::Unknown);
    assert_eq!(
        result,
        NormalizedText {
            text: "var_1 = var_2 + var_1;".to_string(),
            identifiers: 2,
            strategy: IdentifierStrategy::Lexical,
        }
    );
}
