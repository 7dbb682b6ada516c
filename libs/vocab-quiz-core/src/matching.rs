//! Answer normalization and fuzzy grading for typed answers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Result of comparing a typed answer to the expected answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// True when the normalized forms are identical.
    pub exact: bool,
    /// Edit distance between the normalized forms.
    pub distance: usize,
    /// Largest distance still accepted for this pair.
    pub allowed_distance: usize,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized expected answer (for display).
    pub expected_normalized: String,
}

/// Decide whether `typed` matches `expected`.
pub fn grade(typed: &str, expected: &str) -> bool {
    check_answer(typed, expected).is_correct
}

/// Compare a typed answer to the expected answer.
///
/// Both sides are normalized first. Equal forms always pass; otherwise the
/// Levenshtein distance must stay within [`tolerance`]. A blank answer only
/// matches a blank expectation.
pub fn check_answer(typed: &str, expected: &str) -> MatchResult {
    let typed_normalized = normalize(typed);
    let expected_normalized = normalize(expected);

    let typed_len = typed_normalized.chars().count();
    let expected_len = expected_normalized.chars().count();
    let allowed_distance = tolerance(typed_len, expected_len);

    let exact = typed_normalized == expected_normalized;
    let distance = if exact {
        0
    } else {
        levenshtein_distance(&typed_normalized, &expected_normalized)
    };

    let is_correct = if exact {
        true
    } else if typed_normalized.is_empty() {
        false
    } else {
        distance <= allowed_distance
    };

    MatchResult {
        is_correct,
        exact,
        distance,
        allowed_distance,
        similarity: similarity_from(distance, typed_len.max(expected_len)),
        typed_normalized,
        expected_normalized,
    }
}

/// Canonical form used for comparison.
///
/// Lowercases, folds diacritics and `ß`, straightens typographic quotes,
/// turns punctuation (any Unicode punctuation, plus math, currency and
/// modifier symbols) into spaces, then collapses whitespace. The straight
/// apostrophe is kept so elisions like `l'eau` stay one word.
pub fn normalize(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.to_lowercase().nfd() {
        match c {
            c if is_combining_diacritic(c) => {}
            'ß' => folded.push_str("ss"),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => folded.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => folded.push('"'),
            c => folded.push(c),
        }
    }

    separators()
        .replace_all(&folded, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Largest accepted edit distance for answers of the given char lengths:
/// one typo per ten characters, never less than one.
pub fn tolerance(a_len: usize, b_len: usize) -> usize {
    (a_len.max(b_len) / 10).max(1)
}

// Combining Diacritical Marks block, U+0300..=U+036F.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| {
        Regex::new(r"[[\p{P}\p{Sm}\p{Sc}\p{Sk}]--[']]").expect("separator pattern is valid")
    })
}

/// Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    // row[j]: distance from the part of `a` seen so far to target[..j]
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in target.iter().enumerate() {
            let above = row[j + 1];
            let substitute = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitute.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[target.len()]
}

fn similarity_from(distance: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (distance as f64 / max_len as f64)
}
