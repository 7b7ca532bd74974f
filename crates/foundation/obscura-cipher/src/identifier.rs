//! Cipher Identifier
//!
//! Structural guesses at which family produced a ciphertext. Each check is
//! independent and several may fire for the same input.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::analysis::FrequencyAnalysis;
use crate::CipherKind;

lazy_static! {
    static ref LETTERS_PATTERN: Regex = Regex::new(r"^[A-Z\s]+$").unwrap();
    static ref BACON_PATTERN: Regex = Regex::new(r"^[AB\s]+$").unwrap();
    static ref POLYBIUS_PATTERN: Regex = Regex::new(r"^[0-9\s]+$").unwrap();
    static ref MORSE_PATTERN: Regex = Regex::new(r"^[\.\-\s/]+$").unwrap();
}

/// A heuristic match, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Substitution,
    Baconian,
    Polybius,
    Morse,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::Substitution => {
                "Letters only: possibly a substitution cipher (Caesar or Vigenère)"
            }
            Suggestion::Baconian => "Only A and B symbols: possibly a Baconian cipher",
            Suggestion::Polybius => "Digit pairs: possibly a Polybius square",
            Suggestion::Morse => "Dots, dashes and slashes: possibly Morse code",
        }
    }

    /// Cipher types worth trying for this match
    pub fn candidates(&self) -> &'static [CipherKind] {
        match self {
            Suggestion::Substitution => &[CipherKind::Caesar, CipherKind::Vigenere],
            Suggestion::Baconian => &[CipherKind::Baconian],
            Suggestion::Polybius => &[CipherKind::Polybius],
            Suggestion::Morse => &[CipherKind::Morse],
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Characters in the input, including non-letters
    pub length: usize,
    /// Uppercase letter counts
    pub frequency: BTreeMap<char, usize>,
    pub index_of_coincidence: f64,
    pub suggestions: Vec<Suggestion>,
}

/// Letter histogram plus every structural check that matches.
///
/// Checks run on the whole raw text and are case-sensitive: lowercase
/// letters match nothing, and whitespace-only input matches every class.
pub fn analyze_cipher(ciphertext: &str) -> AnalysisResult {
    let analysis = FrequencyAnalysis::analyze(ciphertext);
    let mut suggestions = Vec::new();

    if LETTERS_PATTERN.is_match(ciphertext) {
        suggestions.push(Suggestion::Substitution);
    }
    if BACON_PATTERN.is_match(ciphertext) {
        suggestions.push(Suggestion::Baconian);
    }
    if POLYBIUS_PATTERN.is_match(ciphertext)
        && ciphertext.chars().filter(char::is_ascii_digit).count() % 2 == 0
    {
        suggestions.push(Suggestion::Polybius);
    }
    if MORSE_PATTERN.is_match(ciphertext) {
        suggestions.push(Suggestion::Morse);
    }

    tracing::debug!(matches = suggestions.len(), "analyzed ciphertext");
    AnalysisResult {
        length: ciphertext.chars().count(),
        index_of_coincidence: analysis.index_of_coincidence(),
        frequency: analysis.frequencies,
        suggestions,
    }
}
