//! Statistical key recovery
//!
//! Vigenère: pick the key length whose interleaved columns have an average
//! Index of Coincidence closest to English, then crack every column as a
//! Caesar shift by minimizing Chi-squared. Caesar: the same column attack on
//! the whole text. Both are heuristics and only converge on text with a
//! clear English signal.

use serde::Serialize;

use crate::analysis::{chi_squared, count_letters, index_of_coincidence, letter_indices};
use crate::ciphers::Caesar;
use crate::SolverSettings;

/// Best guess at a Vigenère key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VigenereEstimate {
    pub key: String,
    pub key_length: usize,
    /// Average IoC of the chosen partitioning, not a probability
    pub confidence: f64,
}

impl VigenereEstimate {
    /// Shortest repeating unit of the key.
    ///
    /// A column count that is a multiple of the true key length also scores
    /// an English-like IoC, so the search can return e.g. `KEYKEYKEY` for a
    /// `KEY` ciphertext. Decrypting with either key gives the same text.
    pub fn period(&self) -> &str {
        let bytes = self.key.as_bytes();
        let len = bytes.len();
        (1..len)
            .filter(|p| len % p == 0)
            .find(|&p| bytes.chunks(p).all(|chunk| chunk == &bytes[..p]))
            .map_or(self.key.as_str(), |p| &self.key[..p])
    }
}

/// Best guess at a Caesar shift
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaesarEstimate {
    pub shift: u8,
    pub plaintext: String,
    pub chi_squared: f64,
}

/// Split letters into `len` interleaved columns
fn columns(letters: &[u8], len: usize) -> Vec<Vec<u8>> {
    (0..len)
        .map(|i| letters.iter().skip(i).step_by(len).copied().collect())
        .collect()
}

fn average_ic(letters: &[u8], len: usize) -> f64 {
    let total: f64 = columns(letters, len)
        .iter()
        .map(|col| index_of_coincidence(&count_letters(col.iter().copied())))
        .sum();
    total / len as f64
}

/// Shift that turns `column` into the most English-looking letters
fn best_shift(column: &[u8]) -> (u8, f64) {
    let mut best = (0u8, f64::INFINITY);
    for shift in 0..26u8 {
        let counts = count_letters(column.iter().map(|&l| (l + 26 - shift) % 26));
        let score = chi_squared(&counts);
        if score < best.1 {
            best = (shift, score);
        }
    }
    best
}

pub fn solve_vigenere(ciphertext: &str) -> Option<VigenereEstimate> {
    solve_vigenere_with(ciphertext, &SolverSettings::default())
}

/// The returned key may be the true key repeated; see [`VigenereEstimate::period`]
pub fn solve_vigenere_with(ciphertext: &str, settings: &SolverSettings) -> Option<VigenereEstimate> {
    let letters = letter_indices(ciphertext);
    if letters.len() < 2 {
        return None;
    }

    let max_len = settings.max_key_length.min(letters.len() / 2);
    let mut best: Option<(usize, f64)> = None;
    for len in 1..=max_len {
        let ic = average_ic(&letters, len);
        let closer = match best {
            Some((_, best_ic)) => (ic - settings.target_ic).abs() < (best_ic - settings.target_ic).abs(),
            None => true,
        };
        if closer {
            best = Some((len, ic));
        }
    }
    let (key_length, confidence) = best?;

    let key: String = columns(&letters, key_length)
        .iter()
        .map(|col| (b'A' + best_shift(col).0) as char)
        .collect();

    tracing::info!(%key, key_length, confidence, "vigenere estimate");
    Some(VigenereEstimate {
        key,
        key_length,
        confidence,
    })
}

pub fn solve_caesar(ciphertext: &str) -> Option<CaesarEstimate> {
    let letters = letter_indices(ciphertext);
    if letters.is_empty() {
        return None;
    }

    let (shift, chi_squared) = best_shift(&letters);
    tracing::info!(shift, chi_squared, "caesar estimate");
    Some(CaesarEstimate {
        shift,
        plaintext: Caesar::apply(ciphertext, (26 - shift) % 26),
        chi_squared,
    })
}

/// Every shift's decryption, for eyeballing
pub fn caesar_bruteforce(ciphertext: &str) -> Vec<(u8, String)> {
    (0..26u8)
        .map(|shift| (shift, Caesar::apply(ciphertext, (26 - shift) % 26)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ciphers::{Cipher, Vigenere};

    const PASSAGE: &str = "The quick development of modern computers has changed the way people \
        think about secret writing. In earlier centuries a message could be protected by a simple \
        shift of the alphabet, and most readers would never guess the method. Later writers used \
        a keyword to change the shift for every letter, which made the common patterns";

    #[test]
    fn test_recovers_vigenere_key() {
        let ciphertext = Vigenere::new("KEY").unwrap().encrypt(PASSAGE).unwrap();
        let estimate = solve_vigenere(&ciphertext).unwrap();
        assert_eq!(estimate.key_length, 3);
        assert_eq!(estimate.key, "KEY");
        assert!((estimate.confidence - 0.067).abs() < 0.005, "{}", estimate.confidence);
    }

    #[test]
    fn test_repeated_key_reduces_to_period() {
        let plaintext = "It was the best of times, it was the worst of times, it was the age of \
            wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch \
            of incredulity, it was the season of Light, it was the season of Darkness, it was the \
            spring of hope, it was the winter of despair, we had everything before us, we had \
            nothing before us, we were all going direct to Heaven, we were all going direct the \
            other way.";
        let ciphertext = Vigenere::new("KEY").unwrap().encrypt(plaintext).unwrap();
        let estimate = solve_vigenere(&ciphertext).unwrap();
        assert_eq!(estimate.key_length % 3, 0);
        assert_eq!(estimate.period(), "KEY");
    }

    #[test]
    fn test_period() {
        let estimate = |key: &str| VigenereEstimate {
            key: key.to_string(),
            key_length: key.len(),
            confidence: 0.067,
        };
        assert_eq!(estimate("KEYKEYKEY").period(), "KEY");
        assert_eq!(estimate("KEYK").period(), "KEYK");
        assert_eq!(estimate("AAAA").period(), "A");
        assert_eq!(estimate("K").period(), "K");
    }

    #[test]
    fn test_too_short() {
        assert!(solve_vigenere("").is_none());
        assert!(solve_vigenere("A!").is_none());
        assert_eq!(solve_vigenere("AB").unwrap().key_length, 1);
    }

    #[test]
    fn test_key_length_capped_by_settings() {
        let ciphertext = Vigenere::new("KEY").unwrap().encrypt(PASSAGE).unwrap();
        let settings = SolverSettings {
            max_key_length: 2,
            ..SolverSettings::default()
        };
        let estimate = solve_vigenere_with(&ciphertext, &settings).unwrap();
        assert!(estimate.key_length <= 2);
    }

    #[test]
    fn test_solve_caesar() {
        let ciphertext = Caesar::new(7).unwrap().encrypt(PASSAGE).unwrap();
        let estimate = solve_caesar(&ciphertext).unwrap();
        assert_eq!(estimate.shift, 7);
        assert_eq!(estimate.plaintext, PASSAGE);
        assert!(solve_caesar("1234").is_none());
    }

    #[test]
    fn test_caesar_bruteforce() {
        let candidates = caesar_bruteforce("KHOOR");
        assert_eq!(candidates.len(), 26);
        assert_eq!(candidates[0], (0, "KHOOR".to_string()));
        assert_eq!(candidates[3], (3, "HELLO".to_string()));
    }

    #[test]
    fn test_estimate_serializes_camel_case() {
        let value = serde_json::to_value(VigenereEstimate {
            key: "KEY".into(),
            key_length: 3,
            confidence: 0.07,
        })
        .unwrap();
        assert_eq!(value["keyLength"], 3);
    }
}
