//! Vigenère cipher
//!
//! The key position only advances on letters, so spacing and punctuation in
//! the plaintext do not change which key letter lands on which letter.

use serde_json::{json, Value};

use super::{shift_letter, Cipher};
use crate::{CipherKind, Error, Result};

pub struct Vigenere {
    /// Key letters as shifts 0..26
    shifts: Vec<u8>,
}

impl Vigenere {
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::invalid_config(
                CipherKind::Vigenere,
                "key must be non-empty alphabetic",
            ));
        }

        let shifts = key.to_ascii_uppercase().bytes().map(|b| b - b'A').collect();
        Ok(Self { shifts })
    }

    pub fn key(&self) -> String {
        self.shifts.iter().map(|s| (b'A' + s) as char).collect()
    }

    fn apply(&self, input: &str, forward: bool) -> String {
        let mut key_idx = 0;
        input
            .chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return c;
                }
                let shift = self.shifts[key_idx % self.shifts.len()];
                key_idx += 1;
                if forward {
                    shift_letter(c, shift)
                } else {
                    shift_letter(c, 26 - shift)
                }
            })
            .collect()
    }
}

impl Cipher for Vigenere {
    fn kind(&self) -> CipherKind {
        CipherKind::Vigenere
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, true))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, false))
    }

    fn parameters(&self) -> Value {
        json!({ "keyLength": self.shifts.len() })
    }
}
