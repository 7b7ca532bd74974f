//! Atbash cipher
//!
//! Self-inverse. Text is uppercased before mapping in both directions, so
//! lowercase input comes back uppercase.

use super::Cipher;
use crate::{CipherKind, Result};

pub struct Atbash;

impl Atbash {
    pub(crate) fn transform(input: &str) -> String {
        input
            .to_uppercase()
            .chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    (b'Z' - (c as u8 - b'A')) as char
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Cipher for Atbash {
    fn kind(&self) -> CipherKind {
        CipherKind::Atbash
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(Self::transform(text))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(Self::transform(text))
    }
}
