//! Caesar cipher

use serde_json::{json, Value};

use super::{shift_letter, Cipher};
use crate::{CipherKind, Error, Result};

pub struct Caesar {
    shift: u8,
}

impl Caesar {
    pub fn new(shift: i64) -> Result<Self> {
        if !(0..=25).contains(&shift) {
            return Err(Error::invalid_config(
                CipherKind::Caesar,
                format!("shift must be between 0 and 25, got {}", shift),
            ));
        }
        Ok(Self { shift: shift as u8 })
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub(crate) fn apply(input: &str, shift: u8) -> String {
        input.chars().map(|c| shift_letter(c, shift)).collect()
    }
}

impl Cipher for Caesar {
    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(Self::apply(text, self.shift))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(Self::apply(text, (26 - self.shift % 26) % 26))
    }

    fn parameters(&self) -> Value {
        json!({ "shift": self.shift })
    }
}
