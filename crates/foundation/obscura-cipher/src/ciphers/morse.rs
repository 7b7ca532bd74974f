//! Morse code
//!
//! Lossy in both directions: characters without a code are dropped on
//! encrypt, unknown codes are dropped on decrypt.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::{json, Value};

use super::Cipher;
use crate::{CipherKind, Error, Result};

pub const DEFAULT_LETTER_SEPARATOR: &str = " ";
pub const DEFAULT_WORD_SEPARATOR: &str = " / ";

const TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."),
    ('E', "."), ('F', "..-."), ('G', "--."), ('H', "...."),
    ('I', ".."), ('J', ".---"), ('K', "-.-"), ('L', ".-.."),
    ('M', "--"), ('N', "-."), ('O', "---"), ('P', ".--."),
    ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"),
    ('Y', "-.--"), ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"),
    ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."),
    ('8', "---.."), ('9', "----."),
    ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('\'', ".----."),
    ('!', "-.-.--"), ('/', "-..-."), ('(', "-.--."), (')', "-.--.-"),
    ('&', ".-..."), (':', "---..."), (';', "-.-.-."), ('=', "-...-"),
    ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"), ('"', ".-..-."),
    ('$', "...-..-"), ('@', ".--.-."),
];

lazy_static! {
    static ref ENCODE: HashMap<char, &'static str> = TABLE.iter().copied().collect();
    static ref DECODE: HashMap<&'static str, char> =
        TABLE.iter().map(|&(c, code)| (code, c)).collect();
}

pub struct Morse {
    letter_separator: String,
    word_separator: String,
}

impl Morse {
    pub fn new(letter_separator: Option<&str>, word_separator: Option<&str>) -> Result<Self> {
        let letter_separator = letter_separator.unwrap_or(DEFAULT_LETTER_SEPARATOR);
        let word_separator = word_separator.unwrap_or(DEFAULT_WORD_SEPARATOR);

        for (name, sep) in [("letter", letter_separator), ("word", word_separator)] {
            if sep.is_empty() {
                return Err(Error::invalid_config(
                    CipherKind::Morse,
                    format!("{} separator must not be empty", name),
                ));
            }
            if sep.contains(['.', '-']) {
                return Err(Error::invalid_config(
                    CipherKind::Morse,
                    format!("{} separator must not contain dots or dashes", name),
                ));
            }
        }
        if letter_separator == word_separator {
            return Err(Error::invalid_config(
                CipherKind::Morse,
                "letter and word separators must differ",
            ));
        }

        Ok(Self {
            letter_separator: letter_separator.to_string(),
            word_separator: word_separator.to_string(),
        })
    }
}

impl Cipher for Morse {
    fn kind(&self) -> CipherKind {
        CipherKind::Morse
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(text
            .to_uppercase()
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .filter_map(|c| ENCODE.get(&c).copied())
                    .collect::<Vec<_>>()
                    .join(&self.letter_separator)
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(&self.word_separator))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(text
            .split(self.word_separator.as_str())
            .map(|word| {
                word.split(self.letter_separator.as_str())
                    .map(str::trim)
                    .filter_map(|code| DECODE.get(code).copied())
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn parameters(&self) -> Value {
        json!({
            "letterSeparator": self.letter_separator,
            "wordSeparator": self.word_separator,
        })
    }
}
