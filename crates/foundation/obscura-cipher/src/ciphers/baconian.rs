//! Baconian cipher
//!
//! Each letter becomes a five-symbol A/B group. The table follows Bacon's
//! 24-letter alphabet: I/J share a group and so do U/V. The reverse map is
//! built by walking the table in order, so those groups decode to J and V.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::Cipher;
use crate::{CipherKind, Error, Result};

const GROUP_LEN: usize = 5;

const TABLE: [(char, &str); 26] = [
    ('A', "AAAAA"), ('B', "AAAAB"), ('C', "AAABA"), ('D', "AAABB"),
    ('E', "AABAA"), ('F', "AABAB"), ('G', "AABBA"), ('H', "AABBB"),
    ('I', "ABAAA"), ('J', "ABAAA"), ('K', "ABAAB"), ('L', "ABABA"),
    ('M', "ABABB"), ('N', "ABBAA"), ('O', "ABBAB"), ('P', "ABBBA"),
    ('Q', "ABBBB"), ('R', "BAAAA"), ('S', "BAAAB"), ('T', "BAABA"),
    ('U', "BAABB"), ('V', "BAABB"), ('W', "BABAA"), ('X', "BABAB"),
    ('Y', "BABBA"), ('Z', "BABBB"),
];

lazy_static! {
    static ref REVERSE: HashMap<&'static str, char> = {
        let mut map = HashMap::new();
        for &(letter, group) in TABLE.iter() {
            map.insert(group, letter);
        }
        map
    };
}

pub struct Baconian;

impl Cipher for Baconian {
    fn kind(&self) -> CipherKind {
        CipherKind::Baconian
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(text
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_uppercase())
            .map(|c| TABLE[(c as u8 - b'A') as usize].1)
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let symbols: Vec<char> = text
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|&c| c == 'A' || c == 'B')
            .collect();

        if symbols.len() % GROUP_LEN != 0 {
            return Err(Error::LengthMismatch {
                cipher: CipherKind::Baconian,
                found: symbols.len(),
                multiple: GROUP_LEN,
            });
        }

        Ok(symbols
            .chunks(GROUP_LEN)
            .map(|chunk| {
                let group: String = chunk.iter().collect();
                REVERSE.get(group.as_str()).copied().unwrap_or('?')
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baconian() {
        let encrypted = Baconian.encrypt("Hello").unwrap();
        assert_eq!(encrypted, "AABBB AABAA ABABA ABABA ABBAB");
        assert_eq!(Baconian.decrypt(&encrypted).unwrap(), "HELLO");
    }

    #[test]
    fn test_strips_non_letters() {
        assert_eq!(Baconian.encrypt("a b!").unwrap(), "AAAAA AAAAB");
        assert_eq!(Baconian.decrypt("AAAAAAAAAB").unwrap(), "AB");
    }

    #[test]
    fn test_shared_groups_decode_to_later_letter() {
        assert_eq!(Baconian.encrypt("I").unwrap(), Baconian.encrypt("J").unwrap());
        assert_eq!(Baconian.encrypt("U").unwrap(), Baconian.encrypt("V").unwrap());
        assert_eq!(Baconian.decrypt("ABAAA BAABB").unwrap(), "JV");
    }

    #[test]
    fn test_length_mismatch() {
        match Baconian.decrypt("AABBB AAB") {
            Err(Error::LengthMismatch { found, multiple, .. }) => {
                assert_eq!(found, 8);
                assert_eq!(multiple, 5);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_group_is_placeholder() {
        assert_eq!(Baconian.decrypt("BBBBB AAAAA").unwrap(), "?A");
    }
}
