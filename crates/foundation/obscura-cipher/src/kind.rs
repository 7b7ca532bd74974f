//! Cipher type names
//!
//! The closed set of algorithms the engine knows about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// All supported cipher types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    Vigenere,
    Atbash,
    Base64,
    Baconian,
    Polybius,
    RailFence,
    Morse,
}

impl CipherKind {
    /// Registry order, as reported by `CipherEngine::available_ciphers`
    pub const ALL: [CipherKind; 8] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::Atbash,
        CipherKind::Base64,
        CipherKind::Baconian,
        CipherKind::Polybius,
        CipherKind::RailFence,
        CipherKind::Morse,
    ];

    /// Canonical type name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Atbash => "atbash",
            CipherKind::Base64 => "base64",
            CipherKind::Baconian => "baconian",
            CipherKind::Polybius => "polybius",
            CipherKind::RailFence => "railfence",
            CipherKind::Morse => "morse",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "Caesar Cipher",
            CipherKind::Vigenere => "Vigenère Cipher",
            CipherKind::Atbash => "Atbash Cipher",
            CipherKind::Base64 => "Base64 Encoding",
            CipherKind::Baconian => "Baconian Cipher",
            CipherKind::Polybius => "Polybius Square",
            CipherKind::RailFence => "Rail Fence Cipher",
            CipherKind::Morse => "Morse Code",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "Shifts every letter a fixed number of places down the alphabet",
            CipherKind::Vigenere => "Shifts letters by a repeating keyword",
            CipherKind::Atbash => "Mirrors the alphabet: A becomes Z, B becomes Y",
            CipherKind::Base64 => "Encodes 8-bit characters as printable Base64 text",
            CipherKind::Baconian => "Replaces each letter with a five-symbol A/B group",
            CipherKind::Polybius => "Replaces each letter with its row and column in a 5x5 grid",
            CipherKind::RailFence => "Writes letters in a zig-zag over several rails and reads row by row",
            CipherKind::Morse => "Replaces characters with dot and dash sequences",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            CipherKind::Caesar | CipherKind::Atbash => "Substitution",
            CipherKind::Vigenere => "Polyalphabetic",
            CipherKind::Base64 => "Encoding",
            CipherKind::RailFence => "Transposition",
            CipherKind::Baconian | CipherKind::Polybius | CipherKind::Morse => "Symbol",
        }
    }

    pub fn info(&self) -> CipherInfo {
        CipherInfo {
            kind: *self,
            name: self.name(),
            description: self.description(),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(CipherKind::Caesar),
            "vigenere" => Ok(CipherKind::Vigenere),
            "atbash" => Ok(CipherKind::Atbash),
            "base64" => Ok(CipherKind::Base64),
            "baconian" => Ok(CipherKind::Baconian),
            "polybius" => Ok(CipherKind::Polybius),
            "railfence" | "rail_fence" | "rail-fence" => Ok(CipherKind::RailFence),
            "morse" => Ok(CipherKind::Morse),
            _ => Err(Error::UnknownCipher(s.to_string())),
        }
    }
}

/// Entry in the list of available ciphers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherInfo {
    #[serde(rename = "type")]
    pub kind: CipherKind,
    pub name: &'static str,
    pub description: &'static str,
}
