//! Rail Fence cipher
//!
//! Whitespace is removed before encryption and cannot be restored.

use serde_json::{json, Value};

use super::Cipher;
use crate::{CipherKind, Error, Result};

pub struct RailFence {
    rails: usize,
}

impl RailFence {
    pub fn new(rails: usize) -> Result<Self> {
        if rails < 2 {
            return Err(Error::invalid_config(
                CipherKind::RailFence,
                format!("rails must be >= 2, got {}", rails),
            ));
        }
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Rail index of every position when walking the zig-zag
    fn zigzag(&self, len: usize) -> Vec<usize> {
        let cycle = 2 * (self.rails - 1);
        (0..len)
            .map(|i| {
                let step = i % cycle;
                if step < self.rails {
                    step
                } else {
                    cycle - step
                }
            })
            .collect()
    }
}

fn strip_whitespace(input: &str) -> Vec<char> {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

impl Cipher for RailFence {
    fn kind(&self) -> CipherKind {
        CipherKind::RailFence
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let chars = strip_whitespace(text);
        let pattern = self.zigzag(chars.len());
        let mut fence: Vec<Vec<char>> = vec![Vec::new(); self.rails];

        for (c, rail) in chars.into_iter().zip(pattern) {
            fence[rail].push(c);
        }

        Ok(fence.into_iter().flatten().collect())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let chars = strip_whitespace(text);
        let pattern = self.zigzag(chars.len());

        let mut lengths = vec![0usize; self.rails];
        for &rail in &pattern {
            lengths[rail] += 1;
        }

        // Cut the ciphertext into rows
        let mut rows = Vec::with_capacity(self.rails);
        let mut rest = chars.as_slice();
        for len in lengths {
            let (row, tail) = rest.split_at(len);
            rows.push(row.iter());
            rest = tail;
        }

        // Read off
        let mut result = String::with_capacity(chars.len());
        for rail in pattern {
            if let Some(&c) = rows[rail].next() {
                result.push(c);
            }
        }

        Ok(result)
    }

    fn parameters(&self) -> Value {
        json!({ "rails": self.rails })
    }
}
