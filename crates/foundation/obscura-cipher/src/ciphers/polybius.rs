//! Polybius square
//!
//! Letters become 1-indexed row/column digit pairs in a 5x5 grid. The default
//! grid drops J, which is written as I. A custom grid is any arrangement of 25
//! distinct letters; the one letter it leaves out is folded into I when it is
//! J and dropped otherwise.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::{json, Value};

use super::Cipher;
use crate::{CipherKind, Error, Result};

pub const DEFAULT_GRID: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

const SIZE: usize = 5;

lazy_static! {
    static ref DEFAULT_SQUARE: Square = Square::build(DEFAULT_GRID.chars().collect());
}

#[derive(Debug)]
struct Square {
    cells: Vec<char>,
    coords: HashMap<char, (usize, usize)>,
}

impl Square {
    /// `cells` must already hold 25 distinct uppercase letters
    fn build(cells: Vec<char>) -> Self {
        let mut coords: HashMap<char, (usize, usize)> = cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, (i / SIZE + 1, i % SIZE + 1)))
            .collect();

        if !coords.contains_key(&'J') {
            if let Some(&at) = coords.get(&'I') {
                coords.insert('J', at);
            }
        }

        Self { cells, coords }
    }

    fn parse(grid: &str) -> Result<Self> {
        let cells: Vec<char> = grid
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if cells.len() != SIZE * SIZE {
            return Err(Error::invalid_config(
                CipherKind::Polybius,
                format!("grid must contain 25 letters, got {}", cells.len()),
            ));
        }
        if let Some(bad) = cells.iter().find(|c| !c.is_ascii_uppercase()) {
            return Err(Error::invalid_config(
                CipherKind::Polybius,
                format!("grid may only contain letters, found {:?}", bad),
            ));
        }
        for (i, c) in cells.iter().enumerate() {
            if cells[..i].contains(c) {
                return Err(Error::invalid_config(
                    CipherKind::Polybius,
                    format!("grid repeats the letter {}", c),
                ));
            }
        }

        Ok(Self::build(cells))
    }

    fn letter_at(&self, row: u32, col: u32) -> Option<char> {
        let (row, col) = (row as usize, col as usize);
        if (1..=SIZE).contains(&row) && (1..=SIZE).contains(&col) {
            self.cells.get((row - 1) * SIZE + (col - 1)).copied()
        } else {
            None
        }
    }
}

enum Grid {
    Default,
    Custom(Square),
}

pub struct Polybius {
    grid: Grid,
}

impl Polybius {
    pub fn new(grid: Option<&str>) -> Result<Self> {
        let grid = match grid {
            None => Grid::Default,
            Some(custom) => Grid::Custom(Square::parse(custom)?),
        };
        Ok(Self { grid })
    }

    fn square(&self) -> &Square {
        match &self.grid {
            Grid::Default => &*DEFAULT_SQUARE,
            Grid::Custom(square) => square,
        }
    }
}

impl Cipher for Polybius {
    fn kind(&self) -> CipherKind {
        CipherKind::Polybius
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let square = self.square();
        Ok(text
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_uppercase())
            .filter_map(|c| square.coords.get(&c))
            .map(|(row, col)| format!("{}{}", row, col))
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();

        if digits.len() % 2 != 0 {
            return Err(Error::LengthMismatch {
                cipher: CipherKind::Polybius,
                found: digits.len(),
                multiple: 2,
            });
        }

        let square = self.square();
        Ok(digits
            .chunks(2)
            .map(|pair| square.letter_at(pair[0], pair[1]).unwrap_or('?'))
            .collect())
    }

    fn parameters(&self) -> Value {
        match &self.grid {
            Grid::Default => json!({ "grid": "default" }),
            Grid::Custom(square) => json!({ "grid": square.cells.iter().collect::<String>() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polybius() {
        let cipher = Polybius::new(None).unwrap();
        let encrypted = cipher.encrypt("CAB").unwrap();
        assert_eq!(encrypted, "13 11 12");
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "CAB");
    }

    #[test]
    fn test_i_and_j_share_a_cell() {
        let cipher = Polybius::new(None).unwrap();
        assert_eq!(cipher.encrypt("I").unwrap(), "24");
        assert_eq!(cipher.encrypt("J").unwrap(), "24");
        assert_eq!(cipher.decrypt("24").unwrap(), "I");
        assert_eq!(cipher.encrypt("Z").unwrap(), "55");
    }

    #[test]
    fn test_strips_non_letters() {
        let cipher = Polybius::new(None).unwrap();
        assert_eq!(cipher.encrypt("a-b c").unwrap(), "11 12 13");
        assert_eq!(cipher.decrypt("111213").unwrap(), "ABC");
    }

    #[test]
    fn test_odd_digit_count() {
        let cipher = Polybius::new(None).unwrap();
        match cipher.decrypt("13 1") {
            Err(Error::LengthMismatch { found, multiple, .. }) => {
                assert_eq!(found, 3);
                assert_eq!(multiple, 2);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_pair_is_placeholder() {
        let cipher = Polybius::new(None).unwrap();
        assert_eq!(cipher.decrypt("11 66 09").unwrap(), "A??");
    }

    #[test]
    fn test_custom_grid() {
        let cipher = Polybius::new(Some("ZYXWVUTSRQPONMLKIHGFEDCBA")).unwrap();
        assert_eq!(cipher.encrypt("ZA").unwrap(), "11 55");
        assert_eq!(cipher.decrypt("11 55").unwrap(), "ZA");
        assert_eq!(cipher.encrypt("J").unwrap(), cipher.encrypt("I").unwrap());
    }

    #[test]
    fn test_custom_grid_validation() {
        assert!(Polybius::new(Some("ABC")).is_err());
        assert!(Polybius::new(Some("AACDEFGHIKLMNOPQRSTUVWXYZ")).is_err());
        assert!(Polybius::new(Some("ABCDEFGHIKLMNOPQRSTUVWXY1")).is_err());
    }
}
