//! Cryptanalysis Tools
//!
//! Letter frequencies, Index of Coincidence, Chi-squared against English

use std::collections::BTreeMap;

/// English letter frequencies in percent, A..Z
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// IoC of typical English prose
pub const ENGLISH_IC: f64 = 0.067;

/// Uppercased ASCII letters of `text` as alphabet indices (A = 0)
pub(crate) fn letter_indices(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect()
}

pub(crate) fn count_letters<I: IntoIterator<Item = u8>>(letters: I) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for l in letters {
        counts[l as usize] += 1;
    }
    counts
}

/// `Σ c(c-1) / n(n-1)`, 0 for fewer than two letters
pub fn index_of_coincidence(counts: &[usize; 26]) -> f64 {
    let n: usize = counts.iter().sum();
    if n < 2 {
        return 0.0;
    }
    let sum: usize = counts.iter().map(|&c| c * c.saturating_sub(1)).sum();
    sum as f64 / (n * (n - 1)) as f64
}

/// Chi-squared of observed counts against the English distribution
pub fn chi_squared(counts: &[usize; 26]) -> f64 {
    let n: usize = counts.iter().sum();
    if n == 0 {
        return 0.0;
    }
    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&observed, &pct)| {
            let expected = pct / 100.0 * n as f64;
            (observed as f64 - expected).powi(2) / expected
        })
        .sum()
}

/// Frequency analysis for cryptanalysis
#[derive(Debug, Clone)]
pub struct FrequencyAnalysis {
    pub frequencies: BTreeMap<char, usize>,
    pub total_chars: usize,
}

impl FrequencyAnalysis {
    /// Count the letters of `text`, case-insensitively
    pub fn analyze(text: &str) -> Self {
        let mut frequencies = BTreeMap::new();
        let mut total_chars = 0;

        for l in letter_indices(text) {
            *frequencies.entry((b'A' + l) as char).or_insert(0) += 1;
            total_chars += 1;
        }

        Self {
            frequencies,
            total_chars,
        }
    }

    fn counts(&self) -> [usize; 26] {
        let mut counts = [0usize; 26];
        for (&c, &n) in &self.frequencies {
            counts[(c as u8 - b'A') as usize] = n;
        }
        counts
    }

    pub fn count(&self, c: char) -> usize {
        *self
            .frequencies
            .get(&c.to_ascii_uppercase())
            .unwrap_or(&0)
    }

    /// Get frequency as percentage
    pub fn frequency_percent(&self, c: char) -> f64 {
        if self.total_chars > 0 {
            (self.count(c) as f64 / self.total_chars as f64) * 100.0
        } else {
            0.0
        }
    }

    /// English text ≈ 0.067, random ≈ 0.038
    pub fn index_of_coincidence(&self) -> f64 {
        index_of_coincidence(&self.counts())
    }

    /// Lower means closer to English
    pub fn chi_squared_english(&self) -> f64 {
        chi_squared(&self.counts())
    }

    /// Get top N most frequent characters, ties in alphabetical order
    pub fn top_chars(&self, n: usize) -> Vec<(char, usize)> {
        let mut sorted: Vec<_> = self.frequencies.iter().map(|(&c, &n)| (c, n)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }

    /// Histogram of observed letters next to the English baseline
    pub fn render_ascii(&self) -> String {
        const BAR_WIDTH: f64 = 30.0;
        let peak = self.frequencies.values().copied().max().unwrap_or(0).max(1);

        let mut out = format!("LETTER FREQUENCIES ({} letters)\n", self.total_chars);
        out.push_str("    seen  english\n");
        for (c, english) in ('A'..='Z').zip(ENGLISH_FREQUENCIES) {
            let width = (self.count(c) as f64 / peak as f64 * BAR_WIDTH).round() as usize;
            out.push_str(&format!(
                "{} {:6.2}% {:6.2}%  {}\n",
                c,
                self.frequency_percent(c),
                english,
                "█".repeat(width)
            ));
        }
        out.push_str(&format!(
            "\nIoC {:.4} (English {:.3}), chi-squared {:.2}",
            self.index_of_coincidence(),
            ENGLISH_IC,
            self.chi_squared_english()
        ));
        out
    }
}
