//! TF-IDF vectors over a small in-memory corpus.
//!
//! ```text
//! tf(t, d)  = raw count of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, d)   = tf(t, d) * idf(t), then each row is L2-normalized
//! ```
//!
//! Rows are unit length, so the cosine of two rows is their dot product.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

// Two or more word characters, same rule as the usual scikit-style default.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w\w+\b").unwrap());

pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse row: `(term index, weight)` sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, wi) = self.entries[i];
            let (tj, wj) = other.entries[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Cosine of the angle between two rows; 0.0 when either is all zeros.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(other) / denom
    }
}

/// Vocabulary, idf weights and one normalized row per fitted document.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<SparseVector>,
}

impl TfidfModel {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for idx in unique {
                doc_freq[idx] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut model = Self { vocabulary, idf, rows: Vec::new() };
        let rows = tokenized.iter().map(|tokens| model.weigh(tokens)).collect();
        model.rows = rows;
        model
    }

    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }
        SparseVector { entries }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn row(&self, idx: usize) -> Option<&SparseVector> {
        self.rows.get(idx)
    }

    /// Cosine similarity of row `idx` against every row, in row order (1×N).
    pub fn similarities_to(&self, idx: usize) -> Vec<f64> {
        let Some(query) = self.rows.get(idx) else {
            return Vec::new();
        };
        self.rows.iter().map(|row| query.cosine(row)).collect()
    }
}
