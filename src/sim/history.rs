//! Per-pair overlap memory
//!
//! Stores the penetration depth each unordered pair had the last frame it
//! was found overlapping (zero once it stops overlapping). Only one entry
//! exists per pair, so `get(i, j)` and `get(j, i)` always agree.

use serde::{Deserialize, Serialize};

/// Flattened strict lower triangle of an `n × n` symmetric matrix
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapHistory {
    n: usize,
    depths: Vec<f32>,
}

impl OverlapHistory {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            depths: vec![0.0; n * n.saturating_sub(1) / 2],
        }
    }

    /// Number of circles this history covers (matrix dimension)
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Number of unordered pairs stored
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.depths.len()
    }

    /// Rebuild for `n` circles with every entry cleared
    pub fn reset(&mut self, n: usize) {
        self.n = n;
        self.depths.clear();
        self.depths.resize(n * n.saturating_sub(1) / 2, 0.0);
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i != j, "a circle has no pair with itself");
        debug_assert!(i < self.n && j < self.n, "pair ({i}, {j}) out of range");
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        hi * (hi - 1) / 2 + lo
    }

    /// Depth recorded for the pair, or 0 if it was not overlapping
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.depths[self.index(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, depth: f32) {
        let idx = self.index(i, j);
        self.depths[idx] = depth;
    }

    #[inline]
    pub fn clear_pair(&mut self, i: usize, j: usize) {
        self.set(i, j, 0.0);
    }

    /// True when no pair has a recorded overlap
    pub fn is_clear(&self) -> bool {
        self.depths.iter().all(|&d| d == 0.0)
    }

    /// Number of pairs with a recorded overlap
    pub fn active_pairs(&self) -> usize {
        self.depths.iter().filter(|&&d| d != 0.0).count()
    }
}
