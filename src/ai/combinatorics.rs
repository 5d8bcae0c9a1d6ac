//! Iterative index generators for rack search.
//!
//! Both yield index vectors in lexicographic order, so the order moves are
//! generated in (and therefore tie-breaking) is fixed.

use crate::game::rack::Rack;
use std::collections::HashSet;

/// `k`-subsets of `0..n` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Orderings of `0..k` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations {
    pending: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(k: usize) -> Self {
        Permutations {
            pending: Some((0..k).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        let mut following = current.clone();
        if next_permutation(&mut following) {
            self.pending = Some(following);
        }
        Some(current)
    }
}

fn next_permutation(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }

    let mut i = order.len() - 1;
    while i > 0 && order[i - 1] >= order[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = order.len() - 1;
    while order[j] <= order[i - 1] {
        j -= 1;
    }
    order.swap(i - 1, j);
    order[i..].reverse();
    true
}

/// Every distinct string the rack can spell with `2..=max_len` tiles, in
/// generation order: length, then subset, then ordering.
pub fn candidate_words(rack: &Rack, max_len: usize) -> Vec<String> {
    let letters: Vec<char> = rack.tiles().iter().map(|t| t.letter).collect();
    let longest = max_len.min(letters.len());

    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for length in 2..=longest {
        for subset in Combinations::new(letters.len(), length) {
            for order in Permutations::new(length) {
                let word: String = order.iter().map(|&i| letters[subset[i]]).collect();
                if seen.insert(word.clone()) {
                    words.push(word);
                }
            }
        }
    }

    words
}
