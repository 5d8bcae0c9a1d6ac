use crate::game::distribution::letter_score;
use serde::{Deserialize, Serialize};

/// Letter used for the two zero-value blank tiles.
pub const BLANK: char = '_';

#[derive(Debug, Clone, PartialEq, Copy, Hash, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub score: u32,
}

impl Tile {
    /// Build a tile whose score comes from the distribution table.
    pub fn new(letter: char) -> Self {
        Tile {
            letter,
            score: letter_score(letter),
        }
    }
}
