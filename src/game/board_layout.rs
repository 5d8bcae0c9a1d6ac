use serde::{Deserialize, Serialize};

/// Premium attached to a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Multiplier {
    None,
    Letter(u32),
    Word(u32),
}

impl Multiplier {
    /// Factor applied to a newly placed letter's value.
    pub fn letter_factor(self) -> u32 {
        match self {
            Multiplier::Letter(value) => value,
            _ => 1,
        }
    }

    /// Factor folded into the word total when a new letter lands here.
    pub fn word_factor(self) -> u32 {
        match self {
            Multiplier::Word(value) => value,
            _ => 1,
        }
    }
}

const TRIPLE_WORD: [(usize, usize); 8] = [
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

const TRIPLE_LETTER: [(usize, usize); 12] = [
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

const DOUBLE_LETTER: [(usize, usize); 24] = [
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

fn is_double_word(row: usize, col: usize) -> bool {
    let on_diagonal = row == col || row + col == 14;
    let in_band = (1..=4).contains(&row) || (10..=13).contains(&row);
    (on_diagonal && in_band) || (row == 7 && col == 7)
}

/// Premium of the cell at `(row, col)` on the standard 15x15 layout.
pub fn board_multiplier(row: usize, col: usize) -> Multiplier {
    if TRIPLE_WORD.contains(&(row, col)) {
        Multiplier::Word(3)
    } else if is_double_word(row, col) {
        Multiplier::Word(2)
    } else if TRIPLE_LETTER.contains(&(row, col)) {
        Multiplier::Letter(3)
    } else if DOUBLE_LETTER.contains(&(row, col)) {
        Multiplier::Letter(2)
    } else {
        Multiplier::None
    }
}
